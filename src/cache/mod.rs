//! 缓存层
//!
//! 通过注册表提供可插拔的对象缓存后端，当前内置 Moka（进程内）实现。
//! 认证中间件用它缓存 token 对应的用户对象。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    Error(String),
}

/// 对象缓存统一接口
#[async_trait]
pub trait ObjectCache: Send + Sync {
    /// 读取原始字符串值
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// 写入原始字符串值，ttl 单位为秒（0 表示使用后端默认策略）
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    /// 删除键
    async fn remove(&self, key: &str);

    /// 清空缓存
    async fn invalidate_all(&self);
}

/// 声明并注册一个对象缓存插件
///
/// 在插件模块中调用，进程启动时通过 ctor 自动注册到缓存注册表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $plugin:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let cache = <$plugin>::new().map_err(|e| {
                                $crate::errors::TutorTrackError::cache_connection(e)
                            })?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                    }),
                );
            }
        }
    };
}
