pub mod choices;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::groups::requests::{CreateGroupRequest, GroupQueryParams, UpdateGroupRequest};
use crate::storage::Storage;

pub struct GroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl GroupService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取小组列表（按可见范围过滤）
    pub async fn list_groups(
        &self,
        request: &HttpRequest,
        query: GroupQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_groups(self, request, query).await
    }

    // 创建小组
    pub async fn create_group(
        &self,
        request: &HttpRequest,
        group_data: CreateGroupRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_group(self, request, group_data).await
    }

    // 获取小组详情（含内联成员）
    pub async fn get_group(
        &self,
        request: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_group(self, request, group_id).await
    }

    // 更新小组
    pub async fn update_group(
        &self,
        request: &HttpRequest,
        group_id: i64,
        update_data: UpdateGroupRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_group(self, request, group_id, update_data).await
    }

    // 删除小组
    pub async fn delete_group(
        &self,
        request: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_group(self, request, group_id).await
    }

    // 辅导教师下拉选项
    pub async fn list_instructor_choices(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        choices::list_instructor_choices(self, request).await
    }
}
