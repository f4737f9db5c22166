//! 路径参数安全提取器
//!
//! 将路径中的数字 ID 解析为 i64，非法值直接返回 400，
//! 避免在每个处理程序里重复解析逻辑。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 定义按路径参数名提取 i64 的 newtype 提取器
macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|v| v.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                match parsed {
                    Some(id) => ready(Ok($name(id))),
                    None => {
                        let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::BadRequest,
                            concat!("Invalid path parameter: ", $param),
                        ));
                        ready(Err(InternalError::from_response(
                            concat!("Invalid path parameter: ", $param),
                            response,
                        )
                        .into()))
                    }
                }
            }
        }
    };
}

define_safe_id_extractor!(SafeIdI64, "id");
define_safe_id_extractor!(SafeUserIdI64, "user_id");
define_safe_id_extractor!(SafeGroupIdI64, "group_id");
define_safe_id_extractor!(SafePlanIdI64, "plan_id");
define_safe_id_extractor!(SafeReportIdI64, "report_id");
