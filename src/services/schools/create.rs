use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SchoolService;
use crate::models::{ApiResponse, ErrorCode, schools::requests::CreateSchoolRequest};

pub async fn create_school(
    service: &SchoolService,
    request: &HttpRequest,
    school_data: CreateSchoolRequest,
) -> ActixResult<HttpResponse> {
    if school_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "学校名称不能为空",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_school(school_data).await {
        Ok(school) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(school, "学校创建成功")))
        }
        Err(e) => {
            error!("School creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("School creation failed: {e}"),
                )),
            )
        }
    }
}
