use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolService;
use crate::models::{ApiResponse, ErrorCode, schools::requests::UpdateSchoolRequest};

pub async fn update_school(
    service: &SchoolService,
    request: &HttpRequest,
    school_id: i64,
    update_data: UpdateSchoolRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_school(school_id, update_data).await {
        Ok(Some(school)) => Ok(HttpResponse::Ok().json(ApiResponse::success(school, "学校更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SchoolNotFound,
            "学校不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("School update failed: {e}"),
            )),
        ),
    }
}
