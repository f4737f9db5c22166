use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::{ApiResponse, ErrorCode, sections::requests::UpdateSectionRequest};

pub async fn update_section(
    service: &SectionService,
    request: &HttpRequest,
    section_id: i64,
    update_data: UpdateSectionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_section(section_id, update_data).await {
        Ok(Some(section)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(section, "班级更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SectionNotFound,
            "班级不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Section update failed: {e}"),
            )),
        ),
    }
}
