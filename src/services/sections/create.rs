use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SectionService;
use crate::models::{ApiResponse, ErrorCode, sections::requests::CreateSectionRequest};

pub async fn create_section(
    service: &SectionService,
    request: &HttpRequest,
    section_data: CreateSectionRequest,
) -> ActixResult<HttpResponse> {
    if section_data.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "班级代码不能为空",
        )));
    }

    let storage = service.get_storage(request);

    // 校验课程与学校存在
    match storage.get_school_by_id(section_data.school_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SchoolNotFound,
                "学校不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学校失败: {e}"),
                )),
            );
        }
    }

    match storage.create_section(section_data).await {
        Ok(section) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(section, "班级创建成功")))
        }
        Err(e) => {
            error!("Section creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Section creation failed: {e}"),
                )),
            )
        }
    }
}
