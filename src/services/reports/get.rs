use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, ReportScope,
    reports::responses::ReportResponse,
};

pub async fn get_report(
    service: &ReportService,
    request: &HttpRequest,
    report_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user",
            )));
        }
    };

    // 范围外的报告一律视为不存在
    match storage.get_report_scope_keys(report_id).await {
        Ok(Some((instructor_id, school_id))) => {
            if !ReportScope::for_user(&user).allows(instructor_id, school_id) {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ReportNotFound,
                    "报告不存在",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ReportNotFound,
                "报告不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询报告失败: {e}"),
                )),
            );
        }
    }

    match storage.get_report_by_id(report_id).await {
        Ok(Some(report)) => {
            let students = storage
                .list_report_students(report.id)
                .await
                .unwrap_or_default();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ReportResponse { report, students },
                "Report retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReportNotFound,
            "报告不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve report: {e}"),
            )),
        ),
    }
}
