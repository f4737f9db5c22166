use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, ReportScope,
    reports::requests::{ReportListQuery, ReportQueryParams},
    users::entities::UserRole,
};

pub async fn list_reports(
    service: &ReportService,
    request: &HttpRequest,
    query: ReportQueryParams,
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

    let scope = ReportScope::for_user(&user);

    let mut list_query = ReportListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        exported: query.exported,
        course_id: query.course_id,
        date_from: query.date_from,
        date_to: query.date_to,
    };

    // 列表筛选器只对导出员开放，其他角色传入的筛选参数一律忽略
    let is_exporter = UserRole::exporter_roles().contains(&&user.role);
    if !is_exporter {
        list_query.exported = None;
        list_query.course_id = None;
        list_query.date_from = None;
        list_query.date_to = None;
    }

    match storage.list_reports_with_pagination(list_query, scope).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Report list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve report list: {e}"),
            )),
        ),
    }
}
