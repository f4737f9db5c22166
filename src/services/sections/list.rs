use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::{
    ApiResponse, ErrorCode,
    sections::requests::{SectionListQuery, SectionQueryParams},
};

pub async fn list_sections(
    service: &SectionService,
    request: &HttpRequest,
    query: SectionQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = SectionListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        course_id: query.course_id,
        school_id: query.school_id,
        search: query.search,
    };

    match storage.list_sections_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Section list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve section list: {e}"),
            )),
        ),
    }
}
