use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, OwnerScope, PaginationInfo,
    groups::{
        requests::{GroupListQuery, GroupQueryParams},
        responses::GroupListResponse,
    },
};

pub async fn list_groups(
    service: &GroupService,
    request: &HttpRequest,
    query: GroupQueryParams,
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

    let mut list_query = GroupListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        section_id: query.section_id,
        instructor_id: None,
        search: query.search,
    };

    // 管理员看全部，其余只看自己名下的小组
    match OwnerScope::for_user(&user) {
        OwnerScope::All => {}
        OwnerScope::Instructor(instructor_id) => {
            list_query.instructor_id = Some(instructor_id);
        }
        OwnerScope::Nothing => {
            return Ok(HttpResponse::Ok().json(ApiResponse::success(
                GroupListResponse {
                    items: vec![],
                    pagination: PaginationInfo {
                        page: query.pagination.page,
                        page_size: query.pagination.size,
                        total: 0,
                        total_pages: 0,
                    },
                },
                "Group list retrieved successfully",
            )));
        }
    }

    match storage.list_groups_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Group list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve group list: {e}"),
            )),
        ),
    }
}
