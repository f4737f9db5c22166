use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PlanService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, OwnerScope, PaginationInfo,
    plans::{
        requests::{PlanListQuery, PlanQueryParams},
        responses::PlanListResponse,
    },
};

pub async fn list_plans(
    service: &PlanService,
    request: &HttpRequest,
    query: PlanQueryParams,
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

    let mut list_query = PlanListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        course_id: query.course_id,
        instructor_id: None,
        search: query.search,
    };

    // 计划没有导出员档次：管理员看全部，其余只看自己的
    match OwnerScope::for_user(&user) {
        OwnerScope::All => {}
        OwnerScope::Instructor(instructor_id) => {
            list_query.instructor_id = Some(instructor_id);
        }
        OwnerScope::Nothing => {
            return Ok(HttpResponse::Ok().json(ApiResponse::success(
                PlanListResponse {
                    items: vec![],
                    pagination: PaginationInfo {
                        page: query.pagination.page,
                        page_size: query.pagination.size,
                        total: 0,
                        total_pages: 0,
                    },
                },
                "Plan list retrieved successfully",
            )));
        }
    }

    match storage.list_plans_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Plan list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve plan list: {e}"),
            )),
        ),
    }
}
