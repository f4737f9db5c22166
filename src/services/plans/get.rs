use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PlanService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, OwnerScope, plans::responses::PlanResponse};

pub async fn get_plan(
    service: &PlanService,
    request: &HttpRequest,
    plan_id: i64,
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

    match storage.get_plan_by_id(plan_id).await {
        // 范围外的对象一律视为不存在
        Ok(Some(plan)) => {
            if !OwnerScope::for_user(&user).allows_instructor(plan.instructor_id) {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::PlanNotFound,
                    "计划不存在",
                )));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                PlanResponse { plan },
                "Plan retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PlanNotFound,
            "计划不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve plan: {e}"),
            )),
        ),
    }
}
