use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PlanService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, OwnerScope,
    plans::{requests::UpdatePlanRequest, responses::PlanResponse},
};

pub async fn update_plan(
    service: &PlanService,
    request: &HttpRequest,
    plan_id: i64,
    update_data: UpdatePlanRequest,
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

    // 范围校验：只能编辑可见的计划
    match storage.get_plan_by_id(plan_id).await {
        Ok(Some(plan)) => {
            if !OwnerScope::for_user(&user).allows_instructor(plan.instructor_id) {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::PlanNotFound,
                    "计划不存在",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PlanNotFound,
                "计划不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询计划失败: {e}"),
                )),
            );
        }
    }

    match storage.update_plan(plan_id, update_data).await {
        Ok(Some(plan)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PlanResponse { plan },
            "计划更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PlanNotFound,
            "计划不存在",
        ))),
        Err(e) => {
            error!("Plan update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Plan update failed: {e}"),
                )),
            )
        }
    }
}
