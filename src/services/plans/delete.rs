use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PlanService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, OwnerScope};

pub async fn delete_plan(
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

    // 范围校验：只能删除可见的计划
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

    match storage.delete_plan(plan_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("计划删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PlanNotFound,
            "计划不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Plan delete failed: {e}"),
            )),
        ),
    }
}
