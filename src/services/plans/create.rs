use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PlanService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    plans::{requests::CreatePlanRequest, responses::PlanResponse},
    users::entities::UserRole,
};

pub async fn create_plan(
    service: &PlanService,
    request: &HttpRequest,
    plan_data: CreatePlanRequest,
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

    // 非管理员只能为自己创建计划
    let instructor_id = if user.role == UserRole::Admin {
        match plan_data.instructor_id {
            Some(id) => id,
            None => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "管理员创建计划必须指定辅导教师",
                )));
            }
        }
    } else {
        let own = match user.instructor.as_ref() {
            Some(own) => own.id,
            None => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::PlanPermissionDenied,
                    "当前账号没有辅导教师档案",
                )));
            }
        };
        if let Some(requested) = plan_data.instructor_id
            && requested != own
        {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PlanPermissionDenied,
                "只能创建自己的计划",
            )));
        }
        own
    };

    match storage.create_plan(instructor_id, plan_data).await {
        Ok(plan) => Ok(HttpResponse::Created().json(ApiResponse::success(
            PlanResponse { plan },
            "计划创建成功",
        ))),
        Err(e) => {
            error!("Plan creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Plan creation failed: {e}"),
                )),
            )
        }
    }
}
