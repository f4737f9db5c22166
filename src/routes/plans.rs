use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::plans::requests::{CreatePlanRequest, PlanQueryParams, UpdatePlanRequest};
use crate::services::PlanService;
use crate::utils::SafePlanIdI64;

// 懒加载的全局 PLAN_SERVICE 实例
static PLAN_SERVICE: Lazy<PlanService> = Lazy::new(PlanService::new_lazy);

// HTTP处理程序
pub async fn list_plans(
    req: HttpRequest,
    query: web::Query<PlanQueryParams>,
) -> ActixResult<HttpResponse> {
    PLAN_SERVICE.list_plans(&req, query.into_inner()).await
}

pub async fn create_plan(
    req: HttpRequest,
    plan_data: web::Json<CreatePlanRequest>,
) -> ActixResult<HttpResponse> {
    PLAN_SERVICE.create_plan(&req, plan_data.into_inner()).await
}

pub async fn get_plan(req: HttpRequest, plan_id: SafePlanIdI64) -> ActixResult<HttpResponse> {
    PLAN_SERVICE.get_plan(&req, plan_id.0).await
}

pub async fn update_plan(
    req: HttpRequest,
    plan_id: SafePlanIdI64,
    update_data: web::Json<UpdatePlanRequest>,
) -> ActixResult<HttpResponse> {
    PLAN_SERVICE
        .update_plan(&req, plan_id.0, update_data.into_inner())
        .await
}

pub async fn delete_plan(req: HttpRequest, plan_id: SafePlanIdI64) -> ActixResult<HttpResponse> {
    PLAN_SERVICE.delete_plan(&req, plan_id.0).await
}

// 配置路由
//
// 可见范围在服务层收敛：管理员看全部，其余只看自己的计划
pub fn configure_plan_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/plans")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_plans))
                    .route(web::post().to(create_plan)),
            )
            .service(
                web::resource("/{plan_id}")
                    .route(web::get().to(get_plan))
                    .route(web::put().to(update_plan))
                    .route(web::delete().to(delete_plan)),
            ),
    );
}
