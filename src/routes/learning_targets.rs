use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::learning_targets::requests::{
    CreateLearningTargetRequest, CreateStandardRequest, LearningTargetQueryParams,
    UpdateLearningTargetRequest, UpdateStandardRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::LearningTargetService;
use crate::utils::SafeIdI64;

// 懒加载的全局 LEARNING_TARGET_SERVICE 实例
static LEARNING_TARGET_SERVICE: Lazy<LearningTargetService> =
    Lazy::new(LearningTargetService::new_lazy);

// HTTP处理程序：学习目标
pub async fn list_targets(
    req: HttpRequest,
    query: web::Query<LearningTargetQueryParams>,
) -> ActixResult<HttpResponse> {
    LEARNING_TARGET_SERVICE
        .list_targets(&req, query.into_inner())
        .await
}

pub async fn create_target(
    req: HttpRequest,
    target_data: web::Json<CreateLearningTargetRequest>,
) -> ActixResult<HttpResponse> {
    LEARNING_TARGET_SERVICE
        .create_target(&req, target_data.into_inner())
        .await
}

pub async fn update_target(
    req: HttpRequest,
    target_id: SafeIdI64,
    update_data: web::Json<UpdateLearningTargetRequest>,
) -> ActixResult<HttpResponse> {
    LEARNING_TARGET_SERVICE
        .update_target(&req, target_id.0, update_data.into_inner())
        .await
}

pub async fn delete_target(req: HttpRequest, target_id: SafeIdI64) -> ActixResult<HttpResponse> {
    LEARNING_TARGET_SERVICE.delete_target(&req, target_id.0).await
}

// HTTP处理程序：课程标准
pub async fn list_standards(
    req: HttpRequest,
    query: web::Query<LearningTargetQueryParams>,
) -> ActixResult<HttpResponse> {
    LEARNING_TARGET_SERVICE
        .list_standards(&req, query.into_inner())
        .await
}

pub async fn create_standard(
    req: HttpRequest,
    standard_data: web::Json<CreateStandardRequest>,
) -> ActixResult<HttpResponse> {
    LEARNING_TARGET_SERVICE
        .create_standard(&req, standard_data.into_inner())
        .await
}

pub async fn update_standard(
    req: HttpRequest,
    standard_id: SafeIdI64,
    update_data: web::Json<UpdateStandardRequest>,
) -> ActixResult<HttpResponse> {
    LEARNING_TARGET_SERVICE
        .update_standard(&req, standard_id.0, update_data.into_inner())
        .await
}

pub async fn delete_standard(
    req: HttpRequest,
    standard_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    LEARNING_TARGET_SERVICE
        .delete_standard(&req, standard_id.0)
        .await
}

// 配置路由（基础数据仅管理员可维护）
pub fn configure_learning_target_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/learning-targets")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_targets))
                            .route(web::post().to(create_target)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(update_target))
                            .route(web::delete().to(delete_target)),
                    ),
            ),
    );

    cfg.service(
        web::scope("/api/v1/standards")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_standards))
                            .route(web::post().to(create_standard)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(update_standard))
                            .route(web::delete().to(delete_standard)),
                    ),
            ),
    );
}
