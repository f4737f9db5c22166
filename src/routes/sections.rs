use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::sections::requests::{
    CreateSectionRequest, SectionQueryParams, UpdateSectionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::SectionService;
use crate::utils::SafeIdI64;

// 懒加载的全局 SECTION_SERVICE 实例
static SECTION_SERVICE: Lazy<SectionService> = Lazy::new(SectionService::new_lazy);

// HTTP处理程序
pub async fn list_sections(
    req: HttpRequest,
    query: web::Query<SectionQueryParams>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .list_sections(&req, query.into_inner())
        .await
}

pub async fn create_section(
    req: HttpRequest,
    section_data: web::Json<CreateSectionRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .create_section(&req, section_data.into_inner())
        .await
}

pub async fn update_section(
    req: HttpRequest,
    section_id: SafeIdI64,
    update_data: web::Json<UpdateSectionRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .update_section(&req, section_id.0, update_data.into_inner())
        .await
}

pub async fn delete_section(req: HttpRequest, section_id: SafeIdI64) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.delete_section(&req, section_id.0).await
}

// 配置路由（基础数据仅管理员可维护）
pub fn configure_section_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sections")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_sections))
                            .route(web::post().to(create_section)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(update_section))
                            .route(web::delete().to(delete_section)),
                    ),
            ),
    );
}
