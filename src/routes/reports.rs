use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reports::requests::{
    CreateReportRequest, ExportReportsRequest, ReportQueryParams, UpdateReportRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ReportService;
use crate::utils::SafeReportIdI64;

// 懒加载的全局 REPORT_SERVICE 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn list_reports(
    req: HttpRequest,
    query: web::Query<ReportQueryParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.list_reports(&req, query.into_inner()).await
}

pub async fn create_report(
    req: HttpRequest,
    report_data: web::Json<CreateReportRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .create_report(&req, report_data.into_inner())
        .await
}

pub async fn get_report(req: HttpRequest, report_id: SafeReportIdI64) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.get_report(&req, report_id.0).await
}

pub async fn update_report(
    req: HttpRequest,
    report_id: SafeReportIdI64,
    update_data: web::Json<UpdateReportRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .update_report(&req, report_id.0, update_data.into_inner())
        .await
}

pub async fn delete_report(
    req: HttpRequest,
    report_id: SafeReportIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.delete_report(&req, report_id.0).await
}

pub async fn list_group_choices(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.list_group_choices(&req).await
}

pub async fn list_student_choices(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.list_student_choices(&req).await
}

pub async fn get_filters(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.get_filters(&req).await
}

pub async fn export_reports(
    req: HttpRequest,
    export_data: web::Json<ExportReportsRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .export_reports(&req, export_data.into_inner())
        .await
}

// 配置路由
//
// 可见范围在服务层收敛：管理员看全部，导出员看本校，辅导教师看本人；
// 导出动作只对导出员（及管理员）暴露，其他角色 403
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_reports))
                    .route(web::post().to(create_report)),
            )
            // 列表筛选器描述：非导出员得到空集合
            .route("/filters", web::get().to(get_filters))
            // 表单外键选项：非管理员收敛到本人名下
            .route("/choices/groups", web::get().to(list_group_choices))
            .route("/choices/students", web::get().to(list_student_choices))
            .service(
                web::resource("/export").route(
                    web::post()
                        .to(export_reports)
                        .wrap(middlewares::RateLimit::export())
                        // 导出动作仅导出员可见
                        .wrap(middlewares::RequireRole::new_any(UserRole::exporter_roles())),
                ),
            )
            .service(
                web::resource("/{report_id}")
                    .route(web::get().to(get_report))
                    .route(web::put().to(update_report))
                    .route(web::delete().to(delete_report)),
            ),
    );
}
