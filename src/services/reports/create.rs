use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    reports::{requests::CreateReportRequest, responses::ReportResponse},
    users::entities::UserRole,
};

pub async fn create_report(
    service: &ReportService,
    request: &HttpRequest,
    report_data: CreateReportRequest,
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

    // 小组必须存在
    let group = match storage.get_group_by_id(report_data.group_id).await {
        Ok(Some(group)) => group,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GroupNotFound,
                "小组不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询小组失败: {e}"),
                )),
            );
        }
    };

    // 非管理员：只能为自己名下的小组写报告，明细学生必须来自本人任意小组
    if user.role != UserRole::Admin {
        let own = match user.instructor.as_ref() {
            Some(own) => own.id,
            None => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::ReportPermissionDenied,
                    "当前账号没有辅导教师档案",
                )));
            }
        };

        if group.instructor_id != own {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ReportPermissionDenied,
                "只能为自己负责的小组创建报告",
            )));
        }

        let allowed: HashSet<i64> = match storage.list_student_choices(Some(own)).await {
            Ok(choices) => choices.into_iter().map(|c| c.id).collect(),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询学生失败: {e}"),
                    )),
                );
            }
        };

        if let Some(outside) = report_data
            .students
            .iter()
            .find(|entry| !allowed.contains(&entry.student_id))
        {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ReportPermissionDenied,
                format!("学生 {} 不在您的小组成员范围内", outside.student_id),
            )));
        }
    }

    match storage.create_report(report_data).await {
        Ok(report) => {
            let students = storage
                .list_report_students(report.id)
                .await
                .unwrap_or_default();
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ReportResponse { report, students },
                "报告创建成功",
            )))
        }
        Err(e) => {
            error!("Report creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Report creation failed: {e}"),
                )),
            )
        }
    }
}
