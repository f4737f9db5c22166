use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, ReportScope,
    reports::{requests::UpdateReportRequest, responses::ReportResponse},
    users::entities::UserRole,
};

pub async fn update_report(
    service: &ReportService,
    request: &HttpRequest,
    report_id: i64,
    update_data: UpdateReportRequest,
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

    // 范围校验：只能编辑可见的报告
    match storage.get_report_scope_keys(report_id).await {
        Ok(Some((instructor_id, school_id))) => {
            if !ReportScope::for_user(&user).allows(instructor_id, school_id) {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ReportNotFound,
                    "报告不存在",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ReportNotFound,
                "报告不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询报告失败: {e}"),
                )),
            );
        }
    }

    // 非管理员：换绑的小组必须是自己名下的，明细学生必须来自本人任意小组
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

        if let Some(group_id) = update_data.group_id {
            match storage.get_group_by_id(group_id).await {
                Ok(Some(group)) if group.instructor_id == own => {}
                Ok(Some(_)) | Ok(None) => {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::ReportPermissionDenied,
                        "只能选择自己负责的小组",
                    )));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询小组失败: {e}"),
                        ),
                    ));
                }
            }
        }

        if let Some(ref students) = update_data.students {
            let allowed: HashSet<i64> = match storage.list_student_choices(Some(own)).await {
                Ok(choices) => choices.into_iter().map(|c| c.id).collect(),
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询学生失败: {e}"),
                        ),
                    ));
                }
            };

            if let Some(outside) = students
                .iter()
                .find(|entry| !allowed.contains(&entry.student_id))
            {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::ReportPermissionDenied,
                    format!("学生 {} 不在您的小组成员范围内", outside.student_id),
                )));
            }
        }
    }

    match storage.update_report(report_id, update_data).await {
        Ok(Some(report)) => {
            let students = storage
                .list_report_students(report.id)
                .await
                .unwrap_or_default();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ReportResponse { report, students },
                "报告更新成功",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReportNotFound,
            "报告不存在",
        ))),
        Err(e) => {
            error!("Report update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Report update failed: {e}"),
                )),
            )
        }
    }
}
