//! 小组表单的外键选项
//!
//! 非管理员创建小组时，辅导教师一栏只剩本人这一项。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    groups::responses::{InstructorChoice, InstructorChoicesResponse},
    users::entities::UserRole,
};

pub async fn list_instructor_choices(
    service: &GroupService,
    request: &HttpRequest,
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

    // 管理员可以指派任意辅导教师
    if user.role == UserRole::Admin {
        return match storage.list_instructor_choices().await {
            Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                InstructorChoicesResponse { items },
                "Instructor choices retrieved successfully",
            ))),
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve instructor choices: {e}"),
                )),
            ),
        };
    }

    // 其余角色只能选择本人的教师档案
    let items = match user.instructor.as_ref() {
        Some(own) => {
            let name = if user.full_name().is_empty() {
                user.username.clone()
            } else {
                user.full_name()
            };
            vec![InstructorChoice {
                id: own.id,
                name,
                school_id: own.school_id,
            }]
        }
        None => vec![],
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        InstructorChoicesResponse { items },
        "Instructor choices retrieved successfully",
    )))
}
