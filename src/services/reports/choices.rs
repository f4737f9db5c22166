//! 报告表单的外键选项
//!
//! 非管理员：小组一栏只剩本人名下的小组，学生一栏只剩本人任意小组的成员。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    reports::responses::{GroupChoicesResponse, StudentChoicesResponse},
    users::entities::{User, UserRole},
};

/// 非管理员按本人教师档案收敛；没有档案时返回 None 让选项为空
fn choice_scope(user: &User) -> Result<Option<i64>, ()> {
    if user.role == UserRole::Admin {
        return Ok(None);
    }
    match user.instructor.as_ref() {
        Some(own) => Ok(Some(own.id)),
        None => Err(()),
    }
}

pub async fn list_group_choices(
    service: &ReportService,
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

    let scope = match choice_scope(&user) {
        Ok(scope) => scope,
        Err(()) => {
            return Ok(HttpResponse::Ok().json(ApiResponse::success(
                GroupChoicesResponse { items: vec![] },
                "Group choices retrieved successfully",
            )));
        }
    };

    match storage.list_group_choices(scope).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GroupChoicesResponse { items },
            "Group choices retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve group choices: {e}"),
            )),
        ),
    }
}

pub async fn list_student_choices(
    service: &ReportService,
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

    let scope = match choice_scope(&user) {
        Ok(scope) => scope,
        Err(()) => {
            return Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentChoicesResponse { items: vec![] },
                "Student choices retrieved successfully",
            )));
        }
    };

    match storage.list_student_choices(scope).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentChoicesResponse { items },
            "Student choices retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student choices: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{Instructor, UserStatus};

    fn user_with(role: UserRole, instructor: Option<Instructor>) -> User {
        User {
            id: 1,
            username: "tutor_01".into(),
            email: "t@example.org".into(),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            first_name: None,
            last_name: None,
            instructor,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_choice_scope_admin_unrestricted() {
        assert_eq!(choice_scope(&user_with(UserRole::Admin, None)), Ok(None));
    }

    #[test]
    fn test_choice_scope_instructor_narrowed_to_self() {
        let instructor = Instructor {
            id: 42,
            user_id: 1,
            school_id: 3,
        };
        assert_eq!(
            choice_scope(&user_with(UserRole::Instructor, Some(instructor))),
            Ok(Some(42))
        );
    }

    #[test]
    fn test_choice_scope_without_profile_is_empty() {
        assert!(choice_scope(&user_with(UserRole::Instructor, None)).is_err());
        assert!(choice_scope(&user_with(UserRole::Exporter, None)).is_err());
    }
}
