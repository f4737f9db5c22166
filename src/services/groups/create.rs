use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GroupService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    groups::{requests::CreateGroupRequest, responses::GroupResponse},
    users::entities::UserRole,
};

pub async fn create_group(
    service: &GroupService,
    request: &HttpRequest,
    group_data: CreateGroupRequest,
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

    // 非管理员只能把自己设为小组的辅导教师
    let instructor_id = if user.role == UserRole::Admin {
        match group_data.instructor_id {
            Some(id) => id,
            None => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "管理员创建小组必须指定辅导教师",
                )));
            }
        }
    } else {
        let own = match user.instructor.as_ref() {
            Some(own) => own.id,
            None => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::GroupPermissionDenied,
                    "当前账号没有辅导教师档案",
                )));
            }
        };
        if let Some(requested) = group_data.instructor_id
            && requested != own
        {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::GroupPermissionDenied,
                "只能创建自己负责的小组",
            )));
        }
        own
    };

    match storage.create_group(instructor_id, group_data).await {
        Ok(group) => {
            let students = storage
                .list_group_students(group.id)
                .await
                .unwrap_or_default();
            Ok(HttpResponse::Created().json(ApiResponse::success(
                GroupResponse { group, students },
                "小组创建成功",
            )))
        }
        Err(e) => {
            error!("Group creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Group creation failed: {e}"),
                )),
            )
        }
    }
}
