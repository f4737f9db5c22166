use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GroupService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, OwnerScope,
    groups::{requests::UpdateGroupRequest, responses::GroupResponse},
    users::entities::UserRole,
};

pub async fn update_group(
    service: &GroupService,
    request: &HttpRequest,
    group_id: i64,
    update_data: UpdateGroupRequest,
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

    // 范围校验：只能编辑可见的小组
    let existing = match storage.get_group_by_id(group_id).await {
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

    let scope = OwnerScope::for_user(&user);
    if !scope.allows_instructor(existing.instructor_id) {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "小组不存在",
        )));
    }

    // 非管理员不能把小组转给别的辅导教师
    if user.role != UserRole::Admin
        && let Some(requested) = update_data.instructor_id
        && !scope.allows_instructor(requested)
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::GroupPermissionDenied,
            "只能把自己设为小组的辅导教师",
        )));
    }

    match storage.update_group(group_id, update_data).await {
        Ok(Some(group)) => {
            let students = storage
                .list_group_students(group.id)
                .await
                .unwrap_or_default();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                GroupResponse { group, students },
                "小组更新成功",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "小组不存在",
        ))),
        Err(e) => {
            error!("Group update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Group update failed: {e}"),
                )),
            )
        }
    }
}
