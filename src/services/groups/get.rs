use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, OwnerScope,
    groups::responses::GroupResponse,
};

pub async fn get_group(
    service: &GroupService,
    request: &HttpRequest,
    group_id: i64,
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

    match storage.get_group_by_id(group_id).await {
        // 范围外的对象一律视为不存在
        Ok(Some(group)) => {
            if !OwnerScope::for_user(&user).allows_instructor(group.instructor_id) {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::GroupNotFound,
                    "小组不存在",
                )));
            }

            let students = storage
                .list_group_students(group.id)
                .await
                .unwrap_or_default();

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                GroupResponse { group, students },
                "Group retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "小组不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve group: {e}"),
            )),
        ),
    }
}
