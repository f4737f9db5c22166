//! 学习目标 CRUD

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LearningTargetService;
use crate::models::{
    ApiResponse, ErrorCode,
    learning_targets::requests::{
        CreateLearningTargetRequest, LearningTargetListQuery, LearningTargetQueryParams,
        UpdateLearningTargetRequest,
    },
};

pub async fn list_targets(
    service: &LearningTargetService,
    request: &HttpRequest,
    query: LearningTargetQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = LearningTargetListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        standard_id: query.standard_id,
        search: query.search,
    };

    match storage.list_learning_targets_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Learning target list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve learning target list: {e}"),
            )),
        ),
    }
}

pub async fn create_target(
    service: &LearningTargetService,
    request: &HttpRequest,
    target_data: CreateLearningTargetRequest,
) -> ActixResult<HttpResponse> {
    if target_data.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "学习目标代码不能为空",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_learning_target(target_data).await {
        Ok(target) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(target, "学习目标创建成功")))
        }
        Err(e) => {
            error!("Learning target creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Learning target creation failed: {e}"),
                )),
            )
        }
    }
}

pub async fn update_target(
    service: &LearningTargetService,
    request: &HttpRequest,
    target_id: i64,
    update_data: UpdateLearningTargetRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_learning_target(target_id, update_data).await {
        Ok(Some(target)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(target, "学习目标更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LearningTargetNotFound,
            "学习目标不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Learning target update failed: {e}"),
            )),
        ),
    }
}

pub async fn delete_target(
    service: &LearningTargetService,
    request: &HttpRequest,
    target_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_learning_target(target_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("学习目标删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LearningTargetNotFound,
            "学习目标不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Learning target delete failed: {e}"),
            )),
        ),
    }
}
