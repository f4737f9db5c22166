//! 课程标准 CRUD

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LearningTargetService;
use crate::models::{
    ApiResponse, ErrorCode,
    learning_targets::requests::{
        CreateStandardRequest, LearningTargetListQuery, LearningTargetQueryParams,
        UpdateStandardRequest,
    },
};

pub async fn list_standards(
    service: &LearningTargetService,
    request: &HttpRequest,
    query: LearningTargetQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = LearningTargetListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        standard_id: None,
        search: query.search,
    };

    match storage.list_standards_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Standard list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve standard list: {e}"),
            )),
        ),
    }
}

pub async fn create_standard(
    service: &LearningTargetService,
    request: &HttpRequest,
    standard_data: CreateStandardRequest,
) -> ActixResult<HttpResponse> {
    if standard_data.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "课程标准代码不能为空",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_standard(standard_data).await {
        Ok(standard) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(standard, "课程标准创建成功")))
        }
        Err(e) => {
            error!("Standard creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Standard creation failed: {e}"),
                )),
            )
        }
    }
}

pub async fn update_standard(
    service: &LearningTargetService,
    request: &HttpRequest,
    standard_id: i64,
    update_data: UpdateStandardRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_standard(standard_id, update_data).await {
        Ok(Some(standard)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(standard, "课程标准更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StandardNotFound,
            "课程标准不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Standard update failed: {e}"),
            )),
        ),
    }
}

pub async fn delete_standard(
    service: &LearningTargetService,
    request: &HttpRequest,
    standard_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_standard(standard_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("课程标准删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StandardNotFound,
            "课程标准不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Standard delete failed: {e}"),
            )),
        ),
    }
}
