pub mod standards;
pub mod targets;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::learning_targets::requests::{
    CreateLearningTargetRequest, CreateStandardRequest, LearningTargetQueryParams,
    UpdateLearningTargetRequest, UpdateStandardRequest,
};
use crate::storage::Storage;

/// 学习目标与课程标准共用一个服务（同属一套教学目标体系）
pub struct LearningTargetService {
    storage: Option<Arc<dyn Storage>>,
}

impl LearningTargetService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_targets(
        &self,
        request: &HttpRequest,
        query: LearningTargetQueryParams,
    ) -> ActixResult<HttpResponse> {
        targets::list_targets(self, request, query).await
    }

    pub async fn create_target(
        &self,
        request: &HttpRequest,
        target_data: CreateLearningTargetRequest,
    ) -> ActixResult<HttpResponse> {
        targets::create_target(self, request, target_data).await
    }

    pub async fn update_target(
        &self,
        request: &HttpRequest,
        target_id: i64,
        update_data: UpdateLearningTargetRequest,
    ) -> ActixResult<HttpResponse> {
        targets::update_target(self, request, target_id, update_data).await
    }

    pub async fn delete_target(
        &self,
        request: &HttpRequest,
        target_id: i64,
    ) -> ActixResult<HttpResponse> {
        targets::delete_target(self, request, target_id).await
    }

    pub async fn list_standards(
        &self,
        request: &HttpRequest,
        query: LearningTargetQueryParams,
    ) -> ActixResult<HttpResponse> {
        standards::list_standards(self, request, query).await
    }

    pub async fn create_standard(
        &self,
        request: &HttpRequest,
        standard_data: CreateStandardRequest,
    ) -> ActixResult<HttpResponse> {
        standards::create_standard(self, request, standard_data).await
    }

    pub async fn update_standard(
        &self,
        request: &HttpRequest,
        standard_id: i64,
        update_data: UpdateStandardRequest,
    ) -> ActixResult<HttpResponse> {
        standards::update_standard(self, request, standard_id, update_data).await
    }

    pub async fn delete_standard(
        &self,
        request: &HttpRequest,
        standard_id: i64,
    ) -> ActixResult<HttpResponse> {
        standards::delete_standard(self, request, standard_id).await
    }
}
