pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::plans::requests::{CreatePlanRequest, PlanQueryParams, UpdatePlanRequest};
use crate::storage::Storage;

pub struct PlanService {
    storage: Option<Arc<dyn Storage>>,
}

impl PlanService {
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

    // 获取计划列表（按可见范围过滤）
    pub async fn list_plans(
        &self,
        request: &HttpRequest,
        query: PlanQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_plans(self, request, query).await
    }

    // 创建计划
    pub async fn create_plan(
        &self,
        request: &HttpRequest,
        plan_data: CreatePlanRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_plan(self, request, plan_data).await
    }

    // 获取计划详情
    pub async fn get_plan(&self, request: &HttpRequest, plan_id: i64) -> ActixResult<HttpResponse> {
        get::get_plan(self, request, plan_id).await
    }

    // 更新计划
    pub async fn update_plan(
        &self,
        request: &HttpRequest,
        plan_id: i64,
        update_data: UpdatePlanRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_plan(self, request, plan_id, update_data).await
    }

    // 删除计划
    pub async fn delete_plan(
        &self,
        request: &HttpRequest,
        plan_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_plan(self, request, plan_id).await
    }
}
