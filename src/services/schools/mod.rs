pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::schools::requests::{
    CreateSchoolRequest, SchoolQueryParams, UpdateSchoolRequest,
};
use crate::storage::Storage;

pub struct SchoolService {
    storage: Option<Arc<dyn Storage>>,
}

impl SchoolService {
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

    pub async fn list_schools(
        &self,
        request: &HttpRequest,
        query: SchoolQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_schools(self, request, query).await
    }

    pub async fn create_school(
        &self,
        request: &HttpRequest,
        school_data: CreateSchoolRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_school(self, request, school_data).await
    }

    pub async fn update_school(
        &self,
        request: &HttpRequest,
        school_id: i64,
        update_data: UpdateSchoolRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_school(self, request, school_id, update_data).await
    }

    pub async fn delete_school(
        &self,
        request: &HttpRequest,
        school_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_school(self, request, school_id).await
    }
}
