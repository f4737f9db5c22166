pub mod choices;
pub mod create;
pub mod delete;
pub mod export;
pub mod filters;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reports::requests::{
    CreateReportRequest, ExportReportsRequest, ReportQueryParams, UpdateReportRequest,
};
use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    // 获取报告列表（按可见范围过滤；筛选参数仅导出员生效）
    pub async fn list_reports(
        &self,
        request: &HttpRequest,
        query: ReportQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_reports(self, request, query).await
    }

    // 创建报告（含内联学生明细）
    pub async fn create_report(
        &self,
        request: &HttpRequest,
        report_data: CreateReportRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_report(self, request, report_data).await
    }

    // 获取报告详情
    pub async fn get_report(
        &self,
        request: &HttpRequest,
        report_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_report(self, request, report_id).await
    }

    // 更新报告
    pub async fn update_report(
        &self,
        request: &HttpRequest,
        report_id: i64,
        update_data: UpdateReportRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_report(self, request, report_id, update_data).await
    }

    // 删除报告
    pub async fn delete_report(
        &self,
        request: &HttpRequest,
        report_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_report(self, request, report_id).await
    }

    // 小组下拉选项
    pub async fn list_group_choices(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        choices::list_group_choices(self, request).await
    }

    // 学生下拉选项
    pub async fn list_student_choices(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        choices::list_student_choices(self, request).await
    }

    // 列表筛选器描述
    pub async fn get_filters(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        filters::get_filters(self, request).await
    }

    // 批量导出 CSV 并标记已导出
    pub async fn export_reports(
        &self,
        request: &HttpRequest,
        export_data: ExportReportsRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_reports(self, request, export_data).await
    }
}
