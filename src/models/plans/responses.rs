use super::entities::Plan;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 单个计划响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/plan.ts")]
pub struct PlanResponse {
    pub plan: Plan,
}

// 计划列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/plan.ts")]
pub struct PlanListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Plan>,
}
