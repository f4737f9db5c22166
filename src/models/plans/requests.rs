use crate::models::common::PaginationQuery;
use crate::models::common::query::deserialize_optional_i64;
use serde::Deserialize;
use ts_rs::TS;

// 计划查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/plan.ts")]
pub struct PlanQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub course_id: Option<i64>,
    pub search: Option<String>,
}

// 创建计划请求
//
// instructor_id 的约定同小组：非管理员只能为自己创建。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/plan.ts")]
pub struct CreatePlanRequest {
    pub course_id: i64,
    pub instructor_id: Option<i64>,
    pub description: Option<String>,
    pub learning_target_id: Option<i64>,
    pub alt_learning_target: Option<String>,
    pub dosage: i32,
    pub exit_ticket_denominator: i32,
    pub homework_denominator: i32,
}

// 更新计划请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/plan.ts")]
pub struct UpdatePlanRequest {
    pub course_id: Option<i64>,
    pub description: Option<String>,
    pub learning_target_id: Option<i64>,
    pub alt_learning_target: Option<String>,
    pub dosage: Option<i32>,
    pub exit_ticket_denominator: Option<i32>,
    pub homework_denominator: Option<i32>,
}

// 计划列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/plan.ts")]
pub struct PlanListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub instructor_id: Option<i64>,
    pub search: Option<String>,
}
