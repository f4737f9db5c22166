use crate::models::common::PaginationQuery;
use crate::models::common::query::deserialize_optional_i64;
use serde::Deserialize;
use ts_rs::TS;

// 学习目标 / 课程标准查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/learning_target.ts")]
pub struct LearningTargetQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub standard_id: Option<i64>,
    pub search: Option<String>,
}

// 创建学习目标请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/learning_target.ts")]
pub struct CreateLearningTargetRequest {
    pub code: String,
    pub description: Option<String>,
    pub standard_id: Option<i64>,
}

// 更新学习目标请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/learning_target.ts")]
pub struct UpdateLearningTargetRequest {
    pub code: Option<String>,
    pub description: Option<String>,
    pub standard_id: Option<i64>,
}

// 创建课程标准请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/learning_target.ts")]
pub struct CreateStandardRequest {
    pub code: String,
    pub description: Option<String>,
}

// 更新课程标准请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/learning_target.ts")]
pub struct UpdateStandardRequest {
    pub code: Option<String>,
    pub description: Option<String>,
}

// 学习目标列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/learning_target.ts")]
pub struct LearningTargetListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub standard_id: Option<i64>,
    pub search: Option<String>,
}
