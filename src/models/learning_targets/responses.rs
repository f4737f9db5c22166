use super::entities::{LearningTarget, Standard};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 学习目标列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/learning_target.ts")]
pub struct LearningTargetListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<LearningTarget>,
}

// 课程标准列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/learning_target.ts")]
pub struct StandardListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Standard>,
}
