use super::entities::{Group, GroupStudentEntry};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 小组详情响应（含内联成员）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct GroupResponse {
    pub group: Group,
    pub students: Vec<GroupStudentEntry>,
}

// 小组列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct GroupListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Group>,
}

// 辅导教师下拉选项（表单外键选择）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct InstructorChoice {
    pub id: i64,
    pub name: String,
    pub school_id: i64,
}

// 辅导教师下拉选项响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct InstructorChoicesResponse {
    pub items: Vec<InstructorChoice>,
}
