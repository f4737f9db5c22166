use super::entities::{Attendance, HomeworkEffort, Report, ReportStudent};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 报告列表项：附带小组代码（列表页展示用）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub report: Report,
    pub group_code: Option<String>,
}

// 报告列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<ReportListItem>,
}

// 报告学生明细（附带学生标识信息）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportStudentDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub entry: ReportStudent,
    pub osis_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// 报告详情响应（含内联明细行）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportResponse {
    pub report: Report,
    pub students: Vec<ReportStudentDetail>,
}

// 小组下拉选项（表单外键选择）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct GroupChoice {
    pub id: i64,
    pub code: String,
    pub section_id: i64,
}

// 小组下拉选项响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct GroupChoicesResponse {
    pub items: Vec<GroupChoice>,
}

// 学生下拉选项（报告明细行的外键选择）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct StudentChoice {
    pub id: i64,
    pub osis_number: String,
    pub first_name: String,
    pub last_name: String,
}

// 学生下拉选项响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct StudentChoicesResponse {
    pub items: Vec<StudentChoice>,
}

// 列表筛选器选项
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct FilterChoice {
    pub id: i64,
    pub label: String,
}

// 列表筛选器描述（导出员可见；其他角色得到空集合）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportFilterDescriptor {
    pub name: String,
    pub kind: String, // "flag" | "choice" | "date_range"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<FilterChoice>>,
}

// 列表筛选器响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportFiltersResponse {
    pub filters: Vec<ReportFilterDescriptor>,
}

/// 导出平铺行：一条报告学生明细对应一行 CSV
///
/// 字段在存储层就地解析完毕，导出服务只负责排版。
#[derive(Debug, Clone)]
pub struct ReportExportRow {
    pub report_id: i64,
    pub osis_number: String,
    pub course_code: String,
    pub year_code: String,
    pub date: chrono::NaiveDate,
    pub semester_code: String,
    pub week: i32,
    pub attendance: Attendance,
    pub dosage: i32,
    pub exit_ticket: Option<i32>,
    pub exit_ticket_denominator: i32,
    /// 学习目标代码；无结构化目标时为计划的替代文本
    pub learning_target: Option<String>,
    pub homework_effort: HomeworkEffort,
    pub homework_accuracy: Option<i32>,
    pub homework_denominator: i32,
    pub quiz: Option<String>,
    pub instructor_name: String,
}
