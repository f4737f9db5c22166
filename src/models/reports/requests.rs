use crate::models::common::PaginationQuery;
use crate::models::common::query::{
    deserialize_optional_bool, deserialize_optional_date, deserialize_optional_i64,
};
use crate::models::reports::entities::{Attendance, HomeworkEffort};
use serde::Deserialize;
use ts_rs::TS;

// 报告查询参数（来自HTTP请求）
//
// exported / course_id / date_from / date_to 为导出员专用筛选，
// 其他角色传入会被忽略。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub exported: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub course_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_from: Option<chrono::NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_to: Option<chrono::NaiveDate>,
}

// 报告中的学生明细输入
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportStudentInput {
    pub student_id: i64,
    pub attendance: Attendance,
    pub exit_ticket: Option<i32>,
    pub homework_effort: HomeworkEffort,
    pub homework_accuracy: Option<i32>,
    pub quiz: Option<String>,
}

// 创建报告请求
//
// 非管理员只能选择自己名下的小组；students 里的学生必须来自
// 本人任意小组的成员名单。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct CreateReportRequest {
    pub group_id: i64,
    pub plan_id: i64,
    pub date: chrono::NaiveDate,
    pub week: i32,
    #[serde(default)]
    pub students: Vec<ReportStudentInput>,
}

// 更新报告请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct UpdateReportRequest {
    pub group_id: Option<i64>,
    pub plan_id: Option<i64>,
    pub date: Option<chrono::NaiveDate>,
    pub week: Option<i32>,
    /// 给出时整体替换明细行
    pub students: Option<Vec<ReportStudentInput>>,
}

// 导出报告请求（批量动作）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ExportReportsRequest {
    pub report_ids: Vec<i64>,
}

// 报告列表查询参数（用于存储层）；可见范围另行传入
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub exported: Option<bool>,
    pub course_id: Option<i64>,
    pub date_from: Option<chrono::NaiveDate>,
    pub date_to: Option<chrono::NaiveDate>,
}
