use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级实体（课程下的教学班，归属某所学校）
//
// year_code / semester_code 会原样进入报告导出的
// "Fiscal/Schol Year" 和 "Quarter" 两列。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct Section {
    pub id: i64,
    pub code: String,
    pub description: Option<String>,
    pub course_id: i64,
    pub school_id: i64,
    pub year_code: String,
    pub semester_code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 列表项：附带课程代码（列表页展示用）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct SectionListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub section: Section,
    pub course_code: Option<String>,
}
