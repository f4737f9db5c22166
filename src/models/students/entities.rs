use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub osis_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub school_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 列表项：附带学校名称（列表页展示用）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub school_name: Option<String>,
}
