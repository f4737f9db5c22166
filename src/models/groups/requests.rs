use crate::models::common::PaginationQuery;
use crate::models::common::query::deserialize_optional_i64;
use serde::Deserialize;
use ts_rs::TS;

// 小组查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct GroupQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub section_id: Option<i64>,
    pub search: Option<String>,
}

// 创建小组请求
//
// # instructor_id 字段说明
// - **辅导教师创建**：可不填，自动使用本人的教师档案；填了也必须是本人
// - **管理员创建**：必填，指定负责该小组的辅导教师
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct CreateGroupRequest {
    pub code: String,
    pub section_id: i64,
    pub instructor_id: Option<i64>,
    /// 内联成员名单；给出时整体替换
    pub student_ids: Option<Vec<i64>>,
}

// 更新小组请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct UpdateGroupRequest {
    pub code: Option<String>,
    pub section_id: Option<i64>,
    pub instructor_id: Option<i64>,
    pub student_ids: Option<Vec<i64>>,
}

// 小组列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct GroupListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub section_id: Option<i64>,
    pub instructor_id: Option<i64>,
    pub search: Option<String>,
}
