pub mod auth;
pub mod common;
pub mod courses;
pub mod groups;
pub mod learning_targets;
pub mod plans;
pub mod reports;
pub mod schools;
pub mod sections;
pub mod students;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;
pub use common::scope::{OwnerScope, ReportScope};

/// 应用启动时间（用于计算运行时长）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
