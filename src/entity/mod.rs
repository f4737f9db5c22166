//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod courses;
pub mod group_students;
pub mod groups;
pub mod instructors;
pub mod learning_targets;
pub mod plans;
pub mod report_students;
pub mod reports;
pub mod schools;
pub mod sections;
pub mod standards;
pub mod students;
pub mod users;
