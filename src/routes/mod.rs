pub mod auth;

pub mod users;

pub mod schools;

pub mod courses;

pub mod sections;

pub mod students;

pub mod learning_targets;

pub mod groups;

pub mod plans;

pub mod reports;

pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use groups::configure_group_routes;
pub use learning_targets::configure_learning_target_routes;
pub use plans::configure_plan_routes;
pub use reports::configure_report_routes;
pub use schools::configure_school_routes;
pub use sections::configure_section_routes;
pub use students::configure_student_routes;
pub use users::configure_user_routes;
