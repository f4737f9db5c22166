pub mod auth;
pub mod courses;
pub mod groups;
pub mod learning_targets;
pub mod plans;
pub mod reports;
pub mod schools;
pub mod sections;
pub mod students;
pub mod users;

pub use auth::AuthService;
pub use courses::CourseService;
pub use groups::GroupService;
pub use learning_targets::LearningTargetService;
pub use plans::PlanService;
pub use reports::ReportService;
pub use schools::SchoolService;
pub use sections::SectionService;
pub use students::StudentService;
pub use users::UserService;
