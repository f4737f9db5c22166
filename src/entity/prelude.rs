//! 预导入模块，方便使用

pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::group_students::{
    ActiveModel as GroupStudentActiveModel, Entity as GroupStudents, Model as GroupStudentModel,
};
pub use super::groups::{ActiveModel as GroupActiveModel, Entity as Groups, Model as GroupModel};
pub use super::instructors::{
    ActiveModel as InstructorActiveModel, Entity as Instructors, Model as InstructorModel,
};
pub use super::learning_targets::{
    ActiveModel as LearningTargetActiveModel, Entity as LearningTargets,
    Model as LearningTargetModel,
};
pub use super::plans::{ActiveModel as PlanActiveModel, Entity as Plans, Model as PlanModel};
pub use super::report_students::{
    ActiveModel as ReportStudentActiveModel, Entity as ReportStudents, Model as ReportStudentModel,
};
pub use super::reports::{
    ActiveModel as ReportActiveModel, Entity as Reports, Model as ReportModel,
};
pub use super::schools::{ActiveModel as SchoolActiveModel, Entity as Schools, Model as SchoolModel};
pub use super::sections::{
    ActiveModel as SectionActiveModel, Entity as Sections, Model as SectionModel,
};
pub use super::standards::{
    ActiveModel as StandardActiveModel, Entity as Standards, Model as StandardModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
