use std::sync::Arc;

use crate::models::{
    ReportScope,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    groups::{
        entities::{Group, GroupStudentEntry},
        requests::{CreateGroupRequest, GroupListQuery, UpdateGroupRequest},
        responses::{GroupListResponse, InstructorChoice},
    },
    learning_targets::{
        entities::{LearningTarget, Standard},
        requests::{
            CreateLearningTargetRequest, CreateStandardRequest, LearningTargetListQuery,
            UpdateLearningTargetRequest, UpdateStandardRequest,
        },
        responses::{LearningTargetListResponse, StandardListResponse},
    },
    plans::{
        entities::Plan,
        requests::{CreatePlanRequest, PlanListQuery, UpdatePlanRequest},
        responses::PlanListResponse,
    },
    reports::{
        entities::Report,
        requests::{CreateReportRequest, ReportListQuery, UpdateReportRequest},
        responses::{
            GroupChoice, ReportExportRow, ReportListResponse, ReportStudentDetail, StudentChoice,
        },
    },
    schools::{
        entities::School,
        requests::{CreateSchoolRequest, SchoolListQuery, UpdateSchoolRequest},
        responses::SchoolListResponse,
    },
    sections::{
        entities::Section,
        requests::{CreateSectionRequest, SectionListQuery, UpdateSectionRequest},
        responses::SectionListResponse,
    },
    students::{
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    users::{
        entities::{Instructor, User},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（可带内联辅导教师档案）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量（启动时判断是否需要初始化管理员）
    async fn count_users(&self) -> Result<u64>;
    // 获取某用户的辅导教师档案
    async fn get_instructor_by_user_id(&self, user_id: i64) -> Result<Option<Instructor>>;
    // 列出全部辅导教师下拉选项（管理员表单用）
    async fn list_instructor_choices(&self) -> Result<Vec<InstructorChoice>>;

    /// 学校管理方法
    async fn create_school(&self, school: CreateSchoolRequest) -> Result<School>;
    async fn get_school_by_id(&self, id: i64) -> Result<Option<School>>;
    async fn list_schools_with_pagination(
        &self,
        query: SchoolListQuery,
    ) -> Result<SchoolListResponse>;
    async fn update_school(&self, id: i64, update: UpdateSchoolRequest) -> Result<Option<School>>;
    async fn delete_school(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 全量课程（报告筛选器的下拉选项）
    async fn list_all_courses(&self) -> Result<Vec<Course>>;

    /// 班级管理方法
    async fn create_section(&self, section: CreateSectionRequest) -> Result<Section>;
    async fn get_section_by_id(&self, id: i64) -> Result<Option<Section>>;
    async fn list_sections_with_pagination(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse>;
    async fn update_section(
        &self,
        id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>>;
    async fn delete_section(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(
        &self,
        student: CreateStudentRequest,
    ) -> Result<crate::models::students::entities::Student>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<crate::models::students::entities::Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 课程标准管理方法
    async fn create_standard(&self, standard: CreateStandardRequest) -> Result<Standard>;
    async fn list_standards_with_pagination(
        &self,
        query: LearningTargetListQuery,
    ) -> Result<StandardListResponse>;
    async fn update_standard(
        &self,
        id: i64,
        update: UpdateStandardRequest,
    ) -> Result<Option<Standard>>;
    async fn delete_standard(&self, id: i64) -> Result<bool>;

    /// 学习目标管理方法
    async fn create_learning_target(
        &self,
        target: CreateLearningTargetRequest,
    ) -> Result<LearningTarget>;
    async fn list_learning_targets_with_pagination(
        &self,
        query: LearningTargetListQuery,
    ) -> Result<LearningTargetListResponse>;
    async fn update_learning_target(
        &self,
        id: i64,
        update: UpdateLearningTargetRequest,
    ) -> Result<Option<LearningTarget>>;
    async fn delete_learning_target(&self, id: i64) -> Result<bool>;

    /// 小组管理方法
    // 创建小组（instructor_id 由服务层解析完毕）
    async fn create_group(&self, instructor_id: i64, group: CreateGroupRequest) -> Result<Group>;
    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<Group>>;
    async fn list_groups_with_pagination(&self, query: GroupListQuery)
    -> Result<GroupListResponse>;
    async fn update_group(
        &self,
        group_id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<Group>>;
    async fn delete_group(&self, group_id: i64) -> Result<bool>;
    // 小组内联成员名单
    async fn list_group_students(&self, group_id: i64) -> Result<Vec<GroupStudentEntry>>;
    // 小组下拉选项；传入 Some(教师) 时限定为该教师名下的小组
    async fn list_group_choices(&self, instructor_id: Option<i64>) -> Result<Vec<GroupChoice>>;
    // 学生下拉选项；传入 Some(教师) 时限定为该教师任意小组的成员
    async fn list_student_choices(&self, instructor_id: Option<i64>)
    -> Result<Vec<StudentChoice>>;

    /// 计划管理方法
    async fn create_plan(&self, instructor_id: i64, plan: CreatePlanRequest) -> Result<Plan>;
    async fn get_plan_by_id(&self, plan_id: i64) -> Result<Option<Plan>>;
    async fn list_plans_with_pagination(&self, query: PlanListQuery) -> Result<PlanListResponse>;
    async fn update_plan(&self, plan_id: i64, update: UpdatePlanRequest) -> Result<Option<Plan>>;
    async fn delete_plan(&self, plan_id: i64) -> Result<bool>;

    /// 报告管理方法
    async fn create_report(&self, report: CreateReportRequest) -> Result<Report>;
    async fn get_report_by_id(&self, report_id: i64) -> Result<Option<Report>>;
    // 报告的范围键：所属小组的 (辅导教师ID, 学校ID)，用于单对象访问的范围校验
    async fn get_report_scope_keys(&self, report_id: i64) -> Result<Option<(i64, i64)>>;
    async fn list_reports_with_pagination(
        &self,
        query: ReportListQuery,
        scope: ReportScope,
    ) -> Result<ReportListResponse>;
    async fn update_report(
        &self,
        report_id: i64,
        update: UpdateReportRequest,
    ) -> Result<Option<Report>>;
    async fn delete_report(&self, report_id: i64) -> Result<bool>;
    // 报告内联学生明细
    async fn list_report_students(&self, report_id: i64) -> Result<Vec<ReportStudentDetail>>;
    // 把选中的报告 ID 集收敛到可见范围内
    async fn filter_report_ids_in_scope(
        &self,
        report_ids: &[i64],
        scope: ReportScope,
    ) -> Result<Vec<i64>>;
    // 导出平铺行：每条报告学生明细一行，关联字段就地解析
    async fn list_report_export_rows(&self, report_ids: &[i64]) -> Result<Vec<ReportExportRow>>;
    // 标记报告为已导出，返回影响行数
    async fn mark_reports_exported(&self, report_ids: &[i64]) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
