//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod groups;
mod learning_targets;
mod plans;
mod reports;
mod schools;
mod sections;
mod students;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, TutorTrackError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TutorTrackError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| TutorTrackError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TutorTrackError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TutorTrackError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    users::{
        entities::{Instructor, User},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn get_instructor_by_user_id(&self, user_id: i64) -> Result<Option<Instructor>> {
        self.get_instructor_by_user_id_impl(user_id).await
    }

    async fn list_instructor_choices(&self) -> Result<Vec<InstructorChoice>> {
        self.list_instructor_choices_impl().await
    }

    async fn create_school(&self, school: CreateSchoolRequest) -> Result<School> {
        self.create_school_impl(school).await
    }

    async fn get_school_by_id(&self, id: i64) -> Result<Option<School>> {
        self.get_school_by_id_impl(id).await
    }

    async fn list_schools_with_pagination(
        &self,
        query: SchoolListQuery,
    ) -> Result<SchoolListResponse> {
        self.list_schools_with_pagination_impl(query).await
    }

    async fn update_school(&self, id: i64, update: UpdateSchoolRequest) -> Result<Option<School>> {
        self.update_school_impl(id, update).await
    }

    async fn delete_school(&self, id: i64) -> Result<bool> {
        self.delete_school_impl(id).await
    }

    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn list_all_courses(&self) -> Result<Vec<Course>> {
        self.list_all_courses_impl().await
    }

    async fn create_section(&self, section: CreateSectionRequest) -> Result<Section> {
        self.create_section_impl(section).await
    }

    async fn get_section_by_id(&self, id: i64) -> Result<Option<Section>> {
        self.get_section_by_id_impl(id).await
    }

    async fn list_sections_with_pagination(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse> {
        self.list_sections_with_pagination_impl(query).await
    }

    async fn update_section(
        &self,
        id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>> {
        self.update_section_impl(id, update).await
    }

    async fn delete_section(&self, id: i64) -> Result<bool> {
        self.delete_section_impl(id).await
    }

    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn create_standard(&self, standard: CreateStandardRequest) -> Result<Standard> {
        self.create_standard_impl(standard).await
    }

    async fn list_standards_with_pagination(
        &self,
        query: LearningTargetListQuery,
    ) -> Result<StandardListResponse> {
        self.list_standards_with_pagination_impl(query).await
    }

    async fn update_standard(
        &self,
        id: i64,
        update: UpdateStandardRequest,
    ) -> Result<Option<Standard>> {
        self.update_standard_impl(id, update).await
    }

    async fn delete_standard(&self, id: i64) -> Result<bool> {
        self.delete_standard_impl(id).await
    }

    async fn create_learning_target(
        &self,
        target: CreateLearningTargetRequest,
    ) -> Result<LearningTarget> {
        self.create_learning_target_impl(target).await
    }

    async fn list_learning_targets_with_pagination(
        &self,
        query: LearningTargetListQuery,
    ) -> Result<LearningTargetListResponse> {
        self.list_learning_targets_with_pagination_impl(query).await
    }

    async fn update_learning_target(
        &self,
        id: i64,
        update: UpdateLearningTargetRequest,
    ) -> Result<Option<LearningTarget>> {
        self.update_learning_target_impl(id, update).await
    }

    async fn delete_learning_target(&self, id: i64) -> Result<bool> {
        self.delete_learning_target_impl(id).await
    }

    async fn create_group(&self, instructor_id: i64, group: CreateGroupRequest) -> Result<Group> {
        self.create_group_impl(instructor_id, group).await
    }

    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<Group>> {
        self.get_group_by_id_impl(group_id).await
    }

    async fn list_groups_with_pagination(
        &self,
        query: GroupListQuery,
    ) -> Result<GroupListResponse> {
        self.list_groups_with_pagination_impl(query).await
    }

    async fn update_group(
        &self,
        group_id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<Group>> {
        self.update_group_impl(group_id, update).await
    }

    async fn delete_group(&self, group_id: i64) -> Result<bool> {
        self.delete_group_impl(group_id).await
    }

    async fn list_group_students(&self, group_id: i64) -> Result<Vec<GroupStudentEntry>> {
        self.list_group_students_impl(group_id).await
    }

    async fn list_group_choices(&self, instructor_id: Option<i64>) -> Result<Vec<GroupChoice>> {
        self.list_group_choices_impl(instructor_id).await
    }

    async fn list_student_choices(
        &self,
        instructor_id: Option<i64>,
    ) -> Result<Vec<StudentChoice>> {
        self.list_student_choices_impl(instructor_id).await
    }

    async fn create_plan(&self, instructor_id: i64, plan: CreatePlanRequest) -> Result<Plan> {
        self.create_plan_impl(instructor_id, plan).await
    }

    async fn get_plan_by_id(&self, plan_id: i64) -> Result<Option<Plan>> {
        self.get_plan_by_id_impl(plan_id).await
    }

    async fn list_plans_with_pagination(&self, query: PlanListQuery) -> Result<PlanListResponse> {
        self.list_plans_with_pagination_impl(query).await
    }

    async fn update_plan(&self, plan_id: i64, update: UpdatePlanRequest) -> Result<Option<Plan>> {
        self.update_plan_impl(plan_id, update).await
    }

    async fn delete_plan(&self, plan_id: i64) -> Result<bool> {
        self.delete_plan_impl(plan_id).await
    }

    async fn create_report(&self, report: CreateReportRequest) -> Result<Report> {
        self.create_report_impl(report).await
    }

    async fn get_report_by_id(&self, report_id: i64) -> Result<Option<Report>> {
        self.get_report_by_id_impl(report_id).await
    }

    async fn get_report_scope_keys(&self, report_id: i64) -> Result<Option<(i64, i64)>> {
        self.get_report_scope_keys_impl(report_id).await
    }

    async fn list_reports_with_pagination(
        &self,
        query: ReportListQuery,
        scope: ReportScope,
    ) -> Result<ReportListResponse> {
        self.list_reports_with_pagination_impl(query, scope).await
    }

    async fn update_report(
        &self,
        report_id: i64,
        update: UpdateReportRequest,
    ) -> Result<Option<Report>> {
        self.update_report_impl(report_id, update).await
    }

    async fn delete_report(&self, report_id: i64) -> Result<bool> {
        self.delete_report_impl(report_id).await
    }

    async fn list_report_students(&self, report_id: i64) -> Result<Vec<ReportStudentDetail>> {
        self.list_report_students_impl(report_id).await
    }

    async fn filter_report_ids_in_scope(
        &self,
        report_ids: &[i64],
        scope: ReportScope,
    ) -> Result<Vec<i64>> {
        self.filter_report_ids_in_scope_impl(report_ids, scope)
            .await
    }

    async fn list_report_export_rows(&self, report_ids: &[i64]) -> Result<Vec<ReportExportRow>> {
        self.list_report_export_rows_impl(report_ids).await
    }

    async fn mark_reports_exported(&self, report_ids: &[i64]) -> Result<u64> {
        self.mark_reports_exported_impl(report_ids).await
    }
}
