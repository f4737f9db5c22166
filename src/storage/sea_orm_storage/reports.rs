//! 辅导报告存储操作
//!
//! 可见范围过滤沿 报告→小组→班级 的关联展开：
//! 管理员不过滤，导出员按班级所属学校过滤，辅导教师按小组归属过滤。
//! 列表与单对象访问共用同一套范围语义。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::courses::Entity as Courses;
use crate::entity::groups::{Column as GroupColumn, Entity as Groups};
use crate::entity::instructors::Entity as Instructors;
use crate::entity::learning_targets::Entity as LearningTargets;
use crate::entity::plans::Entity as Plans;
use crate::entity::report_students::{
    ActiveModel as ReportStudentActiveModel, Column as ReportStudentColumn,
    Entity as ReportStudents,
};
use crate::entity::reports::{ActiveModel, Column, Entity as Reports};
use crate::entity::sections::{Column as SectionColumn, Entity as Sections};
use crate::entity::students::Entity as Students;
use crate::entity::users::Entity as Users;
use crate::errors::{Result, TutorTrackError};
use crate::models::{
    PaginationInfo, ReportScope,
    reports::{
        entities::Report,
        requests::{CreateReportRequest, ReportListQuery, ReportStudentInput, UpdateReportRequest},
        responses::{ReportExportRow, ReportListItem, ReportListResponse, ReportStudentDetail},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 创建报告（含内联学生明细）
    pub async fn create_report_impl(&self, req: CreateReportRequest) -> Result<Report> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            group_id: Set(req.group_id),
            plan_id: Set(req.plan_id),
            date: Set(req.date),
            week: Set(req.week),
            exported: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("创建报告失败: {e}")))?;

        self.replace_report_students_impl(result.id, req.students)
            .await?;

        Ok(result.into_report())
    }

    /// 通过 ID 获取报告
    pub async fn get_report_by_id_impl(&self, report_id: i64) -> Result<Option<Report>> {
        let result = Reports::find_by_id(report_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询报告失败: {e}")))?;

        Ok(result.map(|m| m.into_report()))
    }

    /// 报告的范围键：所属小组的 (辅导教师ID, 学校ID)
    pub async fn get_report_scope_keys_impl(&self, report_id: i64) -> Result<Option<(i64, i64)>> {
        let report = match Reports::find_by_id(report_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询报告失败: {e}")))?
        {
            Some(r) => r,
            None => return Ok(None),
        };

        let group = Groups::find_by_id(report.group_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询小组失败: {e}")))?
            .ok_or_else(|| TutorTrackError::not_found(format!("小组 {} 不存在", report.group_id)))?;

        let section = Sections::find_by_id(group.section_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询班级失败: {e}")))?
            .ok_or_else(|| {
                TutorTrackError::not_found(format!("班级 {} 不存在", group.section_id))
            })?;

        Ok(Some((group.instructor_id, section.school_id)))
    }

    /// 分页列出报告（按可见范围过滤，附带小组代码）
    pub async fn list_reports_with_pagination_impl(
        &self,
        query: ReportListQuery,
        scope: ReportScope,
    ) -> Result<ReportListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        // 无教师档案的非管理员什么都看不到
        if scope == ReportScope::Nothing {
            return Ok(ReportListResponse {
                items: vec![],
                pagination: PaginationInfo {
                    page: page as i64,
                    page_size: size as i64,
                    total: 0,
                    total_pages: 0,
                },
            });
        }

        let mut select = Reports::find();

        // 范围与课程筛选需要的关联按需拼接
        let need_sections = query.course_id.is_some() || matches!(scope, ReportScope::School(_));
        let need_groups = need_sections || matches!(scope, ReportScope::Instructor(_));

        if need_groups {
            select = select.join(JoinType::InnerJoin, crate::entity::reports::Relation::Group.def());
        }
        if need_sections {
            select = select.join(
                JoinType::InnerJoin,
                crate::entity::groups::Relation::Section.def(),
            );
        }

        match scope {
            ReportScope::All | ReportScope::Nothing => {}
            ReportScope::School(school_id) => {
                select = select.filter(SectionColumn::SchoolId.eq(school_id));
            }
            ReportScope::Instructor(instructor_id) => {
                select = select.filter(GroupColumn::InstructorId.eq(instructor_id));
            }
        }

        // 导出员筛选（服务层已按角色清空）
        if let Some(exported) = query.exported {
            select = select.filter(Column::Exported.eq(exported));
        }
        if let Some(course_id) = query.course_id {
            select = select.filter(SectionColumn::CourseId.eq(course_id));
        }
        if let Some(date_from) = query.date_from {
            select = select.filter(Column::Date.gte(date_from));
        }
        if let Some(date_to) = query.date_to {
            select = select.filter(Column::Date.lte(date_to));
        }

        // 排序
        select = select.order_by_desc(Column::Date).order_by_desc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询报告总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询报告页数失败: {e}")))?;

        let reports = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询报告列表失败: {e}")))?;

        // 批量解析小组代码
        let group_ids: Vec<i64> = reports.iter().map(|m| m.group_id).collect();
        let group_codes: HashMap<i64, String> = Groups::find()
            .filter(GroupColumn::Id.is_in(group_ids))
            .all(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询小组失败: {e}")))?
            .into_iter()
            .map(|g| (g.id, g.code))
            .collect();

        let items = reports
            .into_iter()
            .map(|m| {
                let group_code = group_codes.get(&m.group_id).cloned();
                ReportListItem {
                    report: m.into_report(),
                    group_code,
                }
            })
            .collect();

        Ok(ReportListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新报告
    pub async fn update_report_impl(
        &self,
        report_id: i64,
        update: UpdateReportRequest,
    ) -> Result<Option<Report>> {
        let existing = self.get_report_by_id_impl(report_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(report_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(group_id) = update.group_id {
            model.group_id = Set(group_id);
        }
        if let Some(plan_id) = update.plan_id {
            model.plan_id = Set(plan_id);
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }
        if let Some(week) = update.week {
            model.week = Set(week);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("更新报告失败: {e}")))?;

        // 给出明细时整体替换
        if let Some(students) = update.students {
            self.replace_report_students_impl(report_id, students)
                .await?;
        }

        self.get_report_by_id_impl(report_id).await
    }

    /// 删除报告
    pub async fn delete_report_impl(&self, report_id: i64) -> Result<bool> {
        let result = Reports::delete_by_id(report_id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("删除报告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 报告内联学生明细（附带学生标识）
    pub async fn list_report_students_impl(
        &self,
        report_id: i64,
    ) -> Result<Vec<ReportStudentDetail>> {
        let rows = ReportStudents::find()
            .filter(ReportStudentColumn::ReportId.eq(report_id))
            .find_also_related(Students)
            .all(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询报告明细失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(entry, student)| {
                let (osis_number, first_name, last_name) = match student {
                    Some(s) => (Some(s.osis_number), Some(s.first_name), Some(s.last_name)),
                    None => (None, None, None),
                };
                ReportStudentDetail {
                    entry: entry.into_report_student(),
                    osis_number,
                    first_name,
                    last_name,
                }
            })
            .collect())
    }

    /// 把选中的报告 ID 集收敛到可见范围内
    pub async fn filter_report_ids_in_scope_impl(
        &self,
        report_ids: &[i64],
        scope: ReportScope,
    ) -> Result<Vec<i64>> {
        if report_ids.is_empty() || scope == ReportScope::Nothing {
            return Ok(vec![]);
        }

        let mut select = Reports::find().filter(Column::Id.is_in(report_ids.to_vec()));

        match scope {
            ReportScope::All | ReportScope::Nothing => {}
            ReportScope::School(school_id) => {
                select = select
                    .join(JoinType::InnerJoin, crate::entity::reports::Relation::Group.def())
                    .join(
                        JoinType::InnerJoin,
                        crate::entity::groups::Relation::Section.def(),
                    )
                    .filter(SectionColumn::SchoolId.eq(school_id));
            }
            ReportScope::Instructor(instructor_id) => {
                select = select
                    .join(JoinType::InnerJoin, crate::entity::reports::Relation::Group.def())
                    .filter(GroupColumn::InstructorId.eq(instructor_id));
            }
        }

        let reports = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询报告失败: {e}")))?;

        Ok(reports.into_iter().map(|m| m.id).collect())
    }

    /// 导出平铺行：每条报告学生明细对应一行，关联字段就地解析
    pub async fn list_report_export_rows_impl(
        &self,
        report_ids: &[i64],
    ) -> Result<Vec<ReportExportRow>> {
        let mut rows: Vec<ReportExportRow> = Vec::new();

        for &report_id in report_ids {
            let report = match Reports::find_by_id(report_id)
                .one(&self.db)
                .await
                .map_err(|e| TutorTrackError::database_operation(format!("查询报告失败: {e}")))?
            {
                Some(r) => r,
                None => continue,
            };

            let group = Groups::find_by_id(report.group_id)
                .one(&self.db)
                .await
                .map_err(|e| TutorTrackError::database_operation(format!("查询小组失败: {e}")))?
                .ok_or_else(|| {
                    TutorTrackError::not_found(format!("小组 {} 不存在", report.group_id))
                })?;

            let section = Sections::find_by_id(group.section_id)
                .one(&self.db)
                .await
                .map_err(|e| TutorTrackError::database_operation(format!("查询班级失败: {e}")))?
                .ok_or_else(|| {
                    TutorTrackError::not_found(format!("班级 {} 不存在", group.section_id))
                })?;

            let course = Courses::find_by_id(section.course_id)
                .one(&self.db)
                .await
                .map_err(|e| TutorTrackError::database_operation(format!("查询课程失败: {e}")))?
                .ok_or_else(|| {
                    TutorTrackError::not_found(format!("课程 {} 不存在", section.course_id))
                })?;

            let plan = Plans::find_by_id(report.plan_id)
                .one(&self.db)
                .await
                .map_err(|e| TutorTrackError::database_operation(format!("查询计划失败: {e}")))?
                .ok_or_else(|| {
                    TutorTrackError::not_found(format!("计划 {} 不存在", report.plan_id))
                })?;

            // 学习目标代码；没有结构化目标时回落到计划的替代文本
            let learning_target = match plan.learning_target_id {
                Some(target_id) => LearningTargets::find_by_id(target_id)
                    .one(&self.db)
                    .await
                    .map_err(|e| {
                        TutorTrackError::database_operation(format!("查询学习目标失败: {e}"))
                    })?
                    .map(|t| t.code),
                None => plan.alt_learning_target.clone(),
            };

            // 小组辅导教师的姓名
            let instructor = Instructors::find_by_id(group.instructor_id)
                .one(&self.db)
                .await
                .map_err(|e| {
                    TutorTrackError::database_operation(format!("查询教师档案失败: {e}"))
                })?
                .ok_or_else(|| {
                    TutorTrackError::not_found(format!("教师档案 {} 不存在", group.instructor_id))
                })?;

            let instructor_name = Users::find_by_id(instructor.user_id)
                .one(&self.db)
                .await
                .map_err(|e| TutorTrackError::database_operation(format!("查询用户失败: {e}")))?
                .map(|u| {
                    format!(
                        "{} {}",
                        u.first_name.as_deref().unwrap_or(""),
                        u.last_name.as_deref().unwrap_or("")
                    )
                    .trim()
                    .to_string()
                })
                .unwrap_or_default();

            let student_rows = ReportStudents::find()
                .filter(ReportStudentColumn::ReportId.eq(report.id))
                .find_also_related(Students)
                .all(&self.db)
                .await
                .map_err(|e| {
                    TutorTrackError::database_operation(format!("查询报告明细失败: {e}"))
                })?;

            for (entry, student) in student_rows {
                let student = match student {
                    Some(s) => s,
                    None => continue,
                };
                let entry = entry.into_report_student();

                rows.push(ReportExportRow {
                    report_id: report.id,
                    osis_number: student.osis_number,
                    course_code: course.code.clone(),
                    year_code: section.year_code.clone(),
                    date: report.date,
                    semester_code: section.semester_code.clone(),
                    week: report.week,
                    attendance: entry.attendance,
                    dosage: plan.dosage,
                    exit_ticket: entry.exit_ticket,
                    exit_ticket_denominator: plan.exit_ticket_denominator,
                    learning_target: learning_target.clone(),
                    homework_effort: entry.homework_effort,
                    homework_accuracy: entry.homework_accuracy,
                    homework_denominator: plan.homework_denominator,
                    quiz: entry.quiz,
                    instructor_name: instructor_name.clone(),
                });
            }
        }

        Ok(rows)
    }

    /// 标记报告为已导出，返回影响行数
    pub async fn mark_reports_exported_impl(&self, report_ids: &[i64]) -> Result<u64> {
        if report_ids.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let result = Reports::update_many()
            .col_expr(Column::Exported, sea_orm::sea_query::Expr::value(true))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.is_in(report_ids.to_vec()))
            .exec(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("标记导出失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 整体替换报告学生明细
    async fn replace_report_students_impl(
        &self,
        report_id: i64,
        students: Vec<ReportStudentInput>,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        ReportStudents::delete_many()
            .filter(ReportStudentColumn::ReportId.eq(report_id))
            .exec(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("清空报告明细失败: {e}")))?;

        for input in students {
            let entry = ReportStudentActiveModel {
                report_id: Set(report_id),
                student_id: Set(input.student_id),
                attendance: Set(input.attendance.to_string()),
                exit_ticket: Set(input.exit_ticket),
                homework_effort: Set(input.homework_effort.to_string()),
                homework_accuracy: Set(input.homework_accuracy),
                quiz: Set(input.quiz),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            entry.insert(&self.db).await.map_err(|e| {
                TutorTrackError::database_operation(format!("添加报告明细失败: {e}"))
            })?;
        }

        Ok(())
    }
}
