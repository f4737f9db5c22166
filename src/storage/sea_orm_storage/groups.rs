//! 辅导小组存储操作
//!
//! 小组成员随小组表单内联维护，student_ids 给出时整体替换。

use super::SeaOrmStorage;
use crate::entity::group_students::{
    ActiveModel as GroupStudentActiveModel, Column as GroupStudentColumn, Entity as GroupStudents,
};
use crate::entity::groups::{ActiveModel, Column, Entity as Groups};
use crate::entity::students::Entity as Students;
use crate::errors::{Result, TutorTrackError};
use crate::models::{
    PaginationInfo,
    groups::{
        entities::{Group, GroupStudentEntry},
        requests::{CreateGroupRequest, GroupListQuery, UpdateGroupRequest},
        responses::GroupListResponse,
    },
    reports::responses::{GroupChoice, StudentChoice},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建小组（instructor_id 由服务层按权限解析）
    pub async fn create_group_impl(
        &self,
        instructor_id: i64,
        req: CreateGroupRequest,
    ) -> Result<Group> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            section_id: Set(req.section_id),
            instructor_id: Set(instructor_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("创建小组失败: {e}")))?;

        // 内联成员名单
        if let Some(student_ids) = req.student_ids {
            self.replace_group_students_impl(result.id, student_ids)
                .await?;
        }

        Ok(result.into_group())
    }

    /// 通过 ID 获取小组
    pub async fn get_group_by_id_impl(&self, group_id: i64) -> Result<Option<Group>> {
        let result = Groups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询小组失败: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 分页列出小组（query.instructor_id 即可见范围过滤）
    pub async fn list_groups_with_pagination_impl(
        &self,
        query: GroupListQuery,
    ) -> Result<GroupListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Groups::find();

        // 教师筛选（非管理员的所有权范围）
        if let Some(instructor_id) = query.instructor_id {
            select = select.filter(Column::InstructorId.eq(instructor_id));
        }

        // 班级筛选
        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Code.contains(&escaped));
        }

        // 排序
        select = select.order_by_asc(Column::Code);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询小组总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询小组页数失败: {e}")))?;

        let groups = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询小组列表失败: {e}")))?;

        Ok(GroupListResponse {
            items: groups.into_iter().map(|m| m.into_group()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新小组信息
    pub async fn update_group_impl(
        &self,
        group_id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<Group>> {
        let existing = self.get_group_by_id_impl(group_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(group_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(section_id) = update.section_id {
            model.section_id = Set(section_id);
        }
        if let Some(instructor_id) = update.instructor_id {
            model.instructor_id = Set(instructor_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("更新小组失败: {e}")))?;

        // 给出成员名单时整体替换
        if let Some(student_ids) = update.student_ids {
            self.replace_group_students_impl(group_id, student_ids)
                .await?;
        }

        self.get_group_by_id_impl(group_id).await
    }

    /// 删除小组
    pub async fn delete_group_impl(&self, group_id: i64) -> Result<bool> {
        let result = Groups::delete_by_id(group_id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("删除小组失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 小组内联成员名单（附带学生标识）
    pub async fn list_group_students_impl(&self, group_id: i64) -> Result<Vec<GroupStudentEntry>> {
        let rows = GroupStudents::find()
            .filter(GroupStudentColumn::GroupId.eq(group_id))
            .find_also_related(Students)
            .all(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询小组成员失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, student)| {
                student.map(|s| GroupStudentEntry {
                    id: membership.id,
                    student_id: s.id,
                    osis_number: s.osis_number,
                    first_name: s.first_name,
                    last_name: s.last_name,
                })
            })
            .collect())
    }

    /// 小组下拉选项；Some(教师) 时限定为该教师名下的小组
    pub async fn list_group_choices_impl(
        &self,
        instructor_id: Option<i64>,
    ) -> Result<Vec<GroupChoice>> {
        let mut select = Groups::find();

        if let Some(instructor_id) = instructor_id {
            select = select.filter(Column::InstructorId.eq(instructor_id));
        }

        let groups = select
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询小组列表失败: {e}")))?;

        Ok(groups
            .into_iter()
            .map(|g| GroupChoice {
                id: g.id,
                code: g.code,
                section_id: g.section_id,
            })
            .collect())
    }

    /// 学生下拉选项；Some(教师) 时限定为该教师任意小组的成员
    pub async fn list_student_choices_impl(
        &self,
        instructor_id: Option<i64>,
    ) -> Result<Vec<StudentChoice>> {
        let students = match instructor_id {
            None => Students::find()
                .all(&self.db)
                .await
                .map_err(|e| TutorTrackError::database_operation(format!("查询学生失败: {e}")))?,
            Some(instructor_id) => {
                // 先取该教师的小组，再收集成员学生
                let group_ids: Vec<i64> = Groups::find()
                    .filter(Column::InstructorId.eq(instructor_id))
                    .all(&self.db)
                    .await
                    .map_err(|e| {
                        TutorTrackError::database_operation(format!("查询小组失败: {e}"))
                    })?
                    .into_iter()
                    .map(|g| g.id)
                    .collect();

                let student_ids: Vec<i64> = GroupStudents::find()
                    .filter(GroupStudentColumn::GroupId.is_in(group_ids))
                    .all(&self.db)
                    .await
                    .map_err(|e| {
                        TutorTrackError::database_operation(format!("查询小组成员失败: {e}"))
                    })?
                    .into_iter()
                    .map(|m| m.student_id)
                    .collect();

                Students::find()
                    .filter(crate::entity::students::Column::Id.is_in(student_ids))
                    .all(&self.db)
                    .await
                    .map_err(|e| {
                        TutorTrackError::database_operation(format!("查询学生失败: {e}"))
                    })?
            }
        };

        Ok(students
            .into_iter()
            .map(|s| StudentChoice {
                id: s.id,
                osis_number: s.osis_number,
                first_name: s.first_name,
                last_name: s.last_name,
            })
            .collect())
    }

    /// 整体替换小组成员
    async fn replace_group_students_impl(
        &self,
        group_id: i64,
        student_ids: Vec<i64>,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        GroupStudents::delete_many()
            .filter(GroupStudentColumn::GroupId.eq(group_id))
            .exec(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("清空小组成员失败: {e}")))?;

        for student_id in student_ids {
            let membership = GroupStudentActiveModel {
                group_id: Set(group_id),
                student_id: Set(student_id),
                created_at: Set(now),
                ..Default::default()
            };
            membership.insert(&self.db).await.map_err(|e| {
                TutorTrackError::database_operation(format!("添加小组成员失败: {e}"))
            })?;
        }

        Ok(())
    }
}
