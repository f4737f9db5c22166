//! 学生存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::schools::{Column as SchoolColumn, Entity as Schools};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, TutorTrackError};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentListItem},
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            osis_number: Set(req.osis_number),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            school_id: Set(req.school_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生（附带学校名称）
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 学校筛选
        if let Some(school_id) = query.school_id {
            select = select.filter(Column::SchoolId.eq(school_id));
        }

        // 搜索条件（学号或姓名）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::OsisNumber.contains(&escaped))
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_asc(Column::LastName);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询学生列表失败: {e}")))?;

        // 批量解析学校名称
        let school_ids: Vec<i64> = students.iter().map(|m| m.school_id).collect();
        let schools: HashMap<i64, String> = Schools::find()
            .filter(SchoolColumn::Id.is_in(school_ids))
            .all(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询学校失败: {e}")))?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        let items = students
            .into_iter()
            .map(|m| {
                let school_name = schools.get(&m.school_id).cloned();
                StudentListItem {
                    student: m.into_student(),
                    school_name,
                }
            })
            .collect();

        Ok(StudentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(osis_number) = update.osis_number {
            model.osis_number = Set(osis_number);
        }
        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }
        if let Some(school_id) = update.school_id {
            model.school_id = Set(school_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
