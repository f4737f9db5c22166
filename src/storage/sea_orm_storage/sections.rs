//! 班级存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::sections::{ActiveModel, Column, Entity as Sections};
use crate::errors::{Result, TutorTrackError};
use crate::models::{
    PaginationInfo,
    sections::{
        entities::{Section, SectionListItem},
        requests::{CreateSectionRequest, SectionListQuery, UpdateSectionRequest},
        responses::SectionListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_section_impl(&self, req: CreateSectionRequest) -> Result<Section> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            description: Set(req.description),
            course_id: Set(req.course_id),
            school_id: Set(req.school_id),
            year_code: Set(req.year_code),
            semester_code: Set(req.semester_code),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_section())
    }

    /// 通过 ID 获取班级
    pub async fn get_section_by_id_impl(&self, id: i64) -> Result<Option<Section>> {
        let result = Sections::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_section()))
    }

    /// 分页列出班级（附带课程代码）
    pub async fn list_sections_with_pagination_impl(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Sections::find();

        // 课程筛选
        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 学校筛选
        if let Some(school_id) = query.school_id {
            select = select.filter(Column::SchoolId.eq(school_id));
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
            .map_err(|e| TutorTrackError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询班级页数失败: {e}")))?;

        let sections = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询班级列表失败: {e}")))?;

        // 批量解析课程代码
        let course_ids: Vec<i64> = sections.iter().map(|m| m.course_id).collect();
        let courses: HashMap<i64, String> = Courses::find()
            .filter(CourseColumn::Id.is_in(course_ids))
            .all(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询课程失败: {e}")))?
            .into_iter()
            .map(|c| (c.id, c.code))
            .collect();

        let items = sections
            .into_iter()
            .map(|m| {
                let course_code = courses.get(&m.course_id).cloned();
                SectionListItem {
                    section: m.into_section(),
                    course_code,
                }
            })
            .collect();

        Ok(SectionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班级信息
    pub async fn update_section_impl(
        &self,
        id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>> {
        let existing = self.get_section_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(course_id) = update.course_id {
            model.course_id = Set(course_id);
        }
        if let Some(school_id) = update.school_id {
            model.school_id = Set(school_id);
        }
        if let Some(year_code) = update.year_code {
            model.year_code = Set(year_code);
        }
        if let Some(semester_code) = update.semester_code {
            model.semester_code = Set(semester_code);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_section_by_id_impl(id).await
    }

    /// 删除班级
    pub async fn delete_section_impl(&self, id: i64) -> Result<bool> {
        let result = Sections::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
