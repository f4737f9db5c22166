//! 辅导计划存储操作

use super::SeaOrmStorage;
use crate::entity::plans::{ActiveModel, Column, Entity as Plans};
use crate::errors::{Result, TutorTrackError};
use crate::models::{
    PaginationInfo,
    plans::{
        entities::Plan,
        requests::{CreatePlanRequest, PlanListQuery, UpdatePlanRequest},
        responses::PlanListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建计划（instructor_id 由服务层按权限解析）
    pub async fn create_plan_impl(
        &self,
        instructor_id: i64,
        req: CreatePlanRequest,
    ) -> Result<Plan> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(req.course_id),
            instructor_id: Set(instructor_id),
            description: Set(req.description),
            learning_target_id: Set(req.learning_target_id),
            alt_learning_target: Set(req.alt_learning_target),
            dosage: Set(req.dosage),
            exit_ticket_denominator: Set(req.exit_ticket_denominator),
            homework_denominator: Set(req.homework_denominator),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("创建计划失败: {e}")))?;

        Ok(result.into_plan())
    }

    /// 通过 ID 获取计划
    pub async fn get_plan_by_id_impl(&self, plan_id: i64) -> Result<Option<Plan>> {
        let result = Plans::find_by_id(plan_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询计划失败: {e}")))?;

        Ok(result.map(|m| m.into_plan()))
    }

    /// 分页列出计划（query.instructor_id 即可见范围过滤）
    pub async fn list_plans_with_pagination_impl(
        &self,
        query: PlanListQuery,
    ) -> Result<PlanListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Plans::find();

        // 教师筛选（非管理员的所有权范围）
        if let Some(instructor_id) = query.instructor_id {
            select = select.filter(Column::InstructorId.eq(instructor_id));
        }

        // 课程筛选
        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 搜索条件（描述）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Description.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询计划总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询计划页数失败: {e}")))?;

        let plans = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询计划列表失败: {e}")))?;

        Ok(PlanListResponse {
            items: plans.into_iter().map(|m| m.into_plan()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新计划信息
    pub async fn update_plan_impl(
        &self,
        plan_id: i64,
        update: UpdatePlanRequest,
    ) -> Result<Option<Plan>> {
        let existing = self.get_plan_by_id_impl(plan_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(plan_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(course_id) = update.course_id {
            model.course_id = Set(course_id);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(learning_target_id) = update.learning_target_id {
            model.learning_target_id = Set(Some(learning_target_id));
        }
        if let Some(alt_learning_target) = update.alt_learning_target {
            model.alt_learning_target = Set(Some(alt_learning_target));
        }
        if let Some(dosage) = update.dosage {
            model.dosage = Set(dosage);
        }
        if let Some(exit_ticket_denominator) = update.exit_ticket_denominator {
            model.exit_ticket_denominator = Set(exit_ticket_denominator);
        }
        if let Some(homework_denominator) = update.homework_denominator {
            model.homework_denominator = Set(homework_denominator);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("更新计划失败: {e}")))?;

        self.get_plan_by_id_impl(plan_id).await
    }

    /// 删除计划
    pub async fn delete_plan_impl(&self, plan_id: i64) -> Result<bool> {
        let result = Plans::delete_by_id(plan_id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("删除计划失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
