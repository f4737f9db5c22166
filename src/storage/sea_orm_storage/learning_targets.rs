//! 课程标准与学习目标存储操作

use super::SeaOrmStorage;
use crate::entity::learning_targets::{
    ActiveModel as TargetActiveModel, Column as TargetColumn, Entity as LearningTargets,
};
use crate::entity::standards::{
    ActiveModel as StandardActiveModel, Column as StandardColumn, Entity as Standards,
};
use crate::errors::{Result, TutorTrackError};
use crate::models::{
    PaginationInfo,
    learning_targets::{
        entities::{LearningTarget, Standard},
        requests::{
            CreateLearningTargetRequest, CreateStandardRequest, LearningTargetListQuery,
            UpdateLearningTargetRequest, UpdateStandardRequest,
        },
        responses::{LearningTargetListResponse, StandardListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建课程标准
    pub async fn create_standard_impl(&self, req: CreateStandardRequest) -> Result<Standard> {
        let now = chrono::Utc::now().timestamp();

        let model = StandardActiveModel {
            code: Set(req.code),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("创建课程标准失败: {e}")))?;

        Ok(result.into_standard())
    }

    /// 通过 ID 获取课程标准
    pub async fn get_standard_by_id_impl(&self, id: i64) -> Result<Option<Standard>> {
        let result = Standards::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询课程标准失败: {e}")))?;

        Ok(result.map(|m| m.into_standard()))
    }

    /// 分页列出课程标准
    pub async fn list_standards_with_pagination_impl(
        &self,
        query: LearningTargetListQuery,
    ) -> Result<StandardListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Standards::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(StandardColumn::Code.contains(&escaped))
                    .add(StandardColumn::Description.contains(&escaped)),
            );
        }

        select = select.order_by_asc(StandardColumn::Code);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TutorTrackError::database_operation(format!("查询课程标准总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TutorTrackError::database_operation(format!("查询课程标准页数失败: {e}"))
        })?;

        let standards = paginator.fetch_page(page - 1).await.map_err(|e| {
            TutorTrackError::database_operation(format!("查询课程标准列表失败: {e}"))
        })?;

        Ok(StandardListResponse {
            items: standards.into_iter().map(|m| m.into_standard()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程标准
    pub async fn update_standard_impl(
        &self,
        id: i64,
        update: UpdateStandardRequest,
    ) -> Result<Option<Standard>> {
        let existing = self.get_standard_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = StandardActiveModel {
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

        model
            .update(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("更新课程标准失败: {e}")))?;

        self.get_standard_by_id_impl(id).await
    }

    /// 删除课程标准
    pub async fn delete_standard_impl(&self, id: i64) -> Result<bool> {
        let result = Standards::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("删除课程标准失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建学习目标
    pub async fn create_learning_target_impl(
        &self,
        req: CreateLearningTargetRequest,
    ) -> Result<LearningTarget> {
        let now = chrono::Utc::now().timestamp();

        let model = TargetActiveModel {
            code: Set(req.code),
            description: Set(req.description),
            standard_id: Set(req.standard_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("创建学习目标失败: {e}")))?;

        Ok(result.into_learning_target())
    }

    /// 通过 ID 获取学习目标
    pub async fn get_learning_target_by_id_impl(&self, id: i64) -> Result<Option<LearningTarget>> {
        let result = LearningTargets::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询学习目标失败: {e}")))?;

        Ok(result.map(|m| m.into_learning_target()))
    }

    /// 分页列出学习目标
    pub async fn list_learning_targets_with_pagination_impl(
        &self,
        query: LearningTargetListQuery,
    ) -> Result<LearningTargetListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = LearningTargets::find();

        // 课程标准筛选
        if let Some(standard_id) = query.standard_id {
            select = select.filter(TargetColumn::StandardId.eq(standard_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(TargetColumn::Code.contains(&escaped))
                    .add(TargetColumn::Description.contains(&escaped)),
            );
        }

        select = select.order_by_asc(TargetColumn::Code);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TutorTrackError::database_operation(format!("查询学习目标总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TutorTrackError::database_operation(format!("查询学习目标页数失败: {e}"))
        })?;

        let targets = paginator.fetch_page(page - 1).await.map_err(|e| {
            TutorTrackError::database_operation(format!("查询学习目标列表失败: {e}"))
        })?;

        Ok(LearningTargetListResponse {
            items: targets
                .into_iter()
                .map(|m| m.into_learning_target())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学习目标
    pub async fn update_learning_target_impl(
        &self,
        id: i64,
        update: UpdateLearningTargetRequest,
    ) -> Result<Option<LearningTarget>> {
        let existing = self.get_learning_target_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = TargetActiveModel {
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
        if let Some(standard_id) = update.standard_id {
            model.standard_id = Set(Some(standard_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("更新学习目标失败: {e}")))?;

        self.get_learning_target_by_id_impl(id).await
    }

    /// 删除学习目标
    pub async fn delete_learning_target_impl(&self, id: i64) -> Result<bool> {
        let result = LearningTargets::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("删除学习目标失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
