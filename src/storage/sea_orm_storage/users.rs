//! 用户与辅导教师档案存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::instructors::{
    ActiveModel as InstructorActiveModel, Column as InstructorColumn, Entity as Instructors,
};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, TutorTrackError};
use crate::models::{
    PaginationInfo,
    groups::responses::InstructorChoice,
    users::{
        entities::{Instructor, User},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建用户（password 字段由服务层传入哈希值）
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            status: Set("active".to_string()),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("创建用户失败: {e}")))?;

        let mut user = result.into_user();

        // 内联的辅导教师档案
        if let Some(profile) = req.instructor {
            let instructor = InstructorActiveModel {
                user_id: Set(user.id),
                school_id: Set(profile.school_id),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            let inserted = instructor.insert(&self.db).await.map_err(|e| {
                TutorTrackError::database_operation(format!("创建教师档案失败: {e}"))
            })?;
            user.instructor = Some(inserted.into_instructor());
        }

        Ok(user)
    }

    /// 通过 ID 获取用户（附带教师档案）
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询用户失败: {e}")))?;

        match result {
            Some(model) => {
                let mut user = model.into_user();
                user.instructor = self.get_instructor_by_user_id_impl(user.id).await?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// 通过用户名或邮箱获取用户（附带教师档案）
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询用户失败: {e}")))?;

        match result {
            Some(model) => {
                let mut user = model.into_user();
                user.instructor = self.get_instructor_by_user_id_impl(user.id).await?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Users::find();

        // 角色筛选
        if let Some(role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        // 状态筛选
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 搜索条件（用户名或邮箱）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Username.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询用户总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询用户页数失败: {e}")))?;

        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询用户列表失败: {e}")))?;

        // 批量挂载教师档案
        let user_ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let mut profiles: HashMap<i64, Instructor> = Instructors::find()
            .filter(InstructorColumn::UserId.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询教师档案失败: {e}")))?
            .into_iter()
            .map(|m| (m.user_id, m.into_instructor()))
            .collect();

        let items = models
            .into_iter()
            .map(|m| {
                let mut user = m.into_user();
                user.instructor = profiles.remove(&user.id);
                user
            })
            .collect();

        Ok(UserListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        // 先检查用户是否存在
        let existing = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询用户失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(password_hash) = update.password {
            // 服务层已哈希
            model.password_hash = Set(password_hash);
        }
        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(first_name) = update.first_name {
            model.first_name = Set(Some(first_name));
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(Some(last_name));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("更新用户失败: {e}")))?;

        // 内联的教师档案：存在则改挂靠学校，不存在则补建
        if let Some(profile) = update.instructor {
            match Instructors::find()
                .filter(InstructorColumn::UserId.eq(id))
                .one(&self.db)
                .await
                .map_err(|e| {
                    TutorTrackError::database_operation(format!("查询教师档案失败: {e}"))
                })? {
                Some(existing_profile) => {
                    let mut m: InstructorActiveModel = existing_profile.into();
                    m.school_id = Set(profile.school_id);
                    m.updated_at = Set(now);
                    m.update(&self.db).await.map_err(|e| {
                        TutorTrackError::database_operation(format!("更新教师档案失败: {e}"))
                    })?;
                }
                None => {
                    let m = InstructorActiveModel {
                        user_id: Set(id),
                        school_id: Set(profile.school_id),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    m.insert(&self.db).await.map_err(|e| {
                        TutorTrackError::database_operation(format!("创建教师档案失败: {e}"))
                    })?;
                }
            }
        }

        self.get_user_by_id_impl(id).await
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            id: Set(id),
            last_login: Set(Some(now)),
            ..Default::default()
        };

        match model.update(&self.db).await {
            Ok(_) => Ok(true),
            Err(sea_orm::DbErr::RecordNotFound(_)) => Ok(false),
            Err(e) => Err(TutorTrackError::database_operation(format!(
                "更新最后登录时间失败: {e}"
            ))),
        }
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("统计用户数量失败: {e}")))
    }

    /// 获取某用户的辅导教师档案
    pub async fn get_instructor_by_user_id_impl(&self, user_id: i64) -> Result<Option<Instructor>> {
        let result = Instructors::find()
            .filter(InstructorColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询教师档案失败: {e}")))?;

        Ok(result.map(|m| m.into_instructor()))
    }

    /// 全部辅导教师下拉选项（管理员表单用）
    pub async fn list_instructor_choices_impl(&self) -> Result<Vec<InstructorChoice>> {
        let rows = Instructors::find()
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| TutorTrackError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(instructor, user)| {
                let name = user
                    .map(|u| {
                        let full = format!(
                            "{} {}",
                            u.first_name.as_deref().unwrap_or(""),
                            u.last_name.as_deref().unwrap_or("")
                        )
                        .trim()
                        .to_string();
                        if full.is_empty() { u.username } else { full }
                    })
                    .unwrap_or_default();
                InstructorChoice {
                    id: instructor.id,
                    name,
                    school_id: instructor.school_id,
                }
            })
            .collect())
    }
}
