//! 可见范围
//!
//! 把请求者的角色换算成行级过滤条件，列表与单对象访问共用同一套范围。

use crate::models::users::entities::{User, UserRole};

/// 小组 / 计划的可见范围：管理员看全部，其余只看自己名下的记录
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OwnerScope {
    /// 不过滤（管理员）
    All,
    /// 限定到某个辅导教师
    Instructor(i64),
    /// 无辅导教师档案，什么都看不到
    Nothing,
}

impl OwnerScope {
    /// 小组 / 计划没有导出员档次：除管理员外一律按本人过滤
    pub fn for_user(user: &User) -> Self {
        match user.role {
            UserRole::Admin => OwnerScope::All,
            _ => user
                .instructor
                .as_ref()
                .map(|i| OwnerScope::Instructor(i.id))
                .unwrap_or(OwnerScope::Nothing),
        }
    }

    pub fn allows_instructor(&self, instructor_id: i64) -> bool {
        match self {
            OwnerScope::All => true,
            OwnerScope::Instructor(own) => *own == instructor_id,
            OwnerScope::Nothing => false,
        }
    }
}

/// 报告的可见范围：管理员全部、导出员按学校、辅导教师按本人
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportScope {
    All,
    /// 导出员：限定到所在学校（经 小组→班级→学校 关联）
    School(i64),
    /// 辅导教师：限定到本人的小组
    Instructor(i64),
    Nothing,
}

impl ReportScope {
    /// 管理员全量；导出员限定本校；其余限定本人。没有教师档案就两手空空
    pub fn for_user(user: &User) -> Self {
        match user.role {
            UserRole::Admin => ReportScope::All,
            UserRole::Exporter => user
                .instructor
                .as_ref()
                .map(|i| ReportScope::School(i.school_id))
                .unwrap_or(ReportScope::Nothing),
            UserRole::Instructor => user
                .instructor
                .as_ref()
                .map(|i| ReportScope::Instructor(i.id))
                .unwrap_or(ReportScope::Nothing),
        }
    }

    /// 判断一条报告（其小组的教师与学校）是否落在范围内
    pub fn allows(&self, instructor_id: i64, school_id: i64) -> bool {
        match self {
            ReportScope::All => true,
            ReportScope::School(own) => *own == school_id,
            ReportScope::Instructor(own) => *own == instructor_id,
            ReportScope::Nothing => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{Instructor, UserStatus};

    fn staff_user(role: UserRole, instructor: Option<Instructor>) -> User {
        User {
            id: 1,
            username: "tutor_01".into(),
            email: "t@example.org".into(),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            first_name: None,
            last_name: None,
            instructor,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn profile(id: i64, school_id: i64) -> Instructor {
        Instructor {
            id,
            user_id: 1,
            school_id,
        }
    }

    #[test]
    fn test_owner_scope_for_user() {
        // 管理员看全部
        assert_eq!(
            OwnerScope::for_user(&staff_user(UserRole::Admin, None)),
            OwnerScope::All
        );
        // 辅导教师只看自己
        assert_eq!(
            OwnerScope::for_user(&staff_user(UserRole::Instructor, Some(profile(7, 3)))),
            OwnerScope::Instructor(7)
        );
        // 导出员对小组/计划没有特殊档次
        assert_eq!(
            OwnerScope::for_user(&staff_user(UserRole::Exporter, Some(profile(7, 3)))),
            OwnerScope::Instructor(7)
        );
        // 无教师档案什么都看不到
        assert_eq!(
            OwnerScope::for_user(&staff_user(UserRole::Instructor, None)),
            OwnerScope::Nothing
        );
    }

    #[test]
    fn test_report_scope_for_user() {
        assert_eq!(
            ReportScope::for_user(&staff_user(UserRole::Admin, None)),
            ReportScope::All
        );
        // 导出员按所在学校过滤
        assert_eq!(
            ReportScope::for_user(&staff_user(UserRole::Exporter, Some(profile(7, 3)))),
            ReportScope::School(3)
        );
        assert_eq!(
            ReportScope::for_user(&staff_user(UserRole::Instructor, Some(profile(7, 3)))),
            ReportScope::Instructor(7)
        );
        assert_eq!(
            ReportScope::for_user(&staff_user(UserRole::Exporter, None)),
            ReportScope::Nothing
        );
    }

    #[test]
    fn test_owner_scope() {
        assert!(OwnerScope::All.allows_instructor(7));
        assert!(OwnerScope::Instructor(7).allows_instructor(7));
        assert!(!OwnerScope::Instructor(7).allows_instructor(8));
        assert!(!OwnerScope::Nothing.allows_instructor(7));
    }

    #[test]
    fn test_report_scope() {
        assert!(ReportScope::All.allows(1, 2));
        assert!(ReportScope::School(2).allows(99, 2));
        assert!(!ReportScope::School(2).allows(1, 3));
        assert!(ReportScope::Instructor(1).allows(1, 99));
        assert!(!ReportScope::Instructor(1).allows(2, 2));
        assert!(!ReportScope::Nothing.allows(1, 2));
    }
}
