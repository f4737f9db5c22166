//! 报告列表筛选器
//!
//! 已导出标记、课程、日期区间三个筛选器只对导出员（及管理员）展示，
//! 其他角色得到空集合。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::entities::Course,
    reports::responses::{FilterChoice, ReportFilterDescriptor, ReportFiltersResponse},
    users::entities::UserRole,
};

/// 导出员可见的筛选器集合；课程筛选器带全量课程选项
fn exporter_filters(courses: &[Course]) -> Vec<ReportFilterDescriptor> {
    vec![
        ReportFilterDescriptor {
            name: "exported".to_string(),
            kind: "flag".to_string(),
            choices: None,
        },
        ReportFilterDescriptor {
            name: "course".to_string(),
            kind: "choice".to_string(),
            choices: Some(
                courses
                    .iter()
                    .map(|c| FilterChoice {
                        id: c.id,
                        label: c.code.clone(),
                    })
                    .collect(),
            ),
        },
        ReportFilterDescriptor {
            name: "date".to_string(),
            kind: "date_range".to_string(),
            choices: None,
        },
    ]
}

pub async fn get_filters(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user",
            )));
        }
    };

    // 非导出员没有任何筛选器
    if !UserRole::exporter_roles().contains(&&user.role) {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReportFiltersResponse { filters: vec![] },
            "Report filters retrieved successfully",
        )));
    }

    let courses = match storage.list_all_courses().await {
        Ok(courses) => courses,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ReportFiltersResponse {
            filters: exporter_filters(&courses),
        },
        "Report filters retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, code: &str) -> Course {
        Course {
            id,
            code: code.to_string(),
            description: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_exporter_filter_set() {
        let filters = exporter_filters(&[course(1, "ALG1"), course(2, "GEO")]);
        let names: Vec<&str> = filters.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["exported", "course", "date"]);
    }

    #[test]
    fn test_course_filter_lists_all_courses() {
        let filters = exporter_filters(&[course(1, "ALG1"), course(2, "GEO")]);
        let course_filter = filters.iter().find(|f| f.name == "course").unwrap();
        let choices = course_filter.choices.as_ref().unwrap();
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].label, "ALG1");
        assert_eq!(choices[1].id, 2);
    }

    #[test]
    fn test_filter_kinds() {
        let filters = exporter_filters(&[]);
        assert_eq!(filters[0].kind, "flag");
        assert_eq!(filters[1].kind, "choice");
        assert_eq!(filters[2].kind, "date_range");
    }
}
