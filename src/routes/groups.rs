use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::groups::requests::{CreateGroupRequest, GroupQueryParams, UpdateGroupRequest};
use crate::services::GroupService;
use crate::utils::SafeGroupIdI64;

// 懒加载的全局 GROUP_SERVICE 实例
static GROUP_SERVICE: Lazy<GroupService> = Lazy::new(GroupService::new_lazy);

// HTTP处理程序
pub async fn list_groups(
    req: HttpRequest,
    query: web::Query<GroupQueryParams>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_groups(&req, query.into_inner()).await
}

pub async fn create_group(
    req: HttpRequest,
    group_data: web::Json<CreateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .create_group(&req, group_data.into_inner())
        .await
}

pub async fn get_group(req: HttpRequest, group_id: SafeGroupIdI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.get_group(&req, group_id.0).await
}

pub async fn update_group(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
    update_data: web::Json<UpdateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .update_group(&req, group_id.0, update_data.into_inner())
        .await
}

pub async fn delete_group(req: HttpRequest, group_id: SafeGroupIdI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.delete_group(&req, group_id.0).await
}

pub async fn list_instructor_choices(req: HttpRequest) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_instructor_choices(&req).await
}

// 配置路由
//
// 可见范围在服务层收敛：管理员看全部，其余只看自己名下的小组
pub fn configure_group_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/groups")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_groups))
                    .route(web::post().to(create_group)),
            )
            // 表单外键选项：非管理员只剩本人
            .route(
                "/choices/instructors",
                web::get().to(list_instructor_choices),
            )
            .service(
                web::resource("/{group_id}")
                    .route(web::get().to(get_group))
                    .route(web::put().to(update_group))
                    .route(web::delete().to(delete_group)),
            ),
    );
}
