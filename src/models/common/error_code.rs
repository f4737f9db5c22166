use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 业务错误码
///
/// 与 HTTP 状态码配合使用：前两位对应 HTTP 状态段，后三位为业务序号。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 400xx 请求错误
    BadRequest = 40000,

    // 401xx 认证错误
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403xx 权限错误
    Forbidden = 40300,
    GroupPermissionDenied = 40301,
    PlanPermissionDenied = 40302,
    ReportPermissionDenied = 40303,
    CanNotDeleteCurrentUser = 40304,

    // 404xx 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    SchoolNotFound = 40402,
    CourseNotFound = 40403,
    SectionNotFound = 40404,
    StudentNotFound = 40405,
    StandardNotFound = 40406,
    LearningTargetNotFound = 40407,
    GroupNotFound = 40408,
    PlanNotFound = 40409,
    ReportNotFound = 40410,
    InstructorNotFound = 40411,

    // 409xx 冲突
    UserAlreadyExists = 40900,
    StudentAlreadyExists = 40901,

    // 422xx 校验错误
    UserNameInvalid = 42200,
    UserEmailInvalid = 42201,
    UserPasswordInvalid = 42202,
    StudentOsisInvalid = 42203,

    // 429xx 频率限制
    RateLimitExceeded = 42900,

    // 500xx 服务器错误
    InternalServerError = 50000,
    UserCreationFailed = 50001,
    UserUpdateFailed = 50002,
    UserDeleteFailed = 50003,
    ReportExportFailed = 50004,
}
