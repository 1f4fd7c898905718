use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Doc-only mirror of `models::user::User`.
#[derive(ToSchema)]
pub struct UserDoc {
    pub created_at: String,
    pub display_name: String,
    pub email: String,
}

#[derive(ToSchema)]
pub struct CreateUserInputDoc {
    pub display_name: String,
    pub email: String,
}

#[derive(ToSchema)]
pub struct CreateUserOutputDoc {
    pub user_id: String,
}

#[derive(ToSchema)]
pub struct UpdateUserInputDoc {
    pub display_name: String,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    pub status: String,
    pub code: Option<i64>,
    pub error: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list_users,
        crate::routes::users::create_user,
        crate::routes::users::get_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            UserDoc,
            CreateUserInputDoc,
            CreateUserOutputDoc,
            UpdateUserInputDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users")
    )
)]
pub struct ApiDoc;
