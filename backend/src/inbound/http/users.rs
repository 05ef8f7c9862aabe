//! Users API handlers.
//!
//! ```text
//! GET    /users
//! POST   /users       {"id":1,"name":"john","email":"j@x.com","age":"20"}
//! GET    /users/{id}
//! PUT    /users/{id}  {"name":"jane","email":"jn@x.com","age":"25"}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewUser, UserFields, UserId, UserResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::message::MessageResponse;
use crate::inbound::http::schemas::{ErrorSchema, UserResponseSchema};
use crate::inbound::http::state::UsersState;

/// Request body for creating or replacing a user.
///
/// `id` is honoured on create and ignored on update.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    /// Client-chosen id; ignored on update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Display name.
    #[schema(example = "john")]
    pub name: String,
    /// Contact address, stored verbatim.
    #[schema(example = "j@x.com")]
    pub email: String,
    /// Age as free text.
    #[schema(example = "20")]
    pub age: String,
}

impl UserRequest {
    fn into_parts(self) -> (Option<UserId>, UserFields) {
        let Self {
            id,
            name,
            email,
            age,
        } = self;
        (id.map(UserId::new), UserFields { name, email, age })
    }
}

/// List every user ordered by id.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserResponseSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<UsersState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.query.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserResponseSchema),
        (status = 400, description = "Id is not an integer", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<UsersState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.query.get_user(UserId::new(id.into_inner())).await?;
    Ok(web::Json(user))
}

/// Create a user, optionally under a caller-chosen id.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 409, description = "Id already taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<UsersState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let (id, fields) = payload.into_inner().into_parts();
    let user = NewUser { id, fields };
    let created = state.command.create_user(user).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("User created", created.id)))
}

/// Replace name, email, and age of an existing user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Malformed body or id", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUserById"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<UsersState>,
    id: web::Path<i32>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let (_, fields) = payload.into_inner().into_parts();
    let updated = state
        .command
        .update_user(UserId::new(id.into_inner()), fields)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User updated", updated.id)))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Id is not an integer", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUserById"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<UsersState>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.command.delete_user(UserId::new(id.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register every users endpoint on a service config.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use virtual_market::inbound::http::users;
///
/// let _app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}
