//! Employee CRUD endpoints mounted under `/api/v1`.

mod payload;
mod service;

use axum::{
    Json, Router,
    extract::{FromRef, State},
    routing::get,
};
use entity::employees;
use platform_api::{
    ApiResult, ErrorBody,
    extract::{JsonPayload, PathParam},
};

pub use payload::{DeleteResponse, EmployeeDraft, EmployeePayload};
pub use service::EmployeeService;

use crate::http::AppState;

impl FromRef<AppState> for EmployeeService {
    fn from_ref(state: &AppState) -> Self {
        state.employees.clone()
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employee/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    tag = "employees",
    request_body(content = EmployeePayload, description = "Employee object stored in the database"),
    responses(
        (status = 200, description = "Employee created", body = employees::Model),
        (status = 400, description = "Missing or malformed fields", body = ErrorBody),
    )
)]
pub async fn create_employee(
    State(service): State<EmployeeService>,
    JsonPayload(payload): JsonPayload<EmployeePayload>,
) -> ApiResult<Json<employees::Model>> {
    let draft = EmployeeDraft::try_from(payload)?;
    Ok(Json(service.create(draft).await?))
}

/// View the list of employees.
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = "employees",
    responses(
        (status = 200, description = "Successfully retrieved list of employees", body = Vec<employees::Model>),
    )
)]
pub async fn list_employees(
    State(service): State<EmployeeService>,
) -> ApiResult<Json<Vec<employees::Model>>> {
    Ok(Json(service.list().await?))
}

/// Get an employee by id.
#[utoipa::path(
    get,
    path = "/api/v1/employee/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee id to look up")),
    responses(
        (status = 200, description = "Employee found", body = employees::Model),
        (status = 404, description = "No employee with this id", body = ErrorBody),
    )
)]
pub async fn get_employee(
    State(service): State<EmployeeService>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<Json<employees::Model>> {
    Ok(Json(service.get(id).await?))
}

/// Update an employee.
#[utoipa::path(
    put,
    path = "/api/v1/employee/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee id to update")),
    request_body(content = EmployeePayload, description = "Replacement employee fields"),
    responses(
        (status = 200, description = "Employee updated", body = employees::Model),
        (status = 400, description = "Missing or malformed fields", body = ErrorBody),
        (status = 404, description = "No employee with this id", body = ErrorBody),
    )
)]
pub async fn update_employee(
    State(service): State<EmployeeService>,
    PathParam(id): PathParam<i64>,
    JsonPayload(payload): JsonPayload<EmployeePayload>,
) -> ApiResult<Json<employees::Model>> {
    let draft = EmployeeDraft::try_from(payload)?;
    Ok(Json(service.update(id, draft).await?))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/api/v1/employee/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee id to delete")),
    responses(
        (status = 200, description = "Employee deleted", body = DeleteResponse),
        (status = 404, description = "No employee with this id", body = ErrorBody),
    )
)]
pub async fn delete_employee(
    State(service): State<EmployeeService>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    service.delete(id).await?;
    Ok(Json(DeleteResponse { deleted: true }))
}
