use axum::Json;
use platform_api::ErrorBody;
use utoipa::OpenApi;

use crate::employees::{self, DeleteResponse, EmployeePayload};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Management System",
        description = "Employee CRUD operations for the employee management system"
    ),
    paths(
        employees::create_employee,
        employees::list_employees,
        employees::get_employee,
        employees::update_employee,
        employees::delete_employee,
    ),
    components(schemas(entity::employees::Model, EmployeePayload, DeleteResponse, ErrorBody)),
    tags((name = "employees", description = "Employee records"))
)]
pub struct ApiDoc;

pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_employee_route() {
        let doc = ApiDoc::openapi();
        let employees = doc.paths.paths.get("/api/v1/employees").unwrap();
        assert!(employees.get.is_some());
        assert!(employees.post.is_some());

        let by_id = doc.paths.paths.get("/api/v1/employee/{id}").unwrap();
        assert!(by_id.get.is_some());
        assert!(by_id.put.is_some());
        assert!(by_id.delete.is_some());
    }

    #[test]
    fn document_carries_the_employee_schema() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(components.schemas.contains_key("Employee"));
        assert!(components.schemas.contains_key("ErrorBody"));
    }
}
