use entity::employees;
use platform_api::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for create and update.
///
/// An `id` sent by the client is not part of the contract and is dropped
/// during deserialization; the path (update) or storage (create) decides it.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    #[schema(example = "jane.doe@example.com")]
    pub email_id: Option<String>,
}

/// A payload that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeDraft {
    first_name: String,
    last_name: String,
    email_id: Option<String>,
}

impl EmployeeDraft {
    pub fn into_record(self, id: i64) -> employees::Model {
        employees::Model {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email_id: self.email_id,
        }
    }
}

impl TryFrom<EmployeePayload> for EmployeeDraft {
    type Error = ApiError;

    fn try_from(payload: EmployeePayload) -> ApiResult<Self> {
        Ok(Self {
            first_name: required("firstName", payload.first_name)?,
            last_name: required("lastName", payload.last_name)?,
            email_id: payload.email_id,
        })
    }
}

fn required(field: &str, value: Option<String>) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::invalid_input(format!("{field} is required"))),
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[serde(rename = "Deleted")]
    pub deleted: bool,
}
