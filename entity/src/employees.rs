use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// All details about an employee.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(table_name = "employees")]
#[serde(rename_all = "camelCase")]
#[schema(as = Employee)]
pub struct Model {
    /// The database generated employee id.
    #[sea_orm(primary_key)]
    #[schema(example = 1)]
    pub id: i64,
    /// The employee first name.
    #[schema(example = "Jane")]
    pub first_name: String,
    /// The employee last name.
    #[schema(example = "Doe")]
    pub last_name: String,
    /// The employee email id.
    #[sea_orm(nullable)]
    #[schema(example = "jane.doe@example.com")]
    pub email_id: Option<String>,
}

impl Model {
    /// Unsaved record; storage assigns the id on insert.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_id: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_id,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee [id={}, firstName={}, lastName={}, emailId={}]",
            self.id,
            self.first_name,
            self.last_name,
            self.email_id.as_deref().unwrap_or("null")
        )
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_matches_record_format() {
        let mut employee = Model::new("Jane", "Doe", None);
        employee.id = 3;
        assert_eq!(
            employee.to_string(),
            "Employee [id=3, firstName=Jane, lastName=Doe, emailId=null]"
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let employee = Model {
            id: 1,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email_id: Some("jane@example.com".into()),
        };
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "firstName": "Jane",
                "lastName": "Doe",
                "emailId": "jane@example.com"
            })
        );
    }

    #[test]
    fn missing_email_serializes_as_null() {
        let value = serde_json::to_value(Model::new("Jane", "Doe", None)).unwrap();
        assert!(value["emailId"].is_null());
    }
}
