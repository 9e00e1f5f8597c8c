use std::sync::Arc;

use entity::employees;
use platform_api::{ApiError, ApiResult};
use platform_db::{DbError, EmployeeRepository};
use tracing::{debug, info, instrument};

use super::payload::EmployeeDraft;

/// Employee operations over any [`EmployeeRepository`].
///
/// Update and delete look the record up first, so a missing id fails before
/// anything is written. The check and the write are not atomic; a concurrent
/// delete between them makes the write report not-found.
#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "employees.create", skip_all)]
    pub async fn create(&self, draft: EmployeeDraft) -> ApiResult<employees::Model> {
        let saved = self
            .repo
            .save(draft.into_record(0))
            .await
            .map_err(storage_error)?;
        info!(id = saved.id, "employee created");
        Ok(saved)
    }

    #[instrument(name = "employees.list", skip_all)]
    pub async fn list(&self) -> ApiResult<Vec<employees::Model>> {
        self.repo.find_all().await.map_err(storage_error)
    }

    #[instrument(name = "employees.get", skip(self))]
    pub async fn get(&self, id: i64) -> ApiResult<employees::Model> {
        self.require(id, not_found).await
    }

    #[instrument(name = "employees.update", skip(self, draft))]
    pub async fn update(&self, id: i64, draft: EmployeeDraft) -> ApiResult<employees::Model> {
        self.require(id, resource_not_found).await?;
        let saved = self
            .repo
            .save(draft.into_record(id))
            .await
            .map_err(|err| match err {
                DbError::RecordMissing(id) => resource_not_found(id),
                other => storage_error(other),
            })?;
        info!(id, "employee updated");
        Ok(saved)
    }

    #[instrument(name = "employees.delete", skip(self))]
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        let existing = self.require(id, not_found).await?;
        self.repo.delete(existing).await.map_err(storage_error)?;
        info!(id, "employee deleted");
        Ok(())
    }

    async fn require(
        &self,
        id: i64,
        missing: fn(i64) -> ApiError,
    ) -> ApiResult<employees::Model> {
        match self.repo.find_by_id(id).await.map_err(storage_error)? {
            Some(employee) => Ok(employee),
            None => {
                debug!(id, "employee lookup missed");
                Err(missing(id))
            }
        }
    }
}

fn not_found(id: i64) -> ApiError {
    ApiError::not_found(format!("Employee not found for this id :: {id}"))
}

fn resource_not_found(id: i64) -> ApiError {
    ApiError::not_found(format!("Resource not found with this id :: {id}"))
}

fn storage_error(err: DbError) -> ApiError {
    match err {
        DbError::RecordMissing(id) => not_found(id),
        other => ApiError::internal(other.into()),
    }
}
