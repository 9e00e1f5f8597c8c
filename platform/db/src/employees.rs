use async_trait::async_trait;
use entity::employees;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    DbErr, EntityTrait, ModelTrait, QueryOrder,
};
use tracing::debug;

use crate::{DbError, DbPool, DbResult};

/// Persistence port for employee records.
///
/// `save` inserts when the record carries id `0` and overwrites the stored row
/// otherwise. Implementations never invent rows on overwrite: a missing id
/// surfaces as [`DbError::RecordMissing`].
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn save(&self, employee: employees::Model) -> DbResult<employees::Model>;

    async fn find_all(&self) -> DbResult<Vec<employees::Model>>;

    async fn find_by_id(&self, id: i64) -> DbResult<Option<employees::Model>>;

    async fn delete(&self, employee: employees::Model) -> DbResult<()>;
}

#[derive(Clone, Debug)]
pub struct SeaOrmEmployeeRepository {
    pool: DbPool,
}

impl SeaOrmEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn save(&self, employee: employees::Model) -> DbResult<employees::Model> {
        let id = employee.id;
        let mut model = employees::ActiveModel {
            id: NotSet,
            first_name: Set(employee.first_name),
            last_name: Set(employee.last_name),
            email_id: Set(employee.email_id),
        };
        if id == 0 {
            let saved = model.insert(&self.pool).await?;
            debug!(id = saved.id, "employee row inserted");
            return Ok(saved);
        }
        model.id = Unchanged(id);
        match model.update(&self.pool).await {
            Ok(saved) => Ok(saved),
            Err(DbErr::RecordNotUpdated) => Err(DbError::RecordMissing(id)),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_all(&self) -> DbResult<Vec<employees::Model>> {
        let rows = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> DbResult<Option<employees::Model>> {
        Ok(employees::Entity::find_by_id(id).one(&self.pool).await?)
    }

    async fn delete(&self, employee: employees::Model) -> DbResult<()> {
        let id = employee.id;
        let result = employee.delete(&self.pool).await?;
        debug!(id, rows = result.rows_affected, "employee row deleted");
        Ok(())
    }
}
