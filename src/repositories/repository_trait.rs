use async_trait::async_trait;
use sqlx_oldapi::FromRow;
use crate::errors::YardResult;

/// Write side of a mirrored table
#[async_trait]
pub trait Repository<T>
    where
        T: for<'r> FromRow<'r, sqlx_oldapi::mssql::MssqlRow> + Send + Sync + Unpin,
{
    /// Inserts one row
    async fn insert(&self, item: &T) -> YardResult<()>;

    /// Inserts rows in order
    ///
    /// The default stops at the first failure and leaves earlier rows written.
    async fn insert_batch(&self, items: &[T]) -> YardResult<()> {
        for item in items {
            self.insert(item).await?;
        }
        Ok(())
    }
}
