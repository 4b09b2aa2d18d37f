use crate::models::AuditRow;
use crate::errors::{YardError, YardResult};
use crate::services::DatabaseClient;
use crate::repositories::repository_trait::Repository;
use async_trait::async_trait;
use sqlx_oldapi::Mssql;
use sqlx_oldapi::query::Query;
use sqlx_oldapi::mssql::MssqlArguments;

const INSERT_AUDIT_ROW: &str = r#"
    INSERT INTO YARD_AUDIT_LOG
    (LOG_DTTM, MOVEMENT_ID, ID_USER, ACTION, DESCRIPTION, PAYLOAD)
    VALUES
    (@p1, @p2, @p3, @p4, @p5, @p6)
"#;

/// Mirrors ledger audit entries into `YARD_AUDIT_LOG`.
pub struct AuditLogRepository {
    client: DatabaseClient,
}

impl AuditLogRepository {
    pub fn new(client: DatabaseClient) -> Self {
        Self { client }
    }
}

fn bind_row(row: &AuditRow) -> Query<'_, Mssql, MssqlArguments> {
    sqlx_oldapi::query::<Mssql>(INSERT_AUDIT_ROW)
        .bind(&row.LOG_DTTM)
        .bind(&row.MOVEMENT_ID)
        .bind(&row.ID_USER)
        .bind(&row.ACTION)
        .bind(&row.DESCRIPTION)
        .bind(&row.PAYLOAD)
}

#[async_trait]
impl Repository<AuditRow> for AuditLogRepository {
    async fn insert(&self, row: &AuditRow) -> YardResult<()> {
        bind_row(row)
            .execute(&*self.client.pool)
            .await
            .map_err(YardError::DatabaseError)?;
        Ok(())
    }

    /// All rows or none.
    async fn insert_batch(&self, rows: &[AuditRow]) -> YardResult<()> {
        let mut tx = self.client.pool.begin().await?;
        for row in rows {
            bind_row(row).execute(&mut tx).await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
