//! # Database Services

//! This module provides the `DatabaseService`, which mirrors the ledger's audit log into a Microsoft SQL Server
//! database. The mirror is optional: without a `database` section in the settings the service never connects.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tracing::info;
use crate::config::DatabaseSettings;
use crate::errors::YardResult;
use crate::models::{AuditEntry, AuditRow};
use crate::repositories::{AuditLogRepository, Repository};
use crate::services::DatabaseClient;
use crate::state_management::audit_batcher::AuditWriter;

const CREATE_AUDIT_TABLE: &str = r#"
    IF OBJECT_ID('YARD_AUDIT_LOG', 'U') IS NULL
    CREATE TABLE YARD_AUDIT_LOG (
        ID BIGINT IDENTITY(1,1) PRIMARY KEY,
        LOG_DTTM DATETIME2 NOT NULL,
        MOVEMENT_ID BIGINT NULL,
        ID_USER BIGINT NULL,
        ACTION NVARCHAR(100) NOT NULL,
        DESCRIPTION NVARCHAR(MAX) NULL,
        PAYLOAD NVARCHAR(MAX) NULL
    )
"#;

/// Provides access to the audit database
#[derive(Clone)]
pub struct DatabaseService {
    /// The database client for the audit database
    client: DatabaseClient,
}

impl DatabaseService {
    /// Creates a new `DatabaseService`
    ///
    /// Connects to the audit database and makes sure the audit table exists
    ///
    /// # Arguments
    ///
    /// * `settings`: The database section of the application settings
    ///
    /// # Returns
    ///
    /// * `Ok(Self)`: The initialized `DatabaseService` instance
    /// * `Err(YardError)`: If the connection string is invalid or the database cannot be reached
    pub async fn new(settings: &DatabaseSettings) -> YardResult<Self> {
        let client = DatabaseClient::new(
            settings.connection_string()?.expose_secret(),
            &settings.app_name,
        ).await?;
        client.execute(CREATE_AUDIT_TABLE).await?;
        info!("Connected to audit database {}", settings);
        Ok(Self { client })
    }

    /// Inserts a batch of audit entries into the audit table
    ///
    /// # Arguments
    ///
    /// * `entries`: The entries to be inserted, in order
    ///
    /// # Returns
    ///
    /// * `Ok(())`: If every entry was inserted
    /// * `Err(YardError)`: If any insert fails, in which case none of the batch is kept
    pub async fn insert_audit_entries(&self, entries: Vec<AuditEntry>) -> YardResult<()> {
        let rows: Vec<AuditRow> = entries.iter().map(AuditRow::from_entry).collect();
        AuditLogRepository::new(self.client.clone()).insert_batch(&rows).await
    }
}

#[async_trait]
impl AuditWriter for DatabaseService {
    async fn write_entries(&self, entries: Vec<AuditEntry>) -> YardResult<()> {
        self.insert_audit_entries(entries).await
    }
}
