use std::sync::Arc;
use anyhow::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use crate::api::AppState;
use crate::config::Settings;
use crate::ledger::MovementLedger;
use crate::notifications::{NotificationFanOut, SessionRegistry};
use crate::services::db::DatabaseService;
use crate::state_management::{AuditBatcher, MemoryStore, ServiceLifecycle, YardStore};
use crate::utils::logging;

pub struct AppContext {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn YardStore>,
    pub sessions: Arc<SessionRegistry>,
    pub ledger: Arc<MovementLedger>,
    pub lifecycle: Arc<ServiceLifecycle>,
    /// Keeps the file logger flushing; dropped on exit.
    pub log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn app_state(&self) -> AppState {
        AppState::new(Arc::clone(&self.ledger), Arc::clone(&self.sessions))
    }
}

pub async fn initialize() -> Result<AppContext> {
    let settings = Arc::new(Settings::new()?);
    let log_guard = logging::init_logger(&settings.logging.level, settings.logging.path.clone())?;

    let store = MemoryStore::new();
    store.initialize_from_settings(&settings.yard)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed the yard directory: {}", e))?;
    let store: Arc<dyn YardStore> = Arc::new(store);

    let audit_batcher = match &settings.database {
        Some(database) => {
            let db_service = DatabaseService::new(database)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create DatabaseService: {}", e))?;
            Some(Arc::new(AuditBatcher::new(settings.audit.batch_size, Arc::new(db_service))))
        }
        None => {
            info!("No database configured, audit log kept in memory only");
            None
        }
    };

    let sessions = Arc::new(SessionRegistry::new());
    let fan_out = Arc::new(NotificationFanOut::new(Arc::clone(&sessions), Arc::clone(&store)));
    let mut ledger = MovementLedger::new(Arc::clone(&store), fan_out, settings.ledger.clone());
    if let Some(batcher) = &audit_batcher {
        ledger = ledger.with_audit_mirror(Arc::clone(batcher));
    }

    Ok(AppContext {
        settings,
        store,
        sessions,
        ledger: Arc::new(ledger),
        lifecycle: Arc::new(ServiceLifecycle::new(audit_batcher)),
        log_guard,
    })
}
