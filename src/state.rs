//! Shared application state: the installed database handle and the degraded-mode flag.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::{RwLock, watch};

use crate::{config::AppConfig, error::ServiceError};

/// Cheaply clonable handle on the central application state.
pub type SharedState = Arc<AppState>;

/// Central application state storing the database handle and runtime configuration.
///
/// All game state lives in the relational store; the process itself only keeps
/// the connection and the degraded flag, so any number of instances can serve
/// the same database.
pub struct AppState {
    db: RwLock<Option<DatabaseConnection>>,
    degraded: watch::Sender<bool>,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until a database connection is installed.
    pub fn new(config: AppConfig) -> SharedState {
        let (degraded_tx, _rx) = watch::channel(true);
        Arc::new(Self {
            db: RwLock::new(None),
            degraded: degraded_tx,
            config,
        })
    }

    /// Runtime configuration shared across services.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Obtain a handle to the current database connection, if one is installed.
    pub async fn db(&self) -> Option<DatabaseConnection> {
        let guard = self.db.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the database connection or fail with [`ServiceError::Degraded`].
    pub async fn require_db(&self) -> Result<DatabaseConnection, ServiceError> {
        self.db().await.ok_or(ServiceError::Degraded)
    }

    /// Install a database connection and leave degraded mode.
    pub async fn install_db(&self, conn: DatabaseConnection) {
        {
            let mut guard = self.db.write().await;
            *guard = Some(conn);
        }
        let _ = self.degraded.send(false);
    }

    /// Remove the current database connection and enter degraded mode.
    pub async fn clear_db(&self) {
        {
            let mut guard = self.db.write().await;
            guard.take();
        }
        let _ = self.degraded.send(true);
    }

    /// Current degraded flag.
    pub async fn is_degraded(&self) -> bool {
        let guard = self.db.read().await;
        guard.is_none()
    }

    /// Subscribe to degraded mode updates.
    pub fn degraded_watcher(&self) -> watch::Receiver<bool> {
        self.degraded.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_degraded_until_a_connection_is_installed() {
        let state = AppState::new(AppConfig::default());
        assert!(state.is_degraded().await);
        assert!(matches!(
            state.require_db().await,
            Err(ServiceError::Degraded)
        ));
    }
}
