use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::config::AppConfig;
use crate::page::{Document, Page};
use crate::services::clock::Clock;
use crate::services::intake::IntakeEndpoint;

pub struct AppState {
    pub config: AppConfig,
    pub endpoint: Box<dyn IntakeEndpoint>,
    pub clock: Arc<dyn Clock>,
    pub sessions: Mutex<HashMap<Uuid, Page<Document>>>,
}

impl AppState {
    pub fn new(config: AppConfig, endpoint: Box<dyn IntakeEndpoint>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            endpoint,
            clock,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Locks the session table, recovering the guard from a poisoned lock.
    pub fn sessions(&self) -> MutexGuard<'_, HashMap<Uuid, Page<Document>>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
