//! Application state for the HRMS API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::identifier::EmployeeIdGenerator;
use crate::store::{EmployeeStore, InMemoryStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded configuration, the employee store and the identifier generator.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn EmployeeStore>,
    generator: Arc<EmployeeIdGenerator>,
}

impl AppState {
    /// Creates a new application state backed by an empty in-memory store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(config, Arc::new(InMemoryStore::new()))
    }

    /// Creates a new application state over an existing store.
    pub fn with_store(config: ConfigLoader, store: Arc<dyn EmployeeStore>) -> Self {
        let generator = EmployeeIdGenerator::from_config(&config);
        Self {
            config: Arc::new(config),
            store,
            generator: Arc::new(generator),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the employee store.
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }

    /// Returns the identifier generator.
    pub fn generator(&self) -> &EmployeeIdGenerator {
        &self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_generator_uses_configured_employer_code() {
        let config = ConfigLoader::from_yaml("identity:\n  default_employer_code: ac\n").unwrap();
        let state = AppState::new(config);
        assert_eq!(state.generator().default_employer_code(), "AC");
    }

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::new(ConfigLoader::default());
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.store, &clone.store));
    }
}
