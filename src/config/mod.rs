//! Configuration loading and management for the HRMS engine.
//!
//! This module loads the engine configuration from YAML: the fallback
//! employer code for identifiers, payroll defaults, credential settings and
//! the server bind address.
//!
//! # Example
//!
//! ```no_run
//! use hrms_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hrms.yaml").unwrap();
//! println!("Listening on {}", config.config().server.bind_addr);
//! ```

mod loader;
mod types;

pub use loader::{COMPANY_CODE_ENV, ConfigLoader};
pub use types::{
    CredentialsConfig, DEFAULT_EMPLOYER_CODE, HrmsConfig, IdentityConfig, PayrollConfig,
    ServerConfig,
};
