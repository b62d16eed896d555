pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::report::Report;
pub use crate::config::seed::SeedConfig;
pub use crate::core::service_manager::{Insertion, NewService, Placement, ServiceManager};
pub use crate::core::user_registry::UserRegistry;
pub use crate::domain::model::{RawValue, ServiceInput, UserInput};
pub use crate::domain::service::Service;
pub use crate::domain::user::UserAccount;
pub use crate::utils::error::{ClinicError, Result};
