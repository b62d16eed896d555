pub mod service_manager;
pub mod user_registry;

pub use crate::domain::model::{RawValue, ServiceInput, UserInput};
pub use crate::domain::service::Service;
pub use crate::domain::user::UserAccount;
pub use crate::utils::error::Result;

/// Rounds to two decimal places, halves away from zero.
pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
