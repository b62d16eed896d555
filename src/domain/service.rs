use crate::domain::model::ServiceInput;
use crate::utils::error::{ClinicError, Result};
use crate::utils::validation::{coerce_count, coerce_decimal, coerce_text};
use rust_decimal::Decimal;
use serde::Serialize;

/// Offset added to the service id to form its catalogue identity.
const IDENTITY_BASE: u64 = 1000;

/// A clinical service offering.
///
/// Each field keeps its presence explicitly: `Some(0)` is a recorded zero,
/// `None` means the seed never supplied the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    id: Option<u32>,
    name: Option<String>,
    doctor: Option<String>,
    users_month1: Option<u32>,
    users_month2: Option<u32>,
    cost: Option<Decimal>,
    duration_minutes: Option<u32>,
}

impl Service {
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn doctor(&self) -> Option<&str> {
        self.doctor.as_deref()
    }

    pub fn users_month1(&self) -> Option<u32> {
        self.users_month1
    }

    pub fn users_month2(&self) -> Option<u32> {
        self.users_month2
    }

    pub fn cost(&self) -> Option<Decimal> {
        self.cost
    }

    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration_minutes
    }

    pub fn identity(&self) -> Option<u64> {
        self.id.map(|id| IDENTITY_BASE + u64::from(id))
    }

    pub fn has_complete_info(&self) -> bool {
        self.id.is_some()
            && self.name.is_some()
            && self.doctor.is_some()
            && self.users_month1.is_some()
            && self.users_month2.is_some()
            && self.cost.is_some()
            && self.duration_minutes.is_some()
    }
}

impl TryFrom<ServiceInput> for Service {
    type Error = ClinicError;

    fn try_from(input: ServiceInput) -> Result<Self> {
        Ok(Self {
            id: coerce_count("id", input.id.as_ref())?,
            name: coerce_text(input.name.as_ref()),
            doctor: coerce_text(input.doctor.as_ref()),
            users_month1: coerce_count("usersMonth1", input.users_month1.as_ref())?,
            users_month2: coerce_count("usersMonth2", input.users_month2.as_ref())?,
            cost: coerce_decimal("cost", input.cost.as_ref())?,
            duration_minutes: coerce_count("durationMinutes", input.duration_minutes.as_ref())?,
        })
    }
}
