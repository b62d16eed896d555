use crate::core::round_to_hundredths;
use crate::domain::model::ServiceInput;
use crate::domain::service::Service;
use crate::utils::error::{ClinicError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Either a ready entity or the raw fields to build one from.
#[derive(Debug, Clone)]
pub enum NewService {
    Built(Service),
    Raw(ServiceInput),
}

impl From<Service> for NewService {
    fn from(service: Service) -> Self {
        NewService::Built(service)
    }
}

impl From<ServiceInput> for NewService {
    fn from(input: ServiceInput) -> Self {
        NewService::Raw(input)
    }
}

impl NewService {
    fn into_service(self) -> Result<Service> {
        match self {
            NewService::Built(service) => Ok(service),
            NewService::Raw(input) => Service::try_from(input),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Appended,
    Sorted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Insertion {
    pub placement: Placement,
    pub index: usize,
}

/// Services sharing one exact cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostGroup {
    /// `None` for the trailing group of services without a cost.
    pub cost: Option<Decimal>,
    /// Mean of the known durations, `None` when no member has one.
    pub average_duration: Option<f64>,
    pub services: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedCost {
    pub name: Option<String>,
    pub doctor: Option<String>,
    pub updated_cost: Option<Decimal>,
}

/// Ordered collection of services.
///
/// Complete services are kept in descending cost order relative to each
/// other; incomplete ones are appended to the tail.
#[derive(Debug, Clone, Default)]
pub struct ServiceManager {
    services: Vec<Service>,
}

impl ServiceManager {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    pub fn from_inputs(inputs: Vec<ServiceInput>) -> Result<Self> {
        let services = inputs
            .into_iter()
            .map(Service::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(services))
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn sort_by_cost_with_average_duration(&self) -> Vec<CostGroup> {
        let mut grouped: BTreeMap<Decimal, Vec<Option<u32>>> = BTreeMap::new();
        let mut unpriced: Vec<Option<u32>> = Vec::new();

        for service in &self.services {
            match service.cost() {
                Some(cost) => grouped
                    .entry(cost)
                    .or_default()
                    .push(service.duration_minutes()),
                None => unpriced.push(service.duration_minutes()),
            }
        }

        let mut summary: Vec<CostGroup> = grouped
            .into_iter()
            .map(|(cost, durations)| CostGroup {
                cost: Some(cost),
                average_duration: average_duration(&durations),
                services: durations.len(),
            })
            .collect();

        if !unpriced.is_empty() {
            summary.push(CostGroup {
                cost: None,
                average_duration: average_duration(&unpriced),
                services: unpriced.len(),
            });
        }

        tracing::debug!(
            "Grouped {} services into {} cost groups",
            self.services.len(),
            summary.len()
        );
        summary
    }

    /// First service with the highest month-one usage. A missing count never
    /// beats a recorded one.
    pub fn find_most_read_service_month1(&self) -> Result<&Service> {
        let mut services = self.services.iter();
        let mut most_read = services.next().ok_or(ClinicError::EmptyCollection {
            operation: "find_most_read_service_month1",
        })?;

        for service in services {
            if service.users_month1() > most_read.users_month1() {
                most_read = service;
            }
        }
        Ok(most_read)
    }

    pub fn add_service(&mut self, service: impl Into<NewService>) -> Result<Insertion> {
        let service = service.into().into_service()?;

        if !service.has_complete_info() {
            self.services.push(service);
            let insertion = Insertion {
                placement: Placement::Appended,
                index: self.services.len() - 1,
            };
            tracing::debug!("Incomplete service appended at index {}", insertion.index);
            return Ok(insertion);
        }

        // Stop at the first element that is not strictly more expensive;
        // an element without a cost stops the scan as well.
        let index = self
            .services
            .iter()
            .position(|existing| !matches!(
                (existing.cost(), service.cost()),
                (Some(existing_cost), Some(new_cost)) if existing_cost > new_cost
            ))
            .unwrap_or(self.services.len());

        self.services.insert(index, service);
        tracing::debug!("Complete service inserted at index {}", index);
        Ok(Insertion {
            placement: Placement::Sorted,
            index,
        })
    }

    pub fn compute_updated_costs(&self) -> Vec<UpdatedCost> {
        self.services
            .iter()
            .map(|service| {
                let updated_cost = match (
                    service.cost(),
                    service.users_month1(),
                    service.users_month2(),
                ) {
                    (Some(cost), Some(month1), Some(month2)) => {
                        let updated = cost.checked_mul(price_multiplier(month1, month2));
                        if updated.is_none() {
                            tracing::warn!(
                                "Updated cost of service {:?} overflows, leaving it unset",
                                service.id()
                            );
                        }
                        updated.map(|value| {
                            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                        })
                    }
                    _ => None,
                };

                UpdatedCost {
                    name: service.name().map(str::to_string),
                    doctor: service.doctor().map(str::to_string),
                    updated_cost,
                }
            })
            .collect()
    }
}

/// 1.15 when usage grew, 1.00 when flat, 0.95 when it fell.
fn price_multiplier(users_month1: u32, users_month2: u32) -> Decimal {
    match users_month2.cmp(&users_month1) {
        Ordering::Greater => Decimal::new(115, 2),
        Ordering::Equal => Decimal::ONE,
        Ordering::Less => Decimal::new(95, 2),
    }
}

fn average_duration(durations: &[Option<u32>]) -> Option<f64> {
    let known: Vec<u32> = durations.iter().flatten().copied().collect();
    if known.is_empty() {
        return None;
    }
    let total: u64 = known.iter().map(|&minutes| u64::from(minutes)).sum();
    Some(round_to_hundredths(total as f64 / known.len() as f64))
}
