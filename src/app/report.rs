use crate::core::service_manager::{CostGroup, ServiceManager, UpdatedCost};
use crate::core::user_registry::{DirectoryEntry, UserRegistry, WorkingHoursSummary, YoungestUser};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExactTimeRequests {
    pub month: u32,
    pub time: String,
    pub users: Vec<String>,
}

/// Every query over both collections, evaluated once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub cost_groups: Vec<CostGroup>,
    pub most_read_service_month1: Option<u32>,
    pub updated_costs: Vec<UpdatedCost>,
    pub exact_time_requests: ExactTimeRequests,
    pub youngest_user: YoungestUser,
    pub working_hours: WorkingHoursSummary,
    pub directory: Vec<DirectoryEntry>,
}

impl Report {
    pub fn run(
        services: &ServiceManager,
        users: &UserRegistry,
        month: u32,
        time: &str,
    ) -> Result<Self> {
        tracing::info!("🩺 Running service queries over {} services", services.len());
        let cost_groups = services.sort_by_cost_with_average_duration();
        let most_read_service_month1 = services.find_most_read_service_month1()?.id();
        let updated_costs = services.compute_updated_costs();

        tracing::info!("👥 Running user queries over {} users", users.len());
        let exact_time_requests = ExactTimeRequests {
            month,
            time: time.to_string(),
            users: users
                .list_by_month_and_exact_time(month, time)
                .into_iter()
                .map(|user| user.full_name())
                .collect(),
        };
        let youngest_user = users.find_youngest_user_info()?;
        let working_hours = users.classify_by_working_hours();
        let directory = users.sort_users_alphabetically();

        Ok(Self {
            cost_groups,
            most_read_service_month1,
            updated_costs,
            exact_time_requests,
            youngest_user,
            working_hours,
            directory,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
