use crate::domain::model::UserInput;
use crate::utils::error::{ClinicError, Result};
use crate::utils::validation::{
    coerce_count, parse_date, parse_time_of_day, validate_required_field,
};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

const WORKDAY_START_MINUTES: u32 = 9 * 60;
const WORKDAY_END_MINUTES: u32 = 17 * 60;

/// A feedback or consultation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    last_name: String,
    first_name: String,
    age: u32,
    education: String,
    feedback_goal: String,
    requested_at: NaiveDateTime,
    /// Kept verbatim for exact-match lookups.
    request_time: String,
}

impl UserAccount {
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// "lastName firstName", the key used for directory ordering.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn education(&self) -> &str {
        &self.education
    }

    pub fn feedback_goal(&self) -> &str {
        &self.feedback_goal
    }

    pub fn requested_at(&self) -> NaiveDateTime {
        self.requested_at
    }

    pub fn request_time(&self) -> &str {
        &self.request_time
    }

    /// Calendar month of the request, 1-based.
    pub fn month(&self) -> u32 {
        self.requested_at.month()
    }

    /// 09:00 through 17:00, both ends included.
    pub fn is_within_working_hours(&self) -> bool {
        let time = self.requested_at.time();
        let total_minutes = time.hour() * 60 + time.minute();
        (WORKDAY_START_MINUTES..=WORKDAY_END_MINUTES).contains(&total_minutes)
    }

    pub fn occurs_at(&self, time: &str) -> bool {
        self.request_time == time
    }
}

impl TryFrom<UserInput> for UserAccount {
    type Error = ClinicError;

    fn try_from(input: UserInput) -> Result<Self> {
        let request_date = validate_required_field("requestDate", input.request_date)?;
        let request_time = validate_required_field("requestTime", input.request_time)?;
        let age = validate_required_field("age", coerce_count("age", input.age.as_ref())?)?;

        let date = parse_date("requestDate", &request_date)?;
        let time = parse_time_of_day("requestTime", &request_time)?;

        Ok(Self {
            last_name: validate_required_field("lastName", input.last_name)?,
            first_name: validate_required_field("firstName", input.first_name)?,
            age,
            education: validate_required_field("education", input.education)?,
            feedback_goal: validate_required_field("feedbackGoal", input.feedback_goal)?,
            requested_at: date.and_time(time),
            request_time,
        })
    }
}
