use crate::core::round_to_hundredths;
use crate::domain::model::UserInput;
use crate::domain::user::UserAccount;
use crate::utils::collation;
use crate::utils::error::{ClinicError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YoungestUser {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub education: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSummary {
    pub count: usize,
    /// Zero for an empty bucket.
    pub average_age: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WorkingHoursSummary {
    pub working: BucketSummary,
    pub off: BucketSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub full_name: String,
    pub goal: String,
}

#[derive(Default)]
struct AgeBucket {
    count: usize,
    total_age: u64,
}

impl AgeBucket {
    fn add(&mut self, age: u32) {
        self.count += 1;
        self.total_age += u64::from(age);
    }

    fn summary(&self) -> BucketSummary {
        let average_age = if self.count == 0 {
            0.0
        } else {
            round_to_hundredths(self.total_age as f64 / self.count as f64)
        };
        BucketSummary {
            count: self.count,
            average_age,
        }
    }
}

/// Fixed set of feedback requests, in seed order.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<UserAccount>,
}

impl UserRegistry {
    pub fn new(users: Vec<UserAccount>) -> Self {
        Self { users }
    }

    pub fn from_inputs(inputs: Vec<UserInput>) -> Result<Self> {
        let users = inputs
            .into_iter()
            .map(UserAccount::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(users))
    }

    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users whose request falls in `month` at exactly `time` (`HH:MM`).
    pub fn list_by_month_and_exact_time(&self, month: u32, time: &str) -> Vec<&UserAccount> {
        let matches: Vec<&UserAccount> = self
            .users
            .iter()
            .filter(|user| user.month() == month && user.occurs_at(time))
            .collect();
        tracing::debug!(
            "{} users matched month {} at {}",
            matches.len(),
            month,
            time
        );
        matches
    }

    pub fn find_youngest_user_info(&self) -> Result<YoungestUser> {
        let mut users = self.users.iter();
        let mut youngest = users.next().ok_or(ClinicError::EmptyCollection {
            operation: "find_youngest_user_info",
        })?;

        for user in users {
            if user.age() < youngest.age() {
                youngest = user;
            }
        }

        Ok(YoungestUser {
            first_name: youngest.first_name().to_string(),
            last_name: youngest.last_name().to_string(),
            age: youngest.age(),
            education: youngest.education().to_string(),
        })
    }

    pub fn classify_by_working_hours(&self) -> WorkingHoursSummary {
        let mut working = AgeBucket::default();
        let mut off = AgeBucket::default();

        for user in &self.users {
            if user.is_within_working_hours() {
                working.add(user.age());
            } else {
                off.add(user.age());
            }
        }

        WorkingHoursSummary {
            working: working.summary(),
            off: off.summary(),
        }
    }

    /// Directory listing ordered by "lastName firstName" under the name
    /// collation; the registry itself keeps seed order.
    pub fn sort_users_alphabetically(&self) -> Vec<DirectoryEntry> {
        let mut entries: Vec<DirectoryEntry> = self
            .users
            .iter()
            .map(|user| DirectoryEntry {
                full_name: user.full_name(),
                goal: user.feedback_goal().to_string(),
            })
            .collect();
        entries.sort_by(|a, b| collation::compare(&a.full_name, &b.full_name));
        entries
    }
}
