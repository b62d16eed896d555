use crate::core::service_manager::ServiceManager;
use crate::core::user_registry::UserRegistry;
use crate::domain::model::{ServiceInput, UserInput};
use crate::utils::error::{ClinicError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern compiles"));

/// Seed records for both collections, as read from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub services: Vec<ServiceInput>,
    #[serde(default)]
    pub users: Vec<UserInput>,
}

impl SeedConfig {
    /// 從 TOML 檔案載入種子資料
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析種子資料
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let seed: SeedConfig = toml::from_str(&processed_content)?;
        tracing::debug!(
            "Parsed seed with {} services and {} users",
            seed.services.len(),
            seed.users.len()
        );
        Ok(seed)
    }

    /// 替換環境變數 (例如 ${CLINIC_DOCTOR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證種子資料：兩個集合都不可為空 (逐筆記錄在建立實體時檢查)
    pub fn validate_config(&self) -> Result<()> {
        if self.services.is_empty() {
            return Err(ClinicError::config("seed contains no [[services]] records"));
        }
        if self.users.is_empty() {
            return Err(ClinicError::config("seed contains no [[users]] records"));
        }
        Ok(())
    }

    /// Builds both collections; a bad record is reported with its table index.
    pub fn into_collections(self) -> Result<(ServiceManager, UserRegistry)> {
        let services = ServiceManager::new(build_records("services", self.services)?);
        let users = UserRegistry::new(build_records("users", self.users)?);
        tracing::info!(
            "Loaded {} services and {} users",
            services.len(),
            users.len()
        );
        Ok((services, users))
    }
}

fn build_records<I, T>(table: &str, inputs: Vec<I>) -> Result<Vec<T>>
where
    T: TryFrom<I, Error = ClinicError>,
{
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            T::try_from(input)
                .map_err(|e| ClinicError::config(format!("{}[{}]: {}", table, index, e)))
        })
        .collect()
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
