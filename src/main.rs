use anyhow::Context;
use clap::Parser;
use clinic_queries::utils::error::{ClinicError, ErrorSeverity};
use clinic_queries::utils::{logger, validation::Validate};
use clinic_queries::{CliConfig, Report, SeedConfig};

fn run(config: &CliConfig) -> anyhow::Result<String> {
    config.validate().context("Invalid command line arguments")?;

    tracing::info!("📁 Loading seed from: {}", config.seed);
    let seed = SeedConfig::from_file(&config.seed)
        .with_context(|| format!("Failed to load seed file '{}'", config.seed))?;
    seed.validate()
        .with_context(|| format!("Seed file '{}' is not usable", config.seed))?;

    let (services, users) = seed.into_collections()?;
    let report = Report::run(&services, &users, config.month, &config.time)?;
    Ok(report.to_json()?)
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting clinic-queries");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(json) => {
            tracing::info!("✅ Report completed");
            println!("{}", json);
        }
        Err(e) => {
            tracing::error!("❌ Report failed: {:#}", e);
            eprintln!("❌ {:#}", e);

            let clinic_error = e.downcast_ref::<ClinicError>();
            if let Some(clinic_error) = clinic_error {
                eprintln!("💡 Suggestion: {}", clinic_error.recovery_suggestion());
            }

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match clinic_error.map(ClinicError::severity) {
                Some(ErrorSeverity::Low) => 4,
                Some(ErrorSeverity::Medium) => 2,
                Some(ErrorSeverity::High) | None => 1,
                Some(ErrorSeverity::Critical) => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
