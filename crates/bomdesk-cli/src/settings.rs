//! Layered configuration
//!
//! Highest precedence last:
//! 1. built-in defaults
//! 2. TOML file (`--config`, or `bomdesk.toml` when present)
//! 3. environment, `BOMDESK__SECTION__KEY`
//! 4. command-line flags

use bomdesk_core::logging_facility::Profile;
use bomdesk_core::model::GeneratorBounds;
use bomdesk_core::{ExError, ExErrorKind};
use bomdesk_store::DatabaseConfig;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::PathBuf;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "bomdesk.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub generator: GeneratorBounds,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    pub profile: Profile,
}

/// Values taken from command-line flags
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub db: Option<PathBuf>,
    pub json_logs: bool,
    pub no_provision: bool,
}

/// Load configuration from every layer
///
/// # Errors
///
/// `Config` when a layer cannot be read or parsed, a value has the wrong
/// type, or the generator bounds are inverted.
pub fn load(overrides: &Overrides) -> Result<AppConfig, ExError> {
    load_with_env(overrides, environment())
}

fn environment() -> Environment {
    Environment::with_prefix("BOMDESK")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn load_with_env(overrides: &Overrides, env: Environment) -> Result<AppConfig, ExError> {
    let config = build(overrides, env).map_err(config_error)?;
    let app: AppConfig = config.try_deserialize().map_err(config_error)?;
    app.generator.validate()?;
    Ok(app)
}

fn build(overrides: &Overrides, env: Environment) -> Result<Config, ConfigError> {
    let defaults = DatabaseConfig::default();
    let bounds = GeneratorBounds::default();

    let mut builder = Config::builder()
        .set_default("database.path", defaults.path.to_string_lossy().into_owned())?
        .set_default("database.provision_schema", defaults.provision_schema)?
        .set_default("generator.price_min", i64::from(bounds.price_min))?
        .set_default("generator.price_max", i64::from(bounds.price_max))?
        .set_default("generator.quantity_min", i64::from(bounds.quantity_min))?
        .set_default("generator.quantity_max", i64::from(bounds.quantity_max))?
        .set_default("logging.profile", "development")?;

    builder = match &overrides.config_file {
        Some(path) => builder.add_source(File::from(path.as_path()).format(FileFormat::Toml)),
        None => builder.add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false)),
    };
    builder = builder.add_source(env);

    if let Some(db) = &overrides.db {
        builder = builder.set_override("database.path", db.to_string_lossy().into_owned())?;
    }
    if overrides.json_logs {
        builder = builder.set_override("logging.profile", "production")?;
    }
    if overrides.no_provision {
        builder = builder.set_override("database.provision_schema", false)?;
    }

    builder.build()
}

fn config_error(err: ConfigError) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message(err.to_string())
}
