use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::de::DeserializeOwned;

/// Load a settings struct from `configuration.*` (optional) and the environment.
///
/// Environment keys are `{PREFIX}_{FIELD}`, with `__` separating nested fields,
/// e.g. `INVOICING_LOG_LEVEL=debug`. A `.env` file is read first if present.
pub fn load_config<T: DeserializeOwned>(env_prefix: &str) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let config = Cfg::builder()
        .add_source(File::with_name("configuration").required(false))
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
