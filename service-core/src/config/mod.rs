use crate::error::CoreError;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Locate `<crate>/config`, whether the process runs from the workspace root
/// or from inside the crate directory.
pub fn resolve_config_dir(crate_dir: &str) -> Result<PathBuf, CoreError> {
    let base_path = std::env::current_dir()?;

    if base_path.ends_with(crate_dir) {
        Ok(base_path.join("config"))
    } else {
        Ok(base_path.join(crate_dir).join("config"))
    }
}

/// Load `base.yaml` from `config_dir`, overridden by `<env_prefix>_SECTION__KEY`
/// environment variables. A `.env` file is read first when present.
pub fn load_layered<T: DeserializeOwned>(
    config_dir: &Path,
    env_prefix: &str,
) -> Result<T, CoreError> {
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<T>()?)
}
