use anyhow::Context;
use tally_config::TallyConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, including `.env` from the working directory.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TallyConfig> {
    match &flags.config {
        Some(path) => TallyConfig::load_with_dotenv(Some(path.as_path()))
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => TallyConfig::load_with_dotenv(None).context("failed to load configuration"),
    }
}
