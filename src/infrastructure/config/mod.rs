// ============================================================
// CONFIGURATION
// ============================================================
// Layered settings: compiled defaults, then panelboard.toml, then
// PANELBOARD_* environment variables (double underscore nests, e.g.
// PANELBOARD_ANALYSIS__FALLBACK_GROUP).

use crate::domain::error::{AppError, Result};
use crate::domain::panel::AnalysisConfig;
use crate::infrastructure::ingest::IngestConfig;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub analysis: AnalysisConfig,
    pub ingest: IngestConfig,
}

impl DashboardConfig {
    /// Load configuration from defaults, file, and environment.
    pub fn load() -> Result<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let config: DashboardConfig =
            Figment::from(Serialized::defaults(DashboardConfig::default()))
                .merge(Toml::file("panelboard.toml"))
                .merge(Env::prefixed("PANELBOARD_").split("__"))
                .extract()
                .map_err(|err| {
                    AppError::ValidationError(format!("invalid configuration: {}", err))
                })?;

        config.validate().map_err(AppError::ValidationError)?;
        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.analysis.validate()?;
        self.ingest.validate()?;
        Ok(())
    }
}
