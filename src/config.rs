use anyhow::Result;
use chrono::{DateTime, Utc};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::telemetry::generate_correlation_id;

/// Main configuration structure for Ampdesk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AmpdeskConfig {
    /// Service-center API settings
    pub api: ApiConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
    /// Work-order policy settings
    pub workorders: WorkOrderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the service-center backend
    pub url: String,
    /// API token (normally supplied via env var)
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level directive (e.g. "info", "ampdesk=debug")
    pub level: String,
    /// Emit JSON logs instead of human-readable ones
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkOrderConfig {
    /// Enforce the inferred work-order transition table. Off by default:
    /// the backend accepts any status today, and enforcement has to be a
    /// deliberate rollout.
    pub enforce: bool,
}

impl Default for AmpdeskConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                url: "http://localhost:8080/api".to_string(),
                token: None,
            },
            observability: ObservabilityConfig {
                level: "info".to_string(),
                json: false,
            },
            workorders: WorkOrderConfig { enforce: false },
        }
    }
}

impl AmpdeskConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. Configuration file (ampdesk.toml)
    /// 3. Environment variables (prefixed with AMPDESK_)
    pub fn load() -> Result<Self> {
        let defaults = AmpdeskConfig::default();

        let mut builder = Config::builder()
            .set_default("api.url", defaults.api.url.clone())?
            .set_default("observability.level", defaults.observability.level.clone())?
            .set_default("observability.json", defaults.observability.json)?
            .set_default("workorders.enforce", defaults.workorders.enforce)?;

        if Path::new("ampdesk.toml").exists() {
            builder = builder.add_source(File::with_name("ampdesk"));
        }

        builder = builder.add_source(
            Environment::with_prefix("AMPDESK")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut ampdesk_config: AmpdeskConfig = config.try_deserialize()?;

        // Token is env-only in practice; AMPDESK_TOKEN is the documented name.
        if ampdesk_config.api.token.is_none() {
            if let Ok(token) = std::env::var("AMPDESK_TOKEN") {
                ampdesk_config.api.token = Some(token);
            }
        }

        Ok(ampdesk_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Explicit session context handed to request-building collaborators.
///
/// There is deliberately no process-global config store: the context is
/// constructed once at application bootstrap, passed down, and torn down on
/// exit.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub config: AmpdeskConfig,
    /// Correlation id stamped on every operation this session performs.
    pub session_id: String,
    pub started_at: DateTime<Utc>,
}

impl SessionContext {
    /// Build the session at startup: .env, then layered config.
    pub fn bootstrap() -> Result<Self> {
        AmpdeskConfig::load_env_file()?;
        let config = AmpdeskConfig::load()?;
        Ok(Self {
            config,
            session_id: generate_correlation_id(),
            started_at: Utc::now(),
        })
    }

    /// Tear the session down. Counterpart of `bootstrap`.
    pub fn shutdown(self) {
        tracing::info!(
            session.id = %self.session_id,
            uptime_seconds = %(Utc::now() - self.started_at).num_seconds(),
            "Session closed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_work_order_enforcement_off() {
        let config = AmpdeskConfig::default();
        assert!(!config.workorders.enforce);
        assert_eq!(config.observability.level, "info");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ampdesk.toml");

        let mut config = AmpdeskConfig::default();
        config.api.url = "https://svc.example.test/api".to_string();
        config.workorders.enforce = true;
        config.save_to_file(&path).expect("save");

        let written = std::fs::read_to_string(&path).expect("read back");
        let parsed: AmpdeskConfig = toml::from_str(&written).expect("parse");
        assert_eq!(parsed.api.url, "https://svc.example.test/api");
        assert!(parsed.workorders.enforce);
    }

    #[test]
    fn session_bootstrap_uses_loaded_config() {
        let ctx = SessionContext::bootstrap().expect("bootstrap");
        assert!(!ctx.session_id.is_empty());
        ctx.shutdown();
    }
}
