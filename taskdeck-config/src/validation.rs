use thiserror::Error;

use super::models::{Config, CorsConfig};

const KNOWN_METHODS: &[&str] =
    &["GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("invalid CORS configuration: {reason}")]
    InvalidCorsConfig { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    validate_cors(&config.cors)?;

    if config.cors.allow_credentials && config.cors.is_wildcard_included() {
        warnings.push(
            "CORS credentials allowed alongside wildcard origin; browsers will reject such configuration",
        );
    }

    if config.cors.allowed_origins.is_empty() {
        warnings.push_with_hint(
            "No CORS origins configured; browser clients on other origins will be rejected",
            "Set CORS_ALLOWED_ORIGINS or cors.allowed_origins",
        );
    }

    if config.demo.seed {
        warnings.push_with_hint(
            "Demo todos will be seeded into the in-memory store",
            "Set TASKDECK_SEED_DEMO=false to start empty",
        );
    }

    Ok(warnings)
}

fn validate_cors(cors: &CorsConfig) -> Result<(), ConfigGuardRailError> {
    for method in &cors.allowed_methods {
        let upper = method.trim().to_ascii_uppercase();
        if !KNOWN_METHODS.contains(&upper.as_str()) {
            return Err(ConfigGuardRailError::InvalidCorsConfig {
                reason: format!("unsupported method '{method}'"),
            });
        }
    }

    if cors.allowed_headers.iter().any(|h| h.trim().is_empty()) {
        return Err(ConfigGuardRailError::InvalidCorsConfig {
            reason: "blank header name".into(),
        });
    }

    Ok(())
}
