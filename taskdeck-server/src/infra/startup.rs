use taskdeck_config::ConfigWarnings;
use tracing::warn;

pub fn log_config_warnings(warnings: &ConfigWarnings) {
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(warning = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(warning = %warning.message, "configuration warning")
            }
        }
    }
}
