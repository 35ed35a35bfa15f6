//! Build-time configuration for the API endpoint and log verbosity with an
//! optional runtime override. The runtime config is read from
//! `window.ARENA_CONFIG` (if present) so static deployments can point at a
//! different backend without rebuilding. Configuration values are public; do
//! not store secrets here.

use tracing::Level;

/// Log level used when neither the build nor the runtime config sets one.
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: Level,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("ARENA_API_BASE_URL").unwrap_or("");
        let log_level = option_env!("ARENA_LOG_LEVEL")
            .and_then(parse_log_level)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        let mut config = Self {
            api_base_url: api_base_url.trim().to_string(),
            log_level,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(level) = runtime.log_level.as_deref().and_then(parse_log_level) {
        config.log_level = level;
    }
}

/// Accepts either a level name or a verbosity number (0 = error .. 4 = trace).
pub fn parse_log_level(value: &str) -> Option<Level> {
    let value = value.trim();
    if let Ok(parsed) = value.parse::<u8>() {
        return match parsed {
            0 => Some(Level::ERROR),
            1 => Some(Level::WARN),
            2 => Some(Level::INFO),
            3 => Some(Level::DEBUG),
            4 => Some(Level::TRACE),
            _ => None,
        };
    }

    match value.to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("ARENA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value,
        parse_log_level,
    };
    use tracing::Level;

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            log_level: Level::INFO,
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.arena.gg "),
            Some("https://api.arena.gg".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("  "),
            log_level: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, defaults());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn apply_runtime_overrides_keeps_level_when_unparseable() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: None,
            log_level: normalize_runtime_value("chatty"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn parse_log_level_accepts_names_and_numbers() {
        assert_eq!(parse_log_level("error"), Some(Level::ERROR));
        assert_eq!(parse_log_level(" WARN "), Some(Level::WARN));
        assert_eq!(parse_log_level("3"), Some(Level::DEBUG));
        assert_eq!(parse_log_level("4"), Some(Level::TRACE));
        assert_eq!(parse_log_level("9"), None);
        assert_eq!(parse_log_level("verbose"), None);
    }
}
