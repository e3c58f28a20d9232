// config.rs - Configuration Module
// This module handles modelconf.txt loading: API credentials, the model
// priority list and the fallback tuning knobs (cooldown, error threshold,
// retry pacing).

use std::collections::HashMap;
use std::fs;
use std::time::Duration;

/// One backend to register with the manager: a model name plus its
/// static selection priority (lower = preferred).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSpec {
    pub name: String,
    pub priority: u32,
}

/// Fallback tuning knobs. Kept separate from the rest of the
/// configuration so tests can run the manager with compressed timings.
#[derive(Debug, Clone)]
pub struct FallbackSettings {
    /// How long a rate-limited backend is excluded from selection.
    pub rate_limit_cooldown: Duration,
    /// Consecutive non-quota failures before a backend is disabled.
    pub error_threshold: u32,
    /// Pacing delay between retry attempts within one generate call.
    pub retry_delay: Duration,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            rate_limit_cooldown: Duration::from_secs(300),
            error_threshold: 5,
            retry_delay: Duration::from_secs(5),
        }
    }
}

// Manager configuration structure
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    pub api_key: String,
    pub base_url: String,
    pub backends: Vec<BackendSpec>,
    pub request_timeout: u64,
    pub max_attempts: usize,
    pub settings: FallbackSettings,
}

/// Load manager configuration from modelconf.txt file
/// This reads the configuration file and returns a properly configured ManagerConfig
pub fn load_manager_config() -> Result<ManagerConfig, Box<dyn std::error::Error + Send + Sync>> {
    let config_paths = [
        "modelconf.txt",
        "../modelconf.txt",
        "../../modelconf.txt",
        "src/modelconf.txt"
    ];

    let mut config_content = String::new();
    let mut config_file_found = false;

    // Try to read from multiple possible locations
    for path in &config_paths {
        match fs::read_to_string(path) {
            Ok(content) => {
                config_content = content;
                config_file_found = true;
                log::info!("Configuration loaded from: {}", path);
                break;
            }
            Err(_) => continue,
        }
    }

    if !config_file_found {
        return Err("modelconf.txt file not found in any expected location (., .., ../.., src/)".into());
    }

    parse_manager_config(&config_content)
}

/// Parse KEY=VALUE configuration content into a ManagerConfig.
pub fn parse_manager_config(content: &str) -> Result<ManagerConfig, Box<dyn std::error::Error + Send + Sync>> {
    // Remove BOM if present
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut config_map = HashMap::new();

    // Parse the config file line by line
    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parse KEY=VALUE format
        if let Some(equals_pos) = line.find('=') {
            let key = line[..equals_pos].trim().to_string();
            let value = line[equals_pos + 1..].trim().to_string();
            config_map.insert(key, value);
        }
    }

    // Extract configuration values with validation
    let api_key = config_map.get("GEMINI_API_KEY")
        .ok_or("GEMINI_API_KEY not found in modelconf.txt")?
        .clone();

    let base_url = config_map.get("GEMINI_BASE_URL")
        .ok_or("GEMINI_BASE_URL not found in modelconf.txt")?
        .trim_end_matches('/')
        .to_string();

    let backends = parse_priority_list(
        config_map.get("MODEL_PRIORITY_LIST")
            .ok_or("MODEL_PRIORITY_LIST not found in modelconf.txt")?,
    )?;

    let request_timeout = config_map.get("REQUEST_TIMEOUT")
        .ok_or("REQUEST_TIMEOUT not found in modelconf.txt")?
        .parse::<u64>()
        .map_err(|_| "REQUEST_TIMEOUT must be a valid number")?;

    let max_attempts = config_map.get("MAX_ATTEMPTS")
        .ok_or("MAX_ATTEMPTS not found in modelconf.txt")?
        .parse::<usize>()
        .map_err(|_| "MAX_ATTEMPTS must be a valid number")?;

    // Fallback tuning is optional and defaults to 300s / 5 / 5s
    let defaults = FallbackSettings::default();

    let rate_limit_cooldown = match config_map.get("RATE_LIMIT_COOLDOWN") {
        Some(value) => Duration::from_secs(
            value.parse::<u64>().map_err(|_| "RATE_LIMIT_COOLDOWN must be a valid number")?,
        ),
        None => defaults.rate_limit_cooldown,
    };

    let error_threshold = match config_map.get("ERROR_THRESHOLD") {
        Some(value) => value.parse::<u32>().map_err(|_| "ERROR_THRESHOLD must be a valid number")?,
        None => defaults.error_threshold,
    };

    let retry_delay = match config_map.get("RETRY_DELAY") {
        Some(value) => Duration::from_secs(
            value.parse::<u64>().map_err(|_| "RETRY_DELAY must be a valid number")?,
        ),
        None => defaults.retry_delay,
    };

    Ok(ManagerConfig {
        api_key,
        base_url,
        backends,
        request_timeout,
        max_attempts,
        settings: FallbackSettings {
            rate_limit_cooldown,
            error_threshold,
            retry_delay,
        },
    })
}

/// Parse a comma-separated `name:priority` list, e.g.
/// `gemini-2.5-pro:1,gemini-1.5-pro:2,gemini-pro:3`.
fn parse_priority_list(value: &str) -> Result<Vec<BackendSpec>, Box<dyn std::error::Error + Send + Sync>> {
    let mut backends = Vec::new();

    for entry in value.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (name, priority) = match entry.rsplit_once(':') {
            Some((name, priority)) => {
                let priority = priority.trim().parse::<u32>()
                    .map_err(|_| format!("Invalid priority in MODEL_PRIORITY_LIST entry '{}'", entry))?;
                (name.trim().to_string(), priority)
            }
            // Bare names get priorities in listed order
            None => (entry.to_string(), backends.len() as u32 + 1),
        };

        if name.is_empty() {
            return Err(format!("Empty model name in MODEL_PRIORITY_LIST entry '{}'", entry).into());
        }
        if backends.iter().any(|spec: &BackendSpec| spec.name == name) {
            return Err(format!("Duplicate model '{}' in MODEL_PRIORITY_LIST", name).into());
        }

        backends.push(BackendSpec { name, priority });
    }

    if backends.is_empty() {
        return Err("MODEL_PRIORITY_LIST contains no models".into());
    }

    Ok(backends)
}
