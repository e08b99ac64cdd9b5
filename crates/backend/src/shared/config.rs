use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог собранного frontend (trunk dist)
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub cookie_name: String,
    pub cookie_max_age_days: i64,
    pub demo_username: String,
    pub demo_password: String,
    pub demo_full_name: String,
    pub demo_email: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
dist_dir = "dist"

[auth]
cookie_name = "auth-token"
cookie_max_age_days = 7
demo_username = "john.smith"
demo_password = "partner"
demo_full_name = "John Smith"
demo_email = "john.smith@techsolutions.com"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(config_path) = exe_dir().map(|dir| dir.join("config.toml")) {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return Ok(toml::from_str(&contents)?);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

pub fn default_config() -> anyhow::Result<Config> {
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

/// Загружает конфигурацию один раз и сохраняет её в глобальной ячейке.
pub fn initialize() -> anyhow::Result<&'static Config> {
    CONFIG.get_or_try_init(load_config)
}

/// Текущая конфигурация. До `initialize()` (например, в тестах)
/// используется встроенная конфигурация по умолчанию.
pub fn get() -> anyhow::Result<&'static Config> {
    CONFIG.get_or_try_init(default_config)
}

/// Resolves relative paths against the executable directory
pub fn resolve_path(path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        return candidate;
    }
    match exe_dir() {
        Some(dir) if dir.join(&candidate).exists() => dir.join(candidate),
        _ => candidate,
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.cookie_name, "auth-token");
        assert_eq!(config.auth.demo_full_name, "John Smith");
    }

    #[test]
    fn test_workspace_config_matches_schema() {
        let contents = include_str!("../../../../config.toml");
        let config: Config = toml::from_str(contents).unwrap();
        assert_eq!(config.server.dist_dir, "dist");
        assert!(config.auth.cookie_max_age_days > 0);
    }

    #[test]
    fn test_absolute_path_kept() {
        let path = if cfg!(windows) { "C:\\dist" } else { "/srv/dist" };
        assert_eq!(resolve_path(path), PathBuf::from(path));
    }
}
