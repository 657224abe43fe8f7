use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

/// Front-end asset location. The router serves this directory as its fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { static_dir: default_static_dir() }
    }
}

fn default_static_dir() -> String { "frontend".to_string() }

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// `CONFIG_PATH`, or `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file when present, otherwise `SERVER_HOST` / `SERVER_PORT` /
    /// `TOKIO_WORKER_THREADS` on top of the defaults.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    /// Only a missing file falls back to the environment; a file that fails
    /// to parse or validate is an error.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = if Path::new(path).exists() {
            load_from_file(path)?
        } else {
            Self::from_env()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.site.normalize();
        Ok(())
    }

    /// `host:port` for `TcpListener::bind`. Hostnames are resolved at bind time;
    /// bare IPv6 literals are bracketed.
    pub fn bind_addr(&self) -> String {
        let host = self.server.host.trim();
        if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, self.server.port)
        } else {
            format!("{}:{}", host, self.server.port)
        }
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl SiteConfig {
    fn normalize(&mut self) {
        if self.static_dir.trim().is_empty() {
            self.static_dir = default_static_dir();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() -> Result<()> {
        let cfg = from_toml_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000
            worker_threads = 2

            [site]
            static_dir = "dist/public"

            [logging]
            format = "json"
            "#,
        )?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.site.static_dir, "dist/public");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        Ok(())
    }

    #[test]
    fn missing_sections_use_defaults() -> Result<()> {
        let cfg = from_toml_str("")?;
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.site.static_dir, "frontend");
        assert_eq!(cfg.logging.format, LogFormat::Compact);
        Ok(())
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(from_toml_str("[logging]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn normalize_fills_blank_host_and_zero_threads() -> Result<()> {
        let mut cfg = from_toml_str("[server]\nhost = \" \"\nport = 9000\nworker_threads = 0")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
        Ok(())
    }

    #[test]
    fn normalize_rejects_port_zero() -> Result<()> {
        let mut cfg = from_toml_str("[server]\nhost = \"127.0.0.1\"\nport = 0")?;
        assert!(cfg.normalize_and_validate().is_err());
        Ok(())
    }

    fn temp_config(name: &str, content: &str) -> Result<std::path::PathBuf> {
        let path = std::env::temp_dir().join(format!("site_config_{}_{}.toml", name, std::process::id()));
        std::fs::write(&path, content)?;
        Ok(path)
    }

    #[test]
    fn invalid_config_file_is_not_replaced_by_env() -> Result<()> {
        let bad_port = temp_config("bad_port", "[server]\nhost = \"127.0.0.1\"\nport = 0")?;
        assert!(AppConfig::load_or_env_from(bad_port.to_str().unwrap()).is_err());

        let bad_format = temp_config("bad_format", "[logging]\nformat = \"xml\"")?;
        assert!(AppConfig::load_or_env_from(bad_format.to_str().unwrap()).is_err());

        let _ = std::fs::remove_file(bad_port);
        let _ = std::fs::remove_file(bad_format);
        Ok(())
    }

    #[test]
    fn valid_config_file_is_used() -> Result<()> {
        let path = temp_config("valid", "[server]\nhost = \"0.0.0.0\"\nport = 3100")?;
        let cfg = AppConfig::load_or_env_from(path.to_str().unwrap())?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3100);
        let _ = std::fs::remove_file(path);
        Ok(())
    }

    #[test]
    fn missing_config_file_falls_back() -> Result<()> {
        let path = std::env::temp_dir().join(format!("site_config_missing_{}.toml", std::process::id()));
        let cfg = AppConfig::load_or_env_from(path.to_str().unwrap())?;
        assert!(cfg.server.port > 0);
        assert_eq!(cfg.site.static_dir, "frontend");
        Ok(())
    }

    #[test]
    fn bind_addr_keeps_hostnames_and_brackets_ipv6() -> Result<()> {
        let mut cfg = from_toml_str("[server]\nhost = \"localhost\"\nport = 8080")?;
        assert_eq!(cfg.bind_addr(), "localhost:8080");
        cfg.server.host = "::1".into();
        assert_eq!(cfg.bind_addr(), "[::1]:8080");
        Ok(())
    }
}
