use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3333,
            request_timeout_secs: default_request_timeout(),
            worker_threads: Some(4),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub path: String,
}

fn default_request_timeout() -> u64 {
    60
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        // 归一化 store（支持从环境变量填充路径）
        self.store.normalize_from_env();
        self.store.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be non-zero"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("server.request_timeout_secs must be a positive number of seconds"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 {
                self.worker_threads = Some(4);
            }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl StoreConfig {
    pub fn normalize_from_env(&mut self) {
        // 若 TOML 中未提供路径，则尝试从环境变量填充，最后落回默认值
        if self.path.trim().is_empty() {
            self.path = std::env::var("STORE_PATH").unwrap_or_else(|_| "data/users.json".to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(anyhow!("store.path is empty; set it in config.toml or via STORE_PATH"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let mut cfg: AppConfig = toml::from_str("").expect("parse empty config");
        cfg.normalize_and_validate().expect("defaults validate");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3333);
        assert_eq!(cfg.server.request_timeout_secs, 60);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert!(!cfg.store.path.is_empty());
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut cfg: AppConfig =
            toml::from_str("[server]\nhost = \"0.0.0.0\"\nport = 0\n").expect("parse");
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let doc = "[server]\nhost = \"0.0.0.0\"\nport = 8080\nrequest_timeout_secs = 0\n";
        let mut cfg: AppConfig = toml::from_str(doc).expect("parse");
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn explicit_store_path_survives_normalization() {
        let doc = "[store]\npath = \"/var/lib/userapi/users.json\"\n";
        let mut cfg: AppConfig = toml::from_str(doc).expect("parse");
        cfg.normalize_and_validate().expect("validate");
        assert_eq!(cfg.store.path, "/var/lib/userapi/users.json");
    }

    #[test]
    fn zero_worker_threads_normalized_to_default() {
        let doc = "[server]\nhost = \"127.0.0.1\"\nport = 8080\nworker_threads = 0\n";
        let mut cfg: AppConfig = toml::from_str(doc).expect("parse");
        cfg.normalize_and_validate().expect("validate");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }
}
