use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("survey.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
    #[serde(deserialize_with = "deserialize_duration")]
    pub connection_timeout: Duration,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        let db = cfg.db.unwrap();
        assert_eq!("survey.sqlite", db.connection_sqlite);
        assert_eq!(4, db.connection_pool_size);
        assert_eq!(Duration::from_secs(10), db.connection_timeout);
        assert!(!cfg.webserver.unwrap().cors);
    }

    #[test]
    fn parse_human_readable_timeout() {
        let cfg: Config = toml::from_str(
            r#"
[db]
connection-sqlite = ":memory:"
connection-pool-size = 1
connection-timeout = "1m30s"
"#,
        )
        .unwrap();
        assert_eq!(Duration::from_secs(90), cfg.db.unwrap().connection_timeout);
        assert!(cfg.webserver.is_none());
    }
}
