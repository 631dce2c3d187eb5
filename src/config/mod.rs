use anyhow::{bail, Result};
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "survey.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: survey_db_sqlite::Config,
    pub webserver: WebServer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.url = db_url;
        }
        Ok(cfg)
    }
}

pub struct WebServer {
    pub enable_cors: bool,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, webserver } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
            connection_timeout,
        } = db.unwrap_or_default();

        if connection_sqlite.trim().is_empty() {
            bail!("Missing SQLite database");
        }
        if connection_pool_size == 0 {
            bail!("The connection pool needs at least a single connection");
        }
        let db = survey_db_sqlite::Config {
            url: connection_sqlite,
            pool_size: connection_pool_size,
            connection_timeout,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        Ok(Self { db, webserver })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io::Write as _, time::Duration};

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[db]
connection-sqlite = "responses.sqlite"
connection-pool-size = 2
connection-timeout = "3s"

[webserver]
cors = true
"#
        )
        .unwrap();
        let cfg = Config::try_load_from_file_or_default(Some(file.path())).unwrap();
        assert_eq!(2, cfg.db.pool_size);
        assert_eq!(Duration::from_secs(3), cfg.db.connection_timeout);
        assert!(cfg.webserver.enable_cors);
    }

    #[test]
    fn fall_back_to_defaults_for_missing_sections() {
        let raw: raw::Config = toml::from_str("[webserver]\ncors = true").unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert_eq!("survey.sqlite", cfg.db.url);
        assert_eq!(4, cfg.db.pool_size);
        assert!(cfg.webserver.enable_cors);
    }

    #[test]
    fn reject_empty_connection_pool() {
        let raw: raw::Config = toml::from_str(
            r#"
[db]
connection-sqlite = "survey.sqlite"
connection-pool-size = 0
connection-timeout = "10s"
"#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }

    #[test]
    fn reject_malformed_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[db]\nconnection-pool-size = \"many\"").unwrap();
        assert!(Config::try_load_from_file_or_default(Some(file.path())).is_err());
    }
}
