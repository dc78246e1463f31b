use std::{
    fs,
    io::ErrorKind,
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};

use actdb_core::{entities::*, repositories::ActivityRepo as _};
use actdb_db_mem::Catalog;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "actdb.toml";

pub struct Config {
    pub webserver: WebServer,
    pub roster: Roster,
    pub catalog: CatalogSource,
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub cors: bool,
}

pub struct Roster {
    /// Reject signups once a roster reached its `max_participants`
    /// figure. The stored capacity is informational otherwise.
    pub enforce_capacity: bool,
}

pub struct CatalogSource {
    /// Optional TOML file with the seed activities. The built-in
    /// Mergington High catalog is used when none is given.
    pub file: Option<PathBuf>,
}

impl Config {
    pub fn try_load_from_file_or_default(file_path: Option<&Path>) -> Result<Self> {
        let file_path: &Path = file_path.unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        Ok(Self::from(raw_config))
    }
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config {
            webserver,
            roster,
            catalog,
        } = from;
        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();
        let raw::Roster { enforce_capacity } = roster.unwrap_or_default();
        let raw::Catalog { file } = catalog.unwrap_or_default();
        Self {
            webserver: WebServer {
                address,
                port,
                cors,
            },
            roster: Roster { enforce_capacity },
            catalog: CatalogSource { file },
        }
    }
}

/// Reads the seed activities from a TOML file.
pub fn load_catalog_from_file(file_path: &Path) -> Result<Catalog> {
    let raw_catalog: raw::CatalogFile = toml::from_str(&fs::read_to_string(file_path)?)?;
    let mut catalog = Catalog::default();
    for raw_activity in raw_catalog.activities {
        let raw::CatalogActivity {
            name,
            description,
            schedule,
            max_participants,
            participants,
        } = raw_activity;
        let activity = Activity {
            name,
            description,
            schedule,
            max_participants,
            participants: participants.into_iter().map(EmailAddress::from).collect(),
        };
        catalog
            .create_activity(activity)
            .map_err(|err| anyhow!("Invalid activity catalog in {file_path:?}: {err}"))?;
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = Config::from(raw::Config::default());
        assert_eq!(cfg.webserver.port, 8000);
        assert!(!cfg.webserver.cors);
        assert!(!cfg.roster.enforce_capacity);
        assert!(cfg.catalog.file.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let raw_config: raw::Config = toml::from_str(
            r#"
            [roster]
            enforce-capacity = true
            "#,
        )
        .unwrap();
        let cfg = Config::from(raw_config);
        assert!(cfg.roster.enforce_capacity);
        // Missing sections fall back to the defaults.
        assert_eq!(cfg.webserver.port, 8000);
    }

    #[test]
    fn parse_catalog_file() {
        let raw_catalog: raw::CatalogFile = toml::from_str(
            r#"
            [[activities]]
            name = "Chess Club"
            description = "Learn strategies and compete in chess tournaments"
            schedule = "Fridays, 3:30 PM - 5:00 PM"
            max-participants = 12
            participants = ["michael@mergington.edu"]

            [[activities]]
            name = "Art Club"
            description = "Explore your creativity through painting and drawing"
            schedule = "Thursdays, 3:30 PM - 5:00 PM"
            max-participants = 15
            "#,
        )
        .unwrap();
        assert_eq!(raw_catalog.activities.len(), 2);
        assert_eq!(raw_catalog.activities[0].max_participants, 12);
        // Participants are optional for seed activities.
        assert!(raw_catalog.activities[1].participants.is_empty());
    }
}
