use std::{net::IpAddr, path::PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("actdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub webserver: Option<WebServer>,
    pub roster: Option<Roster>,
    pub catalog: Option<Catalog>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default().webserver.expect("WebServer configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Roster {
    pub enforce_capacity: bool,
}

impl Default for Roster {
    fn default() -> Self {
        Config::default().roster.expect("Roster configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Catalog {
    pub file: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogFile {
    pub activities: Vec<CatalogActivity>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    #[serde(default)]
    pub participants: Vec<String>,
}
