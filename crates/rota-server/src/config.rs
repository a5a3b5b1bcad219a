use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Runtime configuration, merged from a TOML file and `ROTA_`-prefixed
/// environment variables.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path of the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Directory served as the web front end.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

fn default_port() -> u16 {
    7540
}

fn default_database_path() -> String {
    "rota.db".to_string()
}

fn default_web_dir() -> String {
    "./web".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            database_path: default_database_path(),
            web_dir: default_web_dir(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("ROTA_"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let config = Config::default();
        assert_eq!(config.port, 7540);
        assert_eq!(config.database_path, "rota.db");
        assert_eq!(config.web_dir, "./web");
    }
}
