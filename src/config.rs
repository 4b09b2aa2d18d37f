//! # Configuration Management

//! This module handles the configuration loading and management for the yard-control service.
//! It leverages the `config` crate to provide a flexible and structured way to define and access configuration settings from various sources, including:

//! * YAML configuration files (default.yaml, development.yaml, production.yaml)
//! * Environment variables

//! The core of this module is the `Settings` struct, which encapsulates all the configuration settings required by the service.

use serde::Deserialize;
use config::{Config, Environment, File};
use std::{env, fmt};
use std::path::PathBuf;
use secrecy::{Secret, ExposeSecret};
use log::debug;
use url::Url;
use crate::errors::YardError;
use crate::models::{NewDock, NewUser, TruckType};

/// Represents the complete set of configuration settings for the yard-control service.
/// It's populated by reading from various configuration sources and provides convenient access to the settings throughout the application.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Settings for the HTTP listener
    pub server: ServerSettings,
    /// Settings for application logging
    pub logging: LoggingSettings,
    /// Behaviour switches and limits of the movement ledger
    #[serde(default)]
    pub ledger: LedgerSettings,
    /// Settings for the audit log mirror
    #[serde(default)]
    pub audit: AuditSettings,
    /// Optional database that receives a copy of the audit log
    #[serde(default)]
    pub database: Option<DatabaseSettings>,
    /// Directory content loaded at start-up
    #[serde(default)]
    pub yard: YardSeed,
}

/// Holds the address the HTTP and push channel listener binds to
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Holds the configuration settings for application logging
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// The logging level (e.g., "info", "debug", "error")
    pub level: String,
    /// The directory path where log files will be stored (optional)
    pub path: Option<PathBuf>,
}

/// Ledger behaviour
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LedgerSettings {
    /// Accept a CD exit from any state instead of only after the dock exit
    pub permissive_cd_exit: bool,
    /// Default page size when listing movements
    pub movement_list_limit: usize,
    /// Maximum notifications returned per user
    pub notification_history_limit: usize,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            permissive_cd_exit: false,
            movement_list_limit: 100,
            notification_history_limit: 50,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuditSettings {
    /// Number of audit entries accumulated before they are written to the database
    pub batch_size: usize,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self { batch_size: 20 }
    }
}

/// # Database Settings

/// This struct holds the configuration settings required to establish a connection to the audit database
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// The hostname or IP address of the database server
    pub host: String,
    /// The port number on which the database server is listening
    pub port: u16,
    /// The username for database authentication (optional if using Windows authentication)
    pub username: Option<String>,
    /// The password for database authentication (optional if using Windows authentication)
    #[serde(default, deserialize_with = "deserialize_optional_secret")]
    pub password: Option<Secret<String>>,
    /// The name of the database to connect to
    pub database_name: String,
    /// The application name to be used in the connection string
    pub app_name: String,
    /// Whether to use Windows authentication (true) or SQL Server authentication (false)
    pub win_auth: bool,
    /// Whether to trust the server certificate (relevant for encrypted connections)
    pub trusted: bool,
}

impl DatabaseSettings {
    /// Constructs a connection string for the audit database based on the settings
    ///
    /// Credentials are only embedded when SQL Server authentication is used. The string is kept secret
    /// because it may carry the password
    ///
    /// # Returns
    ///
    /// * `Ok(Secret<String>)`: the `mssql://` connection string
    /// * `Err(YardError)`: if the host cannot form a valid URL or credentials are missing
    pub fn connection_string(&self) -> Result<Secret<String>, YardError> {
        let mut url = Url::parse(&format!("mssql://{}:{}", self.host, self.port))
            .map_err(|e| YardError::ConfigError(format!("Invalid database host: {}", e)))?;
        url.set_path(&self.database_name);

        if !self.win_auth {
            let username = self.username.as_deref()
                .ok_or_else(|| YardError::ConfigError("Database username is required without win_auth".to_string()))?;
            url.set_username(username)
                .map_err(|_| YardError::ConfigError("Invalid database username".to_string()))?;
            if let Some(password) = &self.password {
                url.set_password(Some(password.expose_secret()))
                    .map_err(|_| YardError::ConfigError("Invalid database password".to_string()))?;
            }
        }

        Ok(Secret::new(url.to_string()))
    }
}

/// Directory content loaded into the store when the service starts
#[derive(Debug, Deserialize, Clone, Default)]
pub struct YardSeed {
    #[serde(default)]
    pub users: Vec<NewUser>,
    #[serde(default)]
    pub trucks: Vec<SeedTruck>,
    #[serde(default)]
    pub docks: Vec<NewDock>,
}

/// A truck in the seed file. The driver is referenced by login code since ids are assigned on load
#[derive(Debug, Deserialize, Clone)]
pub struct SeedTruck {
    pub plate: String,
    pub truck_type: TruckType,
    #[serde(default)]
    pub driver_code: Option<String>,
    #[serde(default)]
    pub capacity: Option<String>,
}


/// # Settings Initialization
///
/// The `Settings` implementation provides a `new` function to load and construct the configuration settings.
impl Settings {
    /// Loads and constructs the application settings from various configuration sources.
    ///
    /// This function reads configuration settings from the following sources, in order of precedence:
    ///
    /// 1. `default.yaml`: Contains default settings for the application
    /// 2. Environment-specific YAML file (e.g., `development.yaml` or `production.yaml`) based on the `RUN_MODE` environment variable
    /// 3. Environment variables prefixed with `APP` (e.g., `APP__SERVER__PORT`)
    ///
    /// The `CONFIG_DIR` environment variable can be used to specify the directory where the YAML configuration files are located (defaults to "config").
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)`: If the settings were loaded and constructed successfully
    /// * `Err(YardError)`: If there was an error during the loading or construction process
    pub fn new() -> Result<Self, YardError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "config".into());
        debug!("Run Mode: {:?}, Config Dir: {:?}", run_mode, config_dir);

        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/default", config_dir)))
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let mut s: Self = s.try_deserialize::<Settings>()
            .map_err(YardError::from)?;

        if let Some(ref mut path) = s.logging.path {
            *path = env::current_dir()?.join(path.clone());
        }

        if s.audit.batch_size == 0 {
            s.audit.batch_size = 1;
        }

        Ok(s)
    }
}

/// Deserializes a secret string from configuration into a `Secret<String>`
fn deserialize_optional_secret<'de, D>(deserializer: D) -> Result<Option<Secret<String>>, D::Error>
    where
        D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.map(Secret::new))
}

impl fmt::Display for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DatabaseSettings {{ host: {}, port: {}, username: {:?}, database_name: {}, app_name: {}, win_auth: {}, trusted: {} }}",
            self.host, self.port, self.username, self.database_name, self.app_name, self.win_auth, self.trusted
        )
    }
}
