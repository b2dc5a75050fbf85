//! Database sources.
//!
//! A `databases` entry only names a connection; host, credentials and the
//! driver come from the framework's connection table (by default
//! `database.connections.<name>`). Only drivers with a dump adapter in the
//! backup engine are accepted.

use crate::bridge::result_error::error::Error;
use crate::bridge::result_error::result::Result;
use crate::bridge::source::{merge_options, MappedSource, Options, Source, SourceMapper, SourceType};
use crate::bridge::store::{Block, ConfigStore};
use crate::bridge::translator_config::TranslatorConfig;
use derive_more::Display;
use getset::{CopyGetters, Getters};
use serde_json::Value;

/// Driver names accepted in a connection's `driver` field.
pub const SUPPORTED_DRIVERS: [&str; 3] = ["mysql", "pgsql", "postgres"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum DatabaseDriver {
    #[display("mysql")]
    Mysql,
    #[display("pgsql")]
    Postgres,
}

impl DatabaseDriver {
    /// `pgsql` is the name Laravel uses for PostgreSQL.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mysql" => Some(DatabaseDriver::Mysql),
            "pgsql" | "postgres" => Some(DatabaseDriver::Postgres),
            _ => None,
        }
    }

    pub fn source_type(self) -> SourceType {
        match self {
            DatabaseDriver::Mysql => SourceType::Mysqldump,
            DatabaseDriver::Postgres => SourceType::Pgdump,
        }
    }
}

/// One entry of the framework's connection table.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
pub struct DatabaseConnectionConfig {
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    driver: DatabaseDriver,
    #[getset(get = "pub")]
    host: Value,
    #[getset(get = "pub")]
    username: Value,
    #[getset(get = "pub")]
    password: Value,
    #[getset(get = "pub")]
    database: Value,
    #[getset(get = "pub")]
    port: Option<Value>,
}

impl DatabaseConnectionConfig {
    /// Looks up `name` in the connection table at `connections_path`. The
    /// name is a single key of that table, even when it contains dots. The
    /// driver is checked before anything else is read from the entry.
    pub fn resolve(
        store: &dyn ConfigStore,
        connections_path: &str,
        name: &str,
        referenced_at: &str,
    ) -> Result<Self> {
        let block = store
            .lookup(connections_path)
            .and_then(Value::as_object)
            .and_then(|connections| connections.get(name))
            .filter(|value| !value.is_null())
            .map(|value| Block::new(value, format!("{connections_path}.{name}")))
            .ok_or_else(|| Error::UnknownConnection {
                name: name.to_string(),
                path: referenced_at.to_string(),
            })?;

        let driver_name = block.required_str("driver")?;
        let driver =
            DatabaseDriver::from_name(driver_name).ok_or_else(|| Error::UnsupportedDriver {
                connection: name.to_string(),
                driver: driver_name.to_string(),
            })?;

        let value_of = |key: &str| block.required(key).map(|b| b.value().clone());
        Ok(Self {
            name: name.to_string(),
            driver,
            host: value_of("host")?,
            username: value_of("username")?,
            password: block
                .object()?
                .get("password")
                .cloned()
                .ok_or_else(|| Error::missing_key(block.child_path("password")))?,
            database: value_of("database")?,
            port: block.optional("port")?.map(|b| b.value().clone()),
        })
    }

    /// Dump options derived from the connection, before caller overrides.
    pub fn default_options(&self) -> Options {
        let mut options = Options::from([
            ("host".to_string(), self.host.clone()),
            ("user".to_string(), self.username.clone()),
            ("password".to_string(), self.password.clone()),
            ("databases".to_string(), self.database.clone()),
        ]);
        if let Some(port) = &self.port {
            options.insert("port".to_string(), port.clone());
        }
        options
    }
}

/// Maps a `databases` entry to a dump source named `db-<connection>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DatabaseMapper;

impl SourceMapper for DatabaseMapper {
    fn map_source(
        &self,
        entry: &Block<'_>,
        store: &dyn ConfigStore,
        config: &TranslatorConfig,
    ) -> Result<MappedSource> {
        let source = entry.required("source")?;
        let connection_ref = source.required("connection")?;
        let connection_name = connection_ref.as_str()?;

        let connection = DatabaseConnectionConfig::resolve(
            store,
            config.connections_path(),
            connection_name,
            connection_ref.path(),
        )?;
        let options = merge_options(connection.default_options(), source.options("options")?);

        Ok(MappedSource {
            name: format!("db-{connection_name}"),
            source: Source::builder()
                .source_type(connection.driver().source_type())
                .options(options)
                .build(),
        })
    }
}
