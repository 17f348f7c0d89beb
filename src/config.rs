use crate::error::GranaryError;
use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;
use serde::de::{self, Deserializer};
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Environment keys read at startup. Everything else in the process
/// environment is ignored.
const ENV_KEYS: &[&str] = &[
    "db_host",
    "db_user",
    "db_password",
    "db_name",
    "db_port",
    "data_dir",
    "table_name",
    "chunk_size",
    "log_dir",
    "loglevel",
    "exclude_validation",
    "only_validation",
];

/// Runtime configuration, extracted from the process environment
/// (after `.env` has been merged in by main).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(deserialize_with = "string_from_any")]
    pub db_host: String,
    #[serde(deserialize_with = "string_from_any")]
    pub db_user: String,
    #[serde(deserialize_with = "string_from_any")]
    pub db_password: String,
    #[serde(deserialize_with = "string_from_any")]
    pub db_name: String,
    #[serde(default = "default_db_port")]
    pub db_port: u16,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_table_name")]
    pub table_name: String,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
    #[serde(default, deserialize_with = "figment::util::bool_from_str_or_int")]
    pub exclude_validation: bool,
    #[serde(default, deserialize_with = "figment::util::bool_from_str_or_int")]
    pub only_validation: bool,
}

fn default_db_port() -> u16 {
    3306
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_table_name() -> String {
    "sales".to_string()
}

fn default_chunk_size() -> usize {
    1000
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_loglevel() -> String {
    "info".to_string()
}

/// Env values that look numeric (a password like `123456`) reach serde as
/// numbers; the credential fields accept any scalar.
fn string_from_any<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    struct Visitor;

    impl de::Visitor<'_> for Visitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string")
        }

        fn visit_str<E: de::Error>(self, val: &str) -> Result<String, E> {
            Ok(val.to_string())
        }

        fn visit_u64<E: de::Error>(self, n: u64) -> Result<String, E> {
            Ok(n.to_string())
        }

        fn visit_i64<E: de::Error>(self, n: i64) -> Result<String, E> {
            Ok(n.to_string())
        }

        fn visit_u128<E: de::Error>(self, n: u128) -> Result<String, E> {
            Ok(n.to_string())
        }

        fn visit_i128<E: de::Error>(self, n: i128) -> Result<String, E> {
            Ok(n.to_string())
        }

        fn visit_f64<E: de::Error>(self, n: f64) -> Result<String, E> {
            Ok(n.to_string())
        }

        fn visit_bool<E: de::Error>(self, b: bool) -> Result<String, E> {
            Ok(b.to_string())
        }
    }

    de.deserialize_any(Visitor)
}

impl Config {
    /// Extract configuration from the environment. Fails if any of the
    /// required `DB_*` variables is missing.
    pub fn from_env() -> Result<Config, GranaryError> {
        let cfg = Figment::from(Env::raw().only(ENV_KEYS)).extract::<Config>()?;
        Ok(cfg)
    }
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::from_env().expect("FATAL: invalid environment configuration"));
