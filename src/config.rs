// src/config.rs

use std::{env, net::SocketAddr, path::PathBuf};

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR {value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub users_file: PathBuf,
    pub questions_file: PathBuf,
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let users_file = env::var("USERS_FILE")
            .unwrap_or_else(|_| "./db/users.json".to_string());

        let questions_file = env::var("QUESTIONS_FILE")
            .unwrap_or_else(|_| "./db/questions.json".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        Ok(Self {
            users_file: users_file.into(),
            questions_file: questions_file.into(),
            bind_addr,
            rust_log,
            log_dir: log_dir.into(),
        })
    }
}
