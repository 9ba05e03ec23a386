use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_DB_FILE_PATH: &str = "./data/sqlite.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct TlsConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// sqlite file
    pub db_file_path: PathBuf,
    pub bind_addr: SocketAddr,
    /// https is only served when both cert and key are configured
    pub tls: Option<TlsConfig>,
}

pub fn read_config() -> Result<ServerConfig, String> {
    read_config_from(|key| env::var(key).ok())
}

fn read_config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<ServerConfig, String> {
    let db_file_path = PathBuf::from(
        lookup("DB_FILE_PATH").unwrap_or_else(|| DEFAULT_DB_FILE_PATH.to_string()),
    );

    let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let bind_addr = bind_addr
        .parse::<SocketAddr>()
        .map_err(|e| format!("Invalid BIND_ADDR '{}' - {}", bind_addr, e))?;

    let tls = match (lookup("TLS_CERT_PATH"), lookup("TLS_KEY_PATH")) {
        (Some(cert_path), Some(key_path)) => Some(TlsConfig {
            cert_path: PathBuf::from(cert_path),
            key_path: PathBuf::from(key_path),
        }),
        (Some(_), None) | (None, Some(_)) => {
            info!("Only one of TLS_CERT_PATH/TLS_KEY_PATH is set - falling back to http");
            None
        }
        (None, None) => None,
    };

    Ok(ServerConfig {
        db_file_path,
        bind_addr,
        tls,
    })
}
