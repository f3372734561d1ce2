use std::env;
use std::net::SocketAddr;

use jiff::tz::TimeZone;

use crate::safety::CrisisRegion;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Startup configuration, read once from the environment.
///
/// | Variable | Default |
/// |---|---|
/// | `PHQ_BIND_ADDR` | `127.0.0.1:8080` |
/// | `PHQ_TIME_ZONE` | system time zone |
/// | `PHQ_CRISIS_REGION` | `kr` |
/// | `PHQ_LOG_FORMAT` | `pretty` |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Zone used to stamp results when the caller sends no timestamp.
    pub time_zone: TimeZone,
    pub crisis_region: CrisisRegion,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset and empty values take
    /// the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("PHQ_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid PHQ_BIND_ADDR: {e}"))?;

        let time_zone = match get("PHQ_TIME_ZONE") {
            Some(name) => TimeZone::get(&name)
                .map_err(|e| eyre::eyre!("invalid PHQ_TIME_ZONE '{name}': {e}"))?,
            None => TimeZone::system(),
        };

        let crisis_region = match get("PHQ_CRISIS_REGION") {
            Some(value) => value.parse()?,
            None => CrisisRegion::Kr,
        };

        let log_format = match get("PHQ_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid PHQ_LOG_FORMAT '{other}' (expected 'pretty' or 'json')"
                ));
            }
        };

        Ok(Self {
            bind_addr,
            time_zone,
            crisis_region,
            log_format,
        })
    }
}
