//! Node Configuration
//!
//! Startup settings resolved from command-line flags, then environment variables,
//! then built-in defaults.
//!
//! | Flag          | Env var        | Default        |
//! |---------------|----------------|----------------|
//! | `--bind`      | `BIND_ADDR`    | `0.0.0.0:8080` |
//! | `--products`  | `CATALOG_SIZE` | `100000`       |
//! | `--log-level` | `LOG_LEVEL`    | `info`         |

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::Level;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CATALOG_SIZE: u64 = 100_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Number of products generated by the startup bulk load.
    pub catalog_size: u64,
    pub log_level: Level,
}

impl ServerConfig {
    /// Resolves the configuration from the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::resolve(&args, |key| std::env::var(key).ok())
    }

    /// Resolves the configuration from explicit arguments (without the program name)
    /// and an environment lookup.
    pub fn resolve<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind = env("BIND_ADDR");
        let mut products = env("CATALOG_SIZE");
        let mut log_level = env("LOG_LEVEL");

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind = Some(flag_value(args, i)?);
                    i += 2;
                }
                "--products" => {
                    products = Some(flag_value(args, i)?);
                    i += 2;
                }
                "--log-level" => {
                    log_level = Some(flag_value(args, i)?);
                    i += 2;
                }
                other => {
                    tracing::warn!("Ignoring unknown argument: {}", other);
                    i += 1;
                }
            }
        }

        let bind_addr = bind
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .context("invalid bind address")?;

        let catalog_size = match products {
            Some(raw) => raw
                .replace('_', "")
                .parse::<u64>()
                .with_context(|| format!("invalid catalog size: {}", raw))?,
            None => DEFAULT_CATALOG_SIZE,
        };

        let log_level = match log_level {
            Some(raw) => raw
                .parse::<Level>()
                .map_err(|_| anyhow::anyhow!("invalid log level: {}", raw))?,
            None => Level::INFO,
        };

        Ok(Self {
            bind_addr,
            catalog_size,
            log_level,
        })
    }
}

fn flag_value(args: &[String], i: usize) -> Result<String> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", args[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::resolve(&[], no_env).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.catalog_size, DEFAULT_CATALOG_SIZE);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_flags() {
        let config = ServerConfig::resolve(
            &args(&["--bind", "127.0.0.1:9000", "--products", "1_000", "--log-level", "debug"]),
            no_env,
        )
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.catalog_size, 1_000);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_flags_override_env() {
        let env: HashMap<&str, &str> =
            HashMap::from([("BIND_ADDR", "127.0.0.1:7000"), ("CATALOG_SIZE", "500")]);

        let config = ServerConfig::resolve(&args(&["--products", "42"]), |key| {
            env.get(key).map(|v| v.to_string())
        })
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.catalog_size, 42);
    }

    #[test]
    fn test_missing_flag_value() {
        assert!(ServerConfig::resolve(&args(&["--bind"]), no_env).is_err());
    }

    #[test]
    fn test_invalid_values() {
        assert!(ServerConfig::resolve(&args(&["--bind", "nowhere"]), no_env).is_err());
        assert!(ServerConfig::resolve(&args(&["--products", "lots"]), no_env).is_err());
        assert!(ServerConfig::resolve(&args(&["--log-level", "loud"]), no_env).is_err());
    }
}
