//! Process configuration.
//!
//! Every setting can be given as a flag or through its environment variable.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Shared secret used when none is configured.
pub const DEFAULT_AUTH_KEY: &str = "asdasdasd";

/// Doctor and patient registry server.
#[derive(Parser, Clone)]
#[command(name = "hospital_api")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "HOSPITAL_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Directory holding doctors.json and patients.json
    #[arg(long, env = "HOSPITAL_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Value every request must send in its Authorization header
    #[arg(
        long,
        env = "HOSPITAL_AUTH_KEY",
        default_value = DEFAULT_AUTH_KEY,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub auth_key: String,

    /// Append-only request log
    #[arg(long, env = "HOSPITAL_ACCESS_LOG", default_value = "server.log")]
    pub access_log: PathBuf,

    /// Diagnostic log filter, e.g. `info` or `hospital_api=debug`
    #[arg(long, env = "HOSPITAL_LOG", default_value = "info")]
    pub log_level: String,
}
