use payflow::{Result, UserInfo};

use std::env;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use thiserror::Error;

const USER_VAR: &str = "PAYFLOW_USER";
const VENDOR_VAR: &str = "PAYFLOW_VENDOR";
const PARTNER_VAR: &str = "PAYFLOW_PARTNER";
const PWD_VAR: &str = "PAYFLOW_PWD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),
}

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

/// Loads gateway credentials from the environment.
/// The vendor falls back to the user when unset.
pub fn load_user_info() -> Result<UserInfo> {
    let user = require_env(USER_VAR)?;
    let vendor = env::var(VENDOR_VAR).unwrap_or_else(|_| user.clone());
    let partner = require_env(PARTNER_VAR)?;
    let password = require_env(PWD_VAR)?;

    Ok(UserInfo::new(user, vendor, partner, password))
}

fn require_env(name: &'static str) -> Result<String> {
    let value = env::var(name).map_err(|_| ConfigError::MissingEnv(name))?;

    Ok(value)
}
