use std::str::FromStr;

use anyhow::{Context, Result, bail};

use crate::config::{
    config_model::{DotEnvyConfig, Page, Server},
    stage::Stage,
};

/// Paths served by fixed routes; the page cannot be mounted on them.
pub const RESERVED_PATHS: [&str; 3] = ["/sort", "/api/v1/items", "/api/v1/health-check"];

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: env_or("SERVER_PORT", 8080)?,
        body_limit: env_or("SERVER_BODY_LIMIT", 1)?,
        timeout: env_or("SERVER_TIMEOUT", 30)?,
    };

    let pathname = std::env::var("PAGE_PATH").unwrap_or_else(|_| "/".to_string());
    validate_page_path(&pathname)?;

    let stage = parse_stage(std::env::var("STAGE").ok().as_deref())?;

    Ok(DotEnvyConfig {
        server,
        page: Page { pathname },
        stage,
    })
}

pub fn validate_page_path(pathname: &str) -> Result<()> {
    if !pathname.starts_with('/') {
        bail!("PAGE_PATH must start with '/': {}", pathname);
    }

    let trimmed = pathname.trim_end_matches('/');
    if RESERVED_PATHS
        .iter()
        .any(|reserved| trimmed == *reserved || trimmed.starts_with(&format!("{reserved}/")))
    {
        bail!("PAGE_PATH collides with a fixed route: {}", pathname);
    }

    Ok(())
}

/// Unset or blank means `Local`; anything else must name a stage.
pub fn parse_stage(raw: Option<&str>) -> Result<Stage> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Stage::default()),
        Some(value) => Stage::try_from(&value.to_string()),
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is invalid")),
        Err(_) => Ok(default),
    }
}
