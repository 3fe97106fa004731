//! Build information reported by `--version`.
//!
//! Release builds stamp the commit and build date through the
//! `PPTSCREENSHOT_GIT_COMMIT` and `PPTSCREENSHOT_BUILD_DATE` environment
//! variables at compile time. Development builds report commit `dev` and the
//! current time instead.
use chrono::{Local, SecondsFormat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
    pub build_date: String,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: option_env!("PPTSCREENSHOT_GIT_COMMIT")
            .filter(|s| !s.is_empty())
            .unwrap_or("dev")
            .to_string(),
        build_date: match option_env!("PPTSCREENSHOT_BUILD_DATE") {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        },
    }
}
