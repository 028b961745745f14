//! Shell configuration: fixed page contracts plus development knobs.
//!
//! DESIGN
//! ======
//! The canvas id, class, and size are a contract with the external game
//! module and are compile-time constants. Only logging verbosity and the
//! post-mount surface check can be changed, through the page's query string
//! (`?log=debug&verify_surface=false`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the container element the hosting page provides for the UI tree.
pub const ROOT_ELEMENT_ID: &str = "root";

/// Title applied to the document once mounted.
pub const PAGE_TITLE: &str = "Depths";

/// Console log level when the page does not ask for another.
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Identity and size of the canvas the game module renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSpec {
    pub id: &'static str,
    pub class: &'static str,
    pub width: u32,
    pub height: u32,
}

impl SurfaceSpec {
    /// CSS selector the game module uses to find the canvas.
    pub fn selector(&self) -> String {
        format!("#{}", self.id)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

pub const CANVAS_SURFACE: SurfaceSpec = SurfaceSpec {
    id: "game-canvas",
    class: "inner",
    width: 512,
    height: 512,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("invalid value for {key}: {value}")]
    InvalidFlag { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    pub root_id: &'static str,
    pub log_level: log::Level,
    pub verify_surface: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { root_id: ROOT_ELEMENT_ID, log_level: DEFAULT_LOG_LEVEL, verify_surface: true }
    }
}

impl ShellConfig {
    /// Build config from a URL query string (with or without the leading `?`).
    ///
    /// Recognized keys:
    /// - `log`: `trace`, `debug`, `info` (default), `warn`, `error`
    /// - `verify_surface`: `true` (default), `false`, `1`, `0`
    ///
    /// Unknown keys are ignored.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "log" => config.log_level = parse_log_level(value)?,
                "verify_surface" => config.verify_surface = parse_flag(key, value)?,
                _ => {}
            }
        }

        Ok(config)
    }

    /// Build config from the current page location.
    #[cfg(feature = "csr")]
    pub fn from_location() -> Result<Self, ConfigError> {
        let search = web_sys::window().map(|w| w.location().search());
        match search {
            Some(Ok(search)) => Self::from_query(&search),
            _ => Ok(Self::default()),
        }
    }
}

fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    raw.parse::<log::Level>()
        .map_err(|_| ConfigError::InvalidLogLevel { value: raw.to_owned() })
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key: key.to_owned(), value: raw.to_owned() }),
    }
}
