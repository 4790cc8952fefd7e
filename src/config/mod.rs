use crate::core::calculator::business_hours::BusinessCalendar;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_business_start")]
    pub business_start_hour: u32,
    #[serde(default = "default_business_end")]
    pub business_end_hour: u32,
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    #[serde(default = "default_max_records")]
    pub max_records: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_timezone() -> String {
    "America/New_York".to_string()
}
fn default_business_start() -> u32 {
    9
}
fn default_business_end() -> u32 {
    17
}
fn default_window_days() -> i64 {
    30
}
fn default_max_records() -> usize {
    1000
}
fn default_page_size() -> usize {
    10
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            business_start_hour: default_business_start(),
            business_end_hour: default_business_end(),
            window_days: default_window_days(),
            max_records: default_max_records(),
            page_size: default_page_size(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rstudiometrics")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rstudiometrics")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rstudiometrics.conf")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file yields the defaults; a present but invalid one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Reject values that would make the calculators meaningless.
    pub fn validate(&self) -> AppResult<()> {
        self.calendar()?;

        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be greater than 0".into()));
        }
        if self.max_records == 0 {
            return Err(AppError::Config("max_records must be greater than 0".into()));
        }
        if self.window_days < 0 {
            return Err(AppError::Config("window_days cannot be negative".into()));
        }

        Ok(())
    }

    /// Business calendar described by this configuration.
    pub fn calendar(&self) -> AppResult<BusinessCalendar> {
        let tz = self
            .timezone
            .parse()
            .map_err(|_| AppError::InvalidTimezone(self.timezone.clone()))?;

        BusinessCalendar::new(tz, self.business_start_hour, self.business_end_hour)
    }

    /// Write the default configuration to `path` (or the default location).
    pub fn init(path: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }
}
