//! Everything a command needs besides its own arguments.

use crate::config::Config;
use crate::core::calculator::business_hours::BusinessCalendar;
use crate::errors::AppResult;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub cfg: Config,
    pub calendar: BusinessCalendar,
    /// Reference instant for windows and deadlines
    pub now: DateTime<Utc>,
}

impl AppContext {
    pub fn new(cfg: Config, now: DateTime<Utc>) -> AppResult<Self> {
        let calendar = cfg.calendar()?;
        Ok(Self { cfg, calendar, now })
    }
}
