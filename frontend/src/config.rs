use log::Level;

use crate::reveal::{RevealConfig, DEFAULT_FALLBACK_DELAY_MS, DEFAULT_ROOT_MARGIN};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // reveal triggers are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_NAME: &str = "光庭 -HikariNiwa-";

/// Story fold blocks.
pub fn block_reveal() -> RevealConfig {
    RevealConfig::new(0.18, DEFAULT_ROOT_MARGIN, DEFAULT_FALLBACK_DELAY_MS)
}

/// Whole page bands, which are taller and need a little more on screen.
pub fn section_reveal() -> RevealConfig {
    RevealConfig::new(0.2, DEFAULT_ROOT_MARGIN, DEFAULT_FALLBACK_DELAY_MS)
}
