//! Bot settings passed in by the configuration loader

use serde::{Deserialize, Serialize};

/// Telegram notification settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramSettings {
    /// Send notifications
    pub enabled: bool,
    /// Bot API token
    pub token: String,
    /// Chat ids allowed to talk to the bot
    pub users: Vec<i64>,
}

/// Settings shared by the components consuming the model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Pairs to track
    pub pairs: Vec<String>,
    /// Notification settings
    #[serde(default)]
    pub telegram: TelegramSettings,
}
