use crate::config::ConfigError;
use crate::tab::TabId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Tab index {index} out of range ({tab_count} tabs open)")]
    IndexOutOfRange { index: usize, tab_count: usize },

    #[error("Unknown search engine: {0}")]
    UnknownEngine(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(TabId),

    #[error("Homepage URL cannot be empty")]
    EmptyHomepage,

    #[error("Session channel closed")]
    ChannelClosed,

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
