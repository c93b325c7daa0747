use serde::Serialize;
use crate::session::TabSessionManager;
use crate::tab::TabId;

/// Serializable view of the tab strip, for hosts that render it elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Tab strip, always ending with the sentinel
    pub slots: Vec<SlotSnapshot>,
    /// Index of the active tab
    pub active: usize,
    /// Homepage new tabs will open
    pub homepage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotSnapshot {
    Tab {
        id: TabId,
        title: String,
        engine: Option<&'static str>,
        url: Option<String>,
        nav_input: String,
    },
    Sentinel,
}

impl SessionSnapshot {
    pub fn capture(manager: &TabSessionManager) -> Self {
        let slots = manager
            .tabs()
            .map(|tab| SlotSnapshot::Tab {
                id: tab.id(),
                title: tab.title().to_string(),
                engine: tab.bound_engine().map(|e| e.name),
                url: tab.current_url().map(|u| u.to_string()),
                nav_input: tab.nav_input().to_string(),
            })
            .chain(std::iter::once(SlotSnapshot::Sentinel))
            .collect();

        Self {
            slots,
            active: manager.active_index(),
            homepage: manager.homepage().get(),
        }
    }
}
