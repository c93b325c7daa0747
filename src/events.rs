//! Events emitted by the session whenever the tab strip changes.

use serde::Serialize;
use crate::tab::TabId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A tab was inserted right before the sentinel slot
    TabOpened { tab_id: TabId, index: usize, title: String },
    /// A tab was removed and its surface released
    TabClosed { tab_id: TabId, index: usize },
    /// A tab was dragged to another position
    TabMoved { tab_id: TabId, from: usize, to: usize },
    /// Another tab became the active one, or the active tab changed position
    ActiveTabChanged { tab_id: TabId, index: usize },
    /// The title shown in the tab strip changed
    TabTitleChanged { tab_id: TabId, title: String },
    /// The tab was pointed at a search engine
    EngineRebound { tab_id: TabId, engine: &'static str },
    /// The default URL for new tabs changed
    HomepageChanged { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let tab_id = TabId::new();
        let json = serde_json::to_value(SessionEvent::EngineRebound { tab_id, engine: "Qwant" }).unwrap();

        assert_eq!(json["type"], "engine_rebound");
        assert_eq!(json["engine"], "Qwant");
        assert_eq!(json["tab_id"], tab_id.to_string());
    }
}
