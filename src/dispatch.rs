//! Entry point for UI events.
//!
//! The host forwards raw tab-bar and toolbar events here. Clicks on the tab bar are resolved
//! against the sentinel position at the moment they are dispatched. Events that complete an
//! interaction started earlier (picking an engine from a menu) address the tab by [`TabId`],
//! since tabs may have been closed or moved while the menu was open.

use log::debug;
use crate::errors::SessionError;
use crate::search::SearchEngine;
use crate::session::TabSessionManager;
use crate::tab::TabId;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Any slot of the tab bar was clicked, the sentinel included
    TabBarClicked(usize),
    /// The sentinel slot was activated
    SentinelActivated,
    /// The close button of a tab was pressed
    TabCloseRequested(usize),
    /// A tab was double-clicked; the host should show the engine menu
    TabDoubleActivated(usize),
    /// The user picked an engine from the menu opened for `tab_id`
    EngineChosen { tab_id: TabId, name: String },
    /// A tab was dragged from one position to another
    TabMoved { from: usize, to: usize },
    /// The text of the navigation input changed
    NavInputEdited { index: usize, text: String },
    /// Enter was pressed in the navigation input
    NavSubmit { index: usize, input: String },
    Back(usize),
    Forward(usize),
    Reload(usize),
    /// A new homepage was picked (URL or local file path)
    HomepageChosen(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Nothing for the host to do
    Handled,
    TabOpened(TabId),
    TabClosed(TabId),
    /// Closing was refused because it was the last tab
    CloseRefused,
    Selected(TabId),
    Moved(TabId),
    /// Engines to present in a menu for `tab_id`
    EngineMenu { tab_id: TabId, engines: &'static [SearchEngine] },
    EngineBound { tab_id: TabId, engine: &'static SearchEngine },
    /// The surface of `tab_id` was asked to load `url`
    Navigated { tab_id: TabId, url: String },
}

impl TabSessionManager {
    pub fn dispatch(&mut self, event: UiEvent) -> Result<DispatchOutcome, SessionError> {
        debug!("Dispatching {:?}", event);

        match event {
            UiEvent::TabBarClicked(index) if index == self.sentinel_index() => {
                Ok(DispatchOutcome::TabOpened(self.request_new_tab_via_sentinel()))
            }
            UiEvent::TabBarClicked(index) => {
                let tab_id = self.resolve(index)?;
                self.select_tab(index)?;
                Ok(DispatchOutcome::Selected(tab_id))
            }
            UiEvent::SentinelActivated => Ok(DispatchOutcome::TabOpened(self.request_new_tab_via_sentinel())),
            UiEvent::TabCloseRequested(index) => {
                Ok(match self.close_tab(index)? {
                    Some(closed) => DispatchOutcome::TabClosed(closed),
                    None => DispatchOutcome::CloseRefused,
                })
            }
            UiEvent::TabDoubleActivated(index) => {
                let engines = self.request_engine_menu(index)?;
                let tab_id = self.resolve(index)?;
                Ok(DispatchOutcome::EngineMenu { tab_id, engines })
            }
            UiEvent::EngineChosen { tab_id, name } => {
                let engine = self.choose_engine_by_id(tab_id, &name)?;
                Ok(DispatchOutcome::EngineBound { tab_id, engine })
            }
            UiEvent::TabMoved { from, to } => self.move_tab(from, to).map(DispatchOutcome::Moved),
            UiEvent::NavInputEdited { index, text } => {
                self.tab_mut(index)?.set_nav_input(text);
                Ok(DispatchOutcome::Handled)
            }
            UiEvent::NavSubmit { index, input } => {
                let tab_id = self.resolve(index)?;
                let url = self.navigate(index, &input)?;
                Ok(DispatchOutcome::Navigated { tab_id, url })
            }
            UiEvent::Back(index) => self.back(index).map(|_| DispatchOutcome::Handled),
            UiEvent::Forward(index) => self.forward(index).map(|_| DispatchOutcome::Handled),
            UiEvent::Reload(index) => self.reload(index).map(|_| DispatchOutcome::Handled),
            UiEvent::HomepageChosen(url) => self.set_homepage(&url).map(|_| DispatchOutcome::Handled),
        }
    }

    fn resolve(&self, index: usize) -> Result<TabId, SessionError> {
        self.tab(index).map(|tab| tab.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::session::Slot;
    use crate::surface::recording::RecordingFactory;

    fn session() -> (TabSessionManager, RecordingFactory) {
        let factory = RecordingFactory::new();
        let manager = TabSessionManager::with_config(SessionConfig::default(), Box::new(factory.clone()));
        (manager, factory)
    }

    #[test]
    fn tab_bar_click_on_sentinel_opens_tab() {
        let (mut manager, _factory) = session();

        let sentinel = manager.sentinel_index();
        let outcome = manager.dispatch(UiEvent::TabBarClicked(sentinel)).unwrap();
        let DispatchOutcome::TabOpened(id) = outcome else {
            panic!("expected TabOpened, got {:?}", outcome);
        };
        assert_eq!(manager.tab(1).unwrap().id(), id);

        // Sentinel moved; the old position is now a real tab and only selects it
        let first = manager.tab(0).unwrap().id();
        assert_eq!(manager.dispatch(UiEvent::TabBarClicked(0)), Ok(DispatchOutcome::Selected(first)));
        assert_eq!(manager.dispatch(UiEvent::TabBarClicked(1)), Ok(DispatchOutcome::Selected(id)));
        assert_eq!(manager.tab_count(), 2);
    }

    #[test]
    fn close_requests_respect_the_floor() {
        let (mut manager, _factory) = session();
        let opened = manager.dispatch(UiEvent::SentinelActivated).unwrap();
        let first = manager.tab(0).unwrap().id();

        assert_eq!(manager.dispatch(UiEvent::TabCloseRequested(0)), Ok(DispatchOutcome::TabClosed(first)));
        assert_eq!(manager.dispatch(UiEvent::TabCloseRequested(0)), Ok(DispatchOutcome::CloseRefused));
        assert!(matches!(opened, DispatchOutcome::TabOpened(id) if manager.tab(0).unwrap().id() == id));
    }

    #[test]
    fn menu_then_choice() {
        let (mut manager, factory) = session();

        let outcome = manager.dispatch(UiEvent::TabDoubleActivated(0)).unwrap();
        let DispatchOutcome::EngineMenu { tab_id, engines } = outcome else {
            panic!("expected EngineMenu, got {:?}", outcome);
        };
        assert_eq!(tab_id, manager.tab(0).unwrap().id());
        assert_eq!(engines.len(), 10);

        let chosen = manager
            .dispatch(UiEvent::EngineChosen { tab_id, name: engines[1].name.to_string() })
            .unwrap();
        assert!(matches!(chosen, DispatchOutcome::EngineBound { engine, .. } if engine.name == "DuckDuckGo"));
        assert_eq!(manager.tab(0).unwrap().title(), "DuckDuckGo");
        assert_eq!(factory.log(0).unwrap().loads().last().map(String::as_str), Some("https://duckduckgo.com"));

        let sentinel = manager.sentinel_index();
        assert!(manager.dispatch(UiEvent::TabDoubleActivated(sentinel)).is_err());
    }

    #[test]
    fn engine_choice_lands_on_menu_tab_after_earlier_close() {
        let (mut manager, _factory) = session();
        manager.create_tab();
        manager.create_tab();
        let target = manager.tab(1).unwrap().id();
        let neighbour = manager.tab(2).unwrap().id();

        let DispatchOutcome::EngineMenu { tab_id, .. } = manager.dispatch(UiEvent::TabDoubleActivated(1)).unwrap() else {
            panic!("expected EngineMenu");
        };
        manager.dispatch(UiEvent::TabCloseRequested(0)).unwrap();

        let chosen = manager.dispatch(UiEvent::EngineChosen { tab_id, name: "Bing".into() }).unwrap();
        assert!(matches!(chosen, DispatchOutcome::EngineBound { tab_id, .. } if tab_id == target));

        let target_tab = manager.tab(manager.index_of(target).unwrap()).unwrap();
        let neighbour_tab = manager.tab(manager.index_of(neighbour).unwrap()).unwrap();
        assert_eq!(target_tab.title(), "Bing");
        assert_eq!(neighbour_tab.title(), "New Tab");

        // Menu outlived its tab
        manager.dispatch(UiEvent::TabCloseRequested(0)).unwrap();
        assert_eq!(
            manager.dispatch(UiEvent::EngineChosen { tab_id, name: "Bing".into() }),
            Err(SessionError::UnknownTab(target))
        );
    }

    #[test]
    fn close_request_with_one_tab_is_refused_for_any_index() {
        let (mut manager, _factory) = session();

        assert_eq!(manager.dispatch(UiEvent::TabCloseRequested(1)), Ok(DispatchOutcome::CloseRefused));
        assert_eq!(manager.dispatch(UiEvent::TabCloseRequested(9)), Ok(DispatchOutcome::CloseRefused));
        assert_eq!(manager.tab_count(), 1);

        manager.dispatch(UiEvent::SentinelActivated).unwrap();
        assert!(matches!(
            manager.dispatch(UiEvent::TabCloseRequested(2)),
            Err(SessionError::IndexOutOfRange { index: 2, tab_count: 2 })
        ));
    }

    #[test]
    fn drag_moves_tab_and_keeps_sentinel_last() {
        let (mut manager, _factory) = session();
        let first = manager.tab(0).unwrap().id();
        let second = manager.create_tab();

        assert_eq!(manager.dispatch(UiEvent::TabMoved { from: 0, to: 1 }), Ok(DispatchOutcome::Moved(first)));
        assert_eq!(manager.slots(), vec![Slot::Tab(second), Slot::Tab(first), Slot::Sentinel]);
        assert_eq!(manager.active_tab().id(), second);

        let sentinel = manager.sentinel_index();
        assert!(manager.dispatch(UiEvent::TabMoved { from: 0, to: sentinel }).is_err());
    }

    #[test]
    fn nav_input_and_submit() {
        let (mut manager, factory) = session();
        let id = manager.tab(0).unwrap().id();

        manager.dispatch(UiEvent::NavInputEdited { index: 0, text: "exam".into() }).unwrap();
        assert_eq!(manager.tab(0).unwrap().nav_input(), "exam");

        assert_eq!(
            manager.dispatch(UiEvent::NavSubmit { index: 0, input: "example.com".into() }),
            Ok(DispatchOutcome::Navigated { tab_id: id, url: "https://example.com".into() })
        );
        manager.dispatch(UiEvent::Reload(0)).unwrap();
        assert_eq!(factory.log(0).unwrap().calls().len(), 3);
        assert!(manager.dispatch(UiEvent::Back(4)).is_err());
    }

    #[test]
    fn homepage_chosen_sets_homepage() {
        let (mut manager, factory) = session();

        manager.dispatch(UiEvent::HomepageChosen("/tmp/home.html".into())).unwrap();
        manager.dispatch(UiEvent::SentinelActivated).unwrap();
        assert_eq!(factory.log(1).unwrap().loads(), vec!["/tmp/home.html"]);

        assert_eq!(manager.dispatch(UiEvent::HomepageChosen(String::new())), Err(SessionError::EmptyHomepage));
    }
}
