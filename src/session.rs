// src/session.rs
//! Tab session: [`TabSessionManager`] and the tab strip [`Slot`]s.
//!
//! The tab strip is the ordered list of tabs followed by exactly one sentinel slot that stands
//! for "open a new tab here". At least one real tab is always open, so the strip is never
//! shorter than two slots. Everything addressed by index refers to a position in that strip;
//! the sentinel position is derived from the tab count on every call and never stored.

use std::collections::VecDeque;
use log::{debug, info};
use crate::config::SessionConfig;
use crate::errors::SessionError;
use crate::events::SessionEvent;
use crate::homepage::HomepageConfig;
use crate::search::{SearchEngine, SearchEngineRegistry};
use crate::surface::{SurfaceEvent, SurfaceFactory};
use crate::tab::{Tab, TabId};

/// A position in the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Tab(TabId),
    Sentinel,
}

pub struct TabSessionManager {
    /// Configuration the session was started with
    config: SessionConfig,
    /// Shared default URL, read when a tab is created
    homepage: HomepageConfig,
    /// Creates the surface for each new tab
    factory: Box<dyn SurfaceFactory>,
    /// Open tabs in strip order. The sentinel is implied after the last one.
    tabs: Vec<Tab>,
    /// Index of the active tab
    active: usize,
    /// Events not yet picked up by the host
    events: VecDeque<SessionEvent>,
}

impl TabSessionManager {
    /// Starts a session with one tab on the current homepage, titled after
    /// `config.initial_tab_title`.
    pub fn new(config: SessionConfig, homepage: HomepageConfig, factory: Box<dyn SurfaceFactory>) -> Self {
        let mut manager = Self {
            config,
            homepage,
            factory,
            tabs: Vec::new(),
            active: 0,
            events: VecDeque::new(),
        };

        let title = manager.config.initial_tab_title.clone();
        let url = manager.homepage.get();
        manager.create_tab_with(&url, &title);
        manager
    }

    /// Starts a session whose homepage is taken from `config.default_homepage`.
    pub fn with_config(config: SessionConfig, factory: Box<dyn SurfaceFactory>) -> Self {
        let homepage = HomepageConfig::new(config.default_homepage.clone());
        Self::new(config, homepage, factory)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn homepage(&self) -> &HomepageConfig {
        &self.homepage
    }

    /// Number of real tabs (the sentinel is not counted)
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Position of the sentinel slot, always the last one.
    pub fn sentinel_index(&self) -> usize {
        self.tabs.len()
    }

    /// Number of slots in the strip, sentinel included.
    pub fn slot_count(&self) -> usize {
        self.tabs.len() + 1
    }

    pub fn slots(&self) -> Vec<Slot> {
        self.tabs
            .iter()
            .map(|tab| Slot::Tab(tab.id()))
            .chain(std::iter::once(Slot::Sentinel))
            .collect()
    }

    pub fn tabs(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn tab(&self, index: usize) -> Result<&Tab, SessionError> {
        let tab_count = self.tabs.len();
        self.tabs.get(index).ok_or(SessionError::IndexOutOfRange { index, tab_count })
    }

    pub fn tab_mut(&mut self, index: usize) -> Result<&mut Tab, SessionError> {
        let tab_count = self.tabs.len();
        self.tabs.get_mut(index).ok_or(SessionError::IndexOutOfRange { index, tab_count })
    }

    pub fn index_of(&self, tab_id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id() == tab_id)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> &Tab {
        &self.tabs[self.active]
    }

    /// Opens a tab on the current homepage with the configured new-tab title.
    pub fn create_tab(&mut self) -> TabId {
        let url = self.homepage.get();
        let title = self.config.new_tab_title.clone();
        self.create_tab_with(&url, &title)
    }

    /// Inserts a tab right before the sentinel and makes it active.
    pub fn create_tab_with(&mut self, url: &str, title: &str) -> TabId {
        let surface = self.factory.create_surface();
        let tab = Tab::new(url, title, surface);
        let tab_id = tab.id();
        let index = self.tabs.len();

        info!("Opening tab {} at index {} with '{}'", tab_id, index, url);
        self.tabs.push(tab);
        self.events.push_back(SessionEvent::TabOpened { tab_id, index, title: title.to_string() });
        self.activate(index);

        tab_id
    }

    /// The sentinel slot was activated by the user.
    pub fn request_new_tab_via_sentinel(&mut self) -> TabId {
        debug!("Sentinel activated");
        self.create_tab()
    }

    /// Closes the tab at `index` and releases its surface.
    ///
    /// Closing the last remaining tab is refused silently and returns `Ok(None)`. When the active
    /// tab is closed, the tab that slides into its position becomes active, or the one before it
    /// when the closed tab was the last.
    pub fn close_tab(&mut self, index: usize) -> Result<Option<TabId>, SessionError> {
        if self.tabs.len() <= 1 {
            debug!("Refusing to close the last tab");
            return Ok(None);
        }
        self.check_index(index)?;

        let was_active = index == self.active;
        let tab = self.tabs.remove(index);
        let tab_id = tab.id();
        info!("Closing tab {} at index {}", tab_id, index);
        tab.close();
        self.events.push_back(SessionEvent::TabClosed { tab_id, index });

        if was_active {
            let next = index.min(self.tabs.len() - 1);
            self.active = next;
            let tab_id = self.tabs[next].id();
            self.events.push_back(SessionEvent::ActiveTabChanged { tab_id, index: next });
        } else if index < self.active {
            self.active -= 1;
            let active_id = self.tabs[self.active].id();
            self.events.push_back(SessionEvent::ActiveTabChanged { tab_id: active_id, index: self.active });
        }

        Ok(Some(tab_id))
    }

    /// Closes the tab with the given id. See [`close_tab`](Self::close_tab).
    pub fn close_tab_by_id(&mut self, tab_id: TabId) -> Result<Option<TabId>, SessionError> {
        let index = self.index_of(tab_id).ok_or(SessionError::UnknownTab(tab_id))?;
        self.close_tab(index)
    }

    /// Moves the tab at `from` so that it ends up at `to`, shifting the tabs in between. The
    /// sentinel cannot be moved and nothing can be moved past it. The active tab stays active
    /// wherever it ends up.
    pub fn move_tab(&mut self, from: usize, to: usize) -> Result<TabId, SessionError> {
        self.check_index(from)?;
        self.check_index(to)?;

        let tab_id = self.tabs[from].id();
        if from == to {
            return Ok(tab_id);
        }

        let active_id = self.tabs[self.active].id();
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        debug!("Moved tab {} from {} to {}", tab_id, from, to);
        self.events.push_back(SessionEvent::TabMoved { tab_id, from, to });

        let active = self.index_of(active_id).unwrap_or(self.active);
        if active != self.active {
            self.active = active;
            self.events.push_back(SessionEvent::ActiveTabChanged { tab_id: active_id, index: active });
        }

        Ok(tab_id)
    }

    pub fn select_tab(&mut self, index: usize) -> Result<(), SessionError> {
        self.check_index(index)?;
        self.activate(index);
        Ok(())
    }

    /// Engines the tab at `index` can be rebound to. Nothing changes until
    /// [`choose_engine`](Self::choose_engine) is called.
    pub fn request_engine_menu(&self, index: usize) -> Result<&'static [SearchEngine], SessionError> {
        self.check_index(index)?;
        Ok(SearchEngineRegistry::list())
    }

    pub fn choose_engine(&mut self, index: usize, name: &str) -> Result<&'static SearchEngine, SessionError> {
        let tab = self.tab_mut(index)?;
        let engine = tab.rebind_engine(name)?;
        let tab_id = tab.id();

        info!("Tab {} rebound to {}", tab_id, engine.name);
        self.events.push_back(SessionEvent::EngineRebound { tab_id, engine: engine.name });
        self.events.push_back(SessionEvent::TabTitleChanged { tab_id, title: engine.name.to_string() });
        Ok(engine)
    }

    /// Rebinds the tab with the given id, wherever it sits in the strip by now.
    pub fn choose_engine_by_id(&mut self, tab_id: TabId, name: &str) -> Result<&'static SearchEngine, SessionError> {
        let index = self.index_of(tab_id).ok_or(SessionError::UnknownTab(tab_id))?;
        self.choose_engine(index, name)
    }

    /// Loads user input in the tab at `index`, returning the URL that was loaded.
    pub fn navigate(&mut self, index: usize, raw_input: &str) -> Result<String, SessionError> {
        Ok(self.tab_mut(index)?.navigate(raw_input))
    }

    pub fn back(&mut self, index: usize) -> Result<(), SessionError> {
        self.tab_mut(index)?.back();
        Ok(())
    }

    pub fn forward(&mut self, index: usize) -> Result<(), SessionError> {
        self.tab_mut(index)?.forward();
        Ok(())
    }

    pub fn reload(&mut self, index: usize) -> Result<(), SessionError> {
        self.tab_mut(index)?.reload();
        Ok(())
    }

    /// Changes the homepage used by tabs opened from now on. Open tabs are not reloaded.
    pub fn set_homepage(&mut self, url: &str) -> Result<(), SessionError> {
        self.homepage.set(url)?;
        self.events.push_back(SessionEvent::HomepageChanged { url: url.to_string() });
        Ok(())
    }

    /// Feed back something the surface of `tab_id` observed.
    pub fn handle_surface_event(&mut self, tab_id: TabId, event: SurfaceEvent) -> Result<(), SessionError> {
        let index = self.index_of(tab_id).ok_or(SessionError::UnknownTab(tab_id))?;

        if let Some(title) = self.tabs[index].apply_surface_event(event) {
            self.events.push_back(SessionEvent::TabTitleChanged { tab_id, title });
        }
        Ok(())
    }

    /// Drain all events queued since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    fn check_index(&self, index: usize) -> Result<(), SessionError> {
        if index < self.tabs.len() {
            Ok(())
        } else {
            Err(SessionError::IndexOutOfRange { index, tab_count: self.tabs.len() })
        }
    }

    fn activate(&mut self, index: usize) {
        self.active = index;
        let tab_id = self.tabs[index].id();
        debug!("Tab {} at index {} is now active", tab_id, index);
        self.events.push_back(SessionEvent::ActiveTabChanged { tab_id, index });
    }
}
