// src/tab.rs
//! Tab system: [`Tab`] and [`TabId`].
//!

use std::fmt::{Debug, Display};
use log::debug;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;
use crate::errors::SessionError;
use crate::search::{SearchEngine, SearchEngineRegistry};
use crate::surface::{NavigableSurface, SurfaceEvent};

/// Placeholder shown in an empty navigation input.
pub const NAV_PLACEHOLDER: &str = "Enter URL...";

/// A unique identifier for a tab, represented as a UUID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Turns what the user typed into something loadable. Anything not starting with `http` gets
/// `https://` prepended; nothing else is checked.
pub fn normalize_input(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// One browsing unit: a surface plus the state shown around it in the tab strip and toolbar.
pub struct Tab {
    /// ID of the tab
    id: TabId,
    /// Web view owned by this tab
    surface: Box<dyn NavigableSurface>,
    /// Title shown in the tab strip
    title: String,
    /// Search engine the tab was rebound to, if any
    engine: Option<&'static SearchEngine>,
    /// Contents of the navigation input
    nav_input: String,
    /// Last URL the surface reported as committed
    current_url: Option<Url>,
}

impl Debug for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("engine", &self.engine.map(|e| e.name))
            .field("nav_input", &self.nav_input)
            .field("current_url", &self.current_url)
            .field("surface", &"Box<dyn NavigableSurface>")
            .finish()
    }
}

impl Tab {
    /// Creates the tab and immediately starts loading `url` in its surface.
    pub fn new(url: &str, title: impl Into<String>, mut surface: Box<dyn NavigableSurface>) -> Self {
        surface.load(url);

        Self {
            id: TabId::new(),
            surface,
            title: title.into(),
            engine: None,
            nav_input: String::new(),
            current_url: None,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bound_engine(&self) -> Option<&'static SearchEngine> {
        self.engine
    }

    pub fn nav_input(&self) -> &str {
        &self.nav_input
    }

    pub fn current_url(&self) -> Option<&Url> {
        self.current_url.as_ref()
    }

    pub fn set_nav_input(&mut self, text: impl Into<String>) {
        self.nav_input = text.into();
    }

    /// Loads what the user typed, returning the URL handed to the surface.
    pub fn navigate(&mut self, raw_input: &str) -> String {
        let url = normalize_input(raw_input);
        debug!("Tab[{}]: navigating to '{}'", self.id, url);

        self.nav_input = raw_input.to_string();
        self.surface.load(&url);
        url
    }

    /// Navigate with the current contents of the navigation input.
    pub fn submit_nav_input(&mut self) -> String {
        let raw = self.nav_input.clone();
        self.navigate(&raw)
    }

    /// Points the tab at a search engine's homepage. On an unknown name the tab is left untouched.
    pub fn rebind_engine(&mut self, name: &str) -> Result<&'static SearchEngine, SessionError> {
        let engine = SearchEngineRegistry::resolve(name)?;
        debug!("Tab[{}]: rebinding to {}", self.id, engine.name);

        self.engine = Some(engine);
        self.title = engine.name.to_string();
        self.surface.load(engine.base_url);
        Ok(engine)
    }

    pub fn back(&mut self) {
        self.surface.back();
    }

    pub fn forward(&mut self) {
        self.surface.forward();
    }

    pub fn reload(&mut self) {
        self.surface.reload();
    }

    /// Apply an observation from the surface. Returns the new title when it changed.
    pub(crate) fn apply_surface_event(&mut self, event: SurfaceEvent) -> Option<String> {
        match event {
            SurfaceEvent::TitleChanged(title) => {
                if title.is_empty() || title == self.title {
                    return None;
                }
                self.title = title;
                Some(self.title.clone())
            }
            SurfaceEvent::UrlChanged(url) => {
                self.current_url = Some(url);
                None
            }
        }
    }

    /// Releases the surface. The tab is gone afterwards.
    pub(crate) fn close(mut self) {
        debug!("Tab[{}]: releasing surface", self.id);
        self.surface.release();
    }
}
