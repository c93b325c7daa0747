//! Search engines a tab can be rebound to.

use serde::Serialize;
use crate::errors::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchEngine {
    pub name: &'static str,
    pub base_url: &'static str,
}

const ENGINES: [SearchEngine; 10] = [
    SearchEngine { name: "Google", base_url: "https://www.google.com" },
    SearchEngine { name: "DuckDuckGo", base_url: "https://duckduckgo.com" },
    SearchEngine { name: "Bing", base_url: "https://www.bing.com" },
    SearchEngine { name: "Yahoo", base_url: "https://www.yahoo.com" },
    SearchEngine { name: "StartPage", base_url: "https://www.startpage.com" },
    SearchEngine { name: "Brave", base_url: "https://search.brave.com" },
    SearchEngine { name: "Yandex", base_url: "https://yandex.com" },
    SearchEngine { name: "Ecosia", base_url: "https://www.ecosia.org" },
    SearchEngine { name: "Qwant", base_url: "https://www.qwant.com" },
    SearchEngine { name: "Opera", base_url: "https://www.opera.com" },
];

/// Fixed, ordered lookup table of search engines.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngineRegistry;

impl SearchEngineRegistry {
    pub fn list() -> &'static [SearchEngine] {
        &ENGINES
    }

    /// Looks up an engine by its exact (case-sensitive) name.
    pub fn resolve(name: &str) -> Result<&'static SearchEngine, SessionError> {
        ENGINES
            .iter()
            .find(|engine| engine.name == name)
            .ok_or_else(|| SessionError::UnknownEngine(name.to_string()))
    }
}
