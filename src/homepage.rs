use std::sync::{Arc, RwLock};
use log::info;
use crate::errors::SessionError;

/// Process-wide default URL for new tabs.
///
/// Cloning yields another handle to the same value, so the application context, the session
/// manager and the content server can all observe it. Tabs read it once when they are created;
/// changing it never reloads tabs that are already open.
#[derive(Debug, Clone)]
pub struct HomepageConfig {
    url: Arc<RwLock<String>>,
}

impl HomepageConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Arc::new(RwLock::new(url.into())),
        }
    }

    pub fn get(&self) -> String {
        match self.url.read() {
            Ok(url) => url.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the homepage. Local file paths are stored verbatim, without scheme normalization.
    pub fn set(&self, url: impl Into<String>) -> Result<(), SessionError> {
        let url = url.into();
        if url.is_empty() {
            return Err(SessionError::EmptyHomepage);
        }

        info!("Homepage set to '{}'", url);
        match self.url.write() {
            Ok(mut current) => *current = url,
            Err(poisoned) => *poisoned.into_inner() = url,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_value() {
        let homepage = HomepageConfig::new("http://127.0.0.1:5000/");
        let reader = homepage.clone();

        homepage.set("https://foo").unwrap();
        assert_eq!(reader.get(), "https://foo");
    }

    #[test]
    fn empty_value_is_rejected_and_keeps_previous() {
        let homepage = HomepageConfig::new("https://foo");
        assert_eq!(homepage.set(""), Err(SessionError::EmptyHomepage));
        assert_eq!(homepage.get(), "https://foo");
    }

    #[test]
    fn local_paths_are_kept_verbatim() {
        let homepage = HomepageConfig::new("https://foo");
        homepage.set("/home/user/start.html").unwrap();
        assert_eq!(homepage.get(), "/home/user/start.html");
    }
}
