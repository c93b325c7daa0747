//! Contract of the embedded web view hosted by each tab.
//!
//! The session never renders anything itself. It hands commands to a [`NavigableSurface`] and
//! forgets about them; load failures stay inside the surface. Hosts report what the surface
//! observed (title and committed URL) back as [`SurfaceEvent`]s.

use url::Url;

pub mod recording;

/// Opaque, navigable web view. All calls are fire-and-forget.
pub trait NavigableSurface: Send {
    fn load(&mut self, url: &str);

    /// Go back in history. Does nothing when there is no history.
    fn back(&mut self);

    /// Go forward in history. Does nothing when there is no history.
    fn forward(&mut self);

    fn reload(&mut self);

    /// Called once right before the owning tab is dropped.
    fn release(&mut self) {}
}

/// Creates one surface per tab.
pub trait SurfaceFactory: Send {
    fn create_surface(&mut self) -> Box<dyn NavigableSurface>;
}

impl<F> SurfaceFactory for F
where
    F: FnMut() -> Box<dyn NavigableSurface> + Send,
{
    fn create_surface(&mut self) -> Box<dyn NavigableSurface> {
        self()
    }
}

/// Observations a surface reports about its content.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The document title changed
    TitleChanged(String),
    /// A navigation was committed
    UrlChanged(Url),
}
