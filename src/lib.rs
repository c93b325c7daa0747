//! Tab session core of the Ricker browser shell.
//!
//! A [`TabSessionManager`] owns the ordered tabs of a browser window plus the trailing
//! "new tab" sentinel slot, and drives one [`NavigableSurface`](surface::NavigableSurface)
//! per tab. Web rendering, the local content server and window chrome live outside this crate.

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod handle;
pub mod homepage;
pub mod search;
pub mod session;
pub mod snapshot;
pub mod surface;
pub mod tab;

pub use config::SessionConfig;
pub use dispatch::{DispatchOutcome, UiEvent};
pub use errors::SessionError;
pub use events::SessionEvent;
pub use handle::{spawn_session, SessionHandle};
pub use homepage::HomepageConfig;
pub use search::{SearchEngine, SearchEngineRegistry};
pub use session::{Slot, TabSessionManager};
pub use tab::{Tab, TabId};
