//! Running a session on its own task.
//!
//! A [`TabSessionManager`] is not shareable between threads. Hosts whose UI toolkit delivers
//! events on several threads spawn it with [`spawn_session`]: the manager then lives on a single
//! tokio task and every call is marshalled to it over a command channel. Events produced by the
//! manager are re-broadcast to all subscribers.

use log::{debug, info};
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use crate::dispatch::{DispatchOutcome, UiEvent};
use crate::errors::SessionError;
use crate::events::SessionEvent;
use crate::session::TabSessionManager;
use crate::snapshot::SessionSnapshot;
use crate::surface::SurfaceEvent;
use crate::tab::TabId;

#[derive(Debug)]
pub enum SessionCommand {
    Dispatch {
        event: UiEvent,
        reply: oneshot::Sender<Result<DispatchOutcome, SessionError>>,
    },
    Surface {
        tab_id: TabId,
        event: SurfaceEvent,
        reply: oneshot::Sender<Result<(), SessionError>>,
    },
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    Shutdown,
}

/// Cloneable handle to a session running on its own task.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    cmd_tx: mpsc::Sender<SessionCommand>,
    event_tx: broadcast::Sender<SessionEvent>,
}

impl SessionHandle {
    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    pub async fn dispatch(&self, event: UiEvent) -> Result<DispatchOutcome, SessionError> {
        let (tx, rx) = oneshot::channel();
        self.send(SessionCommand::Dispatch { event, reply: tx }).await?;
        rx.await.map_err(|_| SessionError::ChannelClosed)?
    }

    pub async fn surface_event(&self, tab_id: TabId, event: SurfaceEvent) -> Result<(), SessionError> {
        let (tx, rx) = oneshot::channel();
        self.send(SessionCommand::Surface { tab_id, event, reply: tx }).await?;
        rx.await.map_err(|_| SessionError::ChannelClosed)?
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        let (tx, rx) = oneshot::channel();
        self.send(SessionCommand::Snapshot { reply: tx }).await?;
        rx.await.map_err(|_| SessionError::ChannelClosed)
    }

    /// Stops the session task. Pending commands sent before this one are still handled.
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::Shutdown).await
    }

    async fn send(&self, cmd: SessionCommand) -> Result<(), SessionError> {
        self.cmd_tx.send(cmd).await.map_err(|_| SessionError::ChannelClosed)
    }
}

/// Moves `manager` onto a new tokio task. Must be called from within a tokio runtime.
///
/// The task ends on [`SessionHandle::shutdown`] or when every handle has been dropped.
pub fn spawn_session(manager: TabSessionManager) -> (SessionHandle, JoinHandle<()>) {
    let capacity = manager.config().event_capacity;
    let (cmd_tx, cmd_rx) = mpsc::channel::<SessionCommand>(capacity);
    let (event_tx, _first_rx) = broadcast::channel::<SessionEvent>(capacity);

    let handle = SessionHandle {
        cmd_tx,
        event_tx: event_tx.clone(),
    };
    let join_handle = tokio::spawn(run(manager, cmd_rx, event_tx));

    (handle, join_handle)
}

async fn run(
    mut manager: TabSessionManager,
    mut cmd_rx: mpsc::Receiver<SessionCommand>,
    event_tx: broadcast::Sender<SessionEvent>,
) {
    info!("Session task started");
    publish(&mut manager, &event_tx);

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            SessionCommand::Dispatch { event, reply } => {
                let res = manager.dispatch(event);
                publish(&mut manager, &event_tx);
                let _ = reply.send(res);
            }
            SessionCommand::Surface { tab_id, event, reply } => {
                let res = manager.handle_surface_event(tab_id, event);
                publish(&mut manager, &event_tx);
                let _ = reply.send(res);
            }
            SessionCommand::Snapshot { reply } => {
                let _ = reply.send(SessionSnapshot::capture(&manager));
            }
            SessionCommand::Shutdown => break,
        }
    }

    info!("Session task stopped");
}

fn publish(manager: &mut TabSessionManager, event_tx: &broadcast::Sender<SessionEvent>) {
    for event in manager.take_events() {
        // No subscribers is fine; the event is simply dropped
        if event_tx.send(event).is_err() {
            debug!("No session event subscribers");
        }
    }
}
