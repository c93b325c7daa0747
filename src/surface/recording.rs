use std::sync::{Arc, Mutex};
use crate::surface::{NavigableSurface, SurfaceFactory};

/// A single command received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Load(String),
    Back,
    Forward,
    Reload,
    Released,
}

/// Shared list of calls, readable after the surface itself has been dropped.
#[derive(Debug, Clone, Default)]
pub struct SurfaceLog(Arc<Mutex<Vec<SurfaceCall>>>);

impl SurfaceLog {
    fn push(&self, call: SurfaceCall) {
        match self.0.lock() {
            Ok(mut calls) => calls.push(call),
            Err(poisoned) => poisoned.into_inner().push(call),
        }
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        match self.0.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// URLs passed to `load`, in order.
    pub fn loads(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SurfaceCall::Load(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn is_released(&self) -> bool {
        self.calls().contains(&SurfaceCall::Released)
    }
}

/// Surface that renders nothing and only records the commands it receives.
pub struct RecordingSurface {
    log: SurfaceLog,
}

impl RecordingSurface {
    pub fn new(log: SurfaceLog) -> Self {
        Self { log }
    }
}

impl NavigableSurface for RecordingSurface {
    fn load(&mut self, url: &str) {
        self.log.push(SurfaceCall::Load(url.to_string()));
    }

    fn back(&mut self) {
        self.log.push(SurfaceCall::Back);
    }

    fn forward(&mut self) {
        self.log.push(SurfaceCall::Forward);
    }

    fn reload(&mut self) {
        self.log.push(SurfaceCall::Reload);
    }

    fn release(&mut self) {
        self.log.push(SurfaceCall::Released);
    }
}

/// Factory handing out [`RecordingSurface`]s. Every created surface gets its own log; the logs
/// are kept in creation order.
#[derive(Debug, Clone, Default)]
pub struct RecordingFactory {
    logs: Arc<Mutex<Vec<SurfaceLog>>>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log of the n-th surface created by this factory (or any of its clones).
    pub fn log(&self, n: usize) -> Option<SurfaceLog> {
        match self.logs.lock() {
            Ok(logs) => logs.get(n).cloned(),
            Err(poisoned) => poisoned.into_inner().get(n).cloned(),
        }
    }

    pub fn created(&self) -> usize {
        match self.logs.lock() {
            Ok(logs) => logs.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

impl SurfaceFactory for RecordingFactory {
    fn create_surface(&mut self) -> Box<dyn NavigableSurface> {
        let log = SurfaceLog::default();
        match self.logs.lock() {
            Ok(mut logs) => logs.push(log.clone()),
            Err(poisoned) => poisoned.into_inner().push(log.clone()),
        }
        Box::new(RecordingSurface::new(log))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_keeps_logs_in_creation_order() {
        let factory = RecordingFactory::new();
        let mut producer = factory.clone();

        let mut first = producer.create_surface();
        let mut second = producer.create_surface();
        first.load("https://a");
        second.reload();
        first.release();

        assert_eq!(factory.created(), 2);
        let log = factory.log(0).unwrap();
        assert_eq!(log.calls(), vec![SurfaceCall::Load("https://a".into()), SurfaceCall::Released]);
        assert!(log.is_released());
        assert_eq!(factory.log(1).unwrap().calls(), vec![SurfaceCall::Reload]);
        assert!(factory.log(2).is_none());
    }
}
