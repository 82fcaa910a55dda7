//! Background loading of festival data.

use super::{Festival, FestivalSource};
use crate::error::{FestivoError, Result};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Page-level fetch state.
#[derive(Debug, Clone, Default)]
pub enum FetchState {
    /// Waiting for the source.
    #[default]
    Loading,
    /// Festivals arrived.
    Loaded(Arc<[Festival]>),
    /// The source failed; holds the error description.
    Failed(String),
}

impl FetchState {
    /// Build the terminal state from a fetch result.
    pub fn from_result(result: Result<Vec<Festival>>) -> Self {
        match result {
            Ok(festivals) => FetchState::Loaded(festivals.into()),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    /// Check if the fetch is still pending.
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Loaded festivals, if any.
    pub fn festivals(&self) -> Option<&Arc<[Festival]>> {
        match self {
            FetchState::Loaded(festivals) => Some(festivals),
            _ => None,
        }
    }

    /// Error description, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Runs a [`FestivalSource`] on a worker thread.
#[derive(Debug)]
pub struct FestivalLoader {
    receiver: Receiver<Result<Vec<Festival>>>,
}

impl FestivalLoader {
    /// Start fetching from `source` in the background.
    pub fn spawn<S>(source: S) -> Self
    where
        S: FestivalSource + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            tracing::info!("Fetching festivals from {}", source.describe());
            // The receiver may already be gone if the app quit early.
            let _ = sender.send(source.fetch());
        });
        Self { receiver }
    }

    /// Non-blocking check for the fetch result.
    pub fn try_finish(&self) -> Option<Result<Vec<Festival>>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(FestivoError::LoaderDisconnected)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    struct FixedSource(Vec<Festival>);

    impl FestivalSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        fn fetch(&self) -> Result<Vec<Festival>> {
            Ok(self.0.clone())
        }
    }

    struct PanickingSource;

    impl FestivalSource for PanickingSource {
        fn describe(&self) -> String {
            "panicking".to_string()
        }

        fn fetch(&self) -> Result<Vec<Festival>> {
            panic!("source blew up");
        }
    }

    fn wait(loader: &FestivalLoader) -> Result<Vec<Festival>> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = loader.try_finish() {
                return result;
            }
            assert!(Instant::now() < deadline, "loader never finished");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn delivers_source_result() {
        let festival = Festival {
            id: "1".into(),
            name: Some("Rock Fest".into()),
            ..Festival::default()
        };
        let loader = FestivalLoader::spawn(FixedSource(vec![festival.clone()]));

        let state = FetchState::from_result(wait(&loader));

        assert_eq!(state.festivals().map(|f| f.to_vec()), Some(vec![festival]));
        assert!(state.error().is_none());
    }

    #[test]
    fn dead_worker_reports_disconnect() {
        let loader = FestivalLoader::spawn(PanickingSource);

        assert!(matches!(wait(&loader), Err(FestivoError::LoaderDisconnected)));
    }

    #[test]
    fn failed_fetch_becomes_failed_state() {
        let state = FetchState::from_result(Err(FestivoError::LoaderDisconnected));

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Festival loader stopped unexpectedly"));
    }
}
