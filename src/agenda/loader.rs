use super::api::{AgendaAPI, EventSource, LoadError};
use super::catalog::Catalog;
use super::model::Event;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

type LoadOutcome = Result<Vec<Event>, LoadError>;

/// Events load issued on behalf of one agenda view.
///
/// Dropping it aborts the load, and an outcome that arrives afterwards is discarded.
#[derive(Debug)]
pub struct PendingLoad {
    receiver: Option<oneshot::Receiver<LoadOutcome>>,
    task: JoinHandle<()>,
}

/// Starts loading the events in the background. Must be called within a tokio runtime.
pub fn spawn_load(source: EventSource) -> PendingLoad {
    let (sender, receiver) = oneshot::channel();

    let task = tokio::spawn(async move {
        let outcome = AgendaAPI::get_events(&source).await;

        if sender.send(outcome).is_err() {
            debug!("Agenda view is gone, discarding events from {}", source);
        }
    });

    PendingLoad {
        receiver: Some(receiver),
        task,
    }
}

impl PendingLoad {
    /**
    Waits for the load and applies its outcome to `catalog`.
    Dropping the returned future before it ends leaves the load running, it can be waited on again.
    */
    pub async fn deliver(&mut self, catalog: &mut Catalog) -> bool {
        let Some(receiver) = self.receiver.as_mut() else {
            return false;
        };

        let received = receiver.await.ok();

        self.receiver = None;
        catalog.complete(Self::outcome(received))
    }

    /// Applies the outcome to `catalog` if the load already finished, without waiting
    pub fn try_deliver(&mut self, catalog: &mut Catalog) -> bool {
        let Some(receiver) = self.receiver.as_mut() else {
            return false;
        };

        let outcome = match receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => None,
        };

        self.receiver = None;
        catalog.complete(Self::outcome(outcome))
    }

    pub fn is_delivered(&self) -> bool {
        self.receiver.is_none()
    }

    fn outcome(received: Option<LoadOutcome>) -> LoadOutcome {
        received.unwrap_or_else(|| {
            warn!("Events load stopped before producing an outcome");
            Err(LoadError::Interrupted)
        })
    }
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        if !self.task.is_finished() {
            debug!("Aborting events load");
            self.task.abort();
        }
    }
}
