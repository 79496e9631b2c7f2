use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::errors::CoreError;
use crate::models::input::AggregatorInput;
use crate::models::view::HomeViewState;
use crate::PortfolioAggregator;

enum Command {
    Input(AggregatorInput),
    Shutdown,
}

/// Single-writer queue in front of a [`PortfolioAggregator`].
///
/// The aggregator is moved into a dedicated task. Producers push inputs
/// through an unbounded channel; the task applies them one at a time in
/// arrival order and publishes the resulting view state on a watch channel.
pub struct UpdateDispatcher {
    sender: UnboundedSender<Command>,
    state: watch::Receiver<HomeViewState>,
    handle: JoinHandle<PortfolioAggregator>,
}

/// Cloneable producer side of an [`UpdateDispatcher`].
#[derive(Clone)]
pub struct UpdateSender {
    sender: UnboundedSender<Command>,
}

impl UpdateSender {
    /// Queue an input (non-blocking).
    pub fn send(&self, input: AggregatorInput) -> Result<(), CoreError> {
        self.sender
            .send(Command::Input(input))
            .map_err(|_| CoreError::DispatcherClosed)
    }
}

impl UpdateDispatcher {
    /// Move `aggregator` into a new task. Must be called within a tokio runtime.
    pub fn spawn(aggregator: PortfolioAggregator) -> Self {
        let (sender, receiver) = unbounded_channel();
        let (state_tx, state) = watch::channel(aggregator.view_state());
        let handle = tokio::spawn(Self::run(aggregator, receiver, state_tx));

        Self {
            sender,
            state,
            handle,
        }
    }

    async fn run(
        mut aggregator: PortfolioAggregator,
        mut receiver: UnboundedReceiver<Command>,
        state_tx: watch::Sender<HomeViewState>,
    ) -> PortfolioAggregator {
        while let Some(command) = receiver.recv().await {
            match command {
                Command::Input(input) => {
                    aggregator.apply(input);
                    state_tx.send_replace(aggregator.view_state());
                }
                Command::Shutdown => {
                    info!("Update dispatcher shutting down");
                    break;
                }
            }
        }
        debug!(?aggregator, "Update dispatcher stopped");
        aggregator
    }

    /// Queue an input (non-blocking).
    pub fn send(&self, input: AggregatorInput) -> Result<(), CoreError> {
        self.sender().send(input)
    }

    /// A producer handle that can be moved to other tasks.
    pub fn sender(&self) -> UpdateSender {
        UpdateSender {
            sender: self.sender.clone(),
        }
    }

    /// Receiver of the latest published view state.
    pub fn subscribe(&self) -> watch::Receiver<HomeViewState> {
        self.state.clone()
    }

    /// Latest published view state.
    pub fn current(&self) -> HomeViewState {
        self.state.borrow().clone()
    }

    /// Stop the task after every input queued so far has been applied,
    /// and hand back the aggregator.
    pub async fn shutdown(self) -> Result<PortfolioAggregator, CoreError> {
        if self.sender.send(Command::Shutdown).is_err() {
            error!("Update dispatcher task already gone");
        }
        self.handle.await.map_err(|_| CoreError::DispatcherClosed)
    }
}
