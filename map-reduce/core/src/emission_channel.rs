use crate::{KeyValue, PipelineError};
use async_trait::async_trait;

/// Producer side of the mapper -> collector conduit.
/// Every mapper task owns its own clone; the conduit closes once all clones are dropped.
#[async_trait]
pub trait EmissionSender: Clone + Send + Sync + 'static {
    /// Hand one emission to the collector.
    /// Suspends while the conduit is full; fails if the collector is gone.
    async fn emit(&self, emission: KeyValue) -> Result<(), PipelineError>;
}

/// Consumer side of the conduit, owned by the single shuffle collector
#[async_trait]
pub trait EmissionReceiver: Send + 'static {
    /// Receive the next emission.
    /// Returns None once every sender has been dropped and the buffer is drained.
    async fn recv(&mut self) -> Option<KeyValue>;
}

/// Factory for a bounded conduit (mpsc, sockets, ...)
pub trait EmissionChannel: Send + Sync + 'static {
    type Sender: EmissionSender;
    type Receiver: EmissionReceiver;

    /// Open a conduit holding at most `capacity` in-flight emissions
    fn open(capacity: usize) -> (Self::Sender, Self::Receiver);
}
