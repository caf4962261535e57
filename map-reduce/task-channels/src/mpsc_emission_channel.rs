use async_trait::async_trait;
use map_reduce_core::{EmissionChannel, EmissionReceiver, EmissionSender, KeyValue, PipelineError};
use tokio::sync::mpsc;

/// Bounded tokio mpsc conduit
pub struct MpscEmissionChannel;

impl EmissionChannel for MpscEmissionChannel {
    type Sender = ChannelEmissionSender;
    type Receiver = ChannelEmissionReceiver;

    fn open(capacity: usize) -> (Self::Sender, Self::Receiver) {
        // tokio panics on a zero-capacity channel
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (ChannelEmissionSender { tx }, ChannelEmissionReceiver { rx })
    }
}

#[derive(Clone)]
pub struct ChannelEmissionSender {
    tx: mpsc::Sender<KeyValue>,
}

#[async_trait]
impl EmissionSender for ChannelEmissionSender {
    async fn emit(&self, emission: KeyValue) -> Result<(), PipelineError> {
        self.tx
            .send(emission)
            .await
            .map_err(|_| PipelineError::ConduitClosed)
    }
}

pub struct ChannelEmissionReceiver {
    rx: mpsc::Receiver<KeyValue>,
}

#[async_trait]
impl EmissionReceiver for ChannelEmissionReceiver {
    async fn recv(&mut self) -> Option<KeyValue> {
        self.rx.recv().await
    }
}
