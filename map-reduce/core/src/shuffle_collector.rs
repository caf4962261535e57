use crate::{EmissionReceiver, Grouping};
use tracing::debug;

/// Single consumer of the emission conduit.
/// Groups emissions by key until every producer has hung up.
pub struct ShuffleCollector<Rx: EmissionReceiver> {
    receiver: Rx,
    grouping: Grouping,
}

impl<Rx: EmissionReceiver> ShuffleCollector<Rx> {
    pub fn new(receiver: Rx) -> Self {
        Self {
            receiver,
            grouping: Grouping::new(),
        }
    }

    /// Drains the conduit and returns the closed grouping
    pub async fn run(mut self) -> Grouping {
        while let Some(emission) = self.receiver.recv().await {
            self.grouping.insert(emission);
        }

        debug!(
            keys = self.grouping.len(),
            emissions = self.grouping.emission_count(),
            "conduit closed, grouping complete"
        );
        self.grouping
    }
}
