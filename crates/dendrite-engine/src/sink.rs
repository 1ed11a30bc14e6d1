//! Snapshot sinks bundled with the engine.
//!
//! CSV serialization and plotting are external collaborators; these
//! sinks cover the in-process cases — discarding, buffering for
//! inspection, and handing owned snapshots to a consumer thread.

use crossbeam_channel::Sender;
use dendrite_core::{Snapshot, SnapshotSink};

/// Discards every snapshot. Useful for benchmarks and tests that only
/// care about the final state.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn emit(&mut self, _snapshot: Snapshot) {}
}

/// Buffers every snapshot in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    snapshots: Vec<Snapshot>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots received so far, in emission order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Consume the sink and return its snapshots.
    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }

    /// Labels of the received snapshots, for cadence assertions.
    pub fn labels(&self) -> Vec<String> {
        self.snapshots.iter().map(Snapshot::label).collect()
    }
}

impl SnapshotSink for MemorySink {
    fn emit(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }
}

/// Forwards snapshots over a crossbeam channel.
///
/// The payload is owned, so the consumer (a CSV writer, a plotter)
/// may run on another thread while the engine keeps sweeping. If the
/// receiver has hung up, snapshots are dropped silently — a dead
/// consumer must not fail the run.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    sender: Sender<Snapshot>,
}

impl ChannelSink {
    /// Wrap a channel sender.
    pub fn new(sender: Sender<Snapshot>) -> Self {
        Self { sender }
    }
}

impl SnapshotSink for ChannelSink {
    fn emit(&mut self, snapshot: Snapshot) {
        let _ = self.sender.send(snapshot);
    }
}
