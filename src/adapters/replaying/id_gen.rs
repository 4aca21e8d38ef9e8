//! Replaying adapter for the `IdGenerator` port.

use super::{next_output, replay_result, SharedReplayer};
use crate::ports::{IdGenerator, PortError};

/// Replays recorded IDs from a cassette.
pub struct ReplayingIdGenerator {
    replayer: SharedReplayer,
}

impl ReplayingIdGenerator {
    /// Creates a new replaying ID generator from a shared cassette replayer.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> Result<String, PortError> {
        let output = next_output(&self.replayer, "id_gen", "generate_id")?;
        replay_result(output, "id_gen::generate_id")
    }
}
