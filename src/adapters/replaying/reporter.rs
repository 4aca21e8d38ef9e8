//! Replaying adapter for the `Reporter` port.

use super::{next_output, replay_result, SharedReplayer};
use crate::ports::{RegistrationPayload, ReportFuture, Reporter};

/// Serves recorded report statuses from a cassette.
pub struct ReplayingReporter {
    replayer: SharedReplayer,
}

impl ReplayingReporter {
    /// Create a replaying reporter backed by the given replayer.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl Reporter for ReplayingReporter {
    fn report<'a>(&'a self, _url: &'a str, _payload: &'a RegistrationPayload) -> ReportFuture<'a> {
        let result = next_output(&self.replayer, "reporter", "report")
            .and_then(|output| replay_result(output, "reporter::report"));
        Box::pin(async move { result })
    }
}
