//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};
use crate::ports::PortError;

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Take the next interaction recorded for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns an error naming the requested pair and the pairs still
    /// available when the cassette holds no (more) matching interactions.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<Interaction, PortError> {
        let key = (port.to_string(), method.to_string());
        if let Some(interaction) = self.queues.get_mut(&key).and_then(VecDeque::pop_front) {
            return Ok(interaction);
        }

        let mut remaining: Vec<String> = self
            .queues
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|((p, m), _)| format!("{p}::{m}"))
            .collect();
        remaining.sort();
        Err(format!(
            "Cassette exhausted: no interaction left for port={port:?} method={method:?}. \
             Remaining port::method pairs: [{}]",
            remaining.join(", ")
        )
        .into())
    }

    /// Returns `true` once every recorded interaction has been served.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.queues.values().all(VecDeque::is_empty)
    }
}
