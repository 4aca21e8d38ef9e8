//! Replaying adapters that serve recorded interactions.

pub mod filesystem;
pub mod id_gen;
pub mod reporter;

pub use filesystem::ReplayingFileSystem;
pub use id_gen::ReplayingIdGenerator;
pub use reporter::ReplayingReporter;

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::PortError;

/// Replayer shared by every replaying adapter of one context.
pub type SharedReplayer = Arc<Mutex<CassetteReplayer>>;

/// Take the output JSON of the next recorded `port::method` interaction.
pub(crate) fn next_output(
    replayer: &SharedReplayer,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, PortError> {
    let mut guard = replayer.lock().map_err(|e| -> PortError { format!("{e}").into() })?;
    Ok(guard.next_interaction(port, method)?.output)
}

/// Decode a plain recorded value.
///
/// Mirror of `recording::record_interaction`.
pub(crate) fn replay_value<T: DeserializeOwned>(
    output: serde_json::Value,
    context: &str,
) -> Result<T, PortError> {
    serde_json::from_value(output)
        .map_err(|e| format!("{context}: unexpected recorded output: {e}").into())
}

/// Decode a recorded `{"Ok": v}` / `{"Err": msg}` result.
///
/// Mirror of `recording::record_result`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
    context: &str,
) -> Result<T, PortError> {
    if let Some(err) = output.get("Err") {
        return Err(err.as_str().unwrap_or("unknown error").to_string().into());
    }
    match output.get("Ok") {
        Some(ok) => replay_value(ok.clone(), context),
        None => Err(format!("{context}: recorded output is neither Ok nor Err").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replay_result_decodes_ok_and_err() {
        let ok: Result<u16, _> = replay_result(json!({"Ok": 200}), "reporter::report");
        assert_eq!(ok.unwrap(), 200);

        let err: Result<u16, _> = replay_result(json!({"Err": "connection refused"}), "r");
        assert_eq!(err.unwrap_err().to_string(), "connection refused");
    }

    #[test]
    fn replay_result_rejects_untagged_output() {
        let result: Result<u16, _> = replay_result(json!(200), "reporter::report");
        assert!(result.unwrap_err().to_string().contains("neither Ok nor Err"));
    }
}
