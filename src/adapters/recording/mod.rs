//! Recording adapters that capture interactions to cassettes.

pub mod filesystem;
pub mod id_gen;
pub mod reporter;

pub use filesystem::RecordingFileSystem;
pub use id_gen::RecordingIdGenerator;
pub use reporter::RecordingReporter;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

fn push(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: serde_json::Value,
    output: serde_json::Value,
) {
    // A poisoned recorder only loses the capture, never the run.
    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input, output),
        Err(poisoned) => poisoned.into_inner().record(port, method, input, output),
    }
}

/// Record an interaction with a plain (non-Result) return value.
///
/// Mirror of `replaying::replay_value`.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input).unwrap_or_default();
    let output_json = serde_json::to_value(output).unwrap_or_default();
    push(recorder, port, method, input_json, output_json);
}

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// Mirror of `replaying::replay_result`.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"Ok": v}`
/// - `Err(e)` is serialized as `{"Err": e.to_string()}`
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).unwrap_or_default();
    let output_json = match result {
        Ok(v) => serde_json::json!({ "Ok": serde_json::to_value(v).unwrap_or_default() }),
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };
    push(recorder, port, method, input_json, output_json);
}
