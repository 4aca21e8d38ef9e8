//! Recording adapter for the `Reporter` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{RegistrationPayload, ReportFuture, Reporter};

/// Records reporter interactions while delegating to an inner implementation.
pub struct RecordingReporter {
    inner: Box<dyn Reporter>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingReporter {
    /// Creates a new recording reporter wrapping the given implementation.
    pub fn new(inner: Box<dyn Reporter>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct ReportInput<'a> {
    url: &'a str,
    payload: &'a RegistrationPayload,
}

impl Reporter for RecordingReporter {
    fn report<'a>(&'a self, url: &'a str, payload: &'a RegistrationPayload) -> ReportFuture<'a> {
        Box::pin(async move {
            let result = self.inner.report(url, payload).await;
            let input = ReportInput { url, payload };
            record_result(&self.recorder, "reporter", "report", &input, &result);
            result
        })
    }
}
