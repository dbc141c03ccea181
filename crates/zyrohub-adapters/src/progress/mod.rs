//! Progress reporter adapters.
//!
//! The interactive spinner lives in the CLI, next to the rest of the
//! terminal output. This module holds the recording reporter used by tests
//! and by non-interactive callers that want a transcript.

use zyrohub_core::application::ports::ProgressReporter;

/// One reported progress event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Started(String),
    Message(String),
    Succeeded(String),
    Failed(String),
}

/// Collects every event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Vec<ProgressEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ProgressEvent] {
        &self.events
    }

    /// Labels of steps that started.
    pub fn started(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ProgressEvent::Started(label) => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Label of the step that failed, if any.
    pub fn failed(&self) -> Option<&str> {
        self.events.iter().find_map(|e| match e {
            ProgressEvent::Failed(label) => Some(label.as_str()),
            _ => None,
        })
    }
}

impl ProgressReporter for RecordingReporter {
    fn step_started(&mut self, label: &str) {
        self.events.push(ProgressEvent::Started(label.into()));
    }

    fn message(&mut self, text: &str) {
        self.events.push(ProgressEvent::Message(text.into()));
    }

    fn step_succeeded(&mut self, completion: &str) {
        self.events.push(ProgressEvent::Succeeded(completion.into()));
    }

    fn step_failed(&mut self, label: &str) {
        self.events.push(ProgressEvent::Failed(label.into()));
    }
}
