//! Testing utilities for the guide.
//!
//! This module provides tools for integration testing:
//! - `MockSpeech` for deterministic narration tests without a platform engine
//! - `TestHarness` for scripted session scenarios
//! - Assertion helpers for verifying narration output

use crate::narration::{NarrationEvent, NarrationState};
use crate::session::{GuideSession, SessionConfig};
use crate::speech::{SpeechEngine, SpeechError, SpeechParams, Voice};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct SpeechLog {
    spoken: Vec<String>,
    stops: usize,
}

/// Shared view into what a [`MockSpeech`] engine has done. The engine itself
/// moves into the narration worker; keep the log around for assertions.
#[derive(Clone)]
pub struct MockSpeechLog(Arc<Mutex<SpeechLog>>);

impl MockSpeechLog {
    /// Utterances started so far, in order. A paragraph resumed after a
    /// pause appears twice: once interrupted, once replayed.
    pub fn spoken(&self) -> Vec<String> {
        self.0.lock().expect("speech log lock").spoken.clone()
    }

    pub fn stop_count(&self) -> usize {
        self.0.lock().expect("speech log lock").stops
    }
}

/// A speech engine that records utterances instead of producing audio.
///
/// By default every utterance completes instantly. Give it an utterance
/// delay to open a window for pause/stop commands, or a failure index to
/// script an engine error.
pub struct MockSpeech {
    log: Arc<Mutex<SpeechLog>>,
    voices: Vec<Voice>,
    utterance_delay: Duration,
    fail_on_attempt: Option<usize>,
    attempts: usize,
}

impl MockSpeech {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(SpeechLog::default())),
            voices: vec![
                Voice::new("id-id-x-male-local", "Suara Pria", "id-ID"),
                Voice::new("id-id-x-female-local", "Suara Wanita", "id-ID"),
            ],
            utterance_delay: Duration::ZERO,
            fail_on_attempt: None,
            attempts: 0,
        }
    }

    pub fn with_voices(mut self, voices: Vec<Voice>) -> Self {
        self.voices = voices;
        self
    }

    /// Make each utterance take this long before completing.
    pub fn with_utterance_delay(mut self, delay: Duration) -> Self {
        self.utterance_delay = delay;
        self
    }

    /// Fail the n-th speak attempt (zero-based) with an engine error.
    pub fn failing_on_attempt(mut self, attempt: usize) -> Self {
        self.fail_on_attempt = Some(attempt);
        self
    }

    /// The log handle; clone it out before boxing the engine.
    pub fn log(&self) -> MockSpeechLog {
        MockSpeechLog(Arc::clone(&self.log))
    }
}

impl Default for MockSpeech {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechEngine for MockSpeech {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    async fn speak(&mut self, text: &str, _params: &SpeechParams) -> Result<(), SpeechError> {
        let attempt = self.attempts;
        self.attempts += 1;

        if self.fail_on_attempt == Some(attempt) {
            return Err(SpeechError::Engine("scripted failure".to_string()));
        }

        self.log
            .lock()
            .expect("speech log lock")
            .spoken
            .push(text.to_string());

        if !self.utterance_delay.is_zero() {
            tokio::time::sleep(self.utterance_delay).await;
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.log.lock().expect("speech log lock").stops += 1;
    }
}

/// Timeout applied to every event wait in the harness.
const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Test harness for running guide scenarios against a mock engine.
pub struct TestHarness {
    /// The session under test.
    pub session: GuideSession,
    log: MockSpeechLog,
}

impl TestHarness {
    /// Harness with an instant mock engine and a short paragraph gap so
    /// narration tests run in milliseconds.
    pub fn new() -> Self {
        Self::with_engine(MockSpeech::new())
    }

    pub fn with_engine(engine: MockSpeech) -> Self {
        let config = SessionConfig::new().with_paragraph_gap(Duration::from_millis(5));
        Self::with_engine_and_config(engine, config)
    }

    pub fn with_engine_and_config(engine: MockSpeech, config: SessionConfig) -> Self {
        let log = engine.log();
        let session = GuideSession::new(Box::new(engine), config);
        Self { session, log }
    }

    /// Utterances started so far.
    pub fn spoken(&self) -> Vec<String> {
        self.log.spoken()
    }

    pub fn stop_count(&self) -> usize {
        self.log.stop_count()
    }

    /// Wait for the next narration event.
    pub async fn next_event(&mut self) -> NarrationEvent {
        match tokio::time::timeout(EVENT_TIMEOUT, self.session.recv_narration()).await {
            Ok(Some(event)) => event,
            Ok(None) => panic!("narration worker shut down while waiting for an event"),
            Err(_) => panic!("timed out waiting for a narration event"),
        }
    }

    /// Collect events until one satisfies the predicate; the matching event
    /// is the last element returned.
    pub async fn events_until(
        &mut self,
        mut done: impl FnMut(&NarrationEvent) -> bool,
    ) -> Vec<NarrationEvent> {
        let mut events = Vec::new();
        loop {
            let event = self.next_event().await;
            let finished = done(&event);
            events.push(event);
            if finished {
                return events;
            }
        }
    }

    /// Collect events until narration returns to idle.
    pub async fn run_until_idle(&mut self) -> Vec<NarrationEvent> {
        self.events_until(|e| {
            matches!(
                e,
                NarrationEvent::Finished | NarrationEvent::Stopped | NarrationEvent::Failed { .. }
            )
        })
        .await
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the exact utterance order so far.
#[track_caller]
pub fn assert_spoken(harness: &TestHarness, expected: &[&str]) {
    let spoken = harness.spoken();
    assert_eq!(
        spoken, expected,
        "expected utterances {expected:?}, got {spoken:?}"
    );
}

/// Assert narration has settled back to idle.
#[track_caller]
pub fn assert_idle(harness: &TestHarness) {
    assert_eq!(
        harness.session.narration_state(),
        NarrationState::Idle,
        "expected narration to be idle"
    );
}

/// Paragraph-start indices in the order they appeared.
pub fn started_indices(events: &[NarrationEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|e| match e {
            NarrationEvent::ParagraphStarted { index, .. } => Some(*index),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_speech_records_utterances() {
        let mut engine = MockSpeech::new();
        let log = engine.log();

        engine
            .speak("halo", &SpeechParams::default())
            .await
            .expect("speak");
        engine.stop();

        assert_eq!(log.spoken(), vec!["halo"]);
        assert_eq!(log.stop_count(), 1);
    }

    #[tokio::test]
    async fn mock_speech_scripted_failure() {
        let mut engine = MockSpeech::new().failing_on_attempt(1);

        assert!(engine.speak("satu", &SpeechParams::default()).await.is_ok());
        assert!(engine.speak("dua", &SpeechParams::default()).await.is_err());
    }
}
