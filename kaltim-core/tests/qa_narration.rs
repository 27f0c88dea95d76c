//! QA tests for the narration sequencer against a mock speech engine.

use kaltim_core::catalog::{Catalog, Story};
use kaltim_core::narration::NarrationEvent;
use kaltim_core::session::SessionConfig;
use kaltim_core::testing::{
    assert_idle, assert_spoken, started_indices, MockSpeech, TestHarness,
};
use std::time::{Duration, Instant};

/// The built-in four-paragraph story the spec's ordering property targets.
fn four_paragraph_story() -> &'static Story {
    Catalog::builtin()
        .stories
        .iter()
        .find(|s| s.paragraphs().len() == 4)
        .expect("a four-paragraph story in the fixtures")
}

#[tokio::test]
async fn narration_speaks_paragraphs_in_order() {
    let mut harness = TestHarness::new();
    let story = four_paragraph_story();

    harness
        .session
        .narrate_story(story.id)
        .expect("start narration");

    let events = harness.run_until_idle().await;
    assert_eq!(started_indices(&events), vec![0, 1, 2, 3]);
    assert!(matches!(events.last(), Some(NarrationEvent::Finished)));
    assert_idle(&harness);

    let paragraphs = story.paragraphs();
    let expected: Vec<&str> = paragraphs.iter().map(String::as_str).collect();
    assert_spoken(&harness, &expected);
}

#[tokio::test]
async fn paragraph_gap_paces_playback() {
    let gap = Duration::from_millis(100);
    let config = SessionConfig::new().with_paragraph_gap(gap);
    let mut harness = TestHarness::with_engine_and_config(MockSpeech::new(), config);
    let story = four_paragraph_story();

    let begun = Instant::now();
    harness
        .session
        .narrate_story(story.id)
        .expect("start narration");
    harness.run_until_idle().await;

    // Three gaps between four paragraphs; utterances are instant.
    assert!(
        begun.elapsed() >= gap * 3,
        "playback finished faster than the pacing gaps allow"
    );
}

#[tokio::test]
async fn pause_resumes_at_the_same_paragraph() {
    let engine = MockSpeech::new().with_utterance_delay(Duration::from_millis(200));
    let mut harness = TestHarness::with_engine(engine);
    let story = four_paragraph_story();

    harness
        .session
        .narrate_story(story.id)
        .expect("start narration");

    harness
        .events_until(|e| matches!(e, NarrationEvent::ParagraphStarted { index: 2, .. }))
        .await;

    harness.session.pause_narration().expect("pause");
    let events = harness
        .events_until(|e| matches!(e, NarrationEvent::Paused { .. }))
        .await;
    assert!(
        matches!(events.last(), Some(NarrationEvent::Paused { resume_from: 2 })),
        "pause at paragraph 2 must record paragraph 2, got {events:?}"
    );
    assert!(harness.stop_count() >= 1, "pause must cut off the engine");

    harness.session.resume_narration().expect("resume");
    let events = harness
        .events_until(|e| matches!(e, NarrationEvent::ParagraphStarted { .. }))
        .await;
    let first_started = started_indices(&events);
    assert_eq!(
        first_started,
        vec![2],
        "resume must restart at paragraph 2, not paragraph 0"
    );

    let events = harness.run_until_idle().await;
    assert!(matches!(events.last(), Some(NarrationEvent::Finished)));

    // The interrupted paragraph was replayed from its beginning.
    let spoken = harness.spoken();
    let paragraphs = story.paragraphs();
    assert_eq!(spoken.len(), 5);
    assert_eq!(spoken[2], paragraphs[2]);
    assert_eq!(spoken[3], paragraphs[2]);
    assert_eq!(spoken[4], paragraphs[3]);
}

#[tokio::test]
async fn stop_returns_to_idle() {
    let engine = MockSpeech::new().with_utterance_delay(Duration::from_millis(200));
    let mut harness = TestHarness::with_engine(engine);
    let story = four_paragraph_story();

    harness
        .session
        .narrate_story(story.id)
        .expect("start narration");
    harness
        .events_until(|e| matches!(e, NarrationEvent::ParagraphStarted { index: 0, .. }))
        .await;

    harness.session.stop_narration().expect("stop");
    let events = harness
        .events_until(|e| matches!(e, NarrationEvent::Stopped))
        .await;
    assert!(matches!(events.last(), Some(NarrationEvent::Stopped)));
    assert_idle(&harness);
    assert_eq!(harness.spoken().len(), 1);
}

#[tokio::test]
async fn engine_failure_resets_to_idle() {
    // First paragraph speaks, the second attempt fails.
    let engine = MockSpeech::new().failing_on_attempt(1);
    let mut harness = TestHarness::with_engine(engine);
    let story = four_paragraph_story();

    harness
        .session
        .narrate_story(story.id)
        .expect("start narration");

    let events = harness.run_until_idle().await;
    assert!(
        matches!(events.last(), Some(NarrationEvent::Failed { .. })),
        "engine error must surface as a Failed event"
    );
    assert_eq!(started_indices(&events), vec![0, 1]);
    assert_idle(&harness);
    assert_eq!(harness.spoken().len(), 1);
}

#[tokio::test]
async fn new_story_replaces_a_running_one() {
    let engine = MockSpeech::new().with_utterance_delay(Duration::from_millis(200));
    let mut harness = TestHarness::with_engine(engine);
    let catalog = Catalog::builtin();
    let first = &catalog.stories[0];
    let second = &catalog.stories[1];

    harness
        .session
        .narrate_story(first.id)
        .expect("start narration");
    harness
        .events_until(|e| matches!(e, NarrationEvent::ParagraphStarted { index: 0, .. }))
        .await;

    harness
        .session
        .narrate_story(second.id)
        .expect("replace narration");
    let events = harness.run_until_idle().await;
    assert!(matches!(events.last(), Some(NarrationEvent::Finished)));

    let spoken = harness.spoken();
    let replacement = second.paragraphs();
    assert!(
        spoken.ends_with(&replacement),
        "replacement story must play to completion"
    );
}
