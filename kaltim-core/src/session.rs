//! GuideSession - the primary public API for the cultural guide.
//!
//! Wraps the content catalog, the search filter, the quiz engine, and the
//! narration worker into a single interface driven by both the TUI and the
//! headless front end.

use crate::catalog::{AudioClip, Catalog, ClipId, Quiz, QuizId, RegionId, StoryId};
use crate::narration::{
    spawn_narrator, NarrationError, NarrationEvent, NarrationState, NarratorConfig, NarratorHandle,
};
use crate::quiz::{unlock_quiz, QuizError, QuizRun, DEFAULT_SECONDS_PER_QUESTION};
use crate::search::SearchHits;
use crate::speech::{SpeechEngine, SpeechParams};
use std::time::Duration;
use thiserror::Error;

/// Errors from GuideSession operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Quiz(#[from] QuizError),

    #[error("narration error: {0}")]
    Narration(#[from] NarrationError),

    #[error("unknown region: {0}")]
    UnknownRegion(RegionId),

    #[error("unknown quiz: {0}")]
    UnknownQuiz(QuizId),

    #[error("unknown story: {0}")]
    UnknownStory(StoryId),

    #[error("unknown audio clip: {0}")]
    UnknownClip(ClipId),

    #[error("no quiz is running")]
    NoActiveQuiz,
}

/// Configuration for a guide session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Engine voice to prefer for narration.
    pub preferred_voice: Option<String>,

    /// Narration language tag.
    pub language: String,

    /// Speech rate multiplier.
    pub speech_rate: f32,

    /// Pacing delay between narrated paragraphs.
    pub paragraph_gap: Duration,

    /// Countdown budget per quiz question.
    pub seconds_per_question: u32,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self {
            preferred_voice: Some(crate::speech::PREFERRED_VOICE.to_string()),
            language: "id-ID".to_string(),
            speech_rate: 1.0,
            paragraph_gap: crate::narration::DEFAULT_PARAGRAPH_GAP,
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
        }
    }

    /// Apply `KALTIM_VOICE` and `KALTIM_SPEECH_RATE` overrides from the
    /// environment.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(voice) = std::env::var("KALTIM_VOICE") {
            if !voice.trim().is_empty() {
                config.preferred_voice = Some(voice);
            }
        }
        if let Ok(rate) = std::env::var("KALTIM_SPEECH_RATE") {
            if let Ok(rate) = rate.trim().parse::<f32>() {
                config.speech_rate = rate;
            }
        }
        config
    }

    pub fn with_preferred_voice(mut self, voice: impl Into<String>) -> Self {
        self.preferred_voice = Some(voice.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_speech_rate(mut self, rate: f32) -> Self {
        self.speech_rate = rate;
        self
    }

    pub fn with_paragraph_gap(mut self, gap: Duration) -> Self {
        self.paragraph_gap = gap;
        self
    }

    pub fn with_seconds_per_question(mut self, seconds: u32) -> Self {
        self.seconds_per_question = seconds;
        self
    }

    fn narrator_config(&self) -> NarratorConfig {
        NarratorConfig {
            params: SpeechParams {
                language: self.language.clone(),
                rate: self.speech_rate,
                ..SpeechParams::default()
            },
            preferred_voice: self.preferred_voice.clone(),
            paragraph_gap: self.paragraph_gap,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A guide session over the built-in catalog.
///
/// Must be created inside a tokio runtime; the narration worker is spawned
/// on construction.
pub struct GuideSession {
    catalog: &'static Catalog,
    config: SessionConfig,
    narrator: NarratorHandle,
    narration: NarrationState,
    quiz_run: Option<QuizRun>,
    narrating_story: Option<StoryId>,
    now_playing: Option<ClipId>,
}

impl GuideSession {
    /// Create a session around the given speech engine.
    pub fn new(engine: Box<dyn SpeechEngine>, config: SessionConfig) -> Self {
        let narrator = spawn_narrator(engine, config.narrator_config());
        Self {
            catalog: Catalog::builtin(),
            config,
            narrator,
            narration: NarrationState::Idle,
            quiz_run: None,
            narrating_story: None,
            now_playing: None,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Run the content search filter over the catalog.
    pub fn search(&self, query: &str) -> SearchHits<'static> {
        self.catalog.search(query)
    }

    // ------------------------------------------------------------------
    // Quizzes
    // ------------------------------------------------------------------

    /// Resolve an access code without starting anything.
    pub fn unlock_quiz(&self, code: &str) -> Result<&'static Quiz, QuizError> {
        unlock_quiz(self.catalog, code)
    }

    /// Start a run of a public-catalog quiz.
    pub fn start_quiz(&mut self, id: QuizId) -> Result<(), SessionError> {
        let quiz = self
            .catalog
            .quiz(id)
            .ok_or(SessionError::UnknownQuiz(id))?
            .clone();
        self.quiz_run = Some(QuizRun::with_seconds_per_question(
            quiz,
            self.config.seconds_per_question,
        ));
        Ok(())
    }

    /// Resolve an access code and start the unlocked quiz.
    pub fn start_coded_quiz(&mut self, code: &str) -> Result<(), SessionError> {
        let quiz = unlock_quiz(self.catalog, code)?.clone();
        self.quiz_run = Some(QuizRun::with_seconds_per_question(
            quiz,
            self.config.seconds_per_question,
        ));
        Ok(())
    }

    pub fn quiz_run(&self) -> Option<&QuizRun> {
        self.quiz_run.as_ref()
    }

    pub fn quiz_run_mut(&mut self) -> Option<&mut QuizRun> {
        self.quiz_run.as_mut()
    }

    /// Drop the current quiz run, if any.
    pub fn abandon_quiz(&mut self) {
        self.quiz_run = None;
    }

    // ------------------------------------------------------------------
    // Narration
    // ------------------------------------------------------------------

    /// Begin narrating a story from its first paragraph.
    pub fn narrate_story(&mut self, id: StoryId) -> Result<(), SessionError> {
        let story = self
            .catalog
            .story(id)
            .ok_or(SessionError::UnknownStory(id))?;
        self.narrator.play(story.paragraphs())?;
        self.narrating_story = Some(id);
        Ok(())
    }

    pub fn pause_narration(&mut self) -> Result<(), SessionError> {
        self.narrator.pause().map_err(SessionError::from)
    }

    pub fn resume_narration(&mut self) -> Result<(), SessionError> {
        self.narrator.resume().map_err(SessionError::from)
    }

    pub fn stop_narration(&mut self) -> Result<(), SessionError> {
        self.narrator.stop().map_err(SessionError::from)
    }

    /// The story currently loaded into the narrator, if any.
    pub fn narrating_story(&self) -> Option<StoryId> {
        self.narrating_story
    }

    /// Narration state as of the last drained event.
    pub fn narration_state(&self) -> NarrationState {
        self.narration
    }

    /// Drain pending narration events, updating the mirrored state.
    pub fn poll_narration(&mut self) -> Vec<NarrationEvent> {
        let mut drained = Vec::new();
        while let Some(event) = self.narrator.try_event() {
            self.apply_narration_event(&event);
            drained.push(event);
        }
        drained
    }

    /// Wait for the next narration event. Used by the headless front end
    /// and tests; the TUI polls instead.
    pub async fn recv_narration(&mut self) -> Option<NarrationEvent> {
        let event = self.narrator.recv_event().await?;
        self.apply_narration_event(&event);
        Some(event)
    }

    fn apply_narration_event(&mut self, event: &NarrationEvent) {
        match event {
            NarrationEvent::ParagraphStarted { index, .. } => {
                self.narration = NarrationState::Playing { paragraph: *index };
            }
            NarrationEvent::ParagraphFinished { .. } => {}
            NarrationEvent::Paused { resume_from } => {
                self.narration = NarrationState::Paused {
                    resume_from: *resume_from,
                };
            }
            NarrationEvent::Resumed { from } => {
                self.narration = NarrationState::Playing { paragraph: *from };
            }
            NarrationEvent::Finished | NarrationEvent::Stopped | NarrationEvent::Failed { .. } => {
                self.narration = NarrationState::Idle;
                self.narrating_story = None;
            }
        }
    }

    // ------------------------------------------------------------------
    // Audio clips
    // ------------------------------------------------------------------

    /// "Play" a clip. No audio is decoded; the returned notice is shown to
    /// the user instead.
    pub fn play_clip(&mut self, id: ClipId) -> Result<String, SessionError> {
        let clip = self.catalog.clip(id).ok_or(SessionError::UnknownClip(id))?;
        self.now_playing = Some(id);
        Ok(now_playing_notice(clip))
    }

    pub fn now_playing(&self) -> Option<&AudioClip> {
        self.now_playing.and_then(|id| self.catalog.clip(id))
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// One-second tick for the quiz countdown.
    pub fn tick_second(&mut self) {
        if let Some(run) = self.quiz_run.as_mut() {
            run.tick_second();
        }
    }
}

fn now_playing_notice(clip: &AudioClip) -> String {
    match &clip.speaker {
        Some(speaker) => format!(
            "Memutar '{}' ({}, {}) - {}",
            clip.title, clip.language, clip.duration, speaker
        ),
        None => format!(
            "Memutar '{}' ({}, {})",
            clip.title, clip.language, clip.duration
        ),
    }
}
