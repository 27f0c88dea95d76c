//! Speech-engine capability surface.
//!
//! The platform text-to-speech service lives outside this crate. Narration
//! drives it through [`SpeechEngine`]; the TUI binary wires in
//! [`SimulatedSpeech`] (no audio, paced by word count) and tests use
//! `testing::MockSpeech`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Voice identifier preferred when the engine offers it. Matches the
/// Indonesian local voice shipped on the most common handsets.
pub const PREFERRED_VOICE: &str = "id-id-x-idc-local";

/// Pitch used when no suitable voice is found and the engine default has to
/// stand in for one.
pub const ELEVATED_PITCH: f32 = 1.2;

/// Identifier fragments that mark a voice as female-sounding.
const FEMALE_HINTS: &[&str] = &["female", "wanita", "perempuan"];

/// Identifier fragments that mark a voice as male-sounding. Checked only on
/// voices that did not already match a female hint, because "female"
/// contains "male" as a substring.
const MALE_HINTS: &[&str] = &["male", "pria", "laki"];

/// Errors surfaced by a speech engine.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech engine failure: {0}")]
    Engine(String),

    #[error("speech engine is not available")]
    Unavailable,
}

/// One voice offered by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voice {
    pub identifier: String,
    pub name: String,
    /// BCP 47 tag, e.g. "id-ID".
    pub language: String,
}

impl Voice {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            language: language.into(),
        }
    }
}

/// Parameters for one utterance.
#[derive(Debug, Clone)]
pub struct SpeechParams {
    pub language: String,
    pub pitch: f32,
    pub rate: f32,
    /// Engine voice identifier; `None` lets the engine pick its default.
    pub voice: Option<String>,
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            language: "id-ID".to_string(),
            pitch: 1.0,
            rate: 1.0,
            voice: None,
        }
    }
}

/// The text-to-speech capability the narration sequencer drives.
#[async_trait]
pub trait SpeechEngine: Send {
    /// Voices currently offered by the engine.
    fn voices(&self) -> Vec<Voice>;

    /// Speak one utterance. Resolves when the utterance has finished.
    async fn speak(&mut self, text: &str, params: &SpeechParams) -> Result<(), SpeechError>;

    /// Cut off the current utterance, if any.
    fn stop(&mut self);
}

/// Outcome of voice selection.
#[derive(Debug, Clone)]
pub enum VoiceChoice {
    /// The preferred named voice was available.
    Named(Voice),
    /// A female-sounding voice in the right language.
    FemaleSounding(Voice),
    /// Nothing suitable; use the engine default with an elevated pitch.
    DefaultElevatedPitch,
}

impl VoiceChoice {
    /// Turn the choice into utterance parameters.
    pub fn params(&self, base: &SpeechParams) -> SpeechParams {
        let mut params = base.clone();
        match self {
            VoiceChoice::Named(voice) | VoiceChoice::FemaleSounding(voice) => {
                params.voice = Some(voice.identifier.clone());
            }
            VoiceChoice::DefaultElevatedPitch => {
                params.voice = None;
                params.pitch = ELEVATED_PITCH;
            }
        }
        params
    }
}

fn matches_hint(voice: &Voice, hints: &[&str]) -> bool {
    let identifier = voice.identifier.to_lowercase();
    let name = voice.name.to_lowercase();
    hints
        .iter()
        .any(|hint| identifier.contains(hint) || name.contains(hint))
}

pub fn female_sounding(voice: &Voice) -> bool {
    matches_hint(voice, FEMALE_HINTS)
}

pub fn male_sounding(voice: &Voice) -> bool {
    !female_sounding(voice) && matches_hint(voice, MALE_HINTS)
}

/// Best-effort voice selection for narration.
///
/// Order: the preferred named voice, then any voice in the requested
/// language that sounds female and does not sound male, then the engine
/// default with an elevated pitch. The host platform guarantees no gendered
/// voice, so this stays a heuristic.
pub fn select_voice(voices: &[Voice], preferred: Option<&str>, language: &str) -> VoiceChoice {
    if let Some(wanted) = preferred {
        if let Some(voice) = voices
            .iter()
            .find(|v| v.identifier.eq_ignore_ascii_case(wanted))
        {
            return VoiceChoice::Named(voice.clone());
        }
    }

    let primary = language
        .split(['-', '_'])
        .next()
        .unwrap_or(language)
        .to_lowercase();

    let candidate = voices
        .iter()
        .filter(|v| v.language.to_lowercase().starts_with(&primary))
        .find(|v| female_sounding(v) && !male_sounding(v));

    match candidate {
        Some(voice) => VoiceChoice::FemaleSounding(voice.clone()),
        None => VoiceChoice::DefaultElevatedPitch,
    }
}

/// Stand-in engine for hosts without a platform speech service. Produces no
/// audio; each utterance takes time proportional to its word count so the
/// narration screen paces like real playback.
pub struct SimulatedSpeech {
    per_word: Duration,
    voices: Vec<Voice>,
}

impl SimulatedSpeech {
    pub fn new() -> Self {
        Self {
            per_word: Duration::from_millis(330),
            voices: vec![
                Voice::new(PREFERRED_VOICE, "Bahasa Indonesia", "id-ID"),
                Voice::new("id-id-x-dfz-network", "Bahasa Indonesia 2", "id-ID"),
            ],
        }
    }

    pub fn with_per_word(mut self, per_word: Duration) -> Self {
        self.per_word = per_word;
        self
    }
}

impl Default for SimulatedSpeech {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechEngine for SimulatedSpeech {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    async fn speak(&mut self, text: &str, _params: &SpeechParams) -> Result<(), SpeechError> {
        let words = text.split_whitespace().count() as u32;
        tokio::time::sleep(self.per_word * words.max(1)).await;
        Ok(())
    }

    fn stop(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(identifier: &str, name: &str, language: &str) -> Voice {
        Voice::new(identifier, name, language)
    }

    #[test]
    fn prefers_named_voice() {
        let voices = vec![
            voice("id-id-x-female-network", "Suara Wanita", "id-ID"),
            voice(PREFERRED_VOICE, "Bahasa Indonesia", "id-ID"),
        ];

        let choice = select_voice(&voices, Some(PREFERRED_VOICE), "id-ID");
        assert!(matches!(
            choice,
            VoiceChoice::Named(v) if v.identifier == PREFERRED_VOICE
        ));
    }

    #[test]
    fn falls_back_to_female_sounding_voice() {
        let voices = vec![
            voice("id-id-x-male-network", "Suara Pria", "id-ID"),
            voice("id-id-x-female-network", "Suara Wanita", "id-ID"),
        ];

        let choice = select_voice(&voices, Some(PREFERRED_VOICE), "id-ID");
        assert!(matches!(
            choice,
            VoiceChoice::FemaleSounding(v) if v.identifier == "id-id-x-female-network"
        ));
    }

    #[test]
    fn female_identifier_is_not_treated_as_male() {
        // "female" contains "male"; hint ordering must not mis-bucket it.
        let v = voice("id-id-x-female-network", "Voice", "id-ID");
        assert!(female_sounding(&v));
        assert!(!male_sounding(&v));
    }

    #[test]
    fn male_only_voices_yield_elevated_pitch_default() {
        let voices = vec![voice("id-id-x-male-network", "Suara Pria", "id-ID")];

        let choice = select_voice(&voices, None, "id-ID");
        assert!(matches!(choice, VoiceChoice::DefaultElevatedPitch));

        let params = choice.params(&SpeechParams::default());
        assert_eq!(params.voice, None);
        assert!((params.pitch - ELEVATED_PITCH).abs() < f32::EPSILON);
    }

    #[test]
    fn language_filter_ignores_other_locales() {
        let voices = vec![voice("en-us-x-female-network", "US Female", "en-US")];
        let choice = select_voice(&voices, None, "id-ID");
        assert!(matches!(choice, VoiceChoice::DefaultElevatedPitch));
    }

    #[test]
    fn indonesian_gender_words_are_recognized() {
        assert!(female_sounding(&voice("id-id-wanita-1", "x", "id-ID")));
        assert!(male_sounding(&voice("id-id-pria-1", "x", "id-ID")));
        assert!(male_sounding(&voice("id-id-laki-1", "x", "id-ID")));
    }
}
