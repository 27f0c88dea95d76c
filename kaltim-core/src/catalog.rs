//! Content catalog types for the East Kalimantan guide.
//!
//! Contains all types for the guide's content: regions with their culture
//! and photo galleries, quizzes from both the public catalog and the
//! code-unlocked table, narrated folk stories, and the audio-clip library.
//!
//! Every entity is an immutable fixture held in memory for the process
//! lifetime. Application logic never creates or mutates records; screens
//! only track which record is currently viewed.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for quizzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizId(pub u32);

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for quiz questions, scoped to the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for an option within a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(pub u8);

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(pub u32);

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for audio categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for audio clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipId(pub u32);

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors found while validating catalog content.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("question {question} in quiz '{quiz}' has {count} correct options, expected exactly 1")]
    CorrectOptionCount {
        quiz: String,
        question: QuestionId,
        count: usize,
    },

    #[error("audio clip '{clip}' references unknown category {category}")]
    DanglingCategory { clip: String, category: CategoryId },
}

// ============================================================================
// Regions
// ============================================================================

/// A geographic/administrative area with associated cultural and
/// photographic content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    /// Asset path for the list thumbnail. Assets ship with the UI layer;
    /// the engine only carries the reference.
    pub thumbnail: String,
    pub description: String,
    /// Display label, e.g. "± 860.000 jiwa".
    pub population: String,
    pub location: String,
    pub culture: Vec<CultureItem>,
    pub photos: Vec<PhotoItem>,
    pub fun_facts: Vec<String>,
}

impl Region {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        thumbnail: impl Into<String>,
        description: impl Into<String>,
        population: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: RegionId(id),
            name: name.into(),
            thumbnail: thumbnail.into(),
            description: description.into(),
            population: population.into(),
            location: location.into(),
            culture: Vec::new(),
            photos: Vec::new(),
            fun_facts: Vec::new(),
        }
    }

    pub fn with_culture(mut self, culture: Vec<CultureItem>) -> Self {
        self.culture = culture;
        self
    }

    pub fn with_photos(mut self, photos: Vec<PhotoItem>) -> Self {
        self.photos = photos;
        self
    }

    pub fn with_facts(mut self, facts: &[&str]) -> Self {
        self.fun_facts = facts.iter().map(|f| f.to_string()).collect();
        self
    }
}

/// A named cultural practice or artifact tied to a region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CultureItem {
    pub name: String,
    pub image: String,
    pub description: String,
}

impl CultureItem {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            description: description.into(),
        }
    }
}

/// Aspect-ratio tag for gallery layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectTag {
    Landscape,
    Square,
    Portrait,
}

impl fmt::Display for AspectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AspectTag::Landscape => "landscape",
            AspectTag::Square => "square",
            AspectTag::Portrait => "portrait",
        };
        write!(f, "{label}")
    }
}

/// A gallery photo belonging to one region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoItem {
    pub image: String,
    pub aspect: AspectTag,
    pub caption: Option<String>,
}

impl PhotoItem {
    pub fn new(image: impl Into<String>, aspect: AspectTag) -> Self {
        Self {
            image: image.into(),
            aspect,
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

// ============================================================================
// Quizzes
// ============================================================================

/// A set of multiple-choice questions, either from the public catalog or
/// unlocked via an access code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: QuizId(id),
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            questions: Vec::new(),
        }
    }

    pub fn with_questions(mut self, questions: Vec<QuizQuestion>) -> Self {
        self.questions = questions;
        self
    }

    /// Check that every question has exactly one correct option.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for question in &self.questions {
            let count = question.options.iter().filter(|o| o.is_correct).count();
            if count != 1 {
                return Err(CatalogError::CorrectOptionCount {
                    quiz: self.title.clone(),
                    question: question.id,
                    count,
                });
            }
        }
        Ok(())
    }
}

/// One multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub question: String,
    pub options: Vec<QuizOption>,
    pub explanation: String,
    pub image: Option<String>,
}

impl QuizQuestion {
    pub fn new(id: u32, question: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            id: QuestionId(id),
            question: question.into(),
            options: Vec::new(),
            explanation: explanation.into(),
            image: None,
        }
    }

    pub fn with_options(mut self, options: Vec<QuizOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The single correct option of this question.
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.is_correct)
    }

    pub fn option(&self, id: OptionId) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

/// One answer option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: OptionId,
    pub text: String,
    pub is_correct: bool,
}

impl QuizOption {
    pub fn correct(id: u8, text: impl Into<String>) -> Self {
        Self {
            id: OptionId(id),
            text: text.into(),
            is_correct: true,
        }
    }

    pub fn incorrect(id: u8, text: impl Into<String>) -> Self {
        Self {
            id: OptionId(id),
            text: text.into(),
            is_correct: false,
        }
    }
}

// ============================================================================
// Stories
// ============================================================================

/// A narrated folk story. The full text carries paragraphs joined by blank
/// lines; narration re-derives them at play time via [`Story::paragraphs`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    /// Region label as displayed, not a foreign key.
    pub region: String,
    pub thumbnail: String,
    pub summary: String,
    pub full_text: String,
    /// Bundled recording reference. Present in the fixtures but unused;
    /// playback goes through the speech engine instead.
    pub audio_file: Option<String>,
}

impl Story {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        region: impl Into<String>,
        thumbnail: impl Into<String>,
        summary: impl Into<String>,
        full_text: impl Into<String>,
    ) -> Self {
        Self {
            id: StoryId(id),
            title: title.into(),
            region: region.into(),
            thumbnail: thumbnail.into(),
            summary: summary.into(),
            full_text: full_text.into(),
            audio_file: None,
        }
    }

    pub fn with_audio_file(mut self, file: impl Into<String>) -> Self {
        self.audio_file = Some(file.into());
        self
    }

    /// Split the full text into paragraphs on blank-line boundaries.
    pub fn paragraphs(&self) -> Vec<String> {
        self.full_text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }
}

// ============================================================================
// Audio library
// ============================================================================

/// A grouping of audio clips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioCategory {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
}

impl AudioCategory {
    pub fn new(id: u32, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// A catalogued recording of spoken-language content. The referenced file is
/// never decoded; playback is simulated with a now-playing notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioClip {
    pub id: ClipId,
    pub title: String,
    pub language: String,
    /// Display label, e.g. "0:42".
    pub duration: String,
    pub category: CategoryId,
    pub description: Option<String>,
    pub audio_file: String,
    pub speaker: Option<String>,
}

impl AudioClip {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        language: impl Into<String>,
        duration: impl Into<String>,
        category: CategoryId,
        audio_file: impl Into<String>,
    ) -> Self {
        Self {
            id: ClipId(id),
            title: title.into(),
            language: language.into(),
            duration: duration.into(),
            category,
            description: None,
            audio_file: audio_file.into(),
            speaker: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// The complete content catalog: regions, quizzes (public and code-keyed),
/// stories, and the audio library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub regions: Vec<Region>,
    /// Public quiz catalog.
    pub quizzes: Vec<Quiz>,
    /// Code-keyed quizzes distributed by teachers. Keys are stored
    /// uppercase; lookups normalize before matching.
    pub coded_quizzes: Vec<(String, Quiz)>,
    pub stories: Vec<Story>,
    pub audio_categories: Vec<AudioCategory>,
    pub audio_clips: Vec<AudioClip>,
}

impl Catalog {
    /// The built-in fixture catalog. Constructed once, lives for the
    /// process lifetime.
    pub fn builtin() -> &'static Catalog {
        &crate::data::BUILTIN
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn quiz(&self, id: QuizId) -> Option<&Quiz> {
        self.quizzes
            .iter()
            .chain(self.coded_quizzes.iter().map(|(_, q)| q))
            .find(|q| q.id == id)
    }

    /// Look up a code-keyed quiz. Codes are matched case-insensitively
    /// after trimming, the way the access-code entry field treats input.
    pub fn coded_quiz(&self, code: &str) -> Option<&Quiz> {
        let normalized = code.trim().to_uppercase();
        self.coded_quizzes
            .iter()
            .find(|(key, _)| *key == normalized)
            .map(|(_, quiz)| quiz)
    }

    pub fn story(&self, id: StoryId) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&AudioCategory> {
        self.audio_categories.iter().find(|c| c.id == id)
    }

    pub fn clip(&self, id: ClipId) -> Option<&AudioClip> {
        self.audio_clips.iter().find(|c| c.id == id)
    }

    pub fn clips_in_category(&self, id: CategoryId) -> Vec<&AudioClip> {
        self.audio_clips.iter().filter(|c| c.category == id).collect()
    }

    /// Validate catalog invariants: one correct option per question and no
    /// clip pointing at a missing category.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for quiz in self
            .quizzes
            .iter()
            .chain(self.coded_quizzes.iter().map(|(_, q)| q))
        {
            quiz.validate()?;
        }

        for clip in &self.audio_clips {
            if self.category(clip.category).is_none() {
                return Err(CatalogError::DanglingCategory {
                    clip: clip.title.clone(),
                    category: clip.category,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let story = Story::new(
            99,
            "Uji",
            "Uji",
            "uji.jpg",
            "ringkasan",
            "Paragraf satu.\n\nParagraf dua.\n\n\nParagraf tiga.",
        );

        let paragraphs = story.paragraphs();
        assert_eq!(
            paragraphs,
            vec!["Paragraf satu.", "Paragraf dua.", "Paragraf tiga."]
        );
    }

    #[test]
    fn paragraphs_of_single_block_text() {
        let story = Story::new(99, "Uji", "Uji", "uji.jpg", "ringkasan", "Hanya satu paragraf.");
        assert_eq!(story.paragraphs(), vec!["Hanya satu paragraf."]);
    }

    #[test]
    fn quiz_validation_rejects_double_correct() {
        let quiz = Quiz::new(99, "Rusak", "dua jawaban benar", "❓").with_questions(vec![
            QuizQuestion::new(1, "Pertanyaan?", "penjelasan").with_options(vec![
                QuizOption::correct(1, "A"),
                QuizOption::correct(2, "B"),
            ]),
        ]);

        assert!(matches!(
            quiz.validate(),
            Err(CatalogError::CorrectOptionCount { count: 2, .. })
        ));
    }

    #[test]
    fn quiz_validation_rejects_no_correct() {
        let quiz = Quiz::new(99, "Rusak", "tanpa jawaban benar", "❓").with_questions(vec![
            QuizQuestion::new(1, "Pertanyaan?", "penjelasan").with_options(vec![
                QuizOption::incorrect(1, "A"),
                QuizOption::incorrect(2, "B"),
            ]),
        ]);

        assert!(matches!(
            quiz.validate(),
            Err(CatalogError::CorrectOptionCount { count: 0, .. })
        ));
    }

    #[test]
    fn coded_quiz_lookup_normalizes_input() {
        let catalog = Catalog {
            regions: Vec::new(),
            quizzes: Vec::new(),
            coded_quizzes: vec![("ABC999".to_string(), Quiz::new(1, "Uji", "uji", "❓"))],
            stories: Vec::new(),
            audio_categories: Vec::new(),
            audio_clips: Vec::new(),
        };

        assert!(catalog.coded_quiz("abc999").is_some());
        assert!(catalog.coded_quiz("  ABC999  ").is_some());
        assert!(catalog.coded_quiz("ABC000").is_none());
    }

}
