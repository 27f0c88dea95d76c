//! Headless guide interface for programmatic use.
//!
//! A text-only view over [`GuideSession`] for automated drives and
//! scripted sessions: every operation returns a formatted string; the
//! binary's `--headless` loop only does I/O and command parsing.
//!
//! # Example
//!
//! ```ignore
//! use kaltim_core::headless::{HeadlessConfig, HeadlessGuide};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut guide = HeadlessGuide::new(HeadlessConfig::new());
//!     println!("{}", guide.regions_listing());
//!     println!("{}", guide.begin_coded_quiz("RPN1234").unwrap());
//! }
//! ```

use crate::catalog::{ClipId, OptionId, RegionId, StoryId};
use crate::narration::NarrationEvent;
use crate::quiz::{QuizError, QuizRun, RunState};
use crate::session::{GuideSession, SessionConfig, SessionError};
use crate::speech::{SimulatedSpeech, SpeechEngine};

/// Configuration for a headless guide session.
#[derive(Debug, Clone, Default)]
pub struct HeadlessConfig {
    pub session: SessionConfig,
}

impl HeadlessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(mut self, session: SessionConfig) -> Self {
        self.session = session;
        self
    }
}

/// Text-only guide driver.
pub struct HeadlessGuide {
    session: GuideSession,
}

impl HeadlessGuide {
    /// Create a headless guide with the paced stand-in speech engine.
    pub fn new(config: HeadlessConfig) -> Self {
        Self::with_engine(Box::new(SimulatedSpeech::new()), config)
    }

    /// Create a headless guide around a specific engine.
    pub fn with_engine(engine: Box<dyn SpeechEngine>, config: HeadlessConfig) -> Self {
        Self {
            session: GuideSession::new(engine, config.session),
        }
    }

    pub fn session(&self) -> &GuideSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GuideSession {
        &mut self.session
    }

    // ------------------------------------------------------------------
    // Regions and search
    // ------------------------------------------------------------------

    pub fn regions_listing(&self) -> String {
        let mut out = String::from("Daerah:\n");
        for region in &self.session.catalog().regions {
            out.push_str(&format!(
                "  {}. {} - {}\n",
                region.id, region.name, region.location
            ));
        }
        out
    }

    pub fn region_detail(&self, id: RegionId) -> Result<String, SessionError> {
        let region = self
            .session
            .catalog()
            .region(id)
            .ok_or(SessionError::UnknownRegion(id))?;

        let mut out = format!(
            "{}\n{}\nPenduduk: {} | Lokasi: {}\n",
            region.name, region.description, region.population, region.location
        );
        if !region.culture.is_empty() {
            out.push_str("Budaya:\n");
            for item in &region.culture {
                out.push_str(&format!("  - {}: {}\n", item.name, item.description));
            }
        }
        if !region.fun_facts.is_empty() {
            out.push_str("Tahukah kamu:\n");
            for fact in &region.fun_facts {
                out.push_str(&format!("  * {fact}\n"));
            }
        }
        if !region.photos.is_empty() {
            out.push_str(&format!("Galeri: {} foto\n", region.photos.len()));
        }
        Ok(out)
    }

    pub fn search_listing(&self, query: &str) -> String {
        let hits = self.session.search(query);
        if hits.is_unfiltered() {
            return self.regions_listing();
        }

        let mut out = format!("Hasil untuk '{}': {} cocok\n", hits.query(), hits.match_count());
        for region in hits.visible_regions(self.session.catalog()) {
            out.push_str(&format!("  {}. {}\n", region.id, region.name));
        }
        for hit in &hits.culture {
            out.push_str(&format!(
                "  budaya: {} ({})\n",
                hit.item.name, hit.region.name
            ));
        }
        if hits.match_count() == 0 {
            out.push_str("  (tidak ada hasil)\n");
        }
        out
    }

    // ------------------------------------------------------------------
    // Quizzes
    // ------------------------------------------------------------------

    pub fn quiz_listing(&self) -> String {
        let mut out = String::from("Kuis:\n");
        for quiz in &self.session.catalog().quizzes {
            out.push_str(&format!(
                "  {}. {} ({} pertanyaan) - {}\n",
                quiz.id,
                quiz.title,
                quiz.questions.len(),
                quiz.description
            ));
        }
        out.push_str("Masukkan kode akses dengan `#quiz <kode>` untuk kuis kelas.\n");
        out
    }

    /// Resolve an access code and start its quiz, returning the first
    /// question prompt.
    pub fn begin_coded_quiz(&mut self, code: &str) -> Result<String, SessionError> {
        self.session.start_coded_quiz(code)?;
        let run = self.session.quiz_run().ok_or(SessionError::NoActiveQuiz)?;
        Ok(format!(
            "Kuis dimulai: {}\n{}",
            run.quiz().title,
            question_prompt(run)
        ))
    }

    /// Start a public-catalog quiz by number.
    pub fn begin_quiz(&mut self, id: crate::catalog::QuizId) -> Result<String, SessionError> {
        self.session.start_quiz(id)?;
        let run = self.session.quiz_run().ok_or(SessionError::NoActiveQuiz)?;
        Ok(format!(
            "Kuis dimulai: {}\n{}",
            run.quiz().title,
            question_prompt(run)
        ))
    }

    /// Answer the current question by letter, check it, and advance.
    pub fn answer(&mut self, letter: char) -> Result<String, SessionError> {
        let run = self
            .session
            .quiz_run_mut()
            .ok_or(SessionError::NoActiveQuiz)?;

        if run.state() == RunState::Finished {
            return Ok(score_summary(run));
        }

        let lower = letter.to_ascii_lowercase();
        if !lower.is_ascii_lowercase() {
            return Err(QuizError::UnknownOption(OptionId(0)).into());
        }
        let position = (lower as u8 - b'a') as usize;
        let option_id = run
            .current_question()
            .options
            .get(position)
            .map(|o| o.id)
            .ok_or_else(|| SessionError::from(QuizError::UnknownOption(OptionId(position as u8))))?;

        run.select(option_id)?;
        let correct = run.check()?;

        let question = run.current_question();
        let mut out = if correct {
            "Benar!\n".to_string()
        } else {
            let right = question
                .correct_option()
                .map(|o| o.text.as_str())
                .unwrap_or("-");
            format!("Salah. Jawaban yang benar: {right}\n")
        };
        out.push_str(&format!("Penjelasan: {}\n", question.explanation));

        match run.advance() {
            RunState::Finished => out.push_str(&score_summary(run)),
            RunState::InProgress => out.push_str(&question_prompt(run)),
        }
        Ok(out)
    }

    pub fn quiz_status(&self) -> String {
        match self.session.quiz_run() {
            Some(run) => {
                let (answered, total) = run.progress();
                format!(
                    "Kuis '{}': {}/{} dijawab, sisa waktu {} detik\n",
                    run.quiz().title,
                    answered,
                    total,
                    run.remaining_seconds()
                )
            }
            None => "Tidak ada kuis yang berjalan.\n".to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Stories and narration
    // ------------------------------------------------------------------

    pub fn stories_listing(&self) -> String {
        let mut out = String::from("Cerita rakyat:\n");
        for story in &self.session.catalog().stories {
            out.push_str(&format!(
                "  {}. {} ({}) - {}\n",
                story.id, story.title, story.region, story.summary
            ));
        }
        out
    }

    pub fn narrate(&mut self, id: StoryId) -> Result<String, SessionError> {
        self.session.narrate_story(id)?;
        let title = self
            .session
            .catalog()
            .story(id)
            .map(|s| s.title.clone())
            .unwrap_or_default();
        Ok(format!("Narasi dimulai: {title}\n"))
    }

    pub fn pause_narration(&mut self) -> Result<(), SessionError> {
        self.session.pause_narration()
    }

    pub fn resume_narration(&mut self) -> Result<(), SessionError> {
        self.session.resume_narration()
    }

    pub fn stop_narration(&mut self) -> Result<(), SessionError> {
        self.session.stop_narration()
    }

    /// Drain pending narration events as printable lines.
    pub fn narration_lines(&mut self) -> Vec<String> {
        self.session
            .poll_narration()
            .iter()
            .map(narration_event_line)
            .collect()
    }

    /// Wait for the next narration event as a printable line.
    pub async fn next_narration_line(&mut self) -> Option<String> {
        self.session
            .recv_narration()
            .await
            .map(|e| narration_event_line(&e))
    }

    // ------------------------------------------------------------------
    // Audio library
    // ------------------------------------------------------------------

    /// Audio library listing, optionally narrowed by a free-text filter
    /// over clip titles and languages.
    pub fn audio_listing(&self, filter: &str) -> String {
        let catalog = self.session.catalog();

        if !filter.trim().is_empty() {
            let clips = catalog.filter_clips(filter);
            let mut out = format!("Klip untuk '{}': {}\n", filter.trim(), clips.len());
            for clip in clips {
                out.push_str(&format!(
                    "  {}. {} [{}] ({})\n",
                    clip.id, clip.title, clip.language, clip.duration
                ));
            }
            return out;
        }

        let mut out = String::from("Pustaka audio:\n");
        for category in &catalog.audio_categories {
            out.push_str(&format!("{} {}\n", category.icon, category.name));
            for clip in catalog.clips_in_category(category.id) {
                out.push_str(&format!(
                    "  {}. {} [{}] ({})\n",
                    clip.id, clip.title, clip.language, clip.duration
                ));
            }
        }
        out
    }

    pub fn play_clip(&mut self, id: ClipId) -> Result<String, SessionError> {
        self.session.play_clip(id)
    }

    // ------------------------------------------------------------------
    // Status and export
    // ------------------------------------------------------------------

    pub fn status(&self) -> String {
        let catalog = self.session.catalog();
        let mut out = format!(
            "Katalog: {} daerah, {} kuis, {} cerita, {} klip audio\n",
            catalog.regions.len(),
            catalog.quizzes.len() + catalog.coded_quizzes.len(),
            catalog.stories.len(),
            catalog.audio_clips.len()
        );
        out.push_str(&format!("Narasi: {:?}\n", self.session.narration_state()));
        out.push_str(&self.quiz_status());
        if let Some(clip) = self.session.now_playing() {
            out.push_str(&format!("Sedang diputar: {}\n", clip.title));
        }
        out
    }

    /// The whole catalog as a JSON payload.
    pub fn catalog_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.session.catalog())
    }
}

fn question_prompt(run: &QuizRun) -> String {
    let question = run.current_question();
    let mut out = format!(
        "Pertanyaan {}/{}: {}\n",
        run.current_index() + 1,
        run.quiz().questions.len(),
        question.question
    );
    for (i, option) in question.options.iter().enumerate() {
        let letter = (b'a' + i as u8) as char;
        out.push_str(&format!("  {letter}) {}\n", option.text));
    }
    out.push_str(&format!("Sisa waktu: {} detik\n", run.remaining_seconds()));
    out
}

fn score_summary(run: &QuizRun) -> String {
    let score = run.score();
    format!(
        "Kuis selesai. Skor: {}/{} ({}%) - {}\n",
        score.correct,
        score.total,
        score.percent,
        score.grade()
    )
}

/// One printable line per narration event.
pub fn narration_event_line(event: &NarrationEvent) -> String {
    match event {
        NarrationEvent::ParagraphStarted { index, total } => {
            format!("[NARASI] paragraf {}/{}", index + 1, total)
        }
        NarrationEvent::ParagraphFinished { index } => {
            format!("[NARASI] paragraf {} selesai", index + 1)
        }
        NarrationEvent::Paused { resume_from } => {
            format!("[NARASI] jeda di paragraf {}", resume_from + 1)
        }
        NarrationEvent::Resumed { from } => {
            format!("[NARASI] lanjut dari paragraf {}", from + 1)
        }
        NarrationEvent::Finished => "[NARASI] selesai".to_string(),
        NarrationEvent::Stopped => "[NARASI] dihentikan".to_string(),
        NarrationEvent::Failed { message } => format!("[NARASI] gagal: {message}"),
    }
}
