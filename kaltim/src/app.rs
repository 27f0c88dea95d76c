//! Main application state and logic.

use kaltim_core::catalog::{AudioCategory, AudioClip, Region, RegionId, Story, StoryId};
use kaltim_core::narration::{NarrationEvent, NarrationState};
use kaltim_core::quiz::RunState;
use kaltim_core::search::SearchHits;
use kaltim_core::session::GuideSession;

use crate::ui::theme::GuideTheme;
use crate::ui::Overlay;

/// Ticks of the 100 ms poll loop per countdown second.
const TICKS_PER_SECOND: u8 = 10;

/// Top-level screens, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Regions,
    Quiz,
    Stories,
    Audio,
}

impl Screen {
    pub fn all() -> [Screen; 4] {
        [Screen::Regions, Screen::Quiz, Screen::Stories, Screen::Audio]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Regions => "Daerah",
            Screen::Quiz => "Kuis",
            Screen::Stories => "Cerita",
            Screen::Audio => "Audio",
        }
    }

    pub fn next(self) -> Screen {
        match self {
            Screen::Regions => Screen::Quiz,
            Screen::Quiz => Screen::Stories,
            Screen::Stories => Screen::Audio,
            Screen::Audio => Screen::Regions,
        }
    }

    pub fn prev(self) -> Screen {
        match self {
            Screen::Regions => Screen::Audio,
            Screen::Quiz => Screen::Regions,
            Screen::Stories => Screen::Quiz,
            Screen::Audio => Screen::Stories,
        }
    }
}

/// Tabs inside the region detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionTab {
    #[default]
    About,
    Culture,
    Photos,
    Facts,
}

impl RegionTab {
    pub fn all() -> [RegionTab; 4] {
        [
            RegionTab::About,
            RegionTab::Culture,
            RegionTab::Photos,
            RegionTab::Facts,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            RegionTab::About => "Tentang",
            RegionTab::Culture => "Budaya",
            RegionTab::Photos => "Galeri",
            RegionTab::Facts => "Fakta",
        }
    }

    pub fn next(self) -> RegionTab {
        match self {
            RegionTab::About => RegionTab::Culture,
            RegionTab::Culture => RegionTab::Photos,
            RegionTab::Photos => RegionTab::Facts,
            RegionTab::Facts => RegionTab::About,
        }
    }

    pub fn prev(self) -> RegionTab {
        match self {
            RegionTab::About => RegionTab::Facts,
            RegionTab::Culture => RegionTab::About,
            RegionTab::Photos => RegionTab::Culture,
            RegionTab::Facts => RegionTab::Photos,
        }
    }
}

/// What the quiz screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizView {
    #[default]
    Catalog,
    CodeEntry,
    Running,
    Results,
}

/// Main application state.
pub struct App {
    pub session: GuideSession,
    pub theme: GuideTheme,
    pub screen: Screen,
    overlay: Option<Overlay>,

    // Regions screen
    pub region_cursor: usize,
    pub selected_region: Option<RegionId>,
    pub region_tab: RegionTab,
    pub search_active: bool,
    search_input: String,
    submitted_query: String,

    // Quiz screen
    pub quiz_view: QuizView,
    pub quiz_cursor: usize,
    pub option_cursor: usize,
    code_input: String,
    pub code_error: Option<String>,

    // Stories screen
    pub story_cursor: usize,
    pub reading_story: Option<StoryId>,
    pub story_scroll: usize,

    // Audio screen
    pub category_cursor: usize,
    pub clip_cursor: usize,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,
    pub animation_frame: u8,
    ticks_in_second: u8,
}

impl App {
    pub fn new(session: GuideSession) -> Self {
        Self {
            session,
            theme: GuideTheme::default(),
            screen: Screen::default(),
            overlay: None,
            region_cursor: 0,
            selected_region: None,
            region_tab: RegionTab::default(),
            search_active: false,
            search_input: String::new(),
            submitted_query: String::new(),
            quiz_view: QuizView::default(),
            quiz_cursor: 0,
            option_cursor: 0,
            code_input: String::new(),
            code_error: None,
            story_cursor: 0,
            reading_story: None,
            story_scroll: 0,
            category_cursor: 0,
            clip_cursor: 0,
            status_message: None,
            should_quit: false,
            animation_frame: 0,
            ticks_in_second: 0,
        }
    }

    // =========================================================================
    // Screens
    // =========================================================================

    pub fn next_screen(&mut self) {
        self.screen = self.screen.next();
    }

    pub fn prev_screen(&mut self) {
        self.screen = self.screen.prev();
    }

    pub fn go_to_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    // =========================================================================
    // Regions + search
    // =========================================================================

    /// The search hits for the applied query.
    pub fn search_hits(&self) -> SearchHits<'static> {
        self.session.search(&self.submitted_query)
    }

    /// Regions shown on the list, after the search filter.
    pub fn visible_regions(&self) -> Vec<&'static Region> {
        self.search_hits().visible_regions(self.session.catalog())
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn submitted_query(&self) -> &str {
        &self.submitted_query
    }

    pub fn begin_search(&mut self) {
        self.search_active = true;
        self.search_input = self.submitted_query.clone();
    }

    pub fn search_push(&mut self, c: char) {
        self.search_input.push(c);
        // Filter as the user types, like the original search field.
        self.submitted_query = self.search_input.clone();
        self.clamp_region_cursor();
    }

    pub fn search_backspace(&mut self) {
        self.search_input.pop();
        self.submitted_query = self.search_input.clone();
        self.clamp_region_cursor();
    }

    pub fn finish_search(&mut self) {
        self.search_active = false;
    }

    /// Clearing the search restores the unfiltered catalog.
    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_input.clear();
        self.submitted_query.clear();
        self.clamp_region_cursor();
    }

    fn clamp_region_cursor(&mut self) {
        let len = self.visible_regions().len();
        if len == 0 {
            self.region_cursor = 0;
        } else if self.region_cursor >= len {
            self.region_cursor = len - 1;
        }
    }

    pub fn region_cursor_up(&mut self) {
        self.region_cursor = self.region_cursor.saturating_sub(1);
    }

    pub fn region_cursor_down(&mut self) {
        let len = self.visible_regions().len();
        if len > 0 {
            self.region_cursor = (self.region_cursor + 1).min(len - 1);
        }
    }

    pub fn open_region_under_cursor(&mut self) {
        if let Some(region) = self.visible_regions().get(self.region_cursor) {
            self.selected_region = Some(region.id);
            self.region_tab = RegionTab::About;
        }
    }

    pub fn close_region(&mut self) {
        self.selected_region = None;
    }

    pub fn selected_region(&self) -> Option<&'static Region> {
        self.selected_region
            .and_then(|id| self.session.catalog().region(id))
    }

    // =========================================================================
    // Quiz
    // =========================================================================

    pub fn code_input(&self) -> &str {
        &self.code_input
    }

    pub fn quiz_cursor_up(&mut self) {
        self.quiz_cursor = self.quiz_cursor.saturating_sub(1);
    }

    pub fn quiz_cursor_down(&mut self) {
        let len = self.session.catalog().quizzes.len();
        if len > 0 {
            self.quiz_cursor = (self.quiz_cursor + 1).min(len - 1);
        }
    }

    pub fn start_quiz_under_cursor(&mut self) {
        let id = match self.session.catalog().quizzes.get(self.quiz_cursor) {
            Some(quiz) => quiz.id,
            None => return,
        };
        match self.session.start_quiz(id) {
            Ok(()) => {
                self.quiz_view = QuizView::Running;
                self.option_cursor = 0;
            }
            Err(e) => self.set_status(format!("Gagal memulai kuis: {e}")),
        }
    }

    pub fn open_code_entry(&mut self) {
        self.quiz_view = QuizView::CodeEntry;
        self.code_input.clear();
        self.code_error = None;
    }

    pub fn cancel_code_entry(&mut self) {
        self.quiz_view = QuizView::Catalog;
        self.code_input.clear();
        self.code_error = None;
    }

    pub fn code_push(&mut self, c: char) {
        self.code_input.push(c);
        self.code_error = None;
    }

    pub fn code_backspace(&mut self) {
        self.code_input.pop();
        self.code_error = None;
    }

    /// Submit the access code. Unknown codes show an inline validation
    /// message and stay on the entry view.
    pub fn submit_code(&mut self) {
        match self.session.start_coded_quiz(&self.code_input) {
            Ok(()) => {
                self.quiz_view = QuizView::Running;
                self.option_cursor = 0;
                self.code_error = None;
                self.code_input.clear();
            }
            Err(e) => {
                self.code_error = Some(e.to_string());
            }
        }
    }

    pub fn option_cursor_up(&mut self) {
        self.option_cursor = self.option_cursor.saturating_sub(1);
    }

    pub fn option_cursor_down(&mut self) {
        if let Some(run) = self.session.quiz_run() {
            let len = run.current_question().options.len();
            if len > 0 {
                self.option_cursor = (self.option_cursor + 1).min(len - 1);
            }
        }
    }

    /// Enter on a question: first press checks the highlighted option,
    /// second press moves on.
    pub fn confirm_option(&mut self) {
        let cursor = self.option_cursor;
        let Some(run) = self.session.quiz_run_mut() else {
            return;
        };

        if run.current_answer().checked {
            if run.advance() == RunState::Finished {
                self.quiz_view = QuizView::Results;
            } else {
                self.option_cursor = 0;
            }
            return;
        }

        let option_id = match run.current_question().options.get(cursor) {
            Some(option) => option.id,
            None => return,
        };

        let outcome = run.select(option_id).and_then(|_| run.check());
        match outcome {
            Ok(true) => self.set_status("Benar!"),
            Ok(false) => self.set_status("Salah."),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub fn leave_quiz(&mut self) {
        self.session.abandon_quiz();
        self.quiz_view = QuizView::Catalog;
        self.option_cursor = 0;
    }

    // =========================================================================
    // Stories + narration
    // =========================================================================

    pub fn story_cursor_up(&mut self) {
        self.story_cursor = self.story_cursor.saturating_sub(1);
    }

    pub fn story_cursor_down(&mut self) {
        let len = self.session.catalog().stories.len();
        if len > 0 {
            self.story_cursor = (self.story_cursor + 1).min(len - 1);
        }
    }

    pub fn open_story_under_cursor(&mut self) {
        if let Some(story) = self.session.catalog().stories.get(self.story_cursor) {
            self.reading_story = Some(story.id);
            self.story_scroll = 0;
        }
    }

    pub fn close_story(&mut self) {
        self.reading_story = None;
    }

    pub fn reading_story(&self) -> Option<&'static Story> {
        self.reading_story
            .and_then(|id| self.session.catalog().story(id))
    }

    pub fn story_scroll_up(&mut self, lines: usize) {
        self.story_scroll = self.story_scroll.saturating_sub(lines);
    }

    pub fn story_scroll_down(&mut self, lines: usize) {
        self.story_scroll = self.story_scroll.saturating_add(lines);
    }

    /// Space on the reader: play, pause, or resume depending on state.
    pub fn toggle_narration(&mut self) {
        let Some(story) = self.reading_story() else {
            return;
        };

        let result = match self.session.narration_state() {
            NarrationState::Idle => {
                self.set_status(format!("Membacakan '{}'", story.title));
                self.session.narrate_story(story.id)
            }
            NarrationState::Playing { .. } => self.session.pause_narration(),
            NarrationState::Paused { .. } => self.session.resume_narration(),
        };

        if let Err(e) = result {
            self.set_status(format!("Narasi gagal: {e}"));
        }
    }

    pub fn stop_narration(&mut self) {
        if let Err(e) = self.session.stop_narration() {
            self.set_status(format!("Narasi gagal: {e}"));
        }
    }

    // =========================================================================
    // Audio
    // =========================================================================

    pub fn categories(&self) -> &'static [AudioCategory] {
        &self.session.catalog().audio_categories
    }

    pub fn current_category_clips(&self) -> Vec<&'static AudioClip> {
        let catalog = self.session.catalog();
        match catalog.audio_categories.get(self.category_cursor) {
            Some(category) => catalog.clips_in_category(category.id),
            None => Vec::new(),
        }
    }

    pub fn category_prev(&mut self) {
        self.category_cursor = self.category_cursor.saturating_sub(1);
        self.clip_cursor = 0;
    }

    pub fn category_next(&mut self) {
        let len = self.categories().len();
        if len > 0 {
            self.category_cursor = (self.category_cursor + 1).min(len - 1);
        }
        self.clip_cursor = 0;
    }

    pub fn clip_cursor_up(&mut self) {
        self.clip_cursor = self.clip_cursor.saturating_sub(1);
    }

    pub fn clip_cursor_down(&mut self) {
        let len = self.current_category_clips().len();
        if len > 0 {
            self.clip_cursor = (self.clip_cursor + 1).min(len - 1);
        }
    }

    /// "Play" the highlighted clip: playback is simulated with a notice.
    pub fn play_clip_under_cursor(&mut self) {
        let id = match self.current_category_clips().get(self.clip_cursor) {
            Some(clip) => clip.id,
            None => return,
        };
        match self.session.play_clip(id) {
            Ok(notice) => self.set_status(notice),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    // =========================================================================
    // Ticking
    // =========================================================================

    /// Called on every 100 ms poll timeout.
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        self.ticks_in_second += 1;
        if self.ticks_in_second >= TICKS_PER_SECOND {
            self.ticks_in_second = 0;
            self.session.tick_second();
        }

        // The countdown can end the run between key presses.
        if self.quiz_view == QuizView::Running {
            if let Some(run) = self.session.quiz_run() {
                if run.state() == RunState::Finished {
                    self.quiz_view = QuizView::Results;
                    self.set_status("Waktu habis!");
                }
            }
        }

        for event in self.session.poll_narration() {
            if let NarrationEvent::Failed { message } = event {
                self.set_status(format!("Narasi gagal: {message}"));
            }
        }
    }

    // =========================================================================
    // Status + overlay
    // =========================================================================

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }
}
