//! TUI widgets for the guide screens.

pub mod audio_browser;
pub mod quiz_panel;
pub mod region_panel;
pub mod story_reader;

pub use audio_browser::AudioBrowserWidget;
pub use quiz_panel::{CodeEntryWidget, QuestionWidget, QuizCatalogWidget, ResultsWidget};
pub use region_panel::{RegionDetailWidget, RegionListWidget};
pub use story_reader::{StoryListWidget, StoryReaderWidget};
