//! East Kalimantan cultural guide engine.
//!
//! This crate provides:
//! - The content catalog: regions, culture, quizzes, folk stories, audio clips
//! - Free-text content search with the original screen's semantics
//! - A quiz engine with access-code unlock and a countdown
//! - A narration sequencer driving a pluggable speech engine
//!
//! # Quick Start
//!
//! ```ignore
//! use kaltim_core::{GuideSession, SessionConfig};
//! use kaltim_core::speech::SimulatedSpeech;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut session = GuideSession::new(
//!         Box::new(SimulatedSpeech::new()),
//!         SessionConfig::from_env(),
//!     );
//!
//!     let hits = session.search("Mahakam");
//!     println!("{} hasil", hits.match_count());
//!
//!     session.start_coded_quiz("RPN1234").unwrap();
//! }
//! ```

pub mod catalog;
pub mod data;
pub mod headless;
pub mod narration;
pub mod quiz;
pub mod search;
pub mod session;
pub mod speech;
pub mod testing;

// Primary public API
pub use catalog::{Catalog, CatalogError, Region, RegionId, Story, StoryId};
pub use headless::{HeadlessConfig, HeadlessGuide};
pub use narration::{NarrationEvent, NarrationState};
pub use quiz::{QuizError, QuizRun, QuizScore, RunState};
pub use search::SearchHits;
pub use session::{GuideSession, SessionConfig, SessionError};
pub use speech::{SpeechEngine, SpeechError};
pub use testing::{MockSpeech, TestHarness};
