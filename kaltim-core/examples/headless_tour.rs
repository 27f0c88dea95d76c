//! Quick tour of the headless guide API.
//!
//! Run with: `cargo run -p kaltim-core --example headless_tour`

use kaltim_core::headless::{HeadlessConfig, HeadlessGuide};
use kaltim_core::session::SessionConfig;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let config = HeadlessConfig::new()
        .with_session(SessionConfig::from_env().with_paragraph_gap(Duration::from_millis(250)));
    let mut guide = HeadlessGuide::new(config);

    println!("{}", guide.regions_listing());
    println!("{}", guide.search_listing("Mahakam"));
    println!("{}", guide.quiz_listing());

    match guide.begin_coded_quiz("RPN1234") {
        Ok(prompt) => println!("{prompt}"),
        Err(e) => println!("[ERROR] {e}"),
    }
    match guide.answer('b') {
        Ok(feedback) => println!("{feedback}"),
        Err(e) => println!("[ERROR] {e}"),
    }

    println!("{}", guide.stories_listing());
    if let Some(story) = guide.session().catalog().stories.first() {
        let id = story.id;
        match guide.narrate(id) {
            Ok(line) => print!("{line}"),
            Err(e) => println!("[ERROR] {e}"),
        }
        while let Some(line) = guide.next_narration_line().await {
            println!("{line}");
            if line == "[NARASI] selesai" || line.starts_with("[NARASI] gagal") {
                break;
            }
        }
    }

    println!("{}", guide.status());
}
