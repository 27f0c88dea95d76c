//! Headless mode for the guide.
//!
//! A simple line-oriented interface for running the guide without a TUI,
//! designed for automated drives and scripted sessions.

use kaltim_core::catalog::{ClipId, QuizId, RegionId, StoryId};
use kaltim_core::headless::{HeadlessConfig, HeadlessGuide};
use kaltim_core::session::SessionError;
use std::io::{self, BufRead};

/// Run the guide in headless mode.
///
/// Protocol: lines starting with `#` are commands; everything else is
/// ignored. Output lines are tagged (`[ERROR]`, `[NARASI]`, ...) so
/// scripted drivers can match on them.
pub async fn run_headless(config: HeadlessConfig) -> Result<(), SessionError> {
    let mut guide = HeadlessGuide::new(config);

    println!("=== Jelajah Kaltim (headless) ===");
    println!();
    print_command_help();
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !line.starts_with('#') {
            println!("[ERROR] Perintah diawali '#'; coba #help");
            continue;
        }

        let parts: Vec<&str> = line[1..].split_whitespace().collect();
        match parts.first().copied() {
            Some("quit") | Some("exit") => {
                println!("Sampai jumpa!");
                break;
            }
            Some("help") => print_command_help(),
            Some("regions") => print!("{}", guide.regions_listing()),
            Some("region") => match parse_id(parts.get(1)) {
                Some(id) => print_result(guide.region_detail(RegionId(id))),
                None => println!("[ERROR] Pakai: #region <id>"),
            },
            Some("search") => {
                let query = parts[1..].join(" ");
                print!("{}", guide.search_listing(&query));
            }
            Some("quizzes") => print!("{}", guide.quiz_listing()),
            Some("quiz") => match parts.get(1) {
                Some(code) => print_result(guide.begin_coded_quiz(code)),
                None => println!("[ERROR] Pakai: #quiz <kode>"),
            },
            Some("start") => match parse_id(parts.get(1)) {
                Some(id) => print_result(guide.begin_quiz(QuizId(id))),
                None => println!("[ERROR] Pakai: #start <id>"),
            },
            Some("answer") => match parts.get(1).and_then(|s| s.chars().next()) {
                Some(letter) => print_result(guide.answer(letter)),
                None => println!("[ERROR] Pakai: #answer <a|b|c|d>"),
            },
            Some("quiz-status") => print!("{}", guide.quiz_status()),
            Some("stories") => print!("{}", guide.stories_listing()),
            Some("narrate") => match parse_id(parts.get(1)) {
                Some(id) => print_result(guide.narrate(StoryId(id))),
                None => println!("[ERROR] Pakai: #narrate <id>"),
            },
            Some("pause") => print_outcome(guide.pause_narration()),
            Some("resume") => print_outcome(guide.resume_narration()),
            Some("stop-narration") => print_outcome(guide.stop_narration()),
            Some("events") => match guide.next_narration_line().await {
                Some(line) => println!("{line}"),
                None => println!("[ERROR] Narasi sudah berhenti"),
            },
            Some("audio") => {
                let filter = parts[1..].join(" ");
                print!("{}", guide.audio_listing(&filter));
            }
            Some("play") => match parse_id(parts.get(1)) {
                Some(id) => print_result(guide.play_clip(ClipId(id))),
                None => println!("[ERROR] Pakai: #play <id>"),
            },
            Some("status") => print!("{}", guide.status()),
            Some("dump") => match guide.catalog_json() {
                Ok(json) => println!("{json}"),
                Err(e) => println!("[ERROR] {e}"),
            },
            Some(other) => println!("[ERROR] Perintah tidak dikenal: #{other}"),
            None => {}
        }

        // Surface narration progress accumulated since the last command.
        for line in guide.narration_lines() {
            println!("{line}");
        }
    }

    Ok(())
}

fn parse_id(arg: Option<&&str>) -> Option<u32> {
    arg.and_then(|s| s.parse().ok())
}

fn print_result(result: Result<String, SessionError>) {
    match result {
        Ok(output) => print!("{output}"),
        Err(e) => println!("[ERROR] {e}"),
    }
}

fn print_outcome(result: Result<(), SessionError>) {
    if let Err(e) = result {
        println!("[ERROR] {e}");
    }
}

fn print_command_help() {
    println!("Perintah:");
    println!("  #regions             Daftar daerah");
    println!("  #region <id>         Detail satu daerah");
    println!("  #search <kata>       Cari daerah dan budaya");
    println!("  #quizzes             Daftar kuis publik");
    println!("  #start <id>          Mulai kuis publik");
    println!("  #quiz <kode>         Buka kuis dengan kode akses");
    println!("  #answer <a|b|c|d>    Jawab pertanyaan berjalan");
    println!("  #quiz-status         Status kuis");
    println!("  #stories             Daftar cerita rakyat");
    println!("  #narrate <id>        Bacakan cerita");
    println!("  #pause / #resume     Jeda / lanjutkan narasi");
    println!("  #stop-narration      Hentikan narasi");
    println!("  #events              Tunggu satu kejadian narasi");
    println!("  #audio [kata]        Pustaka klip audio, bisa disaring");
    println!("  #play <id>           Putar (simulasi) sebuah klip");
    println!("  #status              Ringkasan sesi");
    println!("  #dump                Katalog sebagai JSON");
    println!("  #quit                Keluar");
}
