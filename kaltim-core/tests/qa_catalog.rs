//! QA tests for the built-in content catalog.
//!
//! These verify the fixture invariants every screen leans on:
//! - every quiz question has exactly one correct option
//! - audio clips only reference existing categories
//! - stories derive non-empty paragraph lists

use kaltim_core::catalog::Catalog;

#[test]
fn builtin_catalog_validates() {
    Catalog::builtin().validate().expect("catalog invariants hold");
}

#[test]
fn every_question_has_exactly_one_correct_option() {
    let catalog = Catalog::builtin();

    let all_quizzes = catalog
        .quizzes
        .iter()
        .chain(catalog.coded_quizzes.iter().map(|(_, q)| q));

    for quiz in all_quizzes {
        for question in &quiz.questions {
            let correct = question.options.iter().filter(|o| o.is_correct).count();
            assert_eq!(
                correct, 1,
                "question {} in '{}' has {} correct options",
                question.id, quiz.title, correct
            );
        }
    }
}

#[test]
fn every_clip_belongs_to_a_category() {
    let catalog = Catalog::builtin();

    for clip in &catalog.audio_clips {
        assert!(
            catalog.category(clip.category).is_some(),
            "clip '{}' references missing category {}",
            clip.title,
            clip.category
        );
    }

    // Per-category listings cover the whole library.
    let grouped: usize = catalog
        .audio_categories
        .iter()
        .map(|c| catalog.clips_in_category(c.id).len())
        .sum();
    assert_eq!(grouped, catalog.audio_clips.len());
}

#[test]
fn stories_produce_paragraphs() {
    let catalog = Catalog::builtin();
    assert!(!catalog.stories.is_empty());

    for story in &catalog.stories {
        let paragraphs = story.paragraphs();
        assert!(
            !paragraphs.is_empty(),
            "story '{}' split into no paragraphs",
            story.title
        );
        for paragraph in &paragraphs {
            assert!(!paragraph.trim().is_empty());
        }
    }
}

#[test]
fn access_code_table_is_populated() {
    let catalog = Catalog::builtin();
    assert!(catalog
        .coded_quizzes
        .iter()
        .any(|(code, _)| code == "RPN1234"));

    // Stored codes are uppercase so lookup normalization stays one-way.
    for (code, _) in &catalog.coded_quizzes {
        assert_eq!(code, &code.to_uppercase());
    }
}

#[test]
fn quiz_questions_expose_their_correct_option() {
    let catalog = Catalog::builtin();
    for quiz in &catalog.quizzes {
        for question in &quiz.questions {
            let correct = question.correct_option().expect("one correct option");
            assert!(correct.is_correct);
        }
    }
}
