//! QA tests for quiz access codes and the run flow.

use kaltim_core::catalog::Catalog;
use kaltim_core::quiz::{unlock_quiz, QuizError, RunState};
use kaltim_core::session::SessionConfig;
use kaltim_core::testing::{MockSpeech, TestHarness};

#[test]
fn access_code_resolves_to_its_quiz() {
    let catalog = Catalog::builtin();
    let quiz = unlock_quiz(catalog, "RPN1234").expect("known access code");
    assert_eq!(quiz.title, "Kuis Budaya Kaltim 1");
}

#[test]
fn access_code_is_normalized() {
    let catalog = Catalog::builtin();
    assert!(unlock_quiz(catalog, "rpn1234").is_ok());
    assert!(unlock_quiz(catalog, "  RPN1234  ").is_ok());
}

#[test]
fn unknown_access_code_is_a_validation_error() {
    let catalog = Catalog::builtin();
    let err = unlock_quiz(catalog, "XXX0000").expect_err("unknown code");
    assert!(matches!(err, QuizError::UnknownAccessCode(_)));
    assert!(err.to_string().contains("XXX0000"));
}

#[tokio::test]
async fn unknown_code_starts_nothing() {
    let mut harness = TestHarness::new();

    let result = harness.session.start_coded_quiz("XXX0000");
    assert!(result.is_err());
    assert!(
        harness.session.quiz_run().is_none(),
        "a rejected code must not leave a quiz running"
    );
}

#[tokio::test]
async fn perfect_run_scores_full_marks() {
    let mut harness = TestHarness::new();
    harness
        .session
        .start_coded_quiz("RPN1234")
        .expect("start coded quiz");

    loop {
        let run = harness.session.quiz_run_mut().expect("active run");
        let correct_id = run
            .current_question()
            .correct_option()
            .expect("one correct option")
            .id;
        run.select(correct_id).expect("select");
        assert!(run.check().expect("check"));
        if run.advance() == RunState::Finished {
            break;
        }
    }

    let score = harness.session.quiz_run().expect("finished run").score();
    assert_eq!(score.correct, score.total);
    assert_eq!(score.percent, 100);
    assert_eq!(score.grade(), "Luar Biasa");
}

#[tokio::test]
async fn countdown_expiry_ends_the_run() {
    let config = SessionConfig::new().with_seconds_per_question(1);
    let mut harness = TestHarness::with_engine_and_config(MockSpeech::new(), config);
    harness
        .session
        .start_coded_quiz("RPN5678")
        .expect("start coded quiz");

    let total_seconds = harness
        .session
        .quiz_run()
        .expect("active run")
        .remaining_seconds();
    assert_eq!(total_seconds, 3, "one second per question");

    for _ in 0..total_seconds {
        harness.session.tick_second();
    }

    let run = harness.session.quiz_run().expect("run still inspectable");
    assert_eq!(run.state(), RunState::Finished);
    assert_eq!(run.score().correct, 0);

    // Ticks after completion change nothing.
    harness.session.tick_second();
    assert_eq!(
        harness.session.quiz_run().expect("run").remaining_seconds(),
        0
    );
}

#[tokio::test]
async fn public_quiz_can_be_started_by_id() {
    let mut harness = TestHarness::new();
    let id = Catalog::builtin().quizzes[0].id;

    harness.session.start_quiz(id).expect("start public quiz");
    let run = harness.session.quiz_run().expect("active run");
    assert_eq!(run.quiz().id, id);
    assert_eq!(run.current_index(), 0);
}
