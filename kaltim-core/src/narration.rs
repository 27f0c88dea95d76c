//! Story narration: an explicit Idle/Playing/Paused sequencer driving a
//! speech engine one paragraph at a time.
//!
//! The sequencer itself is a small synchronous state machine; the async
//! worker around it owns the engine, inserts the pacing gap between
//! paragraphs, and talks to the UI over channels. Pausing cuts off the
//! current utterance and resuming restarts that same paragraph from its
//! beginning.

use crate::speech::{select_voice, SpeechEngine, SpeechParams};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;

/// Pacing delay inserted between paragraphs.
pub const DEFAULT_PARAGRAPH_GAP: Duration = Duration::from_secs(1);

/// Errors from the narration control surface.
#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("narration worker is not running")]
    WorkerGone,

    #[error("narration worker is busy")]
    WorkerBusy,
}

/// Playback state as the screens observe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NarrationState {
    #[default]
    Idle,
    Playing {
        paragraph: usize,
    },
    Paused {
        resume_from: usize,
    },
}

/// Commands into the narration worker.
#[derive(Debug, Clone)]
pub enum NarrationCommand {
    Play { paragraphs: Vec<String> },
    Pause,
    Resume,
    Stop,
}

/// Events out of the narration worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrationEvent {
    ParagraphStarted { index: usize, total: usize },
    ParagraphFinished { index: usize },
    Paused { resume_from: usize },
    Resumed { from: usize },
    Finished,
    Stopped,
    Failed { message: String },
}

// ============================================================================
// Sequencer
// ============================================================================

/// The narration state machine, free of any engine or timing concerns.
///
/// Transitions:
/// `Idle -> Playing(0)` on begin; `Playing(i) -> Playing(i+1)` on advance
/// until the last paragraph, then `Idle`; `Playing(i) -> Paused(i)` on
/// pause; `Paused(i) -> Playing(i)` on resume; anything to `Idle` on stop.
#[derive(Debug, Clone)]
pub struct Sequencer {
    paragraph_count: usize,
    state: NarrationState,
}

impl Sequencer {
    pub fn new(paragraph_count: usize) -> Self {
        Self {
            paragraph_count,
            state: NarrationState::Idle,
        }
    }

    pub fn state(&self) -> NarrationState {
        self.state
    }

    /// Start playback. From `Paused` this behaves like [`Sequencer::resume`].
    /// Returns the paragraph to speak, or `None` for an empty story.
    pub fn begin(&mut self) -> Option<usize> {
        match self.state {
            NarrationState::Paused { resume_from } => {
                self.state = NarrationState::Playing {
                    paragraph: resume_from,
                };
                Some(resume_from)
            }
            _ => {
                if self.paragraph_count == 0 {
                    self.state = NarrationState::Idle;
                    return None;
                }
                self.state = NarrationState::Playing { paragraph: 0 };
                Some(0)
            }
        }
    }

    /// Move past a completed paragraph. Returns the next paragraph index,
    /// or `None` when the story is done (state returns to `Idle`).
    pub fn advance(&mut self) -> Option<usize> {
        match self.state {
            NarrationState::Playing { paragraph } => {
                let next = paragraph + 1;
                if next < self.paragraph_count {
                    self.state = NarrationState::Playing { paragraph: next };
                    Some(next)
                } else {
                    self.state = NarrationState::Idle;
                    None
                }
            }
            _ => None,
        }
    }

    /// Pause playback. Returns the paragraph to resume from.
    pub fn pause(&mut self) -> Option<usize> {
        match self.state {
            NarrationState::Playing { paragraph } => {
                self.state = NarrationState::Paused {
                    resume_from: paragraph,
                };
                Some(paragraph)
            }
            _ => None,
        }
    }

    /// Resume playback at the paused paragraph.
    pub fn resume(&mut self) -> Option<usize> {
        match self.state {
            NarrationState::Paused { resume_from } => {
                self.state = NarrationState::Playing {
                    paragraph: resume_from,
                };
                Some(resume_from)
            }
            _ => None,
        }
    }

    pub fn stop(&mut self) {
        self.state = NarrationState::Idle;
    }
}

// ============================================================================
// Worker
// ============================================================================

/// Narration worker configuration.
#[derive(Debug, Clone)]
pub struct NarratorConfig {
    pub params: SpeechParams,
    pub preferred_voice: Option<String>,
    pub paragraph_gap: Duration,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            params: SpeechParams::default(),
            preferred_voice: Some(crate::speech::PREFERRED_VOICE.to_string()),
            paragraph_gap: DEFAULT_PARAGRAPH_GAP,
        }
    }
}

/// Control handle held by the UI. Commands are non-blocking sends; events
/// are drained each frame with [`NarratorHandle::try_event`].
pub struct NarratorHandle {
    commands: mpsc::Sender<NarrationCommand>,
    events: mpsc::Receiver<NarrationEvent>,
}

impl NarratorHandle {
    pub fn play(&self, paragraphs: Vec<String>) -> Result<(), NarrationError> {
        self.send(NarrationCommand::Play { paragraphs })
    }

    pub fn pause(&self) -> Result<(), NarrationError> {
        self.send(NarrationCommand::Pause)
    }

    pub fn resume(&self) -> Result<(), NarrationError> {
        self.send(NarrationCommand::Resume)
    }

    pub fn stop(&self) -> Result<(), NarrationError> {
        self.send(NarrationCommand::Stop)
    }

    fn send(&self, command: NarrationCommand) -> Result<(), NarrationError> {
        self.commands.try_send(command).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => NarrationError::WorkerBusy,
            mpsc::error::TrySendError::Closed(_) => NarrationError::WorkerGone,
        })
    }

    /// Next pending event, if any.
    pub fn try_event(&mut self) -> Option<NarrationEvent> {
        self.events.try_recv().ok()
    }

    /// Wait for the next event. `None` once the worker has shut down.
    pub async fn recv_event(&mut self) -> Option<NarrationEvent> {
        self.events.recv().await
    }
}

/// Spawn the narration worker onto the current tokio runtime.
pub fn spawn_narrator(engine: Box<dyn SpeechEngine>, config: NarratorConfig) -> NarratorHandle {
    let (command_tx, command_rx) = mpsc::channel(16);
    let (event_tx, event_rx) = mpsc::channel(64);

    tokio::spawn(narrator_loop(engine, config, command_rx, event_tx));

    NarratorHandle {
        commands: command_tx,
        events: event_rx,
    }
}

async fn narrator_loop(
    mut engine: Box<dyn SpeechEngine>,
    config: NarratorConfig,
    mut commands: mpsc::Receiver<NarrationCommand>,
    events: mpsc::Sender<NarrationEvent>,
) {
    let mut next_play: Option<Vec<String>> = None;

    loop {
        let paragraphs = match next_play.take() {
            Some(paragraphs) => paragraphs,
            None => match commands.recv().await {
                Some(NarrationCommand::Play { paragraphs }) => paragraphs,
                // Pause/Resume/Stop while idle have nothing to act on.
                Some(_) => continue,
                None => return,
            },
        };

        next_play = run_story(engine.as_mut(), &config, paragraphs, &mut commands, &events).await;
    }
}

/// Outcome of speaking one paragraph while also listening for commands.
enum SpeakOutcome {
    Done,
    Failed(crate::speech::SpeechError),
    Control(NarrationCommand),
    Closed,
}

async fn speak_paragraph(
    engine: &mut dyn SpeechEngine,
    text: &str,
    params: &SpeechParams,
    commands: &mut mpsc::Receiver<NarrationCommand>,
) -> SpeakOutcome {
    let speak = engine.speak(text, params);
    tokio::pin!(speak);

    loop {
        tokio::select! {
            result = &mut speak => {
                return match result {
                    Ok(()) => SpeakOutcome::Done,
                    Err(e) => SpeakOutcome::Failed(e),
                };
            }
            command = commands.recv() => {
                match command {
                    // Resume while already playing is a no-op.
                    Some(NarrationCommand::Resume) => continue,
                    Some(other) => return SpeakOutcome::Control(other),
                    None => return SpeakOutcome::Closed,
                }
            }
        }
    }
}

enum GapOutcome {
    Elapsed,
    Control(NarrationCommand),
    Closed,
}

async fn paragraph_gap(
    gap: Duration,
    commands: &mut mpsc::Receiver<NarrationCommand>,
) -> GapOutcome {
    let sleep = tokio::time::sleep(gap);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => return GapOutcome::Elapsed,
            command = commands.recv() => {
                match command {
                    Some(NarrationCommand::Resume) => continue,
                    Some(other) => return GapOutcome::Control(other),
                    None => return GapOutcome::Closed,
                }
            }
        }
    }
}

enum PauseOutcome {
    Resumed(usize),
    Stopped,
    NewPlay(Vec<String>),
    Closed,
}

async fn wait_while_paused(
    sequencer: &mut Sequencer,
    commands: &mut mpsc::Receiver<NarrationCommand>,
) -> PauseOutcome {
    loop {
        match commands.recv().await {
            Some(NarrationCommand::Resume) => {
                if let Some(index) = sequencer.resume() {
                    return PauseOutcome::Resumed(index);
                }
            }
            Some(NarrationCommand::Stop) => {
                sequencer.stop();
                return PauseOutcome::Stopped;
            }
            Some(NarrationCommand::Play { paragraphs }) => {
                return PauseOutcome::NewPlay(paragraphs);
            }
            Some(NarrationCommand::Pause) => continue,
            None => return PauseOutcome::Closed,
        }
    }
}

/// Narrate one story to completion, interruption, or replacement.
///
/// Returns the paragraphs of a replacement story when a new Play command
/// arrived mid-run.
async fn run_story(
    engine: &mut dyn SpeechEngine,
    config: &NarratorConfig,
    paragraphs: Vec<String>,
    commands: &mut mpsc::Receiver<NarrationCommand>,
    events: &mpsc::Sender<NarrationEvent>,
) -> Option<Vec<String>> {
    let total = paragraphs.len();
    let mut sequencer = Sequencer::new(total);

    let choice = select_voice(
        &engine.voices(),
        config.preferred_voice.as_deref(),
        &config.params.language,
    );
    let params = choice.params(&config.params);

    let mut current = match sequencer.begin() {
        Some(index) => index,
        None => {
            let _ = events.send(NarrationEvent::Finished).await;
            return None;
        }
    };

    loop {
        let _ = events
            .send(NarrationEvent::ParagraphStarted {
                index: current,
                total,
            })
            .await;

        match speak_paragraph(engine, &paragraphs[current], &params, commands).await {
            SpeakOutcome::Done => {
                let _ = events
                    .send(NarrationEvent::ParagraphFinished { index: current })
                    .await;

                match sequencer.advance() {
                    Some(next) => {
                        // Pacing gap; the sequencer already sits on the next
                        // paragraph, so a pause here resumes at that one.
                        match paragraph_gap(config.paragraph_gap, commands).await {
                            GapOutcome::Elapsed => current = next,
                            GapOutcome::Control(NarrationCommand::Pause) => {
                                match pause_and_wait(&mut sequencer, commands, events).await {
                                    PauseOutcome::Resumed(index) => current = index,
                                    PauseOutcome::Stopped => return None,
                                    PauseOutcome::NewPlay(next_story) => return Some(next_story),
                                    PauseOutcome::Closed => return None,
                                }
                            }
                            GapOutcome::Control(NarrationCommand::Stop) => {
                                sequencer.stop();
                                let _ = events.send(NarrationEvent::Stopped).await;
                                return None;
                            }
                            GapOutcome::Control(NarrationCommand::Play { paragraphs }) => {
                                return Some(paragraphs);
                            }
                            GapOutcome::Control(NarrationCommand::Resume) => current = next,
                            GapOutcome::Closed => return None,
                        }
                    }
                    None => {
                        let _ = events.send(NarrationEvent::Finished).await;
                        return None;
                    }
                }
            }
            SpeakOutcome::Failed(e) => {
                engine.stop();
                sequencer.stop();
                let _ = events
                    .send(NarrationEvent::Failed {
                        message: e.to_string(),
                    })
                    .await;
                return None;
            }
            SpeakOutcome::Control(NarrationCommand::Pause) => {
                engine.stop();
                match pause_and_wait(&mut sequencer, commands, events).await {
                    PauseOutcome::Resumed(index) => current = index,
                    PauseOutcome::Stopped => return None,
                    PauseOutcome::NewPlay(next_story) => return Some(next_story),
                    PauseOutcome::Closed => return None,
                }
            }
            SpeakOutcome::Control(NarrationCommand::Stop) => {
                engine.stop();
                sequencer.stop();
                let _ = events.send(NarrationEvent::Stopped).await;
                return None;
            }
            SpeakOutcome::Control(NarrationCommand::Play { paragraphs }) => {
                engine.stop();
                return Some(paragraphs);
            }
            SpeakOutcome::Control(NarrationCommand::Resume) => {
                // Filtered out by speak_paragraph already.
            }
            SpeakOutcome::Closed => {
                engine.stop();
                return None;
            }
        }
    }
}

/// Record the pause, announce it, and hold until a resume or teardown.
async fn pause_and_wait(
    sequencer: &mut Sequencer,
    commands: &mut mpsc::Receiver<NarrationCommand>,
    events: &mpsc::Sender<NarrationEvent>,
) -> PauseOutcome {
    if let Some(resume_from) = sequencer.pause() {
        let _ = events.send(NarrationEvent::Paused { resume_from }).await;
    }

    let outcome = wait_while_paused(sequencer, commands).await;
    match &outcome {
        PauseOutcome::Resumed(from) => {
            let _ = events.send(NarrationEvent::Resumed { from: *from }).await;
        }
        PauseOutcome::Stopped => {
            let _ = events.send(NarrationEvent::Stopped).await;
        }
        PauseOutcome::NewPlay(_) | PauseOutcome::Closed => {}
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequencer_walks_paragraphs_in_order() {
        let mut seq = Sequencer::new(3);
        assert_eq!(seq.state(), NarrationState::Idle);

        assert_eq!(seq.begin(), Some(0));
        assert_eq!(seq.state(), NarrationState::Playing { paragraph: 0 });
        assert_eq!(seq.advance(), Some(1));
        assert_eq!(seq.advance(), Some(2));
        assert_eq!(seq.advance(), None);
        assert_eq!(seq.state(), NarrationState::Idle);
    }

    #[test]
    fn sequencer_pause_records_resume_index() {
        let mut seq = Sequencer::new(4);
        seq.begin();
        seq.advance();
        seq.advance();

        assert_eq!(seq.pause(), Some(2));
        assert_eq!(seq.state(), NarrationState::Paused { resume_from: 2 });
        assert_eq!(seq.resume(), Some(2));
        assert_eq!(seq.state(), NarrationState::Playing { paragraph: 2 });
    }

    #[test]
    fn sequencer_begin_from_paused_resumes() {
        let mut seq = Sequencer::new(4);
        seq.begin();
        seq.advance();
        seq.pause();

        assert_eq!(seq.begin(), Some(1));
    }

    #[test]
    fn sequencer_stop_resets_to_idle() {
        let mut seq = Sequencer::new(2);
        seq.begin();
        seq.stop();
        assert_eq!(seq.state(), NarrationState::Idle);
        assert_eq!(seq.resume(), None);
        assert_eq!(seq.advance(), None);
    }

    #[test]
    fn empty_story_never_plays() {
        let mut seq = Sequencer::new(0);
        assert_eq!(seq.begin(), None);
        assert_eq!(seq.state(), NarrationState::Idle);
    }

    #[test]
    fn pause_outside_playing_is_ignored() {
        let mut seq = Sequencer::new(2);
        assert_eq!(seq.pause(), None);
        seq.begin();
        seq.pause();
        assert_eq!(seq.pause(), None);
    }

    #[test]
    fn default_paragraph_gap_is_one_second() {
        assert_eq!(DEFAULT_PARAGRAPH_GAP, Duration::from_secs(1));
        assert_eq!(NarratorConfig::default().paragraph_gap, Duration::from_secs(1));
    }
}
