//! Event handling for the guide TUI.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, QuizView, Screen};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event.
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            if app.screen == Screen::Stories {
                app.story_scroll_up(3);
            }
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            if app.screen == Screen::Stories {
                app.story_scroll_down(3);
            }
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Overlays swallow keys first.
    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    // Global shortcut (always works)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    // Text-entry fields capture printable input before anything else.
    if app.search_active && app.screen == Screen::Regions {
        return handle_search_entry(app, key);
    }
    if app.quiz_view == QuizView::CodeEntry && app.screen == Screen::Quiz {
        return handle_code_entry(app, key);
    }

    // Global navigation
    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            return EventResult::NeedsRedraw;
        }
        KeyCode::Tab => {
            app.next_screen();
            return EventResult::NeedsRedraw;
        }
        KeyCode::BackTab => {
            app.prev_screen();
            return EventResult::NeedsRedraw;
        }
        KeyCode::Char('1') if app.screen != Screen::Quiz => {
            app.go_to_screen(Screen::Regions);
            return EventResult::NeedsRedraw;
        }
        KeyCode::Char('2') if app.screen != Screen::Quiz => {
            app.go_to_screen(Screen::Quiz);
            return EventResult::NeedsRedraw;
        }
        KeyCode::Char('3') if app.screen != Screen::Quiz => {
            app.go_to_screen(Screen::Stories);
            return EventResult::NeedsRedraw;
        }
        KeyCode::Char('4') if app.screen != Screen::Quiz => {
            app.go_to_screen(Screen::Audio);
            return EventResult::NeedsRedraw;
        }
        _ => {}
    }

    match app.screen {
        Screen::Regions => handle_regions_keys(app, key),
        Screen::Quiz => handle_quiz_keys(app, key),
        Screen::Stories => handle_stories_keys(app, key),
        Screen::Audio => handle_audio_keys(app, key),
    }
}

/// Keys while typing in the search field.
fn handle_search_entry(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.clear_search();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.finish_search();
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.search_backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c) => {
            app.search_push(c);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Keys while typing an access code.
fn handle_code_entry(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.cancel_code_entry();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.submit_code();
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.code_backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c) => {
            app.code_push(c);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_regions_keys(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('/') => {
            app.begin_search();
            EventResult::NeedsRedraw
        }
        KeyCode::Esc => {
            if app.selected_region.is_some() {
                app.close_region();
            } else {
                app.clear_search();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.region_cursor_down();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.region_cursor_up();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.open_region_under_cursor();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.selected_region.is_some() {
                app.region_tab = app.region_tab.next();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Char('h') | KeyCode::Left => {
            if app.selected_region.is_some() {
                app.region_tab = app.region_tab.prev();
            }
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_quiz_keys(app: &mut App, key: KeyEvent) -> EventResult {
    match app.quiz_view {
        QuizView::Catalog => match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                app.quiz_cursor_down();
                EventResult::NeedsRedraw
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.quiz_cursor_up();
                EventResult::NeedsRedraw
            }
            KeyCode::Enter => {
                app.start_quiz_under_cursor();
                EventResult::NeedsRedraw
            }
            KeyCode::Char('u') => {
                app.open_code_entry();
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        },
        // Entry handled earlier; anything left falls through.
        QuizView::CodeEntry => EventResult::Continue,
        QuizView::Running => match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                app.option_cursor_down();
                EventResult::NeedsRedraw
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.option_cursor_up();
                EventResult::NeedsRedraw
            }
            KeyCode::Char(c @ '1'..='9') => {
                app.option_cursor = (c as usize - '1' as usize).min(
                    app.session
                        .quiz_run()
                        .map(|r| r.current_question().options.len().saturating_sub(1))
                        .unwrap_or(0),
                );
                app.confirm_option();
                EventResult::NeedsRedraw
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.confirm_option();
                EventResult::NeedsRedraw
            }
            KeyCode::Esc => {
                app.leave_quiz();
                app.set_status("Kuis ditinggalkan");
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        },
        QuizView::Results => match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                app.leave_quiz();
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        },
    }
}

fn handle_stories_keys(app: &mut App, key: KeyEvent) -> EventResult {
    let reading = app.reading_story.is_some();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if reading {
                app.story_scroll_down(1);
            } else {
                app.story_cursor_down();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if reading {
                app.story_scroll_up(1);
            } else {
                app.story_cursor_up();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            if !reading {
                app.open_story_under_cursor();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Char(' ') => {
            if reading {
                app.toggle_narration();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Char('s') => {
            if reading {
                app.stop_narration();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Esc => {
            if reading {
                app.close_story();
            }
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_audio_keys(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            app.category_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.category_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.clip_cursor_down();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.clip_cursor_up();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.play_clip_under_cursor();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle key when an overlay is open.
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}
