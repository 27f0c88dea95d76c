//! Render orchestration for the guide TUI.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, QuizView, Screen};
use crate::ui::layout::{centered_rect_fixed, search_and_list, AppLayout};
use crate::ui::widgets::{
    AudioBrowserWidget, CodeEntryWidget, QuestionWidget, QuizCatalogWidget, RegionDetailWidget,
    RegionListWidget, ResultsWidget, StoryListWidget, StoryReaderWidget,
};

/// Overlay types.
#[derive(Debug, Clone)]
pub enum Overlay {
    Help,
}

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::calculate(frame.area());

    render_tab_bar(frame, app, layout.tab_bar);

    match app.screen {
        Screen::Regions => render_regions(frame, app, layout.content),
        Screen::Quiz => render_quiz(frame, app, layout.content),
        Screen::Stories => render_stories(frame, app, layout.content),
        Screen::Audio => render_audio(frame, app, layout.content),
    }

    render_status_bar(frame, app, layout.status_bar);
    render_hotkey_bar(frame, app, layout.hotkey_bar);

    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, overlay, frame.area());
    }
}

/// Render the screen tabs.
fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " Jelajah Kaltim ",
        app.theme.title_style(),
    )];
    for (i, screen) in Screen::all().iter().enumerate() {
        let label = format!(" {}:{} ", i + 1, screen.title());
        let style = if *screen == app.screen {
            app.theme.selection_style().add_modifier(Modifier::UNDERLINED)
        } else {
            app.theme.muted_style()
        };
        spans.push(Span::styled(label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the regions screen: search box plus list, or the detail view.
fn render_regions(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(region) = app.selected_region() {
        let widget = RegionDetailWidget::new(region, app.region_tab, &app.theme);
        frame.render_widget(widget, area);
        return;
    }

    let (search_area, list_area) = search_and_list(area);
    render_search_box(frame, app, search_area);

    let hits = app.search_hits();
    let widget = RegionListWidget::new(app.visible_regions(), &app.theme)
        .cursor(app.region_cursor)
        .hits(&hits);
    frame.render_widget(widget, list_area);
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let hits = app.search_hits();
    let title = if hits.is_unfiltered() {
        " Cari daerah atau budaya ".to_string()
    } else {
        format!(" Cari: {} cocok ", hits.match_count())
    };

    let content = if app.search_active {
        // Trailing block cursor while typing.
        format!("{}▌", app.search_input())
    } else if app.submitted_query().is_empty() {
        "tekan / untuk mencari".to_string()
    } else {
        app.submitted_query().to_string()
    };

    let style = if app.search_active {
        app.theme.text_style()
    } else {
        app.theme.muted_style()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(app.search_active));
    frame.render_widget(Paragraph::new(content).style(style).block(block), area);
}

/// Render the quiz screen in its current view.
fn render_quiz(frame: &mut Frame, app: &App, area: Rect) {
    match app.quiz_view {
        QuizView::Catalog => {
            let widget = QuizCatalogWidget::new(&app.session.catalog().quizzes, &app.theme)
                .cursor(app.quiz_cursor);
            frame.render_widget(widget, area);
        }
        QuizView::CodeEntry => {
            let widget = QuizCatalogWidget::new(&app.session.catalog().quizzes, &app.theme)
                .cursor(app.quiz_cursor);
            frame.render_widget(widget, area);

            let popup = centered_rect_fixed(44, 7, area);
            frame.render_widget(Clear, popup);
            let entry =
                CodeEntryWidget::new(app.code_input(), app.code_error.as_deref(), &app.theme);
            frame.render_widget(entry, popup);
        }
        QuizView::Running => {
            if let Some(run) = app.session.quiz_run() {
                let widget = QuestionWidget::new(run, &app.theme).cursor(app.option_cursor);
                frame.render_widget(widget, area);
            }
        }
        QuizView::Results => {
            if let Some(run) = app.session.quiz_run() {
                let widget = ResultsWidget::new(run, &app.theme);
                frame.render_widget(widget, area);
            }
        }
    }
}

/// Render the stories screen: list or reader.
fn render_stories(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(story) = app.reading_story() {
        let widget = StoryReaderWidget::new(story, &app.theme)
            .scroll(app.story_scroll)
            .narration(app.session.narration_state());
        frame.render_widget(widget, area);
    } else {
        let widget = StoryListWidget::new(&app.session.catalog().stories, &app.theme)
            .cursor(app.story_cursor);
        frame.render_widget(widget, area);
    }
}

/// Render the audio browser.
fn render_audio(frame: &mut Frame, app: &App, area: Rect) {
    let widget = AudioBrowserWidget::new(app.categories(), app.current_category_clips(), &app.theme)
        .category_cursor(app.category_cursor)
        .clip_cursor(app.clip_cursor)
        .now_playing(app.session.now_playing());
    frame.render_widget(widget, area);
}

/// Render the status line.
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    use kaltim_core::narration::NarrationState;

    let mut spans = Vec::new();
    match app.session.narration_state() {
        NarrationState::Idle => {}
        NarrationState::Playing { paragraph } => {
            spans.push(Span::styled(
                format!("▶ paragraf {} ", paragraph + 1),
                app.theme.narration_style(false),
            ));
        }
        NarrationState::Paused { resume_from } => {
            spans.push(Span::styled(
                format!("⏸ jeda di paragraf {} ", resume_from + 1),
                app.theme.narration_style(true),
            ));
        }
    }

    if let Some(message) = app.status_message() {
        spans.push(Span::styled(message.to_string(), app.theme.text_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the context hotkey bar.
fn render_hotkey_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.screen {
        Screen::Regions => {
            if app.selected_region.is_some() {
                "h/l tab • Esc kembali • Tab layar • ? bantuan • q keluar"
            } else {
                "/ cari • j/k pilih • Enter buka • Tab layar • ? bantuan • q keluar"
            }
        }
        Screen::Quiz => match app.quiz_view {
            QuizView::Catalog => "j/k pilih • Enter mulai • u kode akses • Tab layar • q keluar",
            QuizView::CodeEntry => "ketik kode • Enter kirim • Esc batal",
            QuizView::Running => "j/k pilih • Enter periksa/lanjut • 1-4 jawab • Esc keluar kuis",
            QuizView::Results => "Enter kembali ke daftar kuis",
        },
        Screen::Stories => {
            if app.reading_story.is_some() {
                "Spasi putar/jeda • s berhenti • j/k gulir • Esc kembali"
            } else {
                "j/k pilih • Enter baca • Tab layar • q keluar"
            }
        }
        Screen::Audio => "h/l kategori • j/k klip • Enter putar • Tab layar • q keluar",
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, app.theme.muted_style()))),
        area,
    );
}

/// Render overlay.
fn render_overlay(frame: &mut Frame, app: &App, overlay: &Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
    }
}

/// Render help overlay.
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(52, 20, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " Jelajah Kaltim - Bantuan ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Layar:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  Tab / Shift+Tab   Ganti layar"),
        Line::from("  1-4               Langsung ke layar"),
        Line::from(""),
        Line::from(Span::styled(
            "Daerah:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  /        Cari daerah atau budaya"),
        Line::from("  Enter    Buka detail, h/l ganti tab"),
        Line::from(""),
        Line::from(Span::styled(
            "Kuis:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  u        Masukkan kode akses"),
        Line::from("  Enter    Periksa jawaban / lanjut"),
        Line::from(""),
        Line::from(Span::styled(
            "Cerita:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  Spasi    Putar / jeda narasi"),
        Line::from("  s        Hentikan narasi"),
        Line::from(""),
        Line::from(Span::styled(
            "Tekan Esc atau q untuk menutup",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Bantuan ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}
