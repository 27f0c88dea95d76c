//! Audio-clip browser widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use kaltim_core::catalog::{AudioCategory, AudioClip};

use crate::ui::layout::categories_and_clips;
use crate::ui::theme::GuideTheme;

/// Category strip plus clip list. Playback is simulated; selecting a clip
/// only produces a now-playing notice.
pub struct AudioBrowserWidget<'a> {
    categories: &'a [AudioCategory],
    clips: Vec<&'a AudioClip>,
    category_cursor: usize,
    clip_cursor: usize,
    now_playing: Option<&'a AudioClip>,
    theme: &'a GuideTheme,
}

impl<'a> AudioBrowserWidget<'a> {
    pub fn new(
        categories: &'a [AudioCategory],
        clips: Vec<&'a AudioClip>,
        theme: &'a GuideTheme,
    ) -> Self {
        Self {
            categories,
            clips,
            category_cursor: 0,
            clip_cursor: 0,
            now_playing: None,
            theme,
        }
    }

    pub fn category_cursor(mut self, cursor: usize) -> Self {
        self.category_cursor = cursor;
        self
    }

    pub fn clip_cursor(mut self, cursor: usize) -> Self {
        self.clip_cursor = cursor;
        self
    }

    pub fn now_playing(mut self, clip: Option<&'a AudioClip>) -> Self {
        self.now_playing = clip;
        self
    }
}

impl Widget for AudioBrowserWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (strip_area, list_area) = categories_and_clips(area);

        // Category strip
        let strip_block = Block::default()
            .title(" Kategori ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));
        let strip_inner = strip_block.inner(strip_area);
        strip_block.render(strip_area, buf);

        let mut spans = Vec::new();
        for (i, category) in self.categories.iter().enumerate() {
            let style = if i == self.category_cursor {
                self.theme.selection_style()
            } else {
                self.theme.muted_style()
            };
            spans.push(Span::styled(
                format!(" {} {} ", category.icon, category.name),
                style,
            ));
        }
        Paragraph::new(Line::from(spans)).render(strip_inner, buf);

        // Clip list
        let list_block = Block::default()
            .title(format!(" Klip ({}) ", self.clips.len()))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let list_inner = list_block.inner(list_area);
        list_block.render(list_area, buf);

        let mut lines: Vec<Line> = Vec::new();

        if self.clips.is_empty() {
            lines.push(Line::from(Span::styled(
                "Belum ada klip pada kategori ini.",
                self.theme.muted_style(),
            )));
        }

        for (i, clip) in self.clips.iter().enumerate() {
            let marker = if i == self.clip_cursor { "▸ " } else { "  " };
            let style = if i == self.clip_cursor {
                self.theme.selection_style()
            } else {
                self.theme.text_style()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{}", clip.title), style),
                Span::styled(
                    format!("  [{}] {}", clip.language, clip.duration),
                    self.theme.muted_style(),
                ),
            ]));
            if let Some(description) = &clip.description {
                lines.push(Line::from(Span::styled(
                    format!("    {description}"),
                    self.theme.muted_style(),
                )));
            }
            if let Some(speaker) = &clip.speaker {
                lines.push(Line::from(Span::styled(
                    format!("    Penutur: {speaker}"),
                    self.theme.muted_style(),
                )));
            }
        }

        if let Some(clip) = self.now_playing {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("♪ Sedang diputar: {} ({})", clip.title, clip.language),
                self.theme.accent_style(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(list_inner, buf);
    }
}
