//! Story list and narrated reader widgets.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use kaltim_core::catalog::Story;
use kaltim_core::narration::NarrationState;

use crate::ui::theme::GuideTheme;

/// The folk story list.
pub struct StoryListWidget<'a> {
    stories: &'a [Story],
    cursor: usize,
    theme: &'a GuideTheme,
}

impl<'a> StoryListWidget<'a> {
    pub fn new(stories: &'a [Story], theme: &'a GuideTheme) -> Self {
        Self {
            stories,
            cursor: 0,
            theme,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }
}

impl Widget for StoryListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Cerita Rakyat ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, story) in self.stories.iter().enumerate() {
            let marker = if i == self.cursor { "▸ " } else { "  " };
            let style = if i == self.cursor {
                self.theme.selection_style()
            } else {
                self.theme.text_style()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{}", story.title), style),
                Span::styled(format!("  ({})", story.region), self.theme.muted_style()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", story.summary),
                self.theme.muted_style(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// The reader: full text with the narrated paragraph highlighted.
pub struct StoryReaderWidget<'a> {
    story: &'a Story,
    scroll: usize,
    narration: NarrationState,
    theme: &'a GuideTheme,
}

impl<'a> StoryReaderWidget<'a> {
    pub fn new(story: &'a Story, theme: &'a GuideTheme) -> Self {
        Self {
            story,
            scroll: 0,
            narration: NarrationState::Idle,
            theme,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn narration(mut self, narration: NarrationState) -> Self {
        self.narration = narration;
        self
    }

    fn highlight(&self, paragraph: usize) -> Option<bool> {
        // Some(paused?) when this paragraph is the narration target.
        match self.narration {
            NarrationState::Playing { paragraph: p } if p == paragraph => Some(false),
            NarrationState::Paused { resume_from } if resume_from == paragraph => Some(true),
            _ => None,
        }
    }
}

impl Widget for StoryReaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} - {} ", self.story.title, self.story.region))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            self.story.summary.clone(),
            self.theme.muted_style(),
        )));
        lines.push(Line::from(""));

        for (i, paragraph) in self.story.paragraphs().iter().enumerate() {
            let style = match self.highlight(i) {
                Some(paused) => self.theme.narration_style(paused),
                None => self.theme.text_style(),
            };
            let prefix = match self.highlight(i) {
                Some(true) => "⏸ ",
                Some(false) => "▶ ",
                None => "",
            };
            lines.push(Line::from(Span::styled(
                format!("{prefix}{paragraph}"),
                style,
            )));
            lines.push(Line::from(""));
        }

        let visible_height = inner.height as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        let scroll = self.scroll.min(max_scroll);

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
