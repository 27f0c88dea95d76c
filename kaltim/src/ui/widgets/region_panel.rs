//! Region list and detail widgets.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use kaltim_core::catalog::Region;
use kaltim_core::search::SearchHits;

use crate::app::RegionTab;
use crate::ui::theme::GuideTheme;

/// The filterable region list.
pub struct RegionListWidget<'a> {
    regions: Vec<&'a Region>,
    hits: Option<&'a SearchHits<'a>>,
    cursor: usize,
    theme: &'a GuideTheme,
}

impl<'a> RegionListWidget<'a> {
    pub fn new(regions: Vec<&'a Region>, theme: &'a GuideTheme) -> Self {
        Self {
            regions,
            hits: None,
            cursor: 0,
            theme,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn hits(mut self, hits: &'a SearchHits<'a>) -> Self {
        self.hits = Some(hits);
        self
    }
}

impl Widget for RegionListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Daerah ({}) ", self.regions.len()))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();

        if self.regions.is_empty() {
            lines.push(Line::from(Span::styled(
                "Tidak ada daerah yang cocok.",
                self.theme.muted_style(),
            )));
        }

        for (i, region) in self.regions.iter().enumerate() {
            let marker = if i == self.cursor { "▸ " } else { "  " };
            let style = if i == self.cursor {
                self.theme.selection_style()
            } else {
                self.theme.text_style()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{}", region.name), style),
                Span::styled(format!("  {}", region.location), self.theme.muted_style()),
            ]));
        }

        // Matched culture entries ride below the region rows, tagged with
        // their owning region.
        if let Some(hits) = self.hits {
            if !hits.culture.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Budaya yang cocok:",
                    self.theme.accent_style(),
                )));
                for hit in &hits.culture {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {} ", hit.item.name), self.theme.text_style()),
                        Span::styled(format!("({})", hit.region.name), self.theme.muted_style()),
                    ]));
                }
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Region detail with About/Culture/Photos/Facts tabs.
pub struct RegionDetailWidget<'a> {
    region: &'a Region,
    tab: RegionTab,
    theme: &'a GuideTheme,
}

impl<'a> RegionDetailWidget<'a> {
    pub fn new(region: &'a Region, tab: RegionTab, theme: &'a GuideTheme) -> Self {
        Self { region, tab, theme }
    }

    fn tab_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for tab in RegionTab::all() {
            let style = if tab == self.tab {
                self.theme.selection_style()
            } else {
                self.theme.muted_style()
            };
            spans.push(Span::styled(format!(" {} ", tab.title()), style));
        }
        Line::from(spans)
    }

    fn content_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        match self.tab {
            RegionTab::About => {
                lines.push(Line::from(Span::styled(
                    self.region.description.clone(),
                    self.theme.text_style(),
                )));
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled("Penduduk: ", self.theme.accent_style()),
                    Span::styled(self.region.population.clone(), self.theme.text_style()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Lokasi: ", self.theme.accent_style()),
                    Span::styled(self.region.location.clone(), self.theme.text_style()),
                ]));
            }
            RegionTab::Culture => {
                for item in &self.region.culture {
                    lines.push(Line::from(Span::styled(
                        item.name.clone(),
                        self.theme.title_style(),
                    )));
                    lines.push(Line::from(Span::styled(
                        item.description.clone(),
                        self.theme.text_style(),
                    )));
                    lines.push(Line::from(""));
                }
            }
            RegionTab::Photos => {
                for photo in &self.region.photos {
                    let caption = photo.caption.clone().unwrap_or_else(|| "-".to_string());
                    lines.push(Line::from(vec![
                        Span::styled(format!("{} ", photo.image), self.theme.text_style()),
                        Span::styled(format!("[{}] ", photo.aspect), self.theme.muted_style()),
                        Span::styled(caption, self.theme.muted_style()),
                    ]));
                }
            }
            RegionTab::Facts => {
                for fact in &self.region.fun_facts {
                    lines.push(Line::from(vec![
                        Span::styled("• ", self.theme.accent_style()),
                        Span::styled(fact.clone(), self.theme.text_style()),
                    ]));
                }
            }
        }
        lines
    }
}

impl Widget for RegionDetailWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.region.name))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![self.tab_line(), Line::from("")];
        lines.extend(self.content_lines());

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
