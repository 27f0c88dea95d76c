//! Quiz screen widgets: catalog, access-code entry, question, results.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use kaltim_core::catalog::Quiz;
use kaltim_core::quiz::QuizRun;

use crate::ui::theme::GuideTheme;

/// Public quiz catalog list.
pub struct QuizCatalogWidget<'a> {
    quizzes: &'a [Quiz],
    cursor: usize,
    theme: &'a GuideTheme,
}

impl<'a> QuizCatalogWidget<'a> {
    pub fn new(quizzes: &'a [Quiz], theme: &'a GuideTheme) -> Self {
        Self {
            quizzes,
            cursor: 0,
            theme,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }
}

impl Widget for QuizCatalogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Kuis ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, quiz) in self.quizzes.iter().enumerate() {
            let marker = if i == self.cursor { "▸ " } else { "  " };
            let style = if i == self.cursor {
                self.theme.selection_style()
            } else {
                self.theme.text_style()
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "{marker}{} {} ({} pertanyaan)",
                    quiz.icon,
                    quiz.title,
                    quiz.questions.len()
                ),
                style,
            )));
            lines.push(Line::from(Span::styled(
                format!("    {}", quiz.description),
                self.theme.muted_style(),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Punya kode akses dari guru? Tekan u.",
            self.theme.accent_style(),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Access-code entry popup.
pub struct CodeEntryWidget<'a> {
    input: &'a str,
    error: Option<&'a str>,
    theme: &'a GuideTheme,
}

impl<'a> CodeEntryWidget<'a> {
    pub fn new(input: &'a str, error: Option<&'a str>, theme: &'a GuideTheme) -> Self {
        Self {
            input,
            error,
            theme,
        }
    }
}

impl Widget for CodeEntryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Kode Akses ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                "Masukkan kode dari gurumu:",
                self.theme.text_style(),
            )),
            Line::from(Span::styled(
                format!("{}▌", self.input),
                self.theme.accent_style(),
            )),
        ];

        if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                self.theme.incorrect_style(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// One question with its options, countdown, and explanation.
pub struct QuestionWidget<'a> {
    run: &'a QuizRun,
    cursor: usize,
    theme: &'a GuideTheme,
}

impl<'a> QuestionWidget<'a> {
    pub fn new(run: &'a QuizRun, theme: &'a GuideTheme) -> Self {
        Self {
            run,
            cursor: 0,
            theme,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }
}

impl Widget for QuestionWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let run = self.run;
        let question = run.current_question();
        let answer = run.current_answer();

        let block = Block::default()
            .title(format!(
                " {} - Pertanyaan {}/{} ",
                run.quiz().title,
                run.current_index() + 1,
                run.quiz().questions.len()
            ))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let remaining = run.remaining_seconds();
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Sisa waktu: {}:{:02}", remaining / 60, remaining % 60),
                self.theme.countdown_style(remaining),
            )),
            Line::from(""),
            Line::from(Span::styled(
                question.question.clone(),
                self.theme.title_style(),
            )),
        ];

        if let Some(image) = &question.image {
            lines.push(Line::from(Span::styled(
                format!("[gambar: {image}]"),
                self.theme.muted_style(),
            )));
        }
        lines.push(Line::from(""));

        for (i, option) in question.options.iter().enumerate() {
            let marker = if i == self.cursor { "▸ " } else { "  " };
            let letter = (b'a' + i as u8) as char;

            let style = if answer.checked {
                if option.is_correct {
                    self.theme.correct_style()
                } else if answer.selected == Some(option.id) {
                    self.theme.incorrect_style()
                } else {
                    self.theme.muted_style()
                }
            } else if i == self.cursor {
                self.theme.selection_style()
            } else {
                self.theme.text_style()
            };

            lines.push(Line::from(Span::styled(
                format!("{marker}{letter}) {}", option.text),
                style,
            )));
        }

        if answer.checked {
            lines.push(Line::from(""));
            let verdict = if answer.correct {
                Span::styled("Benar!", self.theme.correct_style())
            } else {
                Span::styled("Salah.", self.theme.incorrect_style())
            };
            lines.push(Line::from(verdict));
            lines.push(Line::from(Span::styled(
                question.explanation.clone(),
                self.theme.text_style(),
            )));
            lines.push(Line::from(Span::styled(
                if run.is_last_question() {
                    "Enter: lihat hasil"
                } else {
                    "Enter: pertanyaan berikutnya"
                },
                self.theme.muted_style(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Final score view.
pub struct ResultsWidget<'a> {
    run: &'a QuizRun,
    theme: &'a GuideTheme,
}

impl<'a> ResultsWidget<'a> {
    pub fn new(run: &'a QuizRun, theme: &'a GuideTheme) -> Self {
        Self { run, theme }
    }
}

impl Widget for ResultsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let run = self.run;
        let score = run.score();

        let block = Block::default()
            .title(format!(" Hasil - {} ", run.quiz().title))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let grade_style = if score.percent >= 70 {
            self.theme.correct_style()
        } else {
            self.theme.incorrect_style()
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!("Skor: {}/{} ({}%)", score.correct, score.total, score.percent),
                self.theme.title_style(),
            )),
            Line::from(Span::styled(score.grade(), grade_style)),
            Line::from(""),
        ];

        for (i, question) in run.quiz().questions.iter().enumerate() {
            let (mark, style) = match run.answer(i) {
                Some(answer) if answer.correct => ("✓", self.theme.correct_style()),
                Some(answer) if answer.checked => ("✗", self.theme.incorrect_style()),
                _ => ("-", self.theme.muted_style()),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{mark} "), style),
                Span::styled(question.question.clone(), self.theme.text_style()),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
