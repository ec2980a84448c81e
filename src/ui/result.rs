use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], app);
    render_question_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_score_summary(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.total_score();
    let max = app.quiz().map_or(0, |quiz| quiz.max_score());

    let band_line = match app.result_text() {
        Some(text) => Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Green).bold(),
        )),
        None => Line::from("no result band matches this score".fg(Color::DarkGray)),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} of {} points", score, max),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        band_line,
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let Some(quiz) = app.quiz() else {
        return;
    };

    let lines: Vec<Line> = app
        .picks()
        .iter()
        .zip(quiz.questions.iter())
        .enumerate()
        .map(|(index, (pick, question))| {
            let picked = pick.and_then(|i| question.answers.get(i));
            let (points, color) = match picked {
                Some(answer) if answer.points > 0 => (answer.points, Color::Green),
                Some(answer) if answer.points < 0 => (answer.points, Color::Red),
                Some(answer) => (answer.points, Color::Gray),
                None => (0, Color::DarkGray),
            };

            let preview = truncate_question(&question.text);

            Line::from(vec![
                Span::styled(format!(" {:+} ", points), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(preview, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r back to tests  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
