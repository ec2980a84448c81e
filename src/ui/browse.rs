use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{App, BrowseFocus};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);

    let columns =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).split(chunks[1]);

    let theme_items: Vec<&str> = app.themes().iter().map(String::as_str).collect();
    render_list(
        frame,
        columns[0],
        "Themes",
        &theme_items,
        app.selected_theme(),
        app.focus() == BrowseFocus::Themes,
    );

    let test_items: Vec<&str> = app.tests().iter().map(|test| test.title.as_str()).collect();
    render_list(
        frame,
        columns[1],
        "Tests",
        &test_items,
        app.selected_test(),
        app.focus() == BrowseFocus::Tests,
    );

    render_footer(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Span::styled(
        "TEXTQUIZ",
        Style::default().fg(Color::Cyan).bold(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[&str],
    selected: usize,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let lines: Vec<Line> = if items.is_empty() {
        vec![Line::from(Span::styled(
            "(nothing here)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let is_selected = index == selected;
                let style = if is_selected && focused {
                    Style::default().fg(Color::Cyan).bold()
                } else if is_selected {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_selected { ">" } else { " " };

                Line::from(Span::styled(format!(" {} {}", marker, item), style))
            })
            .collect()
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_color)
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = app.load_error() {
        Line::from(Span::styled(error, Style::default().fg(Color::Red)))
    } else if app.can_start() {
        Line::from("enter start  ·  j/k move  ·  tab switch list  ·  q quit".fg(Color::DarkGray))
    } else {
        Line::from("j/k move  ·  tab switch list  ·  q quit".fg(Color::DarkGray))
    };

    let widget = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
