//! Centered overlay shared by the notice and processing dialogs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal padding inside the border, both sides together
const PADDING: u16 = 4;

pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub title_color: Color,
    pub border_color: Color,
    /// Body text; `\n` starts a new paragraph
    pub message: &'a str,
    /// Key hint shown under the message
    pub hint: Option<Vec<Span<'a>>>,
    /// Widest the dialog may grow, borders included
    pub max_width: u16,
}

/// Clear a centered box and draw the dialog into it
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let text_width = config.max_width.saturating_sub(PADDING + 2).max(1) as usize;
    let body = wrap_text(config.message, text_width);

    let widest = body
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(config.title.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let width = (widest + PADDING + 2).min(config.max_width);
    let height = (body.len() as u16 + hint_rows + 4).max(5);

    let area = centered(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let title_style = Style::default()
        .fg(config.title_color)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(Line::from(Span::styled(config.title, title_style)));
    lines.push(Line::default());
    lines.extend(body.into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        lines.push(Line::default());
        lines.push(Line::from(hint));
    }

    let background = Style::default().bg(Color::Black);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.border_color))
        .style(background);
    frame.render_widget(Paragraph::new(lines).block(block).style(background), area);
}

/// A `width` x `height` box in the middle of `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap; each `\n` separated paragraph wraps on its own
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = line.chars().count() + word.chars().count() + usize::from(!line.is_empty());
            if needed > max_width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }

    lines
}
