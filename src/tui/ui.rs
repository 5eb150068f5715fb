//! UI rendering using ratatui
//!
//! One screen: root word header, text field, accepted words, score, and a
//! popup for rejected words.

use crate::app::{Alert, App};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Render the whole game screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with root word
            Constraint::Length(3), // Text field
            Constraint::Min(3),    // Used words
            Constraint::Length(3), // Score
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);
    render_input(frame, layout[1], app);
    render_used_words(frame, layout[2], app);
    render_score(frame, layout[3], app);
    render_footer(frame, layout[4], app);

    if let Some(alert) = &app.alert {
        render_alert(frame, area, alert);
    }
}

/// Render the header: game name and the root word
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Name
            Constraint::Min(10),    // Root word
            Constraint::Length(16), // Spacer, keeps the root word centred
        ])
        .split(inner);

    let name = Paragraph::new("WordScramble")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(name, header_layout[0]);

    let root = Paragraph::new(format_root_word(app.root_word()))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(root, header_layout[1]);
}

/// Render the text field
fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if app.input.is_empty() {
        ("Enter your word".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (format!("{}_", app.input), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(input, area);
}

/// Render the accepted words, most recent at the top
fn render_used_words(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .used_words()
        .iter()
        .map(|word| ListItem::new(format_used_word(word)).style(Style::default().fg(Color::Green)))
        .collect();

    let title = format!("Words ({})", app.used_words().len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title),
    );
    frame.render_widget(list, area);
}

fn render_score(frame: &mut Frame, area: Rect, app: &App) {
    let score = Paragraph::new(format!("Score: {}", app.score()))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(score, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.alert.is_some() {
        "Enter OK  Esc OK"
    } else {
        "Enter Submit  Ctrl-R Restart game  Esc Quit"
    };
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Render the alert popup over the centre of the screen
fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let popup = centered_rect(60, 7, area);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from("[ OK ]").style(Style::default().fg(Color::Yellow).bold()),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(alert.title.as_str()),
        );
    frame.render_widget(paragraph, popup);
}

/// A rect `percent_x` wide and `height` tall, centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Format the root word for the header
fn format_root_word(root: &str) -> String {
    root.to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A used word prefixed with its length
fn format_used_word(word: &str) -> String {
    format!("({}) {}", word.chars().count(), word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dictionary::Dictionary;
    use crate::game::roots::{RootWords, WordList};
    use ratatui::backend::TestBackend;

    fn test_app() -> App {
        let roots = RootWords::seeded(WordList::parse("silkworm\n"), 0);
        App::new(Box::new(Dictionary::embedded()), Box::new(roots))
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_format_root_word() {
        assert_eq!(format_root_word("silkworm"), "S I L K W O R M");
        assert_eq!(format_root_word(""), "");
    }

    #[test]
    fn test_format_used_word() {
        assert_eq!(format_used_word("silk"), "(4) silk");
        assert_eq!(format_used_word("wok"), "(3) wok");
    }

    #[test]
    fn test_renders_game_screen() {
        let mut app = test_app();
        for c in "milk".chars() {
            app.on_char(c);
        }
        app.on_submit();

        let text = screen_text(&app);
        assert!(text.contains("S I L K W O R M"));
        assert!(text.contains("(4) milk"));
        assert!(text.contains("Score: 2"));
        assert!(text.contains("Enter your word"));
    }

    #[test]
    fn test_renders_alert() {
        let mut app = test_app();
        for c in "ab".chars() {
            app.on_char(c);
        }
        app.on_submit();

        let text = screen_text(&app);
        assert!(text.contains("Not a valid word"));
        assert!(text.contains("[ OK ]"));
    }
}
