//! UI rendering functions for the TUI.
//!
//! The whole frame is rebuilt from application state on every call, so
//! drawing the same state twice always produces the same buffer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use super::state::App;
use super::types::{Focus, Screen};
use crate::types::Episode;

/// Attribution shown under the episode list.
pub const ATTRIBUTION: &str = "Data originally from TVMaze.com";

/// The counter line, always visible: `Displaying {shown}/{total} episodes`.
pub fn counter_text(shown: usize, total: usize) -> String {
    format!("Displaying {}/{} episodes", shown, total)
}

/// Build the display lines for one episode card.
///
/// A missing image degrades to a placeholder line; the summary is shown
/// verbatim, markup included.
pub fn card_lines(episode: &Episode) -> Vec<Line<'static>> {
    let image_line = match &episode.image {
        Some(url) => Line::from(Span::styled(
            url.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(Span::styled(
            "(no image)",
            Style::default().fg(Color::DarkGray),
        )),
    };

    vec![
        Line::from(Span::styled(
            format!("{} - {}", episode.name, episode.code()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        image_line,
        Line::from(episode.summary.clone()),
        Line::from(""),
    ]
}

/// Draw the UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Content (selector + cards)
            Constraint::Length(4), // Footer (counter + attribution)
        ])
        .split(size);

    draw_header(frame, chunks[0]);
    draw_search_bar(frame, app, chunks[1]);

    match app.screen {
        Screen::Loading => draw_loading(frame, chunks[2]),
        Screen::LoadFailed => draw_load_failed(frame, app, chunks[2]),
        Screen::Browse => {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(34), // Selector (fixed width)
                    Constraint::Min(0),     // Episode cards
                ])
                .split(chunks[2]);

            draw_selector(frame, app, content_chunks[0]);
            draw_episode_cards(frame, app, content_chunks[1]);
        }
    }

    draw_footer(frame, app, chunks[3]);

    if let Some(error) = &app.error_message {
        draw_error_popup(frame, error);
    }
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "episode-browser",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "[/] search  [Tab] switch panel  [Enter] select  [Esc] show all  [q] quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let search_text = if app.search_input.is_empty() && !app.search_focused {
        "Press '/' to search..."
    } else {
        &app.search_input
    };

    let search = Paragraph::new(search_text)
        .style(if app.search_focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search")
                .border_style(border_style),
        );

    frame.render_widget(search, area);

    if app.search_focused {
        frame.set_cursor_position((area.x + app.search_input.len() as u16 + 1, area.y + 1));
    }
}

fn draw_selector(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_style = if app.focus == Focus::Selector {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let items: Vec<ListItem> = app
        .selector_options
        .iter()
        .map(|o| ListItem::new(o.label.clone()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Jump to episode")
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.selector_state);
}

fn draw_episode_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_style = if app.focus == Focus::Episodes {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let visible = app.visible_episodes();

    if visible.is_empty() {
        let empty = Paragraph::new("No matching episodes")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Episodes")
                    .border_style(border_style),
            );
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|e| ListItem::new(card_lines(e)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Episodes")
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.episode_list_state);
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading episodes...")
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Loading"));

    frame.render_widget(loading, area);
}

fn draw_load_failed(frame: &mut Frame, app: &App, area: Rect) {
    let message = app
        .load_error
        .as_deref()
        .unwrap_or("Could not load episodes");

    let error = Paragraph::new(format!("Error: {}", message))
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Load failed")
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(error, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            counter_text(app.shown_count(), app.total_count()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            ATTRIBUTION,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn draw_error_popup(frame: &mut Frame, error: &str) {
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(error)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Error")
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(popup, area);
}

/// Helper function to create a centered rect.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn episode(id: u64, name: &str, image: Option<&str>) -> Episode {
        Episode {
            id,
            name: name.to_string(),
            season: 1,
            number: id as u32,
            image: image.map(str::to_string),
            summary: format!("<p>Summary of {}.</p>", name),
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        app.set_catalog(Catalog::new(vec![
            episode(1, "Pilot", Some("https://img.example/1.jpg")),
            episode(2, "Second", None),
            episode(3, "Return", None),
        ]));
        app
    }

    fn render_once(app: &mut App) -> Buffer {
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for (i, cell) in buffer.content.iter().enumerate() {
            text.push_str(cell.symbol());
            if (i + 1) % width == 0 {
                text.push('\n');
            }
        }
        text
    }

    #[test]
    fn test_counter_text() {
        assert_eq!(counter_text(3, 3), "Displaying 3/3 episodes");
        assert_eq!(counter_text(0, 73), "Displaying 0/73 episodes");
        assert_eq!(counter_text(0, 0), "Displaying 0/0 episodes");
    }

    #[test]
    fn test_card_lines_include_name_code_and_summary() {
        let ep = episode(1, "Pilot", Some("https://img.example/1.jpg"));
        let lines = card_lines(&ep);
        assert_eq!(lines[0].to_string(), "Pilot - S01E01");
        assert_eq!(lines[1].to_string(), "https://img.example/1.jpg");
        assert_eq!(lines[2].to_string(), "<p>Summary of Pilot.</p>");
    }

    #[test]
    fn test_card_lines_missing_image_gets_placeholder() {
        let ep = episode(2, "Second", None);
        let lines = card_lines(&ep);
        assert_eq!(lines[1].to_string(), "(no image)");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut app = loaded_app();
        let first = render_once(&mut app);
        let second = render_once(&mut app);
        assert_eq!(first, second);
    }

    #[test]
    fn test_attribution_drawn_exactly_once() {
        let mut app = loaded_app();
        let text = buffer_text(&render_once(&mut app));
        assert_eq!(text.matches(ATTRIBUTION).count(), 1);

        // Still exactly one after re-rendering.
        let text = buffer_text(&render_once(&mut app));
        assert_eq!(text.matches(ATTRIBUTION).count(), 1);
    }

    #[test]
    fn test_counter_visible_with_zero_matches() {
        let mut app = loaded_app();
        app.search_focused = true;
        for c in "zzz".chars() {
            app.handle_input(crossterm::event::KeyEvent::new(
                crossterm::event::KeyCode::Char(c),
                crossterm::event::KeyModifiers::NONE,
            ));
        }

        let text = buffer_text(&render_once(&mut app));
        assert!(text.contains("Displaying 0/3 episodes"));
        assert!(text.contains("No matching episodes"));
    }

    #[test]
    fn test_load_failure_renders_error_and_zero_counter() {
        let mut app = App::new();
        app.set_load_error("Network error: connection refused");

        let text = buffer_text(&render_once(&mut app));
        assert!(text.contains("Error: Network error: connection refused"));
        assert!(text.contains("Displaying 0/0 episodes"));
    }
}
