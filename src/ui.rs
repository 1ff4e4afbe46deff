//! Terminal UI using ratatui
//!
//! Pure presentation: everything here maps already-fetched state onto
//! widgets. Missing data becomes its display sentinel ("N/A", empty
//! trailer, placeholder poster) at this layer and nowhere else.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, AppState};
use crate::search::EnrichedMovie;
use crate::tmdb_search;

/// Lines each result occupies in the list, including the trailing blank
const RESULT_ITEM_LINES: usize = 6;

/// Draw the main UI
pub fn draw_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Status line
            Constraint::Min(10),   // Results / recent searches
            Constraint::Length(3), // Help bar
        ])
        .split(f.area());

    draw_search_input(f, app, chunks[0]);
    draw_status_line(f, app, chunks[1]);

    match app.state {
        AppState::Input => {
            draw_recent_searches(f, app, chunks[2]);
        }
        AppState::Results => {
            draw_results(f, app, chunks[2]);
        }
        AppState::Searching => {
            draw_searching(f, chunks[2]);
        }
        AppState::Error => {
            draw_error(f, app, chunks[2]);
        }
    }

    draw_help_bar(f, app, chunks[3]);
}

/// Draw search input field
fn draw_search_input(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.state == AppState::Input && app.history_index.is_none();

    let style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(app.input.as_str()).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " Movie Search ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(if is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            }),
    );

    f.render_widget(input, area);

    if is_focused {
        f.set_cursor_position((area.x + app.input.chars().count() as u16 + 1, area.y + 1));
    }
}

/// Draw the one-line status message
fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.status_message.starts_with("Warning:") {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let status = Paragraph::new(app.status_message.as_str()).style(style);
    f.render_widget(status, area);
}

/// Draw the recent-searches panel shown in input mode
fn draw_recent_searches(f: &mut Frame, app: &App, area: Rect) {
    let recent = app.history.list();

    if recent.is_empty() {
        let hint = Paragraph::new("Type a movie title above and press Enter")
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Recent Searches ")
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = recent
        .iter()
        .enumerate()
        .map(|(i, query)| {
            let is_selected = app.history_index == Some(i);
            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(format!(" {}", query), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " Recent Searches ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::Gray)),
    );

    f.render_widget(list, area);
}

/// Draw enriched movie results
fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let items_per_screen = (visible_height / RESULT_ITEM_LINES).max(1);
    let scroll_offset = app.scroll_offset(items_per_screen);

    let items: Vec<ListItem> = app
        .movies
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(items_per_screen + 1)
        .map(|(i, movie)| movie_list_item(i, movie, i == app.selected_index))
        .collect();

    let title = format!(" Results ({}) ", app.movies.len());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(list, area);
}

/// Build the list entry for one movie
fn movie_list_item(index: usize, movie: &EnrichedMovie, is_selected: bool) -> ListItem<'static> {
    let number = format!("{:2}.", index + 1);
    let heading = format!(
        "{} ({})",
        movie.hit.title,
        release_year(movie.hit.release_date.as_deref())
    );

    let content = vec![
        Line::from(vec![
            Span::styled(number, Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(
                heading,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled("IMDb: ", Style::default().fg(Color::Yellow)),
            Span::raw(format_rating(movie.imdb_rating.as_deref()).to_string()),
            Span::raw("  "),
            Span::styled("Rotten Tomatoes: ", Style::default().fg(Color::Red)),
            Span::raw(format_rating(movie.rotten_tomatoes_rating.as_deref()).to_string()),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                truncate(format_overview(movie.hit.overview.as_deref()), 100),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                truncate(&tmdb_search::poster_url(movie.hit.poster_path.as_deref()), 80),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                truncate(format_trailer(movie.trailer_url.as_deref()), 80),
                Style::default().fg(Color::Blue),
            ),
        ]),
        Line::raw(""),
    ];

    let style = if is_selected {
        Style::default()
            .bg(Color::Rgb(35, 35, 45))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    ListItem::new(content).style(style)
}

/// Draw searching indicator
fn draw_searching(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Searching...")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

/// Draw error message
fn draw_error(f: &mut Frame, app: &App, area: Rect) {
    let error_text = app.error_message.as_deref().unwrap_or("Unknown error");

    let paragraph = Paragraph::new(format!("{}\n\nPress any key to continue...", error_text))
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " Error ",
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

/// Draw help bar
fn draw_help_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.state {
        AppState::Input => {
            "Enter: Search │ ↑/↓: Recent searches │ Esc: Clear │ Ctrl+Q: Quit"
        }
        AppState::Results => {
            "↑/k ↓/j: Navigate │ Enter: Open trailer │ Esc: New search │ Ctrl+Q: Quit"
        }
        AppState::Searching => "Please wait... │ Ctrl+Q: Quit",
        AppState::Error => "Press any key to continue │ Ctrl+Q: Quit",
    };

    let paragraph = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

/// Display form of a rating that may be absent
fn format_rating(rating: Option<&str>) -> &str {
    rating.unwrap_or("N/A")
}

/// Display form of a trailer URL that may be absent
fn format_trailer(url: Option<&str>) -> &str {
    url.unwrap_or("")
}

/// Display form of an overview that may be absent or blank
fn format_overview(overview: Option<&str>) -> &str {
    match overview {
        Some(text) if !text.is_empty() => text,
        _ => "No overview available.",
    }
}

/// Year part of a release date, "N/A" when the date is missing or blank
fn release_year(release_date: Option<&str>) -> String {
    match release_date {
        Some(date) if !date.is_empty() => {
            date.split('-').next().unwrap_or("N/A").to_string()
        }
        _ => "N/A".to_string(),
    }
}

/// Truncate string to max length
fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();

    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating_sentinel() {
        assert_eq!(format_rating(Some("8.7")), "8.7");
        assert_eq!(format_rating(None), "N/A");
    }

    #[test]
    fn test_format_trailer_sentinel() {
        assert_eq!(
            format_trailer(Some("https://www.youtube.com/embed/abc")),
            "https://www.youtube.com/embed/abc"
        );
        assert_eq!(format_trailer(None), "");
    }

    #[test]
    fn test_format_overview_default() {
        assert_eq!(format_overview(Some("A hacker learns...")), "A hacker learns...");
        assert_eq!(format_overview(Some("")), "No overview available.");
        assert_eq!(format_overview(None), "No overview available.");
    }

    #[test]
    fn test_release_year() {
        assert_eq!(release_year(Some("1999-03-30")), "1999");
        assert_eq!(release_year(Some("")), "N/A");
        assert_eq!(release_year(None), "N/A");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("0123456789", 8), "01234...");
    }
}
