use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

use crate::{
    models::{BadgeTier, LeaderboardSnapshot, Period},
    tui::app::App,
    utils::{format_date, format_number},
};

const SKELETON_ROWS: usize = 5;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.size());

    draw_header(frame, chunks[0]);
    draw_blurb(frame, chunks[1]);
    draw_period_selector(frame, app, chunks[2]);
    draw_summary(frame, app, chunks[3]);

    if app.view.has_error() {
        draw_error(frame, chunks[4]);
    } else {
        draw_table(frame, app, chunks[4]);
    }

    draw_footer(frame, app, chunks[5]);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "🏆 LTV Points Leaderboard",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Top users by points earned",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn draw_blurb(frame: &mut Frame, area: Rect) {
    let blurb = Paragraph::new(vec![
        Line::from("Points are awarded for participating in the LTV Protocol's first production vault — the wstETH (Lido) ↔ ETH Vault."),
        Line::from("LTV leverage token holders earn points depending on the position size and duration."),
        Line::from(Span::styled(
            "42 NFT holders receive a 42% points boost.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .style(Style::default().fg(Color::Gray))
    .wrap(Wrap { trim: true });
    frame.render_widget(blurb, area);
}

fn draw_period_selector(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let titles: Vec<Line> = Period::ALL.iter().map(|p| Line::from(p.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.period.index())
        .block(Block::default().borders(Borders::ALL).title("Period (Tab)"))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[0]);

    let hint = if app.range_options().is_empty() {
        "Range"
    } else {
        "Range ([ older, ] newer)"
    };
    let range = Paragraph::new(app.range_label())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(hint));
    frame.render_widget(range, chunks[1]);
}

fn draw_summary(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let snapshot = app.view.data();
    let loading = app.view.is_loading();

    let total = if loading {
        skeleton_line(18)
    } else {
        let points = snapshot.map(|s| s.points_distributed).unwrap_or(0);
        Line::from(vec![
            Span::styled(
                format_number(points),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" points", Style::default().fg(Color::Gray)),
        ])
    };
    let total = Paragraph::new(total).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("📈 Total Points Distributed", Style::default().fg(Color::Green))),
    );
    frame.render_widget(total, chunks[0]);

    let distribution = if loading {
        skeleton_line(14)
    } else {
        let label = snapshot
            .map(|s| format_date(s.next_distribution, app.today()))
            .unwrap_or_else(|| "N/A".to_string());
        Line::from(Span::styled(
            label,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
    };
    let distribution = Paragraph::new(distribution).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("📅 Distribution", Style::default().fg(Color::Blue))),
    );
    frame.render_widget(distribution, chunks[1]);
}

fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("RANK"),
        Cell::from("USER"),
        Cell::from("BADGES"),
        Cell::from(Line::from("POINTS").alignment(Alignment::Right)),
    ])
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = match app.view.data() {
        Some(snapshot) if !app.view.is_loading() => entry_rows(snapshot, app.scroll),
        _ => skeleton_rows(),
    };

    let widths = [
        Constraint::Length(8),
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(16),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Leaderboard"));
    frame.render_widget(table, area);
}

fn entry_rows(snapshot: &LeaderboardSnapshot, scroll: usize) -> Vec<Row<'_>> {
    snapshot
        .entries
        .iter()
        .skip(scroll)
        .map(|entry| {
            let rank = match entry.medal() {
                Some(medal) => format!("{} {}", entry.rank, medal),
                None => entry.rank.to_string(),
            };
            Row::new(vec![
                Cell::from(rank).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(entry.display_name()).style(Style::default().fg(Color::Blue)),
                Cell::from(entry.badge_tier.as_str()).style(tier_style(entry.badge_tier)),
                Cell::from(
                    Line::from(format_number(entry.points)).alignment(Alignment::Right),
                )
                .style(Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect()
}

fn skeleton_rows() -> Vec<Row<'static>> {
    (0..SKELETON_ROWS)
        .map(|_| {
            Row::new(vec![
                Cell::from(skeleton_line(3)),
                Cell::from(skeleton_line(14)),
                Cell::from(skeleton_line(8)),
                Cell::from(skeleton_line(10).alignment(Alignment::Right)),
            ])
        })
        .collect()
}

fn skeleton_line(width: usize) -> Line<'static> {
    Line::from(Span::styled(
        "░".repeat(width),
        Style::default().fg(Color::DarkGray),
    ))
}

fn tier_style(tier: BadgeTier) -> Style {
    let color = match tier {
        BadgeTier::Diamond => Color::Cyan,
        BadgeTier::Platinum => Color::White,
        BadgeTier::Gold => Color::Yellow,
        BadgeTier::Silver => Color::Gray,
        BadgeTier::Bronze => Color::Rgb(205, 127, 50),
    };
    Style::default().fg(color)
}

fn draw_error(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from("Unable to load leaderboard data. Please try again."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("r", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" to retry"),
        ]),
    ];
    let error = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Leaderboard"));
    frame.render_widget(error, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(vec![
        Span::styled("w/m/a", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" period | "),
        Span::styled("↑/↓", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" scroll | "),
        Span::styled("r", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" reload | "),
        Span::styled("q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" quit"),
    ])];

    if !app.view.is_loading() && !app.view.has_error() {
        lines.push(Line::from(Span::styled(
            "LTV Points Leaderboard. Powered by leverage, patience, and bad sleep.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let footer = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
