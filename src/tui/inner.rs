// src/tui/inner.rs  —  ratatui layout
use anyhow::Result;
use crossterm::{execute, terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use crate::data;
use crate::i18n::Catalog;
use crate::recommend::{self, RiskCategory};
use crate::theme::Palette;
use crate::{AppState, Page, SettingsField};
use std::io::stdout;

pub struct Tui {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen)?;
        let backend  = CrosstermBackend::new(out);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn cleanup(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }

    pub fn draw(&mut self, s: &AppState, cat: &Catalog) -> Result<()> {
        let pal = Palette::for_theme(s.session.theme);
        self.terminal.draw(|f| {
            let area = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),  // header: title + subtitle
                    Constraint::Length(1),  // navigation tabs
                    Constraint::Min(10),    // page body
                    Constraint::Length(1),  // status footer
                ])
                .split(area);

            draw_header(f, chunks[0], s, cat, &pal);
            draw_nav(f, chunks[1], s, cat, &pal);
            match s.page {
                Page::Dashboard => draw_dashboard(f, chunks[2], s, cat, &pal),
                Page::Settings  => draw_settings(f, chunks[2], s, cat, &pal),
            }
            draw_footer(f, chunks[3], s, cat, &pal);
        })?;
        Ok(())
    }
}

// ── Header ────────────────────────────────────────────────────────────────────
fn draw_header(f: &mut Frame, area: Rect, s: &AppState, cat: &Catalog, pal: &Palette) {
    let lang = s.session.language;
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            cat.resolve("app_title", lang),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(cat.resolve("app_subtitle", lang)),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(pal.header_fg).bg(pal.header_bg));
    f.render_widget(header, area);
}

// ── Navigation tabs ───────────────────────────────────────────────────────────
fn draw_nav(f: &mut Frame, area: Rect, s: &AppState, cat: &Catalog, pal: &Palette) {
    let lang = s.session.language;
    let tab = |page: Page, label: &'static str| {
        let style = if s.page == page {
            Style::default().fg(pal.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(pal.dim)
        };
        Span::styled(format!(" {} ", cat.resolve(label, lang)), style)
    };
    let nav = Line::from(vec![
        tab(Page::Dashboard, "dashboard"),
        Span::styled("│", Style::default().fg(pal.dim)),
        tab(Page::Settings, "settings"),
    ]);
    f.render_widget(Paragraph::new(nav), area);
}

// ── Dashboard page ────────────────────────────────────────────────────────────
fn draw_dashboard(f: &mut Frame, area: Rect, s: &AppState, cat: &Catalog, pal: &Palette) {
    let lang = s.session.language;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // overview title
            Constraint::Length(5),  // metric cards
            Constraint::Min(8),     // charts
            Constraint::Min(9),     // assessments + guidance
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        cat.resolve("system_overview", lang),
        Style::default().fg(pal.accent).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    draw_metric_cards(f, chunks[1], s, cat, pal);

    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);
    draw_subject_chart(f, mid[0], s, cat, pal);
    draw_risk_distribution(f, mid[1], s, cat, pal);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);
    draw_assessment_table(f, bottom[0], s, cat, pal);
    draw_guidance(f, bottom[1], s, cat, pal);
}

fn draw_metric_cards(f: &mut Frame, area: Rect, s: &AppState, cat: &Catalog, pal: &Palette) {
    let lang = s.session.language;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);
    for (metric, col) in data::OVERVIEW.iter().zip(cols.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                metric.value.to_string(),
                Style::default().fg(pal.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(metric.delta, Style::default().fg(pal.dim))),
        ])
        .block(Block::default()
            .title(format!(" {} ", cat.resolve(metric.key, lang)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(pal.border)));
        f.render_widget(card, *col);
    }
}

fn draw_subject_chart(f: &mut Frame, area: Rect, s: &AppState, cat: &Catalog, pal: &Palette) {
    let lang = s.session.language;
    let bars: Vec<(&str, u64)> = data::SUBJECT_SCORES
        .iter()
        .map(|sc| (sc.subject, sc.average as u64))
        .collect();
    let chart = BarChart::default()
        .block(Block::default()
            .title(format!(" {} ", cat.resolve("average_subject_scores", lang)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(pal.border)))
        .data(bars.as_slice())
        .bar_width(8)
        .bar_gap(1)
        .max(100)
        .bar_style(Style::default().fg(pal.accent))
        .value_style(Style::default().fg(pal.header_fg).bg(pal.accent));
    f.render_widget(chart, area);
}

fn draw_risk_distribution(f: &mut Frame, area: Rect, s: &AppState, cat: &Catalog, pal: &Palette) {
    let lang = s.session.language;
    let total: u32 = data::RISK_DISTRIBUTION.iter().map(|(_, n)| n).sum();
    let band_colors = [pal.good, pal.warn, pal.bad];
    let lines: Vec<Line> = data::RISK_DISTRIBUTION
        .iter()
        .zip(band_colors)
        .map(|((key, count), color)| {
            let pct = count * 100 / total.max(1);
            Line::from(vec![
                Span::styled(
                    format!("{:<24}", cat.resolve(key, lang)),
                    Style::default().fg(pal.text),
                ),
                Span::styled(format!("{count:>4}  "), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled("█".repeat((pct / 5) as usize), Style::default().fg(color)),
                Span::styled(format!(" {pct}%"), Style::default().fg(pal.dim)),
            ])
        })
        .collect();
    let block = Paragraph::new(lines)
        .block(Block::default()
            .title(format!(" {} ", cat.resolve("student_risk_overview", lang)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(pal.border)))
        .wrap(Wrap { trim: true });
    f.render_widget(block, area);
}

fn risk_color(pal: &Palette, risk: RiskCategory) -> ratatui::style::Color {
    match risk {
        RiskCategory::Low    => pal.good,
        RiskCategory::Medium => pal.warn,
        RiskCategory::High   => pal.bad,
    }
}

fn draw_assessment_table(f: &mut Frame, area: Rect, s: &AppState, cat: &Catalog, pal: &Palette) {
    let lang = s.session.language;
    let header = Row::new(
        ["student_name", "grade", "math_score", "reading_score", "science_score", "risk_level", "assessment_date"]
            .map(|key| Cell::from(cat.resolve(key, lang))),
    )
    .style(Style::default().fg(pal.accent).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = data::RECENT_ASSESSMENTS
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.name),
                Cell::from(r.grade),
                Cell::from(r.math.to_string()),
                Cell::from(r.reading.to_string()),
                Cell::from(r.science.to_string()),
                Cell::from(r.risk.as_str()).style(Style::default().fg(risk_color(pal, r.risk))),
                Cell::from(r.date),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(20),
        Constraint::Percentage(10),
        Constraint::Percentage(12),
        Constraint::Percentage(13),
        Constraint::Percentage(13),
        Constraint::Percentage(12),
        Constraint::Percentage(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default()
            .title(format!(" {} ", cat.resolve("recent_assessment_results", lang)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(pal.border)))
        .highlight_style(Style::default().fg(pal.accent).add_modifier(Modifier::BOLD))
        .highlight_symbol("▸ ");

    let mut state = TableState::default();
    state.select(Some(s.selected_row));
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_guidance(f: &mut Frame, area: Rect, s: &AppState, cat: &Catalog, pal: &Palette) {
    let lang = s.session.language;
    let row = &data::RECENT_ASSESSMENTS[s.selected_row.min(data::RECENT_ASSESSMENTS.len() - 1)];
    let lines: Vec<Line> = recommend::recommendations(row.risk)
        .iter()
        .map(|item| Line::from(vec![
            Span::styled("• ", Style::default().fg(risk_color(pal, row.risk))),
            Span::styled(*item, Style::default().fg(pal.text)),
        ]))
        .collect();
    let block = Paragraph::new(lines)
        .block(Block::default()
            .title(format!(" {}: {} — {} ", cat.resolve("risk_level", lang), row.risk.as_str(), row.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(risk_color(pal, row.risk))))
        .wrap(Wrap { trim: true });
    f.render_widget(block, area);
}

// ── Settings page ─────────────────────────────────────────────────────────────
fn draw_settings(f: &mut Frame, area: Rect, s: &AppState, cat: &Catalog, pal: &Palette) {
    let lang = s.session.language;
    let block = Block::default()
        .title(format!(" {} ", cat.resolve("settings", lang)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(pal.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // language
            Constraint::Length(2),  // theme
            Constraint::Length(2),  // offline mode
            Constraint::Min(0),
            Constraint::Length(2),  // key hints
        ])
        .split(inner);

    settings_row(
        f, rows[0], pal,
        s.field == SettingsField::Language,
        cat.resolve("language", lang),
        cat.language_name(s.pending.language),
    );
    settings_row(
        f, rows[1], pal,
        s.field == SettingsField::Theme,
        cat.resolve("theme", lang),
        s.pending.theme.as_str(),
    );
    settings_row(
        f, rows[2], pal,
        s.field == SettingsField::Offline,
        cat.resolve("offline_mode", lang),
        if s.pending.offline_mode { "[x]" } else { "[ ]" },
    );

    let hints = Paragraph::new(Line::from(Span::styled(
        format!(
            " ↑/↓  ←/→   Enter = {}   R = {}   Tab = {} ",
            cat.resolve("save_settings", lang),
            cat.resolve("reset_app", lang),
            cat.resolve("dashboard", lang),
        ),
        Style::default().fg(pal.dim),
    )));
    f.render_widget(hints, rows[4]);
}

fn settings_row(f: &mut Frame, area: Rect, pal: &Palette, selected: bool, label: &str, value: &str) {
    let marker = if selected { "▸ " } else { "  " };
    let label_style = if selected {
        Style::default().fg(pal.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(pal.text)
    };
    let line = Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(pal.accent)),
        Span::styled(format!("{label:<36}"), label_style),
        Span::styled(value.to_string(), Style::default().fg(pal.accent)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

// ── Footer ────────────────────────────────────────────────────────────────────
fn draw_footer(f: &mut Frame, area: Rect, s: &AppState, cat: &Catalog, pal: &Palette) {
    let lang = s.session.language;
    let connectivity = if s.session.offline_mode { "status_offline" } else { "status_online" };
    let mut spans = vec![
        Span::styled(
            format!(" {}  |  {} ", cat.resolve("app_title", lang), cat.resolve(connectivity, lang)),
            Style::default().fg(pal.dim),
        ),
    ];
    if let Some(key) = s.status_key {
        let color = match key {
            "settings_save_failed" => pal.bad,
            "app_reset"            => pal.warn,
            _                      => pal.good,
        };
        spans.push(Span::styled(
            format!(" {} ", cat.resolve(key, lang)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled("  Q / Esc = quit", Style::default().fg(pal.dim)));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
