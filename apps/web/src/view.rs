use std::rc::Rc;

use portfolio_core::chart::OUTER_RADIUS;
use portfolio_core::grid::{self, CellRect};
use portfolio_core::{CardList, ChartModel, ColorScheme, Focus, Screen, Site};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph, Tabs, Wrap,
    },
    Frame,
};

const PIE_SAMPLES: u32 = 100;

#[derive(Clone, Copy)]
struct Palette {
    fg: Color,
    bg: Color,
    muted: Color,
    accent: Color,
    selected: Color,
}

impl Palette {
    const fn for_scheme(scheme: ColorScheme, prefers_dark: bool) -> Self {
        let colors = scheme.palette(prefers_dark);
        Self {
            fg: rgb(colors.fg),
            bg: rgb(colors.bg),
            muted: rgb(colors.muted),
            accent: rgb(colors.accent),
            selected: rgb(colors.selected),
        }
    }

    fn border(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.accent } else { self.muted })
    }
}

const fn rgb(color: portfolio_core::Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

const fn cells(rect: Rect) -> CellRect {
    CellRect::new(rect.x, rect.y, rect.width, rect.height)
}

const fn rect(cells: CellRect) -> Rect {
    Rect::new(cells.x, cells.y, cells.width, cells.height)
}

/// Header, body and key hint rows inside the page frame.
fn frame_layout(area: Rect) -> Rc<[Rect]> {
    let inner = Block::default()
        .borders(Borders::ALL)
        .inner(area)
        .inner(Margin::new(1, 0));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner)
}

struct ProjectsLayout {
    search: Rect,
    pie: Rect,
    legend: Rect,
    cards: Rect,
}

fn projects_layout(body: Rect) -> ProjectsLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(body);
    let chart = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(rows[1]);
    ProjectsLayout {
        search: rows[0],
        pie: chart[0],
        legend: chart[1],
        cards: rows[2],
    }
}

fn legend_offset(site: &Site, legend: Rect) -> usize {
    grid::legend_offset(site.legend_cursor, usize::from(cells(legend).inner().height))
}

/// What a click lands on in the year chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartHit {
    Slice(usize),
    Legend(usize),
}

/// The slice or legend entry drawn at `(col, row)` of a frame of size `area`.
pub fn chart_hit(site: &Site, area: Rect, col: u16, row: u16) -> Option<ChartHit> {
    if site.screen != Screen::Projects {
        return None;
    }
    let layout = projects_layout(frame_layout(area)[1]);
    let square = grid::pie_square(cells(layout.pie).inner());
    if let Some(index) = grid::pie_cell_bucket(&site.chart, square, col, row) {
        return Some(ChartHit::Slice(index));
    }
    let offset = legend_offset(site, layout.legend);
    grid::legend_row_bucket(&site.chart, cells(layout.legend).inner(), offset, col, row)
        .map(ChartHit::Legend)
}

pub fn render(site: &Site, prefers_dark: bool, f: &mut Frame<'_>) {
    let palette = Palette::for_scheme(site.scheme, prefers_dark);
    let area = f.area();
    let block = Block::default()
        .title(site.screen.title())
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .style(Style::default().fg(palette.fg).bg(palette.bg));
    f.render_widget(block, area);
    let layout = frame_layout(area);

    render_header(site, &palette, f, layout[0]);
    match site.screen {
        Screen::Home => render_home(site, &palette, f, layout[1]),
        Screen::Projects => render_projects(site, &palette, f, layout[1]),
        Screen::Contact => render_contact(site, &palette, f, layout[1]),
    }

    let hints = Paragraph::new(TextLine::from(Span::styled(
        "Tab focus · ←/→ nav or theme · Enter open · ↑/↓ legend & fields",
        Style::default().fg(palette.muted),
    )))
    .alignment(Alignment::Center);
    f.render_widget(hints, layout[2]);
}

fn render_header(site: &Site, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(area);

    let nav_focused = site.focus == Focus::Nav;
    let titles: Vec<TextLine<'_>> = site
        .links
        .iter()
        .map(|link| {
            let style = if link.current {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            TextLine::from(Span::styled(link.title.clone(), style))
        })
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(nav_focused)),
        )
        .select(site.nav_cursor)
        .highlight_style(if nav_focused {
            Style::default().fg(Color::White).bg(palette.accent)
        } else {
            Style::default()
        })
        .divider(Span::raw("|"));
    f.render_widget(tabs, chunks[0]);

    let theme_focused = site.focus == Focus::Theme;
    let label = if theme_focused {
        format!("◀ {} ▶", site.scheme.label())
    } else {
        site.scheme.label().to_string()
    };
    let theme = Paragraph::new(label).block(
        Block::default()
            .title("Theme")
            .borders(Borders::ALL)
            .border_style(palette.border(theme_focused)),
    );
    f.render_widget(theme, chunks[1]);
}

fn render_home(site: &Site, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    render_cards(&site.home_cards, "Latest Projects", palette, f, chunks[0]);

    let block = Block::default()
        .title(format!("GitHub @{}", site.config.github_user))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));
    let lines: Vec<TextLine<'_>> = site.stats.map_or_else(Vec::new, |stats| {
        stats
            .rows()
            .iter()
            .map(|(label, value)| {
                TextLine::from(vec![
                    Span::styled(
                        format!("{label:<14}"),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(value.to_string(), Style::default().fg(palette.accent)),
                ])
            })
            .collect()
    });
    f.render_widget(Paragraph::new(Text::from(lines)).block(block), chunks[1]);
}

fn render_projects(site: &Site, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let layout = projects_layout(area);

    let search_focused = site.focus == Focus::Search;
    let query = site.page.as_ref().map_or("", |page| page.query());
    let search_text = if query.is_empty() && !search_focused {
        Span::styled("🔍 Search projects…", Style::default().fg(palette.muted))
    } else if search_focused {
        Span::raw(format!("{query}▏"))
    } else {
        Span::raw(query.to_string())
    };
    let search = Paragraph::new(TextLine::from(search_text)).block(
        Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .border_style(palette.border(search_focused)),
    );
    f.render_widget(search, layout.search);

    render_pie(&site.chart, palette, f, layout.pie);
    render_legend(site, palette, f, layout.legend);

    if site.is_loading() {
        let loading = Paragraph::new("Loading projects…")
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted));
        f.render_widget(loading, layout.cards);
        return;
    }
    render_cards(&site.cards, &site.projects_title(), palette, f, layout.cards);
}

fn render_pie(chart: &ChartModel, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Projects by year")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let square = rect(grid::pie_square(cells(inner)));

    let coords = chart.sample_points(PIE_SAMPLES);
    let colors: Vec<Color> = chart
        .slices
        .iter()
        .map(|(slice, color)| {
            if chart.is_selected(slice.index) {
                palette.selected
            } else {
                rgb(*color)
            }
        })
        .collect();

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                for (points, color) in coords.iter().zip(&colors) {
                    ctx.draw(&Points {
                        coords: points.as_slice(),
                        color: *color,
                    });
                }
            })
            .x_bounds([-OUTER_RADIUS, OUTER_RADIUS])
            .y_bounds([-OUTER_RADIUS, OUTER_RADIUS]),
        square,
    );
}

fn render_legend(site: &Site, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let focused = site.focus == Focus::Legend;
    let lines: Vec<TextLine<'_>> = site
        .chart
        .legend
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let selected = site.chart.is_selected(entry.index);
            let swatch = if selected { palette.selected } else { rgb(entry.color) };
            let mut label = Style::default();
            if selected {
                label = label.fg(palette.selected).add_modifier(Modifier::BOLD);
            }
            if focused && row == site.legend_cursor {
                label = label.add_modifier(Modifier::REVERSED);
            }
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(swatch)),
                Span::styled(entry.label.clone(), label),
                Span::styled(
                    format!(" ({})", entry.count),
                    Style::default().fg(palette.muted),
                ),
            ])
        })
        .collect();

    let offset = u16::try_from(legend_offset(site, area)).unwrap_or(u16::MAX);
    let legend = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Legend")
                .borders(Borders::ALL)
                .border_style(palette.border(focused)),
        )
        .scroll((offset, 0));
    f.render_widget(legend, area);
}

fn render_cards(cards: &CardList, title: &str, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let mut lines = Vec::new();
    if let Some(message) = &cards.placeholder {
        lines.push(TextLine::from(Span::styled(
            message.clone(),
            Style::default().fg(palette.muted),
        )));
    }
    for card in &cards.cards {
        let mut heading = Style::default().add_modifier(Modifier::BOLD);
        if card.heading.depth() <= 2 {
            heading = heading.fg(palette.accent);
        }
        lines.push(TextLine::from(Span::styled(card.title.clone(), heading)));
        lines.push(TextLine::from(Span::styled(
            format!("[{}] {}", card.alt, card.image),
            Style::default().fg(palette.muted),
        )));
        lines.push(TextLine::from(card.description.clone()));
        if let Some(year) = &card.year {
            lines.push(TextLine::from(Span::styled(
                year.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(TextLine::from(""));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_contact(site: &Site, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let form = &site.contact;
    let mut constraints: Vec<Constraint> = (0..form.fields.len())
        .map(|index| {
            if index + 1 == form.fields.len() {
                Constraint::Min(5)
            } else {
                Constraint::Length(3)
            }
        })
        .collect();
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, field) in form.fields.iter().enumerate() {
        let focused = site.focus == Focus::Form && index == site.contact_cursor;
        let mut value = field.value.clone();
        if focused {
            value.push('▏');
        }
        let input = Paragraph::new(value).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(field.label.clone())
                .borders(Borders::ALL)
                .border_style(palette.border(focused)),
        );
        f.render_widget(input, rows[index]);
    }

    let hint = Paragraph::new(Span::styled(
        "Enter opens your mail client",
        Style::default().fg(palette.muted),
    ));
    f.render_widget(hint, rows[form.fields.len()]);
}
