use portfolio_core::chart::OUTER_RADIUS;
use portfolio_core::grid::{self, CellRect};
use portfolio_core::ChartModel;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::ui::theme::{rgb, Palette};

/// Canvas samples per axis, chosen to fill braille cells at usual sizes.
const SAMPLES: u32 = 120;

const fn cells(rect: Rect) -> CellRect {
    CellRect::new(rect.x, rect.y, rect.width, rect.height)
}

const fn rect(cells: CellRect) -> Rect {
    Rect::new(cells.x, cells.y, cells.width, cells.height)
}

pub fn pie_square(inner: Rect) -> Rect {
    rect(grid::pie_square(cells(inner)))
}

fn pie_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted())
        .title("Projects by year")
}

pub fn render_pie(chart: &ChartModel, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let block = pie_block(palette);
    let square = pie_square(block.inner(area));
    f.render_widget(block, area);

    if chart.slices.is_empty() || square.height == 0 {
        return;
    }

    let coords = chart.sample_points(SAMPLES);

    let colors: Vec<_> = chart
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

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-OUTER_RADIUS, OUTER_RADIUS])
        .y_bounds([-OUTER_RADIUS, OUTER_RADIUS])
        .paint(move |ctx| {
            for (points, color) in coords.iter().zip(&colors) {
                ctx.draw(&Points {
                    coords: points.as_slice(),
                    color: *color,
                });
            }
        });
    f.render_widget(canvas, square);
}

/// Bucket under a click inside the pie panel at `area`.
pub fn bucket_at(chart: &ChartModel, area: Rect, position: Position) -> Option<usize> {
    let square = grid::pie_square(cells(area).inner());
    grid::pie_cell_bucket(chart, square, position.x, position.y)
}

pub fn render_legend(
    chart: &ChartModel,
    cursor: usize,
    focused: bool,
    palette: &Palette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let items: Vec<ListItem<'_>> = chart
        .legend
        .iter()
        .map(|entry| {
            let selected = chart.is_selected(entry.index);
            let swatch = if selected { palette.selected } else { rgb(entry.color) };
            let mut label_style = Style::default();
            if selected {
                label_style = label_style
                    .fg(palette.selected)
                    .add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(swatch)),
                Span::styled(entry.label.clone(), label_style),
                Span::styled(format!(" ({})", entry.count), palette.muted()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(focused))
                .title("Legend"),
        )
        .highlight_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

    let mut state = ListState::default().with_offset(legend_offset(area, cursor));
    if focused && !chart.legend.is_empty() {
        state.select(Some(cursor));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn legend_offset(area: Rect, cursor: usize) -> usize {
    grid::legend_offset(cursor, usize::from(cells(area).inner().height))
}

/// Legend entry under a click inside the legend panel at `area`, with the
/// list scrolled to keep `cursor` on screen.
pub fn legend_at(
    chart: &ChartModel,
    area: Rect,
    cursor: usize,
    position: Position,
) -> Option<usize> {
    let offset = legend_offset(area, cursor);
    grid::legend_row_bucket(chart, cells(area).inner(), offset, position.x, position.y)
}
