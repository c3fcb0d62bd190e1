use portfolio_core::{CardList, HeadingLevel, ProjectCard};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::Palette;

pub fn render_cards(
    cards: &CardList,
    title: &str,
    scroll: u16,
    palette: &Palette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let paragraph = Paragraph::new(card_lines(cards, palette))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.muted())
                .title(title.to_string()),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

/// One block of lines per card, or the placeholder when nothing matched.
pub fn card_lines(cards: &CardList, palette: &Palette) -> Vec<Line<'static>> {
    if let Some(message) = &cards.placeholder {
        return vec![Line::from(Span::styled(message.clone(), palette.muted()))];
    }

    let mut lines = Vec::new();
    for card in &cards.cards {
        lines.extend(card_block(card, palette));
        lines.push(Line::from(""));
    }
    lines
}

fn card_block(card: &ProjectCard, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(card.title.clone(), heading_style(card.heading, palette))),
        Line::from(Span::styled(
            format!("[{}] {}", card.alt, card.image),
            palette.muted(),
        )),
        Line::from(card.description.clone()),
    ];
    if let Some(year) = &card.year {
        lines.push(Line::from(Span::styled(
            year.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

fn heading_style(heading: HeadingLevel, palette: &Palette) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match heading.depth() {
        1 => style.fg(palette.accent).add_modifier(Modifier::UNDERLINED),
        2 => style.fg(palette.accent),
        _ => style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::palette;
    use portfolio_core::{ColorScheme, Project};

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn placeholder_replaces_cards() {
        let cards = CardList {
            cards: Vec::new(),
            placeholder: Some("No projects to display at this time.".to_string()),
        };
        let lines = card_lines(&cards, &palette(ColorScheme::Dark));
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), "No projects to display at this time.");
    }

    #[test]
    fn card_shows_fallback_image_and_year() {
        let project = Project::new("Weather Station", "Sensors on the roof", "2023");
        let cards = CardList {
            cards: vec![ProjectCard::from_project(&project, HeadingLevel::H2)],
            placeholder: None,
        };
        let lines = card_lines(&cards, &palette(ColorScheme::Light));
        let rendered: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(rendered[0], "Weather Station");
        assert_eq!(rendered[1], "[Weather Station] images/fallback.jpg");
        assert_eq!(rendered[2], "Sensors on the roof");
        assert_eq!(rendered[3], "2023");
    }
}
