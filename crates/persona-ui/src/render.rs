//! Carousel rendering
//!
//! Everything here is a pure function of the [`CarouselView`] snapshot and the
//! spinner tick, so it can be drawn into a `TestBackend`.

use persona_types::{Card, CarouselView};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::theme::*;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const CARD_MAX_WIDTH: u16 = 64;
const PANEL_MAX_WIDTH: u16 = 70;

pub fn render(frame: &mut Frame, view: &CarouselView, tick: usize) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header);

    match view {
        CarouselView::Loading => render_loading(frame, body, tick),
        CarouselView::Failed { message } => render_error(frame, body, message),
        CarouselView::Ready {
            card: Some(card),
            index,
            total,
            flipped,
        } => render_carousel(frame, body, card, *index, *total, *flipped),
        CarouselView::Ready { card: None, .. } => render_empty(frame, body),
    }

    render_footer(frame, footer, view);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(Span::styled(
        "DHL IT PERSONAS",
        Style::default()
            .fg(RED_BRAND)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    ))
    .centered();
    let subtitle = Line::from(Span::styled(
        "Discover the spirit animal of our IT professionals.",
        Style::default().fg(TEXT_SECONDARY),
    ))
    .centered();

    let header = Paragraph::new(vec![title, subtitle]).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(YELLOW_ACCENT)),
    );
    frame.render_widget(header, area);
}

fn render_loading(frame: &mut Frame, area: Rect, tick: usize) {
    let spinner = SPINNER[tick % SPINNER.len()];
    let lines = vec![
        Line::from(Span::styled(spinner, Style::default().fg(YELLOW_ACCENT))).centered(),
        Line::default(),
        Line::from(Span::styled(
            "Generating IT Personas with Gemini...",
            Style::default().fg(YELLOW_SOFT),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), middle(area, 3));
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let panel = centered(area, PANEL_MAX_WIDTH, 10);
    let lines = vec![
        Line::from(Span::styled(
            "An Error Occurred",
            Style::default().fg(RED_ERROR).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::default(),
        Line::from(Span::styled(message, Style::default().fg(RED_ERROR))).centered(),
        Line::default(),
        Line::from(vec![
            Span::styled(
                " r ",
                Style::default()
                    .fg(BG_PRIMARY)
                    .bg(YELLOW_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Try Again", Style::default().fg(YELLOW_ACCENT)),
        ])
        .centered(),
    ];

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::bordered()
            .border_style(Style::default().fg(RED_ERROR))
            .style(Style::default().bg(BG_ERROR)),
    );
    frame.render_widget(widget, panel);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        "No personas were generated.",
        Style::default().fg(TEXT_MUTED),
    ))
    .centered();
    frame.render_widget(Paragraph::new(line), middle(area, 1));
}

fn render_carousel(
    frame: &mut Frame,
    area: Rect,
    card: &Card,
    index: usize,
    total: usize,
    flipped: bool,
) {
    let [stage, counter] =
        Layout::vertical([Constraint::Min(6), Constraint::Length(1)]).areas(area);
    let [prev, card_area, next] = Layout::horizontal([
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(5),
    ])
    .areas(stage);

    let arrow = Style::default()
        .fg(YELLOW_ACCENT)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("◀", arrow)).centered()),
        middle(prev, 1),
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("▶", arrow)).centered()),
        middle(next, 1),
    );

    let card_rect = centered(card_area, CARD_MAX_WIDTH, card_area.height);
    if flipped {
        render_back(frame, card_rect, card);
    } else {
        render_front(frame, card_rect, card);
    }

    let counter_line = Line::from(Span::styled(
        format!("Card {} of {}", index + 1, total),
        Style::default()
            .fg(TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(Paragraph::new(counter_line), counter);
}

fn render_front(frame: &mut Frame, area: Rect, card: &Card) {
    let badges = card
        .generic_traits
        .iter()
        .flat_map(|t| {
            [
                Span::styled(
                    format!(" {t} "),
                    Style::default()
                        .fg(YELLOW_SOFT)
                        .bg(BG_BADGE)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();

    let lines = vec![
        Line::from(Span::styled(
            format!("▣ {}", card.image_url),
            Style::default().fg(TEXT_MUTED),
        ))
        .centered(),
        Line::default(),
        Line::from(Span::styled(
            card.animal_name.as_str(),
            Style::default()
                .fg(YELLOW_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::default(),
        Line::from(Span::styled(
            card.generic_description.as_str(),
            Style::default().fg(TEXT_SECONDARY),
        ))
        .centered(),
        Line::default(),
        Line::from(badges).centered(),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to reveal",
            Style::default().fg(TEXT_MUTED),
        ))
        .centered(),
    ];

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::bordered()
            .border_style(Style::default().fg(BORDER_CARD))
            .style(Style::default().bg(BG_CARD_FRONT)),
    );
    frame.render_widget(widget, area);
}

fn render_back(frame: &mut Frame, area: Rect, card: &Card) {
    let lines = vec![
        Line::from(Span::styled(
            "This persona is embodied by:",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::default(),
        Line::from(Span::styled(
            card.representative.as_str(),
            Style::default()
                .fg(YELLOW_SOFT)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled("────────", Style::default().fg(YELLOW_ACCENT))).centered(),
        Line::default(),
        Line::from(Span::styled(
            format!("\"{}\"", card.personalized_description),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::ITALIC),
        ))
        .centered(),
    ];

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::bordered()
            .border_style(Style::default().fg(YELLOW_ACCENT))
            .style(Style::default().bg(BG_CARD_BACK)),
    );
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &CarouselView) {
    let hints = match view {
        CarouselView::Ready { card: Some(_), .. } => {
            " Enter/Space: Flip | ←/h: Previous | →/l: Next | q: Quit "
        }
        CarouselView::Failed { .. } => " r: Try Again | q: Quit ",
        _ => " q: Quit ",
    };
    let footer =
        Paragraph::new(hints).style(Style::default().fg(BG_PRIMARY).bg(YELLOW_ACCENT));
    frame.render_widget(footer, area);
}

/// Horizontally centered rect of at most `width` x `height`
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

/// Full-width band of `height` rows in the vertical middle of `area`
fn middle(area: Rect, height: u16) -> Rect {
    centered(area, area.width, height)
}
