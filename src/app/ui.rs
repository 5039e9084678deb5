// Terminal rendering of the picker screen
//
// The board is a pixel canvas projected onto terminal cells. Drawing and mouse
// hit-testing share `ScreenLayout` so clicks land on what was drawn.

use crate::app::state::App;
use crate::grid::{Cell, GRID};
use crate::marker::{Direction, Point};
use crate::{CELL_SIZE, MARKER_SIZE};
use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

const BACKGROUND: Color = Color::Rgb(102, 51, 153);
const CELL_BG: Color = Color::White;
const MARKER_BG: Color = Color::Rgb(255, 182, 193);
const MARKER_BORDER: Color = Color::Rgb(64, 224, 208);
const BUTTON_WIDTH: u16 = 11;
const BUTTON_HEIGHT: u16 = 3;

/// Maps board pixels to terminal cells and back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardProjection {
    pub area: Rect,
    pub px_per_col: f64,
    pub px_per_row: f64,
}

impl BoardProjection {
    /// Terminal rect covering the pixel box at (x, y) with the given size,
    /// clipped to the board. None when nothing is visible.
    pub fn rect_for(&self, x: f64, y: f64, width: f64, height: f64) -> Option<Rect> {
        let col = (x / self.px_per_col).floor().max(0.0) as u16;
        let row = (y / self.px_per_row).floor().max(0.0) as u16;
        let cols = ((width / self.px_per_col).round() as u16).max(1);
        let rows = ((height / self.px_per_row).round() as u16).max(1);
        let rect = Rect::new(
            self.area.x.saturating_add(col),
            self.area.y.saturating_add(row),
            cols,
            rows,
        )
        .intersection(self.area);
        (rect.width > 0 && rect.height > 0).then_some(rect)
    }

    /// Pixel at the centre of terminal cell (column, row). Positions outside the
    /// board are projected anyway so a drag can run past the edge.
    pub fn pixel_at(&self, column: u16, row: u16) -> Point {
        let dx = column as f64 - self.area.x as f64 + 0.5;
        let dy = row as f64 - self.area.y as f64 + 0.5;
        Point::new(dx * self.px_per_col, dy * self.px_per_row)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }
}

/// Where every part of the screen goes for a given terminal size
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub board_frame: Rect,
    pub board: BoardProjection,
    pub question: Rect,
    pub number: Rect,
    pub size_bar: Rect,
    pub buttons: Vec<(Direction, Rect)>,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, app: &App) -> Self {
        let display = &app.config().display;
        let extent = GRID.extent().max(app.marker().bounds().max_x + MARKER_SIZE);
        // Clamped to the terminal before adding the frame so a huge board cannot overflow
        let board_cols = ((extent / display.px_per_col).ceil() as u16).min(area.width);
        let board_rows = ((GRID.extent() / display.px_per_row).ceil() as u16).min(area.height);
        let frame_cols = board_cols.saturating_add(2);
        let frame_rows = board_rows.saturating_add(2);

        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(1),                 // Header
                Constraint::Length(frame_rows),        // Board
                Constraint::Length(1),                 // Question
                Constraint::Length(1),                 // Number
                Constraint::Length(1),                 // Size bar
                Constraint::Length(BUTTON_HEIGHT * 3), // Buttons
                Constraint::Min(0),
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let board_frame = centered(chunks[1], frame_cols, frame_rows);
        let board_inner = Block::default().borders(Borders::ALL).inner(board_frame);

        Self {
            header: chunks[0],
            board_frame,
            board: BoardProjection {
                area: board_inner,
                px_per_col: display.px_per_col,
                px_per_row: display.px_per_row,
            },
            question: chunks[2],
            number: chunks[3],
            size_bar: centered(chunks[4], frame_cols, 1),
            buttons: button_pad(chunks[5]),
            footer: chunks[7],
        }
    }

    /// Button under terminal position (column, row)
    pub fn button_at(&self, column: u16, row: u16) -> Option<Direction> {
        self.buttons
            .iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(direction, _)| *direction)
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

// Up on top, Left and Right side by side, Down below
fn button_pad(area: Rect) -> Vec<(Direction, Rect)> {
    let rows = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(BUTTON_HEIGHT); 3])
        .split(area);

    let pair = centered(rows[1], BUTTON_WIDTH * 2 + 4, BUTTON_HEIGHT);
    let left = Rect::new(pair.x, pair.y, BUTTON_WIDTH.min(pair.width), pair.height);
    let right_x = pair.x + pair.width.saturating_sub(BUTTON_WIDTH);
    let right = Rect::new(right_x, pair.y, BUTTON_WIDTH.min(pair.width), pair.height);

    vec![
        (Direction::Up, centered(rows[0], BUTTON_WIDTH, BUTTON_HEIGHT)),
        (Direction::Left, left),
        (Direction::Right, right),
        (Direction::Down, centered(rows[2], BUTTON_WIDTH, BUTTON_HEIGHT)),
    ]
}

pub fn render(f: &mut Frame, app: &App, now: Instant) {
    let layout = ScreenLayout::compute(f.area(), app);
    f.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), f.area());

    render_header(f, layout.header);
    render_board(f, &layout, app, now);
    render_selection(f, &layout, app, now);
    for (direction, rect) in &layout.buttons {
        render_button(f, *direction, *rect);
    }
    render_footer(f, layout.footer, app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Grid Picker",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_board(f: &mut Frame, layout: &ScreenLayout, app: &App, now: Instant) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    f.render_widget(block, layout.board_frame);

    for cell in GRID.cells() {
        render_cell(f, &layout.board, cell);
    }

    let t = app.marker().translation_at(now);
    if let Some(rect) = layout
        .board
        .rect_for(t.x, t.y, MARKER_SIZE, MARKER_SIZE)
    {
        let border = if app.marker().is_dragging() {
            Modifier::BOLD | Modifier::REVERSED
        } else {
            Modifier::BOLD
        };
        let marker = Paragraph::new("▐█▌")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(MARKER_BG)
                    .fg(MARKER_BORDER)
                    .add_modifier(border),
            );
        f.render_widget(marker, rect);
    }
}

// A cell's coordinate is the far corner of its square
fn render_cell(f: &mut Frame, board: &BoardProjection, cell: &Cell) {
    let Some(rect) = board.rect_for(cell.x - CELL_SIZE, cell.y - CELL_SIZE, CELL_SIZE, CELL_SIZE)
    else {
        return;
    };
    let label = Paragraph::new(cell.number.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().bg(CELL_BG).fg(Color::Black));
    f.render_widget(label, rect);
}

fn render_selection(f: &mut Frame, layout: &ScreenLayout, app: &App, now: Instant) {
    let question = Paragraph::new(app.config().display.question.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
    f.render_widget(question, layout.question);

    let size = app.label_size_at(now);
    let mut style = Style::default().fg(Color::White);
    if size >= 50.0 {
        style = style.add_modifier(Modifier::BOLD);
    }
    let number = Paragraph::new(app.selected().to_string())
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(number, layout.number);

    let bar = Gauge::default()
        .gauge_style(Style::default().fg(MARKER_BG).bg(BACKGROUND))
        .ratio((size / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}", size));
    f.render_widget(bar, layout.size_bar);
}

fn render_button(f: &mut Frame, direction: Direction, area: Rect) {
    let button = Paragraph::new(direction.label())
        .alignment(Alignment::Center)
        .style(Style::default().bg(MARKER_BG).fg(Color::Black))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let help = Line::from(vec![
        Span::styled(app.last_action(), Style::default().fg(Color::Yellow)),
        Span::raw("  |  arrows/wasd move  r reset  q quit"),
    ]);
    f.render_widget(
        Paragraph::new(help)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        area,
    );
}
