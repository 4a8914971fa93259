//! Tint/shade field drawn with half-block cells, plus pointer and overlay.

use std::sync::Arc;

use crossterm_actions::{NavigationEvent, SelectionEvent, TuiEvent};
use palette::Srgb;
use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::contrast::{BoundaryPath, ContrastBounds, DisplayMode, boundary_path};
use crate::field::{FIELD_SIZE, Field};
use crate::luminance::luminance_u8;
use crate::picker::{Foreground, Picker};
use crate::tint::Tints;
use crate::tui::activities::{Msg, main::UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

const LAST: usize = FIELD_SIZE - 1;

/// Field steps per arrow key press.
const COARSE_STEP: i32 = 4;

/// What an overlay puts in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellOverlay {
    None,
    Line,
    Region,
}

/// Nearest field index for cell `cell` out of `cells`.
fn field_index(cell: usize, cells: usize) -> usize {
    if cells <= 1 {
        0
    } else {
        (cell * LAST + (cells - 1) / 2) / (cells - 1)
    }
}

/// Rasterize overlay geometry onto a `cols` x `rows` cell grid.
///
/// `path` must have been computed with width `cols - 1` and height
/// `2 * rows - 1`, so x is a cell column and y is a half-cell row.
pub(crate) fn overlay_cells(path: &BoundaryPath, cols: usize, rows: usize) -> Vec<CellOverlay> {
    let mut cells = vec![CellOverlay::None; cols * rows];
    if cols == 0 || rows == 0 {
        return cells;
    }
    let sub_rows = 2 * rows;

    match path {
        BoundaryPath::None => {}
        BoundaryPath::Polyline(points) => {
            for col in 0..cols {
                let Some(point) = points.get(field_index(col, cols)) else {
                    continue;
                };
                let sub = point.y.round();
                if sub >= 0.0 && sub < sub_rows as f64 {
                    cells[(sub as usize / 2) * cols + col] = CellOverlay::Line;
                }
            }
        }
        BoundaryPath::Region(points) => {
            let n = points.len();
            for col in 0..cols {
                let j = field_index(col, cols);
                let mirror = n.checked_sub(1 + j);
                let (Some(upper), Some(lower)) = (points.get(j), mirror.and_then(|m| points.get(m)))
                else {
                    continue;
                };
                for row in 0..rows {
                    let center = 2.0 * row as f64 + 0.5;
                    if center >= upper.y && center <= lower.y {
                        cells[row * cols + col] = CellOverlay::Region;
                    }
                }
            }
        }
    }
    cells
}

fn to_color(c: Srgb<u8>) -> Color {
    Color::Rgb(c.red, c.green, c.blue)
}

/// Black or white, whichever reads on `c`.
fn contrasting(c: Srgb<u8>) -> Color {
    match Foreground::for_luminance(luminance_u8(c)) {
        Foreground::White => Color::White,
        Foreground::Black => Color::Black,
    }
}

/// The field panel. Focusable: arrows move the pointer.
pub struct FieldView {
    props: Props,
    field: Arc<Field>,
    tints: Tints,
    bounds: ContrastBounds,
    mode: DisplayMode,
    /// Pointer column, 0..=255
    col: i32,
    /// Pointer row, 0 (full tint) ..= 255 (black)
    row: i32,
}

impl FieldView {
    pub fn new(picker: &Picker) -> Self {
        let (left, bottom) = picker.pointer();
        Self {
            props: Props::default(),
            field: picker.shared_field(),
            tints: picker.tints().clone(),
            bounds: picker.bounds(),
            mode: picker.mode(),
            col: (left * LAST as f64).round() as i32,
            row: (bottom * LAST as f64).round() as i32,
        }
    }

    fn move_pointer(&mut self, dx: i32, dy: i32) -> Option<Msg> {
        let col = (self.col + dx).clamp(0, LAST as i32);
        let row = (self.row + dy).clamp(0, LAST as i32);
        if (col, row) == (self.col, self.row) {
            return None;
        }
        self.col = col;
        self.row = row;
        Some(Msg::PointerChanged(
            f64::from(col) / LAST as f64,
            f64::from(row) / LAST as f64,
        ))
    }
}

impl MockComponent for FieldView {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(format!(" Field ({}) ", self.mode.label()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cols = inner.width as usize;
        let rows = inner.height as usize;
        if cols == 0 || rows == 0 {
            return;
        }
        let sub_rows = 2 * rows;

        let path = boundary_path(
            self.mode,
            &self.tints,
            &self.bounds,
            cols.saturating_sub(1) as f64,
            (sub_rows - 1) as f64,
        )
        .unwrap_or_else(|e| {
            tracing::warn!(%e, "overlay skipped");
            BoundaryPath::None
        });
        let overlay = overlay_cells(&path, cols, rows);

        let marker_col = (self.col as usize * (cols - 1) + LAST / 2) / LAST;
        let marker_row = (self.row as usize * (sub_rows - 1) + LAST / 2) / LAST / 2;

        let lines: Vec<Line> = (0..rows)
            .map(|row| {
                let top_row = field_index(2 * row, sub_rows);
                let bottom_row = field_index(2 * row + 1, sub_rows);
                let spans: Vec<Span> = (0..cols)
                    .map(|col| {
                        let j = field_index(col, cols);
                        let top = self.field.pixel(top_row, j);
                        let bottom = self.field.pixel(bottom_row, j);

                        if row == marker_row && col == marker_col {
                            return Span::styled(
                                "◆",
                                Style::default()
                                    .fg(contrasting(top))
                                    .bg(to_color(top))
                                    .add_modifier(Modifier::BOLD),
                            );
                        }
                        match overlay[row * cols + col] {
                            CellOverlay::Line => Span::styled(
                                "•",
                                Style::default().fg(contrasting(top)).bg(to_color(top)),
                            ),
                            CellOverlay::Region => Span::styled(
                                "░",
                                Style::default().fg(contrasting(top)).bg(to_color(top)),
                            ),
                            CellOverlay::None => Span::styled(
                                "▀",
                                Style::default().fg(to_color(top)).bg(to_color(bottom)),
                            ),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::Tup2((StateValue::I32(self.col), StateValue::I32(self.row)))
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for FieldView {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),

            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => {
                self.move_pointer(-COARSE_STEP, 0)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                self.move_pointer(COARSE_STEP, 0)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.move_pointer(0, -COARSE_STEP)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.move_pointer(0, COARSE_STEP)
            }
            AppAction::ValueDecrementSmall => self.move_pointer(-1, 0),
            AppAction::ValueIncrementSmall => self.move_pointer(1, 0),
            AppAction::ValueDecrementLarge => self.move_pointer(0, -1),
            AppAction::ValueIncrementLarge => self.move_pointer(0, 1),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::Point;

    #[test]
    fn field_index_spans_the_field() {
        assert_eq!(field_index(0, 40), 0);
        assert_eq!(field_index(39, 40), LAST);
        assert_eq!(field_index(0, 1), 0);
        assert_eq!(field_index(255, 256), 255);
    }

    #[test]
    fn polyline_marks_one_cell_per_column() {
        let points: Vec<Point> = (0..FIELD_SIZE)
            .map(|j| Point {
                x: j as f64,
                y: 3.0,
            })
            .collect();
        let cells = overlay_cells(&BoundaryPath::Polyline(points), 4, 3);
        // y = 3 is the lower half of cell row 1
        for col in 0..4 {
            assert_eq!(cells[col], CellOverlay::None);
            assert_eq!(cells[4 + col], CellOverlay::Line);
            assert_eq!(cells[8 + col], CellOverlay::None);
        }
    }

    #[test]
    fn polyline_above_the_field_is_skipped() {
        let points = vec![Point { x: 0.0, y: -10.0 }; FIELD_SIZE];
        let cells = overlay_cells(&BoundaryPath::Polyline(points), 2, 2);
        assert!(cells.iter().all(|c| *c == CellOverlay::None));
    }

    #[test]
    fn region_fills_between_bounds() {
        // Upper at 1.5, lower at 4.5 in half rows: cell rows 1 and 2 (centers 2.5, 4.5)
        let upper = (0..FIELD_SIZE).map(|j| Point {
            x: j as f64,
            y: 1.5,
        });
        let lower = (0..FIELD_SIZE).rev().map(|j| Point {
            x: j as f64,
            y: 4.5,
        });
        let points: Vec<Point> = upper.chain(lower).collect();
        let cells = overlay_cells(&BoundaryPath::Region(points), 2, 4);
        let column: Vec<CellOverlay> = (0..4).map(|row| cells[row * 2]).collect();
        assert_eq!(
            column,
            vec![
                CellOverlay::None,
                CellOverlay::Region,
                CellOverlay::Region,
                CellOverlay::None
            ]
        );
    }
}
