//! Selected color preview Component.

use palette::Srgb;
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::picker::{Foreground, Picker, Preview as Selection, hex_string};
use crate::shade::Reach;
use crate::tui::activities::{Msg, main::UserEvent};

/// WCAG AA threshold for body text.
const AA_RATIO: f64 = 4.5;
/// WCAG AAA threshold for body text.
const AAA_RATIO: f64 = 7.0;

fn to_color(c: Srgb<u8>) -> Color {
    Color::Rgb(c.red, c.green, c.blue)
}

fn badge(label: &str, passes: bool) -> Span<'static> {
    let (text, color) = if passes {
        (format!(" {label} ✓ "), Color::Green)
    } else {
        (format!(" {label} ✗ "), Color::Red)
    };
    Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Swatch with sample text plus the numbers behind it.
pub struct Preview {
    props: Props,
    selection: Selection,
    reference: Srgb<u8>,
    ratio: f64,
    /// `None` if the solver rejected the tint
    legibility: Option<Reach>,
}

impl Preview {
    pub fn new(picker: &Picker) -> Self {
        Self {
            props: Props::default(),
            selection: picker.preview(),
            reference: picker.reference(),
            ratio: picker.ratio(),
            legibility: picker.legibility_reach().ok(),
        }
    }
}

impl MockComponent for Preview {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" Preview ").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        // Swatch with the recommended text color, then the same text on the reference
        let sel = &self.selection;
        let text_color = match sel.foreground {
            Foreground::White => Color::White,
            Foreground::Black => Color::Black,
        };
        let swatch_style = Style::default().bg(to_color(sel.color));
        let swatch = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  Sample text in {}", sel.foreground.as_str()),
                Style::default().fg(text_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ])
        .style(swatch_style);
        frame.render_widget(swatch, rows[0]);

        let dim = Style::default().fg(Color::Gray);
        let lines = vec![
            Line::from(vec![
                Span::styled("Hex        ", dim),
                Span::raw(sel.hex.clone()),
            ]),
            Line::from(vec![
                Span::styled("RGB        ", dim),
                Span::raw(format!(
                    "{}, {}, {}",
                    sel.color.red, sel.color.green, sel.color.blue
                )),
            ]),
            Line::from(vec![
                Span::styled("Luminance  ", dim),
                Span::raw(format!("{:.4}", sel.luminance)),
            ]),
            Line::from(vec![
                Span::styled("Tint/shade ", dim),
                Span::raw(format!("{} / {:.3}", sel.tint_index, sel.shade)),
            ]),
            Line::from(vec![
                Span::styled("B/W split  ", dim),
                match self.legibility {
                    Some(Reach::Shade(shade)) => Span::raw(format!("shade {shade:.3}")),
                    Some(Reach::Black) => Span::raw("black only"),
                    Some(Reach::Unreachable) => {
                        Span::styled("unreachable", Style::default().fg(Color::Yellow))
                    }
                    None => Span::styled("n/a", dim),
                },
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Sample on reference ", dim),
                Span::styled(
                    format!(" {} ", hex_string(self.reference)),
                    Style::default()
                        .fg(to_color(sel.color))
                        .bg(to_color(self.reference)),
                ),
            ]),
            Line::from(vec![
                Span::styled("Contrast   ", dim),
                Span::raw(format!("{:.2}:1 ", sel.contrast)),
                badge("AA", sel.contrast >= AA_RATIO),
                badge("AAA", sel.contrast >= AAA_RATIO),
            ]),
            Line::from(vec![
                Span::styled("Target     ", dim),
                Span::raw(format!("{:.1}:1 ", self.ratio)),
                badge("target", sel.passes),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), rows[1]);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for Preview {
    fn on(&mut self, _ev: Event<UserEvent>) -> Option<Msg> {
        // Read-only component
        None
    }
}
