//! Reusable slider component for the hue angle and the contrast ratio.

use crossterm_actions::{NavigationEvent, SelectionEvent, TuiEvent};
use float_cmp::approx_eq;
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::contrast::{MAX_RATIO, MIN_RATIO};
use crate::tui::activities::{Msg, main::UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

/// Type of slider (determines which Msg to send on change).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderType {
    Hue,
    Ratio,
}

/// Configuration for a slider.
#[derive(Debug, Clone)]
pub struct SliderConfig {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Arrow keys and `[`/`]`
    pub step: f64,
    /// `{`/`}`
    pub large_step: f64,
    pub precision: usize,
    pub suffix: String,
    /// Wrap around instead of stopping at the ends
    pub wrap: bool,
    pub slider_type: SliderType,
}

impl SliderConfig {
    pub fn hue() -> Self {
        Self {
            label: "Hue".to_string(),
            min: 0.0,
            max: 360.0,
            step: 1.0,
            large_step: 15.0,
            precision: 0,
            suffix: "°".to_string(),
            wrap: true,
            slider_type: SliderType::Hue,
        }
    }

    pub fn ratio() -> Self {
        Self {
            label: "Ratio".to_string(),
            min: MIN_RATIO,
            max: MAX_RATIO,
            step: 0.1,
            large_step: 1.0,
            precision: 1,
            suffix: ":1".to_string(),
            wrap: false,
            slider_type: SliderType::Ratio,
        }
    }
}

/// A horizontal slider with label and value display.
pub struct Slider {
    props: Props,
    value: f64,
    config: SliderConfig,
}

impl Slider {
    pub fn new(config: SliderConfig, initial_value: f64) -> Self {
        let value = if config.wrap {
            initial_value.rem_euclid(config.max)
        } else {
            initial_value.clamp(config.min, config.max)
        };
        Self {
            props: Props::default(),
            value,
            config,
        }
    }

    fn adjust(&mut self, delta: f64) {
        let next = self.value + delta;
        self.value = if self.config.wrap {
            next.rem_euclid(self.config.max)
        } else {
            // Rounded to the step grid so repeated 0.1 steps land on 4.5 exactly
            let steps = ((next - self.config.min) / self.config.step).round();
            (self.config.min + steps * self.config.step).clamp(self.config.min, self.config.max)
        };
    }

    fn msg_for_change(&self) -> Option<Msg> {
        match self.config.slider_type {
            SliderType::Hue => Some(Msg::HueChanged(self.value)),
            SliderType::Ratio => Some(Msg::RatioChanged(self.value)),
        }
    }

    fn adjust_and_notify(&mut self, delta: f64) -> Option<Msg> {
        let before = self.value;
        self.adjust(delta);
        if approx_eq!(f64, self.value, before, ulps = 2) {
            None
        } else {
            self.msg_for_change()
        }
    }
}

impl MockComponent for Slider {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(12), Constraint::Min(10)])
            .split(area);

        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let label_text = Paragraph::new(format!("{}:", self.config.label)).style(label_style);
        frame.render_widget(label_text, cols[0]);

        let slider_width = cols[1].width.saturating_sub(9) as usize;
        let ratio = (self.value - self.config.min) / (self.config.max - self.config.min);
        let pos = (ratio * slider_width as f64).round() as usize;
        let pos = pos.min(slider_width.saturating_sub(1));

        let (filled_style, empty_style, handle_style) = if focused {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::White),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
            )
        };

        let mut spans = Vec::new();
        for i in 0..slider_width {
            if i == pos {
                spans.push(Span::styled("●", handle_style));
            } else if i < pos {
                spans.push(Span::styled("━", filled_style));
            } else {
                spans.push(Span::styled("─", empty_style));
            }
        }

        let value_str = format!(
            " {:.*}{}",
            self.config.precision, self.value, self.config.suffix
        );
        spans.push(Span::styled(
            value_str,
            if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            },
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), cols[1]);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::F64(self.value))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Left) => {
                self.adjust(-self.config.step);
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Right) => {
                self.adjust(self.config.step);
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for Slider {
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

            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left))
            | AppAction::ValueDecrementSmall => self.adjust_and_notify(-self.config.step),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right))
            | AppAction::ValueIncrementSmall => self.adjust_and_notify(self.config.step),
            AppAction::ValueDecrementLarge => self.adjust_and_notify(-self.config.large_step),
            AppAction::ValueIncrementLarge => self.adjust_and_notify(self.config.large_step),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_clamps_and_snaps_to_steps() {
        let mut slider = Slider::new(SliderConfig::ratio(), 4.4);
        slider.adjust(0.1);
        assert_eq!(slider.value, 4.5);

        let mut slider = Slider::new(SliderConfig::ratio(), 20.95);
        slider.adjust(1.0);
        assert_eq!(slider.value, MAX_RATIO);
        slider.adjust(-100.0);
        assert_eq!(slider.value, MIN_RATIO);
    }

    #[test]
    fn hue_wraps() {
        let mut slider = Slider::new(SliderConfig::hue(), 359.0);
        slider.adjust(15.0);
        assert_eq!(slider.value, 14.0);
        slider.adjust(-15.0);
        assert_eq!(slider.value, 359.0);
    }
}
