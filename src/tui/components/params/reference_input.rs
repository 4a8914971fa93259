//! Reference color entry with inline text editing.

use crossterm_actions::{InputEvent, SelectionEvent, TuiEvent};
use palette::Srgb;
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::picker::hex_string;
use crate::tui::activities::{Msg, main::UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

/// Longest accepted input, enough for `rgb(255, 255, 255)` and most names.
const MAX_INPUT: usize = 24;

/// Reference color display; Enter or `#` starts editing.
pub struct ReferenceInput {
    props: Props,
    color: Srgb<u8>,
    editing: bool,
    edit_buffer: String,
}

impl ReferenceInput {
    pub fn new(color: Srgb<u8>) -> Self {
        Self {
            props: Props::default(),
            color,
            editing: false,
            edit_buffer: String::new(),
        }
    }

    fn start_editing(&mut self) {
        self.editing = true;
        self.edit_buffer = hex_string(self.color);
    }

    fn cancel_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    /// Hand the typed text to the model; parsing happens there.
    fn confirm_editing(&mut self) -> Option<String> {
        self.editing = false;
        let text = std::mem::take(&mut self.edit_buffer);
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    fn type_char(&mut self, c: char) {
        if self.edit_buffer.len() < MAX_INPUT && (c.is_ascii_graphic() || c == ' ') {
            self.edit_buffer.push(c);
        }
    }
}

impl MockComponent for ReferenceInput {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(4),
                Constraint::Min(10),
            ])
            .split(area);

        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new("Reference:").style(label_style), cols[0]);

        let swatch_style =
            Style::default().bg(Color::Rgb(self.color.red, self.color.green, self.color.blue));
        frame.render_widget(Paragraph::new("   ").style(swatch_style), cols[1]);

        let line = if self.editing {
            Line::from(vec![
                Span::styled(
                    self.edit_buffer.as_str(),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ),
                Span::styled("▏", Style::default().fg(Color::Cyan)),
            ])
        } else {
            let style = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(Span::styled(hex_string(self.color), style))
        };
        frame.render_widget(Paragraph::new(line), cols[2]);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        if self.editing {
            State::One(StateValue::String(self.edit_buffer.clone()))
        } else {
            State::One(StateValue::String(hex_string(self.color)))
        }
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for ReferenceInput {
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

        // Editing mode takes raw keys so letters reach the buffer
        if self.editing {
            return match key_event.code {
                tuirealm::event::Key::Enter => self.confirm_editing().map(Msg::ReferenceChanged),
                tuirealm::event::Key::Esc => {
                    self.cancel_editing();
                    None
                }
                tuirealm::event::Key::Backspace => {
                    self.edit_buffer.pop();
                    None
                }
                tuirealm::event::Key::Char(c) => {
                    self.type_char(c);
                    None
                }
                _ => None,
            };
        }

        // '#' starts a fresh hex entry
        if key_event.code == tuirealm::event::Key::Char('#') {
            self.editing = true;
            self.edit_buffer = "#".to_string();
            return None;
        }

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => {
                self.start_editing();
                None
            }
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),
            _ => None,
        }
    }
}
