//! Report activity - the current report as highlighted YAML.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};
use crossterm_actions::{NavigationEvent, TuiEvent};
use ratatui::{
    Terminal,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use tuirealm::{
    Application, Component, Event, EventListenerCfg, MockComponent, PollStrategy, State,
    StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::report::Report;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{REPORT_FOOTER_ACTIONS, format_footer};
use crate::tui::highlighting::Highlighter;
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

/// Lines moved by `{` and `}`.
const PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    ReportView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Quit,
    Back,
    Scrolled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// ReportView Component
// ============================================================================

/// Colors for the report view from the highlighter theme.
pub struct ReportViewColors {
    pub background: Color,
    pub gutter_fg: Color,
}

pub struct ReportView {
    props: Props,
    lines: Vec<Line<'static>>,
    scroll: usize,
    visible_height: usize,
    colors: ReportViewColors,
}

impl ReportView {
    pub fn new(colors: ReportViewColors, lines: Vec<Line<'static>>) -> Self {
        Self {
            props: Props::default(),
            lines,
            scroll: 0,
            visible_height: 20,
            colors,
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let max_scroll = self.lines.len().saturating_sub(self.visible_height);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max_scroll);
    }
}

impl MockComponent for ReportView {
    fn view(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let bg_style = Style::default().bg(self.colors.background);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(bg_style.fg(self.colors.gutter_fg))
            .style(bg_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.visible_height = inner.height as usize;

        let visible_lines: Vec<Line> = self
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(inner.height as usize)
            .map(|(i, line)| {
                let mut spans = vec![Span::styled(
                    format!("{:4} ", i + 1),
                    Style::default()
                        .fg(self.colors.gutter_fg)
                        .bg(self.colors.background),
                )];
                spans.extend(line.spans.clone());
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(visible_lines).style(bg_style), inner);

        if self.lines.len() > inner.height as usize {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
            let mut scrollbar_state = ScrollbarState::new(self.lines.len()).position(self.scroll);
            frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.scroll))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Scroll(CmdDirection::Up) => self.scroll_by(-1),
            Cmd::Scroll(CmdDirection::Down) => self.scroll_by(1),
            Cmd::Scroll(CmdDirection::Left) => self.scroll_by(-(PAGE as isize)),
            Cmd::Scroll(CmdDirection::Right) => self.scroll_by(PAGE as isize),
            _ => return CmdResult::None,
        }
        CmdResult::Changed(self.state())
    }
}

impl Component<Msg, UserEvent> for ReportView {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Esc is not mapped in the dispatcher
        if key_event.code == tuirealm::event::Key::Esc {
            return Some(Msg::Back);
        }

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return match msg {
                crate::tui::activities::Msg::Quit => Some(Msg::Quit),
                crate::tui::activities::Msg::SwitchToReport => Some(Msg::Back),
                _ => None,
            };
        }

        let direction = match action {
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => CmdDirection::Up,
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => CmdDirection::Down,
            AppAction::ValueDecrementLarge => CmdDirection::Left,
            AppAction::ValueIncrementLarge => CmdDirection::Right,
            _ => return None,
        };
        self.perform(Cmd::Scroll(direction));
        Some(Msg::Scrolled)
    }
}

// ============================================================================
// ReportActivity
// ============================================================================

#[derive(Default)]
pub struct ReportActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
    /// Set when the report could not be built
    error: Option<String>,
}

impl ReportActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    fn report_yaml(context: &Context) -> Result<String> {
        let (width, height) = context.model.overlay_size;
        let report = Report::new(&context.model.picker, width, height)?;
        Ok(report.to_yaml()?)
    }
}

impl Activity for ReportActivity {
    fn on_create(&mut self, context: Context) {
        let picker = &context.model.picker;
        let highlighter = Highlighter::new(picker.reference(), picker.preview().color);

        let lines = match Self::report_yaml(&context) {
            Ok(yaml) => highlighter.highlight(&yaml, "yaml"),
            Err(e) => {
                tracing::error!("Failed to build report: {}", e);
                self.error = Some(e.to_string());
                Vec::new()
            }
        };

        let colors = ReportViewColors {
            background: highlighter.background_color(),
            gutter_fg: highlighter.gutter_color(),
        };

        let mut app = Self::create_application();
        if let Err(e) = app
            .mount(Id::ReportView, Box::new(ReportView::new(colors, lines)), vec![])
            .and_then(|()| app.active(&Id::ReportView))
        {
            tracing::error!("Failed to mount report view: {}", e);
        }

        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self
            .app
            .as_mut()
            .ok_or_else(|| eyre!("report activity drawn before on_create"))?;
        let error = self.error.as_deref();

        terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(10),   // Report
                    Constraint::Length(1), // Status
                ])
                .split(frame.area());

            let title = Paragraph::new(" Report - selected color on reference ")
                .style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title, rows[0]);

            app.view(&Id::ReportView, frame, rows[1]);

            let status = match error {
                Some(e) => format!("Report failed: {e}"),
                None => format_footer(REPORT_FOOTER_ACTIONS, &[("page", "{ }"), ("back", "Esc")]),
            };
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, rows[2]);
        })?;

        let Ok(messages) = app.tick(PollStrategy::Once) else {
            return Ok(());
        };
        for msg in messages {
            match msg {
                Msg::Quit => {
                    self.exit_reason = Some(ExitReason::Quit);
                    return Ok(());
                }
                Msg::Back => {
                    self.exit_reason = Some(ExitReason::SwitchToMain);
                    return Ok(());
                }
                // Already applied in the component
                Msg::Scrolled => {}
            }
        }

        Ok(())
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}
