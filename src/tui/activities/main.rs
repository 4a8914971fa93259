//! Main activity - the field, the controls and the preview.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};
use ratatui::{
    Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, Update};

use crate::contrast::DisplayMode;
use crate::tui::Model;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::params::{ModeSelector, ReferenceInput, Slider, SliderConfig};
use crate::tui::components::{
    FieldView, MAIN_FOOTER_ACTIONS, Preview, format_footer, render_help,
};

// ============================================================================
// Component identifiers (scoped to MainActivity)
// ============================================================================

/// Unique identifiers for all components in MainActivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Field,
    Preview,
    Hue,
    Ratio,
    Reference,
    Mode,
}

// ============================================================================
// Messages (scoped to MainActivity)
// ============================================================================

/// All possible messages that can be sent in MainActivity.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,

    // Focus/Navigation
    FocusNext,
    FocusPrev,

    // Picker commands, values already clamped by the component
    HueChanged(f64),
    PointerChanged(f64, f64),
    RatioChanged(f64),
    ReferenceChanged(String),
    ModeChanged(DisplayMode),
    CycleMode,

    // Remount components from the picker (chained after commands)
    Sync,

    // Activity transition
    SwitchToReport,
}

/// Custom user events (unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// Focus management (scoped to MainActivity)
// ============================================================================

/// All focusable component IDs in order.
const ALL_FOCUS_IDS: &[Id] = &[Id::Field, Id::Hue, Id::Ratio, Id::Reference, Id::Mode];

/// Manages focus state for Tab navigation in MainActivity.
#[derive(Default)]
pub struct FocusManager {
    current_idx: usize,
}

impl FocusManager {
    pub fn current_focus(&self) -> Id {
        ALL_FOCUS_IDS
            .get(self.current_idx)
            .copied()
            .unwrap_or(Id::Field)
    }

    pub fn focus_next(&mut self) -> Id {
        self.current_idx = (self.current_idx + 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }

    pub fn focus_prev(&mut self) -> Id {
        self.current_idx = (self.current_idx + ALL_FOCUS_IDS.len() - 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }
}

// ============================================================================
// MainActivity
// ============================================================================

/// The main picking activity.
#[derive(Default)]
pub struct MainActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    focus: FocusManager,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl MainActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// Mount (or remount) every component from the picker state.
    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        let picker = &model.picker;
        for id in [Id::Field, Id::Preview, Id::Hue, Id::Ratio, Id::Reference, Id::Mode] {
            if app.mounted(&id) {
                app.umount(&id)?;
            }
        }

        app.mount(Id::Field, Box::new(FieldView::new(picker)), vec![])?;
        app.mount(Id::Preview, Box::new(Preview::new(picker)), vec![])?;
        app.mount(
            Id::Hue,
            Box::new(Slider::new(SliderConfig::hue(), picker.hue_angle())),
            vec![],
        )?;
        app.mount(
            Id::Ratio,
            Box::new(Slider::new(SliderConfig::ratio(), picker.ratio())),
            vec![],
        )?;
        app.mount(
            Id::Reference,
            Box::new(ReferenceInput::new(picker.reference())),
            vec![],
        )?;
        app.mount(Id::Mode, Box::new(ModeSelector::new(picker.mode())), vec![])?;
        Ok(())
    }
}

impl Activity for MainActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();

        if let Err(e) = Self::mount_components(&mut app, &context.model) {
            tracing::error!("Failed to mount components: {}", e);
        }
        if let Err(e) = app.active(&self.focus.current_focus()) {
            tracing::error!("Failed to focus component: {}", e);
        }

        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self
            .app
            .as_mut()
            .ok_or_else(|| eyre!("main activity drawn before on_create"))?;
        let model = &mut self
            .context
            .as_mut()
            .ok_or_else(|| eyre!("main activity has no context"))?
            .model;

        terminal.draw(|frame| {
            let area = frame.area();

            let main_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(10),   // Content
                    Constraint::Length(1), // Status
                ])
                .split(area);

            let title = format!(
                " lumapick - hue {:.0}° - {} ",
                model.picker.hue_angle(),
                model.picker.preview().hex
            );
            let title_widget =
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, main_rows[0]);

            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(20), Constraint::Length(46)])
                .split(main_rows[1]);

            app.view(&Id::Field, frame, cols[0]);

            let right_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(6), Constraint::Fill(1)])
                .split(cols[1]);

            let controls_block = Block::default().title(" Controls ").borders(Borders::ALL);
            let controls_inner = controls_block.inner(right_rows[0]);
            frame.render_widget(controls_block, right_rows[0]);

            let control_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1); 4])
                .split(controls_inner);
            app.view(&Id::Hue, frame, control_rows[0]);
            app.view(&Id::Ratio, frame, control_rows[1]);
            app.view(&Id::Reference, frame, control_rows[2]);
            app.view(&Id::Mode, frame, control_rows[3]);

            app.view(&Id::Preview, frame, right_rows[1]);

            let status = model
                .message
                .clone()
                .unwrap_or_else(|| format_footer(MAIN_FOOTER_ACTIONS, &[("move", "arrows")]));
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, main_rows[2]);

            if model.show_help {
                render_help(frame);
            }
        })?;

        // Help modal intercepts all input while visible
        if model.show_help {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                        model.show_help = false;
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        // Timeouts surface as errors; nothing to do then
        let Ok(messages) = app.tick(PollStrategy::Once) else {
            return Ok(());
        };

        let mut needs_sync = false;
        for msg in messages {
            match &msg {
                Msg::FocusNext => {
                    let next = self.focus.focus_next();
                    app.active(&next)?;
                    continue;
                }
                Msg::FocusPrev => {
                    let prev = self.focus.focus_prev();
                    app.active(&prev)?;
                    continue;
                }
                Msg::SwitchToReport => {
                    self.exit_reason = Some(ExitReason::SwitchToReport);
                    return Ok(());
                }
                Msg::Quit => {
                    self.exit_reason = Some(ExitReason::Quit);
                    return Ok(());
                }
                Msg::ShowHelp => {}
                _ => model.clear_message(),
            }

            let mut current = Some(msg);
            while let Some(m) = current {
                if matches!(m, Msg::Sync) {
                    needs_sync = true;
                }
                current = model.update(Some(m));
            }
        }

        if needs_sync {
            Self::mount_components(app, model)?;
            app.active(&self.focus.current_focus())?;
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
