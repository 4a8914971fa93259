//! Interactive TUI for picking a tint or shade and checking its contrast.
//!
//! Architecture: Activity-based with tui-realm for components.
//! Each screen (activity) has its own Application instance and message types.

mod activities;
mod activity;
mod components;
mod highlighting;
mod model;

use std::io::stdout;
use std::sync::LazyLock;

use color_eyre::eyre::{Result, WrapErr};
use crossterm_actions::{
    ActionBinding, ActionConfig, AppEvent, EditingMode, TuiEvent, TuiRealmDispatcher,
    defaults, keys,
};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::config::PickerConfig;

pub use highlighting::{Highlighter, SYNTAX_SET};
pub use model::Model;

use activities::Msg;
use activity::{ActivityManager, Context};

// ============================================================================
// Event handling (shared across activities)
// ============================================================================

/// Unified application events - wraps TuiEvent + custom actions.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum AppAction {
    /// Standard TUI events (navigation, input, selection, app)
    Tui(TuiEvent),
    /// Switch to the report screen
    Report,
    /// Cycle the field overlay
    CycleMode,
    /// Small step down (fine tint in the field)
    ValueDecrementSmall,
    /// Small step up (fine tint in the field)
    ValueIncrementSmall,
    /// Large step down (fine shade in the field)
    ValueDecrementLarge,
    /// Large step up (fine shade in the field)
    ValueIncrementLarge,
}

/// Global dispatcher instance - shared by all components.
pub static DISPATCHER: LazyLock<TuiRealmDispatcher<AppAction>> = LazyLock::new(|| {
    let mut config = ActionConfig::new(EditingMode::Emacs);

    for binding in defaults::emacs_defaults().bindings() {
        config.bind(ActionBinding {
            action: AppAction::Tui(binding.action),
            keys: binding.keys.clone(),
            description: binding.description.clone(),
        });
    }

    config.bind(
        ActionBinding::builder().action(AppAction::Report)
            .key(keys::char('r'))
            .description("View report")
            .build(),
    );
    config.bind(
        ActionBinding::builder().action(AppAction::CycleMode)
            .key(keys::char('m'))
            .description("Cycle overlay mode")
            .build(),
    );

    // [/] for small steps, {/} for large steps
    config.bind(
        ActionBinding::builder().action(AppAction::ValueDecrementSmall)
            .key(keys::char('['))
            .description("Decrease value")
            .build(),
    );
    config.bind(
        ActionBinding::builder().action(AppAction::ValueIncrementSmall)
            .key(keys::char(']'))
            .description("Increase value")
            .build(),
    );
    config.bind(
        ActionBinding::builder().action(AppAction::ValueDecrementLarge)
            .key(keys::char('{'))
            .description("Decrease value (large)")
            .build(),
    );
    config.bind(
        ActionBinding::builder().action(AppAction::ValueIncrementLarge)
            .key(keys::char('}'))
            .description("Increase value (large)")
            .build(),
    );

    config.compile();
    TuiRealmDispatcher::new(config)
});

/// Convenience function for components to access the dispatcher.
pub fn dispatcher() -> &'static TuiRealmDispatcher<AppAction> {
    &DISPATCHER
}

/// Handle global application events that are common across all components.
/// Returns Some(Msg) if the action was handled, None otherwise.
pub fn handle_global_app_events(action: &AppAction) -> Option<Msg> {
    match action {
        AppAction::Tui(TuiEvent::App(AppEvent::Quit)) => Some(Msg::Quit),
        AppAction::Tui(TuiEvent::App(AppEvent::Help)) => Some(Msg::ShowHelp),
        AppAction::Report => Some(Msg::SwitchToReport),
        AppAction::CycleMode => Some(Msg::CycleMode),
        _ => None,
    }
}

// ============================================================================
// TUI entry point
// ============================================================================

/// Run the interactive TUI using activity-based architecture.
pub fn run(config: PickerConfig) -> Result<()> {
    // Build the model before touching the terminal so errors print normally
    let picker = config
        .into_picker()
        .wrap_err("Invalid picker settings")?;
    let model = Model::new(picker, (config.overlay.width, config.overlay.height));

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let context = Context { model };
    let mut manager = ActivityManager::new(context);

    let result = manager.run(&mut terminal);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}
