use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::info;

use regenera_core::auth::SupabaseAuth;
use regenera_core::{AppConfig, Route};
use regenera_tui::{
    app::{App, Mode, Screen},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{
        AuthWidget, DashboardWidget, HelpWidget, JoinFormWidget, LandingWidget, LoadingWidget,
        StatusBarWidget, ToastWidget, WorkspaceWidget,
    },
};

pub async fn run(config: Arc<AppConfig>, offline: bool) -> Result<()> {
    let mut app = if offline {
        info!("Starting offline with the demo identity");
        App::offline(config.clone())
    } else if config.auth.is_configured() {
        let auth = SupabaseAuth::new(&config.auth, config.session_path())?;
        App::new(config.clone(), Arc::new(auth))
    } else {
        info!("No identity backend configured, starting offline");
        App::offline(config.clone())
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = if app.is_offline() { "Aeon Regenera (offline)" } else { "Aeon Regenera" };
    execute!(stdout, EnterAlternateScreen, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler =
        EventHandler::with_animation_tick(config.ui.tick_rate_ms, config.ui.animation_tick());

    let result = main_loop(&mut terminal, &mut app, &event_handler);

    // Tear down timers and subscriptions before leaving
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    let tick_rate = Duration::from_millis(app.config.ui.tick_rate_ms);
    let mut last_tick = Instant::now();

    loop {
        // Frames, notices and session results from background tasks
        app.process_messages();

        terminal.draw(|frame| draw(frame, app))?;

        // Layout is known now; let the impact section trigger its counters
        app.observe_viewport();

        // Faster polling while counters run or a session is loading
        let event = if app.is_animating() {
            events.next_animation()?
        } else {
            events.next()?
        };

        match event {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                app.handle_action(action);
            }
            // The next draw picks up the new size
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) | None => {}
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());
    let content = main_layout[0];

    let loading = match &app.screen {
        Screen::Dashboard(view) => view.guard.is_loading(),
        Screen::Workspace(view) => view.guard.is_loading(),
        _ => false,
    };

    match app.route() {
        _ if loading => LoadingWidget::render(frame, content, app),
        Route::Landing => LandingWidget::render(frame, content, app),
        Route::Auth => AuthWidget::render(frame, content, app),
        Route::Dashboard => DashboardWidget::render(frame, content, app),
        Route::Workspace => WorkspaceWidget::render(frame, content, app),
    }
    StatusBarWidget::render(frame, main_layout[1], app);

    // Overlays
    match app.mode {
        Mode::JoinForm => JoinFormWidget::render(frame, app),
        Mode::Help => HelpWidget::render(frame, app),
        Mode::Normal => {}
    }
    ToastWidget::render(frame, app);
}
