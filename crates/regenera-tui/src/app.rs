use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use regenera_core::auth::{check_access, Access, MemoryAuth};
use regenera_core::content::WorkspaceTab;
use regenera_core::interaction::{DisplayMode, TabSet, TaskNotice};
use regenera_core::{AppConfig, IdentityProvider, Route};

use crate::event::AuthResult;
use crate::input::Action;
use crate::screens::{
    CounterFrame, DashboardView, JoinForm, LandingView, Protected, SimulationStart, WorkspaceView,
};
use crate::theme::Theme;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Typing into the join form
    JoinForm,
    /// Help overlay
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// Transient notification in the corner of the screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub detail: Option<String>,
    pub kind: ToastKind,
    expires_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            title: title.into(),
            detail,
            kind,
            expires_at: Instant::now() + TOAST_DURATION,
        }
    }
}

/// The mounted screen with its per-mount state
pub enum Screen {
    Landing(LandingView),
    Auth,
    Dashboard(DashboardView),
    Workspace(WorkspaceView),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Landing(_) => Route::Landing,
            Screen::Auth => Route::Auth,
            Screen::Dashboard(_) => Route::Dashboard,
            Screen::Workspace(_) => Route::Workspace,
        }
    }

    fn guard(&self) -> Option<&Protected> {
        match self {
            Screen::Dashboard(view) => Some(&view.guard),
            Screen::Workspace(view) => Some(&view.guard),
            _ => None,
        }
    }

    fn guard_mut(&mut self) -> Option<&mut Protected> {
        match self {
            Screen::Dashboard(view) => Some(&mut view.guard),
            Screen::Workspace(view) => Some(&mut view.guard),
            _ => None,
        }
    }

    /// Release everything the screen acquired on mount
    fn unmount(self) {
        match self {
            Screen::Landing(view) => view.unmount(),
            Screen::Auth => {}
            Screen::Dashboard(view) => view.unmount(),
            Screen::Workspace(view) => view.unmount(),
        }
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Identity backend
    auth: Arc<dyn IdentityProvider>,
    /// Set in offline mode so the auth screen can sign back in
    demo: Option<Arc<MemoryAuth>>,
    /// Currently mounted screen
    pub screen: Screen,
    /// Current application mode
    pub mode: Mode,
    pub join_form: JoinForm,
    pub display_mode: DisplayMode,
    pub theme: Theme,
    pub toasts: Vec<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Loading spinner frame
    pub spinner_frame: usize,
    /// Id of the most recent landing mount
    landing_mount: u64,
    frame_tx: mpsc::UnboundedSender<CounterFrame>,
    frame_rx: mpsc::UnboundedReceiver<CounterFrame>,
    notice_tx: mpsc::UnboundedSender<TaskNotice>,
    notice_rx: mpsc::UnboundedReceiver<TaskNotice>,
    auth_tx: mpsc::UnboundedSender<AuthResult>,
    auth_rx: mpsc::UnboundedReceiver<AuthResult>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, auth: Arc<dyn IdentityProvider>) -> Self {
        let (frame_tx, frame_rx) = mpsc::unbounded_channel();
        let (notice_tx, notice_rx) = mpsc::unbounded_channel();
        let (auth_tx, auth_rx) = mpsc::unbounded_channel();
        let landing = LandingView::new(&config.motion, 0, frame_tx.clone());

        Self {
            config,
            auth,
            demo: None,
            screen: Screen::Landing(landing),
            mode: Mode::Normal,
            join_form: JoinForm::default(),
            display_mode: DisplayMode::default(),
            theme: Theme::default(),
            toasts: Vec::new(),
            should_quit: false,
            status_message: None,
            spinner_frame: 0,
            landing_mount: 0,
            frame_tx,
            frame_rx,
            notice_tx,
            notice_rx,
            auth_tx,
            auth_rx,
        }
    }

    /// Run against an in-process identity with a demo session
    pub fn offline(config: Arc<AppConfig>) -> Self {
        let demo = Arc::new(MemoryAuth::demo());
        let mut app = Self::new(config, demo.clone());
        app.demo = Some(demo);
        app
    }

    #[inline]
    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn is_offline(&self) -> bool {
        self.demo.is_some()
    }

    pub fn landing(&self) -> Option<&LandingView> {
        match &self.screen {
            Screen::Landing(view) => Some(view),
            _ => None,
        }
    }

    pub fn landing_mut(&mut self) -> Option<&mut LandingView> {
        match &mut self.screen {
            Screen::Landing(view) => Some(view),
            _ => None,
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardView> {
        match &self.screen {
            Screen::Dashboard(view) => Some(view),
            _ => None,
        }
    }

    pub fn workspace(&self) -> Option<&WorkspaceView> {
        match &self.screen {
            Screen::Workspace(view) => Some(view),
            _ => None,
        }
    }

    /// Unmount the current screen and mount the one behind `route`
    ///
    /// Protected screens mount in a loading state and ask the identity
    /// backend for a session in the background.
    pub fn navigate(&mut self, route: Route) {
        info!("Navigating to {}", route.path());

        let previous = std::mem::replace(&mut self.screen, Screen::Auth);
        previous.unmount();

        self.mode = Mode::Normal;
        self.status_message = None;
        self.screen = match route {
            Route::Landing => {
                self.landing_mount += 1;
                Screen::Landing(LandingView::new(
                    &self.config.motion,
                    self.landing_mount,
                    self.frame_tx.clone(),
                ))
            }
            Route::Auth => Screen::Auth,
            Route::Dashboard => Screen::Dashboard(DashboardView::mount(self.auth.subscribe())),
            Route::Workspace => Screen::Workspace(WorkspaceView::mount(
                self.auth.subscribe(),
                &self.config.motion,
                self.notice_tx.clone(),
            )),
        };

        if route.requires_session() {
            self.spawn_access_check(route);
        }
    }

    /// Release the mounted screen's timers and subscriptions before exit
    pub fn shutdown(&mut self) {
        let previous = std::mem::replace(&mut self.screen, Screen::Auth);
        previous.unmount();
        info!("Screens released");
    }

    fn spawn_access_check(&self, route: Route) {
        let auth = Arc::clone(&self.auth);
        let tx = self.auth_tx.clone();
        tokio::spawn(async move {
            let access = check_access(auth.as_ref()).await;
            let _ = tx.send(AuthResult::Access { route, access });
        });
    }

    fn spawn_sign_out(&mut self) {
        if let Screen::Dashboard(view) = &mut self.screen {
            if view.signing_out {
                return;
            }
            view.signing_out = true;
        }

        let auth = Arc::clone(&self.auth);
        let tx = self.auth_tx.clone();
        tokio::spawn(async move {
            let result = match auth.sign_out().await {
                Ok(()) => AuthResult::SignedOut,
                Err(e) => AuthResult::SignOutFailed {
                    error: e.to_string(),
                },
            };
            let _ = tx.send(result);
        });
    }

    /// Drain everything the background tasks produced since the last call
    pub fn process_messages(&mut self) {
        while let Ok(frame) = self.frame_rx.try_recv() {
            if let Some(view) = self.landing_mut() {
                view.apply_frame(frame);
            }
        }

        while let Ok(notice) = self.notice_rx.try_recv() {
            self.push_toast(Toast::new(ToastKind::Success, notice.title, notice.detail));
        }

        while let Ok(result) = self.auth_rx.try_recv() {
            self.handle_auth_result(result);
        }

        if let Some(route) = self.screen.guard_mut().and_then(|guard| guard.poll()) {
            self.navigate(route);
        }
    }

    fn handle_auth_result(&mut self, result: AuthResult) {
        match result {
            AuthResult::Access { route, access } => {
                if route != self.route() {
                    debug!("Dropping stale session check for {}", route.path());
                    return;
                }
                match access {
                    Access::Granted(session) => {
                        if let Some(guard) = self.screen.guard_mut() {
                            guard.grant(session);
                        }
                    }
                    Access::Redirect(target) => self.navigate(target),
                }
            }
            AuthResult::SignedOut => {
                self.push_toast(Toast::new(
                    ToastKind::Success,
                    "Signed Out",
                    Some("Successfully disconnected from regenerative workspace.".to_string()),
                ));
            }
            AuthResult::SignOutFailed { error } => {
                warn!("Sign out failed: {}", error);
                if let Screen::Dashboard(view) = &mut self.screen {
                    view.signing_out = false;
                }
                self.push_toast(Toast::new(
                    ToastKind::Error,
                    "Sign Out Error",
                    Some("There was an issue signing out.".to_string()),
                ));
            }
        }
    }

    pub fn push_toast(&mut self, toast: Toast) {
        debug!("Toast: {}", toast.title);
        self.toasts.push(toast);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Periodic housekeeping: spinner frame, toast expiry
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        let now = Instant::now();
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    /// Something on screen moves by itself and wants the fast frame rate
    pub fn is_animating(&self) -> bool {
        match &self.screen {
            Screen::Landing(view) => view.is_animating(),
            Screen::Dashboard(view) => view.guard.is_loading(),
            Screen::Workspace(view) => view.guard.is_loading(),
            Screen::Auth => false,
        }
    }

    /// Feed the viewport of the landing page to its visibility trigger
    pub fn observe_viewport(&mut self) {
        if let Some(view) = self.landing_mut() {
            view.observe_viewport();
        }
    }

    fn is_loading(&self) -> bool {
        self.screen.guard().is_some_and(Protected::is_loading)
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ShowHelp => self.mode = Mode::Help,
            Action::ExitMode => {
                self.mode = Mode::Normal;
                self.status_message = None;
                if let Some(view) = self.landing_mut() {
                    view.pods.clear();
                }
            }
            Action::ToggleDisplayMode => {
                let mode = self.display_mode.toggle();
                self.theme = Theme::for_mode(mode);
                self.set_status(mode.label());
            }
            Action::Back => match self.route() {
                Route::Workspace => self.navigate(Route::Dashboard),
                Route::Landing => {}
                Route::Auth | Route::Dashboard => self.navigate(Route::Landing),
            },
            _ if self.is_loading() => {}
            action => match self.route() {
                Route::Landing => self.handle_landing_action(action),
                Route::Auth => self.handle_auth_action(action),
                Route::Dashboard => self.handle_dashboard_action(action),
                Route::Workspace => self.handle_workspace_action(action),
            },
        }
    }

    fn handle_landing_action(&mut self, action: Action) {
        if self.mode == Mode::JoinForm {
            self.handle_form_action(action);
            return;
        }

        let scroll_lines = self.config.ui.scroll_lines.max(1) as i32;
        let Some(view) = self.landing_mut() else {
            return;
        };
        let half_page = (view.viewport_height / 2).max(1) as i32;

        match action {
            Action::ScrollDown => view.scroll_by(scroll_lines),
            Action::ScrollUp => view.scroll_by(-scroll_lines),
            Action::ScrollHalfPageDown => view.scroll_by(half_page),
            Action::ScrollHalfPageUp => view.scroll_by(-half_page),
            Action::JumpToTop => view.scroll_to_top(),
            Action::JumpToBottom => view.scroll_to_bottom(),
            Action::PrevItem => view.step_item(-1),
            Action::NextItem => view.step_item(1),
            Action::Select => view.select_item(),
            Action::OpenJoinForm => self.mode = Mode::JoinForm,
            Action::OpenDashboard => self.navigate(Route::Dashboard),
            _ => {}
        }
    }

    fn handle_form_action(&mut self, action: Action) {
        match action {
            Action::InputChar(c) => self.join_form.push(c),
            Action::Backspace => self.join_form.backspace(),
            Action::NextField => self.join_form.next_field(),
            Action::PrevField => self.join_form.prev_field(),
            Action::Cancel => self.mode = Mode::Normal,
            Action::Submit => {
                if self.join_form.can_submit() {
                    info!("Join form submitted, continuing to sign-in");
                    self.join_form.clear();
                    self.navigate(Route::Auth);
                } else {
                    self.set_status("Name and email are required");
                }
            }
            _ => {}
        }
    }

    fn handle_auth_action(&mut self, action: Action) {
        match action {
            Action::RetrySession => self.navigate(Route::Dashboard),
            Action::DemoSignIn => match &self.demo {
                Some(demo) => {
                    demo.sign_in(MemoryAuth::demo_session());
                    self.navigate(Route::Dashboard);
                }
                None => self.set_status("Sign in with: regenera login --email <email> --password <password>"),
            },
            _ => {}
        }
    }

    fn handle_dashboard_action(&mut self, action: Action) {
        let Screen::Dashboard(view) = &mut self.screen else {
            return;
        };

        match action {
            Action::PrevItem => view.focus_step(-1),
            Action::NextItem => view.focus_step(1),
            Action::Select => {
                let workspace = view.focused();
                if workspace.is_enterable() {
                    self.navigate(Route::Workspace);
                } else {
                    self.push_toast(Toast::new(
                        ToastKind::Info,
                        "Coming Soon",
                        Some(format!("{} workspace is being developed.", workspace.title)),
                    ));
                }
            }
            Action::SignOut => self.spawn_sign_out(),
            _ => {}
        }
    }

    fn handle_workspace_action(&mut self, action: Action) {
        let Screen::Workspace(view) = &mut self.screen else {
            return;
        };

        match action {
            Action::NextTab => {
                view.tabs.next();
            }
            Action::PrevTab => {
                view.tabs.prev();
            }
            Action::SelectTab(index) => {
                if let Some(tab) = WorkspaceTab::ALL.get(index) {
                    view.tabs.select(tab.id());
                }
            }
            Action::ToggleRole => {
                let role = view.toggle_role();
                self.set_status(format!("Viewing as {}", role.label()));
            }
            Action::PrevItem => view.model_step(-1),
            Action::NextItem => view.model_step(1),
            Action::RunSimulation => match view.run_simulation() {
                SimulationStart::Started => {
                    let model = view.selected_model().name;
                    self.set_status(format!("Running {}...", model));
                }
                SimulationStart::AlreadyRunning => self.set_status("Simulation already running"),
                SimulationStart::NotPermitted => {
                    self.set_status("Auditors can review results but not run simulations")
                }
            },
            Action::SignOut => self.spawn_sign_out(),
            _ => {}
        }
    }
}
