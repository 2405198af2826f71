/// Navigable screens, consumed as redirect targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Auth,
    Dashboard,
    Workspace,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Auth => "/auth",
            Route::Dashboard => "/dashboard",
            Route::Workspace => "/workspace/ecosystem",
        }
    }

    /// Screens that need a signed-in session
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Workspace)
    }
}
