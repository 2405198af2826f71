use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use regenera_core::content::WorkspaceTab;
use regenera_core::Route;

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ShowHelp,
    ExitMode,
    ToggleDisplayMode,
    // Landing scroll
    ScrollUp,
    ScrollDown,
    ScrollHalfPageUp,
    ScrollHalfPageDown,
    JumpToTop,
    JumpToBottom,
    // Cards, pods, models
    PrevItem,
    NextItem,
    Select,
    OpenJoinForm,
    OpenDashboard,
    Back,
    SignOut,
    // Workspace
    NextTab,
    PrevTab,
    SelectTab(usize),
    ToggleRole,
    RunSimulation,
    // Auth screen
    RetrySession,
    DemoSignIn,
    // Join form
    NextField,
    PrevField,
    InputChar(char),
    Backspace,
    Submit,
    Cancel,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match app.mode {
        Mode::JoinForm => return handle_form_mode(key),
        // Any key closes help
        Mode::Help => return Action::ExitMode,
        Mode::Normal => {}
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Action::Quit,
        (KeyCode::Char('m'), KeyModifiers::NONE) => return Action::ToggleDisplayMode,
        (KeyCode::Char('?'), _) => return Action::ShowHelp,
        _ => {}
    }

    match app.route() {
        Route::Landing => handle_landing(key),
        Route::Auth => handle_auth(key),
        Route::Dashboard => handle_dashboard(key),
        Route::Workspace => handle_workspace(key, app),
    }
}

fn handle_landing(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
            Action::ScrollHalfPageDown
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
            Action::ScrollHalfPageUp
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) | (KeyCode::End, _) => Action::JumpToBottom,
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => Action::PrevItem,
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => Action::NextItem,
        (KeyCode::Enter, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => Action::Select,
        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::OpenJoinForm,
        (KeyCode::Char('d'), KeyModifiers::NONE) => Action::OpenDashboard,
        (KeyCode::Esc, _) => Action::ExitMode,
        _ => Action::None,
    }
}

fn handle_auth(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('r'), KeyModifiers::NONE) | (KeyCode::Enter, _) => Action::RetrySession,
        (KeyCode::Char('d'), KeyModifiers::NONE) => Action::DemoSignIn,
        (KeyCode::Esc, _) | (KeyCode::Char('b'), KeyModifiers::NONE) => Action::Back,
        _ => Action::None,
    }
}

fn handle_dashboard(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('h') | KeyCode::Char('k'), KeyModifiers::NONE)
        | (KeyCode::Left | KeyCode::Up, _) => Action::PrevItem,
        (KeyCode::Char('l') | KeyCode::Char('j'), KeyModifiers::NONE)
        | (KeyCode::Right | KeyCode::Down, _) => Action::NextItem,
        (KeyCode::Enter, _) => Action::Select,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::SignOut,
        (KeyCode::Esc, _) | (KeyCode::Char('b'), KeyModifiers::NONE) => Action::Back,
        _ => Action::None,
    }
}

fn handle_workspace(key: KeyEvent, app: &App) -> Action {
    let on_models = app
        .workspace()
        .is_some_and(|view| view.tabs.active() == WorkspaceTab::AiModels);

    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => Action::NextTab,
        (KeyCode::BackTab, _) => Action::PrevTab,
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::SelectTab(c as usize - '1' as usize)
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::ToggleRole,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) if on_models => {
            Action::PrevItem
        }
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) if on_models => {
            Action::NextItem
        }
        (KeyCode::Enter, _) | (KeyCode::Char('x'), KeyModifiers::NONE) if on_models => {
            Action::RunSimulation
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::SignOut,
        (KeyCode::Esc, _) | (KeyCode::Char('b'), KeyModifiers::NONE) => Action::Back,
        _ => Action::None,
    }
}

/// Handle key events while the join form has focus
fn handle_form_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Submit,
        KeyCode::Esc => Action::Cancel,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_form_mode_captures_letters() {
        assert_eq!(handle_form_mode(key(KeyCode::Char('q'))), Action::InputChar('q'));
        assert_eq!(handle_form_mode(key(KeyCode::Enter)), Action::Submit);
        assert_eq!(
            handle_form_mode(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::None
        );
    }

    #[test]
    fn test_landing_keys() {
        assert_eq!(handle_landing(key(KeyCode::Char('j'))), Action::ScrollDown);
        assert_eq!(
            handle_landing(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Action::JumpToBottom
        );
        assert_eq!(handle_landing(key(KeyCode::Char('d'))), Action::OpenDashboard);
        assert_eq!(handle_landing(key(KeyCode::Char('z'))), Action::None);
    }

    #[test]
    fn test_dashboard_keys() {
        assert_eq!(handle_dashboard(key(KeyCode::Down)), Action::NextItem);
        assert_eq!(handle_dashboard(key(KeyCode::Char('s'))), Action::SignOut);
    }
}
