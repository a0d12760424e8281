//! The transition table: (current state, normalized input) to [`Action`].
//!
//! Pure and total. Global commands win over state-specific routing; every
//! input that matches no defined transition maps to that state's invalid
//! action, never a silent no-op.

use crate::menu;
use condo_core::DocumentCategory;
use condo_session::ConvState;

/// What the dispatcher should do for one accepted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hard reset: greeting + top-level menu, whatever the prior state.
    Greet,
    /// Farewell + clear the session.
    Exit,
    /// No session and no greeting: prompt to send one.
    PromptGreeting,
    /// Run the handler for a top-level menu item.
    RunCategory(DocumentCategory),
    /// Resend the top-level menu (non-greeting variant).
    BackToMainMenu,
    /// Resolve and send the report for this month (1..=12).
    SendPeriod(u32),
    /// Re-show the month picker.
    ShowPeriodMenu,
    InvalidMainOption,
    InvalidCategoryOption,
    InvalidPeriodOption,
    InvalidPeriodNavOption,
}

pub fn route(state: Option<ConvState>, input: &str) -> Action {
    // Global commands first, valid from every state including "no session".
    match input {
        "sair" | "s" => return Action::Exit,
        "oi" | "ola" => return Action::Greet,
        _ => {}
    }

    match state {
        None => Action::PromptGreeting,
        Some(ConvState::MainMenu) => match menu::item_for(input) {
            Some(item) => Action::RunCategory(item.category),
            None => Action::InvalidMainOption,
        },
        Some(ConvState::CategoryMenu) | Some(ConvState::TerminalInfoMenu) => match input {
            "0" => Action::BackToMainMenu,
            _ => Action::InvalidCategoryOption,
        },
        Some(ConvState::PeriodSelection) => {
            if input == "0" {
                Action::BackToMainMenu
            } else {
                match input.parse::<u32>() {
                    Ok(month) if (1..=12).contains(&month) => Action::SendPeriod(month),
                    _ => Action::InvalidPeriodOption,
                }
            }
        }
        Some(ConvState::PeriodResultNavigation) => match input {
            "0" => Action::ShowPeriodMenu,
            _ => Action::InvalidPeriodNavOption,
        },
    }
}
