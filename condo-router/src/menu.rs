//! The top-level menu catalog: which digit maps to which document category,
//! and which conversation state follows a category handler.

use condo_core::DocumentCategory;
use condo_session::ConvState;

pub struct MenuItem {
    pub digit: &'static str,
    pub label: &'static str,
    pub category: DocumentCategory,
}

pub const MENU: [MenuItem; 6] = [
    MenuItem {
        digit: "1",
        label: "Billing statements",
        category: DocumentCategory::Billing,
    },
    MenuItem {
        digit: "2",
        label: "Monthly financial reports",
        category: DocumentCategory::MonthlyReport,
    },
    MenuItem {
        digit: "3",
        label: "Notices",
        category: DocumentCategory::Notices,
    },
    MenuItem {
        digit: "4",
        label: "Expense forecast",
        category: DocumentCategory::ExpenseForecast,
    },
    MenuItem {
        digit: "5",
        label: "Reserve fund statements",
        category: DocumentCategory::ReserveFund,
    },
    MenuItem {
        digit: "6",
        label: "Assembly minutes",
        category: DocumentCategory::AssemblyMinutes,
    },
];

pub fn item_for(input: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.digit == input)
}

pub fn label_for(category: DocumentCategory) -> &'static str {
    MENU.iter()
        .find(|item| item.category == category)
        .map(|item| item.label)
        .unwrap_or("Documents")
}

/// The state a session lands in after the category's handler has run.
pub fn next_state(category: DocumentCategory) -> ConvState {
    match category {
        DocumentCategory::Billing | DocumentCategory::Notices => ConvState::CategoryMenu,
        DocumentCategory::MonthlyReport => ConvState::PeriodSelection,
        DocumentCategory::ExpenseForecast
        | DocumentCategory::ReserveFund
        | DocumentCategory::AssemblyMinutes => ConvState::TerminalInfoMenu,
    }
}
