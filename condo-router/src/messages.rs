//! All user-facing reply texts in one place.

use crate::menu::MENU;

pub const PROMPT_GREETING: &str = "Send \"oi\" or \"ola\" to get started!";

pub const FAREWELL: &str = "You have left the conversation. Send \"oi\" to start again.";

pub const INACTIVITY: &str =
    "Your session ended due to inactivity. Send \"oi\" to start again.";

pub const TRY_AGAIN_LATER: &str =
    "Something went wrong while processing your request. Please try again later.";

pub const INVALID_CATEGORY_OPTION: &str =
    "Invalid option. Send 0 to go back to the main menu or \"s\" to exit.";

pub const INVALID_PERIOD_OPTION: &str =
    "Invalid month. Send a number from 1 to 12, 0 to go back to the main menu, or \"s\" to exit.";

pub const INVALID_PERIOD_NAV_OPTION: &str =
    "Invalid option. Send 0 to go back to the month list or \"s\" to exit.";

pub const OPTIONS_BACK_MAIN: &str =
    "Send 0 to go back to the main menu or \"s\" to exit.";

pub const OPTIONS_BACK_MONTHS: &str =
    "Send 0 to go back to the month list or \"s\" to exit.";

pub const GREETING_IMAGE_ERROR: &str = "Could not send the assistant picture.";

const MONTH_LABELS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn unauthorized(sender_id: &str) -> String {
    format!(
        "This number ({}) is not authorized. Please contact the condominium \
         administrator to register it.",
        sender_id
    )
}

pub fn menu_text() -> String {
    let mut text = String::from("Choose an option:\n");
    for item in &MENU {
        text.push_str(&format!("{} - {}\n", item.digit, item.label));
    }
    text.push_str("\nTo exit, send \"sair\" or \"s\".");
    text
}

pub fn greeting(name: &str) -> String {
    format!(
        "Hello, {}! I am the virtual assistant of the T Lacerda condominium.\n\n{}",
        name,
        menu_text()
    )
}

pub fn invalid_main_option(raw_input: &str) -> String {
    let choices = MENU
        .iter()
        .map(|item| format!("{} for {}", item.digit, item.label))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Invalid option: \"{}\". Choose {} or \"s\" to exit.",
        raw_input, choices
    )
}

pub fn month_menu() -> String {
    let mut text = String::from("Choose the month of the financial report:\n");
    for (i, label) in MONTH_LABELS.iter().enumerate() {
        text.push_str(&format!("{} - {}\n", i + 1, label));
    }
    text.push_str("\nSend 0 to go back to the main menu or \"s\" to exit.");
    text
}

pub fn batch_preamble(count: usize, label: &str, unit: &str) -> String {
    format!("Sending {} documents ({}) for unit {}:", count, label, unit)
}

pub fn none_available(label: &str, unit: &str) -> String {
    format!(
        "There are no documents ({}) available for unit {} at the moment.",
        label, unit
    )
}

pub fn unknown_unit(label: &str, unit: &str) -> String {
    format!("No records ({}) were found for unit {}.", label, unit)
}

pub fn missing_artifact(filename: &str) -> String {
    format!(
        "Could not deliver {}: the file is missing or unreadable. \
         Please contact the administrator.",
        filename
    )
}
