use crate::core::traits::interactive::InteractiveUserInfo;

/// Non-interactive stand-in: declines every question, answers no prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullUserInfo;

impl InteractiveUserInfo for NullUserInfo {
    fn prompt_yes_no(&mut self, _message: &str) -> bool {
        false
    }

    fn show_message(&mut self, _message: &str) {}

    fn prompt_password(&mut self, _message: &str) -> Option<String> {
        None
    }
}
