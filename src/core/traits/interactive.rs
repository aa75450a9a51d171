/// Port for talking to the person running hostkeep.
///
/// `ConsoleUserInfo` reads from the terminal; `NullUserInfo` answers
/// nothing, for batch use.
pub trait InteractiveUserInfo {
    /// Ask a yes/no question. Anything but an explicit yes is a no.
    fn prompt_yes_no(&mut self, message: &str) -> bool;

    fn show_message(&mut self, message: &str);

    fn prompt_password(&mut self, message: &str) -> Option<String>;

    fn prompt_passphrase(&mut self, message: &str) -> Option<String> {
        self.prompt_password(message)
    }
}
