use std::io::{self, BufRead, Write};

use crate::core::traits::interactive::InteractiveUserInfo;

/// Prompts on a terminal (or any reader/writer pair, for tests).
pub struct ConsoleUserInfo<R, W> {
    input: R,
    output: W,
}

impl ConsoleUserInfo<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleUserInfo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, message: &str) -> Option<String> {
        write!(self.output, "  {message} ").ok()?;
        self.output.flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl<R: BufRead, W: Write> InteractiveUserInfo for ConsoleUserInfo<R, W> {
    fn prompt_yes_no(&mut self, message: &str) -> bool {
        self.ask(&format!("{message} (yes/no):"))
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes"))
    }

    fn show_message(&mut self, message: &str) {
        let _ = writeln!(self.output, "  {message}");
    }

    fn prompt_password(&mut self, message: &str) -> Option<String> {
        self.ask(message)
    }
}
