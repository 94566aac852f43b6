//! Terminal prompter over stdin/stdout.

use std::io::{self, BufRead, Write};

use respin_engine::Prompter;

/// Interactive input collaborator reading from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }

    /// Read one line, without its trailing newline. A read failure or EOF
    /// is treated as a blank answer.
    fn read_line(&self) -> String {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        line
    }

    fn ask(&self, question: &str) -> String {
        print!("{}", question);
        let _ = io::stdout().flush();
        self.read_line()
    }
}

impl Prompter for StdinPrompter {
    fn prompt_url(&mut self) -> String {
        self.ask("Enter the URL to fetch content: ")
    }

    fn prompt_style(&mut self) -> String {
        self.ask("Enter AI spin style (e.g., casual, formal, neutral): ")
    }

    fn prompt_edit(&mut self) -> Option<String> {
        println!("Edit the spun content below. Type 'no' to skip editing:");
        let answer = self.read_line();
        if answer.trim().is_empty() || answer.trim().eq_ignore_ascii_case("no") {
            None
        } else {
            Some(answer)
        }
    }

    fn show_preview(&mut self, label: &str, content: &str) {
        println!("\n[{}]\n{}\n", label, content);
    }
}
