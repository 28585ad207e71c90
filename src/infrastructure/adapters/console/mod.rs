//! Console prompter over any reader/writer pair

use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::application::errors::PromptError;
use crate::domain::traits::{Notice, Prompter};

/// Line-oriented prompter. Stdin/stdout in the binary, in-memory buffers in tests.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    fn panel(&mut self, text: &str) -> io::Result<()> {
        let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let border = "─".repeat(width + 2);
        writeln!(self.output, "╭{}╮", border)?;
        for line in text.lines() {
            let pad = width - line.chars().count();
            writeln!(
                self.output,
                "│ {}{} │",
                line.blue().bold(),
                " ".repeat(pad)
            )?;
        }
        writeln!(self.output, "╰{}╯", border)
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String, PromptError> {
        let prompt = match default {
            Some(d) if !d.is_empty() => format!("{} {}: ", question.bold(), format!("({})", d).cyan()),
            _ => format!("{}: ", question.bold()),
        };
        let answer = self.read_line(&prompt)?;
        match default {
            Some(d) if answer.is_empty() => Ok(d.to_string()),
            _ => Ok(answer),
        }
    }

    fn select(
        &mut self,
        question: &str,
        choices: &[&str],
        default: Option<&str>,
    ) -> Result<usize, PromptError> {
        let listed = format!("[{}]", choices.join("/")).magenta();
        let prompt = match default {
            Some(d) => format!("{} {} {}: ", question.bold(), listed, format!("({})", d).cyan()),
            None => format!("{} {}: ", question.bold(), listed),
        };

        loop {
            let answer = self.read_line(&prompt)?;
            let answer = match default {
                Some(d) if answer.is_empty() => d.to_string(),
                _ => answer,
            };
            let wanted = answer.to_lowercase();
            if let Some(index) = choices.iter().position(|c| c.to_lowercase() == wanted) {
                return Ok(index);
            }
            self.notify(Notice::Error, "Please select one of the available options")?;
        }
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "(y)" } else { "(n)" };
        let prompt = format!("{} {} {}: ", question.bold(), "[y/n]".magenta(), hint.cyan());

        loop {
            let answer = self.read_line(&prompt)?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.notify(Notice::Error, "Please enter Y or N")?,
            }
        }
    }

    fn notify(&mut self, notice: Notice, message: &str) -> Result<(), PromptError> {
        match notice {
            Notice::Heading => self.panel(message)?,
            Notice::Info => writeln!(self.output, "{}", message.cyan())?,
            Notice::Success => writeln!(self.output, "{}", message.green())?,
            Notice::Warning => writeln!(self.output, "{}", message.yellow())?,
            Notice::Error => writeln!(self.output, "{}", message.red())?,
        }
        Ok(())
    }
}
