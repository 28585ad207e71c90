use crate::application::errors::PromptError;

/// Kind of feedback shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Heading,
    Info,
    Success,
    Warning,
    Error,
}

/// Prompter trait - abstraction for the interactive console
pub trait Prompter {
    /// Ask a free-text question. Empty input yields `default` when one is given.
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String, PromptError>;

    /// Ask until the answer is one of `choices` (case-insensitive) and
    /// return its index. `default` must be one of `choices`.
    fn select(
        &mut self,
        question: &str,
        choices: &[&str],
        default: Option<&str>,
    ) -> Result<usize, PromptError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool, PromptError>;

    /// Show a line of feedback.
    fn notify(&mut self, notice: Notice, message: &str) -> Result<(), PromptError>;
}
