//! Line-oriented console questions.

use std::io::{BufRead, Write};

use crate::PromptError;

const YES: [&str; 2] = ["y", "Y"];
const NO: [&str; 2] = ["n", "N"];
const RETRY_QUESTION: &str = "Please select [y/n].";

type PromptResult<T> = Result<T, PromptError>;

/// Asks questions on `output` and reads one answer per line from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and return the next line of input, without its line terminator.
    pub fn ask(&mut self, question: &str) -> PromptResult<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    /// Ask a yes/no `question`, asking again until the answer is one of `y`, `Y`, `n` or `N`.
    pub fn confirm(&mut self, question: &str) -> PromptResult<bool> {
        let mut answer = self.ask(question)?;
        loop {
            if YES.contains(&answer.as_str()) {
                return Ok(true);
            }
            if NO.contains(&answer.as_str()) {
                return Ok(false);
            }
            tracing::debug!(%answer, "rejected yes/no answer");
            answer = self.ask(RETRY_QUESTION)?;
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
