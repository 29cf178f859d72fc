use std::io::Write;

use async_trait::async_trait;
use colored::*;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::terminal::colors;

/// Source of answers for the interactive questions.
#[async_trait]
pub trait Ask: Send {
    /// Shows `question` and returns the trimmed answer.
    async fn ask(&mut self, question: &str) -> anyhow::Result<String>;

    /// Asks a yes/no question that defaults to no.
    async fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        let answer = self.ask(&format!("{question} (y/N):")).await?;
        Ok(is_yes(&answer))
    }
}

/// Line-oriented reader over stdin.
///
/// One reader is kept for the whole session so piped answers are not lost
/// between questions.
pub struct Prompter {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompter {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait]
impl Ask for Prompter {
    /// End of input counts as an empty answer.
    async fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        {
            let mut stdout = std::io::stdout();
            write!(stdout, "{} {} ", "[>]".color(colors::PRIMARY).bold(), question)?;
            stdout.flush()?;
        }

        let answer = self.lines.next_line().await?.unwrap_or_default();
        Ok(answer.trim().to_string())
    }
}

/// `y`, `yes`, `s` and `sim` (any case) count as yes; anything else is no.
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

/// Replays fixed answers in order; runs out into empty answers.
#[cfg(test)]
pub struct ScriptedAnswers {
    answers: std::collections::VecDeque<String>,
    asked: usize,
}

#[cfg(test)]
impl ScriptedAnswers {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: 0,
        }
    }

    pub fn asked(&self) -> usize {
        self.asked
    }
}

#[cfg(test)]
#[async_trait]
impl Ask for ScriptedAnswers {
    async fn ask(&mut self, _question: &str) -> anyhow::Result<String> {
        self.asked += 1;
        Ok(self.answers.pop_front().unwrap_or_default().trim().to_string())
    }
}
