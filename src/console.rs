use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{AppError, AppResult};

/// Line-oriented prompt/response boundary between the workflows and the
/// user. The workflows never parse structured input beyond integer menu
/// choices and the literal `"q"` sentinel.
pub trait Console {
    fn read_line(&mut self, prompt: &str) -> AppResult<String>;

    fn write_line(&mut self, line: &str);

    /// Reads until the user supplies an integer choice.
    fn read_choice(&mut self) -> AppResult<i32> {
        loop {
            let line = self.read_line("Please make your choice: ")?;
            match line.trim().parse::<i32>() {
                Ok(choice) => return Ok(choice),
                Err(_) => self.write_line("Your input is invalid!"),
            }
        }
    }
}

/// Interactive console over stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Scripted console for tests: answers prompts from a queue and records
/// everything the workflows print.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> AppResult<String> {
        self.inputs.pop_front().ok_or_else(|| {
            AppError::from(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script ran out of input",
            ))
        })
    }

    fn write_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}
