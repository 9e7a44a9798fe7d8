//! Output formatting utilities for the CLI.

use serde::Serialize;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Captured stdout of a container command.
#[derive(Debug, Serialize)]
pub struct StdoutOutput {
    pub command: &'static str,
    pub stdout: String,
}

impl CommandOutput for StdoutOutput {
    fn to_human(&self) -> String {
        // Container output usually ends with a newline already; `println!` adds one.
        self.stdout.trim_end_matches('\n').to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
