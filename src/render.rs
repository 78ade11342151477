//! Status and error output for the editor.
//!
//! The editor shows whatever lands on stdout as the status message, so only
//! the final one-line status (or JSON report) goes there. Errors go to
//! stderr, colored when stderr is a terminal.

use crossterm::style::Stylize;
use serde::Serialize;
use std::io::{self, IsTerminal};

const LABEL_ERROR: &str = "error:";

/// Writes results for the calling editor.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
    json: bool,
}

impl Renderer {
    pub fn new(color: bool, json: bool) -> Self {
        Self {
            color: color && io::stderr().is_terminal(),
            json,
        }
    }

    /// Print a successful result: its `Display` line, or JSON with `--json`.
    pub fn report<T>(&self, value: &T)
    where
        T: Serialize + std::fmt::Display,
    {
        if self.json {
            match serde_json::to_string(value) {
                Ok(text) => println!("{text}"),
                Err(e) => self.error(&format!("failed to encode report: {e}")),
            }
        } else {
            println!("{value}");
        }
    }

    /// Print a plain status line.
    pub fn status(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.error_line(msg));
    }

    fn error_line(&self, msg: &str) -> String {
        if self.color {
            format!("{} {msg}", LABEL_ERROR.red().bold())
        } else {
            format!("{LABEL_ERROR} {msg}")
        }
    }
}
