//! Interactive session: text commands mapped onto calculator actions

use crate::calculator::CostCalculator;
use crate::core::{Error, Period, Result};

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    Period(Period),
    Preset(String),
    Reset,
    Show,
    Devices,
    Presets,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        // "+fridge" and "-fridge" are accepted without a space
        let (verb, rest) = match line.chars().next() {
            Some(sign @ ('+' | '-')) => (&line[..1], line[sign.len_utf8()..].trim()),
            _ => match line.split_once(char::is_whitespace) {
                Some((verb, rest)) => (verb, rest.trim()),
                None => (line, ""),
            },
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" | "+" => Command::Add(required(verb, rest)?),
            "remove" | "-" => Command::Remove(required(verb, rest)?),
            "period" => Command::Period(required(verb, rest)?.parse()?),
            "preset" => Command::Preset(required(verb, rest)?),
            "reset" => Command::Reset,
            "show" => Command::Show,
            "devices" => Command::Devices,
            "presets" => Command::Presets,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(Error::InvalidCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required(verb: &str, argument: &str) -> Result<String> {
    if argument.is_empty() {
        Err(Error::InvalidCommand(format!("{} needs an argument", verb)))
    } else {
        Ok(argument.to_string())
    }
}

/// What the front end should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed and metrics were recomputed
    Changed,
    /// The command had no effect
    Unchanged,
    Show,
    Devices,
    Presets,
    Help,
    Quit,
}

/// Owns a calculator for the lifetime of one interactive session
pub struct Session {
    calculator: CostCalculator,
}

impl Session {
    pub fn new(calculator: CostCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &CostCalculator {
        &self.calculator
    }

    /// Parse and execute one input line
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Outcome>> {
        match Command::parse(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::Add(device) => {
                let id = self.calculator.catalog().resolve(&device)?;
                self.calculator.increment(&id);
                Outcome::Changed
            }
            Command::Remove(device) => {
                let id = self.calculator.catalog().resolve(&device)?;
                if self.calculator.quantity(&id) == 0 {
                    Outcome::Unchanged
                } else {
                    self.calculator.decrement(&id);
                    Outcome::Changed
                }
            }
            Command::Period(period) => changed(self.calculator.set_period(period)),
            Command::Preset(id) => changed(self.calculator.apply_preset(&id)?),
            Command::Reset => {
                self.calculator.reset();
                Outcome::Changed
            }
            Command::Show => Outcome::Show,
            Command::Devices => Outcome::Devices,
            Command::Presets => Outcome::Presets,
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }
}

fn changed(changed: bool) -> Outcome {
    if changed {
        Outcome::Changed
    } else {
        Outcome::Unchanged
    }
}
