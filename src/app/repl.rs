use crate::core::persistence::{load_trains, save_trains};
use crate::core::registry::Registry;
use crate::core::table::render_table;
use crate::domain::model::TrainRecord;
use crate::domain::ports::Storage;
use crate::utils::error::{AppError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const HELP_TEXT: &str = "\
Commands:

add - add a train;
list - list all trains;
select <destination> - show trains bound for a destination;
help - show this help;
load <file name> - load trains from a JSON file;
save <file name> - save trains to a JSON file;
exit - quit the program.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Select(String),
    Save(String),
    Load(String),
    Help,
    Exit,
}

impl FromStr for Command {
    type Err = AppError;

    /// Only the keyword is case-insensitive. Everything after the first run
    /// of whitespace, inner spaces included, is the argument.
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let required = |usage: &str| -> Result<String> {
            if argument.is_empty() {
                Err(AppError::CommandError {
                    message: format!("Usage: {}", usage),
                })
            } else {
                Ok(argument.to_string())
            }
        };

        match keyword.to_lowercase().as_str() {
            "add" if argument.is_empty() => Ok(Command::Add),
            "list" if argument.is_empty() => Ok(Command::List),
            "help" if argument.is_empty() => Ok(Command::Help),
            "exit" if argument.is_empty() => Ok(Command::Exit),
            "select" => required("select <destination>").map(Command::Select),
            "save" => required("save <file name>").map(Command::Save),
            "load" => required("load <file name>").map(Command::Load),
            _ => Err(AppError::CommandError {
                message: format!("Unknown command {}", line),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive session over a [`Registry`]. Input and output are generic
/// so the loop can be driven from tests as well as from the terminal.
pub struct Repl<S: Storage> {
    storage: S,
    registry: Registry,
    prompt: String,
}

impl<S: Storage> Repl<S> {
    pub fn new(storage: S, prompt: impl Into<String>) -> Self {
        Self {
            storage,
            registry: Registry::new(),
            prompt: prompt.into(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Reads commands until `exit` or end of input. Only failures to write
    /// to `out` or `err` end the loop early.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        err: &mut E,
    ) -> Result<()> {
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                tracing::debug!("End of input, leaving command loop");
                writeln!(out)?;
                break;
            };
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    tracing::debug!("Rejected input {:?}: {}", line, e);
                    writeln!(err, "{}", e.user_friendly_message())?;
                    continue;
                }
            };

            if self.execute(command, input, out, err)? == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    pub fn execute<R: BufRead, W: Write, E: Write>(
        &mut self,
        command: Command,
        input: &mut R,
        out: &mut W,
        err: &mut E,
    ) -> Result<Flow> {
        tracing::debug!("Executing {:?}", command);

        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Add => {
                if let Some(train) = read_train(input, out)? {
                    self.registry.add(train);
                }
            }
            Command::List => {
                write!(out, "{}", render_table(self.registry.records()))?;
            }
            Command::Select(destination) => {
                let selected = self.registry.select(&destination);
                write!(out, "{}", render_table(&selected))?;
            }
            Command::Save(file_name) => {
                if let Err(e) = save_trains(&self.storage, &file_name, self.registry.records()) {
                    tracing::debug!("Saving {} failed: {:?}", file_name, e);
                    writeln!(err, "❌ Could not save {}: {}", file_name, e.user_friendly_message())?;
                }
            }
            Command::Load(file_name) => {
                if let Err(e) = self.load_file(&file_name, out) {
                    tracing::debug!("Loading {} failed: {:?}", file_name, e);
                    writeln!(err, "❌ Could not load {}: {}", file_name, e.user_friendly_message())?;
                }
            }
            Command::Help => {
                writeln!(out, "{}", HELP_TEXT)?;
            }
        }

        Ok(Flow::Continue)
    }

    /// Replaces the registry with the file's contents and reports the
    /// validation outcome on `out`. Invalid files are still installed; I/O
    /// and JSON syntax errors leave the registry untouched.
    pub fn load_file<W: Write>(&mut self, file_name: &str, out: &mut W) -> Result<()> {
        let loaded = load_trains(&self.storage, file_name)?;

        match &loaded.validation {
            Ok(()) => writeln!(out, "JSON file passed validation.")?,
            Err(e) => writeln!(out, "Validation error: {}", e.user_friendly_message())?,
        }

        self.registry.replace(loaded.records);
        Ok(())
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;
    read_line(input)
}

/// Prompts for the four fields of a train. Returns `None` when input ends
/// before every field was answered.
fn read_train<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<TrainRecord>> {
    let Some(departure_point) = ask(input, out, "Departure point? ")? else {
        return Ok(None);
    };
    let Some(number_train) = ask(input, out, "Train number? ")? else {
        return Ok(None);
    };
    let Some(time_departure) = ask(input, out, "Departure time? ")? else {
        return Ok(None);
    };
    let Some(destination) = ask(input, out, "Destination? ")? else {
        return Ok(None);
    };

    Ok(Some(TrainRecord::new(
        departure_point,
        number_train,
        time_departure,
        destination,
    )))
}
