//! Command preparation - the REPL's two input channels.
//!
//! Lines starting with `.` are meta commands handled by the shell itself;
//! everything else is prepared into a [`Statement`] before touching the
//! table. Preparation failures are values whose display strings are the
//! exact messages the REPL prints; none of them terminate the process.

use thiserror::Error;

use crate::storage::page::Row;

/// A command addressed to the shell rather than the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    /// `.exit`: close the table and leave the REPL.
    Exit,
}

impl MetaCommand {
    /// Parse a line that starts with `.`.
    ///
    /// # Errors
    /// Returns [`PrepareError::Unrecognized`] for any meta command other
    /// than `.exit`.
    pub fn parse(input: &str) -> Result<Self, PrepareError> {
        match input {
            ".exit" => Ok(Self::Exit),
            _ => Err(PrepareError::Unrecognized(input.to_string())),
        }
    }
}

/// A statement ready to execute against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `insert <id> <username> <email>`, with the row already built.
    Insert(Row),
    /// `select`: print every row.
    Select,
}

impl Statement {
    /// Prepare a statement line.
    ///
    /// `select` takes no arguments and is matched exactly. `insert` takes
    /// exactly three whitespace-separated fields; the username and email
    /// are length-checked here so oversized fields never reach the row
    /// codec's silent truncation.
    ///
    /// # Errors
    /// Returns the [`PrepareError`] describing why the line is not a valid
    /// statement.
    pub fn prepare(input: &str) -> Result<Self, PrepareError> {
        if input == "select" {
            return Ok(Self::Select);
        }

        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.first() != Some(&"insert") {
            return Err(PrepareError::Unrecognized(input.to_string()));
        }
        if tokens.len() != 4 {
            return Err(PrepareError::Syntax);
        }

        let id = match tokens[1].parse::<u32>() {
            Ok(id) => id,
            // A parseable negative gets its own message; anything else
            // that is not a u32 is a syntax error.
            Err(_) => {
                return Err(match tokens[1].parse::<i64>() {
                    Ok(n) if n < 0 => PrepareError::NegativeId,
                    _ => PrepareError::Syntax,
                });
            }
        };

        let username = tokens[2];
        let email = tokens[3];
        if username.len() > Row::USERNAME_CAPACITY || email.len() > Row::EMAIL_CAPACITY {
            return Err(PrepareError::StringTooLong);
        }

        Ok(Self::Insert(Row::new(id, username, email)))
    }
}

/// Why a line could not be turned into a command.
///
/// The display strings are printed verbatim by the REPL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepareError {
    #[error("Unrecognized command '{0}'.")]
    Unrecognized(String),

    #[error("Syntax error.")]
    Syntax,

    #[error("ID must be positive.")]
    NegativeId,

    #[error("Error: string is too long.")]
    StringTooLong,
}
