// Rust guideline compliant 2026-10-15

//! Parser for shell input lines.
//!
//! Each line holds one command: a case-insensitive verb followed by its
//! argument text. Blank lines and lines starting with `#` are ignored.

use thiserror::Error;

/// Usage summary printed by `help`.
pub const HELP: &str = "\
Commands:
  name <text>                     Set the item name field
  category <value>                Select a category (empty to clear)
  price <value>                   Set the price field
  submit                          Add the item described by the form
  add <name>, <category>, <price> Fill the form and add in one step
  delete <id>                     Delete an item (alias: rm)
  list                            Show all items (alias: ls)
  form                            Show the form fields
  categories                      Show the available categories
  help                            Show this help
  quit                            Leave the session (alias: exit)";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the name field.
    Name(String),
    /// Replace the category field.
    Category(String),
    /// Replace the price field.
    Price(String),
    /// Submit the form.
    Submit,
    /// Fill all three fields and submit.
    Add {
        /// Item name.
        name: String,
        /// Category name.
        category: String,
        /// Price text.
        price: String,
    },
    /// Delete the item with this id.
    Delete(u64),
    /// Show the item table.
    List,
    /// Show the form row.
    Form,
    /// Show configured categories.
    Categories,
    /// Show usage.
    Help,
    /// End the session.
    Quit,
}

/// Errors raised for unparseable shell input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The verb is not known.
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    /// A required argument is missing.
    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    /// The id is not a non-negative integer.
    #[error("Invalid item id '{0}'")]
    InvalidId(String),
}

/// Parses one input line.
///
/// # Returns
///
/// `Ok(None)` for blank and comment lines, `Ok(Some(command))` otherwise.
///
/// # Errors
///
/// Returns an error if the verb is unknown or its argument is malformed.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "name" => Command::Name(rest.to_string()),
        "category" => Command::Category(rest.trim().to_string()),
        "price" => Command::Price(rest.trim().to_string()),
        "submit" => Command::Submit,
        "add" => parse_add(rest)?,
        "delete" | "rm" => parse_delete(rest)?,
        "list" | "ls" => Command::List,
        "form" => Command::Form,
        "categories" => Command::Categories,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

/// Splits `<name>, <category>, <price>` from the right so names may contain commas.
fn parse_add(rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "add <name>, <category>, <price>";

    let mut parts = rest.rsplitn(3, ',');
    let price = parts.next();
    let category = parts.next();
    let name = parts.next();

    match (name, category, price) {
        (Some(name), Some(category), Some(price)) => Ok(Command::Add {
            name: name.to_string(),
            category: category.trim().to_string(),
            price: price.trim().to_string(),
        }),
        _ => Err(CommandError::MissingArgument(USAGE)),
    }
}

fn parse_delete(rest: &str) -> Result<Command, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(CommandError::MissingArgument("delete <id>"));
    }

    rest.parse()
        .map(Command::Delete)
        .map_err(|_| CommandError::InvalidId(rest.to_string()))
}
