use std::path::PathBuf;
use std::str::FromStr;

use business::domain::product::value_objects::ProductId;

/// A `key=value` pair typed after `create` or `edit`.
pub type FieldAssignment = (String, String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Refresh,
    Search(String),
    /// `None` clears the category filter (`category --all` or a bare `category`).
    Category(Option<String>),
    Filter(String),
    Show(ProductId),
    Delete(ProductId),
    Create(Vec<FieldAssignment>),
    Edit(ProductId, Vec<FieldAssignment>),
    Image(ProductId, PathBuf),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("command.empty")]
    Empty,
    #[error("command.unknown")]
    Unknown(String),
    #[error("command.missing_argument")]
    MissingArgument(&'static str),
    #[error("command.invalid_id")]
    InvalidId(String),
    #[error("command.invalid_field")]
    InvalidField(String),
    #[error("command.unclosed_quote")]
    UnclosedQuote,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut args = split_args(line)?.into_iter();
        let name = args.next().ok_or(CommandError::Empty)?;
        let rest: Vec<String> = args.collect();

        match name.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "refresh" | "retry" => Ok(Command::Refresh),
            "search" => Ok(Command::Search(rest.join(" "))),
            "category" | "cat" => {
                if rest.len() == 1 && rest[0] == "--all" {
                    return Ok(Command::Category(None));
                }
                let category = rest.join(" ");
                match category.trim() {
                    "" => Ok(Command::Category(None)),
                    name => Ok(Command::Category(Some(name.to_string()))),
                }
            }
            "filter" => Ok(Command::Filter(rest.join(" "))),
            "show" => Ok(Command::Show(parse_id(rest.first())?)),
            "delete" | "rm" => Ok(Command::Delete(parse_id(rest.first())?)),
            "create" | "new" => Ok(Command::Create(parse_fields(&rest)?)),
            "edit" => {
                let id = parse_id(rest.first())?;
                Ok(Command::Edit(id, parse_fields(&rest[1..])?))
            }
            "image" => {
                let id = parse_id(rest.first())?;
                let path = rest.get(1).ok_or(CommandError::MissingArgument("path"))?;
                Ok(Command::Image(id, PathBuf::from(path)))
            }
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(arg: Option<&String>) -> Result<ProductId, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument("id"))?;
    match arg.parse::<ProductId>() {
        Ok(id) if id.is_assigned() => Ok(id),
        _ => Err(CommandError::InvalidId(arg.clone())),
    }
}

fn parse_fields(args: &[String]) -> Result<Vec<FieldAssignment>, CommandError> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .filter(|(key, _)| !key.trim().is_empty())
                .map(|(key, value)| (key.trim().to_ascii_lowercase(), value.to_string()))
                .ok_or_else(|| CommandError::InvalidField(arg.clone()))
        })
        .collect()
}

/// Splits a line on whitespace. Single or double quotes group words,
/// including inside an argument such as `name="Desk Lamp"`.
pub fn split_args(line: &str) -> Result<Vec<String>, CommandError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_arg = true;
            }
            None if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            None => {
                current.push(c);
                in_arg = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CommandError::UnclosedQuote);
    }
    if in_arg {
        args.push(current);
    }
    Ok(args)
}
