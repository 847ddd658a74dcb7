//! Line-oriented interactive session.
//!
//! Each input line is parsed into a [`ShellCommand`]. Commands that change
//! the view become controller messages; the table is printed again after
//! each one, preceded by any notifications it raised.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use roster_core::{
    Controller, DeleteMessage, EditMessage, LoadMessage, Message, PaginationMessage,
    ParseFieldError, RecordField, RecordId, SearchMessage, SelectionMessage,
};
use thiserror::Error;
use tracing::debug;

use crate::render::{render_notification, render_view};

/// Prompt shown before each line.
pub const PROMPT: &str = "roster> ";

pub const HELP: &str = "\
Commands:
  search <pattern>          filter rows (any field, case-insensitive)
  clear                     clear the search
  page <n> | next | prev | first | last
  rows <n>                  rows per page
  toggle <id>               select or unselect a row
  select-page               select every row on this page
  unselect-page             unselect every row on this page
  edit <id>                 start editing a row, or save it if already editing
  set <id> <field> <value>  change name, email or role in an open edit
  discard <id>              cancel an open edit
  delete <id>               delete one row
  delete-selected           delete every selected row
  reload                    fetch the records again
  width <px>                viewport width (compact at or below the breakpoint)
  show                      print the table
  help                      show this text
  quit                      leave the shell
";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Forward to the controller.
    Dispatch(Message),
    Reload,
    Show,
    Help,
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{value}' is not a valid number for '{command}'")]
    InvalidNumber { command: &'static str, value: String },

    #[error(transparent)]
    Field(#[from] ParseFieldError),
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, ShellError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = split_word(line);
    let command = match name {
        "search" if rest.is_empty() => dispatch(Message::Search(SearchMessage::Cleared)),
        "search" => dispatch(Message::search(rest)),
        "clear" => dispatch(Message::Search(SearchMessage::Cleared)),
        "page" => {
            let page = number("page", rest, "a page number")?;
            dispatch(Message::Pagination(PaginationMessage::GoToPage(page)))
        }
        "next" => dispatch(Message::Pagination(PaginationMessage::NextPage)),
        "prev" => dispatch(Message::Pagination(PaginationMessage::PreviousPage)),
        "first" => dispatch(Message::Pagination(PaginationMessage::FirstPage)),
        "last" => dispatch(Message::Pagination(PaginationMessage::LastPage)),
        "rows" => {
            let limit = number("rows", rest, "a row count")?;
            dispatch(Message::Pagination(PaginationMessage::RowLimitChanged(limit)))
        }
        "toggle" => dispatch(Message::toggle(record_id("toggle", rest)?)),
        "select-page" => dispatch(Message::Selection(SelectionMessage::SelectAllClicked {
            checked: true,
        })),
        "unselect-page" => dispatch(Message::Selection(SelectionMessage::SelectAllClicked {
            checked: false,
        })),
        "edit" => dispatch(Message::toggle_edit(record_id("edit", rest)?)),
        "set" => {
            let (id, rest) = split_word(rest);
            let id = record_id("set", id)?;
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(ShellError::MissingArgument {
                    command: "set",
                    argument: "a field (name, email or role)",
                });
            }
            dispatch(Message::draft(id, RecordField::from_str(field)?, value))
        }
        "discard" => {
            let id = record_id("discard", rest)?;
            dispatch(Message::Edit(EditMessage::Discarded(id)))
        }
        "delete" => dispatch(Message::delete(record_id("delete", rest)?)),
        "delete-selected" => dispatch(Message::Delete(DeleteMessage::Selected)),
        "width" => {
            let width = number("width", rest, "a width in pixels")?;
            dispatch(Message::ViewportResized(width))
        }
        "reload" => ShellCommand::Reload,
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ShellError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Run a session until `quit` or end of input.
///
/// `reload` performs a fetch and returns the resulting load message.
pub fn run<R, W, L>(
    controller: &mut Controller,
    input: R,
    output: &mut W,
    mut reload: L,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    L: FnMut() -> Message,
{
    write_view(controller, output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Dispatch(message))) => {
                controller.update(message);
                write_view(controller, output)?;
            }
            Ok(Some(ShellCommand::Reload)) => {
                controller.update(Message::Load(LoadMessage::Requested));
                controller.update(reload());
                write_view(controller, output)?;
            }
            Ok(Some(ShellCommand::Show)) => {
                writeln!(output, "{}", render_view(&controller.table()))?;
            }
            Ok(Some(ShellCommand::Help)) => write!(output, "{HELP}")?,
            Ok(Some(ShellCommand::Quit)) => break,
            Err(error) => {
                debug!(%error, line = %line, "Rejected shell input");
                writeln!(output, "error: {error}")?;
            }
        }
    }
    Ok(())
}

/// Print pending notifications, then the table.
fn write_view<W: Write>(controller: &mut Controller, output: &mut W) -> io::Result<()> {
    for notification in controller.drain_notifications() {
        writeln!(output, "{}", render_notification(&notification))?;
    }
    writeln!(output, "{}", render_view(&controller.table()))
}

fn dispatch(message: Message) -> ShellCommand {
    ShellCommand::Dispatch(message)
}

/// First whitespace-separated word and the trimmed remainder.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(index) => (&text[..index], text[index..].trim()),
        None => (text, ""),
    }
}

fn record_id(command: &'static str, text: &str) -> Result<RecordId, ShellError> {
    let (id, _) = split_word(text);
    if id.is_empty() {
        return Err(ShellError::MissingArgument {
            command,
            argument: "a record id",
        });
    }
    Ok(RecordId::from(id))
}

fn number<T: FromStr>(
    command: &'static str,
    text: &str,
    argument: &'static str,
) -> Result<T, ShellError> {
    let (value, _) = split_word(text);
    if value.is_empty() {
        return Err(ShellError::MissingArgument { command, argument });
    }
    value.parse().map_err(|_| ShellError::InvalidNumber {
        command,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("# note"), Ok(None));
    }

    #[test]
    fn test_search_keeps_spaces() {
        assert_eq!(
            parse("search  arvind kumar "),
            ShellCommand::Dispatch(Message::Search(SearchMessage::Changed(
                "arvind kumar".to_string()
            )))
        );
        assert_eq!(
            parse("search"),
            ShellCommand::Dispatch(Message::Search(SearchMessage::Cleared))
        );
    }

    #[test]
    fn test_set_takes_rest_as_value() {
        assert_eq!(
            parse("set 3 name New Name"),
            ShellCommand::Dispatch(Message::draft("3", RecordField::Name, "New Name"))
        );
        assert_eq!(
            parse("set 3 EMAIL"),
            ShellCommand::Dispatch(Message::draft("3", RecordField::Email, ""))
        );
    }

    #[test]
    fn test_argument_errors() {
        assert_eq!(
            parse_command("page two"),
            Err(ShellError::InvalidNumber {
                command: "page",
                value: "two".to_string(),
            })
        );
        assert!(matches!(
            parse_command("delete"),
            Err(ShellError::MissingArgument { command: "delete", .. })
        ));
        assert!(matches!(
            parse_command("set 3 age 40"),
            Err(ShellError::Field(_))
        ));
        assert_eq!(
            parse_command("frobnicate"),
            Err(ShellError::Unknown("frobnicate".to_string()))
        );
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("quit"), ShellCommand::Quit);
        assert_eq!(parse("reload"), ShellCommand::Reload);
        assert_eq!(
            parse("select-page"),
            ShellCommand::Dispatch(Message::Selection(SelectionMessage::SelectAllClicked {
                checked: true
            }))
        );
        assert_eq!(
            parse("rows 25"),
            ShellCommand::Dispatch(Message::Pagination(PaginationMessage::RowLimitChanged(25)))
        );
        assert_eq!(
            parse("width 640"),
            ShellCommand::Dispatch(Message::ViewportResized(640))
        );
    }
}
