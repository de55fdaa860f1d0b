// Line-oriented command parsing

use crate::task::TaskId;

/// One user action, parsed from a single input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
    SetFilter(bool),
    List,
    Json,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// All digits, but out of range for an id
    InvalidId(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidId(raw) => write!(f, "not a task id: {}", raw),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
commands:
  <text> | add <text>     add a task
  done|toggle|t <id>      toggle completion
  delete|del|rm|d <id>    delete a task
  show | hide             show or hide completed tasks
  filter on|off           same as show/hide
  list|ls                 print the list
  json                    print the list as JSON
  help|?                  this text
  quit|exit               leave
any other line is added as a task, exactly as typed";

impl Command {
    /// Parse one line.
    ///
    /// Command words only apply when their argument has the right shape;
    /// anything else is added as a task with the line kept as typed.
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(Command::Empty);
        }

        let trimmed = line.trim_start();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };
        let bare = rest.is_empty();

        let cmd = match word.to_ascii_lowercase().as_str() {
            "add" if !bare => Command::Add(rest.to_string()),
            "done" | "toggle" | "t" => match parse_id(rest)? {
                Some(id) => Command::Toggle(id),
                None => Command::Add(line.to_string()),
            },
            "delete" | "del" | "rm" | "d" => match parse_id(rest)? {
                Some(id) => Command::Delete(id),
                None => Command::Add(line.to_string()),
            },
            "show" if bare => Command::SetFilter(true),
            "hide" if bare => Command::SetFilter(false),
            "filter" => match rest.to_ascii_lowercase().as_str() {
                "on" | "all" | "true" => Command::SetFilter(true),
                "off" | "active" | "false" => Command::SetFilter(false),
                _ => Command::Add(line.to_string()),
            },
            "list" | "ls" if bare => Command::List,
            "json" if bare => Command::Json,
            "help" | "?" if bare => Command::Help,
            "quit" | "exit" if bare => Command::Quit,
            _ => Command::Add(line.to_string()),
        };

        Ok(cmd)
    }
}

/// `None` when `raw` is not shaped like an id at all
fn parse_id(raw: &str) -> Result<Option<TaskId>, ParseError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| ParseError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text_is_add() {
        assert_eq!(Command::parse("buy milk").unwrap(), Command::Add("buy milk".to_string()));
        assert_eq!(Command::parse("buy milk\n").unwrap(), Command::Add("buy milk".to_string()));
    }

    #[test]
    fn test_parse_add_keyword() {
        assert_eq!(Command::parse("add call mom").unwrap(), Command::Add("call mom".to_string()));
        // A lone keyword is a one-word task
        assert_eq!(Command::parse("add").unwrap(), Command::Add("add".to_string()));
    }

    #[test]
    fn test_single_letters_keep_text_as_typed() {
        assert_eq!(
            Command::parse("a dozen eggs").unwrap(),
            Command::Add("a dozen eggs".to_string())
        );
        assert_eq!(Command::parse("a").unwrap(), Command::Add("a".to_string()));
        assert_eq!(Command::parse("q").unwrap(), Command::Add("q".to_string()));
        assert_eq!(Command::parse("t").unwrap(), Command::Add("t".to_string()));
        assert_eq!(
            Command::parse("d day preparations").unwrap(),
            Command::Add("d day preparations".to_string())
        );
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
        assert_eq!(Command::parse("   \n").unwrap(), Command::Empty);
    }

    #[test]
    fn test_parse_toggle_and_delete() {
        assert_eq!(Command::parse("done 3").unwrap(), Command::Toggle(TaskId(3)));
        assert_eq!(Command::parse("T 3").unwrap(), Command::Toggle(TaskId(3)));
        assert_eq!(Command::parse("rm  12 ").unwrap(), Command::Delete(TaskId(12)));
        assert_eq!(Command::parse("delete 1").unwrap(), Command::Delete(TaskId(1)));
    }

    #[test]
    fn test_id_commands_without_id_are_text() {
        assert_eq!(
            Command::parse("delete old emails").unwrap(),
            Command::Add("delete old emails".to_string())
        );
        assert_eq!(
            Command::parse("done laundry").unwrap(),
            Command::Add("done laundry".to_string())
        );
        assert_eq!(Command::parse("rm -1").unwrap(), Command::Add("rm -1".to_string()));
        assert_eq!(Command::parse("toggle").unwrap(), Command::Add("toggle".to_string()));
    }

    #[test]
    fn test_parse_out_of_range_id() {
        let raw = "99999999999999999999999";
        assert_eq!(
            Command::parse(&format!("done {}", raw)).unwrap_err(),
            ParseError::InvalidId(raw.to_string())
        );
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(Command::parse("show").unwrap(), Command::SetFilter(true));
        assert_eq!(Command::parse("hide").unwrap(), Command::SetFilter(false));
        assert_eq!(Command::parse("filter off").unwrap(), Command::SetFilter(false));
        assert_eq!(Command::parse("filter ON").unwrap(), Command::SetFilter(true));
        assert_eq!(
            Command::parse("filter coffee machine").unwrap(),
            Command::Add("filter coffee machine".to_string())
        );
    }

    #[test]
    fn test_keyword_with_trailing_words_is_text() {
        assert_eq!(
            Command::parse("show the demo").unwrap(),
            Command::Add("show the demo".to_string())
        );
        assert_eq!(
            Command::parse("list groceries").unwrap(),
            Command::Add("list groceries".to_string())
        );
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(Command::parse("ls").unwrap(), Command::List);
        assert_eq!(Command::parse("json").unwrap(), Command::Json);
        assert_eq!(Command::parse("?").unwrap(), Command::Help);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(ParseError::InvalidId("x".to_string()).to_string(), "not a task id: x");
    }
}
