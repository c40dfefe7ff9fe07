//! Session commands typed at the prompt

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Join with a full name (`join Alice Brown`)
    Join(String),
    /// Leave the queue with the identity this session joined under
    Leave,
    /// Show the whole queue
    List,
    /// Show this session's own position and wait
    Me,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "join" => Ok(Command::Join(rest.to_string())),
            "leave" => Ok(Command::Leave),
            "list" | "ls" => Ok(Command::List),
            "me" | "status" => Ok(Command::Me),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err("Type a command, or `help` for the list".to_string()),
            other => Err(format!("Unknown command `{}` (try `help`)", other)),
        }
    }
}

pub const HELP: &str = "\
Commands:
  join <full name>   Join the queue
  leave              Leave the queue
  list               Show everyone waiting
  me                 Show your position and wait
  help               Show this message
  quit               Exit";
