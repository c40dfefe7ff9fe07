//! One terminal session: the queue plus which identity is "me"

use crate::command::{Command, HELP};
use crate::render;
use waitlist_core::{IdentityKey, QueueError, QueueStore};

/// How `list` output is shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

/// What the prompt loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Info(String),
    Success(String),
    Error(String),
    Quit,
}

/// Presentation-side state. The store knows identity keys; only the session knows which one
/// is the person at this terminal.
pub struct Session {
    store: QueueStore,
    me: Option<IdentityKey>,
    output: OutputMode,
}

impl Session {
    pub fn new(store: QueueStore, output: OutputMode) -> Self {
        Self {
            store,
            me: None,
            output,
        }
    }

    pub fn me(&self) -> Option<&IdentityKey> {
        self.me.as_ref()
    }

    pub fn store(&self) -> &QueueStore {
        &self.store
    }

    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Join(name) => self.join(&name),
            Command::Leave => self.leave(),
            Command::List => self.list(),
            Command::Me => self.summary(),
            Command::Help => Reply::Info(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    fn join(&mut self, name: &str) -> Reply {
        if let Some(me) = &self.me {
            return Reply::Error(format!("You are already in the queue as {}", me));
        }

        match self.store.join(name) {
            Ok(member) => {
                let key = member.identity_key();
                let reply = match self.store.standing(&key) {
                    Some(standing) => Reply::Success(render::standing_summary(&standing)),
                    None => Reply::Success(format!("{} joined the queue", key)),
                };
                self.me = Some(key);
                reply
            }
            Err(e) => Reply::Error(e.to_string()),
        }
    }

    fn leave(&mut self) -> Reply {
        let Some(me) = self.me.take() else {
            return Reply::Error("You are not in the queue".to_string());
        };

        match self.store.leave(&me) {
            Ok(member) => Reply::Success(format!("{} left the queue", member.display_name())),
            // Someone else removed us; the session is out of the queue either way
            Err(e @ QueueError::NotFound(_)) => Reply::Error(e.to_string()),
            Err(e) => {
                self.me = Some(me);
                Reply::Error(e.to_string())
            }
        }
    }

    fn list(&self) -> Reply {
        let standings = self.store.standings();
        match self.output {
            OutputMode::Table => {
                Reply::Info(render::standings_table(&standings, self.me.as_ref()))
            }
            OutputMode::Json => match serde_json::to_string_pretty(&standings) {
                Ok(json) => Reply::Info(json),
                Err(e) => Reply::Error(format!("Failed to encode queue: {}", e)),
            },
        }
    }

    fn summary(&self) -> Reply {
        match self.me.as_ref().and_then(|me| self.store.standing(me)) {
            Some(standing) => Reply::Info(render::standing_summary(&standing)),
            None => Reply::Info(format!(
                "You are not in the queue. {} waiting",
                self.store.len()
            )),
        }
    }
}
