use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown action {0:?} (expected create, update or delete)")]
    Action(String),
    #[error("unknown entity {0:?} (expected user or post)")]
    Entity(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Action::Create),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            other => Err(ParseError::Action(other.to_string())),
        }
    }
}

/// Kind of object an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    User,
    Post,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::User => "user",
            Entity::Post => "post",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Entity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Entity::User),
            "post" => Ok(Entity::Post),
            other => Err(ParseError::Entity(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Outcome line of a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub severity: Severity,
    pub message: &'static str,
}

impl Decision {
    pub fn info(message: &'static str) -> Self {
        Decision { severity: Severity::Info, message }
    }

    pub fn error(message: &'static str) -> Self {
        Decision { severity: Severity::Error, message }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Write the message as a single line to the stream matching its severity.
    pub fn emit<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        match self.severity {
            Severity::Info => writeln!(out, "{}", self.message),
            Severity::Error => writeln!(err, "{}", self.message),
        }
    }
}
