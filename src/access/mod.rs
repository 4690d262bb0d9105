//! Access checks against the roster.
//!
//! A check looks the user up, then picks a decision line from the user's privilege,
//! the requested [`Action`] and the target [`Entity`]. Unknown users, and regular users
//! asking for anything other than `create`, get no decision at all.

use log::debug;
use std::io::{self, Write};

use crate::roster::{Privilege, Roster};

pub mod decision;

pub use decision::{Action, Decision, Entity, ParseError, Severity};

/// Decides which actions a roster member may perform
#[derive(Debug, Clone, Default)]
pub struct AccessChecker {
    roster: Roster,
}

impl AccessChecker {
    pub fn new(roster: Roster) -> Self {
        AccessChecker { roster }
    }

    /// Return the decision for `username` performing `action` on `entity`, if any.
    pub fn check(&self, username: &str, action: Action, entity: Entity) -> Option<Decision> {
        let decision = match self.roster.find(username) {
            Some(record) => match record.privilege() {
                Privilege::Admin => Some(admin_decision(action, entity)),
                Privilege::User => user_decision(action, entity),
            },
            None => None,
        };
        debug!(
            "check user={} action={} entity={} -> {:?}",
            username, action, entity, decision
        );
        decision
    }

    /// Check and write the resulting line: informational to `out`, errors to `err`.
    pub fn run<O: Write, E: Write>(
        &self,
        username: &str,
        action: Action,
        entity: Entity,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()> {
        match self.check(username, action, entity) {
            Some(decision) => decision.emit(out, err),
            None => Ok(()),
        }
    }
}

fn admin_decision(action: Action, entity: Entity) -> Decision {
    let message = match (action, entity) {
        (Action::Create, Entity::User) => "You can create a new user",
        (Action::Create, _) => "You can create a new post",
        (Action::Update, Entity::User) => "You can update a user",
        (Action::Update, _) => "You can update a post",
        (Action::Delete, Entity::User) => "You can delete a user",
        (Action::Delete, _) => "You can delete a post",
    };
    Decision::info(message)
}

/// Regular users may only create. Asking to create a user yields the refusal alone,
/// without a create-post line after it.
fn user_decision(action: Action, entity: Entity) -> Option<Decision> {
    match (action, entity) {
        (Action::Create, Entity::User) => Some(Decision::error("you are not allowed to do that")),
        (Action::Create, _) => Some(Decision::info("You can create a new post")),
        // update/delete are not handled for regular users
        _ => None,
    }
}
