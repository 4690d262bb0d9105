//! Roster of known users and the privilege derived for each of them.
//!
//! Display names are turned into [`UserRecord`]s exactly once. A display name whose
//! second space-separated token is `Admin` yields an admin record named after the first
//! token; every other display name yields a regular user carrying the full display name.
//! Once built, a [`Roster`] only hands out shared references.

use thiserror::Error;

/// Display names the roster is built from when no configuration overrides it.
pub const DEFAULT_DISPLAY_NAMES: [&str; 6] = [
    "Mohamed Admin",
    "Ali",
    "Khaled Admin",
    "Nour",
    "Saleh",
    "Hassen",
];

/// Marker token that grants admin privilege when it follows the name.
const ADMIN_MARKER: &str = "Admin";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("display name {0:?} does not yield a user name")]
    EmptyName(String),
}

/// Privilege level attached to a roster member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Privilege {
    Admin,
    User,
}

impl Privilege {
    /// Human-readable role name for display.
    pub fn role_name(&self) -> &'static str {
        match self {
            Privilege::Admin => "Admin",
            Privilege::User => "User",
        }
    }
}

/// A roster member after privilege derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    name: String,
    privilege: Privilege,
}

impl UserRecord {
    /// Derive a record from a display name such as `"Khaled Admin"` or `"Nour"`.
    pub fn from_display_name(display_name: &str) -> Result<Self, RosterError> {
        let mut tokens = display_name.split(' ');
        let first = tokens.next().unwrap_or_default();
        let record = if tokens.next() == Some(ADMIN_MARKER) {
            UserRecord { name: first.to_string(), privilege: Privilege::Admin }
        } else {
            UserRecord { name: display_name.to_string(), privilege: Privilege::User }
        };
        if record.name.is_empty() {
            return Err(RosterError::EmptyName(display_name.to_string()));
        }
        Ok(record)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn privilege(&self) -> Privilege {
        self.privilege
    }

    pub fn is_admin(&self) -> bool {
        self.privilege == Privilege::Admin
    }
}

/// Ordered, read-only set of user records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    records: Vec<UserRecord>,
}

impl Roster {
    /// Build a roster, failing on the first display name that yields an empty user name.
    pub fn from_display_names<I, S>(display_names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = display_names
            .into_iter()
            .map(|n| UserRecord::from_display_name(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Roster { records })
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Derived user names in roster order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name()).collect()
    }

    /// Exact, case-sensitive lookup. With duplicate names the last record wins.
    pub fn find(&self, name: &str) -> Option<&UserRecord> {
        self.records.iter().rev().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        let records = DEFAULT_DISPLAY_NAMES
            .iter()
            .filter_map(|n| UserRecord::from_display_name(n).ok())
            .collect();
        Roster { records }
    }
}
