//! Users.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub signin: Option<Timestamp>,
    #[serde(default)]
    pub platform: String,
}

/// User segment of a route: the token's own user or an explicit id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRef {
    #[default]
    Me,
    Id(i64),
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Me => f.write_str("me"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for UserRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}
