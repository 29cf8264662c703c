use crate::utils::error::Result;
use crate::utils::validation;
use serde::{Deserialize, Serialize};

/// A parsed pair of score inputs. No invariants beyond being valid integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub x: i64,
    pub y: i64,
}

impl ScoreInput {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Typed boundary for raw query-style parameters. Fails with
    /// `InvalidInput` when either value does not parse as an integer.
    pub fn parse(x_raw: &str, y_raw: &str) -> Result<Self> {
        let x = validation::parse_integer("x", x_raw)?;
        let y = validation::parse_integer("y", y_raw)?;
        Ok(Self { x, y })
    }
}

/// Result of the scoring rule table. Several input combinations have no
/// assigned score; those are a first-class `Undefined` outcome rather than
/// a silently-filled default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreOutcome {
    Defined(i64),
    Undefined,
}

impl ScoreOutcome {
    pub fn is_defined(&self) -> bool {
        matches!(self, ScoreOutcome::Defined(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRequest {
    pub source: String,
    pub n: i64,
}

impl PrefixRequest {
    pub fn new(source: impl Into<String>, n: i64) -> Self {
        Self {
            source: source.into(),
            n,
        }
    }

    pub fn extract(&self) -> Result<Vec<char>> {
        crate::core::prefix::extract(&self.source, self.n)
    }
}

/// Plain user record. Persistence is a collaborator concern; this type only
/// carries the fields the core operations read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// First `n + 1` characters of the email, capped at its length.
    pub fn email_prefix_chars(&self, n: i64) -> Result<Vec<char>> {
        crate::core::prefix::extract(&self.email, n)
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.email)
    }
}

/// An allow-listed remote operation. `program` and `args` are structured
/// values handed to an executor; nothing here is ever concatenated into a
/// shell command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteOp {
    pub token: String,
    pub description: String,
    pub program: String,
    pub args: Vec<String>,
}

impl RemoteOp {
    pub fn new(
        token: impl Into<String>,
        description: impl Into<String>,
        program: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            token: token.into(),
            description: description.into(),
            program: program.into(),
            args,
        }
    }
}
