//! Review comment model shared by the GitHub gateway and the local cache.
//!
//! A [`RawComment`] keeps the JSON document GitHub returned alongside the
//! three fields the pipeline reads, so serialising it reproduces the API
//! representation verbatim rather than a reduced projection.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Login GitHub reports for comments whose author account was deleted.
pub const GHOST_LOGIN: &str = "ghost";

/// Reasons a JSON document cannot be read as a review comment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentDecodeError {
    /// The document was not a JSON object.
    #[error("review comment must be a JSON object")]
    NotAnObject,

    /// The `id` field was missing or not an unsigned integer.
    #[error("review comment is missing a numeric id")]
    MissingId,

    /// The `body` field was present but not a string.
    #[error("review comment {id} has a non-string body")]
    InvalidBody {
        /// Identifier of the offending comment.
        id: u64,
    },

    /// The `user` object carried no usable `login`.
    #[error("review comment {id} has a user without a login")]
    MissingLogin {
        /// Identifier of the offending comment.
        id: u64,
    },
}

/// One pull request review comment as retrieved from GitHub or the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct RawComment {
    id: u64,
    author: String,
    body: String,
    document: Value,
}

impl RawComment {
    /// Builds a minimal comment document with the given id, author, and body.
    ///
    /// # Example
    ///
    /// ```
    /// use persent::RawComment;
    ///
    /// let comment = RawComment::new(7, "alice", "Looks great");
    /// assert_eq!(comment.id(), 7);
    /// assert_eq!(comment.author(), "alice");
    /// assert_eq!(comment.body(), "Looks great");
    /// ```
    #[must_use]
    pub fn new(id: u64, author: &str, body: &str) -> Self {
        Self {
            id,
            author: author.to_owned(),
            body: body.to_owned(),
            document: json!({
                "id": id,
                "body": body,
                "user": { "login": author },
            }),
        }
    }

    /// Comment identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Login of the commenting author.
    #[must_use]
    pub const fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Comment text; empty when GitHub returned no body.
    #[must_use]
    pub const fn body(&self) -> &str {
        self.body.as_str()
    }

    /// The verbatim JSON document this comment was read from.
    #[must_use]
    pub const fn document(&self) -> &Value {
        &self.document
    }
}

impl TryFrom<Value> for RawComment {
    type Error = CommentDecodeError;

    fn try_from(document: Value) -> Result<Self, Self::Error> {
        let object = document.as_object().ok_or(CommentDecodeError::NotAnObject)?;
        let id = object
            .get("id")
            .and_then(Value::as_u64)
            .ok_or(CommentDecodeError::MissingId)?;

        let body = match object.get("body") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(_) => return Err(CommentDecodeError::InvalidBody { id }),
        };

        let author = match object.get("user") {
            None | Some(Value::Null) => GHOST_LOGIN.to_owned(),
            Some(user) => user
                .get("login")
                .and_then(Value::as_str)
                .filter(|login| !login.is_empty())
                .map(ToOwned::to_owned)
                .ok_or(CommentDecodeError::MissingLogin { id })?,
        };

        Ok(Self {
            id,
            author,
            body,
            document,
        })
    }
}

impl From<RawComment> for Value {
    fn from(comment: RawComment) -> Self {
        comment.document
    }
}
