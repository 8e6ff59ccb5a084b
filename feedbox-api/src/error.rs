use std::str::FromStr;

use anyhow::{anyhow, Context};
use serde_json::json;
use uuid::Uuid;

use crate::{CommentId, IdeaNumber};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Comment {0} not found")]
    CommentNotFound(CommentId),

    #[error("Idea #{0} not found")]
    IdeaNotFound(IdeaNumber),

    #[error("Comment content is required")]
    EmptyContent,

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),

    #[error("Comment {0} has only part of its edit information")]
    InconsistentEditInfo(CommentId),
}

impl Error {
    /// Form field this error is about, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::EmptyContent | Error::NullByteInString(_) => Some("content"),
            _ => None,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "message": msg,
                "type": "unknown",
            }),
            Error::PermissionDenied => json!({
                "message": "permission denied",
                "type": "permission-denied",
            }),
            Error::CommentNotFound(c) => json!({
                "message": "comment not found",
                "type": "comment-not-found",
                "comment": c.0,
            }),
            Error::IdeaNotFound(i) => json!({
                "message": "idea not found",
                "type": "idea-not-found",
                "idea": i.0,
            }),
            Error::EmptyContent => json!({
                "message": "comment content is required",
                "type": "empty-content",
            }),
            Error::NullByteInString(s) => json!({
                "message": "there was a null byte in argument string",
                "type": "null-byte",
                "string": s,
            }),
            Error::InconsistentEditInfo(c) => json!({
                "message": "comment has only part of its edit information",
                "type": "inconsistent-edit-info",
                "comment": c.0,
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        let comment_id = || -> anyhow::Result<CommentId> {
            data.get("comment")
                .and_then(|c| c.as_str())
                .and_then(|c| Uuid::from_str(c).ok())
                .map(CommentId)
                .ok_or_else(|| anyhow!("error is about a comment without a proper comment id"))
        };
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "permission-denied" => Error::PermissionDenied,
                "comment-not-found" => Error::CommentNotFound(comment_id()?),
                "idea-not-found" => Error::IdeaNotFound(IdeaNumber(
                    data.get("idea")
                        .and_then(|i| i.as_i64())
                        .ok_or_else(|| anyhow!("error is about an idea without an idea number"))?,
                )),
                "empty-content" => Error::EmptyContent,
                "null-byte" => Error::NullByteInString(String::from(
                    data.get("string").and_then(|s| s.as_str()).ok_or_else(|| {
                        anyhow!("error is a null-byte-in-string without a string")
                    })?,
                )),
                "inconsistent-edit-info" => Error::InconsistentEditInfo(comment_id()?),
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}
