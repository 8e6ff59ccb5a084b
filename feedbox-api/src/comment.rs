use std::fmt;

use uuid::Uuid;

use crate::{Error, Time, User};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub Uuid);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,

    /// Author of the comment
    pub user: User,
    pub created_on: Time,

    // Either both or none of these are set
    #[serde(default)]
    pub edited_on: Option<Time>,
    #[serde(default)]
    pub edited_by: Option<User>,
}

impl Comment {
    /// Returns when and by whom this comment was last edited, if it ever was
    ///
    /// A comment that has only one of the two fields set is considered as not
    /// edited.
    pub fn edit_info(&self) -> Option<(Time, &User)> {
        match (&self.edited_on, &self.edited_by) {
            (Some(on), Some(by)) => Some((*on, by)),
            _ => None,
        }
    }

    /// Returns a copy of this comment with `content` as new body, edited by
    /// `editor` at `now`
    pub fn edited(&self, content: String, editor: User, now: Time) -> Comment {
        Comment {
            content,
            edited_on: Some(now),
            edited_by: Some(editor),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.content)?;
        if self.edited_on.is_some() != self.edited_by.is_some() {
            return Err(Error::InconsistentEditInfo(self.id));
        }
        Ok(())
    }
}

/// Body of a comment update request
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UpdateComment {
    pub content: String,
}

impl UpdateComment {
    pub fn validate(&self) -> Result<(), Error> {
        if self.content.trim().is_empty() {
            return Err(Error::EmptyContent);
        }
        crate::validate_string(&self.content)
    }
}
