//! What a comment list shows, independently of how it is drawn

use std::fmt;

use chrono::TimeZone;

use crate::{
    api::{can_edit_comment, Comment, CurrentUser, Time, User},
    EditSession, SaveFailed,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentView<'a> {
    pub comment: &'a Comment,

    /// Set iff the comment has both its edit date and editor
    pub edited: Option<EditedMarker<'a>>,

    /// Whether to show the "edit" affordance
    pub can_edit: bool,

    pub body: Body<'a>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EditedMarker<'a> {
    pub by: &'a User,
    pub on: Time,
}

impl<'a> EditedMarker<'a> {
    pub fn tooltip<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format!(
            "This comment has been edited by {} on {}",
            self.by.name,
            format_date(self.on, tz)
        )
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Body<'a> {
    Text(&'a str),
    Editor(EditorView<'a>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EditorView<'a> {
    pub draft: &'a str,

    /// Current content of the comment, shown when the draft is empty
    pub placeholder: &'a str,
    pub error: Option<&'a SaveFailed>,

    /// A save is in flight, so saving again is not possible
    pub saving: bool,
}

pub fn format_date<Tz>(t: Time, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    t.with_timezone(tz).format("%b %-d, %Y at %H:%M").to_string()
}

/// Builds the view of each comment, in the order they were given
pub fn comment_views<'a>(
    comments: &'a [Comment],
    user: Option<&CurrentUser>,
    session: &'a EditSession,
) -> Vec<CommentView<'a>> {
    let editing = session.editing();
    comments
        .iter()
        .map(|c| {
            let body = match editing {
                Some(e) if e.target == c.id => Body::Editor(EditorView {
                    draft: &e.draft,
                    placeholder: &c.content,
                    error: e.error.as_ref(),
                    saving: e.pending.is_some(),
                }),
                _ => Body::Text(&c.content),
            };
            CommentView {
                comment: c,
                edited: c.edit_info().map(|(on, by)| EditedMarker { by, on }),
                can_edit: can_edit_comment(user, c),
                body,
            }
        })
        .collect()
}
