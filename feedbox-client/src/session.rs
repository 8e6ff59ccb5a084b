use std::mem;

use chrono::Utc;

use crate::{
    api::{self, Comment, CommentId, CurrentUser, IdeaNumber, Time},
    find_comment, UpdateInvoker,
};

/// A save that was refused by the update invoker
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct SaveFailed(pub api::Error);

/// Identifies one save request, so that its response can be matched against
/// the session it was sent for
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SaveToken(u64);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Editing {
    pub target: CommentId,
    pub draft: String,

    /// Failure of the last save attempt
    pub error: Option<SaveFailed>,

    /// Save currently waiting for a response
    pub pending: Option<SaveToken>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum EditSession {
    #[default]
    Browsing,
    Editing(Editing),
}

impl EditSession {
    pub fn editing(&self) -> Option<&Editing> {
        match self {
            EditSession::Browsing => None,
            EditSession::Editing(e) => Some(e),
        }
    }

    pub fn is_editing(&self, comment: &CommentId) -> bool {
        matches!(self, EditSession::Editing(e) if e.target == *comment)
    }
}

/// Notification the owner of the controller should forward to its listeners
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionHook {
    Started,
    Stopped,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaveRequest {
    pub token: SaveToken,
    pub idea: IdeaNumber,
    pub comment: CommentId,
    pub content: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SaveOutcome {
    /// The comment was saved and the session is closed
    Saved { updated: Comment, hook: SessionHook },

    /// The save failed and the session stays open with the error set
    Failed,

    /// The response arrived after its session was cancelled or replaced. The
    /// session was left alone; `updated` is set if the server did store the
    /// new content.
    Stale { updated: Option<Comment> },
}

#[derive(Debug, Default)]
pub struct EditController {
    session: EditSession,
    next_token: u64,
}

impl EditController {
    pub fn new() -> EditController {
        EditController::default()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Opens an edit session on `comment`, replacing any current one
    pub fn start_edit(&mut self, comment: &Comment) -> SessionHook {
        if let EditSession::Editing(e) = &self.session {
            tracing::debug!(previous = %e.target, "discarding current edit session");
        }
        tracing::debug!(comment = %comment.id, "starting edit session");
        self.session = EditSession::Editing(Editing {
            target: comment.id,
            draft: comment.content.clone(),
            error: None,
            pending: None,
        });
        SessionHook::Started
    }

    pub fn set_draft(&mut self, text: String) {
        match &mut self.session {
            EditSession::Editing(e) => e.draft = text,
            EditSession::Browsing => tracing::warn!("ignoring draft update outside of an edit"),
        }
    }

    /// Closes the current session without saving anything
    pub fn cancel(&mut self) -> Option<SessionHook> {
        match mem::take(&mut self.session) {
            EditSession::Browsing => None,
            EditSession::Editing(e) => {
                tracing::debug!(comment = %e.target, "edit session cancelled");
                Some(SessionHook::Stopped)
            }
        }
    }

    /// Marks the current draft as being saved and returns the request to send
    ///
    /// Returns `None` when not editing or when a save is already in flight.
    pub fn begin_save(&mut self, idea: IdeaNumber) -> Option<SaveRequest> {
        let e = match &mut self.session {
            EditSession::Editing(e) => e,
            EditSession::Browsing => {
                tracing::warn!("ignoring save outside of an edit");
                return None;
            }
        };
        if e.pending.is_some() {
            tracing::debug!(comment = %e.target, "save already in flight");
            return None;
        }
        let token = SaveToken(self.next_token);
        self.next_token += 1;
        e.pending = Some(token);
        tracing::debug!(comment = %e.target, ?token, "saving comment");
        Some(SaveRequest {
            token,
            idea,
            comment: e.target,
            content: e.draft.clone(),
        })
    }

    /// Applies the response to `req`
    ///
    /// `target` is the current version of the comment `req` was about, as held
    /// by the owner of the comment list.
    pub fn finish_save(
        &mut self,
        req: &SaveRequest,
        result: Result<(), api::Error>,
        target: &Comment,
        editor: &CurrentUser,
        now: Time,
    ) -> SaveOutcome {
        debug_assert_eq!(req.comment, target.id, "save response for another comment");
        let is_current =
            matches!(&self.session, EditSession::Editing(e) if e.pending == Some(req.token));
        if !is_current {
            let updated = result
                .is_ok()
                .then(|| target.edited(req.content.clone(), editor.as_user(), now));
            tracing::warn!(
                comment = %req.comment,
                token = ?req.token,
                saved = updated.is_some(),
                "save response arrived for an edit session that is no longer current"
            );
            return SaveOutcome::Stale { updated };
        }
        match result {
            Ok(()) => {
                tracing::debug!(comment = %req.comment, "comment saved");
                self.session = EditSession::Browsing;
                SaveOutcome::Saved {
                    updated: target.edited(req.content.clone(), editor.as_user(), now),
                    hook: SessionHook::Stopped,
                }
            }
            Err(err) => {
                tracing::debug!(comment = %req.comment, %err, "saving comment failed");
                if let EditSession::Editing(e) = &mut self.session {
                    e.pending = None;
                    e.error = Some(SaveFailed(err));
                }
                SaveOutcome::Failed
            }
        }
    }

    /// Saves the current draft through `invoker` and waits for the response
    ///
    /// Returns `None` if there was nothing to save.
    pub async fn confirm<I: UpdateInvoker + ?Sized>(
        &mut self,
        invoker: &I,
        idea: IdeaNumber,
        comments: &[Comment],
        editor: &CurrentUser,
    ) -> Option<SaveOutcome> {
        let target = self
            .session
            .editing()
            .and_then(|e| find_comment(comments, &e.target))?;
        let req = self.begin_save(idea)?;
        let result = invoker
            .update_comment(req.idea, req.comment, req.content.clone())
            .await;
        Some(self.finish_save(&req, result, target, editor, Utc::now()))
    }
}
