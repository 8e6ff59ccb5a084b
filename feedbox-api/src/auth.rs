use crate::{Comment, CurrentUser};

/// Whether `viewer` is allowed to edit `comment`
///
/// Anonymous viewers can never edit. Collaborators can edit any comment, other
/// users only their own.
pub fn can_edit_comment(viewer: Option<&CurrentUser>, comment: &Comment) -> bool {
    match viewer {
        None => false,
        Some(u) => u.is_collaborator || u.id == comment.user.id,
    }
}
