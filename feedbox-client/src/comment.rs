use crate::api::{Comment, CommentId};

pub fn find_comment<'a>(comments: &'a [Comment], id: &CommentId) -> Option<&'a Comment> {
    comments.iter().find(|c| c.id == *id)
}

/// Replaces the comment that has the same id as `updated`, keeping its position
///
/// Returns `false` and leaves `comments` untouched if no such comment exists.
pub fn replace_comment(comments: &mut Vec<Comment>, updated: Comment) -> bool {
    match comments.iter_mut().find(|c| c.id == updated.id) {
        Some(c) => {
            *c = updated;
            true
        }
        None => {
            tracing::warn!(comment = %updated.id, "updated comment is not in the list");
            false
        }
    }
}
