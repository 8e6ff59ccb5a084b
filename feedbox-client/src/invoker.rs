use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{CommentId, Error, IdeaNumber};

/// Persists the new content of a comment
///
/// Implementations report failures as an [`Error`] that is shown to the user as-is.
#[async_trait(?Send)]
pub trait UpdateInvoker {
    async fn update_comment(
        &self,
        idea: IdeaNumber,
        comment: CommentId,
        content: String,
    ) -> Result<(), Error>;
}

#[async_trait(?Send)]
impl<T: UpdateInvoker + ?Sized> UpdateInvoker for Rc<T> {
    async fn update_comment(
        &self,
        idea: IdeaNumber,
        comment: CommentId,
        content: String,
    ) -> Result<(), Error> {
        (**self).update_comment(idea, comment, content).await
    }
}
