use std::{
    cell::RefCell,
    collections::{btree_map, BTreeMap},
    rc::Rc,
};

use async_trait::async_trait;
use chrono::Utc;
use feedbox_client::{
    api::{
        self, Comment, CommentId, CurrentUser, Error, Idea, IdeaNumber, UpdateComment,
    },
    UpdateInvoker,
};

pub struct MockServer(BTreeMap<IdeaNumber, DbIdea>);

#[derive(Debug)]
struct DbIdea {
    idea: Idea,
    comments: Vec<Comment>,
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer(BTreeMap::new())
    }

    pub fn add_idea(&mut self, idea: Idea) -> Result<(), Error> {
        match self.0.entry(idea.number) {
            btree_map::Entry::Occupied(_) => Err(Error::Unknown(format!(
                "idea number {} already used",
                idea.number
            ))),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(DbIdea {
                    idea,
                    comments: Vec::new(),
                });
                Ok(())
            }
        }
    }

    pub fn add_comment(&mut self, idea: IdeaNumber, comment: Comment) -> Result<(), Error> {
        comment.validate()?;
        let db = self.idea_mut(idea)?;
        if db.comments.iter().any(|c| c.id == comment.id) {
            return Err(Error::Unknown(format!(
                "comment id {} already used",
                comment.id
            )));
        }
        db.comments.push(comment);
        Ok(())
    }

    pub fn idea(&self, idea: IdeaNumber) -> Result<&Idea, Error> {
        self.0
            .get(&idea)
            .map(|db| &db.idea)
            .ok_or(Error::IdeaNotFound(idea))
    }

    /// Return the comments of `idea`, in creation order
    pub fn comments(&self, idea: IdeaNumber) -> Result<&[Comment], Error> {
        self.0
            .get(&idea)
            .map(|db| &db.comments as &[Comment])
            .ok_or(Error::IdeaNotFound(idea))
    }

    pub fn update_comment(
        &mut self,
        user: &CurrentUser,
        idea: IdeaNumber,
        comment: CommentId,
        req: UpdateComment,
    ) -> Result<(), Error> {
        req.validate()?;
        let c = self
            .idea_mut(idea)?
            .comments
            .iter_mut()
            .find(|c| c.id == comment)
            .ok_or(Error::CommentNotFound(comment))?;
        if !api::can_edit_comment(Some(user), c) {
            return Err(Error::PermissionDenied);
        }
        *c = c.edited(req.content, user.as_user(), Utc::now());
        Ok(())
    }

    fn idea_mut(&mut self, idea: IdeaNumber) -> Result<&mut DbIdea, Error> {
        self.0.get_mut(&idea).ok_or(Error::IdeaNotFound(idea))
    }
}

/// Update invoker that talks to a `MockServer` on behalf of `user`
#[derive(Clone)]
pub struct MockInvoker {
    server: Rc<RefCell<MockServer>>,
    user: CurrentUser,
}

impl MockInvoker {
    pub fn new(server: Rc<RefCell<MockServer>>, user: CurrentUser) -> MockInvoker {
        MockInvoker { server, user }
    }
}

#[async_trait(?Send)]
impl UpdateInvoker for MockInvoker {
    async fn update_comment(
        &self,
        idea: IdeaNumber,
        comment: CommentId,
        content: String,
    ) -> Result<(), Error> {
        self.server
            .borrow_mut()
            .update_comment(&self.user, idea, comment, UpdateComment { content })
    }
}
