use std::rc::Rc;

use chrono::Utc;
use feedbox_client::{
    api::{can_edit_comment, Comment, CommentId, CurrentUser, Error, IdeaNumber},
    find_comment,
    view::{self, Body, CommentView, EditorView},
    EditController, SaveOutcome, SaveRequest, SessionHook, UpdateInvoker,
};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, Properties)]
pub struct CommentListProps {
    pub idea: IdeaNumber,
    pub comments: Rc<Vec<Comment>>,

    #[prop_or_default]
    pub user: Option<CurrentUser>,

    pub invoker: Rc<dyn UpdateInvoker>,

    /// Receives every comment the server accepted an edit for
    pub on_comment_updated: Callback<Comment>,

    #[prop_or_default]
    pub on_start_edit: Option<Callback<()>>,

    #[prop_or_default]
    pub on_stop_edit: Option<Callback<()>>,
}

impl PartialEq for CommentListProps {
    fn eq(&self, other: &Self) -> bool {
        self.idea == other.idea
            && self.comments == other.comments
            && self.user == other.user
            && Rc::as_ptr(&self.invoker) as *const () == Rc::as_ptr(&other.invoker) as *const ()
            && self.on_comment_updated == other.on_comment_updated
            && self.on_start_edit == other.on_start_edit
            && self.on_stop_edit == other.on_stop_edit
    }
}

pub enum CommentListMsg {
    StartEdit(CommentId),
    DraftChanged(String),
    Cancel,
    Save,
    SaveCompleted(SaveRequest, Result<(), Error>),
}

pub struct CommentList {
    controller: EditController,
}

impl CommentList {
    fn fire(ctx: &Context<Self>, hook: SessionHook) {
        let cb = match hook {
            SessionHook::Started => &ctx.props().on_start_edit,
            SessionHook::Stopped => &ctx.props().on_stop_edit,
        };
        if let Some(cb) = cb {
            cb.emit(());
        }
    }

    fn save_completed(
        &mut self,
        ctx: &Context<Self>,
        req: SaveRequest,
        result: Result<(), Error>,
    ) -> bool {
        let p = ctx.props();
        let (target, editor) = match (find_comment(&p.comments, &req.comment), &p.user) {
            (Some(t), Some(u)) => (t, u),
            _ => {
                tracing::error!(
                    comment = %req.comment,
                    "save completed for a comment or user no longer on the page"
                );
                if self.controller.session().is_editing(&req.comment) {
                    if let Some(hook) = self.controller.cancel() {
                        Self::fire(ctx, hook);
                    }
                }
                return true;
            }
        };
        match self
            .controller
            .finish_save(&req, result, target, editor, Utc::now())
        {
            SaveOutcome::Saved { updated, hook } => {
                p.on_comment_updated.emit(updated);
                Self::fire(ctx, hook);
            }
            SaveOutcome::Failed => (),
            SaveOutcome::Stale { updated } => {
                if let Some(updated) = updated {
                    p.on_comment_updated.emit(updated);
                }
            }
        }
        true
    }

    fn view_comment(&self, ctx: &Context<Self>, v: CommentView<'_>) -> Html {
        let c = v.comment;
        let edited = v.edited.map(|m| {
            html! {
                <span class="comment-edited text-muted" title={ m.tooltip(&util::local_tz()) }>
                    { " · edited" }
                </span>
            }
        });
        let edit_button = v.can_edit.then(|| {
            let id = c.id;
            html! {
                <span
                    class="comment-edit-link"
                    role="button"
                    onclick={ ctx.link().callback(move |_| CommentListMsg::StartEdit(id)) }
                >
                    { "edit" }
                </span>
            }
        });
        let body = match v.body {
            Body::Text(text) => html! { <ui::MultiLineText text={ text.to_string() } /> },
            Body::Editor(e) => self.view_editor(ctx, e),
        };
        html! {
            <li class="comment list-group-item d-flex" key={ c.id.to_string() }>
                <ui::Avatar user={ c.user.clone() } />
                <div class="flex-fill ms-2">
                    <div class="comment-header d-flex">
                        <div class="flex-fill">
                            <ui::UserName user={ c.user.clone() } />
                            <span class="text-muted">{ " · " }</span>
                            <ui::Moment date={ c.created_on } />
                            { for edited }
                        </div>
                        { for edit_button }
                    </div>
                    <div class="comment-body">{ body }</div>
                </div>
            </li>
        }
    }

    fn view_editor(&self, ctx: &Context<Self>, e: EditorView<'_>) -> Html {
        let field_error = e
            .error
            .map_or(false, |err| err.0.field() == Some("content"));
        let save_label = match e.saving {
            true => "Saving...",
            false => "Save",
        };
        html! {
            <div class="comment-editor">
                <ui::FormError error={ e.error.cloned() } />
                <textarea
                    class={ classes!("form-control", field_error.then(|| "is-invalid")) }
                    rows="4"
                    value={ e.draft.to_string() }
                    placeholder={ e.placeholder.to_string() }
                    oninput={ ctx.link().callback(|ev: InputEvent| {
                        let input: web_sys::HtmlTextAreaElement = ev.target_unchecked_into();
                        CommentListMsg::DraftChanged(input.value())
                    }) }
                />
                <div class="d-flex justify-content-end mt-2">
                    <button
                        type="button"
                        class="btn btn-secondary me-2"
                        onclick={ ctx.link().callback(|_| CommentListMsg::Cancel) }
                    >
                        { "Cancel" }
                    </button>
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled={ e.saving }
                        onclick={ ctx.link().callback(|_| CommentListMsg::Save) }
                    >
                        { save_label }
                    </button>
                </div>
            </div>
        }
    }
}

impl Component for CommentList {
    type Message = CommentListMsg;
    type Properties = CommentListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CommentList {
            controller: EditController::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let p = ctx.props();
        match msg {
            CommentListMsg::StartEdit(id) => {
                let comment = match find_comment(&p.comments, &id) {
                    Some(c) => c,
                    None => {
                        tracing::warn!(comment = %id, "asked to edit a comment that is not listed");
                        return false;
                    }
                };
                if !can_edit_comment(p.user.as_ref(), comment) {
                    tracing::warn!(comment = %id, "refusing to edit a comment without permission");
                    return false;
                }
                let hook = self.controller.start_edit(comment);
                Self::fire(ctx, hook);
            }
            CommentListMsg::DraftChanged(text) => self.controller.set_draft(text),
            CommentListMsg::Cancel => {
                if let Some(hook) = self.controller.cancel() {
                    Self::fire(ctx, hook);
                }
            }
            CommentListMsg::Save => {
                let req = match self.controller.begin_save(p.idea) {
                    Some(req) => req,
                    None => return false,
                };
                let invoker = p.invoker.clone();
                ctx.link().send_future(async move {
                    let result = invoker
                        .update_comment(req.idea, req.comment, req.content.clone())
                        .await;
                    CommentListMsg::SaveCompleted(req, result)
                });
            }
            CommentListMsg::SaveCompleted(req, result) => {
                return self.save_completed(ctx, req, result);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let p = ctx.props();
        let views = view::comment_views(&p.comments, p.user.as_ref(), self.controller.session());
        if views.is_empty() {
            return html! {
                <p class="comment-list-empty text-muted">{ "No comments yet" }</p>
            };
        }
        html! {
            <ul class="comment-list list-group">
                { for views.into_iter().map(|v| self.view_comment(ctx, v)) }
            </ul>
        }
    }
}
