use std::rc::Rc;

use feedbox_client::{
    api::{Comment, PageData},
    replace_comment, UpdateInvoker,
};
use yew::prelude::*;

use crate::{api::HttpInvoker, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
    pub page: Rc<PageData>,
}

pub enum AppMsg {
    CommentUpdated(Comment),
    EditStarted,
    EditStopped,
}

pub struct App {
    comments: Rc<Vec<Comment>>,
    invoker: Rc<dyn UpdateInvoker>,
    editing: bool,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let page = &ctx.props().page;
        App {
            comments: Rc::new(page.comments.clone()),
            invoker: Rc::new(HttpInvoker::new(page.api_host.clone())),
            editing: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::CommentUpdated(c) => {
                tracing::debug!(comment = %c.id, "comment updated");
                replace_comment(Rc::make_mut(&mut self.comments), c)
            }
            AppMsg::EditStarted => !std::mem::replace(&mut self.editing, true),
            AppMsg::EditStopped => std::mem::replace(&mut self.editing, false),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = &ctx.props().page;
        html! {
            <div class={ classes!("container", "idea-page", self.editing.then(|| "is-editing-comment")) }>
                <h1 class="idea-title">
                    <span class="text-muted">{ format!("#{} ", page.idea.number) }</span>
                    { &page.idea.title }
                </h1>
                <ui::CommentList
                    idea={ page.idea.number }
                    comments={ self.comments.clone() }
                    user={ page.user.clone() }
                    invoker={ self.invoker.clone() }
                    on_comment_updated={ ctx.link().callback(AppMsg::CommentUpdated) }
                    on_start_edit={ ctx.link().callback(|()| AppMsg::EditStarted) }
                    on_stop_edit={ ctx.link().callback(|()| AppMsg::EditStopped) }
                />
            </div>
        }
    }
}
