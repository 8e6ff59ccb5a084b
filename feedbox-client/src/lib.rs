mod comment;
pub use comment::{find_comment, replace_comment};

mod invoker;
pub use invoker::UpdateInvoker;

mod session;
pub use session::{
    EditController, EditSession, Editing, SaveFailed, SaveOutcome, SaveRequest, SaveToken,
    SessionHook,
};

pub mod view;

pub mod api {
    pub use feedbox_api::*;
}
