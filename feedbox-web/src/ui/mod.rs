mod app;
pub use app::{App, AppMsg, AppProps};

mod avatar;
pub use avatar::Avatar;

mod comment_list;
pub use comment_list::{CommentList, CommentListMsg, CommentListProps};

mod form_error;
pub use form_error::FormError;

mod moment;
pub use moment::Moment;

mod multi_line_text;
pub use multi_line_text::MultiLineText;

mod user_name;
pub use user_name::UserName;
