use chrono::Utc;

pub use uuid::Uuid;

mod auth;
pub use auth::can_edit_comment;

mod comment;
pub use comment::{Comment, CommentId, UpdateComment};

mod error;
pub use error::Error;

mod idea;
pub use idea::{Idea, IdeaId, IdeaNumber};

mod page;
pub use page::PageData;

mod user;
pub use user::{CurrentUser, User, UserId};

pub type Time = chrono::DateTime<Utc>;

// Validation functions only check what the api layer can check on its own: that
// values will survive being stored and sent back. Authorization is separate.
pub fn validate_string(s: &str) -> Result<(), Error> {
    if s.contains('\0') {
        return Err(Error::NullByteInString(String::from(s)));
    }
    Ok(())
}
