use crate::{Comment, CurrentUser, Error, Idea};

/// Initial state the server embeds into an idea page
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PageData {
    /// Base url the api is served under, eg. `https://example.org`
    pub api_host: String,

    pub idea: Idea,
    pub comments: Vec<Comment>,

    /// Unset when the page is viewed anonymously
    #[serde(default)]
    pub user: Option<CurrentUser>,
}

impl PageData {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.idea.title)?;
        for c in &self.comments {
            c.validate()?;
        }
        Ok(())
    }
}
