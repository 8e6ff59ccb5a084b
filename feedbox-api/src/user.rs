use uuid::Uuid;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserId(pub Uuid);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,

    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// The user currently viewing the page
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,

    /// Collaborators can edit any comment, not only their own
    pub is_collaborator: bool,

    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl CurrentUser {
    pub fn as_user(&self) -> User {
        User {
            id: self.id,
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}
