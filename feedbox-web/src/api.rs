use async_trait::async_trait;
use feedbox_client::{
    api::{CommentId, Error, IdeaNumber, UpdateComment},
    UpdateInvoker,
};

/// Saves comments through the feedbox http api
pub struct HttpInvoker {
    host: String,
}

impl HttpInvoker {
    pub fn new(host: String) -> HttpInvoker {
        HttpInvoker { host }
    }
}

#[async_trait(?Send)]
impl UpdateInvoker for HttpInvoker {
    async fn update_comment(
        &self,
        idea: IdeaNumber,
        comment: CommentId,
        content: String,
    ) -> Result<(), Error> {
        let resp = crate::CLIENT
            .post(format!(
                "{}/api/ideas/{}/comments/{}",
                self.host, idea, comment
            ))
            .json(&UpdateComment { content })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("failed to send comment update: {:?}", e);
                Error::Unknown(String::from("Could not reach the server, please retry"))
            })?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("failed to read error response: {:?}", e);
            Error::Unknown(format!("Server answered {status}"))
        })?;
        Err(Error::parse(&body).unwrap_or_else(|err| {
            tracing::warn!(?err, %status, "server sent an error we could not parse");
            Error::Unknown(format!("Server answered {status}"))
        }))
    }
}
