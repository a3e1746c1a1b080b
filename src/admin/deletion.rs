//! Confirm-then-delete for a single user record.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{DeleteUserRequest, FormApi, UserId};

pub const CONFIRM_PROMPT: &str = "确定要删除该用户数据吗？此操作不可恢复！";
pub const DELETED_MSG: &str = "删除成功";
pub const DELETE_FAILED_MSG: &str = "删除失败";
pub const DELETE_NETWORK_ERROR_MSG: &str = "网络错误，删除失败";

/// Modal interaction available on the admin page.
#[async_trait]
pub trait AdminPrompt: Send + Sync {
    /// Ask a yes/no question. `true` means the user agreed.
    async fn confirm(&self, prompt: &str) -> bool;

    /// Show a message the user has to acknowledge.
    async fn alert(&self, message: &str);

    /// Reload the current page, dropping all client state.
    async fn reload(&self);
}

/// How a deletion attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation. Nothing was sent.
    Cancelled,
    /// The record was deleted and the page reloaded.
    Deleted,
    /// The server refused; carries the message shown.
    Refused(String),
    /// The request did not complete or the reply was unreadable.
    TransportFailed,
}

/// Deletes user records from the admin list.
pub struct UserDeletionAction {
    api: Arc<dyn FormApi>,
    prompt: Arc<dyn AdminPrompt>,
}

impl UserDeletionAction {
    pub fn new(api: Arc<dyn FormApi>, prompt: Arc<dyn AdminPrompt>) -> Self {
        Self { api, prompt }
    }

    pub async fn delete_user(&self, user_id: impl Into<UserId>) -> DeleteOutcome {
        let id = user_id.into();

        if !self.prompt.confirm(CONFIRM_PROMPT).await {
            tracing::info!(user_id = %id, "Deletion declined");
            return DeleteOutcome::Cancelled;
        }
        tracing::info!(user_id = %id, "Deletion confirmed");

        let request = DeleteUserRequest { id };
        match self.api.delete_user(&request).await {
            Ok(reply) if reply.success => {
                self.prompt.alert(DELETED_MSG).await;
                self.prompt.reload().await;
                DeleteOutcome::Deleted
            }
            Ok(reply) => {
                let msg = reply.message_or(DELETE_FAILED_MSG).to_string();
                tracing::info!(user_id = %request.id, "Server refused deletion: {}", msg);
                self.prompt.alert(&msg).await;
                DeleteOutcome::Refused(msg)
            }
            Err(e) => {
                tracing::warn!(user_id = %request.id, "Deletion request failed: {}", e);
                self.prompt.alert(DELETE_NETWORK_ERROR_MSG).await;
                DeleteOutcome::TransportFailed
            }
        }
    }
}
