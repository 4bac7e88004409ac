use uuid::Uuid;

use crate::adapters::PostgresStore;
use crate::domain::{build_comment_tree, Comment, CommentNode};
use crate::error::{AskpoolError, Result};

/// Threaded comments on asks
pub struct CommentService {
    store: PostgresStore,
}

impl CommentService {
    pub fn new(store: PostgresStore) -> Self {
        Self { store }
    }

    pub async fn add_comment(
        &self,
        ask_id: Uuid,
        user_id: Uuid,
        parent_id: Option<Uuid>,
        content: &str,
    ) -> Result<Comment> {
        if content.trim().is_empty() {
            return Err(AskpoolError::Validation(
                "comment content is empty".to_string(),
            ));
        }

        if self.store.get_ask(ask_id).await?.is_none() {
            return Err(AskpoolError::NotFound {
                entity: "ask",
                id: ask_id.to_string(),
            });
        }

        if let Some(parent_id) = parent_id {
            let siblings = self.store.comments_for_ask(ask_id).await?;
            if !siblings.iter().any(|c| c.id == parent_id) {
                return Err(AskpoolError::NotFound {
                    entity: "comment",
                    id: parent_id.to_string(),
                });
            }
        }

        self.store
            .create_comment(ask_id, user_id, parent_id, content)
            .await
    }

    /// The ask's comments as nested trees, siblings oldest first
    pub async fn tree_for_ask(&self, ask_id: Uuid) -> Result<Vec<CommentNode>> {
        let flat = self.store.comments_for_ask(ask_id).await?;
        Ok(build_comment_tree(flat))
    }
}
