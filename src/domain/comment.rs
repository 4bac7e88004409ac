use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A single comment on an ask, flat as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub ask_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A comment with its replies, as rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentNode {
    pub comment: Comment,
    pub children: Vec<CommentNode>,
}

/// Assemble flat comment rows into nested trees.
///
/// Input order is preserved within each sibling group, so callers should
/// pass rows ordered by creation time. A comment whose parent is missing
/// from the set is treated as a root rather than dropped.
pub fn build_comment_tree(comments: Vec<Comment>) -> Vec<CommentNode> {
    let ids: std::collections::HashSet<Uuid> = comments.iter().map(|c| c.id).collect();

    let mut children_of: HashMap<Uuid, Vec<Comment>> = HashMap::new();
    let mut roots: Vec<Comment> = Vec::new();

    for comment in comments {
        match comment.parent_id {
            Some(parent_id) if ids.contains(&parent_id) => {
                children_of.entry(parent_id).or_default().push(comment);
            }
            _ => roots.push(comment),
        }
    }

    roots
        .into_iter()
        .map(|c| attach_children(c, &mut children_of))
        .collect()
}

fn attach_children(comment: Comment, children_of: &mut HashMap<Uuid, Vec<Comment>>) -> CommentNode {
    let children = children_of
        .remove(&comment.id)
        .unwrap_or_default()
        .into_iter()
        .map(|c| attach_children(c, children_of))
        .collect();
    CommentNode { comment, children }
}
