use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use crate::domains::comments::models::Comment;

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A visitor comment")]
pub struct CommentData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub text: String,
    /// event, story, blog_post, or null for list page comments
    pub commentable_type: Option<String>,
    pub commentable_id: Option<String>,
    /// "{name} - {first 50 characters}"
    pub display: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentData {
    fn from(comment: Comment) -> Self {
        let display = comment.to_string();
        Self {
            id: comment.id.to_string(),
            name: comment.name,
            email: comment.email,
            text: comment.text,
            commentable_type: comment.commentable_type,
            commentable_id: comment.commentable_id.map(|id| id.to_string()),
            display,
            created_at: comment.created_at,
        }
    }
}

/// Comment form posted from list and detail pages.
///
/// List pages only send `comment`; detail pages also send `name` and `email`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentForm {
    pub comment: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CommentForm {
    pub fn text(&self) -> Option<&str> {
        non_blank(self.comment.as_deref())
    }

    /// Name, email and text, when all three were filled in
    pub fn signed(&self) -> Option<(&str, &str, &str)> {
        Some((
            non_blank(self.name.as_deref())?,
            non_blank(self.email.as_deref())?,
            self.text()?,
        ))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_needs_every_field() {
        let form = CommentForm {
            comment: Some("Inspiring".to_string()),
            name: Some("Amina".to_string()),
            email: None,
        };
        assert_eq!(form.text(), Some("Inspiring"));
        assert!(form.signed().is_none());

        let form = CommentForm {
            email: Some("amina@example.com".to_string()),
            ..form
        };
        assert_eq!(form.signed(), Some(("Amina", "amina@example.com", "Inspiring")));
    }

    #[test]
    fn blank_comment_is_ignored() {
        let form = CommentForm {
            comment: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(form.text().is_none());
    }
}
