use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A post with its comments, as returned by `GET /posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_email: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Post {
    /// Whether `email` wrote this post.
    #[must_use]
    pub fn is_authored_by(&self, email: &str) -> bool {
        self.author_email == email
    }
}

/// A comment attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author_email: String,
    pub created_at: NaiveDateTime,
}

/// Body of `POST /posts` and `PUT /posts/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
}

impl PostRequest {
    /// Both fields are required by the backend.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

/// Body of `POST /posts/{id}/comments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_post() -> serde_json::Value {
        json!({
            "id": 5,
            "title": "Hello",
            "content": "First post",
            "authorEmail": "a@b.com",
            "comments": [{
                "id": 11,
                "content": "Nice",
                "authorEmail": "c@d.com",
                "createdAt": "2024-03-01T10:15:30"
            }],
            "createdAt": "2024-03-01T09:00:00",
            "updatedAt": "2024-03-01T09:30:00.123"
        })
    }

    #[test]
    fn test_post_parses_local_date_times() {
        let post: Post = serde_json::from_value(sample_post()).unwrap();

        assert_eq!(post.id, 5);
        assert_eq!(post.author_email, "a@b.com");
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].author_email, "c@d.com");
        assert_eq!(post.created_at.to_string(), "2024-03-01 09:00:00");
    }

    #[test]
    fn test_post_without_comments_field() {
        let mut value = sample_post();
        value.as_object_mut().unwrap().remove("comments");

        let post: Post = serde_json::from_value(value).unwrap();
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_is_authored_by() {
        let post: Post = serde_json::from_value(sample_post()).unwrap();

        assert!(post.is_authored_by("a@b.com"));
        assert!(!post.is_authored_by("c@d.com"));
    }

    #[test]
    fn test_post_request_completeness() {
        let blank_title = PostRequest {
            title: "  ".to_string(),
            content: "body".to_string(),
        };
        let complete = PostRequest {
            title: "Title".to_string(),
            content: "body".to_string(),
        };

        assert!(!blank_title.is_complete());
        assert!(complete.is_complete());
        assert!(!PostRequest::default().is_complete());
    }
}
