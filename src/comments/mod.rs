pub mod api_comments;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use api_comments::ApiCommentSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub nickname: String,
    pub text: String,
    pub likes: u64,
    pub posted_timestamp: i64,
}

/// Fetches the comments of a post given its identifier.
pub trait CommentSource {
    fn extract_comments(&self, post_id: &str) -> Result<Vec<Comment>>;
}

/// Used when comment extraction is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoComments;

impl CommentSource for NoComments {
    fn extract_comments(&self, _post_id: &str) -> Result<Vec<Comment>> {
        Ok(Vec::new())
    }
}
