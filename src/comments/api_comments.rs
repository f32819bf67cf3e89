use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::comments::{Comment, CommentSource};
use crate::config::config::CommentsConfig;
use crate::utilities::generate_random_delay::generate_random_delay;

#[derive(Deserialize)]
struct CommentListResponse {
    #[serde(default)]
    comments: Option<Vec<ApiComment>>,
}

#[derive(Deserialize)]
struct ApiComment {
    text: String,
    #[serde(default)]
    digg_count: u64,
    #[serde(default)]
    create_time: i64,
    user: ApiUser,
}

#[derive(Deserialize)]
struct ApiUser {
    unique_id: String,
    #[serde(default)]
    nickname: String,
}

/// Reads comments from the web comment-list endpoint.
///
/// Uses a blocking client, so it must not be called from inside an async task.
pub struct ApiCommentSource {
    client: Client,
    api_url: String,
    count: u32,
    min_delay: u64,
    max_delay: u64,
}

impl ApiCommentSource {
    pub fn new(config: &CommentsConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            count: config.count,
            min_delay: config.min_delay,
            max_delay: config.max_delay,
        })
    }
}

impl CommentSource for ApiCommentSource {
    fn extract_comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        generate_random_delay(self.min_delay, self.max_delay);

        let count = self.count.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("aweme_id", post_id), ("count", count.as_str()), ("cursor", "0")])
            .send()
            .with_context(|| format!("Failed to request comments for post {}", post_id))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Comment request for post {} failed with status {}", post_id, status);
        }

        let body = response
            .text()
            .context("Failed to read comment response body")?;

        parse_comment_list(&body)
    }
}

/// Maps a comment-list JSON body to comments. A `null` list means no comments.
pub fn parse_comment_list(body: &str) -> Result<Vec<Comment>> {
    let payload: CommentListResponse =
        serde_json::from_str(body).context("Failed to parse comment list as JSON")?;

    Ok(payload
        .comments
        .unwrap_or_default()
        .into_iter()
        .map(|c| Comment {
            author: c.user.unique_id,
            nickname: c.user.nickname,
            text: c.text,
            likes: c.digg_count,
            posted_timestamp: c.create_time,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_comment_fields() {
        let body = r#"{
            "status_code": 0,
            "comments": [
                {
                    "text": "first!",
                    "digg_count": 12,
                    "create_time": 1718445600,
                    "user": { "unique_id": "bob", "nickname": "Bob" }
                },
                {
                    "text": "nice",
                    "user": { "unique_id": "carol" }
                }
            ]
        }"#;

        let comments = parse_comment_list(body).unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(
            comments[0],
            Comment {
                author: "bob".to_string(),
                nickname: "Bob".to_string(),
                text: "first!".to_string(),
                likes: 12,
                posted_timestamp: 1718445600,
            }
        );
        assert_eq!(comments[1].author, "carol");
        assert_eq!(comments[1].likes, 0);
    }

    #[test]
    fn null_comment_list_is_empty() {
        let comments = parse_comment_list(r#"{"status_code":0,"comments":null}"#).unwrap();
        assert!(comments.is_empty());

        let comments = parse_comment_list(r#"{"status_code":0}"#).unwrap();
        assert!(comments.is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_comment_list("<html>captcha</html>").is_err());
    }
}
