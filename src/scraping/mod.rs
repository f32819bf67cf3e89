pub mod extract_author;
pub mod extract_description;
pub mod extract_hashtags;
pub mod extract_posted_time;
pub mod extract_thumbnail;
pub mod extract_video_url;
pub mod extract_views;
pub mod selector_chain;
