/// Post identifier of a video URL: its final `/`-delimited segment.
pub fn extract_id_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or_default()
}
