use anyhow::{Context, Result};
use csv_async::AsyncWriterBuilder;
use tokio::fs::File as AsyncFile;
use tokio::io::BufWriter;

use crate::video_scraper::VideoRecord;

pub const CSV_HEADERS: [&str; 10] = [
    "posted_time",
    "posted_timestamp",
    "video_url",
    "thumbnail",
    "description",
    "hashtags",
    "author",
    "views",
    "comments",
    "extracted_time",
];

/// Writes every record as a pretty-printed JSON array.
pub async fn write_json(path: &str, records: &[VideoRecord]) -> Result<()> {
    let content = serde_json::to_string_pretty(records).context("Failed to serialize records")?;

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path))
}

/// Writes one `|`-delimited row per record; hashtags are space-joined and
/// comments are reduced to their count.
pub async fn write_csv(path: &str, records: &[VideoRecord]) -> Result<()> {
    let file_out = AsyncFile::create(path)
        .await
        .with_context(|| format!("Failed to create {}", path))?;
    let writer = BufWriter::new(file_out);
    let mut csv_writer = AsyncWriterBuilder::new()
        .delimiter(b'|')
        .quote(b'"')
        .double_quote(true)
        .create_writer(writer);

    csv_writer.write_record(&CSV_HEADERS).await?;

    for record in records {
        let comment_count = record.comments.as_ref().map_or(0, Vec::len);
        csv_writer
            .write_record(&[
                record.posted_time.clone(),
                record.posted_timestamp.to_string(),
                record.video_url.clone(),
                record.thumbnail.clone(),
                record.description.clone(),
                record.hashtags.join(" "),
                record.author.clone(),
                record.views.clone(),
                comment_count.to_string(),
                record.extracted_time.clone(),
            ])
            .await
            .context("Failed to write CSV record")?;
    }

    csv_writer.flush().await.context("Failed to flush CSV writer")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::Comment;

    fn record() -> VideoRecord {
        VideoRecord {
            posted_time: "2h ago".to_string(),
            posted_timestamp: 1718445600.5,
            video_url: "https://www.tiktok.com/@alice/video/987".to_string(),
            thumbnail: "https://cdn.example.com/cover.webp".to_string(),
            description: "Sunset | timelapse".to_string(),
            hashtags: vec!["#a".to_string(), "#b".to_string()],
            author: "alice".to_string(),
            views: "1.2M".to_string(),
            comments: Some(vec![Comment {
                author: "bob".to_string(),
                nickname: "Bob".to_string(),
                text: "nice".to_string(),
                likes: 1,
                posted_timestamp: 1718445700,
            }]),
            extracted_time: "2024-06-15 12:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn writes_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("videos.json");
        let path = path.to_str().unwrap();

        write_json(path, &[record()]).await.unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value[0]["author"], "alice");
        assert_eq!(value[0]["hashtags"][1], "#b");
        assert_eq!(value[0]["comments"][0]["author"], "bob");
    }

    #[tokio::test]
    async fn writes_pipe_delimited_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("videos.csv");
        let path = path.to_str().unwrap();

        write_csv(path, &[record()]).await.unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], CSV_HEADERS.join("|"));
        assert_eq!(
            lines[1],
            "2h ago|1718445600.5|https://www.tiktok.com/@alice/video/987|\
             https://cdn.example.com/cover.webp|\"Sunset | timelapse\"|#a #b|alice|1.2M|1|\
             2024-06-15 12:00:00"
        );
    }
}
