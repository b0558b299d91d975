use std::path::{Path, PathBuf};

use super::post::PostData;

const SAMPLE_POST: &str = include_str!("../../assets/sample_post.json");

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Could not read post file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid post document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn parse_post(json: &str) -> Result<PostData, FixtureError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_post(path: &Path) -> Result<PostData, FixtureError> {
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded post document from {}", path.display());
    parse_post(&json)
}

pub fn sample_post() -> Result<PostData, FixtureError> {
    parse_post(SAMPLE_POST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentBlock, ContentKind};

    #[test]
    fn test_parse_post_document() {
        let post = parse_post(
            r#"{
                "author": { "name": "Ana", "role": "Dev", "avatarUrl": "https://example.com/a.png" },
                "publishedAt": "2022-05-10T08:13:00-03:00",
                "content": [
                    { "type": "paragraph", "content": "Hello" },
                    { "type": "link", "content": "Click" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(post.author.avatar_url, "https://example.com/a.png");
        assert_eq!(post.published_at.to_rfc3339(), "2022-05-10T08:13:00-03:00");
        assert_eq!(
            post.content,
            vec![ContentBlock::paragraph("Hello"), ContentBlock::link("Click")]
        );
    }

    #[test]
    fn test_missing_content_is_empty() {
        let post = parse_post(
            r#"{
                "author": { "name": "Ana", "role": "Dev", "avatarUrl": "" },
                "publishedAt": "2022-05-10T08:13:00Z"
            }"#,
        )
        .unwrap();
        assert!(post.content.is_empty());
    }

    #[test]
    fn test_unknown_block_type_is_rejected() {
        let result = parse_post(
            r#"{
                "author": { "name": "Ana", "role": "Dev", "avatarUrl": "" },
                "publishedAt": "2022-05-10T08:13:00Z",
                "content": [ { "type": "video", "content": "x" } ]
            }"#,
        );
        assert!(matches!(result, Err(FixtureError::Parse(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_post(Path::new("/nonexistent/post.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/post.json"));
    }

    #[test]
    fn test_sample_post_parses() {
        let post = sample_post().unwrap();
        assert!(post.content.iter().any(|block| block.kind == ContentKind::Link));
    }
}
