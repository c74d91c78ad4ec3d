//! Word list sources.
//!
//! Fetching is the only asynchronous step of a drill. Transport failures
//! surface as [`DrillError::SourceUnavailable`]; content failures come from
//! [`parse`](crate::corpus::parse) as [`DrillError::CorpusTooSmall`].

use std::path::PathBuf;

use async_trait::async_trait;

use crate::corpus::{parse, TermCorpus};
use crate::error::{DrillError, DrillResult};

/// Somewhere a word list can be fetched from.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Short human-readable name used in messages (path or URL).
    fn describe(&self) -> String;

    /// Fetch the raw word list text.
    async fn fetch(&self) -> DrillResult<String>;
}

/// A UTF-8 file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CorpusSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> DrillResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DrillError::SourceUnavailable {
                source_name: self.describe(),
                reason: e.to_string(),
            })
    }
}

/// A word list served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CorpusSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> DrillResult<String> {
        let unavailable = |reason: String| DrillError::SourceUnavailable {
            source_name: self.describe(),
            reason,
        };

        let response = self
            .client
            .get(&self.url)
            .header("Cache-Control", "no-store")
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("HTTP {}", status.as_u16())));
        }

        response.text().await.map_err(|e| unavailable(e.to_string()))
    }
}

/// Word list text already in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    text: String,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl CorpusSource for StaticSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> DrillResult<String> {
        Ok(self.text.clone())
    }
}

/// Pick a source for a `--source` style location: URLs go over HTTP,
/// everything else is read from disk.
pub fn source_for(location: &str) -> Box<dyn CorpusSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Fetch and parse a corpus.
pub async fn load_corpus(source: &dyn CorpusSource) -> DrillResult<TermCorpus> {
    let raw = source.fetch().await?;
    let corpus = parse(&raw)?;
    tracing::info!(
        source = %source.describe(),
        entries = corpus.len(),
        "loaded word list"
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FOUR: &str = "gatto\tcat\ncane\tdog\ncasa\thouse\nsole\tsun\n";

    #[tokio::test]
    async fn file_source_loads_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, FOUR).unwrap();

        let corpus = load_corpus(&FileSource::new(&path)).await.unwrap();
        assert_eq!(corpus.len(), 4);
    }

    #[tokio::test]
    async fn file_with_byte_order_mark_loads_clean_terms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, format!("\u{FEFF}{FOUR}")).unwrap();

        let corpus = load_corpus(&FileSource::new(&path)).await.unwrap();
        assert_eq!(corpus.get(0).unwrap().term, "gatto");
    }

    #[tokio::test]
    async fn missing_file_is_source_unavailable() {
        let err = load_corpus(&FileSource::new("/definitely/not/here/words.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, DrillError::SourceUnavailable { .. }));
        assert!(err.is_load_error());
    }

    #[tokio::test]
    async fn http_source_loads_corpus() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/words.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FOUR))
            .mount(&server)
            .await;

        let source = source_for(&format!("{}/words.txt", server.uri()));
        let corpus = load_corpus(source.as_ref()).await.unwrap();
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.get(1).unwrap().term, "cane");
    }

    #[tokio::test]
    async fn http_error_status_is_source_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/words.txt"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = HttpSource::new(format!("{}/words.txt", server.uri()));
        let err = load_corpus(&source).await.unwrap_err();
        match err {
            DrillError::SourceUnavailable { reason, .. } => assert_eq!(reason, "HTTP 404"),
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn small_served_list_is_content_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("a\tb\nc\td\n"))
            .mount(&server)
            .await;

        let source = HttpSource::new(format!("{}/words.txt", server.uri()));
        let err = load_corpus(&source).await.unwrap_err();
        assert!(matches!(err, DrillError::CorpusTooSmall { found: 2, .. }));
    }

    #[tokio::test]
    async fn static_source_round_trip() {
        let corpus = load_corpus(&StaticSource::new("inline", FOUR))
            .await
            .unwrap();
        assert_eq!(corpus.len(), 4);
    }

    #[test]
    fn source_for_picks_by_scheme() {
        assert_eq!(
            source_for("https://example.com/w.txt").describe(),
            "https://example.com/w.txt"
        );
        assert_eq!(source_for("words.txt").describe(), "words.txt");
    }
}
