use super::parser::parse_subtitle_file_strict;
use super::types::{LyricSet, SourceKind};
use super::utils::title_from_file_name;
use crate::errors::LyricResult;
use async_trait::async_trait;
use log::info;
use std::path::{Path, PathBuf};

/// Raw subtitle text plus the name used to pick its format
#[derive(Debug, Clone)]
pub struct SubtitleDocument {
    pub file_name: String,
    pub content: String,
}

/// Anything that can hand over a complete subtitle document
#[async_trait]
pub trait SubtitleSource {
    async fn read_document(&mut self) -> LyricResult<SubtitleDocument>;
}

/// Subtitle file on the local filesystem
pub struct LocalSubtitleFile {
    path: PathBuf,
}

impl LocalSubtitleFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SubtitleSource for LocalSubtitleFile {
    async fn read_document(&mut self) -> LyricResult<SubtitleDocument> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned());
        Ok(SubtitleDocument { file_name, content })
    }
}

/// Subtitle text already held in memory (uploads, embedded fixtures)
pub struct InMemorySubtitle {
    document: SubtitleDocument,
}

impl InMemorySubtitle {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            document: SubtitleDocument {
                file_name: file_name.into(),
                content: content.into(),
            },
        }
    }
}

#[async_trait]
impl SubtitleSource for InMemorySubtitle {
    async fn read_document(&mut self) -> LyricResult<SubtitleDocument> {
        Ok(self.document.clone())
    }
}

impl LyricSet {
    /// Parse a subtitle document into a file-backed lyric set titled after
    /// the file name without its extension.
    pub fn from_subtitle(file_name: &str, content: &str) -> LyricResult<LyricSet> {
        let lines = parse_subtitle_file_strict(content, file_name)?;
        Ok(LyricSet::new(
            title_from_file_name(file_name),
            lines,
            SourceKind::File,
        ))
    }
}

/// Read a document from `source` and build a lyric set from it
pub async fn load_lyric_set<S: SubtitleSource + Send>(mut source: S) -> LyricResult<LyricSet> {
    let document = source.read_document().await?;
    let set = LyricSet::from_subtitle(&document.file_name, &document.content)?;
    info!(
        "Loaded '{}' with {} lyric entries",
        set.title(),
        set.len()
    );
    Ok(set)
}
