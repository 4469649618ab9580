//! Frontmatter extraction from Markdown content files.
//!
//! A content file starts with a `---` line, followed by a YAML mapping and a
//! closing `---` line. Anything after the closing delimiter is the body.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::JsonMap;

/// Opening delimiter at the very start (after an optional BOM), then the
/// shortest run of lines up to a line holding only `---`.
static FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\x{FEFF}?---[ \t]*\r?\n(.*?)(?m:^)---[ \t]*\r?(?m:$)")
        .expect("frontmatter pattern is valid")
});

/// Errors for a single content file. None of these abort a batch.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("no `---` delimited frontmatter")]
    MissingDelimiters,

    #[error("invalid YAML frontmatter")]
    Yaml(#[from] serde_yaml::Error),

    #[error("frontmatter is a {0}, expected a mapping")]
    NotAMapping(&'static str),
}

/// A parsed content file.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// File stem, the record key.
    pub slug: String,
    pub fields: JsonMap,
    pub body: String,
}

/// List `*.md` files directly inside `dir`, sorted by file name.
///
/// The extension must be lowercase `md`, so no two files share a slug.
/// A missing directory is an empty list.
pub fn list_markdown_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_markdown = path
            .extension()
            .is_some_and(|ext| ext == "md");
        if is_markdown && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Split `text` into `(frontmatter, body)`.
pub fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let caps = FRONTMATTER.captures(text)?;
    let frontmatter = caps.get(1)?.as_str();
    let end = caps.get(0)?.end();
    let body = text[end..].trim_start_matches(['\r', '\n']);
    Some((frontmatter, body))
}

/// Parse a frontmatter block into a JSON object map.
pub fn parse_frontmatter(frontmatter: &str) -> Result<JsonMap, FrontmatterError> {
    if frontmatter.trim().is_empty() {
        return Ok(JsonMap::new());
    }

    match serde_yaml::from_str::<JsonValue>(frontmatter)? {
        JsonValue::Object(map) => Ok(map),
        JsonValue::Null => Ok(JsonMap::new()),
        JsonValue::Array(_) => Err(FrontmatterError::NotAMapping("list")),
        JsonValue::String(_) => Err(FrontmatterError::NotAMapping("string")),
        JsonValue::Number(_) => Err(FrontmatterError::NotAMapping("number")),
        JsonValue::Bool(_) => Err(FrontmatterError::NotAMapping("boolean")),
    }
}

/// Parse the full text of a content file.
pub fn parse_document(slug: &str, text: &str) -> Result<Document, FrontmatterError> {
    let (frontmatter, body) = split_frontmatter(text).ok_or(FrontmatterError::MissingDelimiters)?;
    Ok(Document {
        slug: slug.to_string(),
        fields: parse_frontmatter(frontmatter)?,
        body: body.to_string(),
    })
}

/// Read and parse one content file. The slug is the file stem.
pub fn read_document(path: &Path) -> Result<Document, FrontmatterError> {
    let text = fs::read_to_string(path).map_err(|e| FrontmatterError::Io(path.to_path_buf(), e))?;
    parse_document(&slug_of(path), &text)
}

/// File stem of `path`.
pub fn slug_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
