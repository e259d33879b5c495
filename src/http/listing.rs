//! Directory listings for folders without an `index.html`.
//!
//! Installed as the `ServeDir` fallback, so it only sees requests the file
//! service could not answer: missing files and index-less directories.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::{IntoResponse, Response},
};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::Write;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Characters left as-is in listing hrefs.
const HREF: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    is_dir: bool,
    is_symlink: bool,
}

impl Entry {
    fn href(&self) -> String {
        let mut href = utf8_percent_encode(&self.name, HREF).to_string();
        if self.is_dir {
            href.push('/');
        }
        href
    }

    /// Symlinks are marked with `@` only, even when they point at a
    /// directory; the href still carries the trailing slash.
    fn display_name(&self) -> String {
        let mut name = self.name.clone();
        if self.is_symlink {
            name.push('@');
        } else if self.is_dir {
            name.push('/');
        }
        name
    }
}

/// Renders directory listings below a document root.
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    root: Arc<PathBuf>,
}

impl DirectoryListing {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Answer a request the file service could not.
    pub async fn respond(&self, request: Request<Body>) -> Response {
        let uri_path = request.uri().path();

        let Some(relative) = resolve_relative(uri_path) else {
            tracing::debug!(path = %uri_path, "Rejected listing path");
            return not_found();
        };
        if !uri_path.ends_with('/') {
            return not_found();
        }

        let dir = self.root.join(relative);
        match tokio::fs::metadata(&dir).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return not_found(),
            Err(e) => return io_error_response(&dir, e),
        }
        let entries = match read_entries(&dir).await {
            Ok(entries) => entries,
            Err(e) => return io_error_response(&dir, e),
        };

        let title_path = percent_decode_str(uri_path).decode_utf8_lossy();
        let page = render(&title_path, &entries);

        let content_length = page.len();
        let body = if request.method() == Method::HEAD {
            Body::empty()
        } else {
            Body::from(page)
        };
        (
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
                (header::CONTENT_LENGTH, content_length.to_string()),
            ],
            body,
        )
            .into_response()
    }
}

/// Map a request path onto a relative filesystem path, rejecting anything
/// that could leave the document root.
fn resolve_relative(uri_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(uri_path.trim_start_matches('/'))
        .decode_utf8()
        .ok()?;

    let mut relative = PathBuf::new();
    for component in Path::new(&*decoded).components() {
        match component {
            Component::Normal(segment) => {
                // A single URL segment must not smuggle in separators or
                // drive prefixes for the host platform.
                let nested_ok = Path::new(segment)
                    .components()
                    .all(|c| matches!(c, Component::Normal(_)));
                if !nested_ok {
                    return None;
                }
                relative.push(segment);
            }
            Component::CurDir => {}
            Component::Prefix(_) | Component::RootDir | Component::ParentDir => return None,
        }
    }
    Some(relative)
}

async fn read_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut read_dir = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = read_dir.next_entry().await? {
        let Some(is_symlink) = symlink_flag(&entry.path(), entry.file_type().await) else {
            continue;
        };
        // Follows symlinks; a dangling link is listed as a plain file.
        let is_dir = tokio::fs::metadata(entry.path())
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
            is_symlink,
        });
    }

    entries.sort_by_cached_key(|entry| entry.name.to_lowercase());
    Ok(entries)
}

/// `None` for an entry that could not be inspected, e.g. one removed since
/// the directory was read; such entries are left out of the listing.
fn symlink_flag(path: &Path, file_type: io::Result<std::fs::FileType>) -> Option<bool> {
    match file_type {
        Ok(file_type) => Some(file_type.is_symlink()),
        Err(e) => {
            tracing::debug!(entry = %path.display(), error = %e, "Skipping entry");
            None
        }
    }
}

fn render(title_path: &str, entries: &[Entry]) -> String {
    let title = format!("Directory listing for {}", escape_html(title_path));
    let mut page = String::new();

    let _ = write!(
        page,
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n<ul>\n"
    );
    for entry in entries {
        let _ = writeln!(
            page,
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&entry.href()),
            escape_html(&entry.display_name())
        );
    }
    page.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    page
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn io_error_response(dir: &Path, error: io::Error) -> Response {
    match error.kind() {
        io::ErrorKind::NotFound => not_found(),
        io::ErrorKind::PermissionDenied => {
            tracing::debug!(dir = %dir.display(), "Listing not permitted");
            (StatusCode::FORBIDDEN, "No permission to list directory").into_response()
        }
        _ => {
            tracing::warn!(dir = %dir.display(), error = %error, "Failed to list directory");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to list directory").into_response()
        }
    }
}
