//! Snippet location inside referenced files.

use std::io;
use std::path::{Path, PathBuf};

use crate::{DirectiveReference, Margin, SnippetError};

/// Type alias for the file reading callback function.
pub type ReadFileFn = dyn Fn(&Path) -> io::Result<String> + Send + Sync;

/// Default file reading function.
pub(crate) fn default_read_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Contiguous lines cut from a referenced file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetWindow {
    /// Lines copied verbatim, without line terminators.
    pub lines: Vec<String>,
    /// 0-based index of the first window line in the file.
    pub start: usize,
    /// 0-based index of the line containing the marker.
    pub anchor: usize,
}

impl SnippetWindow {
    /// 0-based index one past the last window line.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.lines.len()
    }
}

/// Cut the window around the first line containing `marker`.
///
/// The window spans `margin.top` lines above and `margin.bottom` lines below
/// the anchor, clamped to the content. Returns `None` if no line contains
/// the marker.
///
/// # Example
///
/// ```
/// use linkme_snippets::{Margin, extract_window};
///
/// let window = extract_window("a\nb\nMARK\nc", "MARK", Margin::new(1, 5)).unwrap();
/// assert_eq!(window.lines, ["b", "MARK", "c"]);
/// assert_eq!(window.anchor, 2);
/// ```
#[must_use]
pub fn extract_window(content: &str, marker: &str, margin: Margin) -> Option<SnippetWindow> {
    let lines: Vec<&str> = content.lines().collect();
    let anchor = lines.iter().position(|line| line.contains(marker))?;

    let start = anchor.saturating_sub(margin.top);
    let last = anchor.saturating_add(margin.bottom).min(lines.len() - 1);

    Some(SnippetWindow {
        lines: lines[start..=last].iter().map(|&line| line.to_owned()).collect(),
        start,
        anchor,
    })
}

/// Resolves directive references against a project root.
pub struct SnippetLocator {
    root: PathBuf,
    read_file: Box<ReadFileFn>,
}

impl SnippetLocator {
    /// Create a locator that reads from the file system.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_read_file(root, default_read_file)
    }

    /// Create a locator with a custom file reading callback.
    #[must_use]
    pub fn with_read_file<F>(root: impl Into<PathBuf>, read_file: F) -> Self
    where
        F: Fn(&Path) -> io::Result<String> + Send + Sync + 'static,
    {
        Self {
            root: root.into(),
            read_file: Box::new(read_file),
        }
    }

    pub(crate) fn from_parts(root: PathBuf, read_file: Box<ReadFileFn>) -> Self {
        Self { root, read_file }
    }

    /// Project root that directive paths are relative to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a slash-delimited directive path onto the project root.
    ///
    /// Each segment is pushed separately so the result uses the host's
    /// separator. Empty segments are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::Path;
    /// use linkme_snippets::SnippetLocator;
    ///
    /// let locator = SnippetLocator::new("/project");
    /// assert_eq!(
    ///     locator.resolve_path("src//pkg/mod.py"),
    ///     Path::new("/project").join("src").join("pkg").join("mod.py")
    /// );
    /// ```
    #[must_use]
    pub fn resolve_path(&self, file_path: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in file_path.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path
    }

    /// Read the referenced file and extract the window around its marker.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::FileNotFound`] if the file cannot be read and
    /// [`SnippetError::MarkerNotFound`] if no line contains the marker.
    pub fn locate(
        &self,
        reference: &DirectiveReference,
        margin: Margin,
    ) -> Result<SnippetWindow, SnippetError> {
        let path = self.resolve_path(&reference.file_path);
        let content = (self.read_file)(&path).map_err(|source| SnippetError::FileNotFound {
            path: path.clone(),
            source,
        })?;

        extract_window(&content, &reference.marker, margin).ok_or_else(|| {
            SnippetError::MarkerNotFound {
                marker: reference.marker.clone(),
                path,
            }
        })
    }
}
