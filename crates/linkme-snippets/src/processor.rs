//! Document-level directive substitution.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::locator::{ReadFileFn, default_read_file};
use crate::{
    BlockFormatter, DEFAULT_LANGUAGE, ProcessError, RecognizedOptions, SnippetError,
    SnippetLocator, parse_directive,
};

static DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{! CODEBLOCK (.*?)!\}").unwrap());

/// Find the first directive on a line.
///
/// Returns the full directive text and its payload.
///
/// # Example
///
/// ```
/// use linkme_snippets::find_directive;
///
/// let (directive, payload) = find_directive("See {! CODEBLOCK a.py:x margin=0:0 !} here").unwrap();
/// assert_eq!(directive, "{! CODEBLOCK a.py:x margin=0:0 !}");
/// assert_eq!(payload, "a.py:x margin=0:0 ");
/// assert!(find_directive("plain text").is_none());
/// ```
#[must_use]
pub fn find_directive(line: &str) -> Option<(&str, &str)> {
    let captures = DIRECTIVE_RE.captures(line)?;
    let directive = captures.get(0)?.as_str();
    let payload = captures.get(1)?.as_str();
    Some((directive, payload))
}

/// Configuration for the document processor.
pub struct ProcessorConfig {
    /// Directory that directive paths are relative to.
    pub project_root: PathBuf,
    /// Language tag for generated code fences.
    ///
    /// Default: `python`
    pub language: String,
    /// Callback to read referenced files.
    ///
    /// Default: `std::fs::read_to_string`
    pub read_file: Option<Box<ReadFileFn>>,
}

impl ProcessorConfig {
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            language: DEFAULT_LANGUAGE.to_owned(),
            read_file: None,
        }
    }

    /// Set the language tag for generated code fences.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the file reading callback.
    #[must_use]
    pub fn with_read_file<F>(mut self, read_file: F) -> Self
    where
        F: Fn(&Path) -> io::Result<String> + Send + Sync + 'static,
    {
        self.read_file = Some(Box::new(read_file));
        self
    }
}

/// Replaces directive lines in a markdown document with code blocks.
///
/// Lines are scanned once, top to bottom. A line containing a directive is
/// replaced by the formatted block as a whole; any other line passes through
/// with a single `\n` appended.
pub struct DocumentProcessor {
    locator: SnippetLocator,
    formatter: BlockFormatter,
}

impl DocumentProcessor {
    #[must_use]
    pub fn new(config: ProcessorConfig) -> Self {
        let read_file: Box<ReadFileFn> = match config.read_file {
            Some(read_file) => read_file,
            None => Box::new(default_read_file),
        };

        Self {
            locator: SnippetLocator::from_parts(config.project_root, read_file),
            formatter: BlockFormatter::new(config.language),
        }
    }

    /// Substitute every directive in `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Directive`] for the first directive that cannot
    /// be resolved. Nothing after it is processed.
    pub fn process(&self, raw: &str) -> Result<String, ProcessError> {
        let mut output = String::with_capacity(raw.len());

        for (idx, line) in raw.lines().enumerate() {
            let Some((directive, payload)) = find_directive(line) else {
                output.push_str(line);
                output.push('\n');
                continue;
            };

            let line_num = idx + 1;
            let block =
                self.substitute(payload, line_num)
                    .map_err(|source| ProcessError::Directive {
                        line: line_num,
                        directive: directive.to_owned(),
                        source,
                    })?;
            output.push_str(&block);
        }

        Ok(output)
    }

    fn substitute(&self, payload: &str, line_num: usize) -> Result<String, SnippetError> {
        let reference = parse_directive(payload)?;
        let options = RecognizedOptions::from_reference(&reference)?;
        let window = self.locator.locate(&reference, options.margin)?;

        tracing::debug!(
            line = line_num,
            root = %self.locator.root().display(),
            file = %reference.file_path,
            marker = %reference.marker,
            start = window.start + 1,
            end = window.end(),
            "Substituted snippet"
        );

        Ok(self.formatter.format(&window, &options))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn processor_with_files(files: &[(&str, &str)]) -> DocumentProcessor {
        let files: HashMap<PathBuf, String> = files
            .iter()
            .map(|(path, content)| (Path::new("/project").join(path), (*content).to_owned()))
            .collect();
        let config = ProcessorConfig::new("/project").with_read_file(move |path| {
            files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not found"))
        });
        DocumentProcessor::new(config)
    }

    #[test]
    fn test_plain_lines_pass_through() {
        let processor = processor_with_files(&[]);
        let output = processor.process("# Title\n\nSome text.").unwrap();
        assert_eq!(output, "# Title\n\nSome text.\n");
    }

    #[test]
    fn test_each_plain_line_gets_one_terminator() {
        let processor = processor_with_files(&[]);
        for line in ["text", "  indented", "{! not a directive !}", "{! CODEBLOCK"] {
            assert_eq!(processor.process(line).unwrap(), format!("{line}\n"));
        }
    }

    #[test]
    fn test_crlf_normalized() {
        let processor = processor_with_files(&[]);
        assert_eq!(processor.process("a\r\nb\r\n").unwrap(), "a\nb\n");
    }

    #[test]
    fn test_scenario_with_heading() {
        let processor = processor_with_files(&[("src/a.py", "x\nFOO bar\ny")]);
        let output = processor
            .process("See {! CODEBLOCK src/a.py:FOO margin=1:1 heading=Example !}")
            .unwrap();
        assert_eq!(output, "Example\n```python\nx\nFOO bar\ny\n```\n");
    }

    #[test]
    fn test_directive_between_lines() {
        let processor = processor_with_files(&[("lib.rs", "use std::io;\nfn run() {}\n")]);
        let input = "Intro\n{! CODEBLOCK lib.rs:fn run margin=0:0 !}\nOutro\n";
        let output = processor.process(input).unwrap();
        assert_eq!(output, "Intro\n```python\nfn run() {}\n```\nOutro\n");
    }

    #[test]
    fn test_first_occurrence_anchors() {
        let file = "0\n1\n2\nM first\n4\n5\n6\nM second\n8";
        let processor = processor_with_files(&[("f.txt", file)]);
        let output = processor
            .process("{! CODEBLOCK f.txt:M margin=0:0 !}")
            .unwrap();
        assert_eq!(output, "```python\nM first\n```\n");
    }

    #[test]
    fn test_custom_language() {
        let config = ProcessorConfig::new("/project")
            .with_language("rust")
            .with_read_file(|_| Ok("fn main() {}".to_owned()));
        let processor = DocumentProcessor::new(config);
        let output = processor
            .process("{! CODEBLOCK main.rs:main margin=0:0 !}")
            .unwrap();
        assert_eq!(output, "```rust\nfn main() {}\n```\n");
    }

    #[test]
    fn test_missing_margin_reports_line() {
        let processor = processor_with_files(&[("a.py", "FOO")]);
        let err = processor
            .process("ok\n{! CODEBLOCK a.py:FOO heading=H !}")
            .unwrap_err();

        assert_eq!(err.line(), 2);
        assert!(matches!(
            err.snippet_error(),
            SnippetError::MissingOption { option: "margin" }
        ));
        let ProcessError::Directive { directive, .. } = &err;
        assert_eq!(directive, "{! CODEBLOCK a.py:FOO heading=H !}");
    }

    #[test]
    fn test_missing_marker_reported() {
        let processor = processor_with_files(&[("a.py", "x\ny")]);
        let err = processor
            .process("{! CODEBLOCK a.py:NOPE margin=1:1 !}")
            .unwrap_err();
        assert!(matches!(
            err.snippet_error(),
            SnippetError::MarkerNotFound { marker, .. } if marker == "NOPE"
        ));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_missing_file_reported() {
        let processor = processor_with_files(&[]);
        let err = processor
            .process("{! CODEBLOCK gone.py:x margin=0:0 !}")
            .unwrap_err();
        assert!(matches!(
            err.snippet_error(),
            SnippetError::FileNotFound { .. }
        ));
    }

    #[test]
    fn test_malformed_directive_reported() {
        let processor = processor_with_files(&[]);
        let err = processor.process("{! CODEBLOCK no-colon !}").unwrap_err();
        assert!(matches!(
            err.snippet_error(),
            SnippetError::MalformedDirective { .. }
        ));
    }

    #[test]
    fn test_only_first_directive_on_line_used() {
        let processor = processor_with_files(&[("a", "A"), ("b", "B")]);
        let output = processor
            .process("{! CODEBLOCK a:A margin=0:0 !} {! CODEBLOCK b:B margin=0:0 !}")
            .unwrap();
        assert_eq!(output, "```python\nA\n```\n");
    }

    #[test]
    fn test_real_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        std::fs::write(
            temp_dir.path().join("src/app.py"),
            "import os\n\ndef main():\n    run()\n",
        )
        .unwrap();

        let processor = DocumentProcessor::new(ProcessorConfig::new(temp_dir.path()));
        let output = processor
            .process("{! CODEBLOCK src/app.py:def main margin=1:1 !}")
            .unwrap();

        // `main` is a separate token; the marker is `def`.
        assert_eq!(output, "```python\n\ndef main():\n    run()\n```\n");
    }
}
