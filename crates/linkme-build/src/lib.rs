//! Document build pipeline for LinkMe.
//!
//! [`ProjectBuilder`] turns the configured input document into the output
//! HTML file:
//!
//! 1. read the input markdown;
//! 2. substitute `{! CODEBLOCK !}` directives ([`linkme_snippets`]);
//! 3. render markdown to HTML ([`linkme_renderer`]);
//! 4. write the output file.
//!
//! The output file is only written after steps 1-3 succeed, so a failed
//! build never leaves partial output behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use linkme_config::ProjectConfig;
use linkme_renderer::MarkdownRenderer;
use linkme_snippets::{DocumentProcessor, ProcessError, ProcessorConfig};

/// Error returned when a build fails.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Input document could not be read.
    #[error("cannot read input {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A directive could not be resolved.
    #[error("{0}")]
    Process(#[from] ProcessError),
    /// Output file could not be written.
    #[error("cannot write output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of a successful build.
#[derive(Clone, Debug)]
pub struct BuildOutput {
    /// Path of the written HTML file.
    pub path: PathBuf,
    /// Rendered HTML.
    pub html: String,
    /// Title taken from the first H1 heading, if any.
    pub title: Option<String>,
}

/// Builds a project's input document into HTML.
pub struct ProjectBuilder {
    input: PathBuf,
    output: PathBuf,
    processor: DocumentProcessor,
    renderer: MarkdownRenderer,
}

impl ProjectBuilder {
    /// Create a builder from a loaded project configuration.
    #[must_use]
    pub fn new(config: &ProjectConfig) -> Self {
        let processor_config = ProcessorConfig::new(&config.project_root)
            .with_language(config.language.clone());

        Self {
            input: config.input.clone(),
            output: config.output.clone(),
            processor: DocumentProcessor::new(processor_config),
            renderer: MarkdownRenderer::new().with_title_extraction(),
        }
    }

    /// Replace the document processor (e.g., to read files from memory).
    #[must_use]
    pub fn with_processor(mut self, processor: DocumentProcessor) -> Self {
        self.processor = processor;
        self
    }

    /// Input document path.
    #[must_use]
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Output file path.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Substitute directives in `markdown` and render the result.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Process`] if a directive cannot be resolved.
    pub fn render(&self, markdown: &str) -> Result<BuildOutput, BuildError> {
        let expanded = self.processor.process(markdown)?;
        tracing::debug!(markdown = %expanded, "Expanded document");

        let result = self.renderer.render(&expanded);

        Ok(BuildOutput {
            path: self.output.clone(),
            html: result.html,
            title: result.title,
        })
    }

    /// Build the input document and write the output file.
    ///
    /// The output's parent directory is created if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, a directive fails, or
    /// the output cannot be written. Nothing is written on failure.
    pub fn build(&self) -> Result<BuildOutput, BuildError> {
        tracing::info!(input = %self.input.display(), "Building document");

        let markdown = fs::read_to_string(&self.input).map_err(|source| BuildError::ReadInput {
            path: self.input.clone(),
            source,
        })?;

        let output = self.render(&markdown)?;
        self.write_output(&output.html)?;

        tracing::info!(
            output = %self.output.display(),
            bytes = output.html.len(),
            "Document built"
        );
        Ok(output)
    }

    fn write_output(&self, html: &str) -> Result<(), BuildError> {
        let write_error = |source| BuildError::WriteOutput {
            path: self.output.clone(),
            source,
        };

        if let Some(parent) = self.output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&self.output, html).map_err(write_error)
    }
}
