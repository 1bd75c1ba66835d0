//! Project configuration for LinkMe.
//!
//! A LinkMe project is a directory containing a `.LinkMe/` folder:
//!
//! ```text
//! <root>/
//! ├── .LinkMe/
//! │   ├── project.json     # ProjectConfig
//! │   └── build/           # default output location
//! └── docs/
//!     └── example.md       # seeded input document
//! ```
//!
//! [`ProjectConfig::load`] reads `project.json` and applies [`CliSettings`]
//! overrides. [`init_project`] creates the structure above.

mod init;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

pub use init::{InitOptions, init_project};
pub use linkme_snippets::DEFAULT_LANGUAGE;

/// Directory and file names that make up a project.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use linkme_config::ProjectLayout;
///
/// let layout = ProjectLayout::default();
/// assert_eq!(
///     layout.config_path(Path::new("/work")),
///     Path::new("/work/.LinkMe/project.json")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project data directory under the root.
    pub project_dir_name: String,
    /// Build directory under the project data directory.
    pub build_dir_name: String,
    /// Documentation directory under the root.
    pub docs_dir_name: String,
    /// Configuration file under the project data directory.
    pub config_filename: String,
    /// Seeded input document under the docs directory.
    pub example_filename: String,
    /// Default output file under the build directory.
    pub output_filename: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            project_dir_name: ".LinkMe".to_owned(),
            build_dir_name: "build".to_owned(),
            docs_dir_name: "docs".to_owned(),
            config_filename: "project.json".to_owned(),
            example_filename: "example.md".to_owned(),
            output_filename: "build.html".to_owned(),
        }
    }
}

impl ProjectLayout {
    /// Project data directory (`<root>/.LinkMe`).
    #[must_use]
    pub fn project_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.project_dir_name)
    }

    /// Build directory (`<root>/.LinkMe/build`).
    #[must_use]
    pub fn build_dir(&self, root: &Path) -> PathBuf {
        self.project_dir(root).join(&self.build_dir_name)
    }

    /// Documentation directory (`<root>/docs`).
    #[must_use]
    pub fn docs_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.docs_dir_name)
    }

    /// Configuration file (`<root>/.LinkMe/project.json`).
    #[must_use]
    pub fn config_path(&self, root: &Path) -> PathBuf {
        self.project_dir(root).join(&self.config_filename)
    }

    /// Whether `root` contains a project data directory.
    #[must_use]
    pub fn is_initialized(&self, root: &Path) -> bool {
        self.project_dir(root).is_dir()
    }
}

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override input markdown file.
    pub input: Option<PathBuf>,
    /// Override output HTML file.
    pub output: Option<PathBuf>,
}

/// Persisted project configuration (`project.json`).
///
/// Fields are declared in sorted order so the file is written with sorted
/// keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path of the build directory.
    pub build_dir: PathBuf,
    /// Absolute path of the input markdown document.
    pub input: PathBuf,
    /// Language tag for generated code fences.
    #[serde(default = "default_language")]
    pub language: String,
    /// Absolute path of the output HTML file.
    pub output: PathBuf,

    /// Project root the configuration was loaded from (set after loading).
    #[serde(skip)]
    pub project_root: PathBuf,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_owned()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The root has no project data directory.
    #[error(
        "{} is not initialized as a LinkMe project. Run \"linkme --init\" to initialize.",
        .0.display()
    )]
    NotInitialized(PathBuf),
    /// The root already has a project data directory.
    #[error(
        "A LinkMe project has already been initialized in {}. Use --force to reinitialize it.",
        .0.display()
    )]
    AlreadyInitialized(PathBuf),
    /// The root is not an existing directory.
    #[error("{} is not a correct filepath.", .0.display())]
    InvalidRoot(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a path field to be non-empty.
fn require_non_empty(value: &Path, field: &str) -> Result<(), ConfigError> {
    if value.as_os_str().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl ProjectConfig {
    /// Load `project.json` from the project at `root`.
    ///
    /// CLI settings are applied after loading and validation, so CLI
    /// arguments take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotInitialized`] if `root` has no project data
    /// directory, or an I/O, parse or validation error.
    pub fn load(
        root: &Path,
        layout: &ProjectLayout,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        if !layout.is_initialized(root) {
            return Err(ConfigError::NotInitialized(root.to_path_buf()));
        }

        let mut config = Self::load_from_file(&layout.config_path(root))?;
        config.project_root = std::path::absolute(root)?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings)?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) -> Result<(), ConfigError> {
        if let Some(input) = &settings.input {
            self.input = std::path::absolute(input)?;
            tracing::info!(input = %self.input.display(), "Input overridden from CLI");
        }
        if let Some(output) = &settings.output {
            self.output = std::path::absolute(output)?;
            tracing::info!(output = %self.output.display(), "Output overridden from CLI");
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `input`, `output` or `language`
    /// is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.input, "input")?;
        require_non_empty(&self.output, "output")?;
        if self.language.is_empty() {
            return Err(ConfigError::Validation(
                "language cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serialize as pretty JSON with 4-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
