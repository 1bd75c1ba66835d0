//! Project bootstrapping.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{ConfigError, DEFAULT_LANGUAGE, ProjectConfig, ProjectLayout};

/// Seeded input document.
const EXAMPLE_DOCUMENT: &str = include_str!("../templates/example.md");

/// Options for [`init_project`].
#[derive(Debug, Default)]
pub struct InitOptions {
    /// Input document to record. When `None`, an example is seeded in `docs/`.
    pub input: Option<PathBuf>,
    /// Output file to record. When `None`, `<build_dir>/build.html` is used.
    pub output: Option<PathBuf>,
    /// Replace an existing project data directory.
    pub force: bool,
}

/// Initialize a project at `root`.
///
/// Creates `.LinkMe/` and `.LinkMe/build/`, seeds `docs/example.md` when no
/// input is given, and writes `.LinkMe/project.json`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidRoot`] if `root` is not a directory,
/// [`ConfigError::AlreadyInitialized`] if a project exists and `force` is
/// not set, or an I/O error.
pub fn init_project(
    root: &Path,
    layout: &ProjectLayout,
    options: &InitOptions,
) -> Result<ProjectConfig, ConfigError> {
    if !root.is_dir() {
        return Err(ConfigError::InvalidRoot(root.to_path_buf()));
    }
    let root = std::path::absolute(root)?;

    let project_dir = layout.project_dir(&root);
    if project_dir.exists() {
        if !options.force {
            return Err(ConfigError::AlreadyInitialized(root));
        }
        tracing::warn!(path = %project_dir.display(), "Removing existing project directory");
        fs::remove_dir_all(&project_dir)?;
    }

    tracing::info!(root = %root.display(), "Initializing LinkMe project");
    fs::create_dir(&project_dir)?;

    let build_dir = layout.build_dir(&root);
    fs::create_dir(&build_dir)?;

    if options.input.is_none() || options.output.is_none() {
        fs::create_dir_all(layout.docs_dir(&root))?;
    }

    let input = match &options.input {
        Some(input) => std::path::absolute(input)?,
        None => seed_example(&root, layout)?,
    };
    let output = match &options.output {
        Some(output) => std::path::absolute(output)?,
        None => build_dir.join(&layout.output_filename),
    };

    let config = ProjectConfig {
        build_dir,
        input,
        language: DEFAULT_LANGUAGE.to_owned(),
        output,
        project_root: root.clone(),
    };

    let mut file = fs::File::create_new(layout.config_path(&root))?;
    file.write_all(config.to_json()?.as_bytes())?;

    Ok(config)
}

/// Write the example document into the docs directory.
fn seed_example(root: &Path, layout: &ProjectLayout) -> Result<PathBuf, ConfigError> {
    let path = layout.docs_dir(root).join(&layout.example_filename);
    fs::write(&path, EXAMPLE_DOCUMENT)?;
    tracing::debug!(path = %path.display(), "Seeded example document");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_init_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = std::path::absolute(temp_dir.path()).unwrap();
        let layout = ProjectLayout::default();

        let config = init_project(&root, &layout, &InitOptions::default()).unwrap();

        assert!(root.join(".LinkMe/build").is_dir());
        assert_eq!(config.build_dir, root.join(".LinkMe/build"));
        assert_eq!(config.input, root.join("docs/example.md"));
        assert_eq!(config.output, root.join(".LinkMe/build/build.html"));
        assert_eq!(config.language, "python");
        assert_eq!(
            fs::read_to_string(&config.input).unwrap(),
            EXAMPLE_DOCUMENT
        );
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::default();

        let written = init_project(temp_dir.path(), &layout, &InitOptions::default()).unwrap();
        let loaded = ProjectConfig::load(temp_dir.path(), &layout, None).unwrap();

        assert_eq!(loaded, written);
    }

    #[test]
    fn test_init_with_explicit_paths() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = std::path::absolute(temp_dir.path()).unwrap();
        let options = InitOptions {
            input: Some(root.join("README.md")),
            output: Some(root.join("site/index.html")),
            force: false,
        };

        let config = init_project(&root, &ProjectLayout::default(), &options).unwrap();

        assert_eq!(config.input, root.join("README.md"));
        assert_eq!(config.output, root.join("site/index.html"));
        assert!(!root.join("docs").exists());
    }

    #[test]
    fn test_init_twice_requires_force() {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::default();
        init_project(temp_dir.path(), &layout, &InitOptions::default()).unwrap();

        let err = init_project(temp_dir.path(), &layout, &InitOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyInitialized(_)));
        assert!(err.to_string().contains("--force"));
    }

    #[test]
    fn test_force_reinitializes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::default();
        init_project(temp_dir.path(), &layout, &InitOptions::default()).unwrap();
        let stale = layout.build_dir(temp_dir.path()).join("stale.html");
        fs::write(&stale, "old").unwrap();

        let options = InitOptions {
            force: true,
            ..InitOptions::default()
        };
        init_project(temp_dir.path(), &layout, &options).unwrap();

        assert!(!stale.exists());
        assert!(layout.config_path(temp_dir.path()).is_file());
    }

    #[test]
    fn test_init_invalid_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing");
        let err = init_project(&missing, &ProjectLayout::default(), &InitOptions::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRoot(_)));
    }
}
