//! `linkme --build` implementation.

use std::path::PathBuf;

use linkme_build::ProjectBuilder;
use linkme_config::{CliSettings, ProjectConfig, ProjectLayout};

use crate::error::CliError;
use crate::output::Output;

/// Build a project's document into HTML.
pub(crate) struct BuildCommand {
    pub(crate) root: PathBuf,
    pub(crate) input: Option<PathBuf>,
    pub(crate) output: Option<PathBuf>,
}

impl BuildCommand {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        tracing::debug!(root = %self.root.display(), "Loading project configuration");

        let cli_settings = CliSettings {
            input: self.input,
            output: self.output,
        };
        let config =
            ProjectConfig::load(&self.root, &ProjectLayout::default(), Some(&cli_settings))?;

        let builder = ProjectBuilder::new(&config);
        output.info(&format!("Input: {}", builder.input().display()));
        output.info(&format!("Output: {}", builder.output().display()));

        let result = builder.build()?;

        output.success(&format!("Built {}", result.path.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use linkme_config::{InitOptions, init_project};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_build_uninitialized_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let command = BuildCommand {
            root: temp_dir.path().to_path_buf(),
            input: None,
            output: None,
        };

        let err = command.execute().unwrap_err();

        assert!(err.to_string().contains("--init"));
    }

    #[test]
    fn test_build_with_output_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = std::path::absolute(temp_dir.path()).unwrap();
        init_project(&root, &ProjectLayout::default(), &InitOptions::default()).unwrap();
        fs::write(root.join("notes.md"), "# Notes\n").unwrap();

        let command = BuildCommand {
            root: root.clone(),
            input: Some(root.join("notes.md")),
            output: Some(root.join("out/notes.html")),
        };
        command.execute().unwrap();

        assert_eq!(
            fs::read_to_string(root.join("out/notes.html")).unwrap(),
            "<h1>Notes</h1>\n"
        );
        assert!(!root.join(".LinkMe/build/build.html").exists());
    }
}
