//! `linkme --init` implementation.

use std::path::PathBuf;

use linkme_config::{InitOptions, ProjectLayout, init_project};

use crate::error::CliError;
use crate::output::Output;

/// Initialize a project directory.
pub(crate) struct InitCommand {
    pub(crate) root: PathBuf,
    pub(crate) input: Option<PathBuf>,
    pub(crate) output: Option<PathBuf>,
    pub(crate) force: bool,
}

impl InitCommand {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let layout = ProjectLayout::default();

        if self.force && layout.is_initialized(&self.root) {
            output.warning(&format!(
                "Replacing existing project in {}",
                layout.project_dir(&self.root).display()
            ));
        }

        let options = InitOptions {
            input: self.input,
            output: self.output,
            force: self.force,
        };
        let config = init_project(&self.root, &layout, &options)?;

        output.info(&format!("Input: {}", config.input.display()));
        output.info(&format!("Output: {}", config.output.display()));
        output.success(&format!(
            "Initialized LinkMe project in {}",
            config.project_root.display()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_project() {
        let temp_dir = tempfile::tempdir().unwrap();
        let command = InitCommand {
            root: temp_dir.path().to_path_buf(),
            input: None,
            output: None,
            force: false,
        };

        command.execute().unwrap();

        assert!(temp_dir.path().join(".LinkMe/project.json").is_file());
        assert!(temp_dir.path().join("docs/example.md").is_file());
    }

    #[test]
    fn test_init_existing_project_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let command = || InitCommand {
            root: temp_dir.path().to_path_buf(),
            input: None,
            output: None,
            force: false,
        };

        command().execute().unwrap();
        let err = command().execute().unwrap_err();

        assert!(matches!(err, CliError::Config(_)));
    }
}
