//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod init;

pub(crate) use build::BuildCommand;
pub(crate) use init::InitCommand;
