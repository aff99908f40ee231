use std::{
    io,
    path::Path,
    process::{Command, Stdio},
};

use tracing::debug;

use crate::models::CloneAddress;

/// Output captured from a successful clone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CloneOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(thiserror::Error, Debug)]
pub enum CloneError {
    #[error("could not run `{command} clone`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command} clone` {}: {}", exit_description(.code), .stderr.trim())]
    ExitStatus {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".to_owned(),
    }
}

/// Clones a repository into a folder.
pub trait Cloner {
    fn clone_repository(
        &self,
        folder: &Path,
        address: &CloneAddress,
    ) -> Result<CloneOutput, CloneError>;
}

impl<C: Cloner + ?Sized> Cloner for &C {
    fn clone_repository(
        &self,
        folder: &Path,
        address: &CloneAddress,
    ) -> Result<CloneOutput, CloneError> {
        (**self).clone_repository(folder, address)
    }
}

/// Runs `<command> clone <address>` inside the target folder and waits for it to finish.
///
/// The child gets no stdin. There is no timeout: a hung clone (e.g. waiting on an
/// SSH passphrase prompt through a TTY) blocks the run.
pub struct GitCloner {
    command: String,
}

impl GitCloner {
    pub fn new(command: impl Into<String>) -> GitCloner {
        GitCloner {
            command: command.into(),
        }
    }
}

impl Cloner for GitCloner {
    #[tracing::instrument(skip(self))]
    fn clone_repository(
        &self,
        folder: &Path,
        address: &CloneAddress,
    ) -> Result<CloneOutput, CloneError> {
        debug!("Running {} clone {address}", self.command);

        let output = Command::new(&self.command)
            .arg("clone")
            .arg(address.as_str())
            .current_dir(folder)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CloneError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        debug!("{} clone returned {:?}", self.command, output.status.code());

        if output.status.success() {
            Ok(CloneOutput { stdout, stderr })
        } else {
            Err(CloneError::ExitStatus {
                command: self.command.clone(),
                code: output.status.code(),
                stderr,
            })
        }
    }
}
