use std::{io, path::PathBuf};

/// The submissions folder could not be used. Fatal to the run.
#[derive(thiserror::Error, Debug)]
pub enum PathError {
    #[error("cannot resolve folder `{}`: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("`{}` is not a folder", .path.display())]
    NotAFolder { path: PathBuf },
    #[error("cannot list folder `{}`: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not read configuration from the environment: {0}")]
    Env(#[from] envy::Error),
    #[error("environment variable {name} must not be empty")]
    Empty { name: String },
    #[error("hosting URL `{0}` is not a valid link prefix")]
    HostingUrl(String),
}
