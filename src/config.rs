use serde::Deserialize;

use crate::error::ConfigError;

pub const ENV_PREFIX: &str = "MULTI_CLONE_";

pub const DEFAULT_SERVER_ALIAS: &str = "git@github-fleming";
pub const DEFAULT_HOSTING_URL: &str = "https://github.com";
pub const DEFAULT_GIT_COMMAND: &str = "git";

/// Runtime settings, read from `MULTI_CLONE_*` environment variables.
///
/// `server_alias` is the SSH host alias used in clone addresses. It usually
/// points at a `Host` entry in `~/.ssh/config` that selects a dedicated key:
///
/// ```text
/// Host github-fleming
///     Hostname github.com
///     IdentityFile ~/.ssh/id_ed25519-fleming
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_server_alias")]
    pub server_alias: String,
    #[serde(default = "default_hosting_url")]
    pub hosting_url: String,
    #[serde(default = "default_git_command")]
    pub git_command: String,
}

fn default_server_alias() -> String {
    DEFAULT_SERVER_ALIAS.to_owned()
}

fn default_hosting_url() -> String {
    DEFAULT_HOSTING_URL.to_owned()
}

fn default_git_command() -> String {
    DEFAULT_GIT_COMMAND.to_owned()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server_alias: default_server_alias(),
            hosting_url: default_hosting_url(),
            git_command: default_git_command(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        envy::prefixed(ENV_PREFIX)
            .from_env::<AppConfig>()?
            .validated()
    }

    pub fn from_vars<I>(vars: I) -> Result<AppConfig, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter::<_, AppConfig>(vars)?
            .validated()
    }

    fn validated(self) -> Result<AppConfig, ConfigError> {
        let required = [
            ("SERVER_ALIAS", &self.server_alias),
            ("HOSTING_URL", &self.hosting_url),
            ("GIT_COMMAND", &self.git_command),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty {
                    name: format!("{ENV_PREFIX}{name}"),
                });
            }
        }

        if !self.hosting_url.starts_with("https://") && !self.hosting_url.starts_with("http://") {
            return Err(ConfigError::HostingUrl(self.hosting_url));
        }

        Ok(self)
    }
}
