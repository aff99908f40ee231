use std::fmt::Display;

/// Owner and name of a hosted repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> RepositoryRef {
        RepositoryRef {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Extracts the owner and repository name from a link such as
    /// `https://github.com/owner/repo.git/tree/main`.
    ///
    /// The first path component after `hosting_url` is the owner and the second
    /// is the repository. The repository name ends at a query, a fragment or
    /// whitespace, and every trailing `.git` is removed from it.
    pub fn from_url(url: &str, hosting_url: &str) -> Option<RepositoryRef> {
        let path = url
            .strip_prefix(hosting_url.trim_end_matches('/'))?
            .strip_prefix('/')?;

        let mut components = path.split('/');
        let owner = components.next()?;
        let name = components.next()?;
        let name = strip_git_suffixes(
            name.split(|c: char| c == '?' || c == '#' || c.is_whitespace())
                .next()
                .unwrap_or_default(),
        );

        if owner.is_empty() || name.is_empty() {
            return None;
        }

        Some(RepositoryRef::new(owner, name))
    }

    pub fn clone_address(&self, server_alias: &str) -> CloneAddress {
        CloneAddress(format!("{server_alias}:{}/{}.git", self.owner, self.name))
    }
}

impl Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn strip_git_suffixes(mut name: &str) -> &str {
    while let Some(stripped) = name.strip_suffix(".git") {
        name = stripped;
    }

    name
}

/// The argument passed to `git clone`, e.g. `git@github-fleming:owner/repo.git`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloneAddress(String);

impl CloneAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CloneAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
