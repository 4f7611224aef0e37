//! Site configuration: the URL prefix the bundle is deployed under.
//!
//! DESIGN
//! ======
//! The prefix comes from exactly one value, `PORTFOLIO_BASE_PATH`. The client
//! bakes it in at compile time and the host reads it at startup; both go
//! through [`BasePath::parse`] so they always agree on the normalized form.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable naming the deployment prefix.
pub const BASE_PATH_ENV: &str = "PORTFOLIO_BASE_PATH";

/// Asset substituted when an image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasePathError {
    #[error("base path {raw:?} contains a forbidden sequence {found:?}")]
    Forbidden { raw: String, found: &'static str },
    #[error("base path {raw:?} contains whitespace")]
    Whitespace { raw: String },
}

/// Normalized URL prefix: always starts and ends with `/`, no empty
/// segments. The root deployment is `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl Default for BasePath {
    fn default() -> Self {
        Self("/".to_owned())
    }
}

impl BasePath {
    /// Parse and normalize a raw prefix.
    ///
    /// # Errors
    ///
    /// Returns an error for prefixes containing `..`, `?`, `#`, `:` or inner
    /// whitespace.
    pub fn parse(raw: &str) -> Result<Self, BasePathError> {
        let trimmed = raw.trim();
        for found in ["..", "?", "#", ":"] {
            if trimmed.contains(found) {
                return Err(BasePathError::Forbidden { raw: raw.to_owned(), found });
            }
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(BasePathError::Whitespace { raw: raw.to_owned() });
        }

        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self(format!("/{}/", segments.join("/"))))
    }

    /// Prefix baked in at compile time, falling back to `/` when unset or
    /// invalid.
    pub fn from_build_env() -> Self {
        match option_env!("PORTFOLIO_BASE_PATH").map(Self::parse) {
            Some(Ok(base)) => base,
            Some(Err(_e)) => {
                #[cfg(feature = "csr")]
                log::warn!("ignoring {BASE_PATH_ENV}: {_e}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Prefix without the trailing slash, as routers expect it. `None` for
    /// the root deployment.
    pub fn mount_point(&self) -> Option<&str> {
        if self.is_root() { None } else { Some(self.0.trim_end_matches('/')) }
    }

    /// Resolve a site-relative asset path under this prefix. Absolute URLs
    /// pass through untouched.
    pub fn asset(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_owned();
        }
        format!("{}{}", self.0, path.trim_start_matches('/'))
    }
}

fn is_absolute_url(path: &str) -> bool {
    ["http://", "https://", "mailto:"].iter().any(|scheme| path.starts_with(scheme))
}

/// Site-wide settings provided as context by the root component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub base: BasePath,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self { base: BasePath::from_build_env() }
    }

    pub fn asset(&self, path: &str) -> String {
        self.base.asset(path)
    }

    pub fn placeholder(&self) -> String {
        self.base.asset(PLACEHOLDER_IMAGE)
    }
}
