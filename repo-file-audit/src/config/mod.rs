//! Audit configuration.
//!
//! An [`AuditRequest`] is built once from the command line and passed by
//! reference to everything that needs it.

mod error;

pub use error::ConfigError;

/// Reference used for file lookups when none is given.
///
/// This is a literal branch name, not the repository's default branch.
pub const DEFAULT_REFERENCE: &str = "master";

/// Maximum number of repositories fetched for an organization.
pub const REPOSITORIES_PER_PAGE: u8 = 100;

/// Everything needed to audit one organization for one file.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Organization whose public repositories are audited.
    organization: String,
    /// Path of the file that every repository should contain.
    target_file: String,
    /// GitHub token used for API calls.
    token: String,
    /// Branch, tag or commit the file is looked up at.
    reference: String,
    /// Alternate API root, e.g. a GitHub Enterprise instance.
    api_url: Option<String>,
}

impl AuditRequest {
    /// Creates a request for auditing `organization` for `target_file`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if any argument is empty.
    pub fn new(
        organization: impl Into<String>,
        target_file: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let organization = non_empty("organization", organization.into())?;
        let target_file = non_empty("target file", target_file.into())?;
        let token = non_empty("token", token.into())?;

        Ok(Self {
            organization,
            target_file,
            token,
            reference: DEFAULT_REFERENCE.to_string(),
            api_url: None,
        })
    }

    /// Sets the reference files are looked up at.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if `reference` is empty.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Result<Self, ConfigError> {
        self.reference = non_empty("reference", reference.into())?;
        Ok(self)
    }

    /// Sets a custom API root.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Returns the organization name.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the audited file path.
    pub fn target_file(&self) -> &str {
        &self.target_file
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the lookup reference.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns the custom API root, if any.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { field });
    }
    Ok(value)
}
