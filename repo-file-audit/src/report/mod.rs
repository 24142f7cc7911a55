//! Audit report.

use std::fmt;

/// Outcome of auditing one organization for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Audited organization.
    pub organization: String,

    /// Audited file path.
    pub target_file: String,

    /// Repositories without the file, as `org/repo`, in enumeration order.
    pub missing: Vec<String>,
}

impl AuditReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new(organization: impl Into<String>, target_file: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            target_file: target_file.into(),
            missing: Vec::new(),
        }
    }

    /// Records `repository` as lacking the file.
    pub fn record_missing(&mut self, repository: &str) {
        self.missing
            .push(format!("{}/{}", self.organization, repository));
    }

    /// Returns true if no repository is missing the file.
    #[must_use]
    pub fn all_present(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.all_present() {
            return writeln!(
                f,
                "\nYay! All repos in the {} org have the {} file.",
                self.organization, self.target_file
            );
        }

        writeln!(
            f,
            "\nThe following repos in the {} org do not have the {} file:",
            self.organization, self.target_file
        )?;
        for repository in &self.missing {
            writeln!(f, "{repository}")?;
        }
        Ok(())
    }
}
