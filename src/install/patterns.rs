//! Install failure classification.
//!
//! Matches captured npm output against known failure patterns to decide
//! whether the looser fallback install is worth attempting. Substring
//! matching on tool output is fragile across locales and npm versions, so
//! the classifier is a plain function pointer the installer accepts as a
//! parameter; swapping in structured detection later does not touch the
//! install flow.

use std::sync::LazyLock;

use regex::Regex;

/// Classification of a failed install command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallFailure {
    /// Lockfile/manifest disagreement. `npm install` may recover once.
    Lockfile,
    /// Permission problem. The fallback would fail identically, skip it.
    Permission,
    /// Anything else. No fallback.
    Other,
}

/// Pluggable classifier from captured error text to a failure class.
pub type Classifier = fn(&str) -> InstallFailure;

static RE_PERMISSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)permission denied|EACCES|EPERM").unwrap());

static RE_LOCKFILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)package-lock\.json|npm-shrinkwrap\.json|lock\s?file").unwrap()
});

/// Default classifier over npm's error output.
///
/// Permission is checked first: a lockfile message alongside EACCES still
/// means retrying is pointless.
pub fn classify_install_error(error_text: &str) -> InstallFailure {
    if RE_PERMISSION.is_match(error_text) {
        InstallFailure::Permission
    } else if RE_LOCKFILE.is_match(error_text) {
        InstallFailure::Lockfile
    } else {
        InstallFailure::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npm_ci_sync_error_is_lockfile() {
        let text = "npm error `npm ci` can only install packages when your \
                    package.json and package-lock.json or npm-shrinkwrap.json \
                    are in sync.";
        assert_eq!(classify_install_error(text), InstallFailure::Lockfile);
    }

    #[test]
    fn missing_lockfile_is_lockfile() {
        let text = "npm error The `npm ci` command can only install with an \
                    existing package-lock.json";
        assert_eq!(classify_install_error(text), InstallFailure::Lockfile);
    }

    #[test]
    fn eacces_is_permission() {
        let text = "npm error Error: EACCES: permission denied, mkdir '/usr/lib/node_modules'";
        assert_eq!(classify_install_error(text), InstallFailure::Permission);
    }

    #[test]
    fn permission_denied_is_permission() {
        assert_eq!(
            classify_install_error("sh: permission denied"),
            InstallFailure::Permission
        );
    }

    #[test]
    fn permission_wins_over_lockfile() {
        let text = "EACCES: permission denied, open 'package-lock.json'";
        assert_eq!(classify_install_error(text), InstallFailure::Permission);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(
            classify_install_error("Package-Lock.JSON is out of date"),
            InstallFailure::Lockfile
        );
    }

    #[test]
    fn unknown_failure_is_other() {
        assert_eq!(
            classify_install_error("npm error code E500\nnpm error Internal Server Error"),
            InstallFailure::Other
        );
    }
}
