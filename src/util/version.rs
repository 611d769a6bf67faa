use semver::Version;
use thiserror::Error;

pub const APP_NAME: &str = "Garden Cost Estimator";
pub const APP_AUTHOR: &str = "SetScallywag";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

#[derive(Error, Debug, PartialEq)]
pub enum VersionError {
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

fn parse_version_str(input: &str) -> Result<Version, VersionError> {
    let trimmed = input.trim_start_matches(|ch| ch == 'v' || ch == 'V');
    Version::parse(trimmed).map_err(|err| VersionError::InvalidVersion(err.to_string()))
}

/// Version of the running build, preferring the git tag it was built from.
pub fn current_version() -> Result<Version, VersionError> {
    if let Some(tag) = GIT_TAG {
        if let Ok(version) = parse_version_str(tag) {
            return Ok(version);
        }
    }

    parse_version_str(APP_VERSION)
}

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_v() {
        assert_eq!(parse_version_str("v1.2.3"), Ok(Version::new(1, 2, 3)));
        assert_eq!(parse_version_str("V0.4.0"), Ok(Version::new(0, 4, 0)));
    }

    #[test]
    fn rejects_garbage_tags() {
        assert!(matches!(
            parse_version_str("release-candidate"),
            Err(VersionError::InvalidVersion(_))
        ));
    }

    #[test]
    fn package_version_always_parses() {
        assert!(current_version().is_ok());
        assert!(version_label().starts_with('v') || GIT_TAG.is_some());
    }
}
