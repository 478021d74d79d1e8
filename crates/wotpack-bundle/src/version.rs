//! Version normalization for package file names and metadata.
//!
//! The mod loader picks the `.wotmod` file to load with a plain string
//! comparison, so a pre-release suffix left on a version string would sort
//! *after* the release version and shadow it. Versions are therefore reduced
//! to exactly three zero-padded numeric release components before they reach
//! a file name or `meta.xml`.

use std::fmt;

/// A normalized three-part package version.
///
/// Always renders as `major.minor.patch` with each component left-padded
/// with zeros to at least the configured width. Padding is a lower bound:
/// a component of `100` renders as `100` even with padding 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModVersion {
    parts: [u64; 3],
    padding: usize,
}

/// Non-fatal findings produced while normalizing a version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionWarning {
    /// Input carried fragments beyond the numeric release components.
    NonReleaseSuffix { original: String, retained: String },
    /// Minor component was absent and synthesized as zero.
    MissingMinor,
    /// Patch component was absent and synthesized as zero.
    MissingPatch,
}

impl fmt::Display for VersionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonReleaseSuffix { original, retained } => write!(
                f,
                "using only release part '{retained}' of the version '{original}' \
                 to form the package version"
            ),
            Self::MissingMinor => {
                write!(f, "minor part of the version is missing, setting it to zero")
            }
            Self::MissingPatch => {
                write!(f, "patch part of the version is missing, setting it to zero")
            }
        }
    }
}

impl ModVersion {
    /// Normalize a raw version string into exactly three release components.
    ///
    /// Pure and deterministic: the same input always yields the same version
    /// and the same warning sequence. An absent or empty input normalizes to
    /// `0.0.0` without warnings.
    #[must_use]
    pub fn normalize(raw: Option<&str>, padding: usize) -> (Self, Vec<VersionWarning>) {
        let mut warnings = Vec::new();
        let raw = raw.map(str::trim).unwrap_or_default();

        let mut parts: Vec<u64> = Vec::with_capacity(3);
        if !raw.is_empty() {
            for segment in raw.split('.') {
                if parts.len() == 3 {
                    break;
                }
                let digits: String = segment.chars().take_while(char::is_ascii_digit).collect();
                if digits.is_empty() {
                    break;
                }
                // Leading zeros in a segment can overflow a literal parse only
                // for absurd inputs; saturate rather than fail.
                parts.push(digits.parse::<u64>().unwrap_or(u64::MAX));
                if digits.len() != segment.len() {
                    // Numeric prefix of a suffixed segment, e.g. "2-rc1".
                    break;
                }
            }

            let retained = parts
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(".");
            if retained != raw {
                warnings.push(VersionWarning::NonReleaseSuffix {
                    original: raw.to_string(),
                    retained,
                });
            }
        }

        if !parts.is_empty() {
            if parts.len() == 1 {
                warnings.push(VersionWarning::MissingMinor);
                parts.push(0);
            }
            if parts.len() == 2 {
                warnings.push(VersionWarning::MissingPatch);
                parts.push(0);
            }
        }
        parts.resize(3, 0);

        let version = Self {
            parts: [parts[0], parts[1], parts[2]],
            padding,
        };
        (version, warnings)
    }

    /// Normalize and route each warning through `tracing::warn!`.
    #[must_use]
    pub fn normalize_logged(raw: Option<&str>, padding: usize) -> Self {
        let (version, warnings) = Self::normalize(raw, padding);
        for warning in &warnings {
            tracing::warn!("{warning}");
        }
        version
    }
}

impl fmt::Display for ModVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, patch] = self.parts;
        let width = self.padding;
        write!(f, "{major:0>width$}.{minor:0>width$}.{patch:0>width$}")
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test_case("0.1.2", "00.01.02" ; "three components")]
    #[test_case("0.1", "00.01.00" ; "missing patch")]
    #[test_case("1", "01.00.00" ; "missing minor and patch")]
    #[test_case("0.1.2-rc1", "00.01.02" ; "pre-release suffix dropped")]
    #[test_case("100.2.3", "100.02.03" ; "padding is a lower bound")]
    #[test_case("1.2.3.4", "01.02.03" ; "fourth component dropped")]
    fn normalize___pads_to_three_components(raw: &str, expected: &str) {
        let (version, _) = ModVersion::normalize(Some(raw), 2);

        assert_eq!(version.to_string(), expected);
    }

    #[test]
    fn normalize___empty_input___yields_zero_version_without_warnings() {
        let (version, warnings) = ModVersion::normalize(None, 2);

        assert_eq!(version.to_string(), "00.00.00");
        assert!(warnings.is_empty());

        let (version, warnings) = ModVersion::normalize(Some(""), 2);

        assert_eq!(version.to_string(), "00.00.00");
        assert!(warnings.is_empty());
    }

    #[test]
    fn normalize___missing_components___warns_per_synthesized_component() {
        let (_, warnings) = ModVersion::normalize(Some("0.1"), 2);
        assert_eq!(warnings, vec![VersionWarning::MissingPatch]);

        let (_, warnings) = ModVersion::normalize(Some("1"), 2);
        assert_eq!(
            warnings,
            vec![VersionWarning::MissingMinor, VersionWarning::MissingPatch]
        );
    }

    #[test]
    fn normalize___pre_release_suffix___warns_with_original_and_retained() {
        let (_, warnings) = ModVersion::normalize(Some("0.1.2-rc1"), 2);

        assert_eq!(
            warnings,
            vec![VersionWarning::NonReleaseSuffix {
                original: "0.1.2-rc1".to_string(),
                retained: "0.1.2".to_string(),
            }]
        );
    }

    #[test]
    fn normalize___entirely_non_numeric___yields_zero_version_with_warning() {
        let (version, warnings) = ModVersion::normalize(Some("abc"), 2);

        assert_eq!(version.to_string(), "00.00.00");
        assert_eq!(
            warnings,
            vec![VersionWarning::NonReleaseSuffix {
                original: "abc".to_string(),
                retained: String::new(),
            }]
        );
    }

    #[test]
    fn normalize___same_input___same_output_and_warnings() {
        let first = ModVersion::normalize(Some("2.0-beta"), 3);
        let second = ModVersion::normalize(Some("2.0-beta"), 3);

        assert_eq!(first, second);
    }

    #[test]
    fn display___honors_configured_padding() {
        let (version, _) = ModVersion::normalize(Some("1.2.3"), 3);

        assert_eq!(version.to_string(), "001.002.003");
    }
}
