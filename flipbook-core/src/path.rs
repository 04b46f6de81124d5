//! Frame path normalization
//!
//! SD drivers disagree on what a directory listing returns: some give the
//! bare file name, some an absolute path, some a name with a stray leading
//! slash. Everything is folded into one absolute form here.

use alloc::string::String;

/// Absolute, normalized storage path of one frame file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FramePath(String);

impl FramePath {
    /// Path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment
    pub fn file_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(pos) => &self.0[pos + 1..],
            None => &self.0,
        }
    }
}

impl AsRef<str> for FramePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for FramePath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FramePath {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.0.as_str())
    }
}

/// Turn a raw directory entry name into an absolute path under `base`
///
/// Names that already start with `base` are kept as-is. Otherwise one
/// leading `/` is dropped and the name is joined to `base` with exactly
/// one separator.
pub fn normalize(raw: &str, base: &str) -> FramePath {
    if raw.starts_with(base) {
        return FramePath(String::from(raw));
    }

    let name = raw.strip_prefix('/').unwrap_or(raw);

    let mut full = String::with_capacity(base.len() + 1 + name.len());
    full.push_str(base);
    if !full.ends_with('/') {
        full.push('/');
    }
    full.push_str(name);
    FramePath(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BASE: &str = "/screensavers/badapple";

    #[test]
    fn test_bare_name() {
        assert_eq!(
            normalize("0001.bin", BASE).as_str(),
            "/screensavers/badapple/0001.bin"
        );
    }

    #[test]
    fn test_leading_slash_stripped() {
        assert_eq!(
            normalize("/0001.bin", BASE).as_str(),
            "/screensavers/badapple/0001.bin"
        );
    }

    #[test]
    fn test_absolute_name_kept() {
        assert_eq!(
            normalize("/screensavers/badapple/0001.bin", BASE).as_str(),
            "/screensavers/badapple/0001.bin"
        );
    }

    #[test]
    fn test_base_with_trailing_slash() {
        assert_eq!(
            normalize("0001.bin", "/frames/").as_str(),
            "/frames/0001.bin"
        );
        assert_eq!(
            normalize("/0001.bin", "/frames/").as_str(),
            "/frames/0001.bin"
        );
    }

    #[test]
    fn test_only_one_leading_slash_stripped() {
        // Driver quirk beyond the single-slash case is passed through
        assert_eq!(
            normalize("//0001.bin", "/frames").as_str(),
            "/frames//0001.bin"
        );
    }

    #[test]
    fn test_file_name() {
        let path = normalize("0042.bin", BASE);
        assert_eq!(path.file_name(), "0042.bin");
    }

    proptest! {
        #[test]
        fn prop_relative_names_join_with_one_separator(name in "[a-z0-9_]{1,12}(\\.bin)?") {
            let expected = format!("{}/{}", BASE, name);
            let joined = normalize(&name, BASE);
            prop_assert_eq!(joined.as_str(), expected.as_str());

            let slashed = format!("/{}", name);
            let joined = normalize(&slashed, BASE);
            prop_assert_eq!(joined.as_str(), expected.as_str());
        }

        #[test]
        fn prop_normalized_is_under_base(raw in "/?[a-z0-9/._]{0,24}") {
            let path = normalize(&raw, BASE);
            prop_assert!(path.as_str().starts_with(BASE));
        }

        #[test]
        fn prop_normalize_is_idempotent(raw in "/?[a-z0-9._]{1,16}") {
            let once = normalize(&raw, BASE);
            let twice = normalize(once.as_str(), BASE);
            prop_assert_eq!(once, twice);
        }
    }
}
