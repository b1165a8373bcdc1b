//! Major version suffixes on module paths.

use std::sync::LazyLock;

use regex::Regex;

/// A trailing `/vN` path segment, e.g. the `/v2` in `github.com/foo/proto/v2`.
static MAJOR_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/v[0-9]+$").expect("major version suffix pattern is valid")
});

/// Remove one trailing `/vN` segment from a module path.
///
/// At most one segment is stripped; `a/v2/v3` becomes `a/v2`. Paths without
/// a numeric suffix (`a/v`, `a/vnext`) come back unchanged.
pub fn strip_major_version(module_path: &str) -> &str {
    match MAJOR_SUFFIX.find(module_path) {
        Some(m) => &module_path[..m.start()],
        None => module_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_major_suffix() {
        assert_eq!(
            strip_major_version("github.com/foo/proto/v2"),
            "github.com/foo/proto"
        );
        assert_eq!(strip_major_version("gopkg.in/yaml/v10"), "gopkg.in/yaml");
    }

    #[test]
    fn test_strip_without_suffix() {
        assert_eq!(strip_major_version("github.com/foo/bar"), "github.com/foo/bar");
    }

    #[test]
    fn test_strip_only_one_segment() {
        assert_eq!(strip_major_version("example.com/a/v2/v3"), "example.com/a/v2");
    }

    #[test]
    fn test_strip_requires_digits() {
        assert_eq!(strip_major_version("example.com/a/v"), "example.com/a/v");
        assert_eq!(strip_major_version("example.com/a/vnext"), "example.com/a/vnext");
    }

    #[test]
    fn test_strip_only_at_end() {
        assert_eq!(
            strip_major_version("example.com/v2/client"),
            "example.com/v2/client"
        );
    }

    #[test]
    fn test_strip_gopkg_dot_suffix_untouched() {
        // gopkg.in uses `.vN`, which is not a path segment
        assert_eq!(strip_major_version("gopkg.in/yaml.v3"), "gopkg.in/yaml.v3");
    }
}
