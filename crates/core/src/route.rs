use std::fmt;

/// The root path every empty location falls back to.
pub const ROOT_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// A fragment-style route such as `/quiz/take/abc123`.
///
/// Opaque apart from slash-separated segments. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath(String);

impl RoutePath {
    /// Builds a route from a path, substituting the root path when empty.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.is_empty() {
            return Self::root();
        }
        Self(path)
    }

    /// Builds a route from a location fragment (`#/dashboard`, `#`, or `""`).
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        Self::new(fragment.strip_prefix('#').unwrap_or(fragment))
    }

    #[must_use]
    pub fn root() -> Self {
        Self(ROOT_PATH.to_owned())
    }

    #[must_use]
    pub fn dashboard() -> Self {
        Self(DASHBOARD_PATH.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The route as a location fragment, e.g. `#/dashboard`.
    #[must_use]
    pub fn to_fragment(&self) -> String {
        format!("#{}", self.0)
    }

    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Segment `index` after splitting on `/`, or `""` when absent.
    ///
    /// The leading slash yields an empty segment 0, so `/quiz/take/abc`
    /// has `abc` at index 3.
    #[must_use]
    pub fn segment(&self, index: usize) -> &str {
        self.0.split('/').nth(index).unwrap_or("")
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoutePath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RoutePath {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
