//! API version handling for the Zoop API.

use std::fmt;

/// The Zoop API version to target.
///
/// The version appears both as the leading path segment of every request
/// (`/v1/...`) and in the content-negotiation `Accept` header pinned by
/// the HTTP client.
///
/// # Example
///
/// ```rust
/// use zoop_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.path_segment(), "v1");
/// assert_eq!(version.accept_header(), "application/json;version=2.1");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiVersion {
    /// Version 1 of the REST API with the 2.1 media-type revision.
    #[default]
    V1,
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1
    }

    /// Returns the path segment for this version (e.g. `"v1"`).
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }

    /// Returns the `Accept` header value pinning this version.
    #[must_use]
    pub const fn accept_header(self) -> &'static str {
        match self {
            Self::V1 => "application/json;version=2.1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_v1() {
        assert_eq!(ApiVersion::latest(), ApiVersion::V1);
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(ApiVersion::V1.path_segment(), "v1");
        assert_eq!(ApiVersion::V1.to_string(), "v1");
    }

    #[test]
    fn test_accept_header_pins_media_type_revision() {
        assert_eq!(ApiVersion::V1.accept_header(), "application/json;version=2.1");
    }
}
