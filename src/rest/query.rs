//! Query string construction for list endpoints.

use std::fmt;

/// Pagination parameters for list requests.
///
/// A limit of zero means "no explicit limit" and is omitted from the
/// query string. An offset is emitted whenever set, including zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    limit: Option<u32>,
    offset: Option<i64>,
}

impl Pagination {
    /// Creates an empty pagination with no limit and no offset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: None,
            offset: None,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the offset into the collection.
    #[must_use]
    pub const fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Filter expressions for list requests.
///
/// Each expression has the shape `field::op(value[,value])`, and multiple
/// expressions are joined with `|` into a single `filters` parameter:
///
/// ```rust
/// use zoop_api::rest::Filters;
///
/// let filters = Filters::new()
///     .greater_than("amount", "1000")
///     .eq("status", "succeeded");
/// assert_eq!(filters.to_string(), "amount::gt(1000)|status::eq(succeeded)");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<String>,
}

impl Filters {
    /// Creates an empty filter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `true` if no filter expressions were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filters on `field` equal to `value`.
    #[must_use]
    pub fn eq(self, field: &str, value: &str) -> Self {
        self.push(field, "eq", &[value])
    }

    /// Filters on `field` strictly greater than `value`.
    #[must_use]
    pub fn greater_than(self, field: &str, value: &str) -> Self {
        self.push(field, "gt", &[value])
    }

    /// Filters on `field` strictly less than `value`.
    #[must_use]
    pub fn less_than(self, field: &str, value: &str) -> Self {
        self.push(field, "lt", &[value])
    }

    /// Filters on `field` between `start` and `end`, inclusive.
    #[must_use]
    pub fn between(self, field: &str, start: &str, end: &str) -> Self {
        self.push(field, "bt", &[start, end])
    }

    /// Filters on `field` being one of `values`.
    #[must_use]
    pub fn in_values(self, field: &str, values: &[&str]) -> Self {
        self.push(field, "in", values)
    }

    fn push(mut self, field: &str, op: &str, values: &[&str]) -> Self {
        self.entries
            .push(format!("{field}::{op}({})", values.join(",")));
        self
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join("|"))
    }
}

/// Builds a query string from pagination, filters, and extra parameters.
///
/// Parameter order is limit, offset, filters, then extras. An extra whose
/// key matches an earlier parameter overrides it in place instead of
/// appending a duplicate. Values are percent-encoded; keys are emitted
/// as-is. Returns an empty string when nothing applies.
#[must_use]
pub fn build_query(pagination: Pagination, filters: &Filters, extra: &[(&str, &str)]) -> String {
    let mut params: Vec<(String, String)> = Vec::new();

    match pagination.limit {
        Some(limit) if limit > 0 => params.push(("limit".to_string(), limit.to_string())),
        _ => {}
    }
    if let Some(offset) = pagination.offset {
        if offset >= 0 {
            params.push(("offset".to_string(), offset.to_string()));
        }
    }
    if !filters.is_empty() {
        params.push(("filters".to_string(), filters.to_string()));
    }

    for (key, value) in extra {
        match params.iter_mut().find(|(existing, _)| existing == key) {
            Some(entry) => entry.1 = (*value).to_string(),
            None => params.push(((*key).to_string(), (*value).to_string())),
        }
    }

    if params.is_empty() {
        return String::new();
    }

    let encoded: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    encoded.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_yield_empty_string() {
        assert_eq!(build_query(Pagination::new(), &Filters::new(), &[]), "");
    }

    #[test]
    fn test_zero_limit_is_omitted() {
        let query = build_query(Pagination::new().limit(0), &Filters::new(), &[]);
        assert_eq!(query, "");
    }

    #[test]
    fn test_zero_offset_is_emitted() {
        let query = build_query(Pagination::new().offset(0), &Filters::new(), &[]);
        assert_eq!(query, "offset=0");
    }

    #[test]
    fn test_negative_offset_is_omitted() {
        let query = build_query(Pagination::new().offset(-1), &Filters::new(), &[]);
        assert_eq!(query, "");
    }

    #[test]
    fn test_parameter_order() {
        let filters = Filters::new().eq("status", "succeeded");
        let query = build_query(
            Pagination::new().limit(25).offset(50),
            &filters,
            &[("sort", "time-descending")],
        );
        assert_eq!(
            query,
            "limit=25&offset=50&filters=status%3A%3Aeq%28succeeded%29&sort=time-descending"
        );
    }

    #[test]
    fn test_extra_overrides_in_place() {
        let query = build_query(
            Pagination::new().limit(25).offset(50),
            &Filters::new(),
            &[("limit", "100")],
        );
        assert_eq!(query, "limit=100&offset=50");
    }

    #[test]
    fn test_filters_join_with_pipe() {
        let filters = Filters::new()
            .between("date_range", "1500000000", "1600000000")
            .in_values("status", &["succeeded", "pending"]);
        assert_eq!(
            filters.to_string(),
            "date_range::bt(1500000000,1600000000)|status::in(succeeded,pending)"
        );
    }

    #[test]
    fn test_filter_values_are_encoded_in_query() {
        let filters = Filters::new().less_than("amount", "100");
        let query = build_query(Pagination::new(), &filters, &[]);
        assert_eq!(query, "filters=amount%3A%3Alt%28100%29");
    }
}
