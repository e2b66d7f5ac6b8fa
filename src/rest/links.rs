//! Hypermedia link extraction.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// A single hypermedia link.
///
/// Most links carry `href` alone; boleto payment links instead carry
/// `redirect_href` and `print_href` variants.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// Target of the link.
    pub href: Option<String>,
    /// Redirect variant, used by boleto payment links.
    #[serde(rename = "redirectHref")]
    pub redirect_href: Option<String>,
    /// Printable variant, used by boleto payment links.
    #[serde(rename = "printHref")]
    pub print_href: Option<String>,
    /// HTTP method the link expects, when the API advertises one.
    pub method: Option<String>,
}

/// The `_links` section of an API response, keyed by relation name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Links {
    by_name: HashMap<String, Link>,
}

impl Links {
    /// Extracts the `_links` section from a raw response.
    ///
    /// Returns `None` when the response has no `_links` object. Entries
    /// that are not objects are skipped.
    #[must_use]
    pub fn from_value(raw: &Value) -> Option<Self> {
        let section = raw.get("_links")?.as_object()?;
        let by_name = section
            .iter()
            .filter_map(|(name, value)| {
                let link = Link::deserialize(value).ok()?;
                Some((name.clone(), link))
            })
            .collect();
        Some(Self { by_name })
    }

    /// Returns the link with the given relation name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Link> {
        self.by_name.get(name)
    }

    /// Returns the `href` of the named link, when both exist.
    #[must_use]
    pub fn href(&self, name: &str) -> Option<&str> {
        self.by_name.get(name)?.href.as_deref()
    }

    /// Returns `true` when no links were present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterates over the links by relation name.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Link)> {
        self.by_name.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_extracts_links() {
        let raw = json!({
            "id": "tx_1",
            "_links": {
                "self": {"href": "https://api.zoop.ws/v1/transactions/tx_1"},
                "payBoleto": {
                    "redirectHref": "https://pay.zoop.ws/boleto/abc",
                    "printHref": "https://pay.zoop.ws/boleto/abc/print"
                }
            }
        });

        let links = Links::from_value(&raw).unwrap();
        assert_eq!(
            links.href("self"),
            Some("https://api.zoop.ws/v1/transactions/tx_1")
        );

        let pay = links.get("payBoleto").unwrap();
        assert!(pay.href.is_none());
        assert_eq!(
            pay.redirect_href.as_deref(),
            Some("https://pay.zoop.ws/boleto/abc")
        );
        assert_eq!(
            pay.print_href.as_deref(),
            Some("https://pay.zoop.ws/boleto/abc/print")
        );
    }

    #[test]
    fn test_from_value_missing_section_is_none() {
        assert!(Links::from_value(&json!({"id": "tx_1"})).is_none());
    }

    #[test]
    fn test_from_value_non_object_section_is_none() {
        assert!(Links::from_value(&json!({"_links": "nope"})).is_none());
    }

    #[test]
    fn test_unknown_relation_is_none() {
        let raw = json!({"_links": {"self": {"href": "x"}}});
        let links = Links::from_value(&raw).unwrap();
        assert!(links.get("next").is_none());
        assert!(links.href("next").is_none());
    }
}
