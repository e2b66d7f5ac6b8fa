//! The REST resource abstraction.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::clients::{ApiError, ZoopClient};
use crate::config::{ApiVersion, MarketplaceId};
use crate::rest::data::DataBag;
use crate::rest::links::Links;
use crate::rest::query::{build_query, Filters, Pagination};

/// Placeholder in [`ApiResource::PATH`] replaced by the marketplace id.
const MARKETPLACE_PLACEHOLDER: &str = "{marketplace}";

/// A REST resource of the Zoop API.
///
/// Implementors provide a name, a collection path template, and the three
/// data-bag hooks; everything else — path construction, the CRUD verbs,
/// link extraction — is provided in terms of those.
///
/// Populating never mutates an existing instance: [`populate`] builds a
/// fresh resource holding exactly the fields the server sent. Fields the
/// server omitted stay unset, and accessors return `None` for them.
///
/// [`populate`]: ApiResource::populate
#[allow(async_fn_in_trait)]
pub trait ApiResource: Serialize + Sized {
    /// Singular name of the resource, e.g. `buyer`, carried in log context.
    const NAME: &'static str;

    /// Collection path template relative to the version segment. Paths
    /// scoped to a marketplace embed `{marketplace}`.
    const PATH: &'static str;

    /// Creates an empty resource carrying its creation defaults.
    fn initialize() -> Self;

    /// Builds a fresh resource from a raw API response.
    fn populate(raw: &Value) -> Self;

    /// Returns the resource's attribute bag.
    fn data(&self) -> &DataBag;

    /// Returns the resource's attribute bag mutably.
    fn data_mut(&mut self) -> &mut DataBag;

    /// Returns the collection path for the given version and marketplace.
    #[must_use]
    fn collection_path(version: ApiVersion, marketplace_id: &MarketplaceId) -> String {
        format!(
            "{version}/{}",
            Self::PATH.replace(MARKETPLACE_PLACEHOLDER, marketplace_id.as_ref())
        )
    }

    /// Returns the path of a single resource instance.
    #[must_use]
    fn instance_path(version: ApiVersion, marketplace_id: &MarketplaceId, id: &str) -> String {
        format!("{}/{id}", Self::collection_path(version, marketplace_id))
    }

    /// Returns the path of an action on a resource instance, e.g.
    /// `capture` or `void`.
    #[must_use]
    fn action_path(
        version: ApiVersion,
        marketplace_id: &MarketplaceId,
        id: &str,
        action: &str,
    ) -> String {
        format!("{}/{action}", Self::instance_path(version, marketplace_id, id))
    }

    /// Returns the collection path with pagination and filters applied.
    #[must_use]
    fn list_path(
        version: ApiVersion,
        marketplace_id: &MarketplaceId,
        pagination: Pagination,
        filters: &Filters,
        extra: &[(&str, &str)],
    ) -> String {
        let base = Self::collection_path(version, marketplace_id);
        let query = build_query(pagination, filters, extra);
        if query.is_empty() {
            base
        } else {
            format!("{base}?{query}")
        }
    }

    /// Returns the hypermedia links the server sent with this resource.
    #[must_use]
    fn links(&self) -> Option<Links> {
        Links::from_value(&self.data().to_value())
    }

    /// POSTs a body to `path` and populates a resource from the response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    async fn create_by_path(client: &ZoopClient, path: &str, body: Value) -> Result<Self, ApiError> {
        debug!(resource = Self::NAME, path, "creating resource");
        let raw = client.post(path, Some(body)).await?;
        Ok(Self::populate(&raw))
    }

    /// GETs `path` and populates a resource from the response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    async fn get_by_path(client: &ZoopClient, path: &str) -> Result<Self, ApiError> {
        debug!(resource = Self::NAME, path, "fetching resource");
        let raw = client.get(path).await?;
        Ok(Self::populate(&raw))
    }

    /// GETs `path` and returns the raw response, for collection envelopes.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    async fn get_by_path_raw(client: &ZoopClient, path: &str) -> Result<Value, ApiError> {
        client.get(path).await
    }

    /// PUTs a body to `path` and populates a resource from the response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    async fn update_by_path(client: &ZoopClient, path: &str, body: Value) -> Result<Self, ApiError> {
        debug!(resource = Self::NAME, path, "updating resource");
        let raw = client.put(path, body).await?;
        Ok(Self::populate(&raw))
    }

    /// DELETEs `path` and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    async fn delete_by_path(client: &ZoopClient, path: &str) -> Result<Value, ApiError> {
        debug!(resource = Self::NAME, path, "deleting resource");
        client.delete(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(transparent)]
    struct Widget {
        data: DataBag,
    }

    impl ApiResource for Widget {
        const NAME: &'static str = "widget";
        const PATH: &'static str = "marketplaces/{marketplace}/widgets";

        fn initialize() -> Self {
            Self {
                data: DataBag::new(),
            }
        }

        fn populate(raw: &Value) -> Self {
            let mut resource = Self::initialize();
            resource.data.adopt(raw, "id");
            resource.data.adopt(raw, "_links");
            resource
        }

        fn data(&self) -> &DataBag {
            &self.data
        }

        fn data_mut(&mut self) -> &mut DataBag {
            &mut self.data
        }
    }

    fn marketplace() -> MarketplaceId {
        MarketplaceId::new("mkt_123").unwrap()
    }

    #[test]
    fn test_collection_path_uses_version_and_marketplace() {
        assert_eq!(
            Widget::collection_path(ApiVersion::V1, &marketplace()),
            "v1/marketplaces/mkt_123/widgets"
        );
    }

    #[test]
    fn test_instance_and_action_paths() {
        assert_eq!(
            Widget::instance_path(ApiVersion::V1, &marketplace(), "wid_1"),
            "v1/marketplaces/mkt_123/widgets/wid_1"
        );
        assert_eq!(
            Widget::action_path(ApiVersion::V1, &marketplace(), "wid_1", "capture"),
            "v1/marketplaces/mkt_123/widgets/wid_1/capture"
        );
    }

    #[test]
    fn test_list_path_without_query_has_no_question_mark() {
        assert_eq!(
            Widget::list_path(
                ApiVersion::V1,
                &marketplace(),
                Pagination::new(),
                &Filters::new(),
                &[]
            ),
            "v1/marketplaces/mkt_123/widgets"
        );
    }

    #[test]
    fn test_list_path_appends_query() {
        let path = Widget::list_path(
            ApiVersion::V1,
            &marketplace(),
            Pagination::new().limit(10),
            &Filters::new(),
            &[],
        );
        assert_eq!(path, "v1/marketplaces/mkt_123/widgets?limit=10");
    }

    #[test]
    fn test_populate_leaves_missing_fields_unset() {
        let widget = Widget::populate(&json!({"id": "wid_1"}));
        assert_eq!(widget.data().get_str("id"), Some("wid_1"));
        assert!(widget.data().get("name").is_none());
    }

    #[test]
    fn test_links_come_from_populated_data() {
        let widget = Widget::populate(&json!({
            "id": "wid_1",
            "_links": {"self": {"href": "https://api.zoop.ws/v1/widgets/wid_1"}}
        }));
        let links = widget.links().unwrap();
        assert_eq!(links.href("self"), Some("https://api.zoop.ws/v1/widgets/wid_1"));

        let bare = Widget::populate(&json!({"id": "wid_2"}));
        assert!(bare.links().is_none());
    }
}
