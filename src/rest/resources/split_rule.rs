//! The split rule resource.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, ZoopClient};
use crate::rest::data::DataBag;
use crate::rest::query::{Filters, Pagination};
use crate::rest::resource::ApiResource;
use crate::rest::resources::transaction::Transaction;

const FIELDS: &[&str] = &[
    "id",
    "status",
    "amount",
    "percentage",
    "recipient",
    "liable",
    "charge_processing_fee",
    "transaction",
    "created_at",
    "_links",
];

/// A rule splitting a transaction's amount with another recipient.
///
/// Split rules are created under a transaction but read from a top-level
/// collection, like [`Transfer`](super::Transfer).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SplitRule {
    data: DataBag,
}

impl ApiResource for SplitRule {
    const NAME: &'static str = "split_rule";
    const PATH: &'static str = "split_rules";

    fn initialize() -> Self {
        Self {
            data: DataBag::new(),
        }
    }

    fn populate(raw: &Value) -> Self {
        let mut rule = Self::initialize();
        for field in FIELDS {
            rule.data.adopt(raw, field);
        }
        rule
    }

    fn data(&self) -> &DataBag {
        &self.data
    }

    fn data_mut(&mut self) -> &mut DataBag {
        &mut self.data
    }
}

impl SplitRule {
    /// Creates an empty split rule ready to be filled in.
    #[must_use]
    pub fn new() -> Self {
        Self::initialize()
    }

    /// Sets the fixed amount in cents routed to the recipient.
    #[must_use]
    pub fn amount(mut self, cents: i64) -> Self {
        self.data.set("amount", cents);
        self
    }

    /// Sets the seller receiving the split.
    #[must_use]
    pub fn recipient(mut self, seller_id: impl Into<String>) -> Self {
        self.data.set("recipient", seller_id.into());
        self
    }

    /// Sets whether the recipient is liable for chargebacks.
    #[must_use]
    pub fn liable(mut self, value: bool) -> Self {
        self.data.set("liable", value);
        self
    }

    /// Sets whether the recipient pays a share of the processing fee.
    #[must_use]
    pub fn charge_processing_fee(mut self, value: bool) -> Self {
        self.data.set("charge_processing_fee", value);
        self
    }

    /// Returns the split rule id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.data.get_str("id")
    }

    /// Returns the split rule status.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.data.get_str("status")
    }

    /// Creates the split rule under the given transaction.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn create(
        self,
        client: &ZoopClient,
        transaction_id: &str,
    ) -> Result<Self, ApiError> {
        let path = format!(
            "{}/{}",
            Transaction::instance_path(client.api_version(), client.marketplace_id(), transaction_id),
            Self::PATH
        );
        Self::create_by_path(client, &path, self.data.to_value()).await
    }

    /// Fetches a split rule by id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn find(client: &ZoopClient, id: &str) -> Result<Self, ApiError> {
        let path = Self::instance_path(client.api_version(), client.marketplace_id(), id);
        Self::get_by_path(client, &path).await
    }

    /// Lists split rules, returning the raw collection envelope.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn list(
        client: &ZoopClient,
        pagination: Pagination,
        filters: &Filters,
    ) -> Result<Value, ApiError> {
        let path = Self::list_path(client.api_version(), client.marketplace_id(), pagination, filters, &[]);
        Self::get_by_path_raw(client, &path).await
    }

    /// Reverts a split rule.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn revert(client: &ZoopClient, id: &str) -> Result<Self, ApiError> {
        let path = Self::action_path(client.api_version(), client.marketplace_id(), id, "reverse");
        let raw = client.post(path, None).await?;
        Ok(Self::populate(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, MarketplaceId};

    #[test]
    fn test_top_level_paths() {
        let marketplace = MarketplaceId::new("mkt_123").unwrap();
        assert_eq!(SplitRule::collection_path(ApiVersion::V1, &marketplace), "v1/split_rules");
        assert_eq!(
            SplitRule::action_path(ApiVersion::V1, &marketplace, "sr_1", "reverse"),
            "v1/split_rules/sr_1/reverse"
        );
    }

    #[test]
    fn test_setters_build_request_body() {
        let rule = SplitRule::new()
            .amount(2500)
            .recipient("sel_1")
            .liable(true)
            .charge_processing_fee(false);

        let body = serde_json::to_value(&rule).unwrap();
        assert_eq!(body["amount"], 2500);
        assert_eq!(body["recipient"], "sel_1");
        assert_eq!(body["liable"], true);
        assert_eq!(body["charge_processing_fee"], false);
    }
}
