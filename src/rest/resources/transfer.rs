//! The transfer resource.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, ZoopClient};
use crate::rest::data::DataBag;
use crate::rest::query::{Filters, Pagination};
use crate::rest::resource::ApiResource;
use crate::rest::resources::bank_account::BankAccount;

const FIELDS: &[&str] = &[
    "id",
    "status",
    "amount",
    "currency",
    "description",
    "bank_account",
    "transferred_at",
    "created_at",
    "_links",
];

/// A payout to a bank account.
///
/// Transfers are created under the destination bank account but live in a
/// top-level collection: reads, lists, and reversals are not scoped to
/// the marketplace.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Transfer {
    data: DataBag,
}

impl ApiResource for Transfer {
    const NAME: &'static str = "transfer";
    const PATH: &'static str = "transfers";

    fn initialize() -> Self {
        Self {
            data: DataBag::new(),
        }
    }

    fn populate(raw: &Value) -> Self {
        let mut transfer = Self::initialize();
        for field in FIELDS {
            transfer.data.adopt(raw, field);
        }
        transfer
    }

    fn data(&self) -> &DataBag {
        &self.data
    }

    fn data_mut(&mut self) -> &mut DataBag {
        &mut self.data
    }
}

impl Transfer {
    /// Creates an empty transfer ready to be filled in.
    #[must_use]
    pub fn new() -> Self {
        Self::initialize()
    }

    /// Sets the amount in cents.
    #[must_use]
    pub fn amount(mut self, cents: i64) -> Self {
        self.data.set("amount", cents);
        self
    }

    /// Sets a free-form description.
    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.data.set("description", value.into());
        self
    }

    /// Returns the transfer id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.data.get_str("id")
    }

    /// Returns the transfer status.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.data.get_str("status")
    }

    /// Returns the amount in cents.
    #[must_use]
    pub fn amount_cents(&self) -> Option<i64> {
        self.data.get_i64("amount")
    }

    /// Creates the transfer to the given bank account.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn create(
        self,
        client: &ZoopClient,
        bank_account_id: &str,
    ) -> Result<Self, ApiError> {
        let path = format!(
            "{}/{}",
            BankAccount::instance_path(client.api_version(), client.marketplace_id(), bank_account_id),
            Self::PATH
        );
        Self::create_by_path(client, &path, self.data.to_value()).await
    }

    /// Fetches a transfer by id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn find(client: &ZoopClient, id: &str) -> Result<Self, ApiError> {
        let path = Self::instance_path(client.api_version(), client.marketplace_id(), id);
        Self::get_by_path(client, &path).await
    }

    /// Lists transfers, returning the raw collection envelope.
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

    /// Reverts a transfer.
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
    fn test_paths_are_not_marketplace_scoped() {
        let marketplace = MarketplaceId::new("mkt_123").unwrap();
        assert_eq!(Transfer::collection_path(ApiVersion::V1, &marketplace), "v1/transfers");
        assert_eq!(
            Transfer::action_path(ApiVersion::V1, &marketplace, "tr_1", "reverse"),
            "v1/transfers/tr_1/reverse"
        );
    }

    #[test]
    fn test_populate_reads_fields() {
        let transfer = Transfer::populate(&serde_json::json!({
            "id": "tr_1",
            "status": "pending",
            "amount": 5000
        }));

        assert_eq!(transfer.id(), Some("tr_1"));
        assert_eq!(transfer.status(), Some("pending"));
        assert_eq!(transfer.amount_cents(), Some(5000));
    }
}
