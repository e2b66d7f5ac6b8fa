//! The transaction resource.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, ZoopClient};
use crate::rest::data::DataBag;
use crate::rest::query::{Filters, Pagination};
use crate::rest::resource::ApiResource;

/// Currency every transaction is denominated in.
pub const CURRENCY: &str = "BRL";

const FIELDS: &[&str] = &[
    "id",
    "status",
    "amount",
    "original_amount",
    "currency",
    "payment_type",
    "on_behalf_of",
    "customer",
    "reference_id",
    "payment_method",
    "_links",
];

/// A payment transaction.
///
/// New transactions start out denominated in [`CURRENCY`]; the amount is
/// in cents.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Transaction {
    data: DataBag,
}

impl ApiResource for Transaction {
    const NAME: &'static str = "transaction";
    const PATH: &'static str = "marketplaces/{marketplace}/transactions";

    fn initialize() -> Self {
        let mut data = DataBag::new();
        data.set("currency", CURRENCY);
        Self { data }
    }

    fn populate(raw: &Value) -> Self {
        let mut transaction = Self {
            data: DataBag::new(),
        };
        for field in FIELDS {
            transaction.data.adopt(raw, field);
        }
        transaction
    }

    fn data(&self) -> &DataBag {
        &self.data
    }

    fn data_mut(&mut self) -> &mut DataBag {
        &mut self.data
    }
}

impl Transaction {
    /// Creates an empty transaction with the default currency set.
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

    /// Sets the payment type, e.g. `credit` or `boleto`.
    #[must_use]
    pub fn payment_type(mut self, value: impl Into<String>) -> Self {
        self.data.set("payment_type", value.into());
        self
    }

    /// Sets the seller the transaction is made on behalf of.
    #[must_use]
    pub fn on_behalf_of(mut self, seller_id: impl Into<String>) -> Self {
        self.data.set("on_behalf_of", seller_id.into());
        self
    }

    /// Sets the paying buyer.
    #[must_use]
    pub fn customer(mut self, buyer_id: impl Into<String>) -> Self {
        self.data.set("customer", buyer_id.into());
        self
    }

    /// Sets the card token used to pay.
    #[must_use]
    pub fn card_token(mut self, token_id: impl Into<String>) -> Self {
        self.data.set("token", token_id.into());
        self
    }

    /// Sets an external reference id.
    #[must_use]
    pub fn reference_id(mut self, value: impl Into<String>) -> Self {
        self.data.set("reference_id", value.into());
        self
    }

    /// Sets a free-form description.
    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.data.set("description", value.into());
        self
    }

    /// Returns the transaction id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.data.get_str("id")
    }

    /// Returns the transaction status.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.data.get_str("status")
    }

    /// Returns the amount in cents.
    #[must_use]
    pub fn amount_cents(&self) -> Option<i64> {
        self.data.get_i64("amount")
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.data.get_str("currency")
    }

    /// Returns the payment method id, when the server sent one.
    #[must_use]
    pub fn payment_method_id(&self) -> Option<&str> {
        self.data
            .get_in(&["payment_method", "id"])
            .and_then(Value::as_str)
    }

    /// Creates the transaction on the API.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn create(self, client: &ZoopClient) -> Result<Self, ApiError> {
        let path = Self::collection_path(client.api_version(), client.marketplace_id());
        Self::create_by_path(client, &path, self.data.to_value()).await
    }

    /// Fetches a transaction by id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn find(client: &ZoopClient, id: &str) -> Result<Self, ApiError> {
        let path = Self::instance_path(client.api_version(), client.marketplace_id(), id);
        Self::get_by_path(client, &path).await
    }

    /// Lists transactions, returning the raw collection envelope.
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, MarketplaceId};
    use serde_json::json;

    #[test]
    fn test_new_sets_default_currency() {
        let transaction = Transaction::new();
        assert_eq!(transaction.currency(), Some(CURRENCY));
    }

    #[test]
    fn test_instance_path() {
        let marketplace = MarketplaceId::new("mkt_123").unwrap();
        assert_eq!(
            Transaction::instance_path(ApiVersion::V1, &marketplace, "tx_9"),
            "v1/marketplaces/mkt_123/transactions/tx_9"
        );
    }

    #[test]
    fn test_populate_reads_nested_payment_method() {
        let transaction = Transaction::populate(&json!({
            "id": "tx_9",
            "status": "succeeded",
            "amount": 1500,
            "payment_method": {"id": "pm_1", "barcode": null}
        }));

        assert_eq!(transaction.id(), Some("tx_9"));
        assert_eq!(transaction.amount_cents(), Some(1500));
        assert_eq!(transaction.payment_method_id(), Some("pm_1"));
        // populate does not carry creation defaults over
        assert!(transaction.currency().is_none());
    }
}
