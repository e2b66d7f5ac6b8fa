//! The boleto resource.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, ZoopClient};
use crate::rest::data::DataBag;
use crate::rest::resource::ApiResource;

const FIELDS: &[&str] = &["id", "status", "barcode", "amount", "expiration_date", "url", "_links"];

/// A boleto payment slip.
///
/// Capturing confirms a pre-authorized boleto; cancelling posts to the
/// `void` action.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Boleto {
    data: DataBag,
}

impl ApiResource for Boleto {
    const NAME: &'static str = "boleto";
    const PATH: &'static str = "marketplaces/{marketplace}/boletos";

    fn initialize() -> Self {
        let mut data = DataBag::new();
        data.set("installment_count", 1);
        Self { data }
    }

    fn populate(raw: &Value) -> Self {
        let mut boleto = Self {
            data: DataBag::new(),
        };
        for field in FIELDS {
            boleto.data.adopt(raw, field);
        }
        boleto
    }

    fn data(&self) -> &DataBag {
        &self.data
    }

    fn data_mut(&mut self) -> &mut DataBag {
        &mut self.data
    }
}

impl Boleto {
    /// Creates an empty boleto with a single installment.
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

    /// Sets the expiration date as `YYYY-MM-DD`.
    #[must_use]
    pub fn expiration_date(mut self, value: impl Into<String>) -> Self {
        self.data.set("expiration_date", value.into());
        self
    }

    /// Sets the paying buyer.
    #[must_use]
    pub fn customer(mut self, buyer_id: impl Into<String>) -> Self {
        self.data.set("customer", buyer_id.into());
        self
    }

    /// Sets a free-form description.
    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.data.set("description", value.into());
        self
    }

    /// Returns the boleto id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.data.get_str("id")
    }

    /// Returns the boleto status.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.data.get_str("status")
    }

    /// Returns the barcode.
    #[must_use]
    pub fn barcode(&self) -> Option<&str> {
        self.data.get_str("barcode")
    }

    /// Creates the boleto on the API.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn create(self, client: &ZoopClient) -> Result<Self, ApiError> {
        let path = Self::collection_path(client.api_version(), client.marketplace_id());
        Self::create_by_path(client, &path, self.data.to_value()).await
    }

    /// Fetches a boleto by id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn find(client: &ZoopClient, id: &str) -> Result<Self, ApiError> {
        let path = Self::instance_path(client.api_version(), client.marketplace_id(), id);
        Self::get_by_path(client, &path).await
    }

    /// Captures a pre-authorized boleto.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn capture(client: &ZoopClient, id: &str) -> Result<Self, ApiError> {
        let path = Self::action_path(client.api_version(), client.marketplace_id(), id, "capture");
        let raw = client.post(path, None).await?;
        Ok(Self::populate(&raw))
    }

    /// Cancels a boleto.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn cancel(client: &ZoopClient, id: &str) -> Result<Self, ApiError> {
        let path = Self::action_path(client.api_version(), client.marketplace_id(), id, "void");
        let raw = client.post(path, None).await?;
        Ok(Self::populate(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, MarketplaceId};
    use serde_json::json;

    #[test]
    fn test_new_defaults_to_single_installment() {
        let boleto = Boleto::new();
        assert_eq!(boleto.data().get_i64("installment_count"), Some(1));
    }

    #[test]
    fn test_action_paths() {
        let marketplace = MarketplaceId::new("mkt_123").unwrap();
        assert_eq!(
            Boleto::action_path(ApiVersion::V1, &marketplace, "bol_1", "capture"),
            "v1/marketplaces/mkt_123/boletos/bol_1/capture"
        );
        assert_eq!(
            Boleto::action_path(ApiVersion::V1, &marketplace, "bol_1", "void"),
            "v1/marketplaces/mkt_123/boletos/bol_1/void"
        );
    }

    #[test]
    fn test_populate_reads_barcode_and_links() {
        let boleto = Boleto::populate(&json!({
            "id": "bol_1",
            "barcode": "23790...",
            "_links": {
                "payBoleto": {"printHref": "https://pay.zoop.ws/boleto/bol_1/print"}
            }
        }));

        assert_eq!(boleto.barcode(), Some("23790..."));
        let links = boleto.links().unwrap();
        assert_eq!(
            links.get("payBoleto").unwrap().print_href.as_deref(),
            Some("https://pay.zoop.ws/boleto/bol_1/print")
        );
    }
}
