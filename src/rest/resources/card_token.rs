//! The card token resource.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, ZoopClient};
use crate::rest::data::DataBag;
use crate::rest::resource::ApiResource;

/// A tokenized credit card.
///
/// The token replaces raw card data in transaction payloads. Populating
/// only carries the token id and the masked card summary the server
/// returns, never the raw number.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CardToken {
    data: DataBag,
}

impl ApiResource for CardToken {
    const NAME: &'static str = "card_token";
    const PATH: &'static str = "marketplaces/{marketplace}/cards/tokens";

    fn initialize() -> Self {
        Self {
            data: DataBag::new(),
        }
    }

    fn populate(raw: &Value) -> Self {
        let mut token = Self::initialize();
        token.data.adopt(raw, "id");

        if let Some(card) = raw.get("card") {
            let mut summary = DataBag::new();
            for field in [
                "id",
                "card_brand",
                "first4_digits",
                "expiration_month",
                "expiration_year",
                "holder_name",
            ] {
                summary.adopt(card, field);
            }
            token.data.set("card", summary.to_value());
        }

        token
    }

    fn data(&self) -> &DataBag {
        &self.data
    }

    fn data_mut(&mut self) -> &mut DataBag {
        &mut self.data
    }
}

impl CardToken {
    /// Creates an empty card token request.
    #[must_use]
    pub fn new() -> Self {
        Self::initialize()
    }

    /// Sets the cardholder name.
    #[must_use]
    pub fn holder_name(mut self, value: impl Into<String>) -> Self {
        self.data.set("holder_name", value.into());
        self
    }

    /// Sets the card number.
    #[must_use]
    pub fn card_number(mut self, value: impl Into<String>) -> Self {
        self.data.set("card_number", value.into());
        self
    }

    /// Sets the expiration month, 1 to 12.
    #[must_use]
    pub fn expiration_month(mut self, value: u8) -> Self {
        self.data.set("expiration_month", i64::from(value));
        self
    }

    /// Sets the four-digit expiration year.
    #[must_use]
    pub fn expiration_year(mut self, value: u16) -> Self {
        self.data.set("expiration_year", i64::from(value));
        self
    }

    /// Sets the card security code.
    #[must_use]
    pub fn security_code(mut self, value: impl Into<String>) -> Self {
        self.data.set("security_code", value.into());
        self
    }

    /// Returns the token id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.data.get_str("id")
    }

    /// Returns the brand of the tokenized card.
    #[must_use]
    pub fn card_brand(&self) -> Option<&str> {
        self.data
            .get_in(&["card", "card_brand"])
            .and_then(Value::as_str)
    }

    /// Returns the first four digits of the tokenized card.
    #[must_use]
    pub fn card_first4_digits(&self) -> Option<&str> {
        self.data
            .get_in(&["card", "first4_digits"])
            .and_then(Value::as_str)
    }

    /// Creates the token on the API.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn create(self, client: &ZoopClient) -> Result<Self, ApiError> {
        let path = Self::collection_path(client.api_version(), client.marketplace_id());
        Self::create_by_path(client, &path, self.data.to_value()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, MarketplaceId};
    use serde_json::json;

    #[test]
    fn test_collection_path() {
        let marketplace = MarketplaceId::new("mkt_123").unwrap();
        assert_eq!(
            CardToken::collection_path(ApiVersion::V1, &marketplace),
            "v1/marketplaces/mkt_123/cards/tokens"
        );
    }

    #[test]
    fn test_populate_keeps_only_masked_summary() {
        let token = CardToken::populate(&json!({
            "id": "tok_1",
            "card": {
                "id": "card_1",
                "card_brand": "Visa",
                "first4_digits": "4111",
                "number": "4111111111111111"
            }
        }));

        assert_eq!(token.id(), Some("tok_1"));
        assert_eq!(token.card_brand(), Some("Visa"));
        assert_eq!(token.card_first4_digits(), Some("4111"));
        assert!(token.data().get_in(&["card", "number"]).is_none());
    }
}
