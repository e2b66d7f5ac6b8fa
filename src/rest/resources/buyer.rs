//! The buyer resource.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::{ApiError, ZoopClient};
use crate::rest::data::DataBag;
use crate::rest::query::{Filters, Pagination};
use crate::rest::resource::ApiResource;

/// Fields copied from a buyer response when populating.
const FIELDS: &[&str] = &[
    "id",
    "status",
    "resource",
    "account_balance",
    "current_balance",
    "first_name",
    "last_name",
    "taxpayer_id",
    "description",
    "email",
    "phone_number",
    "facebook",
    "twitter",
    "address",
    "delinquent",
    "payment_methods",
    "default_debit",
    "default_credit",
    "default_receipt_delivery_method",
    "uri",
    "metadata",
    "created_at",
    "updated_at",
    "_links",
];

/// A buyer of the marketplace.
///
/// # Example
///
/// ```rust,no_run
/// use zoop_api::rest::resources::Buyer;
/// # async fn example(client: &zoop_api::ZoopClient) -> Result<(), zoop_api::ApiError> {
/// let buyer = Buyer::new()
///     .first_name("Ana")
///     .last_name("Silva")
///     .email("ana@example.com")
///     .taxpayer_id("27389234859")
///     .create(client)
///     .await?;
/// println!("created buyer {:?}", buyer.id());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Buyer {
    data: DataBag,
}

impl ApiResource for Buyer {
    const NAME: &'static str = "buyer";
    const PATH: &'static str = "marketplaces/{marketplace}/buyers";

    fn initialize() -> Self {
        Self {
            data: DataBag::new(),
        }
    }

    fn populate(raw: &Value) -> Self {
        let mut buyer = Self::initialize();
        for field in FIELDS {
            buyer.data.adopt(raw, field);
        }
        buyer
    }

    fn data(&self) -> &DataBag {
        &self.data
    }

    fn data_mut(&mut self) -> &mut DataBag {
        &mut self.data
    }
}

impl Buyer {
    /// Creates an empty buyer ready to be filled in and created.
    #[must_use]
    pub fn new() -> Self {
        Self::initialize()
    }

    /// Sets the buyer's first name.
    #[must_use]
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.data.set("first_name", value.into());
        self
    }

    /// Sets the buyer's last name.
    #[must_use]
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.data.set("last_name", value.into());
        self
    }

    /// Sets the buyer's email address.
    #[must_use]
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.data.set("email", value.into());
        self
    }

    /// Sets the buyer's CPF or CNPJ.
    #[must_use]
    pub fn taxpayer_id(mut self, value: impl Into<String>) -> Self {
        self.data.set("taxpayer_id", value.into());
        self
    }

    /// Sets the buyer's phone number.
    #[must_use]
    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.data.set("phone_number", value.into());
        self
    }

    /// Sets the buyer's birthdate, serialized as `YYYY-MM-DD`.
    #[must_use]
    pub fn birthdate(mut self, value: NaiveDate) -> Self {
        self.data
            .set("birthdate", value.format("%Y-%m-%d").to_string());
        self
    }

    /// Sets a free-form description.
    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.data.set("description", value.into());
        self
    }

    /// Sets the buyer's address.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn address(
        mut self,
        line1: &str,
        line2: Option<&str>,
        neighborhood: &str,
        city: &str,
        state: &str,
        postal_code: &str,
        country_code: &str,
    ) -> Self {
        self.data.set(
            "address",
            json!({
                "line1": line1,
                "line2": line2,
                "neighborhood": neighborhood,
                "city": city,
                "state": state,
                "postal_code": postal_code,
                "country_code": country_code,
            }),
        );
        self
    }

    /// Returns the buyer id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.data.get_str("id")
    }

    /// Returns the buyer status.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.data.get_str("status")
    }

    /// Returns the buyer's email address.
    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        self.data.get_str("email")
    }

    /// Returns the city of the buyer's address.
    #[must_use]
    pub fn address_city(&self) -> Option<&str> {
        self.data.get_in(&["address", "city"]).and_then(Value::as_str)
    }

    /// Creates the buyer on the API.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn create(self, client: &ZoopClient) -> Result<Self, ApiError> {
        let path = Self::collection_path(client.api_version(), client.marketplace_id());
        Self::create_by_path(client, &path, self.data.to_value()).await
    }

    /// Fetches a buyer by id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn find(client: &ZoopClient, id: &str) -> Result<Self, ApiError> {
        let path = Self::instance_path(client.api_version(), client.marketplace_id(), id);
        Self::get_by_path(client, &path).await
    }

    /// Lists buyers, returning the raw collection envelope.
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

    #[test]
    fn test_collection_path() {
        let marketplace = MarketplaceId::new("mkt_123").unwrap();
        assert_eq!(
            Buyer::collection_path(ApiVersion::V1, &marketplace),
            "v1/marketplaces/mkt_123/buyers"
        );
        assert_eq!(Buyer::NAME, "buyer");
    }

    #[test]
    fn test_setters_build_request_body() {
        let buyer = Buyer::new()
            .first_name("Ana")
            .last_name("Silva")
            .email("ana@example.com")
            .birthdate(NaiveDate::from_ymd_opt(1990, 3, 14).unwrap());

        let body = serde_json::to_value(&buyer).unwrap();
        assert_eq!(body["first_name"], "Ana");
        assert_eq!(body["email"], "ana@example.com");
        assert_eq!(body["birthdate"], "1990-03-14");
    }

    #[test]
    fn test_populate_copies_known_fields_only() {
        let raw = json!({
            "id": "buy_1",
            "status": "active",
            "email": "ana@example.com",
            "address": {"city": "Recife"},
            "internal_debug_field": true
        });

        let buyer = Buyer::populate(&raw);
        assert_eq!(buyer.id(), Some("buy_1"));
        assert_eq!(buyer.status(), Some("active"));
        assert_eq!(buyer.address_city(), Some("Recife"));
        assert!(buyer.data().get("internal_debug_field").is_none());
    }

    #[test]
    fn test_populate_leaves_missing_fields_unset() {
        let buyer = Buyer::populate(&json!({"id": "buy_1"}));
        assert!(buyer.status().is_none());
        assert!(buyer.email_address().is_none());
    }
}
