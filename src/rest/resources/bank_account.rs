//! The bank account resource.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, ZoopClient};
use crate::rest::data::DataBag;
use crate::rest::query::{Filters, Pagination};
use crate::rest::resource::ApiResource;

const FIELDS: &[&str] = &[
    "id",
    "status",
    "type",
    "bank_name",
    "bank_code",
    "holder_name",
    "taxpayer_id",
    "routing_number",
    "account_number",
    "_links",
    "created_at",
];

/// A bank account registered with the marketplace.
///
/// Accounts can be created from raw details or from a previously issued
/// [`BankAccountToken`](super::BankAccountToken).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BankAccount {
    data: DataBag,
}

impl ApiResource for BankAccount {
    const NAME: &'static str = "bank_account";
    const PATH: &'static str = "marketplaces/{marketplace}/bank_accounts";

    fn initialize() -> Self {
        Self {
            data: DataBag::new(),
        }
    }

    fn populate(raw: &Value) -> Self {
        let mut account = Self::initialize();
        for field in FIELDS {
            account.data.adopt(raw, field);
        }
        account
    }

    fn data(&self) -> &DataBag {
        &self.data
    }

    fn data_mut(&mut self) -> &mut DataBag {
        &mut self.data
    }
}

impl BankAccount {
    /// Creates an empty bank account ready to be filled in.
    #[must_use]
    pub fn new() -> Self {
        Self::initialize()
    }

    /// Sets the account holder name.
    #[must_use]
    pub fn holder_name(mut self, value: impl Into<String>) -> Self {
        self.data.set("holder_name", value.into());
        self
    }

    /// Sets the holder's CPF or CNPJ.
    #[must_use]
    pub fn taxpayer_id(mut self, value: impl Into<String>) -> Self {
        self.data.set("taxpayer_id", value.into());
        self
    }

    /// Sets the bank code, e.g. `001` or `237`.
    #[must_use]
    pub fn bank_code(mut self, value: impl Into<String>) -> Self {
        self.data.set("bank_code", value.into());
        self
    }

    /// Sets the account type, `checking` or `savings`.
    #[must_use]
    pub fn account_type(mut self, value: impl Into<String>) -> Self {
        self.data.set("type", value.into());
        self
    }

    /// Sets the account number.
    #[must_use]
    pub fn account_number(mut self, value: impl Into<String>) -> Self {
        self.data.set("account_number", value.into());
        self
    }

    /// Sets the branch routing number.
    #[must_use]
    pub fn routing_number(mut self, value: impl Into<String>) -> Self {
        self.data.set("routing_number", value.into());
        self
    }

    /// Sets the owning buyer.
    #[must_use]
    pub fn customer(mut self, buyer_id: impl Into<String>) -> Self {
        self.data.set("customer", buyer_id.into());
        self
    }

    /// Sets the bank account token to create the account from.
    #[must_use]
    pub fn token(mut self, token_id: impl Into<String>) -> Self {
        self.data.set("token", token_id.into());
        self
    }

    /// Returns the account id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.data.get_str("id")
    }

    /// Returns the account status.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.data.get_str("status")
    }

    /// Returns the bank name.
    #[must_use]
    pub fn bank_name(&self) -> Option<&str> {
        self.data.get_str("bank_name")
    }

    /// Creates the bank account on the API.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn create(self, client: &ZoopClient) -> Result<Self, ApiError> {
        let path = Self::collection_path(client.api_version(), client.marketplace_id());
        Self::create_by_path(client, &path, self.data.to_value()).await
    }

    /// Fetches a bank account by id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn find(client: &ZoopClient, id: &str) -> Result<Self, ApiError> {
        let path = Self::instance_path(client.api_version(), client.marketplace_id(), id);
        Self::get_by_path(client, &path).await
    }

    /// Lists bank accounts, returning the raw collection envelope.
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

    /// Updates the bank account with this instance's set fields.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn update(self, client: &ZoopClient, id: &str) -> Result<Self, ApiError> {
        let path = Self::instance_path(client.api_version(), client.marketplace_id(), id);
        Self::update_by_path(client, &path, self.data.to_value()).await
    }

    /// Deletes a bank account by id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx responses.
    pub async fn delete(client: &ZoopClient, id: &str) -> Result<Value, ApiError> {
        let path = Self::instance_path(client.api_version(), client.marketplace_id(), id);
        Self::delete_by_path(client, &path).await
    }
}
