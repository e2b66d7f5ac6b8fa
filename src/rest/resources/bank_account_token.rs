//! The bank account token resource.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, ZoopClient};
use crate::rest::data::DataBag;
use crate::rest::resource::ApiResource;

/// A tokenized bank account, exchanged for a
/// [`BankAccount`](super::BankAccount) at creation time.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BankAccountToken {
    data: DataBag,
}

impl ApiResource for BankAccountToken {
    const NAME: &'static str = "bank_account_token";
    const PATH: &'static str = "marketplaces/{marketplace}/bank_accounts/tokens";

    fn initialize() -> Self {
        Self {
            data: DataBag::new(),
        }
    }

    fn populate(raw: &Value) -> Self {
        let mut token = Self::initialize();
        for field in ["id", "type", "bank_account", "created_at", "_links"] {
            token.data.adopt(raw, field);
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

impl BankAccountToken {
    /// Creates an empty token request.
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

    /// Sets the bank code.
    #[must_use]
    pub fn bank_code(mut self, value: impl Into<String>) -> Self {
        self.data.set("bank_code", value.into());
        self
    }

    /// Sets the branch routing number.
    #[must_use]
    pub fn routing_number(mut self, value: impl Into<String>) -> Self {
        self.data.set("routing_number", value.into());
        self
    }

    /// Sets the account number.
    #[must_use]
    pub fn account_number(mut self, value: impl Into<String>) -> Self {
        self.data.set("account_number", value.into());
        self
    }

    /// Sets the holder's CPF or CNPJ.
    #[must_use]
    pub fn taxpayer_id(mut self, value: impl Into<String>) -> Self {
        self.data.set("taxpayer_id", value.into());
        self
    }

    /// Sets the account type, `checking` or `savings`.
    #[must_use]
    pub fn account_type(mut self, value: impl Into<String>) -> Self {
        self.data.set("type", value.into());
        self
    }

    /// Returns the token id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.data.get_str("id")
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
