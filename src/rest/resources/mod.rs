//! Concrete Zoop resources.

mod bank_account;
mod bank_account_token;
mod boleto;
mod buyer;
mod card_token;
mod split_rule;
mod transaction;
mod transfer;

pub use bank_account::BankAccount;
pub use bank_account_token::BankAccountToken;
pub use boleto::Boleto;
pub use buyer::Buyer;
pub use card_token::CardToken;
pub use split_rule::SplitRule;
pub use transaction::{Transaction, CURRENCY};
pub use transfer::Transfer;
