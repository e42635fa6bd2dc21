//! Typed records for the provider's JSON payloads.
//!
//! Models are passive: they mirror the provider's field names and
//! optionality and carry no behavior beyond decoding. Nullable provider
//! fields are `Option`, fields the provider may omit fall back to their
//! `Default`.

mod account;
mod auth;
mod connection;
mod investment;
mod scalar;
mod user;

#[cfg(test)]
mod scalar_tests;

pub use account::{
    Account, AccountType, AccountTypeName, AccountTypesResponse, AccountsResponse,
    BankAccountUsage, Currency, Loan, SyncedAccount, UpdateAccount,
};
pub use auth::{
    ApiCredentials, AskForToken, AskForTokenRenew, ConnectCallbackData, TemporaryCode, Token,
    TokenAccessType,
};
pub use connection::{Connection, ConnectionState, ConnectionsResponse};
pub use investment::{FinanceSecurityType, Investment, InvestmentsResponse};
pub use scalar::{Date, ScalarError, Timestamp, TimestampFormat};
pub use user::{User, UserRef};
