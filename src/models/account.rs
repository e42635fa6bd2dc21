//! Bank accounts, their types and loans.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Response of `GET /users/{user}/accounts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountsResponse {
    /// Sum of the displayed accounts' balances
    #[serde(default)]
    pub balance: f64,
    /// Balances per currency code
    #[serde(default)]
    pub balances: HashMap<String, f64>,
    /// Upcoming balances per currency code
    #[serde(default)]
    pub coming_balances: HashMap<String, f64>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

/// A bank account.
///
/// Delivered by the accounts endpoints and by the `account.*` webhooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    #[serde(rename = "id_connection")]
    pub connection_id: Option<i64>,
    #[serde(rename = "id_user")]
    pub user_id: Option<i64>,
    #[serde(rename = "id_source")]
    pub source_id: Option<i64>,
    #[serde(rename = "id_parent")]
    pub parent_id: Option<i64>,
    pub number: Option<String>,
    #[serde(default)]
    pub original_name: String,
    pub balance: Option<f64>,
    /// Upcoming operations total. The provider spells this field `comming`.
    #[serde(rename = "comming")]
    pub coming: Option<f64>,
    #[serde(default)]
    pub display: bool,
    pub last_update: Option<Timestamp>,
    pub deleted: Option<Timestamp>,
    pub disabled: Option<Timestamp>,
    pub iban: Option<String>,
    pub bic: Option<String>,
    pub currency: Option<Currency>,
    #[serde(rename = "type", default)]
    pub kind: AccountTypeName,
    #[serde(rename = "id_type", default)]
    pub type_id: i64,
    #[serde(default)]
    pub bookmarked: i64,
    #[serde(default)]
    pub name: String,
    pub error: Option<String>,
    pub usage: Option<BankAccountUsage>,
    #[serde(default)]
    pub ownership: String,
    pub company_name: Option<String>,
    pub loan: Option<Loan>,
}

/// Account delivered by the `account.synced` webhook.
///
/// Transactions are carried by the provider alongside the account fields
/// but are not modelled here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncedAccount {
    #[serde(flatten)]
    pub account: Account,
}

/// Body of `PUT /users/{user}/accounts/{id}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAccount {
    pub display: bool,
    pub disabled: bool,
}

/// Who an account belongs to.
///
/// Codes other than `PRIV`, `ORGA` and `ASSO` are kept as
/// [`BankAccountUsage::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BankAccountUsage {
    Private,
    Organization,
    Association,
    Other(String),
}

impl From<String> for BankAccountUsage {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PRIV" => Self::Private,
            "ORGA" => Self::Organization,
            "ASSO" => Self::Association,
            _ => Self::Other(value),
        }
    }
}

impl From<BankAccountUsage> for String {
    fn from(value: BankAccountUsage) -> Self {
        match value {
            BankAccountUsage::Private => "PRIV".to_string(),
            BankAccountUsage::Organization => "ORGA".to_string(),
            BankAccountUsage::Association => "ASSO".to_string(),
            BankAccountUsage::Other(code) => code,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub total_amount: Option<f64>,
    pub available_amount: Option<f64>,
    pub used_amount: Option<f64>,
    pub subscription_date: Option<Timestamp>,
    pub maturity_date: Option<Timestamp>,
    pub next_payment_amount: Option<f64>,
    pub next_payment_date: Option<Timestamp>,
    pub rate: Option<f64>,
    pub nb_payments_left: Option<i64>,
    pub nb_payments_done: Option<i64>,
    pub nb_payments_total: Option<i64>,
    pub last_payment_amount: Option<f64>,
    pub last_payment_date: Option<Timestamp>,
    pub account_label: Option<String>,
    pub insurance_label: Option<String>,
    /// Duration in months
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub precision: u32,
}

/// Account type name.
///
/// Names the provider adds later decode as [`AccountTypeName::Other`]
/// instead of failing the whole account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountTypeName {
    Checking,
    Savings,
    Deposit,
    Loan,
    Market,
    Joint,
    Card,
    LifeInsurance,
    Pee,
    Perco,
    Article83,
    Rsp,
    Pea,
    Capitalisation,
    Perp,
    Madelin,
    #[default]
    Unknown,
    Other(String),
}

impl AccountTypeName {
    /// Returns the provider's spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Deposit => "deposit",
            Self::Loan => "loan",
            Self::Market => "market",
            Self::Joint => "joint",
            Self::Card => "card",
            Self::LifeInsurance => "lifeinsurance",
            Self::Pee => "pee",
            Self::Perco => "perco",
            Self::Article83 => "article83",
            Self::Rsp => "rsp",
            Self::Pea => "pea",
            Self::Capitalisation => "capitalisation",
            Self::Perp => "perp",
            Self::Madelin => "madelin",
            Self::Unknown => "unknown",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for AccountTypeName {
    fn from(value: String) -> Self {
        match value.as_str() {
            "checking" => Self::Checking,
            "savings" => Self::Savings,
            "deposit" => Self::Deposit,
            "loan" => Self::Loan,
            "market" => Self::Market,
            "joint" => Self::Joint,
            "card" => Self::Card,
            "lifeinsurance" => Self::LifeInsurance,
            "pee" => Self::Pee,
            "perco" => Self::Perco,
            "article83" => Self::Article83,
            "rsp" => Self::Rsp,
            "pea" => Self::Pea,
            "capitalisation" => Self::Capitalisation,
            "perp" => Self::Perp,
            "madelin" => Self::Madelin,
            "unknown" => Self::Unknown,
            _ => Self::Other(value),
        }
    }
}

impl From<AccountTypeName> for String {
    fn from(value: AccountTypeName) -> Self {
        match value {
            AccountTypeName::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Response of `GET /account_types`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountTypesResponse {
    #[serde(rename = "accounttypes", default)]
    pub account_types: Vec<AccountType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountType {
    pub id: i64,
    pub name: AccountTypeName,
    #[serde(rename = "id_parent")]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub is_invest: bool,
    #[serde(default)]
    pub display_name: String,
    /// Plural display name
    #[serde(rename = "display_name_p", default)]
    pub display_name_plural: String,
}
