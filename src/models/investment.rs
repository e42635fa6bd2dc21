//! Securities held in market accounts.

use serde::{Deserialize, Serialize};

use super::{Currency, Date, Timestamp};

/// Response of `GET /users/{user}/accounts/{id}/investments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentsResponse {
    #[serde(default)]
    pub diff: f64,
    #[serde(default)]
    pub diff_percent: f64,
    pub prev_diff: Option<f64>,
    pub prev_diff_percent: Option<f64>,
    #[serde(default)]
    pub valuation: f64,
    #[serde(default)]
    pub investments: Vec<Investment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: i64,
    #[serde(rename = "id_account")]
    pub account_id: i64,
    #[serde(rename = "id_security", default)]
    pub security_id: i64,
    #[serde(rename = "id_type")]
    pub security_type: Option<FinanceSecurityType>,
    #[serde(default)]
    pub label: String,
    pub code: Option<String>,
    #[serde(default)]
    pub code_type: String,
    #[serde(default)]
    pub source: String,
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(rename = "unitprice", default)]
    pub unit_price: f64,
    #[serde(rename = "unitvalue", default)]
    pub unit_value: f64,
    #[serde(default)]
    pub valuation: f64,
    #[serde(default)]
    pub diff: f64,
    #[serde(default)]
    pub diff_percent: f64,
    pub prev_diff: Option<f64>,
    pub prev_diff_percent: Option<f64>,
    /// Valuation date
    pub vdate: Date,
    pub prev_vdate: Option<Date>,
    #[serde(default)]
    pub portfolio_share: f64,
    #[serde(default)]
    pub calculated: Vec<String>,
    pub deleted: Option<Timestamp>,
    pub last_update: Option<Timestamp>,
    pub original_currency: Option<Currency>,
    pub original_valuation: Option<f64>,
    #[serde(rename = "original_unitvalue")]
    pub original_unit_value: Option<f64>,
    #[serde(rename = "original_unitprice")]
    pub original_unit_price: Option<f64>,
    pub original_diff: Option<f64>,
}

/// Security category as labelled by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FinanceSecurityType {
    Opcvm,
    Etf,
    Shares,
    Other(String),
}

impl From<String> for FinanceSecurityType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OPCVM" => Self::Opcvm,
            "Trackers - ETF" => Self::Etf,
            "Actions" => Self::Shares,
            _ => Self::Other(value),
        }
    }
}

impl From<FinanceSecurityType> for String {
    fn from(value: FinanceSecurityType) -> Self {
        match value {
            FinanceSecurityType::Opcvm => "OPCVM".to_string(),
            FinanceSecurityType::Etf => "Trackers - ETF".to_string(),
            FinanceSecurityType::Shares => "Actions".to_string(),
            FinanceSecurityType::Other(label) => label,
        }
    }
}
