//! Account: the single billing record of the API key's owner.

use crate::error::RenderError;
use crate::render::{self, single_section, Columns, PageMeta, Renderable, Rows};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub pending_charges: f64,
    #[serde(default)]
    pub last_payment_date: String,
    #[serde(default)]
    pub last_payment_amount: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub acls: Vec<String>,
}

/// Renderable view of one [`Account`].
#[derive(Debug, Clone, Serialize)]
pub struct AccountView {
    pub account: Account,
}

impl AccountView {
    pub fn new(account: Account) -> Self {
        Self { account }
    }
}

impl Renderable for AccountView {
    fn to_json(&self) -> Result<Vec<u8>, RenderError> {
        render::to_json_bytes(self)
    }

    fn to_yaml(&self) -> Result<Vec<u8>, RenderError> {
        render::to_yaml_bytes(self)
    }

    fn columns(&self) -> Columns {
        single_section(&[
            "BALANCE",
            "PENDING CHARGES",
            "LAST PAYMENT DATE",
            "LAST PAYMENT AMOUNT",
            "NAME",
            "EMAIL",
            "ACLS",
        ])
    }

    fn rows(&self) -> Rows {
        let a = &self.account;
        let mut rows = Rows::new();
        rows.insert(
            0,
            vec![vec![
                json!(a.balance),
                json!(a.pending_charges),
                json!(a.last_payment_date),
                json!(a.last_payment_amount),
                json!(a.name),
                json!(a.email),
                json!(a.acls),
            ]],
        );
        rows
    }

    fn paging(&self) -> Option<PageMeta> {
        None
    }
}
