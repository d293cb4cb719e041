use crate::ids::RequestId;
use crate::transactions::OrderTransaction;
use crate::Money;
use crate::Result;
use crate::{ConnectionConfig, Invoice, Tender, UserInfo};

use serde::Deserialize;

use thiserror::Error;

/// Represents an order row that a CSV record would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct OrderRow {
    pub request_id: String,
    pub tender: TenderKind,
    pub amount: Option<String>,
    pub token: Option<String>,
    pub acct: Option<String>,
    pub expdate: Option<String>,
    pub invoice_number: Option<String>,
    pub comment: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "lowercase")]
pub enum TenderKind {
    Paypal,
    Card,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing order row: amount value missing: {0:?}")]
    NoAmount(OrderRow),

    #[error("Error parsing order row: paypal tender requires a token: {0:?}")]
    NoToken(OrderRow),

    #[error("Error parsing order row: card tender requires acct and expdate: {0:?}")]
    IncompleteCard(OrderRow),
}

impl OrderRow {
    /// Builds an order transaction for this row.
    ///
    /// With explicit connection settings the order is built against them;
    /// without any, it is built against the ambient connection.
    pub fn parse_order(
        self,
        user_info: &UserInfo,
        connection: Option<&ConnectionConfig>,
    ) -> Result<OrderTransaction> {
        let amount = self
            .amount
            .clone()
            .ok_or_else(|| InputParseError::NoAmount(self.clone()))?;
        let amount = Money::parse(amount)?;

        let tender = match self.tender {
            TenderKind::Paypal => {
                let token = self
                    .token
                    .clone()
                    .ok_or_else(|| InputParseError::NoToken(self.clone()))?;

                Tender::PayPal {
                    token: Some(token),
                    payer_email: None,
                }
            }
            TenderKind::Card => {
                let number = self
                    .acct
                    .clone()
                    .ok_or_else(|| InputParseError::IncompleteCard(self.clone()))?;
                let expiry = self
                    .expdate
                    .clone()
                    .ok_or_else(|| InputParseError::IncompleteCard(self.clone()))?;

                Tender::Card { number, expiry }
            }
        };

        let mut invoice = Invoice::new(amount);
        invoice.invoice_number = self.invoice_number.clone();
        invoice.comment1 = self.comment.clone();

        let request_id = RequestId(self.request_id);

        let order = match connection {
            Some(connection) => OrderTransaction::new(
                user_info.clone(),
                connection.clone(),
                invoice,
                tender,
                request_id,
            ),
            None => OrderTransaction::with_default_connection(
                user_info.clone(),
                invoice,
                tender,
                request_id,
            ),
        };

        Ok(order)
    }
}
