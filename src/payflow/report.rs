use crate::transactions::OrderTransaction;

use serde::{Deserialize, Serialize};

/// One composed request, as written to the batch preview report
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestReport {
    pub request_id: String,
    pub trx_type: String,
    pub tender: String,
    pub amount: String,
    pub request: String,
}

impl RequestReport {
    /// The `request` column carries the redacted wire encoding, so reports
    /// stay free of credentials and card data.
    pub fn from_order(order: &OrderTransaction) -> Self {
        let params = order.build_params();

        Self {
            request_id: order.request_id().to_string(),
            trx_type: order.trx_type().to_string(),
            tender: order.request().tender().code().to_string(),
            amount: order.request().invoice().amount.to_string(),
            request: params.to_wire_redacted(),
        }
    }
}
