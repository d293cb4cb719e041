use crate::params::ParamList;
use crate::Money;

/// Invoice details for a single transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub amount: Money,
    pub currency: Option<String>,
    pub invoice_number: Option<String>,
    pub purchase_order_number: Option<String>,
    pub comment1: Option<String>,
    pub comment2: Option<String>,
}

impl Invoice {
    pub fn new(amount: Money) -> Self {
        Self {
            amount,
            currency: None,
            invoice_number: None,
            purchase_order_number: None,
            comment1: None,
            comment2: None,
        }
    }

    pub fn append_params(&self, params: &mut ParamList) {
        params.push("AMT", &self.amount.to_string());
        params.push_opt("CURRENCY", self.currency.as_deref());
        params.push_opt("INVNUM", self.invoice_number.as_deref());
        params.push_opt("PONUM", self.purchase_order_number.as_deref());
        params.push_opt("COMMENT1", self.comment1.as_deref());
        params.push_opt("COMMENT2", self.comment2.as_deref());
    }
}
