use crate::params::ParamList;

/// The payment instrument funding a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tender {
    /// PayPal account, referenced by checkout token and/or payer email
    PayPal {
        token: Option<String>,
        payer_email: Option<String>,
    },

    /// Card number with an MMYY expiry
    Card { number: String, expiry: String },
}

impl Tender {
    /// Wire code sent in the TENDER field
    pub fn code(&self) -> &'static str {
        match self {
            Self::PayPal { .. } => "P",
            Self::Card { .. } => "C",
        }
    }

    pub fn append_params(&self, params: &mut ParamList) {
        params.push("TENDER", self.code());

        match self {
            Self::PayPal { token, payer_email } => {
                params.push_opt("TOKEN", token.as_deref());
                params.push_opt("EMAIL", payer_email.as_deref());
            }
            Self::Card { number, expiry } => {
                params.push("ACCT", number);
                params.push("EXPDATE", expiry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paypal_params() {
        let tender = Tender::PayPal {
            token: Some("EC-4X123456".to_string()),
            payer_email: None,
        };

        let mut params = ParamList::new();
        tender.append_params(&mut params);

        assert_eq!(tender.code(), "P");
        assert_eq!(params.to_wire(), "TENDER=P&TOKEN=EC-4X123456");
    }

    #[test]
    fn card_params() {
        let tender = Tender::Card {
            number: "4111111111111111".to_string(),
            expiry: "1227".to_string(),
        };

        let mut params = ParamList::new();
        tender.append_params(&mut params);

        assert_eq!(tender.code(), "C");
        assert_eq!(params.to_wire(), "TENDER=C&ACCT=4111111111111111&EXPDATE=1227");
        assert_eq!(params.to_wire_redacted(), "TENDER=C&ACCT=****&EXPDATE=****");
    }
}
