use super::AuthorizationTransaction;

use crate::ids::RequestId;
use crate::params::ParamList;
use crate::{ConnectionConfig, Invoice, Tender, UserInfo};

const ORDER_TRX_TYPE: &str = "O";

/// An Order transaction: an agreement to pay one or more authorized amounts,
/// up to the specified total, over a maximum of 29 days.
///
/// Orders contribute no behavior of their own. They select a discriminator
/// and forward every constructor argument to the shared request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTransaction {
    request: AuthorizationTransaction,
}

impl OrderTransaction {
    pub fn new(
        user_info: UserInfo,
        connection: ConnectionConfig,
        invoice: Invoice,
        tender: Tender,
        request_id: RequestId,
    ) -> Self {
        Self {
            request: AuthorizationTransaction::with_trx_type(
                ORDER_TRX_TYPE,
                user_info,
                Some(connection),
                invoice,
                tender,
                request_id,
            ),
        }
    }

    /// Builds the order against the ambient connection settings
    pub fn with_default_connection(
        user_info: UserInfo,
        invoice: Invoice,
        tender: Tender,
        request_id: RequestId,
    ) -> Self {
        // Digit zero, not the letter O. Kept as-is for wire compatibility.
        Self {
            request: AuthorizationTransaction::with_trx_type(
                "0",
                user_info,
                None,
                invoice,
                tender,
                request_id,
            ),
        }
    }

    /// The underlying request state
    pub fn request(&self) -> &AuthorizationTransaction {
        &self.request
    }

    pub fn trx_type(&self) -> &str {
        self.request.trx_type()
    }

    pub fn request_id(&self) -> &RequestId {
        self.request.request_id()
    }

    pub fn build_params(&self) -> ParamList {
        return self.request.build_params();
    }
}

#[cfg(test)]
mod tests {
    use crate::Money;

    use super::*;

    fn build_user_info() -> UserInfo {
        UserInfo::new(
            "merchant".to_string(),
            "merchant".to_string(),
            "PayPal".to_string(),
            "hunter2".to_string(),
        )
    }

    fn build_tender() -> Tender {
        Tender::PayPal {
            token: Some("EC-4X123456".to_string()),
            payer_email: None,
        }
    }

    #[test]
    fn explicit_connection_selects_letter_o() {
        let order = OrderTransaction::new(
            build_user_info(),
            ConnectionConfig::default(),
            Invoice::new(Money(2510)),
            build_tender(),
            RequestId("req-001".to_string()),
        );

        assert_eq!(order.trx_type(), "O");
        assert!(order.request().connection().is_some());
    }

    #[test]
    fn default_connection_selects_digit_zero() {
        let order = OrderTransaction::with_default_connection(
            build_user_info(),
            Invoice::new(Money(2510)),
            build_tender(),
            RequestId("req-001".to_string()),
        );

        assert_eq!(order.trx_type(), "0");
        assert_ne!(order.trx_type(), "O");
        assert!(order.request().connection().is_none());
    }

    #[test]
    fn arguments_are_forwarded_unchanged() {
        let user_info = build_user_info();
        let connection = ConnectionConfig::new("gateway.example.com".to_string(), 8443, 10);
        let invoice = Invoice::new(Money(2510));
        let tender = build_tender();
        let request_id = RequestId("req-001".to_string());

        let order = OrderTransaction::new(
            user_info.clone(),
            connection.clone(),
            invoice.clone(),
            tender.clone(),
            request_id.clone(),
        );

        assert_eq!(order.request().user_info(), &user_info);
        assert_eq!(order.request().connection(), Some(&connection));
        assert_eq!(order.request().invoice(), &invoice);
        assert_eq!(order.request().tender(), &tender);
        assert_eq!(order.request_id(), &request_id);
    }

    #[test]
    fn build_params_composes_the_full_request() {
        let mut invoice = Invoice::new(Money(2510));
        invoice.invoice_number = Some("INV-100".to_string());

        let order = OrderTransaction::new(
            build_user_info(),
            ConnectionConfig::default(),
            invoice,
            build_tender(),
            RequestId("req-001".to_string()),
        );

        let params = order.build_params();

        assert_eq!(
            params.to_wire(),
            "TRXTYPE=O&USER=merchant&VENDOR=merchant&PARTNER=PayPal&PWD=hunter2\
             &TENDER=P&TOKEN=EC-4X123456&AMT=25.10&INVNUM=INV-100"
        );
    }

    #[test]
    fn build_params_keeps_the_digit_zero_on_the_wire() {
        let order = OrderTransaction::with_default_connection(
            build_user_info(),
            Invoice::new(Money(2510)),
            build_tender(),
            RequestId("req-001".to_string()),
        );

        let params = order.build_params();

        assert_eq!(params.get("TRXTYPE"), Some("0"));
    }
}
