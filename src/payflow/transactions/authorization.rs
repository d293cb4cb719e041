use crate::ids::RequestId;
use crate::params::ParamList;
use crate::{ConnectionConfig, Invoice, Tender, UserInfo};

const AUTH_TRX_TYPE: &str = "A";

/// Shared request state for authorization-style transactions.
///
/// Holds the transaction-type discriminator together with the data objects
/// every request is composed from. The discriminator is fixed at construction
/// and never changes afterward. Specialized transaction types select their own
/// discriminator and delegate everything else here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationTransaction {
    trx_type: String,
    user_info: UserInfo,
    connection: Option<ConnectionConfig>,
    invoice: Invoice,
    tender: Tender,
    request_id: RequestId,
}

impl AuthorizationTransaction {
    pub fn new(
        user_info: UserInfo,
        connection: ConnectionConfig,
        invoice: Invoice,
        tender: Tender,
        request_id: RequestId,
    ) -> Self {
        Self::with_trx_type(
            AUTH_TRX_TYPE,
            user_info,
            Some(connection),
            invoice,
            tender,
            request_id,
        )
    }

    /// Builds the request against the ambient connection settings
    pub fn with_default_connection(
        user_info: UserInfo,
        invoice: Invoice,
        tender: Tender,
        request_id: RequestId,
    ) -> Self {
        Self::with_trx_type(AUTH_TRX_TYPE, user_info, None, invoice, tender, request_id)
    }

    pub(crate) fn with_trx_type(
        trx_type: &str,
        user_info: UserInfo,
        connection: Option<ConnectionConfig>,
        invoice: Invoice,
        tender: Tender,
        request_id: RequestId,
    ) -> Self {
        Self {
            trx_type: trx_type.to_string(),
            user_info,
            connection,
            invoice,
            tender,
            request_id,
        }
    }

    pub fn trx_type(&self) -> &str {
        &self.trx_type
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    /// Explicit connection settings, if any were supplied at construction
    pub fn connection(&self) -> Option<&ConnectionConfig> {
        self.connection.as_ref()
    }

    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    pub fn tender(&self) -> &Tender {
        &self.tender
    }

    /// The idempotency key. Not a request field; it travels with the
    /// submission itself, so it is exposed here for the transport to pick up.
    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Composes the request fields in wire order
    pub fn build_params(&self) -> ParamList {
        let mut params = ParamList::new();

        params.push("TRXTYPE", &self.trx_type);
        self.user_info.append_params(&mut params);
        self.tender.append_params(&mut params);
        self.invoice.append_params(&mut params);

        log::debug!(
            "Composed {} request fields for request {}",
            params.len(),
            self.request_id
        );

        return params;
    }
}
