use std::fmt;

/// Caller-supplied idempotency key. Resubmitting with the same key returns the
/// original response instead of creating a duplicate transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
