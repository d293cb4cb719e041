mod authorization;
mod order;

pub use authorization::AuthorizationTransaction;
pub use order::OrderTransaction;
