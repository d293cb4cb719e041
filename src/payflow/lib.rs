pub mod ids;
pub mod input;
pub mod params;
pub mod transactions;

mod connection;
mod invoice;
mod money;
mod report;
mod result;
mod tender;
mod user_info;

pub use connection::{ConnectionConfig, DEFAULT_HOST};
pub use invoice::Invoice;
pub use money::Money;
pub use report::RequestReport;
pub use result::Result;
pub use tender::Tender;
pub use user_info::UserInfo;
