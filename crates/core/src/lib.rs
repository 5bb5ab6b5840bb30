pub mod purchase;
pub mod store;

pub use purchase::{PurchaseRecord, Unit};
pub use store::Store;
