//! Transaction descriptors, batches and the operation type

mod operation;
mod transaction;

pub use operation::Operation;
pub use transaction::{TransactionBatch, TransactionDescriptor, TransactionInput, TransactionRecord};
