pub mod operations;
pub mod types;

pub use operations::{MessageKind, NamespaceInfo, OperationAction, OperationInfo};
pub use types::{CanonicalType, PrimitiveKind, Structure};
