pub mod json_infer;
pub mod namespace;
pub mod operations;
pub mod primitive;
pub mod structure;
pub mod type_resolver;

pub use json_infer::infer;
pub use namespace::extract_namespace;
pub use operations::{auto_select_action, extract_actions, list_operations, operation_info};
pub use primitive::map_primitive;
pub use structure::{extract_structure, extract_structure_with_options};
pub use type_resolver::TypeResolver;
