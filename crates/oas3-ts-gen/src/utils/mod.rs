pub mod refs;
pub mod schema_ext;
pub mod spec;

pub use refs::{extract_ref_type_name, ref_type_name};
pub use schema_ext::{SchemaExt, SchemaKind};
