pub mod declarations;


pub use declarations::DeclarationRenderer;

pub const STRING_TYPE: &str = "string";
pub const NUMBER_TYPE: &str = "number";
pub const BOOLEAN_TYPE: &str = "boolean";
pub const EMPTY_OBJECT_TYPE: &str = "{}";
/// Type expression used whenever a schema cannot be mapped to anything more specific.
pub const UNKNOWN_TYPE: &str = "unknown";
