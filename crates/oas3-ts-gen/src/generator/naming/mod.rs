pub mod identifiers;

#[cfg(test)]
mod tests;

pub use identifiers::normalize_type_name;
