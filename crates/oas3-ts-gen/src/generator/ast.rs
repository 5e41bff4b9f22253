/// Whether a declaration is a top-level alias or a member of an enclosing object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
  /// `type Name = Type;`
  RootAlias,
  /// `name: Type;` or `name?: Type;`
  #[default]
  InlineMember,
}

/// Formatting state threaded through the recursive schema walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatContext {
  /// Object nesting level. Arrays do not open a new level.
  pub depth: usize,
  pub mode: RenderMode,
  pub required: bool,
}

impl FormatContext {
  /// Context for a top-level document entry.
  pub const fn root() -> Self {
    Self {
      depth: 0,
      mode: RenderMode::RootAlias,
      required: true,
    }
  }

  pub const fn member(depth: usize, required: bool) -> Self {
    Self {
      depth,
      mode: RenderMode::InlineMember,
      required,
    }
  }

  /// Context for a property of the object being resolved at `self.depth`.
  pub const fn nested(self, required: bool) -> Self {
    Self::member(self.depth + 1, required)
  }
}

/// A schema node resolved to a name and a TypeScript type expression, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ResolvedType {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  pub type_expr: String,
  #[builder(default)]
  pub optional: bool,
  #[builder(default)]
  pub mode: RenderMode,
}

impl ResolvedType {
  pub const fn is_root_alias(&self) -> bool {
    matches!(self.mode, RenderMode::RootAlias)
  }
}
