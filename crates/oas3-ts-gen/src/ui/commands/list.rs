use std::path::Path;

use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};
use oas3::spec::{ObjectOrReference, ObjectSchema};
use oas3_ts_gen::{
  generator::naming::normalize_type_name,
  utils::{SchemaKind, extract_ref_type_name, spec::SpecLoader},
};

use crate::ui::{Colors, colors::IntoComfyColor, term_width};

#[derive(Debug, Clone, PartialEq, Eq)]
struct SchemaRow {
  name: String,
  kind: String,
  type_name: String,
}

fn schema_rows<'a>(schemas: impl IntoIterator<Item = (&'a String, &'a ObjectOrReference<ObjectSchema>)>) -> Vec<SchemaRow> {
  let mut rows = schemas
    .into_iter()
    .map(|(name, schema)| {
      let kind = match extract_ref_type_name(schema) {
        Some(target) => format!("{} -> {target}", SchemaKind::Reference),
        None => SchemaKind::of(schema).to_string(),
      };
      SchemaRow {
        name: name.clone(),
        kind,
        type_name: normalize_type_name(name),
      }
    })
    .collect::<Vec<_>>();

  rows.sort_by(|a, b| a.name.cmp(&b.name));
  rows
}

pub async fn list_schemas(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let spec = SpecLoader::open(input).await?.parse()?;
  let rows = spec
    .components
    .as_ref()
    .map(|components| schema_rows(&components.schemas))
    .unwrap_or_default();

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("SCHEMA").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("KIND").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("TYPESCRIPT NAME").fg(IntoComfyColor::into(colors.label())));
  table.set_header(header);

  for SchemaRow { name, kind, type_name } in rows {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(kind).fg(IntoComfyColor::into(colors.accent())));
    row.add_cell(Cell::new(type_name).fg(IntoComfyColor::into(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
