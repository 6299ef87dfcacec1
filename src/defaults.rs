//! Codec for the persisted default-values string.
//!
//! The host stores default field values as one flat delimited string, e.g.
//! `Name:Acme,StageName:recordVar.StageName`. Values are opaque: either a
//! literal or a variable reference path, distinguished elsewhere.

use indexmap::IndexMap;

/// Parse a default-values string into an ordered field → value map.
///
/// Segments split on `,` or `;`; each segment splits on its first `:` with
/// both sides trimmed. Segments missing either side are dropped rather than
/// reported. A repeated field keeps its first position but takes the last
/// value.
pub fn decode(raw: &str) -> IndexMap<String, String> {
    let mut values = IndexMap::new();
    for segment in raw.split([',', ';']) {
        let Some((field, value)) = segment.split_once(':') else {
            continue;
        };
        let field = field.trim();
        let value = value.trim();
        if field.is_empty() || value.is_empty() {
            continue;
        }
        values.insert(field.to_string(), value.to_string());
    }
    values
}

/// Format a field → value map back into the persisted string. Entries with
/// empty values are omitted; surviving entries keep map iteration order.
pub fn encode(values: &IndexMap<String, String>) -> String {
    let pairs: Vec<String> = values
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(field, value)| format!("{field}:{value}"))
        .collect();
    pairs.join(",")
}

/// True when `field` cannot survive a round trip through the delimited
/// string representation.
pub fn field_name_conflicts_with_delimiters(field: &str) -> bool {
    field.contains([',', ';', ':'])
}
