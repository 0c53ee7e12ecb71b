//! Equipment grouping and the generated `equipment` JS object

use crate::lookups::SlotGroup;
use crate::merger::ResolvedProperties;
use crate::normalizer::ItemRow;
use crate::table::CellValue;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Accepted items bucketed by slot, in slot order
#[derive(Debug, Clone, Default)]
pub struct EquipmentGroups {
    groups: BTreeMap<SlotGroup, Vec<ItemRow>>,
}

impl EquipmentGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ItemRow) {
        self.groups.entry(item.slot).or_default().push(item);
    }

    /// Sort every bucket case-insensitively by name; ties keep table order
    pub fn sort(&mut self) {
        for items in self.groups.values_mut() {
            items.sort_by_cached_key(|item| item.name.to_lowercase());
        }
    }

    pub fn get(&self, slot: SlotGroup) -> &[ItemRow] {
        self.groups.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of non-empty groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Items per group key
    pub fn counts(&self) -> BTreeMap<String, usize> {
        self.groups
            .iter()
            .map(|(slot, items)| (slot.key(), items.len()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotGroup, &[ItemRow])> {
        self.groups.iter().map(|(slot, items)| (*slot, items.as_slice()))
    }

    /// Render `var equipment = {...};`. Each group starts with a
    /// `{"name": <title>}` header row; `footer` is spliced in after the last
    /// group with leading commas and newlines and trailing whitespace trimmed,
    /// so the separator and closing brace are always written here.
    pub fn render_js(&self, footer: Option<&str>) -> String {
        let mut blocks: Vec<String> = self
            .groups
            .iter()
            .map(|(slot, items)| render_group(*slot, items))
            .collect();

        if let Some(footer) = footer.map(str::trim_end).filter(|f| !f.trim().is_empty()) {
            blocks.push(footer.trim_start_matches(',').trim_start_matches('\n').to_string());
        }

        let mut out = String::from("var equipment = {\n");
        if !blocks.is_empty() {
            out.push_str(&blocks.join(",\n"));
            out.push('\n');
        }
        out.push_str("};\n");
        out
    }
}

fn render_group(slot: SlotGroup, items: &[ItemRow]) -> String {
    let mut header = ResolvedProperties::new();
    header.insert("name", slot.title());

    let rows: Vec<String> = std::iter::once(header)
        .chain(items.iter().map(ItemRow::fields))
        .map(|fields| format!("    {}", render_object(&fields)))
        .collect();

    format!("  \"{}\": [\n{}\n  ]", escape_js_string(&slot.key()), rows.join(",\n"))
}

/// `{"k": v, ...}` on one line
pub fn render_object(fields: &ResolvedProperties) -> String {
    let entries: Vec<String> = fields
        .iter()
        .map(|(key, value)| format!("\"{}\": {}", escape_js_string(key), render_value(value)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// Numbers bare, everything else as a quoted string
pub fn render_value(value: &CellValue) -> String {
    match value {
        CellValue::Integer(i) => i.to_string(),
        CellValue::Float(f) if f.is_finite() => f.to_string(),
        other => format!("\"{}\"", escape_js_string(&other.to_string_value())),
    }
}

pub fn escape_js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, slot: SlotGroup) -> ItemRow {
        let mut properties = ResolvedProperties::new();
        properties.insert("fRes", 10i64);
        ItemRow {
            name: name.to_string(),
            base: None,
            req_level: CellValue::Integer(5),
            only: None,
            two_handed: false,
            boss_item: None,
            item_type: slot.title().to_lowercase(),
            subtype: None,
            set: None,
            slot,
            properties,
            img: name.replace(' ', "_"),
        }
    }

    #[test]
    fn test_escape_js_string() {
        assert_eq!(escape_js_string("a\"b"), "a\\\"b");
        assert_eq!(escape_js_string("back\\slash"), "back\\\\slash");
        assert_eq!(escape_js_string("tab\there\n"), "tab\\there\\n");
        assert_eq!(escape_js_string("\u{01}"), "\\u0001");
        assert_eq!(escape_js_string("Lilith's"), "Lilith's");
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&CellValue::Integer(-3)), "-3");
        assert_eq!(render_value(&CellValue::Float(2.5)), "2.5");
        assert_eq!(render_value(&CellValue::Float(f64::NAN)), "\"NaN\"");
        assert_eq!(render_value(&CellValue::from("amazon")), "\"amazon\"");
        assert_eq!(render_value(&CellValue::Empty), "\"\"");
    }

    #[test]
    fn test_groups_sorted_case_insensitively() {
        let mut groups = EquipmentGroups::new();
        groups.push(item("zephyr", SlotGroup::Ring1));
        groups.push(item("Bul-Kathos' Wedding Band", SlotGroup::Ring1));
        groups.push(item("nagelring", SlotGroup::Ring1));
        groups.sort();

        let names: Vec<&str> = groups.get(SlotGroup::Ring1).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bul-Kathos' Wedding Band", "nagelring", "zephyr"]);
        assert!(groups.get(SlotGroup::Helm).is_empty());
    }

    #[test]
    fn test_render_js_layout() {
        let mut groups = EquipmentGroups::new();
        groups.push(item("Nagelring", SlotGroup::Ring1));
        groups.push(item("Peasant Crown", SlotGroup::Helm));

        let js = groups.render_js(None);
        let expected = [
            "var equipment = {",
            "  \"helm\": [",
            "    {\"name\": \"Helm\"},",
            "    {\"name\": \"Peasant Crown\", \"req_level\": 5, \"type\": \"helm\", \"fRes\": 10, \"img\": \"Peasant_Crown\"}",
            "  ],",
            "  \"ring1\": [",
            "    {\"name\": \"Ring\"},",
            "    {\"name\": \"Nagelring\", \"req_level\": 5, \"type\": \"ring\", \"fRes\": 10, \"img\": \"Nagelring\"}",
            "  ]",
            "};",
            "",
        ]
        .join("\n");
        assert_eq!(js, expected);
    }

    #[test]
    fn test_footer_spliced_before_closing_brace() {
        let mut groups = EquipmentGroups::new();
        groups.push(item("Nagelring", SlotGroup::Ring1));

        let js = groups.render_js(Some("  \"ring2\": [\n    {\"name\": \"Ring\"}\n  ]\n"));
        assert!(js.ends_with("  ],\n  \"ring2\": [\n    {\"name\": \"Ring\"}\n  ]\n};\n"));
    }

    #[test]
    fn test_footer_separator_not_doubled() {
        let mut groups = EquipmentGroups::new();
        groups.push(item("Nagelring", SlotGroup::Ring1));

        let js = groups.render_js(Some(",\n  \"charms\": []\n\n"));
        assert!(js.ends_with("  ],\n  \"charms\": []\n};\n"));
    }

    #[test]
    fn test_empty_groups() {
        let groups = EquipmentGroups::new();
        assert_eq!(groups.render_js(None), "var equipment = {\n};\n");
    }
}
