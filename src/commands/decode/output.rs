//! Output formatting for decode command results.

use super::execute::DecodeResult;
use crate::output::Outputable;
use crate::value::Value;

impl Outputable for DecodeResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Decoded as: {} ({})", self.target, self.type_name));
        lines.push(String::new());

        match &self.value {
            Value::List(items) if !items.is_empty() => {
                lines.push(format!("{} element(s):", items.len()));
                for (i, item) in items.iter().enumerate() {
                    lines.push(format!("  [{}] {}: {}", i, item.type_name(), item));
                }
            }
            Value::Vertex(v) => {
                lines.push(format!("Vertex {} :{}", v.id, v.label));
                push_properties(&mut lines, &v.properties);
            }
            Value::Edge(e) => {
                lines.push(format!("Edge {} :{} ({} -> {})", e.id, e.label, e.start_id, e.end_id));
                push_properties(&mut lines, &e.properties);
            }
            _ => lines.push(self.rendered.clone()),
        }

        lines.join("\n")
    }
}

fn push_properties(lines: &mut Vec<String>, properties: &crate::value::Properties) {
    if properties.is_empty() {
        lines.push("  (no properties)".to_string());
    }
    for (key, value) in properties {
        lines.push(format!("  {}: {}", key, value));
    }
}
