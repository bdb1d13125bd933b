//! Output formatting for path command results.

use super::execute::PathResult;
use crate::output::Outputable;

impl Outputable for PathResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Path from: {} to: {} ({} hop(s))",
            self.start_id, self.end_id, self.length
        ));
        lines.push(String::new());

        if self.hops.is_empty() {
            lines.push("Single vertex, no hops.".to_string());
            return lines.join("\n");
        }

        for hop in &self.hops {
            let (left, right) = if hop.forward { ("-", "->") } else { ("<-", "-") };
            lines.push(format!(
                "  ({}:{}) {}[{}:{}]{} ({}:{})",
                hop.from_id, hop.from_label, left, hop.edge_id, hop.edge_label, right, hop.to_id, hop.to_label
            ));
        }

        lines.join("\n")
    }
}
