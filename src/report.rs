use std::io::{self, Write};

use crate::solver::SearchResult;

/// Renders the results table: one row per strategy, in the order the
/// results were produced. A missing path renders as `-`; a found path
/// is the space-joined move labels (empty for a solved root).
pub fn render_table(results: &[SearchResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8}{:>16}{:>8}  {}\n",
        "Method", "Nodes Expanded", "Cost", "Path"
    ));
    out.push_str(&"-".repeat(50));
    out.push('\n');
    for result in results {
        let path = match &result.path {
            Some(moves) => moves
                .iter()
                .map(|mv| mv.label())
                .collect::<Vec<_>>()
                .join(" "),
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "{:<8}{:>16}{:>8}  {}\n",
            result.strategy.label(),
            result.nodes_expanded,
            result.cost,
            path
        ));
    }
    out
}

pub fn print_results<W: Write>(sink: &mut W, results: &[SearchResult]) -> io::Result<()> {
    sink.write_all(render_table(results).as_bytes())
}
