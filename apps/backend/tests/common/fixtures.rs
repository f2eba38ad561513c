//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// Generate a quiz with `num_fill` fill-in problems followed by
/// `num_select` multiple-choice problems.
pub fn sample_quiz(num_fill: usize, num_select: usize) -> String {
    let fill = (0..num_fill).map(|i| {
        format!(
            "### Question {}?\n\nAnswer {}\n\n解答\n\nBecause {}.\n",
            i + 1,
            i + 1,
            i + 1
        )
    });
    let select = (0..num_select).map(|i| {
        format!(
            "### Choice {}?\n\n1. Alpha\n2. Beta\n3. Gamma\n\n解答\n\nPick {}.\n",
            i + 1,
            i + 1
        )
    });
    fill.chain(select).collect::<Vec<_>>().join("\n")
}

/// Create an import request body.
pub fn import_request(file_name: Option<&str>, content: &str) -> serde_json::Value {
    match file_name {
        Some(name) => json!({ "file_name": name, "content": content }),
        None => json!({ "content": content }),
    }
}
