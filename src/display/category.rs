//! Category display formatting

use crate::models::{Category, PALETTE};

/// Format the category list as a table
pub fn format_category_list(categories: &[Category], symbol: &str) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<7}  {:>12}  {}\n",
        "Category",
        "Color",
        "Budget",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:-<7}  {:->12}  {:-<8}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        let budget = category
            .budget
            .map(|b| b.format_with_symbol(symbol))
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:<width$}  {:<7}  {:>12}  {}\n",
            category.name,
            category.color,
            budget,
            category.id,
            width = name_width
        ));
    }

    output
}

/// Format the predefined color palette, marking colors already in use
pub fn format_palette(categories: &[Category]) -> String {
    let mut output = String::from("Available colors:\n");
    for color in PALETTE {
        let used_by: Vec<&str> = categories
            .iter()
            .filter(|c| c.color.eq_ignore_ascii_case(color))
            .map(|c| c.name.as_str())
            .collect();
        if used_by.is_empty() {
            output.push_str(&format!("  {}\n", color));
        } else {
            output.push_str(&format!("  {}  (used by {})\n", color, used_by.join(", ")));
        }
    }
    output
}
