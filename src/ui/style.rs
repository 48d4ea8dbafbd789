use console::style;
use std::fmt::Display;

/// White bold: section headings
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: rules, counts, secondary text
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Green: locations, paths
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold: bullets, prompt markers
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Print a headed block: title, rule, body.
pub fn print_section(title: &str, body: &str) {
    println!();
    println!("{}", header(title));
    println!("{}", dim("─".repeat(50)));
    println!("{body}");
}
