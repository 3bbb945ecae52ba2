//! Printers for headless mode: colored text, numbered code and markdown (termimad).

use owo_colors::OwoColorize;
use termimad::MadSkin;

pub struct TextPrinter {
    pub color: Option<&'static str>,
}

impl TextPrinter {
    pub fn print(&self, text: &str) {
        if let Some(c) = self.color {
            match c {
                "green" => println!("{}", text.green()),
                "red" => println!("{}", text.red()),
                "cyan" => println!("{}", text.cyan()),
                "yellow" => println!("{}", text.yellow()),
                _ => println!("{}", text),
            }
        } else {
            println!("{}", text);
        }
    }
}

/// Prefix every line with a right-aligned line number.
pub fn number_lines(text: &str) -> String {
    let count = text.lines().count().max(1);
    let width = count.to_string().len();
    text.lines()
        .enumerate()
        .map(|(i, line)| format!("{:>width$} │ {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a titled block of numbered lines.
pub fn print_numbered(title: &str, text: &str, color: Option<&'static str>) {
    TextPrinter { color }.print(&format!("── {title} ──"));
    println!("{}", number_lines(text).dimmed());
    println!();
}

pub struct MarkdownPrinter {
    pub skin: MadSkin,
}

impl Default for MarkdownPrinter {
    fn default() -> Self {
        Self { skin: MadSkin::default() }
    }
}

impl MarkdownPrinter {
    pub fn print(&self, text: &str) { self.skin.print_text(text); println!(); }
}
