pub mod reporter;
pub mod summary;

pub use reporter::ConsoleReporter;
pub use summary::{print_banner, print_plan, print_summary};

use colored::{ColoredString, Colorize};

/// Semantic color of a report line, mapped to ANSI styles only at print time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Bold,
    Pass,
    Fail,
    Warn,
    Info,
}

pub fn paint(tone: Tone, text: &str) -> ColoredString {
    match tone {
        Tone::Plain => text.normal(),
        Tone::Bold => text.bold(),
        Tone::Pass => text.green(),
        Tone::Fail => text.red(),
        Tone::Warn => text.yellow(),
        Tone::Info => text.cyan(),
    }
}

pub fn print_header(title: &str) {
    let rule = "=".repeat(60);
    println!();
    println!("{}", rule.cyan().bold());
    println!("{}", format!("{title:^60}").cyan().bold());
    println!("{}", rule.cyan().bold());
}

pub fn print_step(step: &str) {
    println!();
    println!("{}", format!("🔍 {step}").blue());
}
