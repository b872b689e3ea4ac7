//! Basic usage of the renga parser base

use renga_api::{
    parse_lines, Config, Context, ContinuationMode, ContinuationRules, ExtractError, Extractor,
    Parser,
};
use std::io::Cursor;

/// A tiny key=value format where a trailing backslash continues the value
/// on the next line, and a `stop` directive ends the read early.
struct KeyValueExtractor;

impl ContinuationRules for KeyValueExtractor {
    fn is_continued(&self, line: &str) -> bool {
        line.ends_with('\\')
    }

    fn join(&self, previous: &str, current: &str) -> String {
        format!(
            "{} {}",
            previous.trim_end_matches('\\').trim_end(),
            current.trim_start()
        )
    }
}

impl Extractor for KeyValueExtractor {
    type Record = (String, String);

    fn extract(
        &mut self,
        line: &str,
        ctx: &mut Context<'_, (String, String)>,
    ) -> Result<(), ExtractError> {
        if line == "stop" {
            ctx.abort();
            return Ok(());
        }
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| ExtractError::new(format!("missing '=' in '{line}'")))?;
        ctx.save_record((key.trim().to_string(), value.trim().to_string()));
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: collect chomped lines with the default strategy
    println!("=== Method 1: Line Collection ===");
    let mut source = Cursor::new("first line\nsecond line\n");
    for line in parse_lines(&mut source)? {
        println!("  {line}");
    }

    // Method 2: a format-specific extractor with continuation handling
    println!("\n=== Method 2: Key/Value with Continuations ===");
    let config = Config::builder()
        .auto_chomp(true)
        .multiline(ContinuationMode::JoinNext)
        .build()?;
    let mut parser = Parser::with_extractor(config, KeyValueExtractor);

    let input = "\
greeting = hello \\
world
answer = 42
stop
ignored = never read
";
    let mut source = Cursor::new(input);
    parser.read(&mut source)?;

    for (key, value) in parser.records() {
        println!("  {key} => {value}");
    }
    println!(
        "  ({} physical lines consumed, aborted: {})",
        parser.lines_parsed(),
        parser.aborted()
    );

    Ok(())
}
