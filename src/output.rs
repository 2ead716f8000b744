//! Output formatting for query results.

use crate::query::SearchResults;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print query result rows followed by the summary line.
///
/// Anchor-level rows print as `file: anchor`, page-level rows as
/// `file: title`. The summary reports how many rows were shown and the full
/// distinct match count.
pub fn print_results(results: &SearchResults, color: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);

    for row in &results.rows {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(stdout, "{}", row.file)?;
        stdout.reset()?;
        match &row.anchor {
            Some(anchor) => writeln!(stdout, ": {}", anchor)?,
            None => writeln!(stdout, ": {}", row.title)?,
        }
    }

    writeln!(stdout)?;
    write!(stdout, "results=")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "{}", results.shown())?;
    stdout.reset()?;
    write!(stdout, " shown / total=")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "{}", results.total)?;
    stdout.reset()?;
    writeln!(stdout)?;

    Ok(())
}
