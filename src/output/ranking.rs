//! Ranked word list output

use crate::commands::RankedWord;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write ranked words one per line, in the order given
///
/// Rankings come out of the simulation lowest mean first, so the file starts with the
/// strongest word.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_ranking<P: AsRef<Path>>(path: P, ranked: &[RankedWord]) -> io::Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_lines(&mut writer, ranked)?;
    writer.flush()?;
    info!("wrote {} ranked words to {}", ranked.len(), path.display());
    Ok(())
}

fn write_lines<W: Write>(writer: &mut W, ranked: &[RankedWord]) -> io::Result<()> {
    for entry in ranked {
        writeln!(writer, "{}", entry.word)?;
    }
    Ok(())
}
