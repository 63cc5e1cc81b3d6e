use anyhow::{Context, Result, bail};
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use std::path::Path;
use steno_stroke::{Layout, LayoutConfig};

/// Load the layout file, or the English layout when no file is given.
pub fn load_layout(path: Option<&Path>) -> Result<Layout> {
    let config = match path {
        Some(path) => LayoutConfig::load_from_file(path)?,
        None => {
            debug!("No layout file given, using the English layout");
            LayoutConfig::english()
        }
    };
    let layout = config.build().context("Invalid layout")?;
    Ok(layout)
}

pub fn normalize<W: Write>(layout: &Layout, entries: &[String], out: &mut W) -> Result<()> {
    for entry in entries {
        let strokes = layout
            .normalize_steno(entry)
            .with_context(|| format!("Cannot normalize {entry:?}"))?;
        writeln!(out, "{}", strokes.join("/"))?;
    }
    Ok(())
}

pub fn sort_key<W: Write>(layout: &Layout, entries: &[String], out: &mut W) -> Result<()> {
    for entry in entries {
        let key = layout
            .steno_to_sort_key(entry)
            .with_context(|| format!("Cannot compute sort key of {entry:?}"))?;
        let hex: Vec<String> = key.iter().map(|b| format!("{b:02x}")).collect();
        writeln!(out, "{}", hex.join(" "))?;
    }
    Ok(())
}

/// Sort steno entries, one per line, by their sort keys. Blank lines are
/// dropped and equal keys keep their input order. Returns the number of
/// entries written.
pub fn sort<R: BufRead, W: Write>(
    layout: &Layout,
    input: R,
    out: &mut W,
    skip_invalid: bool,
) -> Result<usize> {
    let mut entries: Vec<(Vec<u8>, String)> = Vec::new();
    let mut skipped = 0usize;

    for (n, line) in input.lines().enumerate() {
        let line_no = n + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        match layout.steno_to_sort_key(entry) {
            Ok(key) => entries.push((key, entry.to_string())),
            Err(e) if skip_invalid => {
                warn!("Skipping line {line_no}: {e}");
                skipped += 1;
            }
            Err(e) => bail!("Line {line_no}: {e}"),
        }
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (_, entry) in &entries {
        writeln!(out, "{entry}")?;
    }

    if skipped > 0 {
        info!("Sorted {} entries, skipped {skipped}", entries.len());
    } else {
        debug!("Sorted {} entries", entries.len());
    }
    Ok(entries.len())
}

pub fn print_layout<W: Write>(layout: &Layout, out: &mut W) -> Result<()> {
    writeln!(out, "keys: {}", layout.keys().join(" "))?;
    writeln!(out, "letters: {}", layout.letters())?;
    writeln!(out, "numbers: {}", layout.numbers())?;
    writeln!(out, "right keys index: {}", layout.right_keys_index())?;
    writeln!(out, "implicit hyphen mask: {:#x}", layout.implicit_hyphen_mask())?;
    writeln!(out, "number key mask: {:#x}", layout.number_key_mask())?;
    writeln!(out, "numbers mask: {:#x}", layout.numbers_mask())?;
    Ok(())
}
