use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use steno_stroke::Layout;

pub const INSPECT_HEADER: [&str; 6] = ["Steno", "Keys", "Mask", "Length", "HasDigit", "IsNumber"];

/// Write one CSV row per stroke. Strokes are single-stroke steno and are
/// written in canonical form.
pub fn write_inspect_csv<W: Write>(layout: &Layout, strokes: &[String], writer: W) -> Result<()> {
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }

    let mut wtr = builder.from_writer(writer);
    wtr.write_record(INSPECT_HEADER)?;

    for steno in strokes {
        let stroke = layout
            .from_steno(steno)
            .with_context(|| format!("Cannot inspect {steno:?}"))?;
        let canonical = layout.to_steno(stroke);
        let keys = layout.to_key_labels(stroke).join(" ");
        let mask = format!("{:#x}", stroke.mask());
        let length = stroke.len().to_string();
        let has_digit = layout.has_digit(stroke).to_string();
        let is_number = layout.is_number(stroke).to_string();
        wtr.write_record([
            canonical.as_str(),
            keys.as_str(),
            mask.as_str(),
            length.as_str(),
            has_digit.as_str(),
            is_number.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn export_inspect_to_path(layout: &Layout, strokes: &[String], path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;
    write_inspect_csv(layout, strokes, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use steno_stroke::LayoutConfig;
    use tempfile::TempDir;

    fn english() -> Layout {
        LayoutConfig::english().build().unwrap()
    }

    fn inspect(strokes: &[&str]) -> Result<String> {
        let strokes: Vec<String> = strokes.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        write_inspect_csv(&english(), &strokes, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_inspect_rows() {
        let content = inspect(&["#STO-P", "AO-E"]).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Steno,Keys,Mask,Length,HasDigit,IsNumber");
        assert_eq!(lines[1], "1207,# S- T- O- -P,0x8207,5,true,true");
        assert_eq!(lines[2], "AOE,A- O- -E,0xb00,3,false,false");
    }

    #[test]
    fn test_inspect_empty_stroke() {
        let content = inspect(&[""]).unwrap();
        assert_eq!(content.lines().nth(1), Some(",,0x0,0,false,false"));
    }

    #[test]
    fn test_inspect_invalid_stroke() {
        let err = inspect(&["ST", "ZS"]).unwrap_err();
        assert!(err.to_string().contains("ZS"), "Unexpected error: {err}");
    }

    #[test]
    fn test_export_to_nested_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("strokes.csv");
        let strokes = vec!["-Z".to_string()];

        export_inspect_to_path(&english(), &strokes, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "-Z,-Z,0x400000,1,false,false");
    }
}
