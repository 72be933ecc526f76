use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Serializes rows into an open writer. Column headers come from the serde
/// field names of `T`.
pub fn write_csv_to<W: io::Write, T: Serialize>(wtr: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(wtr);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    Ok(())
}

/// Writes rows to a CSV file, creating missing parent directories first.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(path)?;
    write_csv_to(file, rows)
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Row {
        name: String,
        total: i64,
    }

    #[test]
    fn test_write_csv_to() {
        let rows = vec![
            Row {
                name: "a".to_string(),
                total: 1,
            },
            Row {
                name: "b".to_string(),
                total: 2,
            },
        ];

        let mut buf = Vec::new();
        write_csv_to(&mut buf, &rows).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "name,total\na,1\nb,2\n");
    }
}
