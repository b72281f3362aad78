// File: src/persistence.rs
use crate::error::LocaleError;
use crate::locale::LocaleTables;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Writes a bincode snapshot of the tables. The file is replaced atomically:
/// a reader never sees a half-written snapshot.
pub fn save_tables(tables: &LocaleTables, path: &Path) -> Result<(), LocaleError> {
    let temp_file = create_temp_beside(path)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, tables)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), locale = %tables.name, "saved locale snapshot");
    Ok(())
}

pub fn load_tables(path: &Path) -> Result<LocaleTables, LocaleError> {
    let reader = BufReader::new(File::open(path)?);
    let tables: LocaleTables = bincode::deserialize_from(reader)?;
    Ok(tables)
}

/// Same as [`save_tables`] but human-editable.
pub fn save_tables_json(tables: &LocaleTables, path: &Path) -> Result<(), LocaleError> {
    let temp_file = create_temp_beside(path)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, tables)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), locale = %tables.name, "saved locale json");
    Ok(())
}

pub fn load_tables_json(path: &Path) -> Result<LocaleTables, LocaleError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Picks the loader by extension: `.json` is JSON, anything else a snapshot.
pub fn load_tables_auto(path: &Path) -> Result<LocaleTables, LocaleError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_tables_json(path),
        _ => load_tables(path),
    }
}

fn create_temp_beside(path: &Path) -> Result<NamedTempFile, LocaleError> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;
    Ok(NamedTempFile::new_in(parent_dir)?)
}
