use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

const MMAP_THRESHOLD: u64 = 1024 * 1024; // 1 MiB

#[derive(Debug)]
pub enum FileContent {
    Mapped(Mmap),
    Buffered(String),
}

impl AsRef<str> for FileContent {
    fn as_ref(&self) -> &str {
        match self {
            // Fragments and manifests are expected to be valid UTF-8;
            // anything else reads as empty rather than panicking
            FileContent::Mapped(mmap) => std::str::from_utf8(mmap).unwrap_or(""),
            FileContent::Buffered(s) => s.as_str(),
        }
    }
}

/// Read a file, memory-mapping it past the size threshold.
pub fn read_file_smart<P: AsRef<Path>>(path: P) -> Result<FileContent> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

    if metadata.len() > MMAP_THRESHOLD {
        let file =
            File::open(path).with_context(|| format!("Failed to open file {}", path.display()))?;

        // Safety: the mapping is read-only and lives only for one merge pass
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to memory-map {}", path.display()))?;

        Ok(FileContent::Mapped(mmap))
    } else {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;

        Ok(FileContent::Buffered(content))
    }
}

/// Create or overwrite `path` with `text`.
pub fn write_file<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_files_round_trip_through_buffered_reads() {
        let path = std::env::temp_dir().join("voltron_io_roundtrip.txt");
        write_file(&path, "struct A {};\n").unwrap();

        let content = read_file_smart(&path).unwrap();
        assert_eq!(content.as_ref(), "struct A {};\n");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = read_file_smart("no/such/fragment.h").unwrap_err();
        assert!(err.to_string().contains("no/such/fragment.h"));
    }
}
