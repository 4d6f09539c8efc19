//! Archive header iteration
//!
//! Thin glue between the container crates and the tree core. Only entry
//! headers are consumed: paths, sizes, and directory flags. Entry contents
//! are never decompressed or read.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::tree::TreeNode;

/// Container formats husk can iterate, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Tar,
    TarGz,
    Zip,
}

impl ArchiveFormat {
    /// Detect the container format from the file name. Returns `None` for
    /// unrecognized extensions.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(ArchiveFormat::TarGz)
        } else if name.ends_with(".tar") {
            Some(ArchiveFormat::Tar)
        } else if name.ends_with(".zip") {
            Some(ArchiveFormat::Zip)
        } else {
            None
        }
    }
}

/// One header-level record: the path as stored in the archive, the entry's
/// byte size, and whether it describes a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub path: String,
    pub size: u64,
    pub is_dir: bool,
}

/// Read all entry headers from the archive at `path`.
pub fn read_entries(path: &Path) -> io::Result<Vec<EntryRecord>> {
    let format = ArchiveFormat::detect(path).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unrecognized archive format: {}", path.display()),
        )
    })?;

    let file = File::open(path)?;
    match format {
        ArchiveFormat::Tar => read_tar_entries(file),
        ArchiveFormat::TarGz => read_tar_entries(GzDecoder::new(file)),
        ArchiveFormat::Zip => read_zip_entries(file),
    }
}

/// Open the archive at `path`, iterate its headers, and materialize the
/// entry tree. The returned root is ready for encoding.
pub fn scan_archive(path: &Path) -> io::Result<TreeNode> {
    let mut root = TreeNode::root();
    for record in read_entries(path)? {
        root.insert(&record.path, record.size, record.is_dir);
    }
    Ok(root)
}

fn read_tar_entries<R: Read>(reader: R) -> io::Result<Vec<EntryRecord>> {
    let mut archive = tar::Archive::new(reader);
    let mut records = Vec::new();
    for entry in archive.entries()? {
        let entry = entry?;
        // Lossy conversion keeps unusual bytes representable; the tree
        // core accepts any path string
        let path = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        let is_dir = entry.header().entry_type().is_dir() || path.ends_with('/');
        records.push(EntryRecord {
            path,
            size: entry.size(),
            is_dir,
        });
    }
    Ok(records)
}

fn read_zip_entries(file: File) -> io::Result<Vec<EntryRecord>> {
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut records = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        // by_index_raw: headers only, no decompression setup
        let entry = archive
            .by_index_raw(index)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let path = entry.name().to_string();
        let is_dir = entry.is_dir();
        records.push(EntryRecord {
            path,
            size: entry.size(),
            is_dir,
        });
    }
    Ok(records)
}
