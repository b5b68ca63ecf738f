use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use clap::ValueEnum;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ArchiveFormat {
    Zip,
    Tgz,
}

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the sheet to `dest_file`, or archive it there when `compress` is
    /// set. Returns the path of the final backup file.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: Option<ArchiveFormat>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.sheet);
        let dest = Path::new(dest_file);

        // 1️⃣ Check sheet exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Sheet not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Resolve the file actually written
        let final_path = match compress {
            Some(format) => archive_path(dest, format),
            None => dest.to_path_buf(),
        };

        if let Some(parent) = final_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        ensure_writable(&final_path, force)?;

        // 3️⃣ Copy or archive straight from the sheet
        match compress {
            None => {
                fs::copy(src, &final_path)?;
            }
            Some(format) => {
                // the archive entry keeps the requested name, unless that
                // name is the archive itself
                let entry = if final_path == dest {
                    entry_name(src)
                } else {
                    entry_name(dest)
                };
                match format {
                    ArchiveFormat::Zip => compress_zip(src, &final_path, &entry)?,
                    ArchiveFormat::Tgz => compress_tgz(src, &final_path, &entry)?,
                }
            }
        }

        success(format!("Backup created: {}", final_path.display()));

        // 4️⃣ Audit
        audit(
            &cfg.database,
            "backup",
            &final_path.to_string_lossy(),
            if compress.is_some() {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// `dest` when it already carries the archive extension, otherwise `dest`
/// with the extension swapped.
fn archive_path(dest: &Path, format: ArchiveFormat) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match format {
        ArchiveFormat::Zip if name.ends_with(".zip") => dest.to_path_buf(),
        ArchiveFormat::Zip => dest.with_extension("zip"),
        ArchiveFormat::Tgz if name.ends_with(".tar.gz") || name.ends_with(".tgz") => {
            dest.to_path_buf()
        }
        ArchiveFormat::Tgz => dest.with_extension("tar.gz"),
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "sheet.csv".to_string())
}

/// Write `src` into a new .zip archive at `archive`
fn compress_zip(src: &Path, archive: &Path, entry: &str) -> AppResult<()> {
    let file = fs::File::create(archive)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    zip.start_file(entry, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}

/// Write `src` into a new .tar.gz archive at `archive`
fn compress_tgz(src: &Path, archive: &Path, entry: &str) -> AppResult<()> {
    let file = fs::File::create(archive)?;
    let enc = GzEncoder::new(file, Compression::default());

    let mut tar = tar::Builder::new(enc);
    tar.append_path_with_name(src, entry)?;
    tar.into_inner()?.finish()?;

    Ok(())
}
