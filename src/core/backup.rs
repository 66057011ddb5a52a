use crate::config::Config;
use crate::db::log::record;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info, success, warning};
use crate::utils::path::ensure_parent_dir;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the attendance log to `dest_file`, optionally as a zip archive.
    /// Returns the path of the file actually written, or `None` when cancelled.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.attendance_log);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(io::Error::new(
                ErrorKind::NotFound,
                format!("Attendance log not found: {}", src.display()),
            )
            .into());
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if final_target.exists()
            && !force
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                final_target.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        ensure_parent_dir(&final_target)?;

        if compress {
            compress_into(src, &final_target)?;
        } else {
            fs::copy(src, &final_target)?;
        }
        success(format!("Backup created: {}", final_target.display()));

        record(
            &cfg.database,
            "backup",
            &final_target.to_string_lossy(),
            if compress {
                "Attendance log backed up and compressed"
            } else {
                "Attendance log backed up"
            },
        );

        Ok(Some(final_target))
    }
}

/// Write `src` as the single entry of the zip archive `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = match src.file_name() {
        Some(n) => n.to_string_lossy().to_string(),
        None => {
            warning("Attendance log has no file name, using 'attendance.csv' in the archive.");
            "attendance.csv".to_string()
        }
    };

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
