use crate::config::Config;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the registry spreadsheet to `dest_file`, optionally zipped.
    /// `force` skips the overwrite confirmation.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = expand_tilde(&cfg.registry);
        let dest = expand_tilde(dest_file);

        // 1️⃣ Check registry exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Registry not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Ask before overwriting
        if dest.exists() && !force {
            warning(format!("The file '{}' already exists.", dest.display()));
            if !confirm(&mut stdin().lock(), &mut stdout(), "Overwrite?")? {
                return Err(AppError::Cancelled("backup not overwritten".into()));
            }
        }

        // 4️⃣ Copy registry
        fs::copy(&src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(&dest)?;
            if compressed == dest {
                warning("Backup file already has a .zip extension; kept as is.");
            } else if let Err(e) = fs::remove_file(&dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            } else {
                info(format!("Removed uncompressed backup: {}", dest.display()));
            }
            compressed
        } else {
            dest
        };

        // 6️⃣ Audit
        match DbPool::new(&cfg.audit_db) {
            Ok(pool) => audit_or_warn(
                &pool.conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Registry backup created and compressed"
                } else {
                    "Registry backup created"
                },
            ),
            Err(e) => warning(format!("Audit log unavailable: {}", e)),
        }

        Ok(final_path)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(entry, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
