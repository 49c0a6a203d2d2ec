/**
 * Artwork Store
 *
 * Uploaded artworks live as plain files in `<STATIC_ROOT>/artworks` and are
 * served by the static file service under `/static/artworks/`.
 */
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs;

/// Largest accepted upload
pub const MAX_ARTWORK_BYTES: usize = 5 * 1024 * 1024;

/// File extensions shown in the gallery (compared lowercase)
pub const GALLERY_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// URL prefix the artworks directory is served under
pub const PUBLIC_PREFIX: &str = "/static/artworks";

/// One gallery entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub filename: String,
    pub url: String,
    /// File modification time
    pub uploaded_at: DateTime<Utc>,
    pub size: u64,
}

/// Whether `bytes` starts with the PNG file signature
pub fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(&PNG_SIGNATURE)
}

/// Reduce a client-supplied file name to a safe stem.
///
/// Directory components and a trailing `.png` are dropped; every character
/// outside `[A-Za-z0-9._-]` becomes `_`.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let stem = match base.len().checked_sub(4) {
        Some(cut) if base.is_char_boundary(cut) && base[cut..].eq_ignore_ascii_case(".png") => {
            &base[..cut]
        }
        _ => base,
    };
    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        "artwork".to_string()
    } else {
        cleaned
    }
}

fn has_gallery_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            GALLERY_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Directory-backed artwork storage
#[derive(Debug, Clone)]
pub struct ArtworkStore {
    dir: PathBuf,
}

impl ArtworkStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All gallery images, newest first. Creates the directory when missing.
    pub async fn list(&self) -> io::Result<Vec<Artwork>> {
        fs::create_dir_all(&self.dir).await?;

        let mut artworks = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let Ok(filename) = entry.file_name().into_string() else {
                continue;
            };
            if !has_gallery_extension(&filename) {
                continue;
            }
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            artworks.push(Artwork {
                url: format!("{PUBLIC_PREFIX}/{filename}"),
                filename,
                uploaded_at: DateTime::<Utc>::from(metadata.modified()?),
                size: metadata.len(),
            });
        }

        artworks.sort_by(|a, b| {
            b.uploaded_at
                .cmp(&a.uploaded_at)
                .then_with(|| b.filename.cmp(&a.filename))
        });
        Ok(artworks)
    }

    /// Store an already validated PNG as `<unix-millis>-<sanitized>.png`
    pub async fn save_png(&self, original_name: &str, bytes: &[u8]) -> io::Result<Artwork> {
        fs::create_dir_all(&self.dir).await?;

        let now = Utc::now();
        let filename = format!(
            "{}-{}.png",
            now.timestamp_millis(),
            sanitize_filename(original_name)
        );
        fs::write(self.dir.join(&filename), bytes).await?;
        tracing::info!("Stored artwork {} ({} bytes)", filename, bytes.len());

        Ok(Artwork {
            url: format!("{PUBLIC_PREFIX}/{filename}"),
            filename,
            uploaded_at: now,
            size: bytes.len() as u64,
        })
    }
}
