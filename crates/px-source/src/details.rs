use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Longueur maximale du nom affiché avant troncature.
pub const NAME_MAX_CHARS: usize = 20;
/// Caractères conservés quand le nom est tronqué (suivis de "...").
pub const NAME_KEEP_CHARS: usize = 17;

/// Métadonnées affichées après chargement d'une image.
///
/// Read from the file header and filesystem only; pixels are not decoded.
///
/// # Example
/// ```
/// use px_source::details::ImageDetails;
/// let d = ImageDetails::new("cat.png".into(), 2048, 640, 480);
/// assert_eq!(d.size_label(), "2.00 KB");
/// assert_eq!(d.resolution_label(), "640x480");
/// assert_eq!(d.aspect_label(), "0.75");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ImageDetails {
    /// Source path.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Native width in pixels.
    pub width: u32,
    /// Native height in pixels.
    pub height: u32,
}

impl ImageDetails {
    /// Build from already-known values.
    #[must_use]
    pub fn new(path: PathBuf, size_bytes: u64, width: u32, height: u32) -> Self {
        Self {
            path,
            size_bytes,
            width,
            height,
        }
    }

    /// Read size from the filesystem and dimensions from the image header.
    ///
    /// # Errors
    /// Returns an error if the file is missing or its header is unreadable.
    pub fn probe(path: &Path) -> Result<Self> {
        let size_bytes = std::fs::metadata(path)
            .with_context(|| format!("Impossible de lire {}", path.display()))?
            .len();
        let (width, height) = ::image::image_dimensions(path)
            .with_context(|| format!("En-tête image illisible : {}", path.display()))?;
        Ok(Self::new(path.to_path_buf(), size_bytes, width, height))
    }

    /// File name, shortened to 17 chars + "..." past 20 chars.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.chars().count() > NAME_MAX_CHARS {
            let mut short: String = name.chars().take(NAME_KEEP_CHARS).collect();
            short.push_str("...");
            short
        } else {
            name
        }
    }

    /// Size in KB below 1024 KB, MB above, two decimals.
    #[must_use]
    pub fn size_label(&self) -> String {
        let kb = self.size_bytes as f64 / 1024.0;
        if kb < 1024.0 {
            format!("{kb:.2} KB")
        } else {
            format!("{:.2} MB", kb / 1024.0)
        }
    }

    /// `"{width}x{height}"`.
    #[must_use]
    pub fn resolution_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Native height / width.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width.max(1))
    }

    /// Native aspect, two decimals.
    #[must_use]
    pub fn aspect_label(&self) -> String {
        format!("{:.2}", self.aspect())
    }

    /// The four labelled lines shown in the details panel.
    #[must_use]
    pub fn summary_lines(&self) -> [String; 4] {
        [
            format!("Name: {}", self.display_name()),
            format!("Size: {}", self.size_label()),
            format!("Resolution: {}", self.resolution_label()),
            format!("Aspect Ratio: {}", self.aspect_label()),
        ]
    }
}
