//! Loading a selected image file for upload.

use std::path::Path;

use crate::error::ApiError;
use crate::state::ImageSelection;

/// Image bytes ready to be posted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name sent with the multipart part.
    pub file_name: String,
    /// MIME type detected from the file content.
    pub mime: &'static str,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// What: MIME type for formats recognised by extension only.
///
/// Inputs:
/// - `path`: Selected file
///
/// Output:
/// - `Some(mime)` for text-based images without magic bytes, else `None`
#[must_use]
pub fn mime_by_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// What: Detect the image type of file content.
///
/// Inputs:
/// - `path`: Selected file, used for messages and the extension fallback
/// - `bytes`: File content
///
/// Output:
/// - Image MIME type
///
/// # Errors
/// - `ApiError::UnsupportedFormat` when the content is a non-image type, or
///   is unrecognised and the extension is not a text-based image format
///
/// Details:
/// - Magic bytes decide first; the extension only matters when they match
///   nothing, so a PNG without an extension is accepted and a text file named
///   `.png` is not.
pub fn detect_mime(path: &Path, bytes: &[u8]) -> Result<&'static str, ApiError> {
    if let Some(kind) = infer::get(bytes) {
        return match kind.mime_type() {
            mime if mime.starts_with("image/") => Ok(mime),
            other => Err(ApiError::UnsupportedFormat(format!(
                "{} is {other}, not an image",
                path.display()
            ))),
        };
    }
    mime_by_extension(path).ok_or_else(|| {
        ApiError::UnsupportedFormat(format!("{} does not look like an image", path.display()))
    })
}

/// What: Read the selected file into an upload.
///
/// Inputs:
/// - `selection`: File chosen by the user
///
/// Output:
/// - Upload with name, MIME type and bytes
///
/// # Errors
/// - `ApiError::NotFound` when the file cannot be read
/// - `ApiError::UnsupportedFormat` for empty files and content that is not an image
pub async fn load_upload(selection: &ImageSelection) -> Result<ImageUpload, ApiError> {
    let bytes = tokio::fs::read(&selection.path).await.map_err(|e| {
        ApiError::NotFound(format!("cannot read {}: {e}", selection.path.display()))
    })?;
    if bytes.is_empty() {
        return Err(ApiError::UnsupportedFormat(format!(
            "{} is empty",
            selection.display_name()
        )));
    }
    let mime = detect_mime(&selection.path, &bytes)?;
    tracing::debug!(file = %selection.path.display(), bytes = bytes.len(), mime, "image loaded");
    Ok(ImageUpload {
        file_name: selection.display_name(),
        mime,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// PNG signature followed by the start of an IHDR chunk.
    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    /// What: Content decides the type; the extension is only a fallback.
    ///
    /// Inputs:
    /// - PNG bytes without extension, JPEG bytes named `.png`, text named
    ///   `.png`, PDF bytes named `.jpg`, SVG markup named `.svg`
    ///
    /// Output:
    /// - PNG and JPEG from magic bytes; text and PDF rejected; SVG by extension
    fn detects_type_from_content() {
        assert_eq!(detect_mime(Path::new("photo"), PNG), Ok("image/png"));
        assert_eq!(
            detect_mime(Path::new("odd.png"), b"\xff\xd8\xff\xe0 jfif"),
            Ok("image/jpeg")
        );
        assert!(matches!(
            detect_mime(Path::new("notes.png"), b"shopping list: rice, eggs"),
            Err(ApiError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_mime(Path::new("menu.jpg"), b"%PDF-1.7\n"),
            Err(ApiError::UnsupportedFormat(m)) if m.contains("application/pdf")
        ));
        assert_eq!(
            detect_mime(Path::new("logo.SVG"), b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>"),
            Ok("image/svg+xml")
        );
    }

    #[tokio::test]
    /// What: A PNG saved without an extension uploads as PNG.
    ///
    /// Inputs:
    /// - Temporary file `snapshot` holding PNG bytes
    ///
    /// Output:
    /// - Upload typed `image/png`
    async fn loads_extensionless_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("snapshot");
        std::fs::write(&path, PNG).expect("write");
        let upload = load_upload(&ImageSelection::new(&path)).await.expect("loads");
        assert_eq!(upload.mime, "image/png");
        assert_eq!(upload.file_name, "snapshot");
    }

    #[tokio::test]
    /// What: Text disguised as an image is refused before upload.
    ///
    /// Inputs:
    /// - Temporary `notes.png` holding plain text
    ///
    /// Output:
    /// - `ApiError::UnsupportedFormat`
    async fn rejects_text_named_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.png");
        std::fs::write(&path, "not a picture").expect("write");
        let err = load_upload(&ImageSelection::new(&path)).await;
        assert!(matches!(err, Err(ApiError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    /// What: Existing image files load with their bytes.
    ///
    /// Inputs:
    /// - Temporary `.png` file with content
    ///
    /// Output:
    /// - Upload with matching name and bytes
    async fn loads_image_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dish.png");
        let mut f = std::fs::File::create(&path).expect("create");
        f.write_all(b"\x89PNG fake").expect("write");
        let upload = load_upload(&ImageSelection::new(&path)).await.expect("loads");
        assert_eq!(upload.file_name, "dish.png");
        assert_eq!(upload.mime, "image/png");
        assert_eq!(upload.bytes, b"\x89PNG fake");
    }

    #[tokio::test]
    /// What: Missing files surface as `NotFound`.
    ///
    /// Inputs:
    /// - Nonexistent `.jpg` path
    ///
    /// Output:
    /// - `ApiError::NotFound`
    async fn missing_file_is_not_found() {
        let err = load_upload(&ImageSelection::new("/definitely/missing.jpg")).await;
        assert!(matches!(err, Err(ApiError::NotFound(_))));
    }
}
