//! Text vs. binary classification of template files.

use std::path::Path;

const BINARY_CHECK_BYTES: usize = 8192;

const BINARY_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tif", "tiff", "psd",
    // archives
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar",
    // executables and libraries
    "exe", "dll", "so", "dylib", "bin", "o", "a", "class", "wasm",
    // fonts
    "ttf", "otf", "woff", "woff2", "eot",
    // audio and video
    "mp3", "wav", "ogg", "flac", "aac", "mp4", "avi", "mov", "mkv", "webm",
    // documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt",
];

fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.as_str()))
}

/// Decodes a template file as text. Files classified as binary come back
/// unchanged in `Err`.
pub(crate) fn decode_text(path: &Path, bytes: Vec<u8>) -> Result<String, Vec<u8>> {
    if has_binary_extension(path) {
        return Err(bytes);
    }
    let end = bytes.len().min(BINARY_CHECK_BYTES);
    if bytes[..end].contains(&0) {
        return Err(bytes);
    }
    String::from_utf8(bytes).map_err(|err| err.into_bytes())
}
