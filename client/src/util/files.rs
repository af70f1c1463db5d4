//! File picker helpers.
//!
//! Picked files are read fully into memory as [`UploadFile`](crate::net::transport::UploadFile)s before upload;
//! accepted formats are small documents and conversation logs.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

#[cfg(feature = "hydrate")]
use crate::net::transport::UploadFile;

/// Lowercase extension of `name`, without the dot.
#[must_use]
pub fn extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Whether `name` carries one of the `accepted` extensions.
#[must_use]
pub fn has_extension(name: &str, accepted: &[&str]) -> bool {
    extension(name).is_some_and(|ext| accepted.contains(&ext.as_str()))
}

/// Human-readable byte count: `0 Bytes`, `1.5 KB`, `2 MB`.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[unit])
}

/// Files currently selected in a file `<input>`.
#[cfg(feature = "hydrate")]
pub fn selected(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Read a picked file into memory.
///
/// # Errors
///
/// Returns a description of the browser error when the file cannot be read.
#[cfg(feature = "hydrate")]
pub async fn read(file: &web_sys::File) -> Result<UploadFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {}: {e:?}", file.name()))?;
    Ok(UploadFile { name: file.name(), content_type: file.type_(), bytes: js_sys::Uint8Array::new(&buffer).to_vec() })
}
