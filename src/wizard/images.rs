//! Staging of locally encoded photos.
//!
//! Photos are held as data URLs in the draft's ordered image list; the
//! first entry is the cover image. Files are encoded one at a time, in
//! the order they were offered, so the resulting order always matches the
//! user's selection order.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Sniff the media type of an image from its leading magic bytes.
///
/// Recognises PNG, JPEG, GIF and WEBP; returns `None` for anything else.
#[must_use]
pub fn sniff_media_type(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

/// Encode image bytes as a `data:` URL.
///
/// Returns `None` if the bytes are not a recognised image format.
#[must_use]
pub fn encode(bytes: &[u8]) -> Option<String> {
    let media_type = sniff_media_type(bytes)?;
    Some(format!("data:{media_type};base64,{}", STANDARD.encode(bytes)))
}

/// Append already-encoded images to the staged list, respecting capacity.
///
/// At most `capacity - images.len()` new entries are accepted; the rest
/// are dropped. Input order is preserved.
#[must_use]
pub fn append_encoded(images: &[String], encoded: Vec<String>, capacity: usize) -> Vec<String> {
    let remaining = capacity.saturating_sub(images.len());
    let mut result = images.to_vec();
    result.extend(encoded.into_iter().take(remaining));
    result
}

/// Read, encode and stage the files at the given paths.
///
/// Unreadable files and files that are not images are silently skipped
/// (logged at debug level); accepted files are appended in offer order,
/// up to `capacity` staged images in total.
#[must_use]
pub fn add_files<P: AsRef<Path>>(images: &[String], paths: &[P], capacity: usize) -> Vec<String> {
    let encoded: Vec<String> = paths
        .iter()
        .filter_map(|path| {
            let path = path.as_ref();
            let bytes = match std::fs::read(path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::debug!("Skipping unreadable file {}: {e}", path.display());
                    return None;
                }
            };
            let data_url = encode(&bytes);
            if data_url.is_none() {
                tracing::debug!("Skipping non-image file {}", path.display());
            }
            data_url
        })
        .collect();

    append_encoded(images, encoded, capacity)
}

/// Drop the image at `index`, leaving the rest in order.
///
/// Out-of-bounds indices are a no-op.
#[must_use]
pub fn remove(images: &[String], index: usize) -> Vec<String> {
    images
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, image)| image.clone())
        .collect()
}

/// Relocate the image at `from` to position `to`, shifting the rest.
///
/// A no-op if `to` is outside `[0, len - 1]` or `from` is out of bounds.
#[must_use]
pub fn move_image(images: &[String], from: usize, to: usize) -> Vec<String> {
    let mut result = images.to_vec();
    if from >= result.len() || to >= result.len() {
        return result;
    }
    let moved = result.remove(from);
    result.insert(to, moved);
    result
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{add_files, append_encoded, encode, move_image, remove, sniff_media_type};

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn staged(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img-{i}")).collect()
    }

    #[test]
    fn sniffs_common_formats() {
        assert_eq!(sniff_media_type(&PNG_HEADER), Some("image/png"));
        assert_eq!(sniff_media_type(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(sniff_media_type(b"GIF89a...."), Some("image/gif"));
        assert_eq!(sniff_media_type(b"RIFF\x00\x00\x00\x00WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_media_type(b"not an image"), None);
    }

    #[test]
    fn encode_produces_data_url() {
        let url = encode(&PNG_HEADER).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn encode_rejects_non_image() {
        assert_eq!(encode(b"plain text"), None);
    }

    #[test]
    fn append_respects_capacity_and_order() {
        let offered: Vec<String> = (0..6).map(|i| format!("new-{i}")).collect();
        let result = append_encoded(&[], offered, 5);

        assert_eq!(result.len(), 5);
        assert_eq!(result[0], "new-0");
        assert_eq!(result[4], "new-4");
    }

    #[test]
    fn append_counts_existing_images_against_capacity() {
        let result = append_encoded(&staged(4), vec!["a".to_string(), "b".to_string()], 5);
        assert_eq!(result.len(), 5);
        assert_eq!(result[4], "a");
    }

    #[test]
    fn add_files_skips_non_images_and_preserves_order() {
        let tmp = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for (name, bytes) in [
            ("a.png", &PNG_HEADER[..]),
            ("notes.txt", b"not an image"),
            ("b.png", &PNG_HEADER[..]),
        ] {
            let path = tmp.path().join(name);
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(bytes).unwrap();
            paths.push(path);
        }

        let result = add_files(&[], &paths, 5);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|url| url.starts_with("data:image/png")));
    }

    #[test]
    fn remove_drops_one_element() {
        let result = remove(&staged(3), 1);
        assert_eq!(result, vec!["img-0".to_string(), "img-2".to_string()]);
    }

    #[test]
    fn move_first_to_last_shifts_the_rest_left() {
        let result = move_image(&staged(5), 0, 4);
        assert_eq!(
            result,
            vec!["img-1", "img-2", "img-3", "img-4", "img-0"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn move_out_of_bounds_is_a_no_op() {
        let images = staged(3);
        assert_eq!(move_image(&images, 0, 3), images);
        assert_eq!(move_image(&images, 5, 1), images);
    }
}
