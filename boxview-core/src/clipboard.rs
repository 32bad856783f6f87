/// True when a clipboard item's media type is an image (`image/png`, `IMAGE/JPEG`, ...).
pub fn is_image_media_type(media_type: &str) -> bool {
    let media_type = media_type.trim();
    media_type
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_types_are_detected() {
        assert!(is_image_media_type("image/png"));
        assert!(is_image_media_type("image/jpeg"));
        assert!(is_image_media_type("Image/PNG"));
        assert!(is_image_media_type(" image/webp "));
    }

    #[test]
    fn test_non_image_types_are_rejected() {
        assert!(!is_image_media_type("text/plain"));
        assert!(!is_image_media_type("text/html"));
        assert!(!is_image_media_type("application/x-image"));
        assert!(!is_image_media_type("image"));
        assert!(!is_image_media_type(""));
    }
}
