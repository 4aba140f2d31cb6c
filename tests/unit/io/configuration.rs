//! Tests for configuration constants and their consistency

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tilestitch::io::configuration::{
        DEFAULT_OUTPUT, DEFAULT_WORK_DIR, IMAGE_EXTENSIONS, METADATA_DIR, METADATA_PREFIX,
        ZIP_EMPTY_SIGNATURE, ZIP_LOCAL_SIGNATURE,
    };
    use tilestitch::locator::discovery::is_image_file;

    // The default output must itself be a discoverable image type
    #[test]
    fn test_default_output_is_image() {
        assert!(is_image_file(Path::new(DEFAULT_OUTPUT)));
        assert_eq!(DEFAULT_WORK_DIR, "pieces");
    }

    // Extensions are compared case-insensitively against lowercase entries
    #[test]
    fn test_extensions_lowercase_without_dot() {
        for ext in IMAGE_EXTENSIONS {
            assert_eq!(*ext, ext.to_lowercase());
            assert!(!ext.starts_with('.'));
        }
        assert!(IMAGE_EXTENSIONS.contains(&"png"));
        assert!(IMAGE_EXTENSIONS.contains(&"jpg"));
        assert!(IMAGE_EXTENSIONS.contains(&"jpeg"));
    }

    #[test]
    fn test_metadata_markers() {
        assert_eq!(METADATA_DIR, "__MACOSX");
        assert_eq!(METADATA_PREFIX, "._");
    }

    #[test]
    fn test_zip_signatures_share_prefix() {
        assert_eq!(ZIP_LOCAL_SIGNATURE[..2], *b"PK");
        assert_eq!(ZIP_EMPTY_SIGNATURE[..2], *b"PK");
        assert_ne!(ZIP_LOCAL_SIGNATURE, ZIP_EMPTY_SIGNATURE);
    }
}
