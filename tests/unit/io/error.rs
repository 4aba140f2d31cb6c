//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use tilestitch::ReassemblyError;
    use tilestitch::io::error::{WithPath, computation_error, invalid_parameter};

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ReassemblyError::FileSystem {
            path: "/tmp/pieces".into(),
            operation: "remove work area",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("remove work area"));
    }

    #[test]
    fn test_input_errors_name_the_path() {
        let missing = ReassemblyError::InputNotFound {
            path: PathBuf::from("intel.zip"),
        };
        let unknown = ReassemblyError::UnrecognizedInput {
            path: PathBuf::from("notes.txt"),
        };

        assert!(missing.to_string().contains("intel.zip"));
        assert!(unknown.to_string().contains("notes.txt"));
        assert!(missing.source().is_none());
    }

    #[test]
    fn test_no_pieces_message() {
        let searched = ReassemblyError::NoPieces {
            root: PathBuf::from("pieces"),
        };
        let bare = ReassemblyError::NoPieces {
            root: PathBuf::new(),
        };

        assert!(searched.to_string().contains("'pieces'"));
        assert_eq!(bare.to_string(), "No image pieces to compose");
    }

    // Image errors carry both the path and the codec's reason
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = ReassemblyError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"), "{message}");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_with_path_on_image_error() {
        let result: Result<(), image::ImageError> = Err(image::ImageError::IoError(
            std::io::Error::other("truncated"),
        ));

        match result.with_path(Path::new("piece_7.png")) {
            Err(ReassemblyError::ImageLoad { path, .. }) => {
                assert_eq!(path, PathBuf::from("piece_7.png"));
            }
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }
    }

    // Errors without a path slot pass through unchanged
    #[test]
    fn test_with_path_leaves_other_variants() {
        let result: Result<(), ReassemblyError> = Err(invalid_parameter("grid", &"0x1", &"zero"));

        match result.with_operation(Path::new("ignored"), "ignored") {
            Err(ReassemblyError::InvalidParameter { value, .. }) => assert_eq!(value, "0x1"),
            other => unreachable!("Expected InvalidParameter error, got {other:?}"),
        }
    }

    #[test]
    fn test_helpers_format() {
        let param = invalid_parameter("expected", &-3, &"must be positive");
        let message = param.to_string();
        assert!(message.contains("expected"));
        assert!(message.contains("-3"));
        assert!(message.contains("must be positive"));

        let computation = computation_error("canvas size", &"too wide");
        assert!(computation.to_string().contains("canvas size"));
        assert!(computation.to_string().contains("too wide"));
    }
}
