//! Runtime defaults and filename conventions

// Command-line defaults
/// Output file written when `--output` is not given
pub const DEFAULT_OUTPUT: &str = "mission_intel.png";
/// Scratch directory used for archive extraction
pub const DEFAULT_WORK_DIR: &str = "pieces";

// Piece discovery
/// File extensions (lowercase) accepted as image pieces
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

/// Folder that macOS archive tools add alongside the real content
pub const METADATA_DIR: &str = "__MACOSX";

/// Filename prefix of AppleDouble resource-fork files
pub const METADATA_PREFIX: &str = "._";

// Archive detection
/// Leading bytes of a ZIP local file header
pub const ZIP_LOCAL_SIGNATURE: [u8; 4] = *b"PK\x03\x04";
/// Leading bytes of an empty ZIP archive (end of central directory only)
pub const ZIP_EMPTY_SIGNATURE: [u8; 4] = *b"PK\x05\x06";

// Progress bar display settings
/// Width of the placement progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Redraws per second for the progress bar
pub const PROGRESS_REFRESH_HZ: u8 = 10;
