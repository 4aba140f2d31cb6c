//! Unit tests mirroring the `src/` tree, one test file per source file


/// Fixture builders shared by the unit tests
mod support {
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs::File;
    use std::io::{Cursor, Write};
    use std::path::{Path, PathBuf};
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    pub fn write_rgb_piece(
        dir: &Path,
        name: &str,
        width: u32,
        height: u32,
        color: [u8; 3],
    ) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        RgbImage::from_pixel(width, height, Rgb(color))
            .save(&path)
            .unwrap();
        path
    }

    pub fn write_rgba_piece(
        dir: &Path,
        name: &str,
        width: u32,
        height: u32,
        color: [u8; 4],
    ) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba(color))
            .save(&path)
            .unwrap();
        path
    }

    pub fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    // Names ending in '/' become directory entries
    pub fn write_zip(path: &Path, entries: &[(&str, Vec<u8>)]) {
        let mut zip = ZipWriter::new(File::create(path).unwrap());
        for (name, data) in entries {
            if name.ends_with('/') {
                zip.add_directory(*name, SimpleFileOptions::default())
                    .unwrap();
            } else {
                zip.start_file(*name, SimpleFileOptions::default()).unwrap();
                zip.write_all(data).unwrap();
            }
        }
        zip.finish().unwrap();
    }
}
