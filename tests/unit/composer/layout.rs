//! Tests for grid layout inference and `COLSxROWS` parsing

#[cfg(test)]
mod tests {
    use tilestitch::ReassemblyError;
    use tilestitch::composer::layout::{GridLayout, infer_layout};

    fn dims(layout: GridLayout) -> (u32, u32) {
        (layout.columns, layout.rows)
    }

    // One-pixel-wide strips are stitched side by side
    #[test]
    fn test_vertical_strips_single_row() {
        for count in [2, 7, 100, 1000] {
            let layout = infer_layout(count, 1, 480).unwrap();
            assert_eq!(dims(layout), (count as u32, 1));
        }
    }

    // One-pixel-tall strips are stacked in a single column
    #[test]
    fn test_horizontal_strips_single_column() {
        for count in [2, 7, 100, 1000] {
            let layout = infer_layout(count, 640, 1).unwrap();
            assert_eq!(dims(layout), (1, count as u32));
        }
    }

    // Width takes precedence when both sides are one pixel
    #[test]
    fn test_single_pixel_pieces_prefer_row() {
        assert_eq!(dims(infer_layout(5, 1, 1).unwrap()), (5, 1));
    }

    // Perfect squares give a square grid
    #[test]
    fn test_square_counts() {
        assert_eq!(dims(infer_layout(1, 10, 10).unwrap()), (1, 1));
        assert_eq!(dims(infer_layout(16, 10, 10).unwrap()), (4, 4));
        assert_eq!(dims(infer_layout(144, 8, 8).unwrap()), (12, 12));
    }

    // The largest divisor not above the square root becomes the column count
    #[test]
    fn test_divisor_search_prefers_tall_grid() {
        assert_eq!(dims(infer_layout(12, 10, 10).unwrap()), (3, 4));
        assert_eq!(dims(infer_layout(1000, 10, 10).unwrap()), (25, 40));
        assert_eq!(dims(infer_layout(200, 20, 20).unwrap()), (10, 20));
    }

    // Primes only divide by one, leaving a single column
    #[test]
    fn test_prime_count_single_column() {
        assert_eq!(dims(infer_layout(13, 10, 10).unwrap()), (1, 13));
        assert_eq!(dims(infer_layout(997, 4, 4).unwrap()), (1, 997));
    }

    // Every tile layout holds exactly the piece count
    #[test]
    fn test_tile_layout_capacity_matches_count() {
        for count in 1..=300usize {
            let first = infer_layout(count, 7, 5).unwrap();
            let second = infer_layout(count, 7, 5).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.capacity(), count as u64);
            assert!(first.columns <= first.rows);
        }
    }

    #[test]
    fn test_zero_pieces_rejected() {
        let result = infer_layout(0, 10, 10);
        assert!(matches!(result, Err(ReassemblyError::NoPieces { .. })));
    }

    // Row-major cell mapping
    #[test]
    fn test_cell_positions() {
        let layout = GridLayout::new(4, 3).unwrap();
        assert_eq!(layout.cell(0), (0, 0));
        assert_eq!(layout.cell(3), (3, 0));
        assert_eq!(layout.cell(4), (0, 1));
        assert_eq!(layout.cell(11), (3, 2));
    }

    #[test]
    fn test_parse_grid() {
        let layout: GridLayout = "40x25".parse().unwrap();
        assert_eq!(dims(layout), (40, 25));
        assert_eq!(layout.to_string(), "40x25");

        let upper: GridLayout = " 8X2 ".parse().unwrap();
        assert_eq!(dims(upper), (8, 2));
    }

    #[test]
    fn test_parse_grid_rejects_malformed() {
        for input in ["40", "x25", "40x", "0x5", "5x0", "axb", "-1x4"] {
            let result = input.parse::<GridLayout>();
            assert!(
                matches!(result, Err(ReassemblyError::InvalidParameter { .. })),
                "{input} should not parse"
            );
        }
    }
}
