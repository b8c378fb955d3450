//! Tests for initial grid generation

#[cfg(test)]
mod tests {
    use candy_cascade::GameError;
    use candy_cascade::algorithm::generation::{generate_grid, validate_dimension};
    use candy_cascade::io::configuration::{MAX_DIMENSION, MIN_DIMENSION};
    use candy_cascade::math::random::{ScriptedSource, SeededSource};
    use candy_cascade::spatial::grid::Grid;

    #[test]
    fn test_cells_are_drawn_row_major() {
        let mut source = ScriptedSource::from_glyphs("ABCDE").unwrap();

        let board = generate_grid(3, &mut source).unwrap();

        assert_eq!(board, "ABC\nDEA\nBCD".parse::<Grid>().unwrap());
        assert_eq!(source.drawn(), 9);
    }

    #[test]
    fn test_generated_grid_is_full() {
        let mut source = SeededSource::new(2024);

        let board = generate_grid(10, &mut source).unwrap();

        assert_eq!(board.dimension(), 10);
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let first = generate_grid(8, &mut SeededSource::new(3)).unwrap();
        let second = generate_grid(8, &mut SeededSource::new(3)).unwrap();
        let other = generate_grid(8, &mut SeededSource::new(4)).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_dimension_bounds() {
        assert_eq!(validate_dimension(MIN_DIMENSION).unwrap(), MIN_DIMENSION);
        assert_eq!(validate_dimension(MAX_DIMENSION).unwrap(), MAX_DIMENSION);

        for dimension in [0, 1, MIN_DIMENSION - 1, MAX_DIMENSION + 1] {
            assert!(matches!(
                validate_dimension(dimension),
                Err(GameError::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_dimension_draws_nothing() {
        let mut source = ScriptedSource::from_glyphs("A").unwrap();

        assert!(generate_grid(2, &mut source).is_err());
        assert_eq!(source.drawn(), 0);
    }
}
