//! Tests for refilling empty cells

#[cfg(test)]
mod tests {
    use candy_cascade::algorithm::refill::{completes_run, refill};
    use candy_cascade::io::configuration::REFILL_ATTEMPTS;
    use candy_cascade::math::random::{ScriptedSource, SeededSource};
    use candy_cascade::spatial::grid::{Candy, Cell, Grid, Position};

    fn grid(text: &str) -> Grid {
        text.parse().expect("test grid should parse")
    }

    #[test]
    fn test_completes_run_checks_left_and_above() {
        let board = grid("A A -\nB - -\nB - -");

        assert!(completes_run(&board, Position::new(0, 2), Candy::A));
        assert!(!completes_run(&board, Position::new(0, 2), Candy::B));
        assert!(!completes_run(&board, Position::new(2, 0), Candy::B));
        assert!(!completes_run(&board, Position::new(1, 1), Candy::A));
    }

    #[test]
    fn test_completes_run_vertical() {
        let board = grid("C - -\nC - -\n- - -");

        assert!(completes_run(&board, Position::new(2, 0), Candy::C));
        assert!(!completes_run(&board, Position::new(2, 0), Candy::D));
    }

    #[test]
    fn test_refill_redraws_candy_completing_a_run() {
        let mut board = grid("A A -\nB C D\nC D B");
        let mut source = ScriptedSource::from_glyphs("AB").unwrap();

        let filled = refill(&mut board, &mut source);

        assert_eq!(filled, 1);
        assert_eq!(board.get(Position::new(0, 2)), Some(Cell::Filled(Candy::B)));
        assert_eq!(source.drawn(), 2);
    }

    // A source stuck on one candy exhausts the retry budget and the last draw stays
    #[test]
    fn test_refill_gives_up_after_attempt_budget() {
        let mut board = grid("A A -\nB C D\nC D B");
        let mut source = ScriptedSource::from_glyphs("A").unwrap();

        refill(&mut board, &mut source);

        assert_eq!(board.get(Position::new(0, 2)), Some(Cell::Filled(Candy::A)));
        assert_eq!(source.drawn(), REFILL_ATTEMPTS);
    }

    // Cells refilled earlier in the pass count as neighbours
    #[test]
    fn test_refill_is_row_major() {
        let mut board = grid("- - -\nB C D\nC D B");
        let mut source = ScriptedSource::from_glyphs("AAAB").unwrap();

        assert_eq!(refill(&mut board, &mut source), 3);
        assert_eq!(board, grid("A A B\nB C D\nC D B"));
    }

    #[test]
    fn test_refill_leaves_no_empty_cell() {
        let mut board = Grid::empty(6);
        let mut source = SeededSource::new(5);

        assert_eq!(refill(&mut board, &mut source), 36);
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn test_refill_on_full_grid_draws_nothing() {
        let mut board = grid("A B C\nD E A\nB C D");
        let before = board.clone();
        let mut source = ScriptedSource::from_glyphs("E").unwrap();

        assert_eq!(refill(&mut board, &mut source), 0);
        assert_eq!(source.drawn(), 0);
        assert_eq!(board, before);
    }
}
