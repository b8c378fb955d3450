//! Tests for cascade simulation and scoring

#[cfg(test)]
mod tests {
    use candy_cascade::GameError;
    use candy_cascade::algorithm::simulation::{
        Cascade, run_cascade, simulate, simulate_cascade,
    };
    use candy_cascade::math::random::ScriptedSource;
    use candy_cascade::spatial::grid::{Grid, Position};
    use candy_cascade::spatial::moves::Move;

    fn grid(text: &str) -> Grid {
        text.parse().expect("test grid should parse")
    }

    fn source(glyphs: &str) -> ScriptedSource {
        ScriptedSource::from_glyphs(glyphs).expect("valid glyphs")
    }

    #[test]
    fn test_single_clear_scores_three() {
        let board = grid("A B A\nB A C\nC D E");
        let swap = Move::downward(Position::new(0, 1));

        let score = simulate(&board, swap, &mut source("ECD")).unwrap();

        assert_eq!(score, 3);
    }

    // The refill completes a second run in column 0
    #[test]
    fn test_chain_reaction_adds_up_every_cycle() {
        let board = grid("A C E\nB D B\nA B D");
        let swap = Move::downward(Position::new(1, 1));

        let cascade = simulate_cascade(&board, swap, &mut source("ABC")).unwrap();

        assert_eq!(cascade.cleared_per_cycle, vec![3, 3]);
        assert_eq!(cascade.depth(), 2);
        assert_eq!(cascade.score(), 6);
    }

    #[test]
    fn test_run_cascade_reaches_stable_grid() {
        let mut board = grid("A C E\nB B B\nA D D");
        let mut refills = source("ABC");

        let cascade = run_cascade(&mut board, &mut refills).unwrap();

        assert_eq!(cascade.score(), 6);
        assert_eq!(board, grid("A B C\nB C E\nC D D"));
        assert_eq!(refills.drawn(), 6);
    }

    #[test]
    fn test_non_scoring_swap_scores_zero() {
        let board = grid("A B C\nD E A\nB C D");
        let swap = Move::rightward(Position::new(0, 0));

        assert_eq!(simulate(&board, swap, &mut source("A")).unwrap(), 0);
    }

    #[test]
    fn test_simulation_leaves_grid_untouched() {
        let board = grid("A C E\nB D B\nA B D");
        let before = board.clone();

        simulate(&board, Move::downward(Position::new(1, 1)), &mut source("ABC")).unwrap();

        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_swap_is_an_error() {
        let board = grid("A B C\nD E A\nB C D");
        let swap = Move::downward(Position::new(2, 2));

        let result = simulate(&board, swap, &mut source("A"));
        assert!(matches!(result, Err(GameError::InvalidMove { .. })));
    }

    // A source that only yields one candy refills every run it clears
    #[test]
    fn test_endless_cascade_hits_cycle_limit() {
        let mut board = grid("A A A\nA A A\nA A A");

        let result = run_cascade(&mut board, &mut source("A"));
        assert!(matches!(result, Err(GameError::CascadeLimit { .. })));
    }

    #[test]
    fn test_empty_cascade() {
        let cascade = Cascade::default();
        assert_eq!(cascade.score(), 0);
        assert_eq!(cascade.depth(), 0);
    }
}
