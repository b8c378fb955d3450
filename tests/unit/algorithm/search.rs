//! Tests for exhaustive move search

#[cfg(test)]
mod tests {
    use candy_cascade::algorithm::search::{ScoredMove, candidate_moves, evaluate_moves, search};
    use candy_cascade::math::random::{ScriptedSource, SeededSource};
    use candy_cascade::spatial::grid::{Grid, Position};
    use candy_cascade::spatial::moves::Move;
    use std::collections::HashSet;

    fn grid(text: &str) -> Grid {
        text.parse().expect("test grid should parse")
    }

    fn source(glyphs: &str) -> ScriptedSource {
        ScriptedSource::from_glyphs(glyphs).expect("valid glyphs")
    }

    #[test]
    fn test_candidate_count_and_order() {
        let moves = candidate_moves(3);

        assert_eq!(moves.len(), 12);
        assert_eq!(moves.first(), Some(&Move::rightward(Position::new(0, 0))));
        assert_eq!(moves.get(1), Some(&Move::downward(Position::new(0, 0))));
        assert_eq!(moves.last(), Some(&Move::rightward(Position::new(2, 1))));
        assert!(moves.iter().all(|swap| swap.is_adjacent() && swap.fits(3)));
    }

    #[test]
    fn test_each_pair_is_proposed_once() {
        let moves = candidate_moves(6);
        let unordered: HashSet<(Position, Position)> = moves
            .iter()
            .map(|swap| (swap.from.min(swap.to), swap.from.max(swap.to)))
            .collect();

        assert_eq!(moves.len(), 2 * 6 * 5);
        assert_eq!(unordered.len(), moves.len());
    }

    #[test]
    fn test_tiny_grids_have_no_candidates() {
        assert!(candidate_moves(0).is_empty());
        assert!(candidate_moves(1).is_empty());
        assert_eq!(candidate_moves(2).len(), 4);
    }

    #[test]
    fn test_search_finds_scoring_swap() {
        let board = grid("A B A\nB A C\nC D E");

        let best = search(&board, &source("ECD")).unwrap();

        assert_eq!(
            best,
            Some(ScoredMove {
                swap: Move::downward(Position::new(0, 1)),
                score: 3,
            })
        );
    }

    #[test]
    fn test_search_prefers_longer_cascade() {
        let board = grid("A C E\nB D B\nA B D");

        let best = search(&board, &source("ABC")).unwrap();

        assert_eq!(best.map(|m| m.score), Some(6));
        assert_eq!(
            best.map(|m| m.swap),
            Some(Move::downward(Position::new(1, 1)))
        );
    }

    #[test]
    fn test_search_returns_none_without_scoring_swap() {
        let board = grid("A B C\nD E A\nB C D");

        assert_eq!(search(&board, &source("ABCDE")).unwrap(), None);
        assert_eq!(search(&Grid::empty(2), &source("A")).unwrap(), None);
    }

    // Two swaps score 3; the first in enumeration order wins
    #[test]
    fn test_ties_keep_first_candidate() {
        let board = grid("E C E B\nA C A A\nA E E A\nB D C E");
        let refills = source("EDCB");

        let scored: Vec<ScoredMove> = evaluate_moves(&board, &refills)
            .unwrap()
            .into_iter()
            .filter(|m| m.score > 0)
            .collect();
        assert_eq!(scored.len(), 2);

        let best = search(&board, &refills).unwrap();
        assert_eq!(
            best.map(|m| m.swap),
            Some(Move::rightward(Position::new(1, 0)))
        );
        assert_eq!(best, scored.first().copied());
    }

    #[test]
    fn test_evaluate_matches_search() {
        let board = grid("A C E\nB D B\nA B D");
        let refills = source("ABC");

        let scores = evaluate_moves(&board, &refills).unwrap();
        let best = search(&board, &refills).unwrap();

        assert_eq!(scores.len(), 12);
        let top = scores.iter().map(|m| m.score).max();
        assert_eq!(best.map(|m| m.score), top);
    }

    // The search works on clones and never consumes the caller's source
    #[test]
    fn test_search_is_side_effect_free() {
        let board = grid("A C E\nB D B\nA B D");
        let before = board.clone();
        let refills = source("ABC");

        search(&board, &refills).unwrap();

        assert_eq!(board, before);
        assert_eq!(refills.drawn(), 0);
    }

    #[test]
    fn test_seeded_search_is_deterministic() {
        let mut generator = SeededSource::new(11);
        let board = candy_cascade::algorithm::generation::generate_grid(7, &mut generator).unwrap();

        let first = search(&board, &generator).unwrap();
        let second = search(&board, &generator).unwrap();

        assert_eq!(first, second);
    }
}
