//! Tests for text rendering

#[cfg(test)]
mod tests {
    use candy_cascade::algorithm::executor::{CycleStep, Observer};
    use candy_cascade::algorithm::search::ScoredMove;
    use candy_cascade::io::render::{
        TextRenderer, describe_move, describe_suggestion, render_grid, step_caption,
    };
    use candy_cascade::spatial::grid::{Grid, Position};
    use candy_cascade::spatial::moves::Move;

    fn grid(text: &str) -> Grid {
        text.parse().expect("test grid should parse")
    }

    #[test]
    fn test_render_small_grid() {
        let rendered = render_grid(&grid("ABC\n-AB\nCCA"));

        let expected = [
            "    1 2 3",
            "   +- - - +",
            "1 | A B C |",
            "2 | - A B |",
            "3 | C C A |",
            "   +- - - +",
            "",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    // Two-digit labels widen every column
    #[test]
    fn test_render_wide_labels() {
        let rendered = render_grid(&Grid::empty(10));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 13);
        assert!(lines.first().is_some_and(|header| header.ends_with("9  10")));
        assert!(lines.get(11).is_some_and(|row| row.starts_with("10 | -  -")));
    }

    #[test]
    fn test_move_descriptions_are_one_based() {
        let swap = Move::downward(Position::new(0, 4));
        assert_eq!(describe_move(swap), "(1,5) <-> (2,5)");

        let scored = ScoredMove { swap, score: 7 };
        assert_eq!(
            describe_suggestion(Some(&scored)),
            ">>> Best move: (1,5) <-> (2,5) clears 7 cells"
        );
        assert_eq!(describe_suggestion(None), "No improving move found.");
    }

    #[test]
    fn test_step_captions() {
        assert_eq!(step_caption(CycleStep::Board), "Board");
        assert_eq!(step_caption(CycleStep::Cleared { cells: 4 }), "Matches cleared");
        assert_eq!(step_caption(CycleStep::Collapsed), "Gravity");
        assert_eq!(step_caption(CycleStep::Refilled), "Refill");
    }

    #[test]
    fn test_renderer_writes_captions_and_grids() {
        let board = grid("ABC\nDEA\nBCD");
        let mut renderer = TextRenderer::new(Vec::new());

        renderer.on_step(CycleStep::Cleared { cells: 3 }, &board).unwrap();
        renderer.on_step(CycleStep::Cleared { cells: 0 }, &board).unwrap();
        renderer.on_suggestion(None).unwrap();
        renderer
            .on_move(Move::rightward(Position::new(1, 1)), &board)
            .unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.first(), Some(&"Matches cleared (3 cells)"));
        assert_eq!(lines.get(7), Some(&"Matches cleared"));
        assert!(output.contains("1 | A B C |"));
        assert!(output.contains("No improving move found.\n"));
        assert!(output.ends_with("Playing (2,2) <-> (2,3)\n"));
    }
}
