//! Tests for error messages and conversions

#[cfg(test)]
mod tests {
    use candy_cascade::GameError;
    use candy_cascade::io::error::{input_error, invalid_parameter};
    use candy_cascade::spatial::grid::Position;
    use candy_cascade::spatial::moves::Move;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_display_messages() {
        let dimension = GameError::InvalidDimension {
            dimension: 2,
            minimum: 3,
            maximum: 64,
        };
        assert_eq!(
            dimension.to_string(),
            "Grid dimension 2 is outside the supported range 3..=64"
        );

        let swap = GameError::InvalidMove {
            swap: Move::rightward(Position::new(0, 2)),
            dimension: 3,
            reason: "cell outside the grid".to_string(),
        };
        assert_eq!(
            swap.to_string(),
            "Invalid move (0, 2) <-> (0, 3) on a 3x3 grid: cell outside the grid"
        );

        let diagonal = GameError::NotAdjacent {
            swap: Move {
                from: Position::new(1, 1),
                to: Position::new(2, 2),
            },
        };
        assert_eq!(
            diagonal.to_string(),
            "Invalid move (1, 1) <-> (2, 2): cells are not adjacent"
        );

        let cascade = GameError::CascadeLimit { cycles: 10 };
        assert_eq!(cascade.to_string(), "Cascade did not settle after 10 cycles");

        let parse = GameError::ParseGrid {
            line: 4,
            reason: "unknown glyph 'Z'".to_string(),
        };
        assert_eq!(
            parse.to_string(),
            "Failed to parse grid at line 4: unknown glyph 'Z'"
        );
    }

    #[test]
    fn test_helper_constructors() {
        let parameter = invalid_parameter("trials", &0, &"must be positive");
        assert_eq!(
            parameter.to_string(),
            "Invalid parameter 'trials' = '0': must be positive"
        );

        let input = input_error(&"expected 4 numbers, found 2");
        assert!(matches!(input, GameError::Input { ref reason } if reason.contains("found 2")));
        assert_eq!(input.to_string(), "Console error: expected 4 numbers, found 2");
    }

    #[test]
    fn test_io_errors_become_console_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let converted = GameError::from(io);

        assert!(matches!(converted, GameError::Input { .. }));
        assert!(converted.source().is_none());
    }

    #[test]
    fn test_file_system_error_keeps_source() {
        let error = GameError::FileSystem {
            path: PathBuf::from("/nowhere/out.gif"),
            operation: "create file",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("create file"));
        assert!(error.to_string().contains("/nowhere/out.gif"));
    }
}
