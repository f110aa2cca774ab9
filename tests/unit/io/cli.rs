//! Tests for command-line parsing and output rendering

#[cfg(test)]
mod tests {
    use clap::Parser;
    use partsort::PartError;
    use partsort::io::cli::{Cli, SortCommand};
    use partsort::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
    use partsort::parts::kind::PartKind::{Carry, Move, Tough, Work};

    // Tests parsing with no arguments at all
    // Verified by making the parts argument required
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert!(cli.parts.is_empty());
        assert!(cli.layout.is_empty());
        assert!(!cli.summary);
        assert!(!cli.verbose);
    }

    // Tests comma separated and repeated tokens are both accepted
    // Verified by removing the value delimiter
    #[test]
    fn test_cli_parse_lists() {
        let cli = Cli::parse_from([
            "program",
            "work,carry",
            "move",
            "--layout",
            "work,carry",
            "-l",
            "move",
            "--summary",
        ]);

        assert_eq!(cli.parts, vec!["work", "carry", "move"]);
        assert_eq!(cli.layout, vec!["work", "carry", "move"]);
        assert!(cli.summary);
    }

    // Tests log filter follows the verbose flag
    // Verified by inverting verbose flag logic
    #[test]
    fn test_log_filter() {
        assert_eq!(Cli::parse_from(["program"]).log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(
            Cli::parse_from(["program", "--verbose"]).log_filter(),
            VERBOSE_LOG_FILTER
        );
    }

    // Tests sorted output from command-line tokens
    // Verified by passing parts as the layout
    #[test]
    fn test_sorted() {
        let cli = Cli::parse_from([
            "program",
            "work,work,carry,move,move,move,tough,tough",
            "--layout",
            "work,carry,move",
        ]);

        assert_eq!(
            SortCommand::new(cli).sorted(),
            Ok(vec![Tough, Tough, Move, Work, Move, Work, Carry, Move])
        );
    }

    // Tests rendering joins names on one line
    // Verified by omitting the trailing newline
    #[test]
    fn test_render() {
        let cli = Cli::parse_from(["program", "heal,carry,carry", "--layout", "work"]);

        assert_eq!(
            SortCommand::new(cli).render(),
            Ok("carry,carry,heal\n".to_string())
        );
    }

    // Tests summary lines list present kinds in canonical order
    // Verified by printing zero counts
    #[test]
    fn test_render_summary() {
        let cli = Cli::parse_from(["program", "heal,move,carry,carry", "--summary"]);
        let rendered = SortCommand::new(cli).render();

        assert_eq!(
            rendered,
            Ok("carry,carry,heal,move\nmove=1\ncarry=2\nheal=1\n".to_string())
        );
    }

    // Tests empty input renders an empty line
    // Verified by returning an error for empty parts
    #[test]
    fn test_render_empty() {
        let cli = Cli::parse_from(["program"]);
        assert_eq!(SortCommand::new(cli).render(), Ok("\n".to_string()));
    }

    // Tests invalid tokens fail without output
    // Verified by skipping unrecognized tokens
    #[test]
    fn test_render_invalid_token() {
        let cli = Cli::parse_from(["program", "work,hover"]);
        let rendered = SortCommand::new(cli).render();

        assert!(matches!(
            rendered,
            Err(PartError::InvalidPartKind { ref token, .. }) if token == "hover"
        ));
    }
}
