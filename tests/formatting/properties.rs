#[cfg(test)]
mod verify {
    use renumber::formatting::*;
    use renumber::language::*;

    fn comments() -> LineNumberOptions {
        LineNumberOptions::new().with(LineNumberOption::LeadingComments)
    }

    fn stretching() -> LineNumberOptions {
        LineNumberOptions::new().with(LineNumberOption::Stretched)
    }

    fn both() -> LineNumberOptions {
        [LineNumberOption::LeadingComments, LineNumberOption::Stretched]
            .into_iter()
            .collect()
    }

    /// Pull the number out of a leading `/*NN*/` comment, if it has one.
    fn leading_number(line: &str) -> Option<usize> {
        let inner = line.strip_prefix("/*")?;
        let end = inner.find("*/")?;
        inner[..end]
            .trim()
            .parse()
            .ok()
    }

    fn samples() -> Vec<(&'static str, Vec<Position>)> {
        vec![
            (
                "package a;\n\nclass B {\n    void c() { d(); e(); }\n\n\n    int f;\n}\n",
                vec![
                    Position::new(1, 1, 1),
                    Position::new(3, 3, 1),
                    Position::new(4, 4, 5),
                    Position::new(5, 4, 16),
                    Position::new(6, 4, 21),
                    Position::new(12, 7, 5),
                ],
            ),
            (
                "a\nb\nc\nd\ne\nf\n",
                vec![
                    Position::new(1, 2, 1),
                    Position::new(2, 4, 1),
                    Position::new(3, 6, 1),
                ],
            ),
            ("x\n\n\ny\nz\n", vec![Position::new(3, 1, 1), Position::new(4, 4, 1)]),
            (
                "a\nb\nc\nd\ne\n",
                vec![
                    Position::new(5, 1, 1),
                    Position::new(2, 2, 1),
                    Position::new(3, 3, 1),
                    Position::new(4, 4, 1),
                    Position::new(5, 5, 1),
                ],
            ),
            (
                "x\ny\nz\n",
                vec![
                    Position::new(1, 1, 1),
                    Position::new(1, 2, 1),
                    Position::new(2, 3, 1),
                ],
            ),
            ("only\n", vec![]),
        ]
    }

    #[test]
    fn annotation_keeps_line_count() {
        for (content, positions) in samples() {
            let lines: Vec<&str> = content
                .lines()
                .collect();
            let split = split_lines(&lines, &positions).unwrap();

            let result = reformat_text(content, &positions, comments()).unwrap();
            assert_eq!(
                result
                    .lines()
                    .count(),
                split
                    .lines
                    .len()
            );

            // stripping the comments leaves the split lines untouched
            let width = max_line_number(&split.positions)
                .to_string()
                .len()
                + 4;
            let stripped: Vec<&str> = result
                .lines()
                .map(|line| &line[width..])
                .collect();
            assert_eq!(stripped, split.lines);
        }
    }

    #[test]
    fn numbers_follow_positions() {
        for (content, positions) in samples() {
            let lines: Vec<&str> = content
                .lines()
                .collect();
            let split = split_lines(&lines, &positions).unwrap();
            let expected: Vec<usize> = split
                .positions
                .iter()
                .map(|position| position.original_line)
                .collect();

            for options in [comments(), both()] {
                let result = reformat_text(content, &positions, options).unwrap();
                let found: Vec<usize> = result
                    .lines()
                    .filter_map(leading_number)
                    .collect();
                assert_eq!(found, expected);
            }
        }
    }

    #[test]
    fn stretching_twice_changes_nothing() {
        for (content, positions) in samples() {
            let lines: Vec<&str> = content
                .lines()
                .collect();
            let split = split_lines(&lines, &positions).unwrap();
            let first = stretch(&split.lines, &split.positions, stretching()).unwrap();
            let text = render(&first.emits, 0, false);

            let again: Vec<String> = text
                .lines()
                .map(|line| line.to_string())
                .collect();
            let second = stretch(&again, &first.positions, stretching()).unwrap();

            assert!(second
                .emits
                .iter()
                .all(|emit| matches!(emit, Emit::Line { .. })));
            assert_eq!(second.positions, first.positions);
            assert_eq!(render(&second.emits, 0, false), text);
        }
    }

    #[test]
    fn stretching_aligns_markers() {
        let content = "a\nb\nc\nd\ne\nf\n";
        let positions = vec![
            Position::new(1, 2, 1),
            Position::new(2, 4, 1),
            Position::new(5, 6, 1),
        ];

        let result = reformat_text(content, &positions, both()).unwrap();
        assert_eq!(result, "/*1*/a  b\n/*2*/c  d\n/* */e\n/* */\n/*5*/f\n");
    }

    #[test]
    fn blank_lines_removed_before_joining() {
        let content = "a\n\nb\n\n\nc\nd\n";
        let positions = vec![Position::new(1, 1, 1), Position::new(4, 7, 1)];

        let result = reformat_text(content, &positions, stretching()).unwrap();
        assert_eq!(result, "a\nb\nc\nd\n");

        // only two blank lines available for a deficit of three
        let content = "a\n\nb\n\nc\n";
        let positions = vec![Position::new(1, 1, 1), Position::new(2, 5, 1)];

        let result = reformat_text(content, &positions, stretching()).unwrap();
        assert_eq!(result, "a\nb  c\n");
    }

    #[test]
    fn joining_as_last_resort() {
        let content = "x\ny\n";
        let positions = vec![Position::new(1, 2, 1)];

        let result = reformat_text(content, &positions, stretching()).unwrap();
        assert_eq!(result, "x  y\n");

        let result = reformat_text(content, &positions, both()).unwrap();
        assert_eq!(result, "/*1*/x  y\n");
    }

    #[test]
    fn late_markers_are_not_merged() {
        let content = "x\ny\nz\n";
        let positions = vec![
            Position::new(1, 1, 1),
            Position::new(1, 2, 1),
            Position::new(2, 3, 1),
        ];

        let result = reformat_text(content, &positions, both()).unwrap();
        assert_eq!(result, "/*1*/x\n/*1*/y\n/*2*/z\n");

        let content = "a\nb\nc\nd\ne\n";
        let positions = vec![
            Position::new(5, 1, 1),
            Position::new(2, 2, 1),
            Position::new(3, 3, 1),
            Position::new(4, 4, 1),
            Position::new(5, 5, 1),
        ];

        let result = reformat_text(content, &positions, both()).unwrap();
        assert_eq!(
            result,
            "/* */\n/* */\n/* */\n/* */\n/*5*/a\n/*2*/b\n/*3*/c\n/*4*/d\n/*5*/e\n"
        );
    }

    #[test]
    fn joined_text_is_preserved() {
        let content = "one(\n    two,\n    three);\n";
        let positions = vec![Position::new(1, 3, 1)];

        let result = reformat_text(content, &positions, stretching()).unwrap();
        assert_eq!(result, "one(      two,      three);\n");

        let original: String = content
            .split_whitespace()
            .collect();
        let joined: String = result
            .split_whitespace()
            .collect();
        assert_eq!(joined, original);
    }

    #[test]
    fn malformed_positions_fail_fast() {
        let content = "a\nb\n";

        let result = reformat_text(content, &[Position::new(1, 3, 1)], both());
        assert_eq!(result, Err(PositionError::PastEndOfFile(0, 2)));

        let positions = vec![Position::new(1, 2, 1), Position::new(2, 1, 1)];
        let result = reformat_text(content, &positions, both());
        assert_eq!(result, Err(PositionError::OutOfOrder(1)));
    }
}
