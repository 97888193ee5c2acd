use arcblend::math::{point, Point};

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number { src: String, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Expected a y coordinate after x = {x}.")]
    OddCoordinateCount { x: f32, line: i32, column: i32 },
}

// A buffered iterator of characters keeping track of line and column.
pub struct Source<Iter> {
    src: Iter,
    current: char,
    line: i32,
    col: i32,
    finished: bool,
}

impl<Iter: Iterator<Item = char>> Source<Iter> {
    pub fn new<IntoIter>(src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        let mut src = src.into_iter();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let line = if current == '\n' { 1 } else { 0 };

        Source {
            current,
            finished,
            src,
            line,
            col: 0,
        }
    }

    // Whitespace, commas and comments up to the end of the line.
    fn skip_separators(&mut self) {
        while !self.finished {
            if self.current == '#' {
                while !self.finished && self.current != '\n' {
                    self.advance_one();
                }
            } else if self.current.is_whitespace() || self.current == ',' {
                self.advance_one();
            } else {
                break;
            }
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }
}

/// Parses a list of points.
///
/// # Syntax
///
/// Numbers separated by whitespace and/or commas, read two by two as the x
/// and y coordinates of the points. A `#` starts a comment that runs to the
/// end of the line.
///
/// ```text
/// # A triangle.
/// 0, 0
/// 100, 0
/// 50 80
/// ```
#[derive(Debug, Default)]
pub struct PointParser {
    float_buffer: String,
}

impl PointParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<Iter>(&mut self, src: &mut Source<Iter>) -> Result<Vec<Point>, ParseError>
    where
        Iter: Iterator<Item = char>,
    {
        let mut points = Vec::new();

        src.skip_separators();
        while !src.finished {
            let line = src.line;
            let column = src.col;
            let x = self.parse_number(src)?;

            src.skip_separators();
            if src.finished {
                return Err(ParseError::OddCoordinateCount { x, line, column });
            }

            let y = self.parse_number(src)?;
            points.push(point(x, y));

            src.skip_separators();
        }

        Ok(points)
    }

    fn parse_number(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<f32, ParseError> {
        self.float_buffer.clear();

        src.skip_separators();

        let line = src.line;
        let column = src.col;

        if src.current == '-' || src.current == '+' {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        while src.current.is_ascii_digit() {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        if src.current == '.' {
            self.float_buffer.push('.');
            src.advance_one();

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        if src.current == 'e' || src.current == 'E' {
            self.float_buffer.push(src.current);
            src.advance_one();

            if src.current == '-' || src.current == '+' {
                self.float_buffer.push(src.current);
                src.advance_one();
            }

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        // A number must be followed by a separator.
        let at_separator = src.finished
            || src.current.is_whitespace()
            || src.current == ','
            || src.current == '#';
        if !at_separator {
            self.float_buffer.push(src.current);
        }

        match self.float_buffer.parse::<f32>() {
            Ok(val) if at_separator => Ok(val),
            _ => Err(ParseError::Number {
                src: std::mem::take(&mut self.float_buffer),
                line,
                column,
            }),
        }
    }
}

/// Parses a list of points from a string.
pub fn parse_points(src: &str) -> Result<Vec<Point>, ParseError> {
    PointParser::new().parse(&mut Source::new(src.chars()))
}

#[test]
fn empty() {
    assert_eq!(parse_points(""), Ok(Vec::new()));
    assert_eq!(parse_points("  \n, "), Ok(Vec::new()));
    assert_eq!(parse_points("# nothing here\n"), Ok(Vec::new()));
}

#[test]
fn separators() {
    let expected = vec![point(0.0, 0.0), point(100.0, -20.5), point(1.5e2, 3.0)];

    assert_eq!(parse_points("0 0 100 -20.5 1.5e2 3").unwrap(), expected);
    assert_eq!(parse_points("0,0,100,-20.5,1.5e2,3").unwrap(), expected);
    assert_eq!(
        parse_points("0, 0\n100, -20.5\n\t150 +3.0\n").unwrap(),
        expected
    );
}

#[test]
fn comments() {
    let src = "# A triangle.\n0 0 # origin\n100 0\n# 1 1\n50 80";
    assert_eq!(
        parse_points(src).unwrap(),
        vec![point(0.0, 0.0), point(100.0, 0.0), point(50.0, 80.0)]
    );
}

#[test]
fn invalid_number() {
    assert_eq!(
        parse_points("0 0\n10 abc"),
        Err(ParseError::Number {
            src: "a".to_string(),
            line: 1,
            column: 3,
        })
    );

    assert!(matches!(
        parse_points("1 2 3x 4"),
        Err(ParseError::Number { line: 0, column: 4, .. })
    ));
}

#[test]
fn odd_coordinate_count() {
    assert_eq!(
        parse_points("0 0\n1 1\n  2"),
        Err(ParseError::OddCoordinateCount {
            x: 2.0,
            line: 2,
            column: 2,
        })
    );
}

#[test]
fn error_messages() {
    let err = parse_points("1 2 3").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Line 0 Column 4: Expected a y coordinate after x = 3."
    );
}
