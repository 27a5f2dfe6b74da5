//! Points-file loading.
//!
//! Format: a leading integer N, then N whitespace-separated coordinate
//! pairs in any literal form `exact::parse_rat` accepts. Content past the
//! N-th pair is ignored.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::exact::parse_rat;
use crate::geom::Point;

/// Parse a point list from text.
pub fn parse_points(input: &str) -> Result<Vec<Point>, Error> {
    let mut tokens = input.split_whitespace();
    let head = tokens
        .next()
        .ok_or_else(|| Error::Parse("empty points input, expected a leading count".into()))?;
    let n: usize = head
        .parse()
        .map_err(|_| Error::Parse(format!("invalid point count `{head}`")))?;
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let x = next_coord(&mut tokens, i, n, "x")?;
        let y = next_coord(&mut tokens, i, n, "y")?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

fn next_coord<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    index: usize,
    total: usize,
    axis: &str,
) -> Result<crate::exact::Rat, Error> {
    let tok = tokens.next().ok_or_else(|| {
        Error::Parse(format!(
            "expected {total} points but input ended at point {index}"
        ))
    })?;
    parse_rat(tok)
        .map_err(|e| Error::Parse(format!("point {index}, {axis} coordinate `{tok}`: {e}")))
}

/// Read and parse a points file.
pub fn load_points(path: &Path) -> Result<Vec<Point>, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_points(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::{rat, ratio};
    use std::io::Write;

    #[test]
    fn parses_count_then_pairs() {
        let pts = parse_points("3\n0 0\n2 0\n1/2 -0.5\n").unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], Point::new(rat(0), rat(0)));
        assert_eq!(pts[2], Point::new(ratio(1, 2), ratio(-1, 2)));
    }

    #[test]
    fn ignores_trailing_tokens() {
        let pts = parse_points("1 4 5 these tokens are ignored").unwrap();
        assert_eq!(pts, vec![Point::new(rat(4), rat(5))]);
    }

    #[test]
    fn zero_count_is_an_empty_point_set() {
        assert!(parse_points("0").unwrap().is_empty());
    }

    #[test]
    fn rejects_truncated_and_malformed_input() {
        assert!(matches!(parse_points(""), Err(Error::Parse(_))));
        assert!(matches!(parse_points("x"), Err(Error::Parse(_))));
        assert!(matches!(parse_points("2 1 1"), Err(Error::Parse(_))));
        assert!(matches!(parse_points("1 1 oops"), Err(Error::Parse(_))));
    }

    #[test]
    fn load_points_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "2\n0 0\n2 0\n").unwrap();
        let pts = load_points(file.path()).unwrap();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1], Point::new(rat(2), rat(0)));
    }

    #[test]
    fn missing_file_is_file_unreadable() {
        let err = load_points(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, Error::FileUnreadable { .. }));
    }
}
