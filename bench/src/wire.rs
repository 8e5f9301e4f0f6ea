//! Textual wire format: `n`, then `m`, then `m` whitespace-separated `u v` pairs.

use anyhow::{anyhow, Context, Result};
use euler_accel_core::input::{edge_from_signed, vertex_count_from_signed};
use euler_accel_core::Edge;

/// Cap on up-front allocation so a bogus edge count cannot reserve gigabytes.
const MAX_PREALLOCATED_EDGES: usize = 1 << 22;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireGraph {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
}

/// Parse a whole wire-format document. Tokens after the last edge are ignored.
pub fn parse(input: &str) -> Result<WireGraph> {
    let mut tokens = input.split_ascii_whitespace();

    let n = next_int(&mut tokens, "vertex count")?;
    let vertex_count = vertex_count_from_signed(n)?;

    let m = next_int(&mut tokens, "edge count")?;
    let edge_count =
        usize::try_from(m).map_err(|_| anyhow!("edge count must be non-negative, got {m}"))?;

    let mut edges = Vec::with_capacity(edge_count.min(MAX_PREALLOCATED_EDGES));
    for i in 0..edge_count {
        let from = next_int(&mut tokens, &format!("source of edge {i}"))?;
        let to = next_int(&mut tokens, &format!("target of edge {i}"))?;
        let edge = edge_from_signed(from, to, vertex_count).with_context(|| format!("edge {i}"))?;
        edges.push(edge);
    }

    Ok(WireGraph {
        vertex_count,
        edges,
    })
}

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<i64> {
    let token = tokens
        .next()
        .ok_or_else(|| anyhow!("unexpected end of input, expected {what}"))?;
    token
        .parse::<i64>()
        .with_context(|| format!("invalid {what}: '{token}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use euler_accel_core::EulerError;

    #[test]
    fn test_parse_basic() {
        let g = parse("5\n4\n0 1\n1 2\n2 3\n3 4\n").unwrap();
        assert_eq!(g.vertex_count, 5);
        assert_eq!(g.edges, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_parse_loose_whitespace() {
        let g = parse("  3 2   0 1\t\t1 2  ").unwrap();
        assert_eq!(g.edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_parse_empty_graph() {
        let g = parse("0\n0\n").unwrap();
        assert_eq!(g.vertex_count, 0);
        assert!(g.edges.is_empty());
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        let g = parse("2 1 0 1 9 9 9").unwrap();
        assert_eq!(g.edges, vec![(0, 1)]);
    }

    #[test]
    fn test_truncated_input() {
        let err = parse("3 2 0 1 1").unwrap_err();
        assert!(err.to_string().contains("target of edge 1"));
    }

    #[test]
    fn test_not_a_number() {
        assert!(parse("3 x").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_negative_vertex_count() {
        let err = parse("-1 0").unwrap_err();
        assert_eq!(
            err.downcast_ref::<EulerError>(),
            Some(&EulerError::InvalidVertex { vertex: -1, vertex_count: -1 })
        );
    }

    #[test]
    fn test_negative_edge_count() {
        assert!(parse("3 -2").is_err());
    }

    #[test]
    fn test_endpoint_out_of_range() {
        let err = parse("2 1 0 2").unwrap_err();
        assert_eq!(
            err.downcast_ref::<EulerError>(),
            Some(&EulerError::InvalidVertex { vertex: 2, vertex_count: 2 })
        );
    }
}
