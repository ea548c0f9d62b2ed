//! Edge-list text format.
//!
//! ```text
//! // optional comments
//! 4
//! 0 1
//! 1 2
//! ```
//! The first meaningful line holds the node count, every further line one
//! edge `u v`. Blank lines and lines starting with `//` are skipped. Edges go
//! through `Graph::try_add_edge`, so bad ids, self-loops and duplicates are
//! reported with their line number.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::graph::Graph;

fn parse_number(token: &str, line: usize, what: &str) -> Result<usize, LoadError> {
    token.parse().map_err(|_| LoadError::Parse {
        line,
        reason: format!("expected {what}, found {token:?}"),
    })
}

pub fn parse_graph(text: &str) -> Result<Graph, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with("//"));

    let Some((line, first)) = lines.next() else {
        return Err(LoadError::MissingNodeCount);
    };
    let mut graph = Graph::new(parse_number(first, line, "a node count")?);

    for (line, content) in lines {
        let mut tokens = content.split_whitespace();
        let (Some(u), Some(v), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(LoadError::Parse {
                line,
                reason: format!("expected two node ids, found {content:?}"),
            });
        };
        let u = parse_number(u, line, "a node id")?;
        let v = parse_number(v, line, "a node id")?;
        graph
            .try_add_edge(u, v)
            .map_err(|source| LoadError::Graph { line, source })?;
    }
    Ok(graph)
}

pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph, LoadError> {
    parse_graph(&fs::read_to_string(path)?)
}
