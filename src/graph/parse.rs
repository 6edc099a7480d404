//! Line-based adjacency-list parsing.
//!
//! Each line is `"start end [weight]"` with a default weight of 1. Endpoint
//! vertices are created on first sight. In undirected mode every line also
//! produces the reverse edge, so a 3-line cycle yields 6 edges.

use tracing::debug;

use crate::error::GraphError;
use crate::graph::directed::DirectedGraph;

/// Parses adjacency-list lines into a fresh graph.
///
/// Blank lines are skipped. With `directed` set to `false`, the reverse of
/// every edge is inserted as well.
///
/// # Errors
/// [`GraphError::MalformedLine`] for a line with fewer than two labels,
/// [`GraphError::InvalidWeight`] for a non-integer weight.
///
/// # Examples
/// ```
/// use trellis::graph::parse_adjacency_list;
///
/// let graph = parse_adjacency_list(["1 2", "2 3 10"], true)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), trellis::GraphError>(())
/// ```
pub fn parse_adjacency_list<'a, I>(lines: I, directed: bool) -> Result<DirectedGraph<String>, GraphError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut graph = DirectedGraph::new();
    parse_into(&mut graph, lines, directed)?;
    Ok(graph)
}

/// Parses adjacency-list lines into an existing graph.
///
/// Same line format and error behavior as [`parse_adjacency_list`].
///
/// # Errors
/// [`GraphError::MalformedLine`], [`GraphError::InvalidWeight`].
pub fn parse_into<'a, I>(
    graph: &mut DirectedGraph<String>,
    lines: I,
    directed: bool,
) -> Result<(), GraphError>
where
    I: IntoIterator<Item = &'a str>,
{
    for (number, line) in lines.into_iter().enumerate() {
        let line_number = number + 1;
        let mut labels = line.split_whitespace();

        let Some(start) = labels.next() else {
            continue; // blank line
        };
        let Some(end) = labels.next() else {
            return Err(GraphError::MalformedLine { line: line_number });
        };
        let weight = match labels.next() {
            Some(raw) => raw.parse().map_err(|source| GraphError::InvalidWeight {
                line: line_number,
                source,
            })?,
            None => 1,
        };

        let start = start.to_string();
        let end = end.to_string();
        if !graph.contains_vertex(&start) {
            graph.set_vertex(start.clone());
        }
        if !graph.contains_vertex(&end) {
            graph.set_vertex(end.clone());
        }

        graph.set_edge(&start, &end, weight)?;
        if !directed {
            graph.set_edge(&end, &start, weight)?;
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed adjacency list"
    );
    Ok(())
}
