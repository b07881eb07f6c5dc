//! Directed weighted graphs parsed from command files.
//!
//! A graph file is a sequence of commands, one per line:
//!
//! ```text
//! new graph
//! add vertex 1
//! add vertex 2
//! add edge 1 - 2 4
//! ```
//!
//! `add edge u - v` without a weight defaults to weight 1, and the compact
//! `add edge u-v` form is accepted too. Malformed lines and edges that
//! reference unknown vertices are collected as warnings and skipped rather
//! than aborting the parse.
//!
//! [`Graph`] keeps vertices in insertion order (ids map to dense indices)
//! and stores directed weighted edges. The adjacency-matrix view treats
//! edges as symmetric; shortest paths respect direction and use
//! Bellman–Ford, so negative edge weights are allowed and negative cycles
//! are detected.

use std::collections::HashMap;
use std::fmt::Write as _;

/// A directed weighted edge between dense vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

/// Errors raised when querying shortest paths.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("source vertex {0} not found in the graph")]
    UnknownSource(String),
    #[error("graph contains a negative-weight cycle")]
    NegativeCycle,
}

/// A graph with insertion-ordered vertices and a directed edge list.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex id and returns its dense index. Re-adding an
    /// existing id returns the original index.
    pub fn add_vertex(&mut self, id: &str) -> usize {
        if let Some(&existing) = self.index.get(id) {
            return existing;
        }
        let dense = self.ids.len();
        self.ids.push(id.to_string());
        self.index.insert(id.to_string(), dense);
        dense
    }

    /// Adds a directed edge between two registered vertices. Returns
    /// `false` if either endpoint is unknown.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&from), Some(&to)) => {
                self.edges.push(Edge { from, to, weight });
                true
            }
            _ => false,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Boolean adjacency matrix indexed by dense vertex order.
    ///
    /// The matrix view is symmetric: an edge in either direction marks
    /// both cells.
    pub fn adjacency_matrix(&self) -> Vec<Vec<bool>> {
        let n = self.ids.len();
        let mut matrix = vec![vec![false; n]; n];
        for edge in &self.edges {
            matrix[edge.from][edge.to] = true;
            matrix[edge.to][edge.from] = true;
        }
        matrix
    }

    /// Renders the adjacency matrix with vertex-id headers, `1` for an
    /// edge and `.` for none.
    pub fn render_matrix(&self) -> String {
        if self.ids.is_empty() {
            return "(empty graph)\n".to_string();
        }

        let matrix = self.adjacency_matrix();
        let mut out = String::new();

        out.push_str("    ");
        for id in &self.ids {
            let _ = write!(out, "{id:>4}");
        }
        out.push('\n');

        for (row, id) in self.ids.iter().enumerate() {
            let _ = write!(out, "{id:>4}");
            for &cell in &matrix[row] {
                out.push_str(if cell { "   1" } else { "   ." });
            }
            out.push('\n');
        }

        out
    }

    /// Single-source shortest paths via Bellman–Ford.
    ///
    /// Runs up to `V-1` relaxation passes over the edge list, stopping
    /// early once a pass changes nothing, then makes one extra pass to
    /// detect negative-weight cycles reachable from the source.
    pub fn bellman_ford(&self, source: &str) -> Result<ShortestPaths<'_>, GraphError> {
        let &source_index = self
            .index
            .get(source)
            .ok_or_else(|| GraphError::UnknownSource(source.to_string()))?;

        let n = self.ids.len();
        let mut dist: Vec<Option<i64>> = vec![None; n];
        let mut pred: Vec<Option<usize>> = vec![None; n];
        dist[source_index] = Some(0);

        for _ in 1..n {
            let mut updated = false;
            for edge in &self.edges {
                if let Some(from_dist) = dist[edge.from] {
                    let candidate = from_dist + edge.weight;
                    if dist[edge.to].is_none_or(|to_dist| candidate < to_dist) {
                        dist[edge.to] = Some(candidate);
                        pred[edge.to] = Some(edge.from);
                        updated = true;
                    }
                }
            }
            if !updated {
                break;
            }
        }

        // Pass V: any edge that still relaxes sits on a negative cycle.
        for edge in &self.edges {
            if let Some(from_dist) = dist[edge.from] {
                if dist[edge.to].is_none_or(|to_dist| from_dist + edge.weight < to_dist) {
                    return Err(GraphError::NegativeCycle);
                }
            }
        }

        Ok(ShortestPaths {
            graph: self,
            source: source_index,
            dist,
            pred,
        })
    }
}

/// Shortest-path distances and predecessor links from one source vertex.
#[derive(Debug)]
pub struct ShortestPaths<'g> {
    graph: &'g Graph,
    source: usize,
    dist: Vec<Option<i64>>,
    pred: Vec<Option<usize>>,
}

impl ShortestPaths<'_> {
    /// Id of the source vertex.
    pub fn source(&self) -> &str {
        &self.graph.ids[self.source]
    }

    /// Shortest distance to `id`, or `None` when `id` is unknown or
    /// unreachable.
    pub fn distance(&self, id: &str) -> Option<i64> {
        let &target = self.graph.index.get(id)?;
        self.dist[target]
    }

    /// The source-to-`id` path as vertex ids, or `None` when unreachable.
    pub fn path_to(&self, id: &str) -> Option<Vec<&str>> {
        let &target = self.graph.index.get(id)?;
        self.dist[target]?;

        let mut path = Vec::new();
        let mut at = Some(target);
        while let Some(vertex) = at {
            path.push(self.graph.ids[vertex].as_str());
            if vertex == self.source {
                break;
            }
            at = self.pred[vertex];
        }

        path.reverse();
        Some(path)
    }
}

/// Result of parsing a command file: the graphs plus any per-line
/// warnings for skipped input.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub graphs: Vec<Graph>,
    pub warnings: Vec<String>,
}

/// Parses a command file into graphs.
///
/// Blank lines are skipped. Commands outside a `new graph` block,
/// unrecognized commands, malformed edges, and edges naming unknown
/// vertices each produce a warning carrying the 1-based line number.
pub fn parse_commands(lines: &[String]) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut current: Option<Graph> = None;

    for (offset, raw) in lines.iter().enumerate() {
        let lineno = offset + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("new graph") {
            if let Some(finished) = current.take() {
                outcome.graphs.push(finished);
            }
            current = Some(Graph::new());
        } else if let Some(rest) = line.strip_prefix("add vertex") {
            let id = rest.trim();
            match current.as_mut() {
                Some(graph) if !id.is_empty() => {
                    graph.add_vertex(id);
                }
                Some(_) => outcome
                    .warnings
                    .push(format!("line {lineno}: vertex with empty id")),
                None => outcome
                    .warnings
                    .push(format!("line {lineno}: command before any 'new graph'")),
            }
        } else if let Some(rest) = line.strip_prefix("add edge") {
            let Some(graph) = current.as_mut() else {
                outcome
                    .warnings
                    .push(format!("line {lineno}: command before any 'new graph'"));
                continue;
            };
            match parse_edge(rest) {
                Some((from, to, weight)) => {
                    if !graph.add_edge(from, to, weight) {
                        outcome.warnings.push(format!(
                            "line {lineno}: edge references undefined vertices: {line}"
                        ));
                    }
                }
                None => outcome
                    .warnings
                    .push(format!("line {lineno}: invalid edge format: {line}")),
            }
        } else {
            outcome
                .warnings
                .push(format!("line {lineno}: unrecognized command: {line}"));
        }
    }

    if let Some(finished) = current.take() {
        outcome.graphs.push(finished);
    }

    outcome
}

/// Accepts `u - v`, `u - v <weight>`, and the compact `u-v`.
fn parse_edge(rest: &str) -> Option<(&str, &str, i64)> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    match tokens.as_slice() {
        [pair] => {
            let (from, to) = pair.split_once('-')?;
            if from.is_empty() || to.is_empty() {
                return None;
            }
            Some((from, to, 1))
        }
        [from, "-", to] => Some((*from, *to, 1)),
        [from, "-", to, weight] => {
            let weight = weight.parse().ok()?;
            Some((*from, *to, weight))
        }
        _ => None,
    }
}
