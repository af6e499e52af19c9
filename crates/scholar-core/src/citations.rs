// Rust guideline compliant 2026-10-16

//! Citation graph module for impact metrics and citation chains.
//!
//! Publications are identified by opaque strings. The graph never checks them
//! against a publication store: any identifier may cite or be cited, and
//! queries on identifiers the graph has never seen return empty results.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// Depth bound used by [`CitationGraph::find_chain`].
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// A directed citation from one publication to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationEdge {
    /// The publication doing the citing.
    pub citing_id: String,
    /// The publication being cited.
    pub cited_id: String,
    /// The sentence or paragraph where the citation appears.
    #[serde(default)]
    pub context: String,
}

/// Directed graph of citation relationships between publications.
///
/// Edges are append-only. Parallel edges and self-citations are kept as
/// separate entries, so counts and adjacency lists include duplicates.
#[derive(Debug, Clone, Default)]
pub struct CitationGraph {
    /// All citation edges in insertion order.
    edges: Vec<CitationEdge>,
    /// Petgraph directed graph; node weights are publication IDs and edge
    /// weights are positions in `edges`.
    graph: DiGraph<String, usize>,
    /// Map of publication IDs to their NodeIndex in the graph.
    id_to_node: HashMap<String, NodeIndex>,
    /// Nodes in the order they first received an incoming citation.
    cited_order: Vec<NodeIndex>,
}

impl CitationGraph {
    /// Creates an empty citation graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by adding every edge in order.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = CitationEdge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_citation_with_context(edge.citing_id, edge.cited_id, edge.context);
        }
        graph
    }

    /// Returns the number of citation edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no citation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns all citation edges in insertion order.
    pub fn edges(&self) -> &[CitationEdge] {
        &self.edges
    }

    /// Adds a citation edge with an empty context.
    pub fn add_citation(
        &mut self,
        citing_id: impl Into<String>,
        cited_id: impl Into<String>,
    ) -> &CitationEdge {
        self.add_citation_with_context(citing_id, cited_id, String::new())
    }

    /// Adds a citation edge.
    ///
    /// # Arguments
    ///
    /// * `citing_id` - The publication doing the citing
    /// * `cited_id` - The publication being cited
    /// * `context` - The citation context text
    ///
    /// # Returns
    ///
    /// The created edge.
    pub fn add_citation_with_context(
        &mut self,
        citing_id: impl Into<String>,
        cited_id: impl Into<String>,
        context: impl Into<String>,
    ) -> &CitationEdge {
        let citing_id = citing_id.into();
        let cited_id = cited_id.into();

        let from_idx = self.node_index(&citing_id);
        let to_idx = self.node_index(&cited_id);

        if self
            .graph
            .edges_directed(to_idx, Direction::Incoming)
            .next()
            .is_none()
        {
            self.cited_order.push(to_idx);
        }

        let position = self.edges.len();
        self.graph.add_edge(from_idx, to_idx, position);

        tracing::debug!(citing = %citing_id, cited = %cited_id, "added citation");

        self.edges.push(CitationEdge {
            citing_id,
            cited_id,
            context: context.into(),
        });
        &self.edges[position]
    }

    /// Returns how many times a publication has been cited.
    ///
    /// Unknown identifiers have a count of zero.
    pub fn get_citation_count(&self, pub_id: &str) -> usize {
        self.id_to_node
            .get(pub_id)
            .map(|&node| self.graph.edges_directed(node, Direction::Incoming).count())
            .unwrap_or(0)
    }

    /// Returns IDs of publications cited by the given publication.
    ///
    /// Order follows edge insertion; repeated citations appear repeatedly.
    pub fn get_references(&self, pub_id: &str) -> Vec<String> {
        self.adjacent_ids(pub_id, Direction::Outgoing)
    }

    /// Returns IDs of publications that cite the given publication.
    ///
    /// Order follows edge insertion; repeated citations appear repeatedly.
    pub fn get_citers(&self, pub_id: &str) -> Vec<String> {
        self.adjacent_ids(pub_id, Direction::Incoming)
    }

    /// Computes the citation count of every cited publication.
    ///
    /// # Returns
    ///
    /// `(pub_id, count)` pairs sorted by count descending. Publications with
    /// equal counts stay in the order they were first cited. Publications
    /// that were never cited are omitted.
    pub fn compute_impact(&self) -> Vec<(String, usize)> {
        let mut impact: Vec<(String, usize)> = self
            .cited_order
            .iter()
            .map(|&node| {
                let count = self.graph.edges_directed(node, Direction::Incoming).count();
                (self.graph[node].clone(), count)
            })
            .collect();

        // Stable sort keeps first-cited order among ties.
        impact.sort_by(|a, b| b.1.cmp(&a.1));
        impact
    }

    /// Finds a citation chain using the default depth bound.
    ///
    /// See [`CitationGraph::find_chain_within`].
    pub fn find_chain(&self, start_id: &str, end_id: &str) -> Option<Vec<String>> {
        self.find_chain_within(start_id, end_id, DEFAULT_MAX_DEPTH)
    }

    /// Finds the shortest citation chain from `start_id` to `end_id`.
    ///
    /// Breadth-first search over outgoing citations. A partial chain is only
    /// extended while it holds at most `max_depth` publications, so a returned
    /// chain has at most `max_depth + 1` entries. Among equally short chains the
    /// one following earlier-inserted citations wins.
    ///
    /// # Arguments
    ///
    /// * `start_id` - Starting publication
    /// * `end_id` - Target publication
    /// * `max_depth` - Maximum chain length to search
    ///
    /// # Returns
    ///
    /// The publication IDs forming the chain, `[start_id]` when both ends are
    /// the same publication, or `None` if no chain exists within the bound.
    pub fn find_chain_within(
        &self,
        start_id: &str,
        end_id: &str,
        max_depth: usize,
    ) -> Option<Vec<String>> {
        if start_id == end_id {
            return Some(vec![start_id.to_string()]);
        }

        let start = *self.id_to_node.get(start_id)?;
        let end = *self.id_to_node.get(end_id)?;

        let mut parents: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut visited: HashSet<NodeIndex> = HashSet::from([start]);
        let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::from([(start, 1)]);

        while let Some((current, path_len)) = queue.pop_front() {
            if path_len > max_depth {
                continue;
            }

            for neighbor in self.successors(current) {
                if neighbor == end {
                    let mut chain = self.trace_back(&parents, current);
                    chain.push(self.graph[end].clone());
                    tracing::debug!(start = start_id, end = end_id, len = chain.len(), "found citation chain");
                    return Some(chain);
                }
                if visited.insert(neighbor) {
                    parents.insert(neighbor, current);
                    queue.push_back((neighbor, path_len + 1));
                }
            }
        }

        tracing::debug!(start = start_id, end = end_id, max_depth, "no citation chain");
        None
    }

    /// Returns the node for `id`, creating it on first use.
    fn node_index(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.id_to_node.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.id_to_node.insert(id.to_string(), idx);
        idx
    }

    /// Positions in `edges` touching `node` in `direction`, ascending.
    fn edge_positions(&self, node: NodeIndex, direction: Direction) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .graph
            .edges_directed(node, direction)
            .map(|edge| *edge.weight())
            .collect();
        positions.sort_unstable();
        positions
    }

    fn adjacent_ids(&self, pub_id: &str, direction: Direction) -> Vec<String> {
        let Some(&node) = self.id_to_node.get(pub_id) else {
            return Vec::new();
        };

        self.edge_positions(node, direction)
            .into_iter()
            .map(|position| {
                let edge = &self.edges[position];
                match direction {
                    Direction::Outgoing => edge.cited_id.clone(),
                    Direction::Incoming => edge.citing_id.clone(),
                }
            })
            .collect()
    }

    fn successors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut targets: Vec<(usize, NodeIndex)> = self
            .graph
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| (*edge.weight(), edge.target()))
            .collect();
        targets.sort_unstable_by_key(|(position, _)| *position);
        targets.into_iter().map(|(_, target)| target).collect()
    }

    /// Rebuilds the chain ending at `node` from the parent map.
    fn trace_back(&self, parents: &HashMap<NodeIndex, NodeIndex>, mut node: NodeIndex) -> Vec<String> {
        let mut chain = vec![self.graph[node].clone()];
        while let Some(&parent) = parents.get(&node) {
            chain.push(self.graph[parent].clone());
            node = parent;
        }
        chain.reverse();
        chain
    }
}
