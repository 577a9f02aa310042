//! Transition graphs of tennis scores.

use crate::{player::Player, score::Score, scoring::score_point};
use fnv::{FnvBuildHasher, FnvHashSet};
use indexmap::IndexMap;
use petgraph::{
    algo::dijkstra,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use std::collections::VecDeque;

/// A graph of scores reachable from a start score where each edge is a point
/// won by a player.
#[derive(Clone, Debug)]
pub struct ScoreGraph {
    graph: DiGraph<Score, Player>,
    nodes: IndexMap<Score, NodeIndex, FnvBuildHasher>,
}

impl ScoreGraph {
    pub fn new(start: Score) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = IndexMap::<Score, NodeIndex, FnvBuildHasher>::default();
        let mut queue = VecDeque::new();

        let index = graph.add_node(start);
        nodes.insert(start, index);
        queue.push_back((start, index));

        while let Some((score, source)) = queue.pop_front() {
            for player in [Player::one(), Player::two()] {
                let next = score_point(&score, &player);
                let target = *nodes.entry(next).or_insert_with(|| {
                    let index = graph.add_node(next);
                    queue.push_back((next, index));
                    index
                });

                graph.add_edge(source, target, player);
            }
        }

        Self { graph, nodes }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns scores in breadth-first discovery order.
    pub fn scores(&self) -> impl Iterator<Item = &Score> {
        self.nodes.keys()
    }

    pub fn contains(&self, score: &Score) -> bool {
        self.nodes.contains_key(score)
    }

    pub fn transition(&self, score: &Score, player: &Player) -> Option<Score> {
        self.graph
            .edges(*self.nodes.get(score)?)
            .find(|edge| edge.weight() == player)
            .map(|edge| self.graph[edge.target()])
    }

    /// Returns the fewest points needed to move from one score to another.
    pub fn distance(&self, from: &Score, to: &Score) -> Option<usize> {
        let from = *self.nodes.get(from)?;
        let to = *self.nodes.get(to)?;

        dijkstra(&self.graph, from, Some(to), |_| 1)
            .get(&to)
            .copied()
    }

    pub fn graph(&self) -> &DiGraph<Score, Player> {
        &self.graph
    }
}

pub fn reachable_scores(start: Score) -> FnvHashSet<Score> {
    ScoreGraph::new(start).scores().copied().collect()
}
