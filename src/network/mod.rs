// src/network/mod.rs

//! Concept nodes and the links drawn between them.
//!
//! Each node carries its own independent [`QubitState`]. A link is a purely
//! visual strength in `[0, 1]` attached to a pair of nodes: it never touches
//! either node's state and there is no joint state space behind it.
//!
//! A [`Network`] is an explicit value owned by the caller. The UI mutates it
//! and the narrative layer reads a [`NetworkSnapshot`] of it.

use crate::bloch::{BlochVector, bloch_coordinates};
use crate::circuits::Circuit;
use crate::core::{Measurement, NodeId, Outcome, QnodeError, QnodeResult, QubitState};
use crate::operations::{Gate, apply_gate};
use crate::simulation::{Simulator, probability_of_one};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A node representing one abstract concept.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptNode {
    id: NodeId,
    concept: String,
    state: QubitState,
    /// Gates applied since creation or the last reset.
    history: Vec<Gate>,
    last_outcome: Option<Outcome>,
}

impl ConceptNode {
    fn new(id: NodeId, concept: String) -> Self {
        Self { id, concept, state: QubitState::ZERO, history: Vec::new(), last_outcome: None }
    }

    /// The node's identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The concept label shown in the UI.
    pub fn concept(&self) -> &str {
        &self.concept
    }

    /// Current state.
    pub fn state(&self) -> &QubitState {
        &self.state
    }

    /// Gates applied since creation or the last reset.
    pub fn history(&self) -> &[Gate] {
        &self.history
    }

    /// Outcome of the most recent measurement, if any.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }
}

/// A cosmetic link between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Lower node id of the pair.
    pub a: NodeId,
    /// Higher node id of the pair.
    pub b: NodeId,
    /// Visual strength in `[0, 1]`.
    pub strength: f64,
}

/// Owns the concept nodes and links of one session.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: BTreeMap<NodeId, ConceptNode>,
    /// Keyed by the ordered pair `(min, max)`.
    links: BTreeMap<(NodeId, NodeId), f64>,
    next_id: u64,
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node for `concept` in the `|0⟩` state and returns its id.
    pub fn add_node(&mut self, concept: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let node = ConceptNode::new(id, concept.into());
        tracing::debug!(%id, concept = node.concept(), "node added");
        self.nodes.insert(id, node);
        id
    }

    /// Removes a node along with every link touching it.
    pub fn remove_node(&mut self, id: NodeId) -> QnodeResult<ConceptNode> {
        let node = self.nodes.remove(&id).ok_or(QnodeError::UnknownNode(id))?;
        self.links.retain(|(a, b), _| *a != id && *b != id);
        tracing::debug!(%id, "node removed");
        Ok(node)
    }

    /// Looks up a node.
    pub fn node(&self, id: NodeId) -> QnodeResult<&ConceptNode> {
        self.nodes.get(&id).ok_or(QnodeError::UnknownNode(id))
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &ConceptNode> {
        self.nodes.values()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Applies `gate` to the node's state and records it in the node's history.
    pub fn apply_gate(&mut self, id: NodeId, gate: Gate) -> QnodeResult<&QubitState> {
        let node = self.node_mut(id)?;
        node.state = apply_gate(&node.state, gate);
        node.history.push(gate);
        tracing::debug!(%id, gate = gate.symbol(), "gate applied to node");
        Ok(&node.state)
    }

    /// Applies every gate of `circuit` to the node, in order.
    pub fn apply_circuit(&mut self, id: NodeId, circuit: &Circuit) -> QnodeResult<&QubitState> {
        let node = self.node_mut(id)?;
        node.state = circuit.apply(&node.state);
        node.history.extend_from_slice(circuit.gates());
        Ok(&node.state)
    }

    /// Measures the node; its state collapses to the canonical outcome state.
    pub fn measure_node(&mut self, id: NodeId, simulator: &mut Simulator) -> QnodeResult<Measurement> {
        let node = self.node_mut(id)?;
        let measurement = simulator.measure(&node.state)?;
        node.state = measurement.state;
        node.last_outcome = Some(measurement.outcome);
        tracing::debug!(%id, outcome = measurement.outcome.bit(), "node measured");
        Ok(measurement)
    }

    /// Puts the node back into `|0⟩` and clears its history and last outcome.
    pub fn reset_node(&mut self, id: NodeId) -> QnodeResult<()> {
        let node = self.node_mut(id)?;
        node.state = QubitState::ZERO;
        node.history.clear();
        node.last_outcome = None;
        Ok(())
    }

    /// Links two distinct nodes with a visual strength in `[0, 1]`.
    /// Linking an already linked pair replaces its strength.
    pub fn link(&mut self, a: NodeId, b: NodeId, strength: f64) -> QnodeResult<()> {
        self.node(a)?;
        self.node(b)?;
        if a == b {
            return Err(QnodeError::invalid_argument(format!("Cannot link {} to itself", a)));
        }
        if !(0.0..=1.0).contains(&strength) {
            return Err(QnodeError::invalid_argument(format!(
                "Link strength {} between {} and {} is outside [0, 1]",
                strength, a, b
            )));
        }
        self.links.insert(Self::pair(a, b), strength);
        tracing::debug!(%a, %b, strength, "nodes linked");
        Ok(())
    }

    /// Removes the link between `a` and `b`; returns its strength if one existed.
    pub fn unlink(&mut self, a: NodeId, b: NodeId) -> Option<f64> {
        self.links.remove(&Self::pair(a, b))
    }

    /// Strength of the link between `a` and `b`, if linked.
    pub fn link_strength(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.links.get(&Self::pair(a, b)).copied()
    }

    /// All links, ordered by node pair.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.links.iter().map(|(&(a, b), &strength)| Link { a, b, strength })
    }

    /// Read-only view of the whole configuration with derived probabilities
    /// and Bloch coordinates, for the narrative layer.
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            nodes: self
                .nodes
                .values()
                .map(|node| NodeSnapshot {
                    id: node.id,
                    concept: node.concept.clone(),
                    gates: node.history.clone(),
                    probability_of_one: probability_of_one(&node.state),
                    bloch: bloch_coordinates(&node.state),
                    last_outcome: node.last_outcome,
                })
                .collect(),
            links: self.links().collect(),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> QnodeResult<&mut ConceptNode> {
        self.nodes.get_mut(&id).ok_or(QnodeError::UnknownNode(id))
    }

    fn pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        (a.min(b), a.max(b))
    }
}

/// Derived view of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Node id.
    pub id: NodeId,
    /// Concept label.
    pub concept: String,
    /// Gates applied, oldest first.
    pub gates: Vec<Gate>,
    /// `|beta|²` of the current state.
    pub probability_of_one: f64,
    /// Bloch coordinates of the current state.
    pub bloch: BlochVector,
    /// Most recent measurement outcome.
    pub last_outcome: Option<Outcome>,
}

/// Derived view of a whole [`Network`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Nodes in id order.
    pub nodes: Vec<NodeSnapshot>,
    /// Links ordered by node pair.
    pub links: Vec<Link>,
}

impl fmt::Display for NetworkSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Network ({} nodes, {} links):", self.nodes.len(), self.links.len())?;
        for node in &self.nodes {
            let gates: Vec<&str> = node.gates.iter().map(|g| g.symbol()).collect();
            write!(
                f,
                "  {} '{}': P(1)={:.3} bloch={} gates=[{}]",
                node.id,
                node.concept,
                node.probability_of_one,
                node.bloch,
                gates.join(" ")
            )?;
            if let Some(outcome) = node.last_outcome {
                write!(f, " last={}", outcome)?;
            }
            writeln!(f)?;
        }
        for link in &self.links {
            writeln!(f, "  {} ~ {} strength {:.2}", link.a, link.b, link.strength)?;
        }
        Ok(())
    }
}
