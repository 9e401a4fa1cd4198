//! Console narration of step events.

use stepgraph_common::types::WeightedEdge;
use stepgraph_core::algorithms::{StepEvent, StepKind, StepObserver, StepState};

use super::distance_table;

/// Prints each step as it happens; path runs also get the table after
/// every step.
#[derive(Debug, Default)]
pub struct Narrator;

impl StepObserver<String> for Narrator {
    fn on_step(&mut self, event: &StepEvent<String>) {
        println!("{}", describe(event));
        if let Some(table) = event.table() {
            println!("{}", distance_table(table));
        }
    }
}

fn arc(edge: &WeightedEdge<String>) -> String {
    format!("{}->{} (weight: {})", edge.from, edge.to, edge.weight)
}

/// One line of narration for an event.
pub fn describe(event: &StepEvent<String>) -> String {
    let prefix = match (event.kind, event.pass) {
        (StepKind::Converged, _) | (_, None) => format!("Step {}", event.step),
        (_, Some(pass)) => format!("Step {} (pass {pass})", event.step),
    };

    let body = match (event.kind, event.edge.as_ref(), &event.state) {
        (StepKind::Init, _, StepState::Tree { .. }) => match &event.node {
            Some(start) => format!("start growing the tree from {start}"),
            None => "sort the edges by weight".to_string(),
        },
        (StepKind::Init, _, StepState::Paths(table)) => {
            format!("source {} at distance 0, every other node unreachable", table.source())
        }
        (StepKind::EdgeAdded, Some(edge), StepState::Tree { total_weight, .. }) => {
            format!("add edge {edge}, tree weight is now {total_weight}")
        }
        (StepKind::EdgeScannedNoUpdate, Some(edge), StepState::Tree { .. }) => {
            format!("discard edge {edge}, it would close a cycle")
        }
        (StepKind::NodeSelected, _, _) => match &event.node {
            Some(node) => format!("select node {node}"),
            None => "select node".to_string(),
        },
        (StepKind::DistanceUpdated, Some(edge), StepState::Paths(table)) => {
            let distance = table.distance(&edge.to).unwrap_or_default();
            format!("relax {}, distance of {} is now {distance}", arc(edge), edge.to)
        }
        (StepKind::EdgeScannedNoUpdate, Some(edge), StepState::Paths(_)) => {
            format!("check {}, no improvement", arc(edge))
        }
        (StepKind::Converged, _, _) => match event.pass {
            Some(pass) => format!("no change in pass {pass}, finished early"),
            None => "no change, finished early".to_string(),
        },
        (kind, _, _) => format!("{kind:?}"),
    };

    format!("{prefix}: {body}")
}
