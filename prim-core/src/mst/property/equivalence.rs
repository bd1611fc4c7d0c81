//! Property 1: agreement with the reference oracles.
//!
//! Prim's total weight and edge count must match the Kruskal forest
//! restricted to vertex 0's component. For tiny connected graphs both must
//! also match the exhaustive minimum.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::prim;

use super::oracle::{brute_force_minimum, sequential_kruskal};
use super::types::MstFixture;

/// Runs the Kruskal equivalence property for `fixture`.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let tree = prim(&fixture.graph());
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    if tree.total_weight() != oracle.root_component_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: prim={}, kruskal={} ({})",
            tree.total_weight(),
            oracle.root_component_weight,
            fixture.describe(),
        )));
    }

    if tree.edges().len() != oracle.root_component_edges {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: prim={}, kruskal={} ({})",
            tree.edges().len(),
            oracle.root_component_edges,
            fixture.describe(),
        )));
    }

    if oracle.component_count == 1 && !tree.is_spanning() {
        return Err(TestCaseError::fail(format!(
            "connected input but prim reached {} of {} vertices ({})",
            tree.reached_count(),
            fixture.vertex_count,
            fixture.describe(),
        )));
    }

    Ok(())
}

/// Runs the exhaustive minimality property for a tiny `fixture`.
pub(super) fn run_brute_force_property(fixture: &MstFixture) -> TestCaseResult {
    let Some(minimum) = brute_force_minimum(fixture.vertex_count, &fixture.edges) else {
        // Disconnected inputs are covered by the Kruskal property.
        return Ok(());
    };

    let weight = prim(&fixture.graph()).total_weight();
    if weight != minimum {
        return Err(TestCaseError::fail(format!(
            "prim weight {weight} is not the minimum {minimum} ({})",
            fixture.describe(),
        )));
    }

    let kruskal = sequential_kruskal(fixture.vertex_count, &fixture.edges).forest_weight;
    if kruskal != minimum {
        return Err(TestCaseError::fail(format!(
            "oracle weight {kruskal} is not the minimum {minimum} ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
