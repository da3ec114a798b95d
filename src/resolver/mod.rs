//! Dependency-ordered assembly of the fragment registry.
//!
//! Assembly turns a list of [`FragmentDef`]s into a fully resolved [`Registry`].
//!
//! # Build Plan
//!
//! Ordering is computed from the recipes, never from declaration order alone:
//!
//! 1. **Uniqueness**: every fragment name appears once in the input list
//! 2. **Closure**: every input named by a recipe is itself a listed fragment
//! 3. **Acyclicity**: the input graph has no cycle; a cycle is reported with its path
//! 4. **Tiers**: a fragment without inputs is tier 0, any other fragment is one more
//!    than its deepest input
//!
//! Fragments are then built tier by tier, ties broken by declaration order, so the same
//! input list always yields the same build sequence.
//!
//! # Execution
//!
//! Each fragment is built against the registry as it stands and inserted exactly once.
//! A recipe that asks for a name the registry does not hold yet fails with
//! [`GrammarError::UnresolvedFragment`]; the plan makes that impossible for a valid
//! catalog, so the check only guards against ordering bugs.

pub mod dependency_graph;
pub mod registry;

pub use dependency_graph::DependencyGraph;
pub use registry::Registry;

use std::collections::HashSet;

use crate::core::GrammarError;
use crate::fragments::FragmentDef;

/// One scheduled fragment build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFragment {
    /// Position in the input list
    pub index: usize,
    pub name: String,
    pub tier: usize,
    /// Direct inputs, in order of first use
    pub inputs: Vec<String>,
}

/// Validated build order for a fragment list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildPlan {
    steps: Vec<PlannedFragment>,
}

impl BuildPlan {
    /// Steps in execution order.
    pub fn steps(&self) -> &[PlannedFragment] {
        &self.steps
    }

    /// Number of distinct tiers in the plan.
    pub fn tier_count(&self) -> usize {
        self.steps.iter().map(|s| s.tier + 1).max().unwrap_or(0)
    }
}

/// Compute the build order for `defs`.
///
/// # Errors
///
/// - [`GrammarError::DuplicateFragment`] if two definitions share a name
/// - [`GrammarError::UnresolvedFragment`] if a recipe names an unknown fragment
/// - [`GrammarError::CircularDependency`] if the inputs form a cycle
pub fn plan(defs: &[FragmentDef]) -> Result<BuildPlan, GrammarError> {
    let mut seen = HashSet::new();
    for def in defs {
        if !seen.insert(def.name.as_str()) {
            return Err(GrammarError::DuplicateFragment {
                name: def.name.clone(),
            });
        }
    }

    let mut graph = DependencyGraph::new();
    for def in defs {
        graph.add_fragment(&def.name);
    }
    for def in defs {
        for input in def.dependencies() {
            if !seen.contains(input.as_str()) {
                return Err(GrammarError::UnresolvedFragment {
                    fragment: def.name.clone(),
                    missing: input,
                });
            }
            graph.add_dependency(&def.name, &input);
        }
    }

    let tiers = graph.tiers()?;

    let mut steps: Vec<PlannedFragment> = defs
        .iter()
        .enumerate()
        .map(|(index, def)| PlannedFragment {
            index,
            name: def.name.clone(),
            tier: tiers.get(&def.name).copied().unwrap_or(0),
            inputs: def.dependencies(),
        })
        .collect();
    steps.sort_by_key(|s| (s.tier, s.index));

    Ok(BuildPlan {
        steps,
    })
}

/// Build every fragment of `defs` into a fresh registry.
///
/// # Errors
///
/// Any error from [`plan`], and any error raised by a recipe while building.
pub fn assemble(defs: &[FragmentDef]) -> Result<Registry, GrammarError> {
    let plan = plan(defs)?;
    tracing::debug!("Assembling {} fragments in {} tiers", defs.len(), plan.tier_count());

    let mut registry = Registry::new();
    for step in plan.steps() {
        let def = &defs[step.index];
        let text = def.build(&registry)?;
        tracing::debug!(
            "Built fragment {} (tier {}, {}, {} bytes)",
            def.name,
            step.tier,
            def.recipe,
            text.len()
        );
        registry.insert(def.name.clone(), text)?;
    }

    Ok(registry)
}
