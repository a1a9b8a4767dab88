//! Intermediate parameter ids for curated parameters.
//!
//! Official exports enumerate parameters, so ids are looked up positionally
//! after translating the curated JVM index. Legacy exports do not, so ids
//! are rebuilt from the owning method's id (or constructor id) and the JVM
//! index.

use tracing::debug;

use super::ExportMode;
use crate::base::{constructor_parameter_id, method_parameter_id, method_tag};
use crate::curated::ParameterData;
use crate::mapping::Method;
use crate::mapping::descriptor::jvm_index_to_slot;

/// What the curated parameters belong to.
#[derive(Clone, Copy, Debug)]
pub enum ParameterOwner<'a> {
    /// A method present in the composed mapping.
    Method(&'a Method),
    /// A legacy constructor, identified by its side-table id.
    Constructor(&'a str),
}

/// Intermediate ids for `parameters`, index-aligned with the input.
///
/// `None` marks a parameter that cannot be correlated with an intermediate
/// id and must be skipped.
pub fn parameter_ids(
    mode: ExportMode,
    owner: ParameterOwner<'_>,
    parameters: &[ParameterData],
) -> Vec<Option<String>> {
    match (mode, owner) {
        (ExportMode::Official, ParameterOwner::Method(method)) => official_ids(method, parameters),
        (ExportMode::Official, ParameterOwner::Constructor(id)) => {
            debug!(
                constructor = id,
                "official exports enumerate constructors; skipping side-table parameters"
            );
            vec![None; parameters.len()]
        }
        (ExportMode::Legacy, ParameterOwner::Constructor(id)) => parameters
            .iter()
            .map(|p| Some(constructor_parameter_id(id, p.index)))
            .collect(),
        (ExportMode::Legacy, ParameterOwner::Method(method)) => match method_tag(&method.mapped) {
            Some(tag) => parameters
                .iter()
                .map(|p| Some(method_parameter_id(tag, p.index)))
                .collect(),
            None => {
                debug!(
                    method = %method.original,
                    mapped = %method.mapped,
                    "method id has no generated tag; skipping parameters"
                );
                vec![None; parameters.len()]
            }
        },
    }
}

fn official_ids(method: &Method, parameters: &[ParameterData]) -> Vec<Option<String>> {
    if parameters.len() != method.parameters.len() {
        debug!(
            method = %method.original,
            descriptor = %method.descriptor,
            curated = parameters.len(),
            intermediate = method.parameters.len(),
            "parameter counts differ; skipping parameters"
        );
        return vec![None; parameters.len()];
    }

    parameters
        .iter()
        .map(|p| {
            let slot = jvm_index_to_slot(&method.descriptor, p.index, method.is_static());
            let id = method.parameters.get(slot).map(|param| param.mapped.clone());
            if id.is_none() {
                debug!(
                    method = %method.original,
                    index = p.index,
                    slot,
                    "parameter index past the end of the intermediate list; skipping"
                );
            }
            id
        })
        .collect()
}
