//! Procedure optimizer: fold repeated instruction runs into child procedures.
//!
//! For each child slot in turn, every distinct run of two or more
//! instructions is collected with its greedy, non-overlapping, left-to-right
//! occurrences. A run qualifies with one or more occurrences, and an
//! occurrence must end before the final instruction (the planner's `Exit`
//! always stays in the root). The run that saves the most root slots becomes
//! the child body and its occurrences are replaced by the call marker.
//!
//! # Candidate order
//!
//! Saving `len * occ - occ` descending, then length descending, then the
//! earliest first occurrence, then instruction codes in lexicographic order.
//! Runs longer than the slot's capacity are skipped.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use tracing::{debug, instrument, warn};

use tilebot_kernel::program::{Instruction, Procedure, ProcedureId};

use crate::error::OptimizeError;

/// Something the caller should know about an otherwise valid result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizeWarning {
    /// The root still holds more instructions than its capacity.
    RootOverCapacity { len: usize, capacity: usize },
}

impl std::fmt::Display for OptimizeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootOverCapacity { len, capacity } => {
                write!(f, "root holds {len} instructions, capacity is {capacity}")
            }
        }
    }
}

/// Optimizer output: one procedure per capacity slot, ids `0..N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimized {
    pub procedures: Vec<Procedure>,
    pub warnings: Vec<OptimizeWarning>,
}

impl Optimized {
    /// Procedure in slot `id`, if the capacity vector had that slot.
    #[must_use]
    pub fn procedure(&self, id: ProcedureId) -> Option<&Procedure> {
        self.procedures.get(id.index())
    }

    /// Total instructions over all procedures.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.procedures.iter().map(Procedure::len).sum()
    }
}

/// A repeated run and where it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    run: Vec<Instruction>,
    occurrences: Vec<usize>,
}

impl Candidate {
    fn saving(&self) -> usize {
        let occ = self.occurrences.len();
        self.run.len() * occ - occ
    }

    fn rank(&self) -> (usize, usize, Reverse<usize>, Reverse<Vec<u8>>) {
        (
            self.saving(),
            self.run.len(),
            Reverse(self.occurrences.first().copied().unwrap_or(usize::MAX)),
            Reverse(self.run.iter().map(|i| i.code()).collect()),
        )
    }
}

/// Split `raw` into at most `capacities.len()` procedures.
///
/// # Errors
///
/// - [`OptimizeError::NoCapacities`] for an empty capacity vector.
/// - [`OptimizeError::TooManyCapacities`] for more slots than call markers
///   can reach.
/// - [`OptimizeError::RecursionMarkerInInput`] if `raw` holds a call marker.
#[instrument(level = "debug", skip_all, fields(raw = raw.len(), slots = capacities.len()))]
pub fn optimize(raw: &[Instruction], capacities: &[usize]) -> Result<Optimized, OptimizeError> {
    if capacities.is_empty() {
        return Err(OptimizeError::NoCapacities);
    }
    if capacities.len() > ProcedureId::ALL.len() {
        return Err(OptimizeError::TooManyCapacities {
            count: capacities.len(),
        });
    }
    if let Some((index, &instruction)) = raw.iter().enumerate().find(|(_, i)| i.is_call()) {
        return Err(OptimizeError::RecursionMarkerInInput { index, instruction });
    }

    let slots: Vec<ProcedureId> = ProcedureId::ALL[..capacities.len()].to_vec();
    let mut procedures: Vec<Procedure> = slots.iter().map(|&id| Procedure::empty(id)).collect();

    // Nothing calls a child, so a short list must fit the root whole. An
    // overflow goes through folding and surfaces as `RootOverCapacity`.
    if raw.len() <= capacities.len() && raw.len() <= capacities[0] {
        procedures[0] = Procedure::new(ProcedureId::Root, raw.to_vec());
        return Ok(Optimized {
            procedures,
            warnings: Vec::new(),
        });
    }

    let mut list = raw.to_vec();
    for (&slot, &capacity) in slots.iter().zip(capacities).skip(1) {
        let Some(call) = Instruction::call_for(slot) else {
            continue;
        };
        let Some(best) = select(&list, capacity, slot) else {
            debug!(%slot, "no repeated run fits");
            continue;
        };
        debug!(
            %slot,
            len = best.run.len(),
            occurrences = best.occurrences.len(),
            saving = best.saving(),
            "folding run"
        );
        for &start in best.occurrences.iter().rev() {
            list.drain(start..start + best.run.len());
            list.insert(start, call);
        }
        procedures[slot.index()] = Procedure::new(slot, best.run);
    }

    let mut warnings = Vec::new();
    if list.len() > capacities[0] {
        warn!(len = list.len(), capacity = capacities[0], "root over capacity");
        warnings.push(OptimizeWarning::RootOverCapacity {
            len: list.len(),
            capacity: capacities[0],
        });
    }
    procedures[0] = Procedure::new(ProcedureId::Root, list);

    Ok(Optimized {
        procedures,
        warnings,
    })
}

fn select(list: &[Instruction], capacity: usize, slot: ProcedureId) -> Option<Candidate> {
    let mut ranked = repeated_runs(list);
    ranked.sort_by_key(|c| Reverse(c.rank()));
    for candidate in ranked {
        if candidate.run.len() <= capacity {
            return Some(candidate);
        }
        debug!(
            %slot,
            len = candidate.run.len(),
            capacity,
            "run too long for slot"
        );
    }
    None
}

/// Every distinct run of length >= 2 with at least one occurrence.
fn repeated_runs(list: &[Instruction]) -> Vec<Candidate> {
    let mut runs: BTreeMap<&[Instruction], Vec<usize>> = BTreeMap::new();
    for start in 0..list.len() {
        for end in (start + 2)..=list.len() {
            let run = &list[start..end];
            if runs.contains_key(run) {
                continue;
            }
            let occurrences = occurrences(list, run);
            if !occurrences.is_empty() {
                runs.insert(run, occurrences);
            }
        }
    }
    runs.into_iter()
        .map(|(run, occurrences)| Candidate {
            run: run.to_vec(),
            occurrences,
        })
        .collect()
}

/// Greedy left-to-right, non-overlapping matches that end before the final
/// instruction.
fn occurrences(list: &[Instruction], run: &[Instruction]) -> Vec<usize> {
    let mut found = Vec::new();
    let mut i = 0;
    while i + run.len() < list.len() {
        if &list[i..i + run.len()] == run {
            found.push(i);
            i += run.len();
        } else {
            i += 1;
        }
    }
    found
}
