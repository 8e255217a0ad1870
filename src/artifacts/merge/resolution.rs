//! Conflict resolution policy
//!
//! A pure mapping from a chunk's own preferred action and the configured
//! bulk default to the concrete action a renderer applies. Resolution is a
//! separate phase: chunks stay immutable and the renderers read a parallel
//! vector of resolved actions keyed by chunk index.

use crate::artifacts::diff::Diff;
use crate::artifacts::diff::diff_item::PreferredActionTwoWay;
use crate::artifacts::diff3::{Diff3Item, PreferredActionThreeWay};
use clap::ValueEnum;

/// Bulk default for unresolved two-way chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DefaultActionTwoWay {
    /// Keep both sides, separated by conflict markers.
    #[default]
    WriteConflicts,
    /// Keep the local side of every unresolved chunk.
    RevertToLocal,
    /// Keep the remote side of every unresolved chunk.
    ApplyRemote,
}

/// Bulk default for unresolved three-way chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DefaultActionThreeWay {
    /// Keep conflicting sides, separated by conflict markers.
    #[default]
    WriteConflicts,
    /// Restore the base version of every unresolved conflict.
    RevertToBase,
    /// Keep the local side of every unresolved conflict.
    ApplyLocal,
    /// Keep the remote side of every unresolved conflict.
    ApplyRemote,
}

/// Concrete per-chunk action for the two-way renderer. `MarkConflicts`
/// means no side was picked: the chunk is written with conflict markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedActionTwoWay {
    MarkConflicts,
    ApplyLocal,
    ApplyRemote,
}

/// Concrete per-chunk action for the three-way renderer. `MarkConflicts`
/// means no side was picked: the chunk follows its differences status, and
/// a genuinely conflicting chunk is written with conflict markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedActionThreeWay {
    MarkConflicts,
    RevertToBase,
    ApplyLocal,
    ApplyRemote,
}

/// An already-set preferred action wins over the bulk default; this is how
/// an interactive resolution step overrides the configured policy.
pub fn resolve_two_way(
    preferred: PreferredActionTwoWay,
    default_action: DefaultActionTwoWay,
) -> ResolvedActionTwoWay {
    match preferred {
        PreferredActionTwoWay::ApplyLocal => ResolvedActionTwoWay::ApplyLocal,
        PreferredActionTwoWay::ApplyRemote => ResolvedActionTwoWay::ApplyRemote,
        PreferredActionTwoWay::Default => match default_action {
            DefaultActionTwoWay::WriteConflicts => ResolvedActionTwoWay::MarkConflicts,
            DefaultActionTwoWay::RevertToLocal => ResolvedActionTwoWay::ApplyLocal,
            DefaultActionTwoWay::ApplyRemote => ResolvedActionTwoWay::ApplyRemote,
        },
    }
}

pub fn resolve_three_way(
    preferred: PreferredActionThreeWay,
    default_action: DefaultActionThreeWay,
) -> ResolvedActionThreeWay {
    match preferred {
        PreferredActionThreeWay::RevertToBase => ResolvedActionThreeWay::RevertToBase,
        PreferredActionThreeWay::ApplyLocal => ResolvedActionThreeWay::ApplyLocal,
        PreferredActionThreeWay::ApplyRemote => ResolvedActionThreeWay::ApplyRemote,
        PreferredActionThreeWay::Default => match default_action {
            DefaultActionThreeWay::WriteConflicts => ResolvedActionThreeWay::MarkConflicts,
            DefaultActionThreeWay::RevertToBase => ResolvedActionThreeWay::RevertToBase,
            DefaultActionThreeWay::ApplyLocal => ResolvedActionThreeWay::ApplyLocal,
            DefaultActionThreeWay::ApplyRemote => ResolvedActionThreeWay::ApplyRemote,
        },
    }
}

/// Resolve every item of a two-way diff, keyed by item index.
pub fn resolve_all_two_way(
    diff: &Diff,
    default_action: DefaultActionTwoWay,
) -> Vec<ResolvedActionTwoWay> {
    diff.items()
        .iter()
        .map(|item| resolve_two_way(item.preferred_action, default_action))
        .collect()
}

/// Resolve every chunk of a three-way diff, keyed by chunk index.
pub fn resolve_all_three_way(
    items: &[Diff3Item],
    default_action: DefaultActionThreeWay,
) -> Vec<ResolvedActionThreeWay> {
    items
        .iter()
        .map(|item| resolve_three_way(item.preferred_action, default_action))
        .collect()
}
