//! Individual placement stages run against the shared remaining-count table
//!
//! Each stage removes what it places from the table, so later stages only
//! see what earlier ones left behind. The stages are independent apart
//! from that table.

use crate::parts::kind::PartKind;
use crate::parts::layout::PartLayout;
use crate::parts::multiset::PartMultiset;
use std::iter;

/// Reserve the parts placed at the very end of the sequence
///
/// One instance of every layout kind other than MOVE, `RANGED_ATTACK` and
/// TOUGH, in first-occurrence order, followed by one MOVE and one
/// `RANGED_ATTACK` when any remain. TOUGH is never buried.
pub fn extract_buried(remaining: &mut PartMultiset, layout: &PartLayout) -> Vec<PartKind> {
    let mut buried = Vec::new();
    for &kind in layout.unique_kinds() {
        if matches!(
            kind,
            PartKind::Move | PartKind::RangedAttack | PartKind::Tough
        ) {
            continue;
        }
        if remaining.take_one(kind) {
            buried.push(kind);
        }
    }

    for kind in [PartKind::Move, PartKind::RangedAttack] {
        if remaining.take_one(kind) {
            buried.push(kind);
        }
    }

    buried
}

/// Take every remaining TOUGH for the front of the sequence
pub fn extract_front_tough(remaining: &mut PartMultiset) -> Vec<PartKind> {
    repeat_kind(PartKind::Tough, remaining.take_all(PartKind::Tough))
}

/// Take the larger half of the remaining MOVE parts
///
/// An odd count rounds towards this block.
pub fn extract_front_move(remaining: &mut PartMultiset) -> Vec<PartKind> {
    let half = remaining.count(PartKind::Move).div_ceil(2);
    repeat_kind(PartKind::Move, remaining.take(PartKind::Move, half))
}

/// Take the MOVE parts placed just before the buried block
///
/// Empty when ranged attack parts are present; the leftover MOVE parts
/// then take part in the layout interleave instead.
pub fn extract_rear_move(remaining: &mut PartMultiset, has_ranged_attack: bool) -> Vec<PartKind> {
    if has_ranged_attack {
        return Vec::new();
    }
    repeat_kind(PartKind::Move, remaining.take_all(PartKind::Move))
}

/// Emit parts round-robin following the layout template
///
/// Each scan walks the whole template and emits one instance of every kind
/// with supply left. Scanning stops after a scan that emits nothing, so at
/// most one scan per remaining part runs. MOVE only takes part when
/// `has_ranged_attack` is set.
pub fn interleave_layout(
    remaining: &mut PartMultiset,
    layout: &PartLayout,
    has_ranged_attack: bool,
) -> Vec<PartKind> {
    let mut interleaved = Vec::new();
    loop {
        let before = interleaved.len();
        for &kind in layout.parts() {
            if !has_ranged_attack && kind == PartKind::Move {
                continue;
            }
            if remaining.take_one(kind) {
                interleaved.push(kind);
            }
        }
        if interleaved.len() == before {
            break;
        }
    }
    interleaved
}

/// Drain everything left, grouped by kind in canonical order
pub fn collect_leftover(remaining: &mut PartMultiset) -> Vec<PartKind> {
    PartKind::ALL
        .into_iter()
        .flat_map(|kind| repeat_kind(kind, remaining.take_all(kind)))
        .collect()
}

fn repeat_kind(kind: PartKind, count: usize) -> Vec<PartKind> {
    iter::repeat_n(kind, count).collect()
}
