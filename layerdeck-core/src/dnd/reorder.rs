//! Same-container reordering
//!
//! A drop inside one container moves the dragged layer to the slot of the
//! layer it was dropped on. The new relative order of that container is
//! then written back into the global order: members of the container keep
//! the set of global slots they held before, every other layer keeps its
//! own slot.

use std::collections::HashSet;

use crate::models::LayerId;

/// Moves the element at `from` to `to`, shifting the elements in between.
///
/// Out-of-range indices leave the slice unchanged.
pub fn array_move<T>(items: &mut [T], from: usize, to: usize) {
    if from >= items.len() || to >= items.len() {
        return;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
}

/// Computes the global layer order after dropping `active` onto `over`
/// inside a container listing `container_items`.
///
/// Returns `global_order` unchanged when `active == over` or when either
/// id is not in the container.
#[must_use]
pub fn compute_order(
    global_order: &[LayerId],
    container_items: &[LayerId],
    active: &LayerId,
    over: &LayerId,
) -> Vec<LayerId> {
    if active == over {
        return global_order.to_vec();
    }
    let (Some(from), Some(to)) = (
        container_items.iter().position(|id| id == active),
        container_items.iter().position(|id| id == over),
    ) else {
        tracing::debug!(%active, %over, "Reorder target not in container, ignoring");
        return global_order.to_vec();
    };

    let mut moved = container_items.to_vec();
    array_move(&mut moved, from, to);

    let members: HashSet<&LayerId> = container_items.iter().collect();
    let mut replacements = moved.into_iter();
    global_order
        .iter()
        .map(|id| {
            if members.contains(id) {
                replacements.next().unwrap_or_else(|| id.clone())
            } else {
                id.clone()
            }
        })
        .collect()
}
