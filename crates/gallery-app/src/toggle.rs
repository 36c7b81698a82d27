//! Toggle state machine for the ordering controls
//!
//! Clicking a control that is not active selects it, ascending and
//! ungrouped. Clicking the active control again walks a closed four-state
//! cycle over `(direction, grouped)`:
//!
//! ```text
//! (Asc, flat) -> (Desc, flat) -> (Asc, grouped) -> (Desc, grouped) -> (Asc, flat)
//! ```
//!
//! The secondary control (the alternate click on the date control) flips only
//! the secondary direction, and only while the date key is active. The date
//! comparator orders by `direction` alone, so the flip is recorded and shown
//! (`s↑`/`s↓`) but never reorders items. Selecting a grouping key resets
//! `secondary` to ascending, so items within a group are always oldest first.

use gallery_core::{Direction, OrderKey, SortSpec};

/// A user action on the ordering controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Primary click on an ordering control
    Order(OrderKey),
    /// Alternate click on the date control
    Secondary,
}

/// Next `(direction, grouped)` pair in the same-control cycle
pub fn next_cycle_state(direction: Direction, grouped: bool) -> (Direction, bool) {
    match (direction, grouped) {
        (Direction::Asc, false) => (Direction::Desc, false),
        (Direction::Desc, false) => (Direction::Asc, true),
        (Direction::Asc, true) => (Direction::Desc, true),
        (Direction::Desc, true) => (Direction::Asc, false),
    }
}

/// Spec after a primary click on `clicked`
pub fn next_spec(current: &SortSpec, clicked: &OrderKey) -> SortSpec {
    if &current.order != clicked {
        return SortSpec::new(clicked.clone()).normalized();
    }

    let (direction, grouped) = next_cycle_state(current.direction, current.grouped);
    SortSpec {
        order: current.order.clone(),
        direction,
        grouped,
        secondary: current.secondary,
    }
    .normalized()
}

/// Spec after an alternate click on the date control
///
/// No-op unless the date key is active. Has no effect on item order.
pub fn flip_secondary(current: &SortSpec) -> SortSpec {
    if !current.order.is_date() {
        return current.clone();
    }
    SortSpec {
        secondary: current.secondary.flip(),
        ..current.clone()
    }
}

/// Apply any control action
pub fn transition(current: &SortSpec, control: &Control) -> SortSpec {
    match control {
        Control::Order(key) => next_spec(current, key),
        Control::Secondary => flip_secondary(current),
    }
}
