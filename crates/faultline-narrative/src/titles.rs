//! Narrative title generation.

use faultline_core::signal::Signal;

/// Title for a narrative whose anchor is `members[0]`.
pub fn narrative_title(members: &[&Signal]) -> String {
    let Some(anchor) = members.first() else {
        return String::new();
    };
    let label = anchor.signal_type.label();

    if members.len() == 1 {
        return format!("Isolated {label} Signal");
    }

    let homogeneous = members.iter().all(|s| s.signal_type == anchor.signal_type);
    if homogeneous {
        format!("{label} Cascade ({} signals)", members.len())
    } else {
        format!("{label}-Led Convergence ({} signals)", members.len())
    }
}
