//! Binary search over the id-sorted record sequence.

use std::cmp::Ordering;

use crate::models::Patient;

/// Locate the index of the record with the given identifier.
///
/// Precondition: `patients` is sorted ascending by `patient_id`. The store
/// assigns ids in strictly increasing order and never reuses them, so its
/// backing slice always satisfies this.
pub fn find_by_id(patients: &[Patient], patient_id: u32) -> Option<usize> {
    let mut lo = 0;
    let mut hi = patients.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match patients[mid].patient_id.cmp(&patient_id) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}
