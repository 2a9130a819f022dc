// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Independent replay of a completion order.
//!
//! [`verify_order`] does not share any logic with the checker's pass loop:
//! it walks a proposed order once, granting each process its need from
//! what is free and releasing its allocation afterwards. It is used to
//! audit orders produced by the checker or supplied by a caller.

use crate::OrderViolation;
use resource_state::{ProcessId, Snapshot};

/// Checks that `order` is a valid admission sequence for `snapshot`.
///
/// The order must list every process exactly once, and each process's
/// need must fit in `available` plus everything released by the processes
/// before it.
///
/// # Example
/// ```
/// use resource_state::Snapshot;
/// use safety_checker::verify_order;
///
/// let snap = Snapshot::new(
///     vec![vec![0], vec![1]],
///     vec![vec![2], vec![2]],
///     vec![1],
/// ).unwrap();
///
/// assert!(verify_order(&snap, &[1, 0]).is_ok());
/// assert!(verify_order(&snap, &[0, 1]).is_err());
/// ```
pub fn verify_order(snapshot: &Snapshot, order: &[ProcessId]) -> Result<(), OrderViolation> {
    let process_count = snapshot.process_count();
    if order.len() != process_count {
        return Err(OrderViolation::WrongLength {
            expected: process_count,
            actual: order.len(),
        });
    }

    let mut seen = vec![false; process_count];
    let mut free = snapshot.available().to_vec();

    for (position, &process) in order.iter().enumerate() {
        if process >= process_count {
            return Err(OrderViolation::OutOfRange { position, process });
        }
        if seen[process] {
            return Err(OrderViolation::Duplicate { position, process });
        }
        seen[process] = true;

        let shortfall = snapshot
            .need(process)
            .iter()
            .zip(&free)
            .enumerate()
            .find(|(_, (need, free))| need > free);
        if let Some((resource, (&need, &available))) = shortfall {
            return Err(OrderViolation::InsufficientResources {
                position,
                process,
                resource,
                need,
                available,
            });
        }

        for (f, held) in free.iter_mut().zip(snapshot.allocation(process)) {
            *f += held;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> Snapshot {
        Snapshot::new(
            vec![
                vec![0, 1, 0],
                vec![2, 0, 0],
                vec![3, 0, 2],
                vec![2, 1, 1],
                vec![0, 0, 2],
            ],
            vec![
                vec![7, 5, 3],
                vec![3, 2, 2],
                vec![9, 0, 2],
                vec![2, 2, 2],
                vec![4, 3, 3],
            ],
            vec![3, 3, 2],
        )
        .unwrap()
    }

    #[test]
    fn test_textbook_orders_accepted() {
        let snap = textbook();
        assert_eq!(verify_order(&snap, &[1, 3, 4, 0, 2]), Ok(()));
        assert_eq!(verify_order(&snap, &[3, 1, 0, 4, 2]), Ok(()));
        assert_eq!(verify_order(&snap, &[1, 3, 0, 2, 4]), Ok(()));
    }

    #[test]
    fn test_insufficient_resources() {
        let snap = textbook();
        assert_eq!(
            verify_order(&snap, &[0, 1, 2, 3, 4]),
            Err(OrderViolation::InsufficientResources {
                position: 0,
                process: 0,
                resource: 0,
                need: 7,
                available: 3,
            })
        );
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            verify_order(&textbook(), &[1, 3]),
            Err(OrderViolation::WrongLength {
                expected: 5,
                actual: 2
            })
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            verify_order(&textbook(), &[1, 3, 4, 0, 9]),
            Err(OrderViolation::OutOfRange {
                position: 4,
                process: 9
            })
        );
    }

    #[test]
    fn test_duplicate() {
        assert_eq!(
            verify_order(&textbook(), &[1, 3, 1, 0, 2]),
            Err(OrderViolation::Duplicate {
                position: 2,
                process: 1
            })
        );
    }

    #[test]
    fn test_violation_message() {
        let err = verify_order(&textbook(), &[2, 1, 3, 4, 0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "position 0: P2 needs 6 of resource 0, only 3 free"
        );
    }
}
