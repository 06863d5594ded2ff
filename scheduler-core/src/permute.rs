//! Permutation Enumerator (`spec.md` §4.2): the set of stage orderings
//! consistent with each stage's `is_fixed` flag.

#[cfg(test)]
#[path = "../tests/unit/permute_test.rs"]
mod permute_test;

use crate::models::problem::Stage;

/// Each returned `Vec<usize>` has length `stages.len()` and gives, per
/// output position, the index into `stages` of the stage placed there.
/// A stage marked `is_fixed` always occupies its original index in every
/// returned ordering. Orderings are emitted in lexicographic order of the
/// permutation of non-fixed indices.
pub fn enumerate_orderings(stages: &[Stage]) -> Vec<Vec<usize>> {
    let movable: Vec<usize> = stages.iter().enumerate().filter(|(_, s)| !s.is_fixed).map(|(i, _)| i).collect();

    if movable.is_empty() {
        return vec![(0..stages.len()).collect()];
    }

    let mut results = Vec::new();
    let mut used = vec![false; movable.len()];
    let mut current = Vec::with_capacity(movable.len());
    permute_recursive(&movable, &mut used, &mut current, &mut results);

    results
        .into_iter()
        .map(|assignment| {
            let mut order: Vec<usize> = (0..stages.len()).collect();
            for (slot, original) in movable.iter().zip(assignment.into_iter()) {
                order[*slot] = original;
            }
            order
        })
        .collect()
}

fn permute_recursive(movable: &[usize], used: &mut [bool], current: &mut Vec<usize>, results: &mut Vec<Vec<usize>>) {
    if current.len() == movable.len() {
        results.push(current.clone());
        return;
    }
    for (i, &candidate) in movable.iter().enumerate() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(candidate);
        permute_recursive(movable, used, current, results);
        current.pop();
        used[i] = false;
    }
}
