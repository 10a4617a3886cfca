//! Cell occupancy during a placement search.

use super::OverlapPolicy;
use super::search::Candidate;

/// Letter and owner count per cell, indexed row-major.
#[derive(Debug, Clone)]
pub(super) struct Occupancy {
    size: usize,
    letters: Vec<Option<u8>>,
    owners: Vec<u8>,
}

impl Occupancy {
    pub(super) fn new(size: usize) -> Self {
        Self {
            size,
            letters: vec![None; size * size],
            owners: vec![0; size * size],
        }
    }

    fn indices(&self, candidate: Candidate, len: usize) -> impl Iterator<Item = usize> + '_ {
        (0..len).map(move |i| {
            candidate
                .start
                .step(candidate.direction, i)
                .index(self.size)
        })
    }

    /// Whether `word` fits at `candidate` under `policy`.
    pub(super) fn accepts(&self, word: &[u8], candidate: Candidate, policy: OverlapPolicy) -> bool {
        self.indices(candidate, word.len())
            .zip(word)
            .all(|(idx, &letter)| match self.letters[idx] {
                None => true,
                Some(existing) => policy == OverlapPolicy::OverlapAllowed && existing == letter,
            })
    }

    pub(super) fn place(&mut self, word: &[u8], candidate: Candidate) {
        let cells: Vec<usize> = self.indices(candidate, word.len()).collect();
        for (idx, &letter) in cells.into_iter().zip(word) {
            self.letters[idx] = Some(letter);
            self.owners[idx] += 1;
        }
    }

    pub(super) fn remove(&mut self, word: &[u8], candidate: Candidate) {
        let cells: Vec<usize> = self.indices(candidate, word.len()).collect();
        for idx in cells {
            self.owners[idx] = self.owners[idx].saturating_sub(1);
            if self.owners[idx] == 0 {
                self.letters[idx] = None;
            }
        }
    }

    #[cfg(test)]
    pub(super) fn occupied(&self) -> usize {
        self.letters.iter().filter(|l| l.is_some()).count()
    }
}
