use crate::error::CribError;
use crate::model::card::Card;

const MAX_POSITIONS: usize = 5;

/// Strictly increasing positions into a hand, two to five long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    positions: [usize; MAX_POSITIONS],
    len: usize,
}

impl Combination {
    pub fn positions(&self) -> &[usize] {
        &self.positions[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cards<'a>(&'a self, hand: &'a [Card]) -> impl Iterator<Item = Card> + 'a {
        self.positions().iter().map(move |&position| hand[position])
    }
}

/// Every subset of a four- or five-card hand's positions of size two and up.
///
/// Sizes are produced in ascending order and lexicographically within a
/// size. The whole-hand subset is only produced for five cards, where it
/// carries the cut: 11 combinations for four cards, 26 for five.
#[derive(Debug, Clone)]
pub struct Combinations {
    hand_len: usize,
    max_size: usize,
    current: Combination,
    fresh: bool,
}

impl Combinations {
    pub fn for_hand_len(hand_len: usize) -> Result<Self, CribError> {
        match hand_len {
            4 | 5 => Ok(Self::starting(hand_len)),
            actual => Err(CribError::InvalidHandSize {
                expected: "4 or 5",
                actual,
            }),
        }
    }

    pub(crate) fn starting(hand_len: usize) -> Self {
        let max_size = if hand_len == MAX_POSITIONS {
            MAX_POSITIONS
        } else {
            hand_len.min(4)
        };
        Self {
            hand_len,
            max_size,
            current: first_of_size(2),
            fresh: true,
        }
    }

    fn advance(&mut self) -> bool {
        let size = self.current.len;
        let positions = &mut self.current.positions;
        for slot in (0..size).rev() {
            if positions[slot] < self.hand_len - size + slot {
                positions[slot] += 1;
                for next in slot + 1..size {
                    positions[next] = positions[next - 1] + 1;
                }
                return true;
            }
        }
        if size < self.max_size {
            self.current = first_of_size(size + 1);
            return true;
        }
        false
    }
}

fn first_of_size(size: usize) -> Combination {
    let mut positions = [0; MAX_POSITIONS];
    for (slot, position) in positions.iter_mut().enumerate() {
        *position = slot;
    }
    Combination {
        positions,
        len: size,
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.max_size < 2 || self.current.len > self.max_size {
            return None;
        }
        if self.fresh {
            self.fresh = false;
            return Some(self.current);
        }
        if self.advance() {
            Some(self.current)
        } else {
            // Park past the end so later calls stay exhausted.
            self.current.len = self.max_size + 1;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Combinations;
    use crate::error::CribError;
    use std::collections::HashSet;

    fn collect(hand_len: usize) -> Vec<Vec<usize>> {
        Combinations::for_hand_len(hand_len)
            .unwrap()
            .map(|combo| combo.positions().to_vec())
            .collect()
    }

    #[test]
    fn four_cards_yield_eleven_subsets() {
        let combos = collect(4);
        assert_eq!(combos.len(), 11);
        assert!(combos.iter().all(|c| (2..=4).contains(&c.len())));
        assert_eq!(combos.last().unwrap(), &vec![0, 1, 2, 3]);
    }

    #[test]
    fn five_cards_yield_twenty_six_subsets() {
        let combos = collect(5);
        assert_eq!(combos.len(), 26);
        let by_size = |size: usize| combos.iter().filter(|c| c.len() == size).count();
        assert_eq!(by_size(2), 10);
        assert_eq!(by_size(3), 10);
        assert_eq!(by_size(4), 5);
        assert_eq!(by_size(5), 1);
    }

    #[test]
    fn subsets_are_unique_sorted_and_in_bounds() {
        for hand_len in [4, 5] {
            let combos = collect(hand_len);
            let unique: HashSet<_> = combos.iter().cloned().collect();
            assert_eq!(unique.len(), combos.len());
            for combo in &combos {
                assert!(combo.windows(2).all(|pair| pair[0] < pair[1]));
                assert!(combo.iter().all(|&position| position < hand_len));
            }
        }
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut combos = Combinations::for_hand_len(4).unwrap();
        for _ in 0..11 {
            assert!(combos.next().is_some());
        }
        assert!(combos.next().is_none());
        assert!(combos.next().is_none());
    }

    #[test]
    fn other_sizes_are_rejected() {
        for hand_len in [0, 3, 6] {
            assert_eq!(
                Combinations::for_hand_len(hand_len).unwrap_err(),
                CribError::InvalidHandSize {
                    expected: "4 or 5",
                    actual: hand_len
                }
            );
        }
    }
}
