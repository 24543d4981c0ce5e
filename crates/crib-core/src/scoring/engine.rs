use super::combinations::{Combination, Combinations};
use crate::error::CribError;
use crate::model::card::Card;
use crate::model::hand::ensure_distinct;
use serde::{Deserialize, Serialize};

const FIFTEEN: u32 = 15;
const FIFTEEN_POINTS: u32 = 2;
const PAIR_POINTS: u32 = 2;
const HAND_FLUSH_POINTS: u32 = 4;
const CUT_FLUSH_POINTS: u32 = 1;
const MIN_RUN: usize = 3;

/// Points contributed by each counting rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub fifteens: u32,
    pub pairs: u32,
    pub runs: u32,
    pub flush: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    pub fn total_score(self) -> u32 {
        self.total
    }
}

/// Scores a four-card hand, or a five-card hand whose last card is the cut.
pub fn score_hand(cards: &[Card]) -> Result<u32, CribError> {
    score_breakdown(cards).map(ScoreBreakdown::total_score)
}

pub fn score_breakdown(cards: &[Card]) -> Result<ScoreBreakdown, CribError> {
    let combos = Combinations::for_hand_len(cards.len())?;
    ensure_distinct(cards)?;
    Ok(tally(cards, combos))
}

/// Scores the four kept cards with an optional cut.
pub fn score_with_cut(hand: &[Card; 4], cut: Option<Card>) -> ScoreBreakdown {
    match cut {
        Some(cut) => {
            let cards = [hand[0], hand[1], hand[2], hand[3], cut];
            tally(&cards, Combinations::starting(cards.len()))
        }
        None => tally(hand, Combinations::starting(hand.len())),
    }
}

fn tally(cards: &[Card], combos: Combinations) -> ScoreBreakdown {
    let mut fifteens = 0;
    let mut pairs = 0;
    let mut longest_run = 0;
    let mut run_count = 0;

    for combo in combos {
        if is_fifteen(cards, &combo) {
            fifteens += FIFTEEN_POINTS;
        }
        if combo.len() == 2 && is_pair(cards, &combo) {
            pairs += PAIR_POINTS;
        }
        if combo.len() >= MIN_RUN && is_run(cards, &combo) {
            // Combinations arrive in ascending size, so a longer run resets the count.
            if combo.len() > longest_run {
                longest_run = combo.len();
                run_count = 1;
            } else if combo.len() == longest_run {
                run_count += 1;
            }
        }
    }

    let runs = (longest_run * run_count) as u32;
    let flush = flush_points(cards);
    ScoreBreakdown {
        fifteens,
        pairs,
        runs,
        flush,
        total: fifteens + pairs + runs + flush,
    }
}

fn is_fifteen(cards: &[Card], combo: &Combination) -> bool {
    let sum: u32 = combo
        .cards(cards)
        .map(|card| u32::from(card.pegging_value()))
        .sum();
    sum == FIFTEEN
}

fn is_pair(cards: &[Card], combo: &Combination) -> bool {
    let positions = combo.positions();
    cards[positions[0]].rank == cards[positions[1]].rank
}

/// Consecutive rank indices with no rank repeated.
fn is_run(cards: &[Card], combo: &Combination) -> bool {
    let mut indices = [0u8; 5];
    let len = combo.len();
    for (slot, card) in indices.iter_mut().zip(combo.cards(cards)) {
        *slot = card.rank_index();
    }
    let indices = &mut indices[..len];
    indices.sort_unstable();
    indices.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Four for a suited hand, one more when the cut follows suit.
fn flush_points(cards: &[Card]) -> u32 {
    let (hand, cut) = cards.split_at(4.min(cards.len()));
    let Some(first) = hand.first() else {
        return 0;
    };
    if !hand.iter().all(|card| card.suit == first.suit) {
        return 0;
    }
    match cut.first() {
        Some(cut) if cut.suit == first.suit => HAND_FLUSH_POINTS + CUT_FLUSH_POINTS,
        _ => HAND_FLUSH_POINTS,
    }
}
