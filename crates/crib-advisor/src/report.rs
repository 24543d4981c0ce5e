use std::fmt::Write as _;

use crib_core::discard::{DiscardCandidate, ResolvedBy};
use crib_core::model::card::Card;
use crib_core::{DiscardReport, ScoreBreakdown};
use serde::Serialize;

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_resolution(resolved_by: ResolvedBy) -> &'static str {
    match resolved_by {
        ResolvedBy::HandScore => "hand score",
        ResolvedBy::CribPotential => "crib potential",
        ResolvedBy::CutAverage => "average over every cut",
    }
}

fn candidate_line(candidate: &DiscardCandidate) -> String {
    format!(
        "keep {}  throw {}  hand {}",
        join_cards(&candidate.retained),
        join_cards(&candidate.discarded),
        candidate.hand_score
    )
}

/// Plain-text summary of a discard decision.
pub fn render_discard_text(report: &DiscardReport, explain: bool) -> String {
    let pick = &report.recommendation;
    let mut out = String::new();
    let _ = writeln!(out, "Deal:    {}", join_cards(&report.deal));
    let _ = writeln!(out, "Crib:    {}", report.crib.as_str());
    let _ = writeln!(
        out,
        "Keep:    {}  ({} points)",
        join_cards(&pick.retained),
        pick.hand_score
    );
    let _ = writeln!(out, "Discard: {}", join_cards(&pick.discarded));
    if let Some(bonus) = pick.crib_bonus {
        let _ = writeln!(out, "Crib bonus:  {bonus:+.1}");
    }
    if let Some(average) = pick.cut_average {
        let _ = writeln!(out, "Cut average: {average:.3}");
    }
    let _ = write!(out, "Decided by {}", describe_resolution(pick.resolved_by));
    if pick.remaining_ties > 1 {
        let _ = write!(
            out,
            " ({} candidates still tied, first taken)",
            pick.remaining_ties
        );
    }
    out.push('\n');

    if explain {
        out.push('\n');
        let _ = writeln!(
            out,
            "Best hand score: {} candidate(s)",
            report.by_hand_score.len()
        );
        for candidate in &report.by_hand_score {
            let _ = writeln!(out, "  {}", candidate_line(candidate));
        }
        if let Some(ranked) = &report.by_crib_potential {
            let _ = writeln!(out, "Best crib potential: {} candidate(s)", ranked.len());
            for entry in ranked {
                let _ = writeln!(
                    out,
                    "  {}  crib {:+.1} ({:?})",
                    candidate_line(&entry.candidate),
                    entry.crib_bonus,
                    entry.pattern
                );
            }
        }
        if let Some(ranked) = &report.by_cut_average {
            let _ = writeln!(out, "Best cut average: {} candidate(s)", ranked.len());
            for entry in ranked {
                let _ = writeln!(
                    out,
                    "  {}  cut avg {:.3}",
                    candidate_line(&entry.candidate),
                    entry.cut_average
                );
            }
        }
    }
    out
}

/// A scored hand as printed by the `score` command.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredHand {
    pub hand: Vec<Card>,
    pub cut: Option<Card>,
    pub breakdown: ScoreBreakdown,
}

impl ScoredHand {
    pub fn new(cards: &[Card], breakdown: ScoreBreakdown) -> Self {
        let (hand, cut) = match cards.len() {
            5 => (cards[..4].to_vec(), Some(cards[4])),
            _ => (cards.to_vec(), None),
        };
        Self {
            hand,
            cut,
            breakdown,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "Hand: {}", join_cards(&self.hand));
        if let Some(cut) = self.cut {
            let _ = write!(out, "  Cut: {cut}");
        }
        out.push('\n');
        let rows = [
            ("fifteens", self.breakdown.fifteens),
            ("pairs", self.breakdown.pairs),
            ("runs", self.breakdown.runs),
            ("flush", self.breakdown.flush),
            ("total", self.breakdown.total),
        ];
        for (label, points) in rows {
            let _ = writeln!(out, "  {label:<9}{points:>3}");
        }
        out
    }
}
