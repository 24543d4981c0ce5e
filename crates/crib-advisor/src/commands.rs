use anyhow::{Context, Result};
use crib_core::discard::CribOwner;
use crib_core::model::deck::Deck;
use crib_core::model::hand::Hand;
use crib_core::{DiscardReport, analyze_discard, score_breakdown};
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::report::{ScoredHand, render_discard_text};

/// Resolved presentation settings after merging config and flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub explain: bool,
}

fn parse_cards(tokens: &[String]) -> Result<Hand> {
    let text = tokens.join(" ");
    Hand::parse(&text).with_context(|| format!("parsing cards '{text}'"))
}

fn render_report(report: &DiscardReport, output: OutputOptions) -> Result<String> {
    match output.format {
        OutputFormat::Json => report.to_json().context("serializing discard report"),
        OutputFormat::Text => Ok(render_discard_text(report, output.explain)),
    }
}

/// Recommends two cards to throw from a six-card deal.
pub fn discard(tokens: &[String], crib: CribOwner, output: OutputOptions) -> Result<String> {
    let hand = parse_cards(tokens)?;
    let report = analyze_discard(hand.cards(), crib)
        .with_context(|| format!("analyzing deal '{hand}'"))?;
    render_report(&report, output)
}

/// Scores four cards, or five when the last (or `cut`) is the starter.
pub fn score(tokens: &[String], cut: Option<&str>, output: OutputOptions) -> Result<String> {
    let mut tokens = tokens.to_vec();
    if let Some(cut) = cut {
        tokens.push(cut.to_string());
    }
    let hand = parse_cards(&tokens)?;
    let breakdown =
        score_breakdown(hand.cards()).with_context(|| format!("scoring hand '{hand}'"))?;
    let scored = ScoredHand::new(hand.cards(), breakdown);
    match output.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&scored).context("serializing score breakdown")
        }
        OutputFormat::Text => Ok(scored.render_text()),
    }
}

#[derive(Debug, Serialize)]
struct DealOutput<'a> {
    seed: u64,
    report: &'a DiscardReport,
}

/// Deals six cards from a seeded shuffle and recommends a discard.
pub fn deal(seed: u64, crib: CribOwner, output: OutputOptions) -> Result<String> {
    let deck = Deck::shuffled_with_seed(seed);
    let cards = deck
        .deal(6)
        .context("a full deck always holds six cards")?;
    info!(target: "crib_advisor::deal", seed, "dealt six cards");
    let report = analyze_discard(cards, crib).context("analyzing dealt cards")?;
    match output.format {
        OutputFormat::Json => serde_json::to_string_pretty(&DealOutput {
            seed,
            report: &report,
        })
        .context("serializing dealt report"),
        OutputFormat::Text => Ok(format!(
            "Seed:    {seed}\n{}",
            render_discard_text(&report, output.explain)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn score_appends_cut_flag() {
        let text = score(&tokens("5/S 5/C 5/H J/D"), Some("5/D"), OutputOptions::default())
            .unwrap();
        assert!(text.contains("Cut: 5/D"));
        assert!(text.contains("  total     28\n"));
    }

    #[test]
    fn score_accepts_a_single_quoted_argument() {
        let text = score(&tokens("A/H 2/H 3/H 4/H 5/H"), None, OutputOptions::default())
            .unwrap();
        assert!(text.contains("  total     12\n"));
    }

    #[test]
    fn score_rejects_cut_on_five_cards() {
        let err = score(&tokens("A/H 2/H 3/H 4/H 5/H"), Some("6/H"), OutputOptions::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("expected 4 or 5"));
    }

    #[test]
    fn discard_reports_bad_tokens() {
        let err = discard(
            &tokens("5/S 5/C 5/H J/X 2/S 9/C"),
            CribOwner::Mine,
            OutputOptions::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("J/X"));
    }

    #[test]
    fn discard_json_is_a_report() {
        let output = OutputOptions {
            format: OutputFormat::Json,
            explain: false,
        };
        let json = discard(&tokens("K/S 8/S 10/C 3/H 4/D 10/H"), CribOwner::Mine, output).unwrap();
        let report = DiscardReport::from_json(&json).unwrap();
        assert_eq!(report.stage_sizes(), vec![9, 1]);
    }

    #[test]
    fn seeded_deal_is_reproducible() {
        let first = deal(7, CribOwner::Opponent, OutputOptions::default()).unwrap();
        let second = deal(7, CribOwner::Opponent, OutputOptions::default()).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("Seed:    7\n"));
    }
}
