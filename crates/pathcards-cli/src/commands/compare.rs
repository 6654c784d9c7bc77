//! Compare command implementation.

use crate::cli::CompareArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use pathcards_comparator::{Comparator, ComparisonStats};
use pathcards_io::{annotate, read_cards, write_cards, write_cards_to, CardSet, OutputOptions};
use serde_json::Value;
use std::io;
use tracing::warn;

/// Outcome of a compare run.
#[derive(Debug)]
pub struct CompareReport {
    /// Annotated inference cards, in input order
    pub cards: Vec<Value>,

    /// Comparison statistics
    pub stats: ComparisonStats,

    /// Inference cards that could not be parsed
    pub unreadable: usize,
}

/// Execute the compare command.
pub fn execute_compare(args: CompareArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let options = config.output_for(&args);
    let report = run_compare(&args, config)?;

    let summary = formatter.format_stats(&report.stats);
    let unreadable = (report.unreadable > 0)
        .then(|| formatter.warning(&format!("{} inference card(s) could not be parsed", report.unreadable)));

    match &args.output {
        Some(output) => {
            let side_file = write_cards(output, &report.cards, &options)?;
            println!("{}", summary);
            if let Some(message) = unreadable {
                println!("{}", message);
            }
            println!("{}", formatter.success(&format!("Wrote {} card(s) to {}", report.cards.len(), output.display())));
            if let Some(side_file) = side_file {
                println!("{}", formatter.info(&format!("Match details in {}", side_file.display())));
            }
        }
        None => {
            write_cards_to(&mut io::stdout().lock(), &report.cards, &options)?;
            eprintln!("{}", summary);
            if let Some(message) = unreadable {
                eprintln!("{}", message);
            }
        }
    }

    Ok(())
}

/// Load the model, classify every inference card and annotate it.
///
/// Cards that fail classification are passed through unannotated.
pub fn run_compare(args: &CompareArgs, config: &Config) -> Result<CompareReport> {
    let (reference_raw, reference_cards) = read_cards(&args.model)?.into_parts();
    if reference_cards.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "No reference cards found in {}",
            args.model.display()
        )));
    }

    let mut comparator = Comparator::new(reference_cards, config.comparator_for(args))?;
    let inference: CardSet = read_cards(&args.input)?;

    let cards = inference
        .documents
        .iter()
        .enumerate()
        .map(|(position, doc)| match comparator.compare_card(&doc.card) {
            Ok(comparison) => annotate(&doc.raw, &comparison, &reference_raw),
            Err(e) => {
                warn!("Inference card {} left unclassified: {}", position, e);
                doc.raw.clone()
            }
        })
        .collect();

    Ok(CompareReport {
        cards,
        stats: comparator.stats().clone(),
        unreadable: inference.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use serde_json::json;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn card(kind: &str, a: &str, b: &str) -> Value {
        json!({
            "extracted_information": {
                "interaction_type": kind,
                "participant_a": {"entity_type": "protein", "identifier": a},
                "participant_b": {"entity_type": "protein", "identifier": b}
            }
        })
    }

    fn compare_args(model: &Path, input: &Path, extra: &[&str]) -> CompareArgs {
        let model = model.to_string_lossy().into_owned();
        let input = input.to_string_lossy().into_owned();
        let mut argv = vec!["pathcards", "compare", "-m", model.as_str(), "-i", input.as_str()];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Command::Compare(args) => args,
            _ => panic!("Expected Compare command"),
        }
    }

    fn setup(inference: Value) -> TempDir {
        let dir = TempDir::new().unwrap();
        let model = json!([card("increases", "uniprot:P1", "uniprot:P2")]);
        fs::write(dir.path().join("model.json"), model.to_string()).unwrap();
        fs::write(dir.path().join("input.json"), inference.to_string()).unwrap();
        dir
    }

    #[test]
    fn test_run_compare() {
        let dir = setup(json!([
            card("increases", "uniprot:P1", "uniprot:P2"),
            card("decreases", "uniprot:P1", "uniprot:P2"),
            card("increases", "uniprot:P1", "uniprot:P9"),
            {"extracted_information": {"participant_b": {"identifier": "P2"}}}
        ]));
        let args = compare_args(&dir.path().join("model.json"), &dir.path().join("input.json"), &[]);

        let report = run_compare(&args, &Config::default()).unwrap();

        assert_eq!(report.cards.len(), 3);
        assert_eq!(report.unreadable, 1);
        assert_eq!(report.cards[0]["model_relation"], "corroboration");
        assert_eq!(report.cards[1]["model_relation"], "extension");
        assert_eq!(report.cards[1]["match"][0]["potentialConflict"], true);
        assert_eq!(report.cards[2]["model_relation"], "extension");
        assert_eq!(report.stats.corroboration_count, 1);
        assert_eq!(report.stats.extension_count, 2);
    }

    #[test]
    fn test_unclassified_cards_pass_through() {
        let dir = setup(json!([
            card("increases", "uniprot:P1", "uniprot:P2"),
            card("increases", "uniprot:P3", "uniprot:P2")
        ]));
        let args = compare_args(
            &dir.path().join("model.json"),
            &dir.path().join("input.json"),
            &["--max-candidates", "1"],
        );

        let mut model = vec![card("increases", "uniprot:P1", "uniprot:P2")];
        model.push(card("increases", "uniprot:P5", "uniprot:P2"));
        fs::write(dir.path().join("model.json"), Value::Array(model).to_string()).unwrap();

        let report = run_compare(&args, &Config::default()).unwrap();
        assert_eq!(report.stats.skipped, 2);
        assert!(report.cards.iter().all(|c| c.get("model_relation").is_none()));
    }

    #[test]
    fn test_empty_model_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("model.json"), "[]").unwrap();
        fs::write(dir.path().join("input.json"), card("increases", "a", "b").to_string()).unwrap();
        let args = compare_args(&dir.path().join("model.json"), &dir.path().join("input.json"), &[]);

        let result = run_compare(&args, &Config::default());
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_execute_writes_output() {
        let dir = setup(card("increases", "uniprot:P1", "uniprot:P2"));
        let output = dir.path().join("out.json");
        let output_arg = output.to_string_lossy().into_owned();
        let args = compare_args(
            &dir.path().join("model.json"),
            &dir.path().join("input.json"),
            &["-o", output_arg.as_str(), "--detailed"],
        );

        execute_compare(args, &Config::default(), &Formatter::new(false)).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["model_relation"], "corroboration");
        assert_eq!(written["score"], 10);
        assert!(dir.path().join("out_match.json").exists());
    }
}
