//! SIF export command implementation.

use crate::cli::SifArgs;
use crate::error::Result;
use crate::output::Formatter;
use pathcards_io::{read_cards, HgncMap, SifConverter};

/// Execute the sif command.
pub fn execute_sif(args: SifArgs, formatter: &Formatter) -> Result<()> {
    let converter = build_network(&args)?;
    converter.write(&args.output)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Wrote {} interaction(s) to {}",
            converter.network().len(),
            args.output.display()
        ))
    );

    Ok(())
}

/// Convert every input card into the network.
pub fn build_network(args: &SifArgs) -> Result<SifConverter> {
    let mut converter = SifConverter::new(HgncMap::load(&args.hgnc_mapping)?);

    for doc in &read_cards(&args.input)?.documents {
        converter.add_card(&doc.card);
    }

    Ok(converter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_execute_sif() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("cards")).unwrap();
        fs::write(
            dir.path().join("cards/a.json"),
            r#"{"extracted_information": {"interaction_type": "increases",
                "participant_a": {"identifier": "uniprot:Q00987"},
                "participant_b": {"identifier": "uniprot:P04637"}}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("cards/b_mskcc.json"),
            r#"{"extracted_information": {"interaction_type": "binds",
                "participant_a": {"identifier": "uniprot:Q00987"},
                "participant_b": {"identifier": "uniprot:P04637"}}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("hgnc.tsv"), "TP53\tp53\tP04637\nMDM2\t\tQ00987\n").unwrap();

        let args = SifArgs {
            input: dir.path().join("cards"),
            output: dir.path().join("network.sif"),
            hgnc_mapping: dir.path().join("hgnc.tsv"),
        };
        execute_sif(args, &Formatter::new(false)).unwrap();

        let sif = fs::read_to_string(dir.path().join("network.sif")).unwrap();
        assert_eq!(sif, "MDM2\tis-upstream-of\tTP53\n");
    }
}
