//! Simple Interaction Format export
//!
//! Cards become `SOURCE<TAB>interaction<TAB>TARGET` lines between HGNC
//! symbols, one line per pair of participant A and participant B ids.

use crate::error::CardIoError;
use pathcards_domain::{normalize_id, IndexCard};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Interaction of two members of a complex
pub const IN_COMPLEX_WITH: &str = "in-complex-with";

/// Interaction of a regulator and its target
pub const IS_UPSTREAM_OF: &str = "is-upstream-of";

/// Placeholder id of entities the extractor could not ground
pub const UNGROUNDED: &str = "ungrounded";

/// UniProt to HGNC symbol mapping
///
/// Built from a tab-separated file with one `symbol<TAB>synonyms<TAB>uniprot`
/// row per gene.
#[derive(Debug, Clone, Default)]
pub struct HgncMap {
    symbols: HashMap<String, String>,
}

impl HgncMap {
    /// Parse mapping rows
    pub fn parse(content: &str) -> Result<Self, CardIoError> {
        let mut symbols = HashMap::new();

        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 3 {
                return Err(CardIoError::Mapping(format!(
                    "line {}: expected 3 tab-separated columns, got {}",
                    line_no + 1,
                    parts.len()
                )));
            }

            let symbol = parts[0].trim();
            let uniprot = parts[2].trim();
            if !symbol.is_empty() && !uniprot.is_empty() {
                symbols.insert(uniprot.to_lowercase(), symbol.to_string());
            }
        }

        Ok(Self { symbols })
    }

    /// Load a mapping file
    pub fn load(path: &Path) -> Result<Self, CardIoError> {
        let map = Self::parse(&fs::read_to_string(path)?)?;
        info!("Loaded {} HGNC mappings from {}", map.len(), path.display());
        Ok(map)
    }

    /// HGNC symbol for a UniProt id, with or without vocabulary prefix
    pub fn symbol(&self, uniprot: &str) -> Option<&str> {
        self.symbols.get(&normalize_id(uniprot)).map(String::as_str)
    }

    /// Number of mapped ids
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if nothing is mapped
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// One SIF edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SifEdge {
    /// Source symbol
    pub source: String,
    /// Interaction name
    pub interaction: &'static str,
    /// Target symbol
    pub target: String,
}

impl fmt::Display for SifEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.source, self.interaction, self.target)
    }
}

/// Converts cards into a de-duplicated SIF network
#[derive(Debug, Clone, Default)]
pub struct SifConverter {
    hgnc: HgncMap,
    network: Vec<SifEdge>,
    seen: HashSet<SifEdge>,
}

impl SifConverter {
    /// Create a converter with an HGNC mapping
    pub fn new(hgnc: HgncMap) -> Self {
        Self {
            hgnc,
            network: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Edges for one card
    ///
    /// Ids that are ungrounded or missing from the mapping produce no edge.
    pub fn convert(&self, card: &IndexCard) -> Vec<SifEdge> {
        let interaction = if card.interaction_type.as_str() == "binds" {
            IN_COMPLEX_WITH
        } else {
            IS_UPSTREAM_OF
        };

        let a_ids = card.participant_a_ids();
        let b_ids = card.participant_b_ids();

        let mut edges = Vec::new();
        for a_id in &a_ids {
            for b_id in &b_ids {
                if let (Some(source), Some(target)) = (self.resolve(a_id), self.resolve(b_id)) {
                    edges.push(SifEdge {
                        source: source.to_string(),
                        interaction,
                        target: target.to_string(),
                    });
                }
            }
        }

        debug!("Card produced {} SIF edges", edges.len());
        edges
    }

    fn resolve(&self, id: &str) -> Option<&str> {
        if !is_valid_id(id) {
            return None;
        }
        self.hgnc.symbol(id).filter(|symbol| is_valid_id(symbol))
    }

    /// Add a card's edges to the network, keeping first-seen order
    pub fn add_card(&mut self, card: &IndexCard) -> usize {
        let mut added = 0;
        for edge in self.convert(card) {
            if self.seen.insert(edge.clone()) {
                self.network.push(edge);
                added += 1;
            }
        }
        added
    }

    /// Network collected so far
    pub fn network(&self) -> &[SifEdge] {
        &self.network
    }

    /// Network as SIF text, one edge per line
    pub fn to_sif(&self) -> String {
        self.network.iter().map(|edge| format!("{}\n", edge)).collect()
    }

    /// Write the network to a file, replacing its content
    pub fn write(&self, output: &Path) -> Result<(), CardIoError> {
        fs::write(output, self.to_sif())?;
        info!("Wrote {} SIF edges to {}", self.network.len(), output.display());
        Ok(())
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && !id.eq_ignore_ascii_case(UNGROUNDED)
}
