// Imports
use std::path::Path;

use thiserror::Error;

/// Scalar type used for every coordinate, metric, and score in the crate
pub type Float = f64;

/// A single atom of a residue, as produced by an external structure parser
#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub struct Atom {
    /// Atom type label, e.g. "NZ" or "CZ"
    pub label: String,
    /// Cartesian coordinates in ångströms
    pub coords: [Float; 3],
}

impl Atom {
    /// Create a new Atom from owned parameters
    pub fn new(
        label: String,
        coords: [Float; 3],
    ) -> Self {
        Self { label, coords }
    }

    /// Create a new Atom from borrowed parameters, useful for creating tests
    pub fn create(
        label: &str,
        coords: [Float; 3],
    ) -> Self {
        Self { label: label.to_string(), coords }
    }
}

/// An amino-acid residue and the atoms that belong to it
#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub struct Residue {
    /// Three-letter amino-acid code, e.g. "LYS"
    pub kind: String,
    /// Sequence number within the parent chain
    pub number: i32,
    pub atoms: Vec<Atom>,
}

impl Residue {
    pub fn new(
        kind: String,
        number: i32,
        atoms: Vec<Atom>,
    ) -> Self {
        Self { kind, number, atoms }
    }

    /// Create a new Residue from borrowed parameters, useful for creating tests
    pub fn create(
        kind: &str,
        number: i32,
        atoms: Vec<Atom>,
    ) -> Self {
        Self { kind: kind.to_string(), number, atoms }
    }
}

/// A protein active site: a named, ordered collection of residues.
/// Raw records carry no scores, see `scoring::score_sites` for the scored counterpart.
#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub struct ActiveSite {
    pub name: String,
    pub residues: Vec<Residue>,
}

impl ActiveSite {
    const BINCODE_CONFIG: bincode::config::Configuration = bincode::config::standard();

    pub fn new(
        name: String,
        residues: Vec<Residue>,
    ) -> Self {
        Self { name, residues }
    }

    /// Create a new ActiveSite from borrowed parameters, useful for creating tests
    pub fn create(
        name: &str,
        residues: Vec<Residue>,
    ) -> Self {
        Self { name: name.to_string(), residues }
    }

    pub fn encode_vec<W: std::io::Write>(
        sites: &[ActiveSite],
        compression_level: i32,
        output: W,
    ) -> Result<W, Error> {
        let mut encoder = zstd::Encoder::new(output, compression_level)?;
        bincode::encode_into_std_write(sites, &mut encoder, Self::BINCODE_CONFIG)?;
        encoder.finish().map_err(Error::from)
    }

    pub fn encode_vec_to_file<Q: AsRef<Path>>(
        filepath: Q,
        sites: &[ActiveSite],
        compression_level: i32,
    ) -> Result<(), Error> {
        let file = Self::encode_vec(
            sites,
            compression_level,
            std::fs::OpenOptions::new().create(true).write(true).truncate(true).open(filepath)?,
        )?;

        file.sync_all().map_err(Error::from)
    }

    pub fn decode_vec<R: std::io::Read>(input: R) -> Result<Vec<ActiveSite>, Error> {
        let mut decoder = zstd::Decoder::new(input)?;
        bincode::decode_from_std_read(&mut decoder, Self::BINCODE_CONFIG).map_err(Error::from)
    }

    pub fn decode_vec_from_file<Q: AsRef<Path>>(filepath: Q) -> Result<Vec<ActiveSite>, Error> {
        Self::decode_vec(std::fs::OpenOptions::new().read(true).open(filepath)?)
    }
}

/// An active site annotated with its population-normalized metrics.
/// Only ever produced by `scoring::score_sites`, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ScoredSite {
    pub site: ActiveSite,
    /// Normalized lysine spatial-concentration metric
    pub lys_score: Float,
    /// Normalized arginine spatial-concentration metric
    pub arg_score: Float,
    /// Normalized aggregate-hydrophobicity metric
    pub hyd_score: Float,
    /// Sum of the three normalized metrics, the 1-D projection everything clusters on
    pub score: Float,
}

impl ScoredSite {
    pub fn name(&self) -> &str {
        &self.site.name
    }

    /// Create a residue-less ScoredSite with a fixed combined score, useful for creating tests
    pub fn create(
        name: &str,
        score: Float,
    ) -> Self {
        Self {
            site: ActiveSite::create(name, Vec::new()),
            lys_score: 0.0,
            arg_score: 0.0,
            hyd_score: 0.0,
            score,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    BincodeDecode(#[from] bincode::error::DecodeError),
    #[error(transparent)]
    BincodeEncode(#[from] bincode::error::EncodeError),
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
