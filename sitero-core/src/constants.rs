// Imports
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::data::Float;

/// Residue type whose charged side-chain tip marks a lysine position
pub const LYSINE: &str = "LYS";
/// Atom label of the lysine side-chain tip (terminal nitrogen)
pub const LYSINE_TIP_ATOM: &str = "NZ";
/// Residue type whose charged side-chain tip marks an arginine position
pub const ARGININE: &str = "ARG";
/// Atom label of the arginine side-chain tip (guanidinium carbon)
pub const ARGININE_TIP_ATOM: &str = "CZ";

/// Kyte-Doolittle hydropathy index of the 20 canonical amino acids, keyed by three-letter code.
/// Residue types absent from this table are a configuration error, see `scoring::Error::UnknownResidue`.
pub static HYDROPATHY_INDEX: Lazy<HashMap<&'static str, Float>> = Lazy::new(|| {
    HashMap::from([
        ("ARG", -4.5),
        ("HIS", -3.2),
        ("LYS", -3.9),
        ("ASP", -3.5),
        ("GLU", -3.5),
        ("CYS", 2.5),
        ("GLY", -0.4),
        ("PRO", -1.6),
        ("ALA", 1.8),
        ("VAL", 4.2),
        ("ILE", 4.5),
        ("LEU", 3.8),
        ("MET", 1.9),
        ("PHE", 2.8),
        ("TYR", -1.3),
        ("TRP", -0.9),
        ("SER", -0.8),
        ("THR", -0.7),
        ("ASN", -3.5),
        ("GLN", -3.5),
    ])
});
