// Imports
use itertools::Itertools;
use thiserror::Error;

use crate::{
    constants::{ARGININE, ARGININE_TIP_ATOM, HYDROPATHY_INDEX, LYSINE, LYSINE_TIP_ATOM},
    data::{ActiveSite, Float, ScoredSite},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown residue type {residue:?} in active site {site:?}, not present in the hydropathy table")]
    UnknownResidue { residue: String, site: String },
    #[error("Population mean absolute deviation of the {0} metric is zero, cannot normalize")]
    ZeroMeanAbsoluteDeviation(&'static str),
}

/// Score a population of active sites.
///
/// Three raw metrics are computed per site (lysine tip-atom magnitude, arginine tip-atom magnitude,
/// summed hydropathy), each is normalized against the population mean and mean absolute deviation,
/// and the combined score is their sum. Input order is preserved and an empty population yields an
/// empty output. Raw records are consumed, the scored value objects are the only handle afterwards.
pub fn score_sites(sites: Vec<ActiveSite>) -> Result<Vec<ScoredSite>, Error> {
    if sites.is_empty() {
        return Ok(Vec::new());
    }

    let mut lys = sites.iter().map(|site| tip_atom_magnitude(site, LYSINE, LYSINE_TIP_ATOM)).collect_vec();
    let mut arg = sites.iter().map(|site| tip_atom_magnitude(site, ARGININE, ARGININE_TIP_ATOM)).collect_vec();
    let mut hyd = sites.iter().map(hydropathy_sum).collect::<Result<Vec<Float>, Error>>()?;

    normalize(&mut lys, "lysine")?;
    normalize(&mut arg, "arginine")?;
    normalize(&mut hyd, "hydrophobicity")?;

    Ok(sites
        .into_iter()
        .zip_eq(lys)
        .zip_eq(arg)
        .zip_eq(hyd)
        .map(|(((site, lys_score), arg_score), hyd_score)| ScoredSite {
            score: lys_score + arg_score + hyd_score,
            site,
            lys_score,
            arg_score,
            hyd_score,
        })
        .collect_vec())
}

/// Magnitude of the vector sum of every `atom_label` atom belonging to a `residue_kind` residue
fn tip_atom_magnitude(
    site: &ActiveSite,
    residue_kind: &str,
    atom_label: &str,
) -> Float {
    let mut sum: [Float; 3] = [0.0; 3];
    for residue in site.residues.iter().filter(|residue| residue.kind == residue_kind) {
        for atom in residue.atoms.iter().filter(|atom| atom.label == atom_label) {
            sum[0] += atom.coords[0];
            sum[1] += atom.coords[1];
            sum[2] += atom.coords[2];
        }
    }
    sum.iter().map(|component| component * component).sum::<Float>().sqrt()
}

fn hydropathy_sum(site: &ActiveSite) -> Result<Float, Error> {
    site.residues
        .iter()
        .map(|residue| {
            HYDROPATHY_INDEX.get(residue.kind.as_str()).copied().ok_or_else(|| Error::UnknownResidue {
                residue: residue.kind.clone(),
                site: site.name.clone(),
            })
        })
        .sum()
}

/// Center `raw` on the population mean and scale by the population mean absolute deviation (MAD,
/// not standard deviation). A zero MAD means every site carries the identical raw value, which
/// leaves nothing to scale by.
fn normalize(
    raw: &mut [Float],
    metric: &'static str,
) -> Result<(), Error> {
    let n = raw.len() as Float;
    let mean = raw.iter().sum::<Float>() / n;
    let mad = raw.iter().map(|x| (x - mean).abs()).sum::<Float>() / n;
    if mad == 0.0 {
        return Err(Error::ZeroMeanAbsoluteDeviation(metric));
    }
    raw.iter_mut().for_each(|x| *x = (*x - mean) / mad);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        assert_float_eq,
        data::{Atom, Residue},
    };

    fn population() -> Vec<ActiveSite> {
        // Raw metrics: lysine magnitudes 1, 2, 3; arginine magnitudes 2, 4, 6;
        // hydropathy sums -8.4, -8.8, -4.2
        vec![
            ActiveSite::create(
                "a",
                vec![
                    Residue::create("LYS", 1, vec![Atom::create("NZ", [1.0, 0.0, 0.0])]),
                    Residue::create("ARG", 2, vec![Atom::create("CZ", [0.0, 2.0, 0.0])]),
                ],
            ),
            ActiveSite::create(
                "b",
                vec![
                    Residue::create("LYS", 1, vec![Atom::create("NZ", [0.0, 0.0, 2.0])]),
                    Residue::create("ARG", 2, vec![Atom::create("CZ", [4.0, 0.0, 0.0])]),
                    Residue::create("GLY", 3, Vec::new()),
                ],
            ),
            ActiveSite::create(
                "c",
                vec![
                    Residue::create("LYS", 1, vec![Atom::create("NZ", [3.0, 0.0, 0.0])]),
                    Residue::create("ARG", 2, vec![Atom::create("CZ", [0.0, 0.0, 6.0])]),
                    Residue::create("VAL", 3, Vec::new()),
                ],
            ),
        ]
    }

    #[test]
    fn empty_population_is_a_no_op() {
        assert!(score_sites(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn tip_atom_magnitude_sums_matching_atoms_only() {
        let site = ActiveSite::create(
            "a",
            vec![
                Residue::create(
                    "LYS",
                    1,
                    vec![
                        Atom::create("NZ", [1.0, 0.0, 0.0]),
                        Atom::create("CA", [7.0, 7.0, 7.0]), // wrong atom label
                    ],
                ),
                Residue::create("LYS", 2, vec![Atom::create("NZ", [0.0, 2.0, 0.0])]),
                Residue::create("ARG", 3, vec![Atom::create("NZ", [9.0, 9.0, 9.0])]), // wrong residue
            ],
        );

        assert_float_eq!(tip_atom_magnitude(&site, "LYS", "NZ"), 5_f64.sqrt());
        assert_float_eq!(tip_atom_magnitude(&site, "ARG", "CZ"), 0.0);
    }

    #[test]
    fn unknown_residue_is_fatal() {
        let mut sites = population();
        sites[1].residues.push(Residue::create("XYZ", 9, Vec::new()));

        assert!(matches!(
            score_sites(sites),
            Err(Error::UnknownResidue { residue, site }) if residue == "XYZ" && site == "b"
        ));
    }

    #[test]
    fn identical_sites_cannot_be_normalized() {
        let site = population().swap_remove(0);
        let err = score_sites(vec![site.clone(), site]).unwrap_err();

        assert!(matches!(err, Error::ZeroMeanAbsoluteDeviation("lysine")));
    }

    #[test]
    fn normalized_metrics_have_zero_mean_and_unit_mad() {
        let scored = score_sites(population()).unwrap();
        let n = scored.len() as Float;

        for metric in [
            scored.iter().map(|s| s.lys_score).collect::<Vec<Float>>(),
            scored.iter().map(|s| s.arg_score).collect(),
            scored.iter().map(|s| s.hyd_score).collect(),
        ] {
            let mean = metric.iter().sum::<Float>() / n;
            let mad = metric.iter().map(|x| (x - mean).abs()).sum::<Float>() / n;
            assert!(mean.abs() < 1e-12);
            assert!((mad - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn combined_score_is_the_sum_of_the_normalized_metrics() {
        let scored = score_sites(population()).unwrap();

        for site in &scored {
            assert_float_eq!(site.score, site.lys_score + site.arg_score + site.hyd_score);
        }
        // Raw lysine metrics 1, 2, 3 normalize to -1.5, 0, 1.5 (mean 2, MAD 2/3)
        assert!((scored[0].lys_score + 1.5).abs() < 1e-12);
        assert!(scored[1].lys_score.abs() < 1e-12);
        assert!((scored[2].lys_score - 1.5).abs() < 1e-12);
    }
}
