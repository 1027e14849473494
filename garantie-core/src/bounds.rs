//! Bornes combinatoires sur la taille minimale d'un plan couvrant
//! C(n, 5, 3) et classement d'un nombre de grilles proposé.

use serde::{Deserialize, Serialize};

use crate::combinatorics::binomial;
use crate::models::GarantieError;

/// Plage valide pour une requête de bornes pure (sans construction de plan).
pub const BOUNDS_MIN_N: u64 = 5;
pub const BOUNDS_MAX_N: u64 = 49;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Borne de divisibilité : chaque grille couvre au plus C(5,3) = 10 triplets.
    pub lower_simple: u64,
    /// Borne de Schönheim, toujours >= lower_simple.
    pub lower_schonheim: u64,
    /// Plafond logarithmique du glouton (garantie Stein-Lovász-Johnson).
    pub upper_probabilistic: u64,
    /// max(lower_simple, lower_schonheim) : le plancher prouvé.
    pub minimum: u64,
}

pub fn compute_bounds(n: u64) -> Result<Bounds, GarantieError> {
    if !(BOUNDS_MIN_N..=BOUNDS_MAX_N).contains(&n) {
        return Err(GarantieError::InvalidCandidateSetSize {
            n: n as usize,
            min: BOUNDS_MIN_N as usize,
            max: BOUNDS_MAX_N as usize,
        });
    }

    let triples = binomial(n, 3);
    let lower_simple = triples.div_ceil(binomial(5, 3));

    // Récurrence de Schönheim : L0 = 1, Li+1 = ceil((n-i)/(5-i) * Li).
    // Le plafond est appliqué à chaque étape, pas seulement à la fin :
    // un seul arrondi final sous-estime la borne.
    let mut schonheim: u64 = 1;
    for i in 0..3u64 {
        schonheim = ((n - i) * schonheim).div_ceil(5 - i);
    }

    let upper_probabilistic =
        ((lower_simple as f64) * ((triples as f64).ln() + 1.0)).ceil() as u64;

    Ok(Bounds {
        lower_simple,
        lower_schonheim: schonheim,
        upper_probabilistic,
        minimum: lower_simple.max(schonheim),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// En dessous du minimum prouvé : mathématiquement inatteignable.
    Impossible,
    /// Exactement le minimum prouvé.
    Optimal,
    /// Entre le minimum et 1,5 fois le minimum.
    Plausible,
    /// Au-delà de 1,5 fois le minimum : valide mais gaspilleur.
    Suspect,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Impossible => write!(f, "IMPOSSIBLE"),
            Verdict::Optimal => write!(f, "OPTIMAL"),
            Verdict::Plausible => write!(f, "PLAUSIBLE"),
            Verdict::Suspect => write!(f, "SUSPECT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub verdict: Verdict,
    pub message: String,
}

/// Classe un nombre de grilles proposé par rapport aux bornes. Fonction
/// pure et totale : tout entier reçoit exactement un verdict.
pub fn validate_proposed_count(count: u64, bounds: &Bounds) -> Validation {
    let minimum = bounds.minimum;
    if count < minimum {
        return Validation {
            verdict: Verdict::Impossible,
            message: format!(
                "{} grilles ne peuvent pas garantir la couverture : le minimum prouvé est {}",
                count, minimum
            ),
        };
    }
    if count == minimum {
        return Validation {
            verdict: Verdict::Optimal,
            message: format!("{} grilles : exactement le minimum prouvé", count),
        };
    }
    // Comparaison entière exacte de count <= 1,5 * minimum, sans
    // débordement : équivaut à 2*count <= 3*minimum pour des entiers
    if count <= minimum + minimum / 2 {
        return Validation {
            verdict: Verdict::Plausible,
            message: format!(
                "{} grilles : au-dessus du minimum prouvé ({}) mais raisonnable",
                count, minimum
            ),
        };
    }
    Validation {
        verdict: Verdict::Suspect,
        message: format!(
            "{} grilles : plus de 1,5 fois le minimum prouvé ({}), probablement du gaspillage",
            count, minimum
        ),
    }
}
