//! Analyse de scénarios et rendement financier d'un plan couvrant : pour
//! chaque niveau de recouvrement m (nombre de numéros du tirage réel
//! présents dans le jeu de candidats), répartition des grilles par nombre
//! de bons numéros, gain attendu, bénéfice net et ROI.

use serde::{Deserialize, Serialize};

use crate::combinatorics::hypergeometric;
use crate::covering::CoveringDesign;
use crate::models::{prize_rank, CandidateSet, GarantieError, PrizeTable, CHANCE_POOL_SIZE, TICKET_SIZE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Niveau de recouvrement m : combien des 5 numéros tirés sont candidats.
    pub overlap: u8,
    /// Répartition des grilles du plan par nombre de bons numéros (indice 0 à 5),
    /// pour le tirage représentatif de ce niveau.
    pub match_counts: [usize; 6],
    /// Meilleur rang de gain atteignable par une grille du plan. Quand le
    /// jeu comporte des numéros chance candidats, le rang suppose que le
    /// numéro chance sort (probabilité 1/10, déjà pondérée dans
    /// `expected_gain`) ; sans numéro chance, rang sans chance.
    pub best_rank: Option<u8>,
    pub total_cost: f64,
    pub expected_gain: f64,
    pub net_benefit: f64,
    pub roi: f64,
    /// Probabilité de réalisation du scénario à partir de laquelle le gain
    /// attendu couvre le coût. Peut dépasser 1 : jamais rentable.
    pub break_even_probability: f64,
}

/// Produit les cinq rapports de scénarios (m = 1 à 5) pour un plan couvrant.
///
/// Le plan doit avoir été construit sur ce jeu de candidats : un plan
/// périmé est refusé, jamais servi.
///
/// Deux calculs distincts par scénario :
/// - la répartition des grilles est un décompte réel sur la liste de
///   grilles du plan, face au tirage représentatif ancré sur la première
///   grille (les m numéros touchés sont ses m premiers numéros) ;
/// - le gain attendu moyenne sur tous les C(N, m) tirages possibles via la
///   loi hypergéométrique, pas sur le seul tirage représentatif.
pub fn analyze_scenarios(
    design: &CoveringDesign,
    candidates: &CandidateSet,
    unit_price: f64,
    prizes: &PrizeTable,
) -> Result<Vec<ScenarioReport>, GarantieError> {
    if design.is_stale(candidates) {
        return Err(GarantieError::StaleCoveringDesign);
    }
    if design.tickets.is_empty() {
        return Err(GarantieError::InternalInvariantViolation {
            detail: "plan couvrant vide".to_string(),
        });
    }

    let n = candidates.len() as u64;
    let ticket_count = design.tickets.len();
    let total_cost = ticket_count as f64 * unit_price;
    let has_chance = !candidates.chance().is_empty();
    let chance_hit = if has_chance {
        hypergeometric(1, 1, 1, CHANCE_POOL_SIZE as u64)
    } else {
        0.0
    };

    // Tirage représentatif : ses numéros touchés sont ancrés sur la
    // première grille du plan (la plus couvrante du glouton)
    let anchor = design.tickets[0].numbers;

    let mut reports = Vec::with_capacity(TICKET_SIZE);
    for m in 1..=TICKET_SIZE {
        let hit_set = &anchor[..m];
        let mut match_counts = [0usize; 6];
        for t in &design.tickets {
            match_counts[t.match_count(hit_set)] += 1;
        }

        let best_rank = (1..=TICKET_SIZE)
            .rev()
            .filter(|&k| match_counts[k] > 0)
            .find_map(|k| prize_rank(k, has_chance));

        // Gain attendu par grille : les m numéros touchés sont uniformes
        // parmi les C(N, m) sous-ensembles possibles des candidats
        let mut gain_per_ticket = 0.0f64;
        for k in 0..=TICKET_SIZE as u64 {
            let p = hypergeometric(m as u64, k, TICKET_SIZE as u64, n);
            if p == 0.0 {
                continue;
            }
            let with_chance = prize_rank(k as usize, true)
                .map(|r| prizes.prize(r))
                .unwrap_or(0.0);
            let without_chance = prize_rank(k as usize, false)
                .map(|r| prizes.prize(r))
                .unwrap_or(0.0);
            gain_per_ticket += p * (chance_hit * with_chance + (1.0 - chance_hit) * without_chance);
        }

        let expected_gain = gain_per_ticket * ticket_count as f64;
        let net_benefit = expected_gain - total_cost;
        let roi = if total_cost > 0.0 {
            net_benefit / total_cost
        } else {
            0.0
        };
        let break_even_probability = if expected_gain > 0.0 {
            total_cost / expected_gain
        } else {
            f64::INFINITY
        };

        reports.push(ScenarioReport {
            overlap: m as u8,
            match_counts,
            best_rank,
            total_cost,
            expected_gain,
            net_benefit,
            roi,
            break_even_probability,
        });
    }

    Ok(reports)
}
