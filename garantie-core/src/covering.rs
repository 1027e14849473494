//! Construction gloutonne d'un plan couvrant : un ensemble de grilles de
//! 5 numéros tel que chaque triplet du jeu de candidats apparaisse dans au
//! moins une grille. La couverture est vérifiée, jamais supposée.

use std::collections::HashMap;

use crate::bounds::{compute_bounds, Bounds};
use crate::models::{CandidateSet, GarantieError, Ticket, TICKET_SIZE};

/// Plan couvrant construit sur un jeu de candidats fixé. Devient périmé si
/// le jeu de candidats change (comparaison par signature).
#[derive(Debug, Clone, PartialEq)]
pub struct CoveringDesign {
    pub tickets: Vec<Ticket>,
    pub candidate_signature: String,
    /// Coût de construction : nombre de grilles x prix unitaire.
    pub cost: f64,
    pub bounds: Bounds,
}

impl CoveringDesign {
    pub fn size(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_stale(&self, candidates: &CandidateSet) -> bool {
        self.candidate_signature != candidates.signature()
    }
}

/// Construit un plan couvrant par couverture gloutonne d'ensembles.
///
/// À chaque tour, la grille non choisie couvrant le plus de triplets
/// restants est retenue ; les égalités sont tranchées par la grille la plus
/// petite lexicographiquement (sortie déterministe et reproductible).
pub fn build_covering_design(
    candidates: &CandidateSet,
    unit_price: f64,
) -> Result<CoveringDesign, GarantieError> {
    let numbers = candidates.numbers();
    let n = numbers.len();
    let bounds = compute_bounds(n as u64)?;

    // Cible : tous les triplets du jeu de candidats
    let triples = enumerate_k_subsets(numbers, 3);
    let mut triple_index: HashMap<[u8; 3], usize> = HashMap::with_capacity(triples.len());
    for (i, t) in triples.iter().enumerate() {
        triple_index.insert([t[0], t[1], t[2]], i);
    }

    // Univers : toutes les grilles possibles, en ordre lexicographique,
    // chacune avec les indices des C(5,3) = 10 triplets qu'elle couvre
    let quintuples = enumerate_k_subsets(numbers, TICKET_SIZE);
    let mut ticket_triples: Vec<Vec<usize>> = Vec::with_capacity(quintuples.len());
    for q in &quintuples {
        let mut ids = Vec::with_capacity(10);
        for t in enumerate_k_subsets(q, 3) {
            match triple_index.get(&[t[0], t[1], t[2]]) {
                Some(&i) => ids.push(i),
                None => {
                    return Err(GarantieError::InternalInvariantViolation {
                        detail: format!("triplet {:?} absent de l'index", t),
                    })
                }
            }
        }
        ticket_triples.push(ids);
    }

    let mut covered = vec![false; triples.len()];
    let mut remaining = triples.len();
    let mut chosen = vec![false; quintuples.len()];
    let mut picked: Vec<usize> = Vec::new();

    while remaining > 0 {
        // Recalcul du gain marginal de chaque grille à chaque tour ; le
        // parcours en ordre lexicographique avec comparaison stricte
        // garantit le départage voulu
        let mut best: Option<usize> = None;
        let mut best_gain = 0usize;
        for (idx, ids) in ticket_triples.iter().enumerate() {
            if chosen[idx] {
                continue;
            }
            let gain = ids.iter().filter(|&&t| !covered[t]).count();
            if gain > best_gain {
                best_gain = gain;
                best = Some(idx);
            }
        }

        let idx = match best {
            Some(idx) => idx,
            None => {
                return Err(GarantieError::InternalInvariantViolation {
                    detail: format!("{} triplets restants et aucune grille ne les couvre", remaining),
                })
            }
        };

        chosen[idx] = true;
        picked.push(idx);
        for &t in &ticket_triples[idx] {
            if !covered[t] {
                covered[t] = true;
                remaining -= 1;
            }
        }
    }

    // Attribution déterministe des numéros chance, en alternance
    let chance_pool = candidates.chance();
    let tickets: Vec<Ticket> = picked
        .iter()
        .enumerate()
        .map(|(i, &idx)| {
            let q = &quintuples[idx];
            let chance = if chance_pool.is_empty() {
                None
            } else {
                Some(chance_pool[i % chance_pool.len()])
            };
            Ticket::new([q[0], q[1], q[2], q[3], q[4]], chance)
        })
        .collect();

    // Post-conditions : re-vérification indépendante de la couverture et
    // cohérence avec la borne inférieure prouvée. Un échec ici est un
    // défaut du moteur, pas un problème de données.
    verify_coverage(&tickets, numbers)?;
    if (tickets.len() as u64) < bounds.minimum {
        return Err(GarantieError::InternalInvariantViolation {
            detail: format!(
                "plan de {} grilles sous le minimum prouvé {}",
                tickets.len(),
                bounds.minimum
            ),
        });
    }

    Ok(CoveringDesign {
        cost: tickets.len() as f64 * unit_price,
        candidate_signature: candidates.signature(),
        tickets,
        bounds,
    })
}

/// Vérifie que chaque triplet du jeu de candidats est contenu dans au
/// moins une grille. Parcours brut, indépendant des structures du glouton.
fn verify_coverage(tickets: &[Ticket], numbers: &[u8]) -> Result<(), GarantieError> {
    for t in enumerate_k_subsets(numbers, 3) {
        let covered = tickets
            .iter()
            .any(|g| t.iter().all(|v| g.numbers.contains(v)));
        if !covered {
            return Err(GarantieError::InternalInvariantViolation {
                detail: format!("triplet {:?} non couvert par le plan", t),
            });
        }
    }
    Ok(())
}

/// Toutes les combinaisons de k éléments de `values`, en ordre
/// lexicographique (les valeurs d'entrée sont déjà triées).
fn enumerate_k_subsets(values: &[u8], k: usize) -> Vec<Vec<u8>> {
    let n = values.len();
    if k > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..k).collect();
    'outer: loop {
        out.push(idx.iter().map(|&i| values[i]).collect());
        let mut i = k;
        loop {
            if i == 0 {
                break 'outer;
            }
            i -= 1;
            if idx[i] != i + n - k {
                idx[i] += 1;
                for j in i + 1..k {
                    idx[j] = idx[j - 1] + 1;
                }
                continue 'outer;
            }
        }
    }
    out
}
