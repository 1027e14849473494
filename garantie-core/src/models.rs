use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Univers des numéros principaux (1-49).
pub const POOL_SIZE: u8 = 49;
/// Univers des numéros chance (1-10).
pub const CHANCE_POOL_SIZE: u8 = 10;
/// Nombre de numéros principaux par grille.
pub const TICKET_SIZE: usize = 5;
/// Taille minimale d'un jeu de candidats.
pub const MIN_CANDIDATES: usize = 5;
/// Au-delà de 20 candidats, le plan couvrant devient impraticable.
pub const MAX_CANDIDATES: usize = 20;
/// Nombre de rangs de gains officiels.
pub const RANK_COUNT: usize = 10;
/// Prix d'une grille simple en euros.
pub const GRID_PRICE: f64 = 2.20;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GarantieError {
    #[error("Taille du jeu de candidats hors limites : {n} (attendu {min}-{max})")]
    InvalidCandidateSetSize { n: usize, min: usize, max: usize },

    #[error("Numéro candidat invalide : {value} (1-49, sans doublon)")]
    InvalidNumberRange { value: u8 },

    #[error("Numéro chance invalide : {value} (1-10, sans doublon)")]
    InvalidComplementaryRange { value: u8 },

    #[error("Plan couvrant périmé : il ne correspond plus au jeu de candidats")]
    StaleCoveringDesign,

    #[error("Violation d'invariant interne : {detail}")]
    InternalInvariantViolation { detail: String },
}

/// Jeu de candidats : numéros principaux pré-sélectionnés (triés, distincts)
/// et numéros chance candidats. Immuable après construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    numbers: Vec<u8>,
    chance: Vec<u8>,
}

impl CandidateSet {
    pub fn new(numbers: &[u8], chance: &[u8]) -> Result<Self, GarantieError> {
        if numbers.len() < MIN_CANDIDATES || numbers.len() > MAX_CANDIDATES {
            return Err(GarantieError::InvalidCandidateSetSize {
                n: numbers.len(),
                min: MIN_CANDIDATES,
                max: MAX_CANDIDATES,
            });
        }

        let mut numbers = numbers.to_vec();
        numbers.sort();
        for &v in &numbers {
            if v < 1 || v > POOL_SIZE {
                return Err(GarantieError::InvalidNumberRange { value: v });
            }
        }
        for w in numbers.windows(2) {
            if w[0] == w[1] {
                return Err(GarantieError::InvalidNumberRange { value: w[0] });
            }
        }

        let mut chance = chance.to_vec();
        chance.sort();
        for &v in &chance {
            if v < 1 || v > CHANCE_POOL_SIZE {
                return Err(GarantieError::InvalidComplementaryRange { value: v });
            }
        }
        for w in chance.windows(2) {
            if w[0] == w[1] {
                return Err(GarantieError::InvalidComplementaryRange { value: w[0] });
            }
        }

        Ok(Self { numbers, chance })
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn chance(&self) -> &[u8] {
        &self.chance
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Clé stable du jeu de candidats, utilisée pour détecter un plan
    /// couvrant périmé et pour mettre en cache les résultats.
    pub fn signature(&self) -> String {
        let nums = self
            .numbers
            .iter()
            .map(|n| format!("{:02}", n))
            .collect::<Vec<_>>()
            .join("-");
        let chance = self
            .chance
            .iter()
            .map(|c| format!("{:02}", c))
            .collect::<Vec<_>>()
            .join("-");
        format!("{}|{}", nums, chance)
    }
}

/// Grille : 5 numéros principaux distincts (triés) et un numéro chance
/// associé. L'égalité ne porte que sur les 5 numéros principaux.
#[derive(Debug, Clone, Eq)]
pub struct Ticket {
    pub numbers: [u8; TICKET_SIZE],
    pub chance: Option<u8>,
}

impl Ticket {
    pub fn new(mut numbers: [u8; TICKET_SIZE], chance: Option<u8>) -> Self {
        numbers.sort();
        Self { numbers, chance }
    }

    /// Nombre de numéros en commun avec les numéros principaux d'un tirage.
    pub fn match_count(&self, draw: &[u8]) -> usize {
        self.numbers.iter().filter(|n| draw.contains(n)).count()
    }
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.numbers == other.numbers
    }
}

impl std::hash::Hash for Ticket {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.numbers.hash(state);
    }
}

impl PartialOrd for Ticket {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ticket {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.numbers.cmp(&other.numbers)
    }
}

/// Rang de gain officiel pour un nombre de bons numéros principaux et la
/// présence ou non du numéro chance. Rangs 1 à 10 ; 1+0 et 0+0 ne gagnent
/// rien.
pub fn prize_rank(matches: usize, chance_hit: bool) -> Option<u8> {
    match (matches, chance_hit) {
        (5, true) => Some(1),
        (5, false) => Some(2),
        (4, true) => Some(3),
        (4, false) => Some(4),
        (3, true) => Some(5),
        (3, false) => Some(6),
        (2, true) => Some(7),
        (2, false) => Some(8),
        (1, true) => Some(9),
        (0, true) => Some(10),
        _ => None,
    }
}

/// Gains moyens historiques par rang (1 à 10), en euros. Injectable :
/// chargeable depuis un fichier JSON pour une autre variante de jeu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeTable {
    pub prizes: [f64; RANK_COUNT],
}

impl Default for PrizeTable {
    fn default() -> Self {
        // Moyennes historiques du Loto FDJ, rang 1 = 5 numéros + chance
        Self {
            prizes: [
                4_500_000.0, // 5 + chance
                100_000.0,   // 5
                1_000.0,     // 4 + chance
                400.0,       // 4
                50.0,        // 3 + chance
                20.0,        // 3
                10.0,        // 2 + chance
                4.6,         // 2
                2.2,         // 1 + chance
                2.2,         // 0 + chance
            ],
        }
    }
}

impl PrizeTable {
    pub fn prize(&self, rank: u8) -> f64 {
        if rank == 0 || rank as usize > RANK_COUNT {
            return 0.0;
        }
        self.prizes[(rank - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_set_ok() {
        let set = CandidateSet::new(&[9, 1, 5, 12, 33], &[7, 2]).unwrap();
        assert_eq!(set.numbers(), &[1, 5, 9, 12, 33]);
        assert_eq!(set.chance(), &[2, 7]);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_candidate_set_too_small() {
        let err = CandidateSet::new(&[1, 2, 3, 4], &[]).unwrap_err();
        assert_eq!(
            err,
            GarantieError::InvalidCandidateSetSize { n: 4, min: 5, max: 20 }
        );
    }

    #[test]
    fn test_candidate_set_too_large() {
        let numbers: Vec<u8> = (1..=21).collect();
        let err = CandidateSet::new(&numbers, &[]).unwrap_err();
        assert_eq!(
            err,
            GarantieError::InvalidCandidateSetSize { n: 21, min: 5, max: 20 }
        );
    }

    #[test]
    fn test_candidate_set_number_out_of_range() {
        let err = CandidateSet::new(&[0, 2, 3, 4, 5], &[]).unwrap_err();
        assert_eq!(err, GarantieError::InvalidNumberRange { value: 0 });
        let err = CandidateSet::new(&[1, 2, 3, 4, 50], &[]).unwrap_err();
        assert_eq!(err, GarantieError::InvalidNumberRange { value: 50 });
    }

    #[test]
    fn test_candidate_set_duplicate_number() {
        let err = CandidateSet::new(&[1, 2, 3, 4, 4], &[]).unwrap_err();
        assert_eq!(err, GarantieError::InvalidNumberRange { value: 4 });
    }

    #[test]
    fn test_candidate_set_chance_invalid() {
        let err = CandidateSet::new(&[1, 2, 3, 4, 5], &[0]).unwrap_err();
        assert_eq!(err, GarantieError::InvalidComplementaryRange { value: 0 });
        let err = CandidateSet::new(&[1, 2, 3, 4, 5], &[11]).unwrap_err();
        assert_eq!(err, GarantieError::InvalidComplementaryRange { value: 11 });
        let err = CandidateSet::new(&[1, 2, 3, 4, 5], &[3, 3]).unwrap_err();
        assert_eq!(err, GarantieError::InvalidComplementaryRange { value: 3 });
    }

    #[test]
    fn test_signature_stable() {
        let a = CandidateSet::new(&[9, 1, 5, 12, 33], &[7, 2]).unwrap();
        let b = CandidateSet::new(&[1, 5, 9, 12, 33], &[2, 7]).unwrap();
        assert_eq!(a.signature(), b.signature());
        assert_eq!(a.signature(), "01-05-09-12-33|02-07");
    }

    #[test]
    fn test_ticket_equality_ignores_chance() {
        let a = Ticket::new([5, 4, 3, 2, 1], Some(7));
        let b = Ticket::new([1, 2, 3, 4, 5], None);
        assert_eq!(a, b);
        assert_eq!(a.numbers, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ticket_match_count() {
        let t = Ticket::new([1, 2, 3, 4, 5], None);
        assert_eq!(t.match_count(&[1, 2, 3, 4, 5]), 5);
        assert_eq!(t.match_count(&[1, 2, 9]), 2);
        assert_eq!(t.match_count(&[40, 41]), 0);
    }

    #[test]
    fn test_prize_rank_mapping() {
        assert_eq!(prize_rank(5, true), Some(1));
        assert_eq!(prize_rank(5, false), Some(2));
        assert_eq!(prize_rank(3, true), Some(5));
        assert_eq!(prize_rank(3, false), Some(6));
        assert_eq!(prize_rank(0, true), Some(10));
        assert_eq!(prize_rank(1, false), None);
        assert_eq!(prize_rank(0, false), None);
    }

    #[test]
    fn test_prize_table_roundtrip() {
        let table = PrizeTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let restored: PrizeTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, restored);
    }

    #[test]
    fn test_prize_table_rank_lookup() {
        let table = PrizeTable::default();
        assert!((table.prize(6) - 20.0).abs() < 1e-10);
        assert!((table.prize(0) - 0.0).abs() < 1e-10);
        assert!((table.prize(11) - 0.0).abs() < 1e-10);
    }
}
