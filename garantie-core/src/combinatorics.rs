//! Noyau combinatoire : coefficients binomiaux exacts et probabilités
//! hypergéométriques. Les calculs restent en arithmétique entière, le
//! flottant n'apparaît qu'à la division finale.

/// Coefficient binomial C(n, k) en arithmétique entière exacte.
///
/// Formule multiplicative avec division incrémentale : à chaque étape le
/// produit partiel est lui-même un coefficient binomial, donc divisible par
/// i. Retourne 0 quand k > n (aucun sous-ensemble possible).
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 1..=k {
        result = result * (n - k + i) / i;
    }
    result
}

/// Probabilité d'obtenir exactement `successes` éléments marqués en tirant
/// `draw_size` éléments sans remise dans une population de `population`
/// éléments dont `marked` sont marqués.
///
/// Retourne 0.0 pour toute combinaison de paramètres impossible :
/// l'événement a simplement une probabilité nulle.
pub fn hypergeometric(draw_size: u64, successes: u64, marked: u64, population: u64) -> f64 {
    if draw_size > population || marked > population {
        return 0.0;
    }
    if successes > draw_size || successes > marked {
        return 0.0;
    }
    if draw_size - successes > population - marked {
        return 0.0;
    }

    let favourable = binomial(marked, successes) * binomial(population - marked, draw_size - successes);
    let total = binomial(population, draw_size);
    if total == 0 {
        return 0.0;
    }
    favourable as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_basics() {
        assert_eq!(binomial(5, 3), 10);
        assert_eq!(binomial(6, 3), 20);
        assert_eq!(binomial(10, 3), 120);
        assert_eq!(binomial(20, 5), 15_504);
        assert_eq!(binomial(49, 5), 1_906_884);
    }

    #[test]
    fn test_binomial_edges() {
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(3, 5), 0);
    }

    #[test]
    fn test_binomial_symmetry() {
        for n in 0..=20u64 {
            for k in 0..=n {
                assert_eq!(binomial(n, k), binomial(n, n - k));
            }
        }
    }

    #[test]
    fn test_binomial_pascal() {
        for n in 1..=20u64 {
            for k in 1..=n {
                assert_eq!(binomial(n, k), binomial(n - 1, k - 1) + binomial(n - 1, k));
            }
        }
    }

    #[test]
    fn test_hypergeometric_known_values() {
        // Tirer le bon numéro chance : 1 tirage, 1 marqué sur 10
        assert!((hypergeometric(1, 1, 1, 10) - 0.1).abs() < 1e-12);
        // 5 tirés parmi 10 dont 5 marqués, les 5 marqués sortent
        let p = hypergeometric(5, 5, 5, 10);
        assert!((p - 1.0 / 252.0).abs() < 1e-12);
    }

    #[test]
    fn test_hypergeometric_impossible() {
        assert_eq!(hypergeometric(5, 6, 5, 10), 0.0);
        assert_eq!(hypergeometric(5, 3, 2, 10), 0.0);
        assert_eq!(hypergeometric(11, 0, 5, 10), 0.0);
        // 5 - 0 = 5 non marqués demandés, seulement 2 disponibles
        assert_eq!(hypergeometric(5, 0, 8, 10), 0.0);
    }

    #[test]
    fn test_hypergeometric_sums_to_one() {
        for population in 5..=20u64 {
            for marked in 0..=population.min(8) {
                let draw_size = 5u64.min(population);
                let sum: f64 = (0..=draw_size)
                    .map(|s| hypergeometric(draw_size, s, marked, population))
                    .sum();
                assert!((sum - 1.0).abs() < 1e-10, "somme = {} (pop={}, marqués={})", sum, population, marked);
            }
        }
    }
}
