//! Password assembly.

use rand::RngCore;
use rand::seq::{IndexedRandom, SliceRandom};
use zeroize::Zeroize;

use super::charset::Pool;
use crate::error::PassError;

fn pick<R: RngCore + ?Sized>(alphabet: &[char], rng: &mut R) -> Result<char, PassError> {
    alphabet.choose(rng).copied().ok_or(PassError::EmptyPool)
}

/// Assemble a password from a pre-built pool.
///
/// One character is drawn from every class, the remainder from the combined
/// pool, and the whole sequence is shuffled so the guaranteed characters do
/// not sit in the leading positions. A `length` below the class count is
/// rejected rather than extended.
pub fn generate_from_pool<R: RngCore + ?Sized>(
    pool: &Pool,
    length: usize,
    rng: &mut R,
) -> Result<String, PassError> {
    pool.check_length(length)?;
    let classes = pool.class_count();

    let mut chars: Vec<char> = Vec::with_capacity(length);
    for (_, alphabet) in pool.classes() {
        chars.push(pick(alphabet, rng)?);
    }
    for _ in classes..length {
        chars.push(pick(pool.combined(), rng)?);
    }

    chars.shuffle(rng);

    let pass: String = chars.iter().collect();
    chars.zeroize();
    Ok(pass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{self, CharClass, PassConfig, SIMILAR};
    use crate::rand::Rng;
    use crate::rand::testing::Scripted;

    fn generate(config: &PassConfig, rng: &mut impl RngCore) -> Result<String, PassError> {
        let pool = charset::build(config)?;
        generate_from_pool(&pool, config.length, rng)
    }

    fn lowercase_only(length: usize) -> PassConfig {
        PassConfig {
            length,
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: false,
            exclude_similar: false,
            exclude_ambiguous: false,
            ..PassConfig::default()
        }
    }

    fn class_of(c: char, pool: &Pool) -> CharClass {
        pool.classes()
            .find(|(_, chars)| chars.contains(&c))
            .map(|(class, _)| class)
            .unwrap()
    }

    #[test]
    fn test_lowercase_only_ten() {
        let mut rng = Rng::new();
        let pass = generate(&lowercase_only(10), &mut rng).unwrap();
        assert_eq!(pass.chars().count(), 10);
        assert!(pass.chars().all(|c| c.is_ascii_lowercase()), "{pass}");
    }

    #[test]
    fn test_covers_every_class() {
        let mut rng = Rng::new();
        let config = PassConfig {
            length: 4,
            ..PassConfig::default()
        };
        let pool = charset::build(&config).unwrap();
        for _ in 0..200 {
            let pass = generate_from_pool(&pool, 4, &mut rng).unwrap();
            assert_eq!(pass.chars().count(), 4);
            for class in CharClass::ALL {
                assert!(
                    pass.chars().any(|c| class_of(c, &pool) == class),
                    "{pass} lacks {}",
                    class.name()
                );
            }
        }
    }

    #[test]
    fn test_respects_filters() {
        let mut rng = Rng::new();
        let config = PassConfig {
            length: 64,
            exclude_similar: true,
            exclude_ambiguous: true,
            ..PassConfig::default()
        };
        for _ in 0..50 {
            let pass = generate(&config, &mut rng).unwrap();
            assert!(!pass.chars().any(|c| SIMILAR.contains(&c)), "{pass}");
            assert!(!pass.chars().any(|c| "{}[]()/\\'\"`~,;:.<>".contains(c)), "{pass}");
        }
    }

    #[test]
    fn test_empty_pool_is_signalled() {
        let mut rng = Rng::new();
        let config = PassConfig {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbol_set: "[]".into(),
            exclude_ambiguous: true,
            ..PassConfig::default()
        };
        assert_eq!(generate(&config, &mut rng), Err(PassError::EmptyPool));
    }

    #[test]
    fn test_length_below_class_count_is_rejected() {
        let mut rng = Rng::new();
        let config = PassConfig {
            length: 3,
            ..PassConfig::default()
        };
        assert_eq!(
            generate(&config, &mut rng),
            Err(PassError::LengthBelowClasses {
                length: 3,
                classes: 4
            })
        );
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let mut rng = Rng::new();
        assert_eq!(
            generate(&lowercase_only(0), &mut rng),
            Err(PassError::ZeroLength)
        );
    }

    #[test]
    fn test_multibyte_symbols() {
        let mut rng = Rng::new();
        let config = PassConfig {
            length: 8,
            lowercase: false,
            uppercase: false,
            digits: false,
            symbol_set: "äö€".into(),
            ..PassConfig::default()
        };
        let pass = generate(&config, &mut rng).unwrap();
        assert_eq!(pass.chars().count(), 8);
        assert!(pass.chars().all(|c| "äö€".contains(c)));
    }

    fn digits_only(length: usize) -> PassConfig {
        PassConfig {
            length,
            lowercase: false,
            uppercase: false,
            symbols: false,
            exclude_similar: false,
            ..PassConfig::default()
        }
    }

    #[test]
    fn test_constant_source_hits_alphabet_ends() {
        // An all-zero word maps to the first index of every range, an
        // all-ones word to the last.
        let mut low = Scripted::new(&[0]);
        assert_eq!(generate(&digits_only(3), &mut low).unwrap(), "000");
        let mut high = Scripted::new(&[u64::MAX]);
        assert_eq!(generate(&digits_only(3), &mut high).unwrap(), "999");
    }

    #[test]
    fn test_repeated_symbols_do_not_skew_the_fill() {
        let mut rng = Rng::new();
        let config = PassConfig {
            length: 1,
            lowercase: false,
            uppercase: false,
            digits: false,
            symbol_set: "!!!?".into(),
            exclude_similar: false,
            ..PassConfig::default()
        };
        let pool = charset::build(&config).unwrap();
        let trials = 20_000;
        let bangs = (0..trials)
            .filter(|_| generate_from_pool(&pool, 1, &mut rng).unwrap() == "!")
            .count();
        let share = bangs as f64 / trials as f64;
        assert!((share - 0.5).abs() < 0.03, "'!' share {share}");
    }

    /// Chi-square over class frequency at each position. The guaranteed
    /// characters must not cluster in the first slots.
    #[test]
    fn test_positions_have_no_class_bias() {
        let mut rng = Rng::new();
        let config = PassConfig {
            length: 8,
            exclude_similar: false,
            ..PassConfig::default()
        };
        let pool = charset::build(&config).unwrap();
        let trials = 20_000usize;
        let mut counts = vec![[0usize; 4]; config.length];

        for _ in 0..trials {
            let pass = generate_from_pool(&pool, config.length, &mut rng).unwrap();
            for (pos, c) in pass.chars().enumerate() {
                let idx = CharClass::ALL
                    .iter()
                    .position(|k| *k == class_of(c, &pool))
                    .unwrap();
                counts[pos][idx] += 1;
            }
        }

        // Expected class shares are identical at every position, so compare
        // each position against the pooled distribution.
        let mut totals = [0usize; 4];
        for row in &counts {
            for (t, n) in totals.iter_mut().zip(row) {
                *t += n;
            }
        }
        let grand: usize = totals.iter().sum();

        // df = 3; 21.11 is the p = 0.0001 critical value.
        for (pos, row) in counts.iter().enumerate() {
            let chi: f64 = row
                .iter()
                .zip(&totals)
                .map(|(&obs, &tot)| {
                    let expected = trials as f64 * tot as f64 / grand as f64;
                    (obs as f64 - expected).powi(2) / expected
                })
                .sum();
            assert!(chi < 21.11, "position {pos} biased: chi2 = {chi:.2}");
        }
    }
}
