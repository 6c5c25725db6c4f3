use anyhow::{Result, bail};
use std::collections::HashSet;

/// Seed requested for one batch; `None` means fresh entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedInfo {
    pub seed: Option<u64>,
}

impl SeedInfo {
    #[must_use]
    pub const fn from_numeric(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    #[must_use]
    pub const fn entropy() -> Self {
        Self { seed: None }
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.seed
            .map_or_else(|| "random".to_string(), |seed| seed.to_string())
    }
}

/// Resolve a list of CLI seed arguments into canonical seed metadata.
///
/// Supports literal integers (negative values use their magnitude) and the
/// keyword `random`, which requests an entropy-seeded batch. Numeric seeds are
/// deduplicated in order of first appearance; each `random` runs separately.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<SeedInfo>> {
    let mut resolved: Vec<SeedInfo> = Vec::new();
    let mut seen: HashSet<u64> = HashSet::new();

    for token in tokens {
        if token.is_empty() {
            continue;
        }

        if token.eq_ignore_ascii_case("random") {
            resolved.push(SeedInfo::entropy());
            continue;
        }

        let value = if let Ok(value) = token.parse::<i64>() {
            value.unsigned_abs()
        } else if let Ok(value) = token.parse::<u64>() {
            value
        } else {
            bail!("Unrecognized seed token: {token}");
        };

        if seen.insert(value) {
            resolved.push(SeedInfo::from_numeric(value));
        }
    }

    if resolved.is_empty() {
        resolved.push(SeedInfo::from_numeric(1337));
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn resolves_numeric_and_random() {
        let seeds = resolve_seed_inputs(&tokens(&["42", "-7", "RANDOM", "42"])).unwrap();
        assert_eq!(
            seeds,
            vec![
                SeedInfo::from_numeric(42),
                SeedInfo::from_numeric(7),
                SeedInfo::entropy(),
            ]
        );
    }

    #[test]
    fn accepts_full_u64_range() {
        let seeds = resolve_seed_inputs(&tokens(&["18446744073709551615"])).unwrap();
        assert_eq!(seeds, vec![SeedInfo::from_numeric(u64::MAX)]);
    }

    #[test]
    fn defaults_when_empty() {
        let seeds = resolve_seed_inputs(&[]).unwrap();
        assert_eq!(seeds, vec![SeedInfo::from_numeric(1337)]);
    }

    #[test]
    fn rejects_unknown_tokens() {
        let err = resolve_seed_inputs(&tokens(&["goat"])).unwrap_err();
        assert!(err.to_string().contains("goat"));
    }

    #[test]
    fn labels_seeds() {
        assert_eq!(SeedInfo::from_numeric(9).label(), "9");
        assert_eq!(SeedInfo::entropy().label(), "random");
    }
}
