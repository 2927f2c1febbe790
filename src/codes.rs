//! Tile code registry: short string codes naming a (texture, direction)
//! pair, plus shorthand aliases for the common ones.

use std::collections::HashMap;

use crate::direction::{DIRECTIONS, Direction};
use crate::error::GameError;

/// Codes are a fixed-length prefix of the texture name plus the direction
/// symbol, e.g. `floor` facing up -> `flu`.
pub const CODE_PREFIX_LEN: usize = 2;

pub struct TileCodeRegistry {
    codes: HashMap<String, (String, Direction)>,
    aliases: HashMap<String, String>,
}

impl TileCodeRegistry {
    /// Generate a code for every (name, direction) combination.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut codes = HashMap::new();
        for name in names {
            for direction in DIRECTIONS {
                codes.insert(
                    Self::code_for(name, direction),
                    (name.to_string(), direction),
                );
            }
        }
        Self {
            codes,
            aliases: HashMap::new(),
        }
    }

    pub fn code_for(name: &str, direction: Direction) -> String {
        let prefix: String = name.chars().take(CODE_PREFIX_LEN).collect();
        format!("{}{}", prefix, direction.symbol())
    }

    /// Register a shorthand for an already-generated code. The target must
    /// exist; aliases never point at other aliases.
    pub fn register_alias(&mut self, alias: &str, target: &str) -> Result<(), GameError> {
        if !self.codes.contains_key(target) {
            return Err(GameError::UnknownTileCode {
                code: target.to_string(),
                context: format!("target of alias `{alias}`"),
            });
        }
        self.aliases.insert(alias.to_string(), target.to_string());
        Ok(())
    }

    /// Expand an alias to its canonical code; canonical codes (and unknown
    /// ones) pass through unchanged.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.aliases.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn lookup(&self, code: &str) -> Option<(&str, Direction)> {
        self.codes
            .get(code)
            .map(|(name, direction)| (name.as_str(), *direction))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const NAMES: [&str; 5] = ["floor", "counter", "shelf", "frozen", "produce"];

    #[test]
    fn test_code_for() {
        assert_eq!(TileCodeRegistry::code_for("floor", Direction::Down), "fld");
        assert_eq!(TileCodeRegistry::code_for("floor", Direction::Up), "flu");
        assert_eq!(
            TileCodeRegistry::code_for("counter", Direction::Right),
            "cor"
        );
    }

    #[test]
    fn test_codes_unique_across_product() {
        // Distinct prefixes guarantee no two (name, direction) pairs
        // collide on a code.
        let mut seen = HashSet::new();
        for name in NAMES {
            for direction in DIRECTIONS {
                assert!(seen.insert(TileCodeRegistry::code_for(name, direction)));
            }
        }
        assert_eq!(seen.len(), NAMES.len() * DIRECTIONS.len());

        let registry = TileCodeRegistry::from_names(NAMES);
        assert_eq!(registry.len(), NAMES.len() * DIRECTIONS.len());
    }

    #[test]
    fn test_lookup() {
        let registry = TileCodeRegistry::from_names(NAMES);
        assert_eq!(registry.lookup("fld"), Some(("floor", Direction::Down)));
        assert_eq!(registry.lookup("shu"), Some(("shelf", Direction::Up)));
        assert_eq!(registry.lookup("zzz"), None);
    }

    #[test]
    fn test_alias_resolution() {
        let mut registry = TileCodeRegistry::from_names(NAMES);
        registry.register_alias("x", "fld").unwrap();

        assert_eq!(registry.resolve("x"), "fld");
        // Idempotent on canonical codes.
        assert_eq!(registry.resolve("fld"), "fld");
        assert_eq!(registry.resolve(registry.resolve("x")), "fld");
    }

    #[test]
    fn test_alias_to_missing_target() {
        let mut registry = TileCodeRegistry::from_names(NAMES);
        let err = registry.register_alias("x", "zzz").unwrap_err();
        assert!(matches!(err, GameError::UnknownTileCode { .. }));
    }
}
