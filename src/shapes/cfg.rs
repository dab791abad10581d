use serde::{Serialize, Deserialize};

use crate::shapes::{
    ShapeChoice,
    ShapeKind,
    methods::{
        full_snowflake,
        half_structure,
        one_section,
        half_snowflake,
    },
};

/// Per-shape parameters, keyed by the request `type` name.
/// Missing entries take the shape's defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ShapesCfg {
    #[serde(default)]
    pub full: full_snowflake::Method,
    #[serde(default)]
    pub half_structure: half_structure::Method,
    #[serde(default)]
    pub one_section: one_section::Method,
    #[serde(default)]
    pub half_snowflake: half_snowflake::Method,
}
impl ShapesCfg {
    /// Get the configured method for a shape.
    pub fn choice(&self, kind: ShapeKind) -> ShapeChoice {
        match kind {
            ShapeKind::Full => self.full.clone().into(),
            ShapeKind::HalfStructure => self.half_structure.clone().into(),
            ShapeKind::OneSection => self.one_section.clone().into(),
            ShapeKind::HalfSnowflake => self.half_snowflake.clone().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeMethodTrait;

    #[test]
    fn default_sizes() {
        let cfg = ShapesCfg::default();
        assert_eq!(cfg.choice(ShapeKind::Full).get_size(), 500.0);
        assert_eq!(cfg.choice(ShapeKind::HalfStructure).get_size(), 500.0);
        assert_eq!(cfg.choice(ShapeKind::OneSection).get_size(), 600.0);
        assert_eq!(cfg.choice(ShapeKind::HalfSnowflake).get_size(), 500.0);
    }

    #[test]
    fn choice_matches_kind() {
        let cfg = ShapesCfg::default();
        assert!(matches!(cfg.choice(ShapeKind::Full), ShapeChoice::FullSnowflake(_)));
        assert!(matches!(cfg.choice(ShapeKind::HalfStructure), ShapeChoice::HalfStructure(_)));
        assert!(matches!(cfg.choice(ShapeKind::OneSection), ShapeChoice::OneSection(_)));
        assert!(matches!(cfg.choice(ShapeKind::HalfSnowflake), ShapeChoice::HalfSnowflake(_)));
    }

    #[test]
    fn partial_yaml() {
        let cfg: ShapesCfg = serde_yaml::from_str("one_section:\n  size: 300\n").unwrap();
        assert_eq!(cfg.choice(ShapeKind::OneSection).get_size(), 300.0);
        assert_eq!(cfg.choice(ShapeKind::Full).get_size(), 500.0);
    }

    #[test]
    fn rejects_unknown_shape_key() {
        assert!(serde_yaml::from_str::<ShapesCfg>("triangle:\n  size: 300\n").is_err());
    }
}
