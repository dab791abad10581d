/*!
 * Shape assemblers.
 * Each shape chains one or more Koch sides, threading the end point and heading between them.
 */

pub mod methods;
mod cfg;

use serde::{Serialize, Deserialize};
use strum::{
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
};

// Re-export cfg handling
pub use cfg::ShapesCfg;
// Re-export shape methods
pub use methods::{
    ShapeChoice,
    ShapeMethodTrait,
};

/// Names of the shapes that can be requested.
/// The snake_case names are the accepted values of the request `type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ShapeKind {
    /// Closed three-sided snowflake.
    #[default]
    Full,
    /// Two consecutive sides, no closure.
    HalfStructure,
    /// A single Koch side.
    OneSection,
    /// The two oblique sides of the snowflake, without the base.
    HalfSnowflake,
}
