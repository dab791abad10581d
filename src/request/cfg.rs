use serde::{Serialize, Deserialize};

use crate::shapes::ShapesCfg;
use crate::request::{ProcResult, invalid_arg};

/// Highest `max_order` a config may set. 4^10 is about a million segments per side.
pub const ORDER_LIMIT: u32 = 10;

/// Canvas and stroke parameters handed to the renderer with the segments.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CanvasCfg {
    #[serde(default = "CanvasCfg::default_width")]
    pub width: u32,
    #[serde(default = "CanvasCfg::default_height")]
    pub height: u32,
    #[serde(default = "CanvasCfg::default_background")]
    pub background: String,
    #[serde(default = "CanvasCfg::default_stroke")]
    pub stroke: String,
    #[serde(default = "CanvasCfg::default_stroke_width")]
    pub stroke_width: u32,
}
impl CanvasCfg {
    pub fn default_width() -> u32 {
        800
    }
    pub fn default_height() -> u32 {
        800
    }
    pub fn default_background() -> String {
        "black".to_string()
    }
    pub fn default_stroke() -> String {
        "cyan".to_string()
    }
    pub fn default_stroke_width() -> u32 {
        2
    }
}
impl Default for CanvasCfg {
    fn default() -> Self {
        CanvasCfg{
            width: CanvasCfg::default_width(),
            height: CanvasCfg::default_height(),
            background: CanvasCfg::default_background(),
            stroke: CanvasCfg::default_stroke(),
            stroke_width: CanvasCfg::default_stroke_width(),
        }
    }
}

/// Render configuration.
/// Every field is optional in a config file, missing ones take the defaults below.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderCfg {
    /// Recursion order used when the request does not name one.
    #[serde(default = "RenderCfg::default_order")]
    pub order: i32,
    /// Highest order a request may ask for. Segment count grows as 4^order.
    #[serde(default = "RenderCfg::default_max_order")]
    pub max_order: u32,
    #[serde(default)]
    pub canvas: CanvasCfg,
    #[serde(default)]
    pub shapes: ShapesCfg,
}
impl RenderCfg {
    pub fn default_order() -> i32 {
        4
    }
    pub fn default_max_order() -> u32 {
        8
    }

    /// Check the values serde cannot.
    pub fn validate(&self) -> ProcResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            invalid_arg(&format!(
                "Canvas must have non-zero dimensions, got {}x{}",
                self.canvas.width, self.canvas.height,
            ))?;
        }
        if self.max_order > ORDER_LIMIT {
            invalid_arg(&format!(
                "max_order may be at most {}, got {}",
                ORDER_LIMIT, self.max_order,
            ))?;
        }
        Ok(())
    }
}
impl Default for RenderCfg {
    fn default() -> Self {
        RenderCfg{
            order: RenderCfg::default_order(),
            max_order: RenderCfg::default_max_order(),
            canvas: CanvasCfg::default(),
            shapes: ShapesCfg::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        let cfg: RenderCfg = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, RenderCfg::default());
        assert_eq!(cfg.canvas.width, 800);
        assert_eq!(cfg.canvas.height, 800);
        assert_eq!(cfg.canvas.background, "black");
        assert_eq!(cfg.canvas.stroke, "cyan");
        assert_eq!(cfg.canvas.stroke_width, 2);
        assert_eq!(cfg.order, 4);
        assert_eq!(cfg.max_order, 8);
    }

    #[test]
    fn partial_toml() {
        let cfg: RenderCfg = toml::from_str("order = 2\n\n[canvas]\nstroke = \"white\"\n").unwrap();
        assert_eq!(cfg.order, 2);
        assert_eq!(cfg.canvas.stroke, "white");
        assert_eq!(cfg.canvas.width, 800);
    }

    #[test]
    fn json_roundtrip_of_defaults() {
        let s = serde_json::to_string_pretty(&RenderCfg::default()).unwrap();
        let cfg: RenderCfg = serde_json::from_str(&s).unwrap();
        assert_eq!(cfg, RenderCfg::default());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(serde_yaml::from_str::<RenderCfg>("colour: red\n").is_err());
        assert!(serde_yaml::from_str::<RenderCfg>("canvas:\n  depth: 3\n").is_err());
    }

    #[test]
    fn validate_rejects_empty_canvas() {
        let mut cfg = RenderCfg::default();
        assert!(cfg.validate().is_ok());
        cfg.canvas.height = 0;
        assert!(matches!(cfg.validate(), Err(crate::request::RequestError::InvalidArgument(_))));
    }

    #[test]
    fn validate_caps_max_order() {
        let mut cfg = RenderCfg::default();
        cfg.max_order = ORDER_LIMIT;
        assert!(cfg.validate().is_ok());

        cfg.max_order = ORDER_LIMIT + 1;
        assert!(matches!(cfg.validate(), Err(crate::request::RequestError::InvalidArgument(_))));

        let cfg: RenderCfg = serde_yaml::from_str("max_order: 40\n").unwrap();
        assert!(matches!(cfg.validate(), Err(crate::request::RequestError::InvalidArgument(_))));
    }
}
