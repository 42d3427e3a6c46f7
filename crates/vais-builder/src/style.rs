//! Presentation attributes shared by every block kind.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a block's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Flush left.
    #[default]
    Left,
    /// Centred.
    Center,
    /// Flush right.
    Right,
}

impl Alignment {
    /// CSS keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Unit of [`BlockStyle::width`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidthUnit {
    /// Percentage of the container.
    #[default]
    #[serde(rename = "%")]
    Percent,
    /// CSS pixels.
    #[serde(rename = "px")]
    Px,
}

impl WidthUnit {
    /// CSS suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Px => "px",
        }
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Solid line.
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
}

impl BorderStyle {
    /// CSS keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

/// Block border. A zero width draws nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    /// Line width in pixels.
    pub width: u16,
    /// Line style.
    pub style: BorderStyle,
    /// Line colour.
    pub color: String,
}

impl Border {
    /// No border.
    pub fn none() -> Self {
        Self {
            width: 0,
            style: BorderStyle::Solid,
            color: "#000000".to_string(),
        }
    }

    /// CSS `border` value, `None` when the border is invisible.
    pub fn css(&self) -> Option<String> {
        (self.width > 0).then(|| format!("{}px {} {}", self.width, self.style.as_str(), self.color))
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::none()
    }
}

/// Attributes every block carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockStyle {
    /// Background colour, any CSS colour.
    pub background_color: String,
    /// Uniform padding in pixels.
    pub padding: u16,
    /// Content alignment.
    pub alignment: Alignment,
    /// Block width.
    pub width: u16,
    /// Unit of `width`.
    pub width_unit: WidthUnit,
    /// Border.
    pub border: Border,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            background_color: "transparent".to_string(),
            padding: 10,
            alignment: Alignment::Left,
            width: 100,
            width_unit: WidthUnit::Percent,
            border: Border::none(),
        }
    }
}

impl BlockStyle {
    /// Default style with the given alignment.
    pub fn aligned(alignment: Alignment) -> Self {
        Self {
            alignment,
            ..Self::default()
        }
    }

    /// CSS declarations for the block wrapper.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut css = vec![
            ("background-color", self.background_color.clone()),
            ("padding", format!("{}px", self.padding)),
            ("text-align", self.alignment.as_str().to_string()),
            ("width", format!("{}{}", self.width, self.width_unit.as_str())),
        ];
        if let Some(border) = self.border.css() {
            css.push(("border", border));
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = BlockStyle::default();
        assert_eq!(style.alignment, Alignment::Left);
        assert_eq!(style.border.width, 0);
        assert_eq!(style.width_unit, WidthUnit::Percent);
    }

    #[test]
    fn test_zero_border_is_omitted() {
        let css = BlockStyle::default().declarations();
        assert!(css.iter().all(|(name, _)| *name != "border"));
        assert!(css.contains(&("width", "100%".to_string())));
    }

    #[test]
    fn test_visible_border() {
        let border = Border {
            width: 2,
            style: BorderStyle::Dashed,
            color: "#ccc".to_string(),
        };
        assert_eq!(border.css().as_deref(), Some("2px dashed #ccc"));
    }

    #[test]
    fn test_width_unit_serde_names() {
        assert_eq!(serde_json::to_string(&WidthUnit::Percent).ok().as_deref(), Some("\"%\""));
        assert_eq!(serde_json::to_string(&WidthUnit::Px).ok().as_deref(), Some("\"px\""));
    }
}
