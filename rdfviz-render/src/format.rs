//! Output image formats and layout orientation.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Image formats Graphviz can produce for us.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Pdf,
    Svg,
    #[serde(alias = "jpg")]
    Jpeg,
}

impl ImageFormat {
    /// Formats written when none are configured.
    pub const DEFAULTS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Pdf];

    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Pdf => "pdf",
            ImageFormat::Svg => "svg",
            ImageFormat::Jpeg => "jpg",
        }
    }

    /// Name passed to Graphviz as `-T<name>`.
    pub fn graphviz_name(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Pdf => "pdf",
            ImageFormat::Svg => "svg",
            ImageFormat::Jpeg => "jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.graphviz_name())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "pdf" => Ok(ImageFormat::Pdf),
            "svg" => Ok(ImageFormat::Svg),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            other => Err(format!(
                "unsupported image format '{}' (expected png, pdf, svg or jpeg)",
                other
            )),
        }
    }
}

/// Direction in which ranks are laid out (Graphviz `rankdir`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Orientation {
    #[default]
    #[serde(rename = "LR", alias = "lr")]
    LeftToRight,
    #[serde(rename = "RL", alias = "rl")]
    RightToLeft,
    #[serde(rename = "TB", alias = "tb")]
    TopToBottom,
    #[serde(rename = "BT", alias = "bt")]
    BottomToTop,
}

impl Orientation {
    pub fn as_rankdir(self) -> &'static str {
        match self {
            Orientation::LeftToRight => "LR",
            Orientation::RightToLeft => "RL",
            Orientation::TopToBottom => "TB",
            Orientation::BottomToTop => "BT",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_rankdir())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LR" => Ok(Orientation::LeftToRight),
            "RL" => Ok(Orientation::RightToLeft),
            "TB" => Ok(Orientation::TopToBottom),
            "BT" => Ok(Orientation::BottomToTop),
            _ => Err(format!(
                "invalid orientation '{}' (expected LR, RL, TB or BT)",
                s
            )),
        }
    }
}
