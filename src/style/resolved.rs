//! Fully resolved styles and the functions that produce them.

use crate::section::{FloatSide, Section, TextAlign};

use super::{
    CIRCLE_BORDER_RADIUS, DEFAULT_FONT_FAMILY, DEFAULT_IMAGE_SIZE, DEFAULT_TEXT_FONT_SIZE,
    DEFAULT_TITLE_FONT_SIZE, StyleContext, px,
};

const DEFAULT_TITLE_MARGIN: &str = "0 0 10px 0";
const DEFAULT_TITLE_WEIGHT: &str = "bold";
const DEFAULT_TEXT_WEIGHT: &str = "normal";
const ZERO_LENGTH: &str = "0px";

/// Section container style.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSection {
    pub margin: String,
    pub padding: f64,
    pub background: String,
    pub border_radius: f64,
}

impl ResolvedSection {
    pub fn to_css(&self) -> String {
        format!(
            "margin:{};padding:{};background:{};border-radius:{};",
            self.margin,
            px(self.padding),
            self.background,
            px(self.border_radius)
        )
    }
}

/// Title or body text style.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTypography {
    pub color: String,
    pub font_size: f64,
    pub font_family: String,
    pub text_align: TextAlign,
    pub margin: String,
    pub font_weight: String,
}

impl ResolvedTypography {
    pub fn to_css(&self) -> String {
        format!(
            "color:{};font-size:{};font-family:{};text-align:{};margin:{};font-weight:{};",
            self.color,
            px(self.font_size),
            self.font_family,
            self.text_align.as_css(),
            self.margin,
            self.font_weight
        )
    }
}

/// Image geometry, shape and float.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImage {
    pub width: f64,
    pub height: f64,
    pub border_radius: f64,
    pub margin: String,
    pub float_side: FloatSide,
    pub circle: bool,
}

impl ResolvedImage {
    pub fn to_css(&self) -> String {
        format!(
            "border-radius:{};margin:{};object-fit:cover;",
            px(self.border_radius),
            self.margin
        )
    }

    /// Class list for the image element; images always start pending.
    pub fn class_list(&self) -> String {
        let mut classes = vec![self.float_side.class_name()];
        if self.circle {
            classes.push("circle");
        }
        classes.push("lazy");
        classes.join(" ")
    }
}

/// Present and non-empty.
fn filled(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Present, non-zero and a number.
fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

pub fn resolve_section(section: &Section) -> ResolvedSection {
    let style = &section.section_style;
    ResolvedSection {
        margin: style.margin.clone().unwrap_or_else(|| ZERO_LENGTH.to_string()),
        padding: style.padding.unwrap_or(0.0),
        background: style
            .background
            .clone()
            .unwrap_or_else(|| "transparent".to_string()),
        border_radius: style.border_radius.unwrap_or(0.0),
    }
}

pub fn resolve_title(section: &Section, ctx: StyleContext) -> ResolvedTypography {
    let style = &section.title_style;
    ResolvedTypography {
        color: filled(style.color.as_ref())
            .unwrap_or(ctx.theme.foreground())
            .to_string(),
        font_size: nonzero(style.font_size).unwrap_or(DEFAULT_TITLE_FONT_SIZE),
        font_family: filled(style.font_family.as_ref())
            .unwrap_or(DEFAULT_FONT_FAMILY)
            .to_string(),
        text_align: style
            .text_align
            .unwrap_or_else(|| ctx.direction.default_text_align()),
        margin: filled(style.margin.as_ref())
            .unwrap_or(DEFAULT_TITLE_MARGIN)
            .to_string(),
        font_weight: filled(style.font_weight.as_ref())
            .unwrap_or(DEFAULT_TITLE_WEIGHT)
            .to_string(),
    }
}

pub fn resolve_text(section: &Section, ctx: StyleContext) -> ResolvedTypography {
    let style = &section.text_style;
    ResolvedTypography {
        color: filled(style.color.as_ref())
            .unwrap_or(ctx.theme.foreground())
            .to_string(),
        font_size: nonzero(style.font_size).unwrap_or(DEFAULT_TEXT_FONT_SIZE),
        font_family: filled(style.font_family.as_ref())
            .unwrap_or(DEFAULT_FONT_FAMILY)
            .to_string(),
        text_align: style
            .text_align
            .unwrap_or_else(|| ctx.direction.default_text_align()),
        margin: filled(style.margin.as_ref())
            .unwrap_or(ZERO_LENGTH)
            .to_string(),
        font_weight: filled(style.font_weight.as_ref())
            .unwrap_or(DEFAULT_TEXT_WEIGHT)
            .to_string(),
    }
}

/// The float side defaults to left in both directions.
pub fn resolve_image(section: &Section) -> ResolvedImage {
    let style = &section.image_style;
    let circle_default = if section.is_circle {
        CIRCLE_BORDER_RADIUS
    } else {
        0.0
    };
    ResolvedImage {
        width: nonzero(style.width).unwrap_or(DEFAULT_IMAGE_SIZE),
        height: nonzero(style.height).unwrap_or(DEFAULT_IMAGE_SIZE),
        border_radius: style.border_radius.unwrap_or(circle_default),
        margin: style.margin.clone().unwrap_or_else(|| ZERO_LENGTH.to_string()),
        float_side: section.float_side.unwrap_or_default(),
        circle: section.is_circle,
    }
}
