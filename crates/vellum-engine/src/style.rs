use vellum_types::ModifierSpec;

/// An ARGB color parsed from a `#RRGGBB` or `#AARRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color { a, r, g, b }
    }

    /// Parse a hex color string; `#RRGGBB` gets an opaque alpha.
    pub fn parse_hex(s: &str) -> Option<Color> {
        let digits = s.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => {
                let v = u32::from_str_radix(digits, 16).ok()?;
                Some(Color::argb(
                    0xFF,
                    (v >> 16) as u8,
                    (v >> 8) as u8,
                    v as u8,
                ))
            }
            8 => {
                let v = u32::from_str_radix(digits, 16).ok()?;
                Some(Color::argb(
                    (v >> 24) as u8,
                    (v >> 16) as u8,
                    (v >> 8) as u8,
                    v as u8,
                ))
            }
            _ => None,
        }
    }
}

/// Shadow derived from an elevation modifier; reuses the node's corner
/// radius so the shadow outline matches the clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadow {
    pub elevation: u32,
    pub corner_radius: u32,
}

/// Concrete styling for one node, resolved from its `ModifierSpec`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub fill_max_width: bool,
    pub fill_max_height: bool,
    pub padding: Option<u32>,
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub background: Option<Color>,
    pub corner_radius: Option<u32>,
    pub shadow: Option<Shadow>,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        // Base style always fills the available width.
        ResolvedStyle {
            fill_max_width: true,
            fill_max_height: false,
            padding: None,
            height: None,
            width: None,
            background: None,
            corner_radius: None,
            shadow: None,
        }
    }
}

/// Resolve a node's modifier into concrete styling.
///
/// An explicit `width` overrides the default fill; the `fillMaxWidth` /
/// `fillMaxHeight` flags are applied after explicit sizes, so a `true` flag
/// wins over the override while still composing with the numeric size.
pub fn resolve_modifiers(spec: Option<&ModifierSpec>) -> ResolvedStyle {
    let mut style = ResolvedStyle::default();
    let Some(spec) = spec else {
        return style;
    };

    style.padding = spec.padding;
    style.height = spec.height;
    if let Some(width) = spec.width {
        style.width = Some(width);
        style.fill_max_width = false;
    }
    if spec.fill_max_height == Some(true) {
        style.fill_max_height = true;
    }
    if spec.fill_max_width == Some(true) {
        style.fill_max_width = true;
    }
    // The decoder validated the hex form already.
    style.background = spec.background_color.as_deref().and_then(Color::parse_hex);
    style.corner_radius = spec.corner_radius;
    if let Some(elevation) = spec.elevation {
        style.shadow = Some(Shadow {
            elevation,
            corner_radius: spec.corner_radius.unwrap_or(0),
        });
    }
    style
}

/// Horizontal text alignment hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn parse(raw: Option<&str>) -> TextAlign {
        match raw {
            Some("center") => TextAlign::Center,
            Some("left") => TextAlign::Left,
            Some("right") => TextAlign::Right,
            _ => TextAlign::Start,
        }
    }
}

/// Image scaling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentScale {
    FillBounds,
    Crop,
    Inside,
    Fit,
}

impl ContentScale {
    /// Absent means fill-the-bounds; an unrecognized hint falls back to crop.
    pub fn parse(raw: Option<&str>) -> ContentScale {
        match raw {
            None | Some("fitXY") => ContentScale::FillBounds,
            Some("centerCrop") => ContentScale::Crop,
            Some("centerInside") => ContentScale::Inside,
            Some("fitCenter") => ContentScale::Fit,
            Some(_) => ContentScale::Crop,
        }
    }
}
