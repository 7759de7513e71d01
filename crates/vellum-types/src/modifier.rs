/// Layout and appearance hints attached to a component node.
///
/// Every field is optional; an absent field means "inherit the default
/// sizing/fill-width behavior" of the render backend. Numeric fields are
/// unsigned so that non-negativity holds by construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModifierSpec {
    /// Uniform padding in layout units
    pub padding: Option<u32>,
    /// Explicit height in layout units
    pub height: Option<u32>,
    /// Explicit width in layout units
    pub width: Option<u32>,
    pub fill_max_height: Option<bool>,
    pub fill_max_width: Option<bool>,
    /// Background fill as a `#RRGGBB` or `#AARRGGBB` hex string
    pub background_color: Option<String>,
    pub corner_radius: Option<u32>,
    /// Shadow elevation; reuses `corner_radius` for the shadow shape
    pub elevation: Option<u32>,
    /// Image scaling hint; only meaningful on image-bearing nodes
    pub content_scale: Option<String>,
}

impl ModifierSpec {
    /// True if no field is set (equivalent to an absent `modifier` object).
    pub fn is_empty(&self) -> bool {
        *self == ModifierSpec::default()
    }
}
