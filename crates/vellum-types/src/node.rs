use crate::modifier::ModifierSpec;

/// One element of a server-described UI tree.
///
/// The variant set is closed: every `type` discriminator on the wire maps to
/// exactly one variant, and an unknown discriminator is a decode-time error.
/// Each variant owns its children by value, so a document is a tree, never a
/// graph. Trees are built once per fetched document and immutable thereafter;
/// a reload replaces the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentNode {
    Screen(ScreenNode),
    Container(ContainerNode),
    Text(TextNode),
    Button(ButtonNode),
    Image(ImageNode),
    Card(CardNode),
    Column(ColumnNode),
    Row(RowNode),
    LazyColumn(LazyColumnNode),
    LazyRow(LazyRowNode),
    ScrollView(ScrollViewNode),
    Spacer(SpacerNode),
    Box(BoxNode),
    TextField(TextFieldNode),
    Divider(DividerNode),
    Icon(IconNode),
    Switch(SwitchNode),
    Checkbox(CheckboxNode),
    Slider(SliderNode),
    ProgressBar(ProgressBarNode),
    FloatingActionButton(FloatingActionButtonNode),
}

impl ComponentNode {
    /// The wire-format `type` discriminator for this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ComponentNode::Screen(_) => "Screen",
            ComponentNode::Container(_) => "Container",
            ComponentNode::Text(_) => "Text",
            ComponentNode::Button(_) => "Button",
            ComponentNode::Image(_) => "Image",
            ComponentNode::Card(_) => "Card",
            ComponentNode::Column(_) => "Column",
            ComponentNode::Row(_) => "Row",
            ComponentNode::LazyColumn(_) => "LazyColumn",
            ComponentNode::LazyRow(_) => "LazyRow",
            ComponentNode::ScrollView(_) => "ScrollView",
            ComponentNode::Spacer(_) => "Spacer",
            ComponentNode::Box(_) => "Box",
            ComponentNode::TextField(_) => "TextField",
            ComponentNode::Divider(_) => "Divider",
            ComponentNode::Icon(_) => "Icon",
            ComponentNode::Switch(_) => "Switch",
            ComponentNode::Checkbox(_) => "Checkbox",
            ComponentNode::Slider(_) => "Slider",
            ComponentNode::ProgressBar(_) => "ProgressBar",
            ComponentNode::FloatingActionButton(_) => "FloatingActionButton",
        }
    }

    /// The modifier attached to this node, if any.
    pub fn modifier(&self) -> Option<&ModifierSpec> {
        match self {
            ComponentNode::Screen(n) => n.modifier.as_ref(),
            ComponentNode::Container(n) => n.modifier.as_ref(),
            ComponentNode::Text(n) => n.modifier.as_ref(),
            ComponentNode::Button(n) => n.modifier.as_ref(),
            ComponentNode::Image(n) => n.modifier.as_ref(),
            ComponentNode::Card(n) => n.modifier.as_ref(),
            ComponentNode::Column(n) => n.modifier.as_ref(),
            ComponentNode::Row(n) => n.modifier.as_ref(),
            ComponentNode::LazyColumn(n) => n.modifier.as_ref(),
            ComponentNode::LazyRow(n) => n.modifier.as_ref(),
            ComponentNode::ScrollView(n) => n.modifier.as_ref(),
            ComponentNode::Spacer(n) => n.modifier.as_ref(),
            ComponentNode::Box(n) => n.modifier.as_ref(),
            ComponentNode::TextField(n) => n.modifier.as_ref(),
            ComponentNode::Divider(n) => n.modifier.as_ref(),
            ComponentNode::Icon(n) => n.modifier.as_ref(),
            ComponentNode::Switch(n) => n.modifier.as_ref(),
            ComponentNode::Checkbox(n) => n.modifier.as_ref(),
            ComponentNode::Slider(n) => n.modifier.as_ref(),
            ComponentNode::ProgressBar(n) => n.modifier.as_ref(),
            ComponentNode::FloatingActionButton(n) => n.modifier.as_ref(),
        }
    }
}

/// A named, addressable subtree representing one navigable page.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenNode {
    pub id: String,
    pub children: Vec<ComponentNode>,
    pub modifier: Option<ModifierSpec>,
}

/// Top-level grouping of screens plus free-floating children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContainerNode {
    pub screens: Vec<ScreenNode>,
    pub children: Vec<ComponentNode>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextNode {
    pub text: String,
    pub color: Option<String>,
    pub font_size: Option<f32>,
    pub text_align: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonNode {
    pub text: String,
    /// Symbolic action identifier, routed through the action router on tap
    pub action: String,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageNode {
    pub image_url: String,
    /// `fitXY`, `centerCrop`, `centerInside` or `fitCenter`
    pub content_scale: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardNode {
    /// Single nested child; a contentless card renders nothing
    pub content: Option<Box<ComponentNode>>,
    pub background_color: Option<String>,
    pub elevation: Option<f32>,
    /// Corner radius in layout units, as a string on the wire
    pub shape: Option<String>,
    /// Screen id to resolve and display when the card is tapped
    pub navigation_target: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnNode {
    pub children: Vec<ComponentNode>,
    pub vertical_arrangement: Option<String>,
    pub horizontal_alignment: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowNode {
    pub children: Vec<ComponentNode>,
    pub horizontal_arrangement: Option<String>,
    pub vertical_alignment: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LazyColumnNode {
    pub children: Vec<ComponentNode>,
    pub vertical_arrangement: Option<String>,
    pub horizontal_alignment: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LazyRowNode {
    pub children: Vec<ComponentNode>,
    pub horizontal_arrangement: Option<String>,
    pub vertical_alignment: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

/// Scrollable column that can also embed addressable screens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollViewNode {
    pub screens: Vec<ScreenNode>,
    pub children: Vec<ComponentNode>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpacerNode {
    pub height: u32,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxNode {
    pub children: Vec<ComponentNode>,
    pub content_alignment: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldNode {
    pub hint: String,
    /// Keyboard hint, defaults to `"text"` on the wire
    pub input_type: String,
    pub value: String,
    /// Symbolic action identifier fired on every edit
    pub on_value_change: String,
    pub modifier: Option<ModifierSpec>,
}

impl Default for TextFieldNode {
    fn default() -> Self {
        TextFieldNode {
            hint: String::new(),
            input_type: "text".to_string(),
            value: String::new(),
            on_value_change: String::new(),
            modifier: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DividerNode {
    pub color: Option<String>,
    pub thickness: Option<f32>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconNode {
    pub icon_name: String,
    pub tint_color: Option<String>,
    pub size: Option<f32>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwitchNode {
    pub is_checked: bool,
    pub on_checked_change_action: String,
    pub track_color: Option<String>,
    pub thumb_color: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckboxNode {
    pub is_checked: bool,
    pub on_checked_change_action: String,
    pub color: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderNode {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub on_value_change_action: String,
    pub track_color: Option<String>,
    pub thumb_color: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

impl Default for SliderNode {
    fn default() -> Self {
        SliderNode {
            value: 0.0,
            min: 0.0,
            max: 1.0,
            on_value_change_action: String::new(),
            track_color: None,
            thumb_color: None,
            modifier: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressBarNode {
    pub progress: f32,
    pub color: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FloatingActionButtonNode {
    pub icon: String,
    pub action: String,
    pub background_color: Option<String>,
    pub icon_tint: Option<String>,
    pub elevation: Option<f32>,
    pub shape: Option<String>,
    pub modifier: Option<ModifierSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_wire_discriminator() {
        let node = ComponentNode::Text(TextNode::default());
        assert_eq!(node.kind(), "Text");

        let node = ComponentNode::FloatingActionButton(FloatingActionButtonNode::default());
        assert_eq!(node.kind(), "FloatingActionButton");
    }

    #[test]
    fn test_modifier_accessor() {
        let spec = ModifierSpec {
            padding: Some(4),
            ..Default::default()
        };
        let node = ComponentNode::Spacer(SpacerNode {
            height: 10,
            modifier: Some(spec.clone()),
        });
        assert_eq!(node.modifier(), Some(&spec));

        let bare = ComponentNode::Divider(DividerNode::default());
        assert!(bare.modifier().is_none());
    }

    #[test]
    fn test_text_field_defaults() {
        let field = TextFieldNode::default();
        assert_eq!(field.input_type, "text");
        assert!(field.hint.is_empty());
    }

    #[test]
    fn test_slider_defaults() {
        let slider = SliderNode::default();
        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 1.0);
        assert_eq!(slider.value, 0.0);
    }
}
