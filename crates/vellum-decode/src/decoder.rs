use serde_json::{Map, Value};
use vellum_types::*;

use crate::{Error, Result};

/// Parse raw document bytes and decode the root component.
pub fn decode_document(body: &str) -> Result<ComponentNode> {
    let value: Value = serde_json::from_str(body)?;
    decode_component(&value)
}

/// Decode one JSON value into a component node, recursing over children.
///
/// Dispatches on the mandatory `type` string. An absent or non-string `type`
/// is a `MissingField`/`TypeMismatch`; a string naming no variant is
/// `UnknownType` — never a silently-dropped node.
pub fn decode_component(value: &Value) -> Result<ComponentNode> {
    let obj = value.as_object().ok_or(Error::NotAnObject)?;
    let kind = req_str(obj, "type")?;
    let modifier = decode_modifier_field(obj)?;

    let node = match kind.as_str() {
        "Screen" => ComponentNode::Screen(decode_screen(obj)?),

        "Container" => ComponentNode::Container(ContainerNode {
            screens: decode_screens(obj)?,
            children: decode_children(obj)?,
            modifier,
        }),

        "Text" => ComponentNode::Text(TextNode {
            text: str_or_empty(obj, "text")?,
            color: opt_str(obj, "color")?,
            font_size: opt_f32(obj, "fontSize")?,
            text_align: opt_str(obj, "textAlign")?,
            modifier,
        }),

        "Button" => ComponentNode::Button(ButtonNode {
            text: str_or_empty(obj, "text")?,
            action: str_or_empty(obj, "action")?,
            background_color: opt_str(obj, "backgroundColor")?,
            text_color: opt_str(obj, "textColor")?,
            modifier,
        }),

        "Image" => ComponentNode::Image(ImageNode {
            image_url: str_or_empty(obj, "imageUrl")?,
            content_scale: opt_str(obj, "contentScale")?,
            modifier,
        }),

        "Card" => ComponentNode::Card(CardNode {
            content: decode_card_content(obj)?,
            background_color: opt_str(obj, "backgroundColor")?,
            elevation: opt_f32(obj, "elevation")?,
            shape: opt_str(obj, "shape")?,
            navigation_target: opt_str(obj, "navigationTarget")?,
            modifier,
        }),

        "Column" => ComponentNode::Column(ColumnNode {
            children: decode_children(obj)?,
            vertical_arrangement: opt_str(obj, "verticalArrangement")?,
            horizontal_alignment: opt_str(obj, "horizontalAlignment")?,
            modifier,
        }),

        "Row" => ComponentNode::Row(RowNode {
            children: decode_children(obj)?,
            horizontal_arrangement: opt_str(obj, "horizontalArrangement")?,
            vertical_alignment: opt_str(obj, "verticalAlignment")?,
            modifier,
        }),

        "LazyColumn" => ComponentNode::LazyColumn(LazyColumnNode {
            children: decode_children(obj)?,
            vertical_arrangement: opt_str(obj, "verticalArrangement")?,
            horizontal_alignment: opt_str(obj, "horizontalAlignment")?,
            modifier,
        }),

        "LazyRow" => ComponentNode::LazyRow(LazyRowNode {
            children: decode_children(obj)?,
            horizontal_arrangement: opt_str(obj, "horizontalArrangement")?,
            vertical_alignment: opt_str(obj, "verticalAlignment")?,
            modifier,
        }),

        "ScrollView" => ComponentNode::ScrollView(ScrollViewNode {
            screens: decode_screens(obj)?,
            children: decode_children(obj)?,
            modifier,
        }),

        "Spacer" => ComponentNode::Spacer(SpacerNode {
            height: u32_or(obj, "height", 0)?,
            modifier,
        }),

        "Box" => ComponentNode::Box(BoxNode {
            children: decode_children(obj)?,
            content_alignment: opt_str(obj, "contentAlignment")?,
            modifier,
        }),

        "TextField" => ComponentNode::TextField(TextFieldNode {
            hint: str_or_empty(obj, "hint")?,
            input_type: str_or(obj, "inputType", "text")?,
            value: str_or_empty(obj, "value")?,
            on_value_change: str_or_empty(obj, "onValueChange")?,
            modifier,
        }),

        "Divider" => ComponentNode::Divider(DividerNode {
            color: opt_str(obj, "color")?,
            thickness: opt_f32(obj, "thickness")?,
            modifier,
        }),

        "Icon" => ComponentNode::Icon(IconNode {
            icon_name: str_or_empty(obj, "iconName")?,
            tint_color: opt_str(obj, "tintColor")?,
            size: opt_f32(obj, "size")?,
            modifier,
        }),

        "Switch" => ComponentNode::Switch(SwitchNode {
            is_checked: bool_or(obj, "isChecked", false)?,
            on_checked_change_action: str_or_empty(obj, "onCheckedChangeAction")?,
            track_color: opt_str(obj, "trackColor")?,
            thumb_color: opt_str(obj, "thumbColor")?,
            modifier,
        }),

        "Checkbox" => ComponentNode::Checkbox(CheckboxNode {
            is_checked: bool_or(obj, "isChecked", false)?,
            on_checked_change_action: str_or_empty(obj, "onCheckedChangeAction")?,
            color: opt_str(obj, "color")?,
            modifier,
        }),

        "Slider" => ComponentNode::Slider(SliderNode {
            value: f32_or(obj, "value", 0.0)?,
            min: f32_or(obj, "min", 0.0)?,
            max: f32_or(obj, "max", 1.0)?,
            on_value_change_action: str_or_empty(obj, "onValueChangeAction")?,
            track_color: opt_str(obj, "trackColor")?,
            thumb_color: opt_str(obj, "thumbColor")?,
            modifier,
        }),

        "ProgressBar" => ComponentNode::ProgressBar(ProgressBarNode {
            progress: f32_or(obj, "progress", 0.0)?,
            color: opt_str(obj, "color")?,
            modifier,
        }),

        "FloatingActionButton" => ComponentNode::FloatingActionButton(FloatingActionButtonNode {
            icon: str_or_empty(obj, "icon")?,
            action: str_or_empty(obj, "action")?,
            background_color: opt_str(obj, "backgroundColor")?,
            icon_tint: opt_str(obj, "iconTint")?,
            elevation: opt_f32(obj, "elevation")?,
            shape: opt_str(obj, "shape")?,
            modifier,
        }),

        other => return Err(Error::UnknownType(other.to_string())),
    };

    Ok(node)
}

/// Decode an optional `modifier` object. Every field inside is optional.
pub fn decode_modifier(value: &Value) -> Result<ModifierSpec> {
    let obj = value.as_object().ok_or(Error::NotAnObject)?;

    let background_color = opt_str(obj, "backgroundColor")?;
    if let Some(color) = &background_color
        && !is_hex_color(color)
    {
        return Err(Error::TypeMismatch {
            field: "backgroundColor",
            expected: "a #RRGGBB or #AARRGGBB hex string",
        });
    }

    Ok(ModifierSpec {
        padding: opt_u32(obj, "padding")?,
        height: opt_u32(obj, "height")?,
        width: opt_u32(obj, "width")?,
        fill_max_height: opt_bool(obj, "fillMaxHeight")?,
        fill_max_width: opt_bool(obj, "fillMaxWidth")?,
        background_color,
        corner_radius: opt_u32(obj, "cornerRadius")?,
        elevation: opt_u32(obj, "elevation")?,
        content_scale: opt_str(obj, "contentScale")?,
    })
}

fn decode_modifier_field(obj: &Map<String, Value>) -> Result<Option<ModifierSpec>> {
    match obj.get("modifier") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode_modifier(value).map(Some),
    }
}

fn decode_screen(obj: &Map<String, Value>) -> Result<ScreenNode> {
    Ok(ScreenNode {
        id: req_str(obj, "id")?,
        children: decode_children(obj)?,
        modifier: decode_modifier_field(obj)?,
    })
}

/// Decode the `children` array; an absent array is an empty sequence.
fn decode_children(obj: &Map<String, Value>) -> Result<Vec<ComponentNode>> {
    match obj.get("children") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(decode_component).collect(),
        Some(_) => Err(Error::TypeMismatch {
            field: "children",
            expected: "an array",
        }),
    }
}

/// Decode the `screens` array, requiring every element to be a `Screen`.
fn decode_screens(obj: &Map<String, Value>) -> Result<Vec<ScreenNode>> {
    let items = match obj.get("screens") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(Error::TypeMismatch {
                field: "screens",
                expected: "an array",
            });
        }
    };

    items
        .iter()
        .map(|item| match decode_component(item)? {
            ComponentNode::Screen(screen) => Ok(screen),
            _ => Err(Error::TypeMismatch {
                field: "screens",
                expected: "an array of Screen nodes",
            }),
        })
        .collect()
}

fn decode_card_content(obj: &Map<String, Value>) -> Result<Option<Box<ComponentNode>>> {
    match obj.get("content") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(Box::new(decode_component(value)?))),
    }
}

fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 6 || digits.len() == 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

// Field readers. JSON null counts as absent everywhere; a present value of
// the wrong JSON type is a TypeMismatch, never a coercion.

fn req_str(obj: &Map<String, Value>, field: &'static str) -> Result<String> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(Error::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::TypeMismatch {
            field,
            expected: "a string",
        }),
    }
}

fn opt_str(obj: &Map<String, Value>, field: &'static str) -> Result<Option<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Error::TypeMismatch {
            field,
            expected: "a string",
        }),
    }
}

fn str_or_empty(obj: &Map<String, Value>, field: &'static str) -> Result<String> {
    Ok(opt_str(obj, field)?.unwrap_or_default())
}

fn str_or(obj: &Map<String, Value>, field: &'static str, default: &str) -> Result<String> {
    Ok(opt_str(obj, field)?.unwrap_or_else(|| default.to_string()))
}

/// Floats accept JSON integers as well as floats.
fn opt_f32(obj: &Map<String, Value>, field: &'static str) -> Result<Option<f32>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) => Ok(Some(v as f32)),
            None => Err(Error::TypeMismatch {
                field,
                expected: "a number",
            }),
        },
        Some(_) => Err(Error::TypeMismatch {
            field,
            expected: "a number",
        }),
    }
}

fn f32_or(obj: &Map<String, Value>, field: &'static str, default: f32) -> Result<f32> {
    Ok(opt_f32(obj, field)?.unwrap_or(default))
}

/// Unsigned fields reject negatives and fractions outright.
fn opt_u32(obj: &Map<String, Value>, field: &'static str) -> Result<Option<u32>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_u64().and_then(|v| u32::try_from(v).ok()) {
            Some(v) => Ok(Some(v)),
            None => Err(Error::TypeMismatch {
                field,
                expected: "a non-negative integer",
            }),
        },
        Some(_) => Err(Error::TypeMismatch {
            field,
            expected: "a non-negative integer",
        }),
    }
}

fn u32_or(obj: &Map<String, Value>, field: &'static str, default: u32) -> Result<u32> {
    Ok(opt_u32(obj, field)?.unwrap_or(default))
}

fn opt_bool(obj: &Map<String, Value>, field: &'static str) -> Result<Option<bool>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(Error::TypeMismatch {
            field,
            expected: "a boolean",
        }),
    }
}

fn bool_or(obj: &Map<String, Value>, field: &'static str, default: bool) -> Result<bool> {
    Ok(opt_bool(obj, field)?.unwrap_or(default))
}
