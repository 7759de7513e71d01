use serde_json::{Map, Value, json};
use vellum_types::*;

/// Encode a component tree back into its canonical wire form.
///
/// Canonical means: the `type` tag plus every field that is actually set.
/// Empty child lists and absent options are omitted, so
/// `decode_component(&encode_component(&tree))` reproduces `tree` exactly.
pub fn encode_component(node: &ComponentNode) -> Value {
    let mut obj = Map::new();
    obj.insert("type".to_string(), json!(node.kind()));

    match node {
        ComponentNode::Screen(n) => encode_screen_fields(&mut obj, n),

        ComponentNode::Container(n) => {
            put_screens(&mut obj, &n.screens);
            put_children(&mut obj, &n.children);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Text(n) => {
            put_str(&mut obj, "text", &n.text);
            put_opt_str(&mut obj, "color", &n.color);
            put_opt_f32(&mut obj, "fontSize", n.font_size);
            put_opt_str(&mut obj, "textAlign", &n.text_align);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Button(n) => {
            put_str(&mut obj, "text", &n.text);
            put_str(&mut obj, "action", &n.action);
            put_opt_str(&mut obj, "backgroundColor", &n.background_color);
            put_opt_str(&mut obj, "textColor", &n.text_color);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Image(n) => {
            put_str(&mut obj, "imageUrl", &n.image_url);
            put_opt_str(&mut obj, "contentScale", &n.content_scale);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Card(n) => {
            if let Some(content) = &n.content {
                obj.insert("content".to_string(), encode_component(content));
            }
            put_opt_str(&mut obj, "backgroundColor", &n.background_color);
            put_opt_f32(&mut obj, "elevation", n.elevation);
            put_opt_str(&mut obj, "shape", &n.shape);
            put_opt_str(&mut obj, "navigationTarget", &n.navigation_target);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Column(n) => {
            put_children(&mut obj, &n.children);
            put_opt_str(&mut obj, "verticalArrangement", &n.vertical_arrangement);
            put_opt_str(&mut obj, "horizontalAlignment", &n.horizontal_alignment);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Row(n) => {
            put_children(&mut obj, &n.children);
            put_opt_str(&mut obj, "horizontalArrangement", &n.horizontal_arrangement);
            put_opt_str(&mut obj, "verticalAlignment", &n.vertical_alignment);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::LazyColumn(n) => {
            put_children(&mut obj, &n.children);
            put_opt_str(&mut obj, "verticalArrangement", &n.vertical_arrangement);
            put_opt_str(&mut obj, "horizontalAlignment", &n.horizontal_alignment);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::LazyRow(n) => {
            put_children(&mut obj, &n.children);
            put_opt_str(&mut obj, "horizontalArrangement", &n.horizontal_arrangement);
            put_opt_str(&mut obj, "verticalAlignment", &n.vertical_alignment);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::ScrollView(n) => {
            put_screens(&mut obj, &n.screens);
            put_children(&mut obj, &n.children);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Spacer(n) => {
            obj.insert("height".to_string(), json!(n.height));
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Box(n) => {
            put_children(&mut obj, &n.children);
            put_opt_str(&mut obj, "contentAlignment", &n.content_alignment);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::TextField(n) => {
            put_str(&mut obj, "hint", &n.hint);
            obj.insert("inputType".to_string(), json!(n.input_type));
            put_str(&mut obj, "value", &n.value);
            put_str(&mut obj, "onValueChange", &n.on_value_change);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Divider(n) => {
            put_opt_str(&mut obj, "color", &n.color);
            put_opt_f32(&mut obj, "thickness", n.thickness);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Icon(n) => {
            put_str(&mut obj, "iconName", &n.icon_name);
            put_opt_str(&mut obj, "tintColor", &n.tint_color);
            put_opt_f32(&mut obj, "size", n.size);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Switch(n) => {
            obj.insert("isChecked".to_string(), json!(n.is_checked));
            put_str(&mut obj, "onCheckedChangeAction", &n.on_checked_change_action);
            put_opt_str(&mut obj, "trackColor", &n.track_color);
            put_opt_str(&mut obj, "thumbColor", &n.thumb_color);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Checkbox(n) => {
            obj.insert("isChecked".to_string(), json!(n.is_checked));
            put_str(&mut obj, "onCheckedChangeAction", &n.on_checked_change_action);
            put_opt_str(&mut obj, "color", &n.color);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::Slider(n) => {
            obj.insert("value".to_string(), json!(n.value));
            obj.insert("min".to_string(), json!(n.min));
            obj.insert("max".to_string(), json!(n.max));
            put_str(&mut obj, "onValueChangeAction", &n.on_value_change_action);
            put_opt_str(&mut obj, "trackColor", &n.track_color);
            put_opt_str(&mut obj, "thumbColor", &n.thumb_color);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::ProgressBar(n) => {
            obj.insert("progress".to_string(), json!(n.progress));
            put_opt_str(&mut obj, "color", &n.color);
            put_modifier(&mut obj, &n.modifier);
        }

        ComponentNode::FloatingActionButton(n) => {
            put_str(&mut obj, "icon", &n.icon);
            put_str(&mut obj, "action", &n.action);
            put_opt_str(&mut obj, "backgroundColor", &n.background_color);
            put_opt_str(&mut obj, "iconTint", &n.icon_tint);
            put_opt_f32(&mut obj, "elevation", n.elevation);
            put_opt_str(&mut obj, "shape", &n.shape);
            put_modifier(&mut obj, &n.modifier);
        }
    }

    Value::Object(obj)
}

fn encode_screen(screen: &ScreenNode) -> Value {
    let mut obj = Map::new();
    obj.insert("type".to_string(), json!("Screen"));
    encode_screen_fields(&mut obj, screen);
    Value::Object(obj)
}

fn encode_screen_fields(obj: &mut Map<String, Value>, screen: &ScreenNode) {
    obj.insert("id".to_string(), json!(screen.id));
    put_children(obj, &screen.children);
    put_modifier(obj, &screen.modifier);
}

fn encode_modifier(spec: &ModifierSpec) -> Value {
    let mut obj = Map::new();
    put_opt_u32(&mut obj, "padding", spec.padding);
    put_opt_u32(&mut obj, "height", spec.height);
    put_opt_u32(&mut obj, "width", spec.width);
    if let Some(v) = spec.fill_max_height {
        obj.insert("fillMaxHeight".to_string(), json!(v));
    }
    if let Some(v) = spec.fill_max_width {
        obj.insert("fillMaxWidth".to_string(), json!(v));
    }
    put_opt_str(&mut obj, "backgroundColor", &spec.background_color);
    put_opt_u32(&mut obj, "cornerRadius", spec.corner_radius);
    put_opt_u32(&mut obj, "elevation", spec.elevation);
    put_opt_str(&mut obj, "contentScale", &spec.content_scale);
    Value::Object(obj)
}

fn put_children(obj: &mut Map<String, Value>, children: &[ComponentNode]) {
    if !children.is_empty() {
        let encoded: Vec<Value> = children.iter().map(encode_component).collect();
        obj.insert("children".to_string(), Value::Array(encoded));
    }
}

fn put_screens(obj: &mut Map<String, Value>, screens: &[ScreenNode]) {
    if !screens.is_empty() {
        let encoded: Vec<Value> = screens.iter().map(encode_screen).collect();
        obj.insert("screens".to_string(), Value::Array(encoded));
    }
}

fn put_modifier(obj: &mut Map<String, Value>, modifier: &Option<ModifierSpec>) {
    if let Some(spec) = modifier {
        obj.insert("modifier".to_string(), encode_modifier(spec));
    }
}

fn put_str(obj: &mut Map<String, Value>, field: &str, value: &str) {
    obj.insert(field.to_string(), json!(value));
}

fn put_opt_str(obj: &mut Map<String, Value>, field: &str, value: &Option<String>) {
    if let Some(v) = value {
        obj.insert(field.to_string(), json!(v));
    }
}

fn put_opt_f32(obj: &mut Map<String, Value>, field: &str, value: Option<f32>) {
    if let Some(v) = value {
        obj.insert(field.to_string(), json!(v));
    }
}

fn put_opt_u32(obj: &mut Map<String, Value>, field: &str, value: Option<u32>) {
    if let Some(v) = value {
        obj.insert(field.to_string(), json!(v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_component;

    #[test]
    fn test_encode_carries_type_tag() {
        let value = encode_component(&ComponentNode::Divider(DividerNode::default()));
        assert_eq!(value["type"], "Divider");
    }

    #[test]
    fn test_empty_children_are_omitted() {
        let value = encode_component(&ComponentNode::Column(ColumnNode::default()));
        assert!(value.get("children").is_none());
    }

    #[test]
    fn test_round_trip_full_tree() {
        let tree = ComponentNode::Column(ColumnNode {
            children: vec![
                ComponentNode::Text(TextNode {
                    text: "Hi".to_string(),
                    color: Some("#202020".to_string()),
                    font_size: Some(16.0),
                    ..Default::default()
                }),
                ComponentNode::Card(CardNode {
                    content: Some(Box::new(ComponentNode::Button(ButtonNode {
                        text: "Go".to_string(),
                        action: "fetchData".to_string(),
                        ..Default::default()
                    }))),
                    navigation_target: Some("details".to_string()),
                    elevation: Some(4.0),
                    ..Default::default()
                }),
                ComponentNode::Spacer(SpacerNode {
                    height: 12,
                    modifier: Some(ModifierSpec {
                        padding: Some(8),
                        background_color: Some("#FF0000".to_string()),
                        ..Default::default()
                    }),
                }),
            ],
            ..Default::default()
        });

        let decoded = decode_component(&encode_component(&tree)).unwrap();
        assert_eq!(decoded, tree);
    }

    #[test]
    fn test_round_trip_screen_catalog() {
        let tree = ComponentNode::ScrollView(ScrollViewNode {
            screens: vec![
                ScreenNode {
                    id: "a".to_string(),
                    children: vec![ComponentNode::Text(TextNode {
                        text: "Screen A".to_string(),
                        ..Default::default()
                    })],
                    modifier: None,
                },
                ScreenNode {
                    id: "b".to_string(),
                    children: vec![],
                    modifier: None,
                },
            ],
            children: vec![ComponentNode::Divider(DividerNode::default())],
            modifier: None,
        });

        let decoded = decode_component(&encode_component(&tree)).unwrap();
        assert_eq!(decoded, tree);
    }

    #[test]
    fn test_decode_is_idempotent_on_canonical_form() {
        let source = serde_json::json!({
            "type": "Row",
            "children": [
                {"type": "Icon", "iconName": "star"},
                {"type": "Slider", "value": 0.5, "min": 0.0, "max": 2.0,
                 "onValueChangeAction": "printMessage"}
            ]
        });
        let first = decode_component(&source).unwrap();
        let second = decode_component(&encode_component(&first)).unwrap();
        assert_eq!(first, second);
    }
}
