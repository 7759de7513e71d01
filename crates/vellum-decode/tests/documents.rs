use anyhow::Result;
use vellum_decode::{decode_component, decode_document, encode_component};
use vellum_types::ComponentNode;

const CATALOG: &str = r#"
{
    "type": "ScrollView",
    "modifier": {"padding": 8, "fillMaxWidth": true},
    "screens": [
        {
            "type": "Screen",
            "id": "details",
            "children": [
                {"type": "Text", "text": "Details", "fontSize": 20},
                {"type": "Button", "text": "Back", "action": "navigateToScreen"}
            ]
        }
    ],
    "children": [
        {
            "type": "Card",
            "navigationTarget": "details",
            "elevation": 4,
            "content": {
                "type": "Column",
                "children": [
                    {"type": "Image", "imageUrl": "https://example.com/a.png"},
                    {"type": "Spacer", "height": 12},
                    {"type": "Text", "text": "Open"}
                ]
            }
        },
        {"type": "Slider", "onValueChangeAction": "showAlert"},
        {"type": "TextField", "hint": "Search"}
    ]
}
"#;

#[test]
fn test_decode_full_document() -> Result<()> {
    let tree = decode_document(CATALOG)?;

    let ComponentNode::ScrollView(scroll) = &tree else {
        panic!("expected a scroll view root, got {}", tree.kind());
    };

    assert_eq!(scroll.screens.len(), 1);
    assert_eq!(scroll.screens[0].id, "details");
    assert_eq!(scroll.screens[0].children.len(), 2);

    let modifier = scroll.modifier.as_ref().unwrap();
    assert_eq!(modifier.padding, Some(8));
    assert_eq!(modifier.fill_max_width, Some(true));

    let ComponentNode::Card(card) = &scroll.children[0] else {
        panic!("expected a card first");
    };
    assert_eq!(card.navigation_target.as_deref(), Some("details"));
    assert_eq!(card.elevation, Some(4.0));

    let ComponentNode::Column(column) = card.content.as_deref().unwrap() else {
        panic!("expected column card content");
    };
    assert_eq!(column.children.len(), 3);

    // Fields the document leaves out land on their declared defaults.
    let ComponentNode::Slider(slider) = &scroll.children[1] else {
        panic!("expected a slider");
    };
    assert_eq!(slider.value, 0.0);
    assert_eq!(slider.min, 0.0);
    assert_eq!(slider.max, 1.0);
    assert_eq!(slider.on_value_change_action, "showAlert");

    let ComponentNode::TextField(field) = &scroll.children[2] else {
        panic!("expected a text field");
    };
    assert_eq!(field.input_type, "text");
    assert_eq!(field.value, "");
    Ok(())
}

#[test]
fn test_canonical_round_trip_of_full_document() -> Result<()> {
    let tree = decode_document(CATALOG)?;
    let reparsed = decode_component(&encode_component(&tree))?;
    assert_eq!(reparsed, tree);
    Ok(())
}

#[test]
fn test_document_syntax_error_is_reported() {
    let err = decode_document("{\"type\": ").unwrap_err();
    assert!(err.to_string().starts_with("Malformed document:"));
}

#[test]
fn test_canonical_form_snapshot() -> Result<()> {
    let tree = decode_document(
        r#"{
            "type": "Column",
            "children": [
                {"type": "Text", "text": "Hi"},
                {"type": "Button", "text": "Go", "action": "fetchData"}
            ]
        }"#,
    )?;

    insta::assert_json_snapshot!(encode_component(&tree), @r#"
    {
      "children": [
        {
          "text": "Hi",
          "type": "Text"
        },
        {
          "action": "fetchData",
          "text": "Go",
          "type": "Button"
        }
      ],
      "type": "Column"
    }
    "#);
    Ok(())
}
