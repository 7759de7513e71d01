use serde_json::{Value, json};

/// A root document touching most node kinds, with modifiers and a card.
pub fn dashboard_document() -> Value {
    json!({
        "type": "ScrollView",
        "modifier": {"padding": 8},
        "children": [
            {"type": "Text", "text": "Dashboard", "fontSize": 24, "textAlign": "center"},
            {"type": "Divider"},
            {
                "type": "Card",
                "navigationTarget": "details",
                "elevation": 4,
                "content": {
                    "type": "Column",
                    "children": [
                        {"type": "Image", "imageUrl": "https://example.com/banner.png",
                         "contentScale": "centerCrop"},
                        {"type": "Text", "text": "Open details"}
                    ]
                }
            },
            {
                "type": "Row",
                "children": [
                    {"type": "Button", "text": "Refresh", "action": "fetchData"},
                    {"type": "Button", "text": "Hello", "action": "printMessage"}
                ]
            },
            {"type": "Spacer", "height": 12},
            {"type": "Slider", "value": 0.25, "onValueChangeAction": "showAlert"},
            {"type": "Switch", "isChecked": true, "onCheckedChangeAction": "printMessage"},
            {"type": "ProgressBar", "progress": 0.6, "color": "#3366FF"},
            {"type": "TextField", "hint": "Search", "onValueChange": "printMessage"},
            {"type": "FloatingActionButton", "icon": "+", "action": "fetchData"}
        ]
    })
}

/// A screen catalog: a scroll view embedding addressable screens plus one
/// screen nested deeper in the children, for resolver-order tests.
pub fn screen_catalog_document() -> Value {
    json!({
        "type": "ScrollView",
        "screens": [
            {
                "type": "Screen",
                "id": "details",
                "children": [
                    {"type": "Text", "text": "Details screen"},
                    {"type": "Button", "text": "Back", "action": "navigateToScreen"}
                ]
            },
            {
                "type": "Screen",
                "id": "settings",
                "children": [
                    {"type": "Checkbox", "isChecked": false,
                     "onCheckedChangeAction": "printMessage"}
                ]
            }
        ],
        "children": [
            {
                "type": "Container",
                "screens": [
                    {"type": "Screen", "id": "nested", "children": [
                        {"type": "Icon", "iconName": "gear"}
                    ]}
                ]
            }
        ]
    })
}

/// The smallest interesting document: the Column/Text/Button scenario.
pub fn column_scenario_document() -> Value {
    json!({
        "type": "Column",
        "children": [
            {"type": "Text", "text": "Hi"},
            {"type": "Button", "text": "Go", "action": "fetchData"}
        ]
    })
}

/// A document whose nested child fails decoding.
pub fn malformed_document() -> Value {
    json!({
        "type": "Column",
        "children": [{"type": "Mystery"}]
    })
}

/// Write a fixture document into `dir` for `FsFetcher`-based tests.
pub fn write_document(dir: &std::path::Path, name: &str, value: &Value) -> anyhow::Result<()> {
    std::fs::write(dir.join(name), serde_json::to_string_pretty(value)?)?;
    Ok(())
}
