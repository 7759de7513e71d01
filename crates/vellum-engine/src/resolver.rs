use vellum_types::{ComponentNode, ScreenNode};

/// Locate a screen by id inside a decoded document.
///
/// Depth-first, first match wins. `ScrollView` and `Container` consult their
/// embedded `screens` list before recursing into `children`; every other
/// variant recurses into its content/children in declaration order. A miss is
/// `None` — a normal outcome, distinct from fetch or decode failure. Duplicate
/// ids are not detected; the traversal order decides which one surfaces.
pub fn find_screen<'a>(id: &str, root: &'a ComponentNode) -> Option<&'a ScreenNode> {
    match root {
        ComponentNode::Screen(screen) => {
            if screen.id == id {
                return Some(screen);
            }
            find_in_children(id, &screen.children)
        }

        ComponentNode::ScrollView(scroll) => scroll
            .screens
            .iter()
            .find(|screen| screen.id == id)
            .or_else(|| find_in_screens(id, &scroll.screens))
            .or_else(|| find_in_children(id, &scroll.children)),

        ComponentNode::Container(container) => container
            .screens
            .iter()
            .find(|screen| screen.id == id)
            .or_else(|| find_in_screens(id, &container.screens))
            .or_else(|| find_in_children(id, &container.children)),

        ComponentNode::Card(card) => card
            .content
            .as_deref()
            .and_then(|content| find_screen(id, content)),

        ComponentNode::Column(n) => find_in_children(id, &n.children),
        ComponentNode::Row(n) => find_in_children(id, &n.children),
        ComponentNode::LazyColumn(n) => find_in_children(id, &n.children),
        ComponentNode::LazyRow(n) => find_in_children(id, &n.children),
        ComponentNode::Box(n) => find_in_children(id, &n.children),

        // Leaves hold no screens.
        ComponentNode::Text(_)
        | ComponentNode::Button(_)
        | ComponentNode::Image(_)
        | ComponentNode::Spacer(_)
        | ComponentNode::TextField(_)
        | ComponentNode::Divider(_)
        | ComponentNode::Icon(_)
        | ComponentNode::Switch(_)
        | ComponentNode::Checkbox(_)
        | ComponentNode::Slider(_)
        | ComponentNode::ProgressBar(_)
        | ComponentNode::FloatingActionButton(_) => None,
    }
}

/// Search inside embedded screens that did not match by id themselves.
fn find_in_screens<'a>(id: &str, screens: &'a [ScreenNode]) -> Option<&'a ScreenNode> {
    screens
        .iter()
        .find_map(|screen| find_in_children(id, &screen.children))
}

fn find_in_children<'a>(id: &str, children: &'a [ComponentNode]) -> Option<&'a ScreenNode> {
    children.iter().find_map(|child| find_screen(id, child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_types::*;

    fn screen(id: &str, children: Vec<ComponentNode>) -> ScreenNode {
        ScreenNode {
            id: id.to_string(),
            children,
            modifier: None,
        }
    }

    fn text(content: &str) -> ComponentNode {
        ComponentNode::Text(TextNode {
            text: content.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_miss_on_screenless_tree() {
        let tree = ComponentNode::Column(ColumnNode {
            children: vec![text("a"), text("b")],
            ..Default::default()
        });
        assert!(find_screen("x", &tree).is_none());
    }

    #[test]
    fn test_direct_screen_match() {
        let tree = ComponentNode::Screen(screen("home", vec![text("hi")]));
        let found = find_screen("home", &tree).expect("screen should resolve");
        assert_eq!(found.id, "home");
    }

    #[test]
    fn test_scroll_view_screens_list_before_children() {
        // Duplicate id: one in the screens list, one nested in children.
        // The screens list wins per traversal order.
        let in_list = screen("dup", vec![text("from list")]);
        let nested = ComponentNode::Column(ColumnNode {
            children: vec![ComponentNode::Screen(screen("dup", vec![text("nested")]))],
            ..Default::default()
        });
        let tree = ComponentNode::ScrollView(ScrollViewNode {
            screens: vec![in_list],
            children: vec![nested],
            modifier: None,
        });

        let found = find_screen("dup", &tree).expect("screen should resolve");
        match &found.children[0] {
            ComponentNode::Text(node) => assert_eq!(node.text, "from list"),
            other => panic!("expected Text, got {}", other.kind()),
        }
    }

    #[test]
    fn test_container_screens_searched_by_id() {
        let tree = ComponentNode::Container(ContainerNode {
            screens: vec![screen("first", vec![]), screen("second", vec![])],
            children: vec![],
            modifier: None,
        });
        assert_eq!(find_screen("second", &tree).map(|s| s.id.as_str()), Some("second"));
    }

    #[test]
    fn test_screen_nested_inside_embedded_screen() {
        // A screen buried inside another screen's children is still reachable.
        let inner = ComponentNode::Screen(screen("inner", vec![]));
        let outer = screen("outer", vec![inner]);
        let tree = ComponentNode::ScrollView(ScrollViewNode {
            screens: vec![outer],
            children: vec![],
            modifier: None,
        });
        assert!(find_screen("inner", &tree).is_some());
    }

    #[test]
    fn test_first_match_wins_across_depths() {
        let shallow = ComponentNode::Screen(screen("dup", vec![text("shallow")]));
        let deep = ComponentNode::Box(BoxNode {
            children: vec![ComponentNode::Screen(screen("dup", vec![text("deep")]))],
            ..Default::default()
        });
        let tree = ComponentNode::Column(ColumnNode {
            children: vec![shallow, deep],
            ..Default::default()
        });

        let found = find_screen("dup", &tree).expect("screen should resolve");
        match &found.children[0] {
            ComponentNode::Text(node) => assert_eq!(node.text, "shallow"),
            other => panic!("expected Text, got {}", other.kind()),
        }
    }

    #[test]
    fn test_card_content_is_searched() {
        let tree = ComponentNode::Card(CardNode {
            content: Some(Box::new(ComponentNode::Screen(screen("tucked", vec![])))),
            ..Default::default()
        });
        assert!(find_screen("tucked", &tree).is_some());
        assert!(find_screen("absent", &tree).is_none());
    }

    #[test]
    fn test_contentless_card_is_a_miss() {
        let tree = ComponentNode::Card(CardNode::default());
        assert!(find_screen("x", &tree).is_none());
    }
}
