use vellum_engine::{
    CardClick, ContentScale, Effect, RenderBackend, RenderContext, ResolvedStyle, ScreenRequests,
    TextAlign,
};
use vellum_types::*;

/// What a recording render pass produced for one node.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Leaf(String),
    Group {
        label: String,
        children: Vec<ViewNode>,
    },
}

impl ViewNode {
    /// Depth-first list of labels, for order assertions.
    pub fn flatten(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect(&self, out: &mut Vec<String>) {
        match self {
            ViewNode::Leaf(label) => out.push(label.clone()),
            ViewNode::Group { label, children } => {
                out.push(label.clone());
                for child in children {
                    child.collect(out);
                }
            }
        }
    }
}

/// A `ScreenRequests` that records requested targets.
#[derive(Default)]
pub struct RecordingScreenRequests {
    requested: std::sync::Mutex<Vec<String>>,
}

impl RecordingScreenRequests {
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl ScreenRequests for RecordingScreenRequests {
    fn request_screen(&self, target: &str) {
        self.requested.lock().unwrap().push(target.to_string());
    }
}

/// A render backend that builds a labelled shadow tree instead of widgets.
#[derive(Default)]
pub struct RecordingBackend;

fn group(label: String, children: Vec<ViewNode>) -> ViewNode {
    ViewNode::Group { label, children }
}

impl RenderBackend for RecordingBackend {
    type View = ViewNode;

    fn screen(
        &mut self,
        node: &ScreenNode,
        _style: &ResolvedStyle,
        children: Vec<ViewNode>,
    ) -> ViewNode {
        group(format!("Screen({})", node.id), children)
    }

    fn container(
        &mut self,
        _node: &ContainerNode,
        _style: &ResolvedStyle,
        children: Vec<ViewNode>,
    ) -> ViewNode {
        group("Container".to_string(), children)
    }

    fn text(&mut self, node: &TextNode, _align: TextAlign, _style: &ResolvedStyle) -> ViewNode {
        ViewNode::Leaf(format!("Text({})", node.text))
    }

    fn button(
        &mut self,
        _ctx: &RenderContext,
        node: &ButtonNode,
        _style: &ResolvedStyle,
        on_click: Effect,
    ) -> ViewNode {
        ViewNode::Leaf(format!("Button({}, {:?})", node.text, on_click))
    }

    fn image(
        &mut self,
        node: &ImageNode,
        scale: ContentScale,
        _style: &ResolvedStyle,
    ) -> ViewNode {
        ViewNode::Leaf(format!("Image({}, {:?})", node.image_url, scale))
    }

    fn card(
        &mut self,
        ctx: &RenderContext,
        _node: &CardNode,
        _style: &ResolvedStyle,
        click: CardClick,
        content: ViewNode,
    ) -> ViewNode {
        let label = match &click.navigate {
            Some(target) => {
                // Fire the navigation request immediately, standing in for
                // the tap a real backend would wire to the card.
                ctx.screens.request_screen(target);
                format!("Card(navigate={})", target)
            }
            None => "Card".to_string(),
        };
        group(label, vec![content])
    }

    fn column(
        &mut self,
        _node: &ColumnNode,
        _style: &ResolvedStyle,
        children: Vec<ViewNode>,
    ) -> ViewNode {
        group("Column".to_string(), children)
    }

    fn row(&mut self, _node: &RowNode, _style: &ResolvedStyle, children: Vec<ViewNode>) -> ViewNode {
        group("Row".to_string(), children)
    }

    fn lazy_column(
        &mut self,
        _node: &LazyColumnNode,
        _style: &ResolvedStyle,
        children: Vec<ViewNode>,
    ) -> ViewNode {
        group("LazyColumn".to_string(), children)
    }

    fn lazy_row(
        &mut self,
        _node: &LazyRowNode,
        _style: &ResolvedStyle,
        children: Vec<ViewNode>,
    ) -> ViewNode {
        group("LazyRow".to_string(), children)
    }

    fn scroll_view(
        &mut self,
        _node: &ScrollViewNode,
        _style: &ResolvedStyle,
        children: Vec<ViewNode>,
    ) -> ViewNode {
        group("ScrollView".to_string(), children)
    }

    fn spacer(&mut self, node: &SpacerNode) -> ViewNode {
        ViewNode::Leaf(format!("Spacer({})", node.height))
    }

    fn box_node(
        &mut self,
        _node: &BoxNode,
        _style: &ResolvedStyle,
        children: Vec<ViewNode>,
    ) -> ViewNode {
        group("Box".to_string(), children)
    }

    fn text_field(
        &mut self,
        _ctx: &RenderContext,
        node: &TextFieldNode,
        _style: &ResolvedStyle,
        on_change: Effect,
    ) -> ViewNode {
        ViewNode::Leaf(format!("TextField({}, {:?})", node.hint, on_change))
    }

    fn divider(&mut self, _node: &DividerNode, _style: &ResolvedStyle) -> ViewNode {
        ViewNode::Leaf("Divider".to_string())
    }

    fn icon(&mut self, node: &IconNode, _style: &ResolvedStyle) -> ViewNode {
        ViewNode::Leaf(format!("Icon({})", node.icon_name))
    }

    fn switch(
        &mut self,
        _ctx: &RenderContext,
        node: &SwitchNode,
        _style: &ResolvedStyle,
        on_toggle: Effect,
    ) -> ViewNode {
        ViewNode::Leaf(format!("Switch({}, {:?})", node.is_checked, on_toggle))
    }

    fn checkbox(
        &mut self,
        _ctx: &RenderContext,
        node: &CheckboxNode,
        _style: &ResolvedStyle,
        on_toggle: Effect,
    ) -> ViewNode {
        ViewNode::Leaf(format!("Checkbox({}, {:?})", node.is_checked, on_toggle))
    }

    fn slider(
        &mut self,
        _ctx: &RenderContext,
        node: &SliderNode,
        _style: &ResolvedStyle,
        on_change: Effect,
    ) -> ViewNode {
        ViewNode::Leaf(format!("Slider({}, {:?})", node.value, on_change))
    }

    fn progress_bar(&mut self, node: &ProgressBarNode, _style: &ResolvedStyle) -> ViewNode {
        ViewNode::Leaf(format!("ProgressBar({})", node.progress))
    }

    fn floating_action_button(
        &mut self,
        _ctx: &RenderContext,
        node: &FloatingActionButtonNode,
        _style: &ResolvedStyle,
        on_click: Effect,
    ) -> ViewNode {
        ViewNode::Leaf(format!("Fab({}, {:?})", node.icon, on_click))
    }

    fn empty(&mut self) -> ViewNode {
        ViewNode::Leaf("Empty".to_string())
    }
}
