use vellum_types::*;

use crate::actions::{Effect, resolve_action};
use crate::style::{ContentScale, ResolvedStyle, TextAlign, resolve_modifiers};

/// Navigation capability injected by the host.
///
/// A card tap with a `navigationTarget` asks the host to fetch the screen
/// document, resolve the id and surface the result (or a not-found signal).
/// The dispatcher only wires the request; it never performs the fetch.
pub trait ScreenRequests {
    fn request_screen(&self, target: &str);
}

/// What the host receives for a tappable card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardClick {
    /// Screen id to resolve on tap, when the card declares one.
    /// Runs independently of any other click effect bound to the card.
    pub navigate: Option<String>,
}

/// Capabilities and configuration shared by one render pass.
pub struct RenderContext<'a> {
    pub config: &'a RemoteComposeConfig,
    pub screens: &'a dyn ScreenRequests,
}

/// The platform's rendering primitives, one constructor per node kind.
///
/// Implementations own widget construction entirely; the dispatcher hands
/// them resolved styling and pre-routed effects, never raw action strings.
pub trait RenderBackend {
    type View;

    fn screen(&mut self, node: &ScreenNode, style: &ResolvedStyle, children: Vec<Self::View>)
    -> Self::View;
    fn container(
        &mut self,
        node: &ContainerNode,
        style: &ResolvedStyle,
        children: Vec<Self::View>,
    ) -> Self::View;
    fn text(&mut self, node: &TextNode, align: TextAlign, style: &ResolvedStyle) -> Self::View;
    fn button(
        &mut self,
        ctx: &RenderContext,
        node: &ButtonNode,
        style: &ResolvedStyle,
        on_click: Effect,
    ) -> Self::View;
    fn image(&mut self, node: &ImageNode, scale: ContentScale, style: &ResolvedStyle)
    -> Self::View;
    fn card(
        &mut self,
        ctx: &RenderContext,
        node: &CardNode,
        style: &ResolvedStyle,
        click: CardClick,
        content: Self::View,
    ) -> Self::View;
    fn column(&mut self, node: &ColumnNode, style: &ResolvedStyle, children: Vec<Self::View>)
    -> Self::View;
    fn row(&mut self, node: &RowNode, style: &ResolvedStyle, children: Vec<Self::View>)
    -> Self::View;
    fn lazy_column(
        &mut self,
        node: &LazyColumnNode,
        style: &ResolvedStyle,
        children: Vec<Self::View>,
    ) -> Self::View;
    fn lazy_row(
        &mut self,
        node: &LazyRowNode,
        style: &ResolvedStyle,
        children: Vec<Self::View>,
    ) -> Self::View;
    fn scroll_view(
        &mut self,
        node: &ScrollViewNode,
        style: &ResolvedStyle,
        children: Vec<Self::View>,
    ) -> Self::View;
    fn spacer(&mut self, node: &SpacerNode) -> Self::View;
    fn box_node(&mut self, node: &BoxNode, style: &ResolvedStyle, children: Vec<Self::View>)
    -> Self::View;
    fn text_field(
        &mut self,
        ctx: &RenderContext,
        node: &TextFieldNode,
        style: &ResolvedStyle,
        on_change: Effect,
    ) -> Self::View;
    fn divider(&mut self, node: &DividerNode, style: &ResolvedStyle) -> Self::View;
    fn icon(&mut self, node: &IconNode, style: &ResolvedStyle) -> Self::View;
    fn switch(
        &mut self,
        ctx: &RenderContext,
        node: &SwitchNode,
        style: &ResolvedStyle,
        on_toggle: Effect,
    ) -> Self::View;
    fn checkbox(
        &mut self,
        ctx: &RenderContext,
        node: &CheckboxNode,
        style: &ResolvedStyle,
        on_toggle: Effect,
    ) -> Self::View;
    fn slider(
        &mut self,
        ctx: &RenderContext,
        node: &SliderNode,
        style: &ResolvedStyle,
        on_change: Effect,
    ) -> Self::View;
    fn progress_bar(&mut self, node: &ProgressBarNode, style: &ResolvedStyle) -> Self::View;
    fn floating_action_button(
        &mut self,
        ctx: &RenderContext,
        node: &FloatingActionButtonNode,
        style: &ResolvedStyle,
        on_click: Effect,
    ) -> Self::View;

    /// Emitted for nodes that render nothing, e.g. a contentless card.
    fn empty(&mut self) -> Self::View;
}

/// Walk a component tree and emit platform views.
///
/// One case per variant. Children are rendered before their parent and passed
/// in declaration order, so the visual order matches the JSON array order.
/// A successfully decoded tree is always renderable — there is no error path.
pub fn render<B: RenderBackend>(
    node: &ComponentNode,
    ctx: &RenderContext,
    backend: &mut B,
) -> B::View {
    let style = resolve_modifiers(node.modifier());

    match node {
        ComponentNode::Screen(n) => {
            let children = render_children(&n.children, ctx, backend);
            backend.screen(n, &style, children)
        }

        ComponentNode::Container(n) => {
            let children = render_children(&n.children, ctx, backend);
            backend.container(n, &style, children)
        }

        ComponentNode::Text(n) => {
            let align = TextAlign::parse(n.text_align.as_deref());
            backend.text(n, align, &style)
        }

        ComponentNode::Button(n) => {
            let on_click = resolve_action(&n.action);
            backend.button(ctx, n, &style, on_click)
        }

        ComponentNode::Image(n) => {
            let scale = ContentScale::parse(n.content_scale.as_deref());
            backend.image(n, scale, &style)
        }

        ComponentNode::Card(n) => match &n.content {
            Some(content) => {
                let click = CardClick {
                    navigate: n.navigation_target.clone(),
                };
                let content = render(content, ctx, backend);
                backend.card(ctx, n, &style, click, content)
            }
            None => backend.empty(),
        },

        ComponentNode::Column(n) => {
            let children = render_children(&n.children, ctx, backend);
            backend.column(n, &style, children)
        }

        ComponentNode::Row(n) => {
            let children = render_children(&n.children, ctx, backend);
            backend.row(n, &style, children)
        }

        ComponentNode::LazyColumn(n) => {
            let children = render_children(&n.children, ctx, backend);
            backend.lazy_column(n, &style, children)
        }

        ComponentNode::LazyRow(n) => {
            let children = render_children(&n.children, ctx, backend);
            backend.lazy_row(n, &style, children)
        }

        ComponentNode::ScrollView(n) => {
            let children = render_children(&n.children, ctx, backend);
            backend.scroll_view(n, &style, children)
        }

        ComponentNode::Spacer(n) => backend.spacer(n),

        ComponentNode::Box(n) => {
            let children = render_children(&n.children, ctx, backend);
            backend.box_node(n, &style, children)
        }

        ComponentNode::TextField(n) => {
            let on_change = resolve_action(&n.on_value_change);
            backend.text_field(ctx, n, &style, on_change)
        }

        ComponentNode::Divider(n) => backend.divider(n, &style),

        ComponentNode::Icon(n) => backend.icon(n, &style),

        ComponentNode::Switch(n) => {
            let on_toggle = resolve_action(&n.on_checked_change_action);
            backend.switch(ctx, n, &style, on_toggle)
        }

        ComponentNode::Checkbox(n) => {
            let on_toggle = resolve_action(&n.on_checked_change_action);
            backend.checkbox(ctx, n, &style, on_toggle)
        }

        ComponentNode::Slider(n) => {
            let on_change = resolve_action(&n.on_value_change_action);
            backend.slider(ctx, n, &style, on_change)
        }

        ComponentNode::ProgressBar(n) => backend.progress_bar(n, &style),

        ComponentNode::FloatingActionButton(n) => {
            let on_click = resolve_action(&n.action);
            backend.floating_action_button(ctx, n, &style, on_click)
        }
    }
}

fn render_children<B: RenderBackend>(
    children: &[ComponentNode],
    ctx: &RenderContext,
    backend: &mut B,
) -> Vec<B::View> {
    children
        .iter()
        .map(|child| render(child, ctx, backend))
        .collect()
}
