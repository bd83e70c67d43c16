use super::*;

fn layout_box(
    base: &'static str,
    kind: &'static str,
    layout_class: Option<&'static str>,
    gap: LayoutGap,
    align: Option<LayoutAlign>,
    children: Children,
) -> HtmlElement<html::Div> {
    html::div()
        .attr("class", merge_layout_class(base, layout_class))
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", kind)
        .attr("data-ui-gap", gap.token())
        .attr("data-ui-align", align.map(LayoutAlign::token))
        .child(children())
}

#[component]
/// Column of children.
pub fn Stack(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] align: LayoutAlign,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    layout_box("ui-stack", "stack", layout_class, gap, Some(align), children)
        .attr("data-ui-padding", padding.token())
}

#[component]
/// Wrapping row of children, such as form actions or badges.
pub fn Cluster(
    #[prop(optional)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(optional)] justify: LayoutJustify,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    layout_box("ui-cluster", "cluster", layout_class, gap, Some(align), children)
        .attr("data-ui-justify", justify.token())
}

#[component]
/// Two-column grid for form fields and credit rows.
pub fn Grid(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    layout_box("ui-grid", "grid", layout_class, gap, None, children)
}
