use crate::markup::document::MarkupNode;

/// Binding attributes, highest precedence first: two-way, one-way
/// (assignment form), one-way (expression form).
pub const BINDING_ATTRIBUTES: [&str; 3] = ["[(ngModel)]", "[(value)]", "[value]"];

/// Model property an element is bound to.
///
/// Falls back to the element's `id` when no binding attribute is present and
/// to an empty string when there is no `id` either.
pub fn resolve_binding_name<N: MarkupNode>(node: &N) -> String {
    let candidate = BINDING_ATTRIBUTES
        .iter()
        .find_map(|attr| node.attribute(attr))
        .or_else(|| node.attribute("id"))
        .unwrap_or_default();

    strip_namespace(&candidate).to_string()
}

/// `form.loan.amount` -> `amount`. Strings without a `.` pass through.
pub fn strip_namespace(candidate: &str) -> &str {
    match candidate.rfind('.') {
        Some(idx) => &candidate[idx + 1..],
        None => candidate,
    }
}
