//! Card container component

use dioxus::prelude::*;

/// Raised surface background
pub const CARD_BACKGROUND: &str = "bg-surface-raised";
/// Rounded corners
pub const CARD_ROUNDED: &str = "rounded-lg";
/// Drop shadow, omitted when `shadow` is false
pub const CARD_SHADOW: &str = "shadow-lg";
/// Inner padding
pub const CARD_PADDING: &str = "p-6";
/// Clips content that overflows the rounded box
pub const CARD_OVERFLOW: &str = "overflow-hidden";

/// Compute the class list for a card.
///
/// Base classes come first, in a fixed order, and the caller's `class` is
/// appended last so it can extend or override them. An omitted shadow or an
/// empty `class` contributes nothing, not even a separator.
pub fn card_class(class: &str, shadow: bool) -> String {
    let shadow = if shadow { CARD_SHADOW } else { "" };

    [
        CARD_BACKGROUND,
        CARD_ROUNDED,
        shadow,
        CARD_PADDING,
        CARD_OVERFLOW,
        class,
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Raised, rounded container with standard padding that clips its content.
#[component]
pub fn Card(
    #[props(default)] class: String,
    #[props(default = true)] shadow: bool,
    children: Element,
) -> Element {
    let computed_class = card_class(&class, shadow);

    rsx! {
        div { class: "{computed_class}", {children} }
    }
}
