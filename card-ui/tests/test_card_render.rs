use card_ui::{card_class, Card};
use dioxus::prelude::*;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn opening_tag(class: &str) -> String {
    format!("<div class=\"{class}\">")
}

#[test]
fn renders_text_child_unwrapped() {
    fn app() -> Element {
        rsx! {
            Card { "hello" }
        }
    }

    let html = render(app);
    assert_eq!(
        html,
        format!("{}hello</div>", opening_tag(&card_class("", true)))
    );
}

#[test]
fn shadow_defaults_to_on() {
    fn implicit() -> Element {
        rsx! {
            Card { "x" }
        }
    }
    fn explicit() -> Element {
        rsx! {
            Card { shadow: true, "x" }
        }
    }

    let html = render(implicit);
    assert!(html.contains("shadow-lg"));
    assert_eq!(html, render(explicit));
}

#[test]
fn shadow_off_omits_shadow_class() {
    fn app() -> Element {
        rsx! {
            Card { shadow: false, "x" }
        }
    }

    let html = render(app);
    assert!(!html.contains("shadow-lg"));
    assert!(html.starts_with(&opening_tag(&card_class("", false))));
}

#[test]
fn caller_class_is_trailing() {
    fn app() -> Element {
        rsx! {
            Card { class: "mt-4 w-full", "x" }
        }
    }

    let html = render(app);
    assert!(html.starts_with(
        "<div class=\"bg-surface-raised rounded-lg shadow-lg p-6 overflow-hidden mt-4 w-full\">"
    ));
}

#[test]
fn empty_children_keep_styling() {
    fn empty() -> Element {
        rsx! {
            Card { class: "grid" }
        }
    }
    fn filled() -> Element {
        rsx! {
            Card { class: "grid", "hello" }
        }
    }

    let tag = opening_tag(&card_class("grid", true));
    let empty_html = render(empty);
    let filled_html = render(filled);

    assert!(empty_html.starts_with(&tag));
    assert!(filled_html.starts_with(&tag));
    assert!(empty_html.ends_with("</div>"));
    assert!(!empty_html.contains("hello"));
}

#[test]
fn nested_children_are_not_rewrapped() {
    fn app() -> Element {
        rsx! {
            Card { shadow: false,
                h3 { "Title" }
                p { "Body" }
            }
        }
    }

    let html = render(app);
    assert_eq!(
        html,
        format!(
            "{}<h3>Title</h3><p>Body</p></div>",
            opening_tag(&card_class("", false))
        )
    );
}

#[test]
fn rerender_is_identical() {
    fn app() -> Element {
        rsx! {
            Card { class: "flex", shadow: false, "same" }
        }
    }

    assert_eq!(render(app), render(app));
}
