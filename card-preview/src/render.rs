//! Server-side rendering of a card into a standalone HTML document

use card_ui::Card;
use dioxus::prelude::*;

/// What to put in the previewed card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewConfig {
    pub text: String,
    pub class: String,
    pub shadow: bool,
    pub stylesheet: Option<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            text: "hello".to_string(),
            class: String::new(),
            shadow: true,
            stylesheet: None,
        }
    }
}

#[component]
fn PreviewDocument(
    text: String,
    class: String,
    shadow: bool,
    stylesheet: Option<String>,
) -> Element {
    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                title { "Card preview" }
                if let Some(href) = stylesheet {
                    link { rel: "stylesheet", href }
                }
            }
            body {
                Card { class, shadow, "{text}" }
            }
        }
    }
}

/// Render the preview page, doctype included.
pub fn render_document(config: &PreviewConfig) -> String {
    let props = PreviewDocumentProps {
        text: config.text.clone(),
        class: config.class.clone(),
        shadow: config.shadow,
        stylesheet: config.stylesheet.clone(),
    };

    let mut dom = VirtualDom::new_with_props(PreviewDocument, props);
    dom.rebuild_in_place();

    format!("<!DOCTYPE html>{}", dioxus_ssr::render(&dom))
}
