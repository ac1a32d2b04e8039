//! Root Layout
//!
//! Document metadata, theme stylesheet and the body wrapper every page
//! renders inside.

use assistant_core::{PageMetadata, SiteConfig};
use leptos::prelude::*;

const APP_CSS: &str = include_str!("../style/app.css");

#[component]
pub fn RootLayout(config: SiteConfig, children: Children) -> impl IntoView {
    apply_metadata(&config.metadata);
    let theme_css = config.theme.stylesheet();

    view! {
        <style>{theme_css}</style>
        <style>{APP_CSS}</style>
        <div class="font-sans antialiased">{children()}</div>
    }
}

/// Title, `lang` and description live outside the mounted tree
fn apply_metadata(metadata: &PageMetadata) {
    let doc = document();
    doc.set_title(&metadata.title);

    match doc.document_element() {
        Some(root) => set_attribute(&root, "lang", &metadata.lang),
        None => leptos::logging::warn!("could not set page language"),
    }

    let description = doc
        .query_selector("meta[name=\"description\"]")
        .ok()
        .flatten()
        .or_else(|| {
            let tag = doc.create_element("meta").ok()?;
            set_attribute(&tag, "name", "description");
            doc.head()?.append_child(&tag).ok()?;
            Some(tag)
        });

    match description {
        Some(tag) => set_attribute(&tag, "content", &metadata.description),
        None => leptos::logging::warn!("could not set page description"),
    }
}

fn set_attribute(element: &web_sys::Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        leptos::logging::warn!("could not set {name}={value:?}: {e:?}");
    }
}
