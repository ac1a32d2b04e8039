//! Root Layout Tests
//!
//! Run with `wasm-pack test --headless --firefox crates/assistant-web`.

use assistant_core::{PageMetadata, SiteConfig};
use assistant_web::RootLayout;
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn config(title: &str, lang: &str, description: &str) -> SiteConfig {
    SiteConfig {
        metadata: PageMetadata {
            title: title.to_string(),
            description: description.to_string(),
            lang: lang.to_string(),
        },
        ..SiteConfig::default()
    }
}

fn description_content() -> Option<String> {
    document()
        .query_selector("meta[name=\"description\"]")
        .ok()
        .flatten()
        .and_then(|tag| tag.get_attribute("content"))
}

#[wasm_bindgen_test]
fn test_root_layout_writes_document_metadata() {
    let config = config("Vertragsassistent", "de", "Verträge im Gespräch erstellen");
    leptos::mount::mount_to_body(move || {
        view! {
            <RootLayout config=config>
                <p>"body"</p>
            </RootLayout>
        }
    });

    let doc = document();
    assert_eq!(doc.title(), "Vertragsassistent");
    assert_eq!(
        doc.document_element().and_then(|root| root.get_attribute("lang")),
        Some("de".to_string())
    );
    assert_eq!(
        description_content(),
        Some("Verträge im Gespräch erstellen".to_string())
    );
}

#[wasm_bindgen_test]
fn test_root_layout_updates_existing_description() {
    leptos::mount::mount_to_body(|| {
        view! {
            <RootLayout config=config("First", "en", "first description")>
                <p>"first"</p>
            </RootLayout>
        }
    });
    leptos::mount::mount_to_body(|| {
        view! {
            <RootLayout config=config("Second", "en", "second description")>
                <p>"second"</p>
            </RootLayout>
        }
    });

    assert_eq!(document().title(), "Second");
    assert_eq!(description_content(), Some("second description".to_string()));
}
