//! Main App Component

use assistant_core::SiteConfig;
use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::layout::RootLayout;
use crate::pages::{ChatPage, PreviewPage};
use crate::state::ConversationState;

const SITE_CONFIG: &str = include_str!("../site.json");

fn load_site_config() -> SiteConfig {
    SiteConfig::from_json(SITE_CONFIG).unwrap_or_else(|e| {
        leptos::logging::error!("site.json rejected, using built-in defaults: {e}");
        SiteConfig::default()
    })
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    ConversationState::provide();

    view! {
        <RootLayout config=load_site_config()>
            <Router>
                <main class="app">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=ChatPage />
                        <Route path=path!("/preview") view=PreviewPage />
                    </Routes>
                </main>
            </Router>
        </RootLayout>
    }
}
