//! Sticky site header with nav links and the theme toggle.
//!
//! The toggle button is the single write boundary for the persisted theme
//! preference; the application script owns the localStorage traffic.

use super::{Icon, ICON_MOON, ICON_SUN};
use leptos::prelude::*;

/// Sticky header with nav links and the theme toggle.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <a href="/" class="site-brand">"ADOPLE AI"</a>
                <nav class="site-nav">
                    <a href="/">"Deals"</a>
                    <a href="#pricing">"Pricing"</a>
                    <a href="#faq">"FAQ"</a>
                </nav>
                <div class="site-header-actions">
                    <a class="btn-browse" href="/">"Browse all deals"</a>
                    <a href="/cart" class="cart-link">"Cart"</a>
                    <button class="theme-toggle" data-role="theme-toggle" title="Toggle light/dark mode">
                        <span class="theme-icon-light"><Icon path=ICON_SUN size="18" /></span>
                        <span class="theme-icon-dark"><Icon path=ICON_MOON size="18" /></span>
                    </button>
                </div>
            </div>
        </header>
    }
}
