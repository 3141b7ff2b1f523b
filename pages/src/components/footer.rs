//! Four-column site footer.

use leptos::prelude::*;

/// Brand, account, company, and legal link columns.
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h4>"ADOPLE AI"</h4>
                    <p>"High-quality lifetime software deals."</p>
                </div>
                <div>
                    <h4>"Account"</h4>
                    <ul>
                        <li><a href="/signup">"Sign up"</a></li>
                        <li><a href="/login">"Log in"</a></li>
                        <li><a href="/redeem">"Redeem"</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"Company"</h4>
                    <ul>
                        <li><a href="/about">"About"</a></li>
                        <li><a href="/affiliates">"Affiliates"</a></li>
                        <li><a href="/contact">"Contact"</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"Legal & Learn"</h4>
                    <ul>
                        <li><a href="/terms">"Terms"</a></li>
                        <li><a href="/privacy">"Privacy"</a></li>
                        <li><a href="/learn/start-business">"Start an online business"</a></li>
                    </ul>
                </div>
            </div>
        </footer>
    }
}
