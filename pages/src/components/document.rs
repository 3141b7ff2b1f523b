//! Root document component - the complete HTML page for one product.
//!
//! Composes the themed section stack (header, hero, features, carousel,
//! pricing, story, testimonials, FAQ, CTA, footer) and appends the inline
//! application script that wires theme persistence and carousel controls.

use super::{
    BottomCta, FaqSection, FeatureAccordion, HeroSection, ImageCarousel, PricingComparison,
    SiteFooter, SiteHeader, StoryBlock, StoryCards, Testimonials, TrustBar,
};
use crate::styles::{CSP, PAGE_CSS};
use crate::types::{PageSpec, Theme};
use crate::ScriptAssets;
use leptos::prelude::*;

/// The complete HTML document for a product page.
#[component]
pub fn PageDocument(spec: PageSpec, assets: ScriptAssets) -> impl IntoView {
    view! {
        <html class=Theme::default().class()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{spec.title.clone()}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <SiteHeader />
                <main>
                    <HeroSection hero=spec.hero />
                    <section class="section">
                        <TrustBar rating=spec.rating />
                        <FeatureAccordion
                            heading=spec.feature_heading
                            topics=spec.features
                            panel=spec.feature_image
                        />
                        <ImageCarousel slides=spec.slides />
                    </section>
                    <PricingComparison pricing=spec.pricing />
                    <StoryBlock company=spec.company story=spec.story />
                    <Testimonials items=spec.testimonials />
                    <StoryCards items=spec.story_cards />
                    <FaqSection faqs=spec.faqs />
                    <BottomCta cta=spec.cta />
                </main>
                <SiteFooter />
                <AppScripts assets=assets />
            </body>
        </html>
    }
}

/// Inline application script plus the optional WASM module loader.
#[component]
pub(crate) fn AppScripts(assets: ScriptAssets) -> impl IntoView {
    let has_wasm = !assets.wasm_glue_path.is_empty();
    let wasm_loader = format!(
        "import init, * as pageWasm from '{}';\n\
         init('{}').then(() => {{ window.__pageWasm = pageWasm; }});",
        assets.wasm_glue_path, assets.wasm_module_path,
    );

    view! {
        // Theme + carousel wiring FIRST (must run even without the module)
        <script>{APP_SCRIPT}</script>
        // Browser-native stepping logic (only when assets are provided)
        {has_wasm.then(|| view! {
            <script type="module">{wasm_loader}</script>
        })}
    }
}

/// Application logic (Theme bootstrap & toggle, Carousel navigation).
///
/// The theme read and the carousel arithmetic mirror
/// [`Theme::from_stored`](crate::types::Theme::from_stored) and
/// [`Carousel`](crate::types::Carousel); when the WASM module is loaded the
/// stepping calls go through it instead of the inline fallback.
const APP_SCRIPT: &str = r#"
(() => {
  // 0. Theme Initialization & Toggle
  const THEME_KEY = 'theme';
  const applyTheme = (theme) => {
      document.documentElement.classList.toggle('theme-light', theme === 'light');
      document.documentElement.classList.toggle('theme-dark', theme !== 'light');
  };
  // Absent or unrecognized stored values resolve to dark.
  const resolveTheme = (stored) =>
      stored === 'light' || stored === 'dark' ? stored : 'dark';

  applyTheme(resolveTheme(localStorage.getItem(THEME_KEY)));

  const themeToggle = document.querySelector('[data-role="theme-toggle"]');
  if (themeToggle) {
      themeToggle.addEventListener('click', () => {
          const next = document.documentElement.classList.contains('theme-light')
              ? 'dark'
              : 'light';
          localStorage.setItem(THEME_KEY, next);
          applyTheme(next);
      });
  }

  // 1. Carousel Navigation
  document.querySelectorAll('[data-carousel]').forEach(root => {
      const slides = root.querySelectorAll('.carousel-slide');
      const dots = root.querySelectorAll('.carousel-dot');
      const count = slides.length;
      if (count === 0) return;
      let index = 0;

      const wasm = () => window.__pageWasm;
      const forward = (i) => wasm() ? wasm().carousel_next(i, count) : (i + 1) % count;
      const back = (i) => wasm() ? wasm().carousel_previous(i, count) : (i + count - 1) % count;

      const show = (next) => {
          slides[index].classList.remove('active');
          if (dots[index]) dots[index].classList.remove('active');
          index = next;
          slides[index].classList.add('active');
          if (dots[index]) dots[index].classList.add('active');
      };

      root.querySelectorAll('[data-role="carousel-prev"]').forEach(btn => {
          btn.addEventListener('click', () => show(back(index)));
      });
      root.querySelectorAll('[data-role="carousel-next"]').forEach(btn => {
          btn.addEventListener('click', () => show(forward(index)));
      });
      dots.forEach((dot, i) => {
          dot.addEventListener('click', () => show(i));
      });
  });
})();
"#;
