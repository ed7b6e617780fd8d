use yew::prelude::*;

use crate::components::anchor_scroll::use_anchor_scroll;
use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::components::hotspots::{Hotspot, ProductShowcase};
use crate::components::page_shell::use_will_change_hints;
use crate::components::pointer_fx::{use_cursor_glow, use_parallax, MagneticButton};
use crate::components::reveal::use_reveal_on_scroll;

/// Served by Trunk from the copied `assets/` directory.
const PRODUCT_IMAGE: &str = "/assets/covasol-x1.svg";

fn hotspots() -> Vec<Hotspot> {
    vec![
        Hotspot {
            title: "50mm graphene drivers".into(),
            detail: "Tight bass and a treble that stays clean at any volume.".into(),
            left: 28.0,
            top: 34.0,
        },
        Hotspot {
            title: "Adaptive ANC".into(),
            detail: "Six microphones tune noise cancelling to the room forty times a second.".into(),
            left: 70.0,
            top: 42.0,
        },
        Hotspot {
            title: "Memory-foam cushions".into(),
            detail: "Protein leather over slow-rebound foam for all-day listening.".into(),
            left: 48.0,
            top: 76.0,
        },
    ]
}

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How long does the battery last?".into(),
            answer: "Up to 60 hours with ANC off and 40 hours with ANC on. Ten minutes of charging gives five hours of playback.".into(),
        },
        FaqEntry {
            question: "Which codecs are supported?".into(),
            answer: "LDAC, aptX Adaptive, AAC and SBC over Bluetooth 5.3, plus lossless USB-C audio.".into(),
        },
        FaqEntry {
            question: "Can I pair two devices at once?".into(),
            answer: "Yes. Multipoint keeps your laptop and phone connected and switches to whichever starts playing.".into(),
        },
        FaqEntry {
            question: "What does the warranty cover?".into(),
            answer: "Two years against manufacturing defects, including the battery. Cushions are replaceable at any time.".into(),
        },
    ]
}

const FEATURES: [(&str, &str, &str); 4] = [
    ("◉", "Studio tuning", "Calibrated against reference monitors for a neutral, detailed sound stage."),
    ("◐", "Silence on demand", "Adaptive noise cancelling with a transparency mode that sounds natural."),
    ("⚡", "Fast charge", "Five hours of music from a ten-minute top-up over USB-C."),
    ("✦", "Spatial audio", "Head-tracked spatial rendering for films and games."),
];

const STATS: [(&str, &str); 4] = [
    ("60h", "Battery life"),
    ("-42dB", "Noise reduction"),
    ("250g", "Weight"),
    ("20kHz+", "Hi-Res certified"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    use_will_change_hints();
    use_reveal_on_scroll();
    use_parallax();
    use_cursor_glow();
    use_anchor_scroll();

    html! {
        <div class="landing-page">
            <section id="hero" class="hero">
                <div class="parallax-bg"></div>
                <div class="cyber-grid"></div>
                <div class="particles">
                    { for (0..9).map(|i| html! {
                        <span class="particle" style={format!("left: {}%; animation-delay: {}s;", 8 + i * 10, i)}></span>
                    }) }
                </div>
                <div class="hero-content">
                    <div class="hero-text reveal-left">
                        <span class="hero-eyebrow">{"Covasol Gear X1"}</span>
                        <h1>{"Hear every detail. Feel nothing else."}</h1>
                        <p class="hero-subtitle">
                            {"Wireless over-ear headphones with studio tuning, adaptive noise cancelling and a battery that outlasts your week."}
                        </p>
                        <div class="hero-actions">
                            <MagneticButton href="#contact">{"Pre-order now"}</MagneticButton>
                            <a href="#features" class="btn btn-ghost">{"Explore features"}</a>
                        </div>
                    </div>
                    <div class="reveal-right">
                        <ProductShowcase
                            image={PRODUCT_IMAGE}
                            alt="Covasol Gear X1 headphones"
                            hotspots={hotspots()}
                        />
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <h2 class="reveal">{"Engineered for listening"}</h2>
                <div class="features-grid stagger-children">
                    { for FEATURES.iter().map(|(icon, title, body)| html! {
                        <div class="feature-card">
                            <span class="feature-icon">{*icon}</span>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="specs" class="specs">
                <div class="stats-grid stagger-children">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div class="stat-item">
                            <span class="stat-value">{*value}</span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section id="reviews" class="testimonials">
                <h2 class="reveal">{"What listeners say"}</h2>
                <div class="testimonial-grid">
                    <blockquote class="testimonial-card reveal-left">
                        <p>{"The noise cancelling turned my commute into a listening room."}</p>
                        <cite>{"Minh A., sound engineer"}</cite>
                    </blockquote>
                    <blockquote class="testimonial-card reveal-right">
                        <p>{"I forget I am wearing them until the album ends."}</p>
                        <cite>{"Lan T., producer"}</cite>
                    </blockquote>
                </div>
            </section>

            <section id="faq" class="faq">
                <h2 class="reveal">{"Questions, answered"}</h2>
                <FaqAccordion entries={faq_entries()} />
            </section>

            <section id="contact" class="contact reveal">
                <h2>{"Ready to listen closer?"}</h2>
                <p>{"Pre-orders ship in the first wave with a free travel case."}</p>
                <MagneticButton href="mailto:hello@covasol.com.vn">{"Reserve yours"}</MagneticButton>
                <a href="#" class="back-to-top">{"Back to top"}</a>
            </section>

            <footer class="footer">
                <p>{"© Covasol Gear. Premium headphones by covasol.com.vn"}</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn product_image_ships_with_the_assets() {
        let relative = PRODUCT_IMAGE.trim_start_matches('/');
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(relative);
        assert!(path.is_file(), "missing {}", path.display());
    }

    #[test]
    fn hotspots_sit_inside_the_image() {
        for spot in hotspots() {
            assert!((0.0..=100.0).contains(&spot.left));
            assert!((0.0..=100.0).contains(&spot.top));
        }
    }
}
