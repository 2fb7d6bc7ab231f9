use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::motion::{FEATURE_STAGGER_MS, REVEAL};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "📱",
        title: "Responsive Design",
        description: "Perfectly adapts to any screen size",
    },
    Feature {
        icon: "✨",
        title: "Modern Animations",
        description: "Smooth and engaging motion effects",
    },
    Feature {
        icon: "💻",
        title: "Clean Code",
        description: "Well-structured and maintainable",
    },
    Feature {
        icon: "⚡",
        title: "Fast Performance",
        description: "Optimized for speed and efficiency",
    },
    Feature {
        icon: "🎯",
        title: "Best Practices",
        description: "Following industry standards",
    },
    Feature {
        icon: "🔧",
        title: "24/7 Support",
        description: "Always here to help you",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features">
            <div class="section-container">
                <Reveal>
                    <h3 class="section-title gradient-text">{"Amazing Features"}</h3>
                </Reveal>

                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <Reveal key={feature.title} transition={REVEAL.stagger(index, FEATURE_STAGGER_MS)}>
                            <div class="feature-card">
                                <div class="feature-card__icon">{feature.icon}</div>
                                <h3 class="feature-card__title">{feature.title}</h3>
                                <p class="feature-card__description">{feature.description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .features {
                    padding: 6rem 0;
                    background: rgba(0, 0, 0, 0.3);
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .feature-card {
                    height: 100%;
                    box-sizing: border-box;
                    padding: 2rem;
                    transition: transform 0.2s ease-out, box-shadow 0.2s ease-out;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(16px);
                }

                .feature-card:hover {
                    transform: scale(1.05) rotate(2deg);
                    box-shadow: 0 0 20px rgba(167, 139, 250, 0.3);
                }

                .feature-card:active { transform: scale(0.95); }

                .feature-card__icon {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }

                .feature-card__title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }

                .feature-card__description {
                    color: #e9d5ff;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .features { padding: 3rem 0; }
                    .features-grid { grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
                }

                @media (max-width: 640px) {
                    .features-grid { grid-template-columns: 1fr; gap: 1rem; }
                    .feature-card { padding: 1.5rem; }
                    .feature-card__title { font-size: 1.25rem; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_titles_are_unique() {
        let mut titles: Vec<&str> = FEATURES.iter().map(|feature| feature.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }
}
