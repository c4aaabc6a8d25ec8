use yew::prelude::*;

use crate::content;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let get_started = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("contact"))
    };

    html! {
        <section id="hero" class="hero">
            <div class="hero-background">
                <img src={content::HERO_IMAGE} alt="Warehouse Management" />
            </div>
            <div class="container hero-content">
                <h1>{"Advanced Warehouse Management Solutions"}</h1>
                <p class="hero-subtitle">
                    {"Streamline your operations with our cutting-edge warehouse management system"}
                </p>
                <button class="cta-button hero-cta" onclick={get_started}>
                    {"Get Started"}
                </button>
                <div class="scroll-hint">{"⌄"}</div>
            </div>
            <style>
                {r#"
                .hero {
                    height: 100vh;
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.4;
                }
                .hero-content {
                    z-index: 1;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }
                .hero-cta {
                    padding: 1.25rem 2rem;
                    font-size: 1.125rem;
                }
                .scroll-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    font-size: 2.5rem;
                    color: #22d3ee;
                    animation: bounce 1s infinite;
                }
                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, -25%); }
                    50% { transform: translate(-50%, 0); }
                }
                @media (min-width: 768px) {
                    .hero h1 { font-size: 3.75rem; }
                    .hero-subtitle { font-size: 1.5rem; }
                }
                "#}
            </style>
        </section>
    }
}
