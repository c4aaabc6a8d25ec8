use yew::prelude::*;

use crate::content;
use crate::dom;
use crate::hooks::use_scroll_sync;
use crate::sections::{
    about::About,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    products::Products,
    services::Services,
};
use crate::Nav;


#[function_component(Home)]
pub fn home() -> Html {
    let navigation = use_scroll_sync(content::SECTION_IDS);

    let on_navigate = Callback::from(|id: &'static str| dom::scroll_to_section(id));

    html! {
        <div class="home-page">
            <Nav
                active_section={navigation.active_section.clone()}
                on_navigate={on_navigate.clone()}
            />

            <Hero on_navigate={on_navigate} />
            <About />
            <Services />
            <Products />
            <Contact />
            <Footer />

            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .home-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #000000, #0a192f);
                    color: white;
                }
                .container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .accent {
                    color: #22d3ee;
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid #1f2937;
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .nav-right {
                    display: none;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #d1d5db;
                    transition: color 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #22d3ee;
                }
                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    background: white;
                }
                .nav-right.mobile-menu-open {
                    display: flex;
                    flex-direction: column;
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.95);
                    border-bottom: 1px solid #1f2937;
                }

                .page-section {
                    padding: 5rem 0;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    box-sizing: border-box;
                }
                .page-section.tinted {
                    background: rgba(10, 25, 47, 0.5);
                }
                .section-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 3rem;
                    text-align: center;
                }
                .subsection-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .body-text {
                    color: #d1d5db;
                    margin-bottom: 1.5rem;
                    line-height: 1.6;
                }
                .two-column {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .rounded-image {
                    display: block;
                    width: 100%;
                    height: auto;
                    border-radius: 0.5rem;
                }
                .cta-button {
                    background: #0891b2;
                    color: white;
                    border: none;
                    border-radius: 0.375rem;
                    padding: 0.625rem 1rem;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .cta-button:hover {
                    background: #0e7490;
                }

                @media (min-width: 768px) {
                    .nav-right { display: flex; }
                    .burger-menu { display: none; }
                    .section-title { font-size: 3rem; }
                    .two-column { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </div>
    }
}
