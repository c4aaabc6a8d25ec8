use yew::prelude::*;

use crate::content::{self, Service};

fn service_card(service: &Service) -> Html {
    html! {
        <div class="service-card" key={service.title}>
            <div class="service-icon">{service.icon}</div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="page-section tinted">
            <div class="container">
                <h2 class="section-title">{"Our "}<span class="accent">{"Services"}</span></h2>
                <div class="services-grid">
                    { for content::SERVICES.iter().map(service_card) }
                </div>
            </div>
            <style>
                {r#"
                .services-grid {
                    display: grid;
                    gap: 2rem;
                }
                .service-card {
                    background: linear-gradient(to bottom right, #111827, #1f2937);
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    border: 1px solid #374151;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    transition: all 0.2s ease;
                }
                .service-card:hover {
                    border-color: #0891b2;
                    transform: translateY(-0.25rem);
                }
                .service-icon {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }
                .service-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                    color: #22d3ee;
                }
                .service-card p {
                    color: #d1d5db;
                }
                @media (min-width: 768px) {
                    .services-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .services-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
