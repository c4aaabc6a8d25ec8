use yew::prelude::*;

use crate::content::{self, Product};

fn product_row(product: &Product) -> Html {
    html! {
        <div class={classes!("two-column", "product-row", product.mirrored.then(|| "mirrored"))} key={product.title}>
            <div class="product-media">
                <img class="rounded-image" src={content::PLACEHOLDER_IMAGE} alt={product.media_alt} width="800" height="600" />
                <div class="media-caption">
                    <p>{product.media_caption}</p>
                </div>
            </div>
            <div class="product-copy">
                <h3 class="accent subsection-title">{product.title}</h3>
                <p class="body-text">{product.description}</p>
                <ul class="feature-list">
                    { for product.features.iter().map(|feature| html! { <li key={*feature}>{*feature}</li> }) }
                </ul>
                <button class="cta-button product-cta">{product.cta}</button>
            </div>
        </div>
    }
}

#[function_component(Products)]
pub fn products() -> Html {
    html! {
        <section id="products" class="page-section">
            <div class="container">
                <h2 class="section-title">{"Our "}<span class="accent">{"Products"}</span></h2>
                <div class="product-list">
                    { for content::PRODUCTS.iter().map(product_row) }
                </div>
            </div>
            <style>
                {r#"
                .product-list > * + * {
                    margin-top: 6rem;
                }
                .product-media {
                    position: relative;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    background: #1f2937;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4);
                }
                .media-caption {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #22d3ee;
                    font-weight: 600;
                }
                .feature-list {
                    list-style: none;
                    padding: 0;
                }
                .feature-list li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #d1d5db;
                    margin-bottom: 1rem;
                }
                .feature-list li::before {
                    content: "";
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #22d3ee;
                }
                .product-cta {
                    margin-top: 1.5rem;
                }
                @media (min-width: 768px) {
                    .product-row.mirrored .product-media { order: 2; }
                    .product-row.mirrored .product-copy { order: 1; }
                }
                "#}
            </style>
        </section>
    }
}
