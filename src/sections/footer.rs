use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-top">
                    <div class="nav-logo">{content::BRAND}</div>
                    <div class="footer-links">
                        {
                            for content::NAV_LINKS.iter().map(|link| html! {
                                <a key={link.id} href={format!("#{}", link.id)}>{link.label}</a>
                            })
                        }
                    </div>
                </div>
                <div class="footer-bottom">
                    {format!("© {} {}. All rights reserved.", year, content::BRAND)}
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: black;
                    padding: 2rem 0;
                    border-top: 1px solid #1f2937;
                }
                .footer-top {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-links a {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .footer-links a:hover {
                    color: #22d3ee;
                }
                .footer-bottom {
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                @media (min-width: 768px) {
                    .footer-top { flex-direction: row; }
                }
                "#}
            </style>
        </footer>
    }
}
