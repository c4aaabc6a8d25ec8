use yew::prelude::*;

use crate::content;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="page-section">
            <div class="container">
                <h2 class="section-title">{"About "}<span class="accent">{"Us"}</span></h2>
                <div class="two-column">
                    <div>
                        <img class="rounded-image" src={content::PLACEHOLDER_IMAGE} alt="About Our Company" width="800" height="600" />
                    </div>
                    <div>
                        <h3 class="accent subsection-title">{"Leading the Industry Since 2025"}</h3>
                        <p class="body-text">
                            {"We are a startup provider of warehouse management solutions, dedicated to helping businesses optimize their operations and improve efficiency. With advanced technologies we have developed cutting edge solutions that transform how warehouses operate."}
                        </p>
                        <p class="body-text">
                            {"Our team of experts provides an advanced warehouse robot alongside a software for stock management and real time data, providing solutions that drive results. We are committed to innovation, quality, and customer satisfaction."}
                        </p>
                        <div class="stats-grid">
                            {
                                for content::STATS.iter().map(|stat| html! {
                                    <div class="stat-card" key={stat.caption}>
                                        <h4>{stat.value}</h4>
                                        <p>{stat.caption}</p>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .stat-card {
                    background: rgba(31, 41, 55, 0.5);
                    padding: 1rem;
                    border-radius: 0.5rem;
                }
                .stat-card h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .stat-card p {
                    color: #9ca3af;
                }
                "#}
            </style>
        </section>
    }
}
