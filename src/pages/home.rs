use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::portfolio::PortfolioItem;
use crate::contact::form::ContactForm;
use crate::content::{COLLECTIONS, PORTFOLIO, TRUST_STATS, VALUE_PROPS};
use crate::nav::navbar::scroll_to_anchor;
use crate::nav::state::anchor_target;
use crate::reveal::observer::Reveal;
use crate::Route;

const HEADLINE: &str = "The World's Intelligent Vault for Entertainment";

/// Splits the headline so the first three words get the gradient.
fn split_headline(headline: &str) -> (String, String) {
    let words: Vec<&str> = headline.split(' ').collect();
    let cut = words.len().min(3);
    (words[..cut].join(" "), words[cut..].join(" "))
}

#[function_component(Hero)]
fn hero() -> Html {
    let (lead, rest) = split_headline(HEADLINE);
    html! {
        <section id="home" class="hero">
            <div class="hero-glow hero-glow-left"></div>
            <div class="hero-glow hero-glow-right"></div>
            <div class="container">
                <span class="badge">
                    <span class="badge-dot"></span>
                    {"Now accepting early access applications"}
                </span>
                <h1>
                    <span class="gradient-text">{lead}</span>
                    <br />
                    {rest}
                </h1>
                <p class="hero-sub">
                    {"Securely preserve movies, series, music, games, and cultural archives forever. "}
                    {"AI-powered organization, metadata enrichment, and eternal preservation for the entertainment industry."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="btn-primary">
                        {"Join Early Access"}
                    </Link<Route>>
                    <a href="#technology" class="btn-secondary">{"Explore Technology"}</a>
                </div>
                <div class="stat-grid">
                    { for TRUST_STATS.iter().map(|stat| html! {
                        <div class="glass-card stat-card" key={stat.label}>
                            <div class="stat-value gradient-text">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Collections)]
fn collections() -> Html {
    html! {
        <section id="collections" class="section">
            <div class="container">
                <Reveal class="section-header">
                    <span class="badge">{"What We Protect"}</span>
                    <h2>
                        <span class="gradient-text">{"Preserving Every Format"}</span>
                        <br />
                        {"of Entertainment"}
                    </h2>
                    <p>{"From blockbuster films to indie creations, we secure the world's entertainment legacy with unmatched reliability."}</p>
                </Reveal>
                <div class="bento-grid">
                    { for COLLECTIONS.iter().map(|item| html! {
                        <Reveal class={classes!("glass-card", "bento-card", item.size.class())}>
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                            {
                                if let Some(stat) = &item.stat {
                                    html! { <span class="bento-stat">{stat.render()}</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ValuePropositions)]
fn value_propositions() -> Html {
    html! {
        <section id="technology" class="section">
            <div class="container">
                <Reveal class="section-header">
                    <span class="badge">{"Why K Entertainment"}</span>
                    <h2>{"Built to Outlast Every Format"}</h2>
                </Reveal>
                <div class="value-grid">
                    { for VALUE_PROPS.iter().map(|prop| html! {
                        <Reveal class={classes!("glass-card", "value-card")}>
                            <div class="value-accent" style={format!("background: {};", prop.accent)}></div>
                            <h3>{prop.title}</h3>
                            <p>{prop.description}</p>
                            <ul>
                                { for prop.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Portfolio)]
fn portfolio() -> Html {
    html! {
        <section id="portfolio" class="section">
            <div class="container">
                <Reveal class="section-header">
                    <span class="badge">{"Portfolio"}</span>
                    <h2>{"Archives We Have Brought Back"}</h2>
                </Reveal>
                <div class="portfolio-grid">
                    { for PORTFOLIO.iter().map(|entry| html! {
                        <Reveal>
                            <PortfolioItem
                                title={entry.title}
                                category={entry.category}
                                description={entry.description}
                            />
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CtaBanner)]
fn cta_banner() -> Html {
    html! {
        <section class="section">
            <div class="container">
                <Reveal class="cta-banner">
                    <span class="badge">{"Limited Early Access"}</span>
                    <h2>
                        {"Ready to Preserve Your "}
                        <span class="gradient-text">{"Entertainment Legacy?"}</span>
                    </h2>
                    <p>
                        {"Join leading studios, archives, and creators who trust K Entertainment Studio "}
                        {"to protect their most valuable content for generations to come."}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Contact} classes="btn-primary">
                            {"Join Early Access"}
                        </Link<Route>>
                        <a href="#contact" class="btn-secondary">{"Studio/Creator Priority"}</a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Arriving from another route, or a shared link, with a section fragment
    use_effect_with_deps(
        |_| {
            let hash = web_sys::window().and_then(|w| w.location().hash().ok());
            if let Some(id) = hash.as_deref().and_then(anchor_target) {
                scroll_to_anchor(id);
            }
            || ()
        },
        (),
    );

    html! {
        <main>
            <Hero />
            <Collections />
            <ValuePropositions />
            <Portfolio />
            <CtaBanner />
            <section id="contact" class="section">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"Get in Touch"}</h2>
                        <p>{"Tell us about the archive you want to protect."}</p>
                    </Reveal>
                    <Reveal class="glass-card contact-card">
                        <ContactForm />
                    </Reveal>
                </div>
            </section>
        </main>
    }
}
