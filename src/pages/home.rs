use chrono::{Datelike, Local};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::site;
use crate::onboarding::portal::OnboardingPortal;
use crate::Route;

fn benefit_card(icon: &'static str, title: &'static str, description: &'static str) -> Html {
    html! {
        <div class="benefit-card">
            <div class="benefit-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

const HOW_IT_WORKS: [(&str, &str, &str); 4] = [
    ("01", "Menu Integration", "Add us to your service menu. We provide luxury cards."),
    ("02", "Instant Booking", "Notify us when selected; we handle scheduling."),
    ("03", "Invisible Setup", "We setup quietly and leave no cleanup behind."),
    ("04", "Automated Profit", "You collect total bill; we invoice our fee. Pure profit."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let config = site();
    let navigator = use_navigator().expect("Home is rendered inside the router");
    let portal_open = use_state(|| false);
    let menu_open = use_state(|| false);

    let open_portal = {
        let portal_open = portal_open.clone();
        Callback::from(move |_: MouseEvent| portal_open.set(true))
    };

    let open_portal_from_menu = {
        let portal_open = portal_open.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            portal_open.set(true);
        })
    };

    let close_portal = {
        let portal_open = portal_open.clone();
        Callback::from(move |_: ()| portal_open.set(false))
    };

    let portal_to_resources = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| navigator.push(&Route::Resources))
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let year = Local::now().year();

    html! {
        <div class="page home-page">
            <style>{HOME_STYLES}</style>

            <nav class="top-nav">
                <div class="nav-content">
                    <span class="nav-logo">{config.brand_name}</span>
                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class={if *menu_open { "nav-right mobile-menu-open" } else { "nav-right" }}>
                        <div onclick={close_menu.clone()}>
                            <a href="#benefits" class="nav-link">{"The Opportunity"}</a>
                        </div>
                        <div onclick={close_menu.clone()}>
                            <a href="#how-it-works" class="nav-link">{"Our Process"}</a>
                        </div>
                        <div onclick={close_menu}>
                            <Link<Route> to={Route::Resources} classes="nav-link">
                                {"Partner Resources"}
                            </Link<Route>>
                        </div>
                        <button class="nav-cta" onclick={open_portal_from_menu}>
                            {"Partner Portal"}
                        </button>
                    </div>
                </div>
            </nav>

            <OnboardingPortal
                is_open={*portal_open}
                on_close={close_portal}
                on_navigate_resources={portal_to_resources}
            />

            <header class="hero">
                <div class="hero-content">
                    <span class="hero-badge">{"Premium B2B Partnership Program"}</span>
                    <h1>
                        {"Deliver "}<em>{"Legacy"}</em>{"."}
                        <br />
                        {format!("Earn ${} Per Call.", config.referral_fee_usd)}
                    </h1>
                    <p class="hero-subtitle">
                        {format!("{} integrates high-end live memorial painting into your chapel services. We provide the artist and logistics; you provide the premium space and collect the margin.", config.brand_name)}
                    </p>
                    <button class="hero-cta" onclick={open_portal.clone()}>
                        {"Get Your Partnership Kit"}
                    </button>
                </div>
            </header>

            <section class="dilemma">
                <div class="section-inner split">
                    <div class="dilemma-text">
                        <h2>{"The Modern Funeral "}<br />{"Director's Dilemma."}</h2>
                        <p>{"Families are demanding more \"meaningful\" experiences, yet staffing costs and administrative overhead make adding new services a logistical nightmare."}</p>
                        <div class="dilemma-points">
                            <div class="dilemma-point">
                                <span class="point-title">{"Revenue Leakage"}</span>
                                <span class="point-body">{"Standard services are becoming commoditized and price-shopped."}</span>
                            </div>
                            <div class="dilemma-point">
                                <span class="point-title">{"Operational Fatigue"}</span>
                                <span class="point-body">{"Your staff is too busy to manage 'one more vendor' or complex logistics."}</span>
                            </div>
                        </div>
                    </div>
                    <div class="margin-card">
                        <h4>{format!("+${} Margin", config.referral_fee_usd)}</h4>
                        <p class="margin-caption">{"Pure Net Profit Share per Service"}</p>
                        <p class="margin-quote">{"\"The easiest menu item we've ever added.\""}</p>
                    </div>
                </div>
            </section>

            <section id="benefits" class="benefits">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"The \"Pure Partnership\" Model"}</h2>
                        <p class="section-kicker">{"Built Specifically for High-End Chapels"}</p>
                    </div>
                    <div class="benefit-grid">
                        { benefit_card("🎨", "Premium Live Artistry", "Ezelle brings a sophisticated aesthetic to your service. We don't just paint; we curate a reverent atmosphere.") }
                        { benefit_card("🛡️", "Liability Free", "We are fully insured and handle all client communications post-service. Your staff maintains their workflow.") }
                        { benefit_card("🤍", "Family Gratitude", "Families attribute the beauty of the live painting to YOUR home. It cements your reputation.") }
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <div class="section-inner">
                    <h2>{"Presell Legacy, Deliver Magic."}</h2>
                    <div class="steps-grid">
                        { for HOW_IT_WORKS.iter().map(|&(number, title, body)| html! {
                            <div class="how-step">
                                <div class="how-number">{number}</div>
                                <h4>{title}</h4>
                                <p>{body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="gallery">
                <div class="section-inner">
                    <h2>{"Gallery of Tributes"}</h2>
                    <div class="gallery-grid">
                        <img src="https://i.imgur.com/TGFtxrZ.png" alt="Memorial painting" />
                        <img src="https://i.imgur.com/cNxBLiq.png" alt="Memorial painting" />
                    </div>
                </div>
            </section>

            <section class="artist">
                <div class="section-inner split">
                    <div class="artist-photo">
                        <img src="https://i.imgur.com/98pL3Ua.png" alt={config.artist_name} />
                    </div>
                    <div class="artist-bio">
                        <span class="eyebrow">{"Behind the Canvas"}</span>
                        <h2>{"Meet The Artist: Ezelle"}</h2>
                        <p>{"I’m Ezelle Geldenhuis, and painting has become the way I connect with the world on a deeper level. My work is intuitive and energy-led. I’m drawn to the quiet strength in people, the emotion in their eyes, and the stories that sit just beneath the surface."}</p>
                        <p>{"Art started as a personal outlet in one of the hardest seasons of my life, but over time it grew into something much bigger—a calling, a way of understanding myself, and a way of offering something meaningful to others."}</p>
                        <p>{"My work blends realism with expressive movement and layered texture. I paint the feeling behind a moment, the energy held in a portrait, and the beauty in the transitions we all experience."}</p>
                        <div class="artist-footnote">
                            <p class="point-title">{"Compassionate Care"}</p>
                            <p class="point-body">{"Hospice Volunteer & Dedicated Memorial Artist"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="section-inner">
                    <h2>{"Grow Your Business With Beauty."}</h2>
                    <button class="footer-cta" onclick={open_portal}>
                        {"Secure Your Territory"}
                    </button>
                    <div class="footer-contact">
                        <p><a href={format!("mailto:{}", config.contact_email)}>{config.contact_email}</a></p>
                        <p><a href={config.contact_phone_href}>{config.contact_phone}</a></p>
                    </div>
                    <div class="footer-links">
                        <Link<Route> to={Route::Resources} classes="footer-link">{"Partner Resources"}</Link<Route>>
                        <span class="footer-divider">{"|"}</span>
                        <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy Policy"}</Link<Route>>
                        <span class="footer-divider">{"|"}</span>
                        <Link<Route> to={Route::Terms} classes="footer-link">{"Terms of Use"}</Link<Route>>
                    </div>
                    <p class="footer-copyright">
                        {format!("© {} {} | {}. {}, USA.", year, config.brand_name, config.studio_legal_name, config.governing_state)}
                    </p>
                </div>
            </footer>
        </div>
    }
}

const HOME_STYLES: &str = r#"
body { margin: 0; }
.home-page {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #1c1917;
    background: #fff;
}
.home-page h1, .home-page h2, .home-page h3 { font-family: Georgia, serif; }
.section-inner { max-width: 72rem; margin: 0 auto; padding: 6rem 1.5rem; }
.section-inner.split {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.85);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid rgba(231, 229, 228, 0.6);
}
.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo { font-family: Georgia, serif; font-size: 1.4rem; font-weight: 600; }
.nav-right { display: flex; align-items: center; gap: 2rem; }
.nav-link {
    font-size: 0.7rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: #57534e;
    text-decoration: none;
    background: none;
    border: none;
    cursor: pointer;
}
.nav-link:hover { color: #92400e; }
.nav-cta {
    background: #1c1917;
    color: #fff;
    border: none;
    border-radius: 2rem;
    padding: 0.65rem 1.5rem;
    font-size: 0.7rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    cursor: pointer;
    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.15);
}
.nav-cta:hover { background: #292524; }
.burger-menu { display: none; background: none; border: none; cursor: pointer; padding: 0.5rem; }
.burger-menu span {
    display: block;
    width: 22px;
    height: 2px;
    background: #1c1917;
    margin: 5px 0;
}
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding-top: 5rem;
    background: linear-gradient(rgba(255, 255, 255, 0.7), rgba(250, 250, 249, 0.9)),
        #f5f5f4;
}
.hero-badge {
    display: inline-block;
    background: rgba(255, 255, 255, 0.8);
    border: 1px solid rgba(253, 230, 138, 0.6);
    color: #78350f;
    padding: 0.5rem 1.5rem;
    border-radius: 2rem;
    font-size: 0.65rem;
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    margin-bottom: 2rem;
}
.hero h1 { font-size: 4rem; margin: 0 0 2rem 0; }
.hero h1 em { color: #92400e; }
.hero-subtitle {
    font-size: 1.35rem;
    font-weight: 300;
    color: #44403c;
    max-width: 46rem;
    margin: 0 auto 3rem auto;
    line-height: 1.6;
}
.hero-cta, .footer-cta {
    background: #1c1917;
    color: #fff;
    font-size: 1.1rem;
    font-weight: 700;
    border: none;
    border-radius: 3rem;
    padding: 1.25rem 3rem;
    cursor: pointer;
    box-shadow: 0 20px 48px rgba(0, 0, 0, 0.25);
}
.hero-cta:hover { background: #292524; }
.dilemma { background: #fafaf9; border-top: 1px solid #f5f5f4; border-bottom: 1px solid #f5f5f4; }
.dilemma h2 { font-size: 2.6rem; margin: 0 0 2rem 0; }
.dilemma-text p { font-size: 1.1rem; color: #57534e; line-height: 1.7; }
.dilemma-points { margin-top: 2rem; display: flex; flex-direction: column; gap: 1.5rem; }
.point-title { display: block; font-weight: 700; margin-bottom: 0.25rem; }
.point-body { color: #57534e; font-size: 0.9rem; }
.margin-card {
    background: #fff;
    border: 1px solid #f5f5f4;
    border-radius: 2.5rem;
    padding: 3rem;
    text-align: center;
    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.08);
}
.margin-card h4 { font-size: 2rem; margin: 0 0 2rem 0; color: #16a34a; }
.margin-caption {
    color: #a8a29e;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-size: 0.7rem;
    font-weight: 700;
}
.margin-quote {
    margin-top: 2rem;
    padding-top: 2rem;
    border-top: 1px solid #f5f5f4;
    color: #78716c;
    font-style: italic;
}
.section-header { text-align: center; margin-bottom: 4rem; }
.benefits h2 { font-size: 2.6rem; font-style: italic; color: #92400e; margin: 0 0 1rem 0; }
.section-kicker {
    color: #78716c;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    font-weight: 700;
    font-size: 0.7rem;
}
.benefit-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2.5rem; }
.benefit-card {
    background: #fff;
    border: 1px solid #f5f5f4;
    border-radius: 1.5rem;
    padding: 2rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.04);
}
.benefit-card:hover { box-shadow: 0 12px 24px rgba(0, 0, 0, 0.08); }
.benefit-icon {
    width: 3rem;
    height: 3rem;
    background: #fffbeb;
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.4rem;
    margin-bottom: 1.5rem;
}
.benefit-card h3 { font-size: 1.4rem; margin: 0 0 0.75rem 0; }
.benefit-card p { color: #57534e; line-height: 1.7; margin: 0; }
.how-it-works {
    background: #1c1917;
    color: #fff;
    border-radius: 3.5rem;
    margin: 0 3rem;
}
.how-it-works h2 { font-size: 3rem; text-align: center; margin: 0 0 3rem 0; }
.steps-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
.how-step {
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem;
    padding: 2rem;
}
.how-step:hover { background: rgba(255, 255, 255, 0.1); }
.how-number { color: #f59e0b; font-weight: 700; font-size: 1.8rem; margin-bottom: 1rem; }
.how-step h4 { font-size: 1.2rem; margin: 0 0 0.5rem 0; }
.how-step p { font-size: 0.85rem; color: #a8a29e; line-height: 1.7; margin: 0; }
.gallery { text-align: center; }
.gallery h2 { font-size: 2.6rem; margin: 0 0 4rem 0; }
.gallery-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2.5rem; }
.gallery-grid img {
    width: 100%;
    aspect-ratio: 4 / 5;
    object-fit: cover;
    border-radius: 1.5rem;
    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.15);
}
.artist { background: #fafaf9; border-top: 1px solid #f5f5f4; border-bottom: 1px solid #f5f5f4; }
.artist-photo { display: flex; justify-content: center; }
.artist-photo img {
    width: 22rem;
    height: 22rem;
    object-fit: cover;
    border-radius: 50%;
    border: 4px solid #fff;
    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.15);
}
.eyebrow {
    display: block;
    color: #b45309;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    font-size: 0.7rem;
    margin-bottom: 1rem;
}
.artist-bio h2 { font-size: 2.8rem; margin: 0 0 2rem 0; }
.artist-bio p { color: #57534e; line-height: 1.8; font-size: 1.05rem; font-weight: 300; }
.artist-footnote { margin-top: 2.5rem; padding-top: 2.5rem; border-top: 1px solid #f5f5f4; }
.site-footer { background: #1c1917; color: #78716c; text-align: center; }
.site-footer h2 { color: #fff; font-size: 2.4rem; margin: 0 0 2rem 0; }
.footer-cta { background: #fff; color: #1c1917; }
.footer-cta:hover { background: #fafaf9; }
.footer-contact { margin-top: 4rem; }
.footer-contact p { margin: 0.5rem 0; font-size: 0.8rem; }
.footer-contact a { color: #a8a29e; text-decoration: none; }
.footer-contact a:hover { color: #f59e0b; }
.footer-links {
    margin-top: 1.5rem;
    display: flex;
    justify-content: center;
    gap: 1.5rem;
    flex-wrap: wrap;
}
.footer-link {
    font-size: 0.65rem;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-weight: 700;
    color: #78716c;
    text-decoration: none;
    background: none;
    border: none;
    cursor: pointer;
}
.footer-link:hover { color: #f59e0b; }
.footer-divider { color: rgba(255, 255, 255, 0.2); }
.footer-copyright {
    margin-top: 1.5rem;
    font-size: 0.6rem;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-weight: 700;
}
@media (max-width: 768px) {
    .nav-right {
        display: none;
        position: absolute;
        top: 5rem;
        left: 0;
        right: 0;
        background: #fff;
        border-bottom: 1px solid #e7e5e4;
        flex-direction: column;
        padding: 2rem 1.5rem;
        gap: 1.5rem;
        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.15);
    }
    .nav-right.mobile-menu-open { display: flex; }
    .burger-menu { display: block; }
    .hero h1 { font-size: 2.6rem; }
    .section-inner { padding: 4rem 1.5rem; }
    .section-inner.split, .benefit-grid, .steps-grid, .gallery-grid {
        grid-template-columns: 1fr;
    }
    .how-it-works { margin: 0 1rem; }
}
"#;
