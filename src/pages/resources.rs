use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::site;
use crate::Route;

/// Tools and documents for partners who already completed onboarding.
#[function_component(PartnerResources)]
pub fn partner_resources() -> Html {
    let config = site();

    html! {
        <div class="page resources-page">
            <style>{RESOURCES_STYLES}</style>
            <div class="resources-card">
                <div class="resources-header">
                    <Link<Route> to={Route::Home} classes="header-close">{"\u{2715}"}</Link<Route>>
                    <h1>{"Partner Resources"}</h1>
                    <p>{"Essential tools and documents for our partners"}</p>
                </div>

                <div class="resources-body">
                    <section>
                        <h2>{"Welcome, Partner"}</h2>
                        <p>{format!("This page contains all the resources you need to seamlessly integrate {} memorial art services with your funeral home. Below you'll find downloadable forms, contact information, and essential materials for client interactions.", config.brand_name)}</p>
                    </section>

                    <section class="consent-card">
                        <h3>{"Client Contact Consent Form"}</h3>
                        <p>{format!("This optional form allows families to express interest in {} memorial art services. Simply provide this form to interested families, and we'll handle all follow-up communication directly.", config.brand_name)}</p>
                        <ul>
                            <li><strong>{"No obligation:"}</strong>{" Families can request information without commitment"}</li>
                            <li><strong>{"Privacy protected:"}</strong>{" Contact information used solely for service inquiry response"}</li>
                            <li><strong>{"Your workflow protected:"}</strong>{" We handle all client consultations and logistics"}</li>
                        </ul>
                        <div class="consent-actions">
                            <a
                                class="consent-button dark"
                                href={config.consent_form_download_url}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"Download PDF Form"}
                            </a>
                            <a
                                class="consent-button light"
                                href={config.consent_form_view_url}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"View & Print"}
                            </a>
                        </div>
                    </section>

                    <section class="reference-grid">
                        <div class="reference-card">
                            <h3>{"How to Use the Form"}</h3>
                            <ol>
                                <li>{"Print the consent form and keep copies available at your facility"}</li>
                                <li>{"Offer the form to families who express interest in memorial art services"}</li>
                                <li>{"Collect the completed form from interested families"}</li>
                                <li>{"Email or call us with the contact details - we handle everything from there"}</li>
                            </ol>
                        </div>
                        <div class="reference-card">
                            <h3>{"Quick Reference Guide"}</h3>
                            <dl>
                                <dt>{"Service Fee"}</dt>
                                <dd>{format!("${} per completed service", config.referral_fee_usd)}</dd>
                                <dt>{"Your Role"}</dt>
                                <dd>{"Inform families of the option and share contact information"}</dd>
                                <dt>{"Our Role"}</dt>
                                <dd>{"All consultation, coordination, artwork creation, and delivery"}</dd>
                                <dt>{"Timeline"}</dt>
                                <dd>{"Completed artwork delivered within 2-3 weeks of service"}</dd>
                            </dl>
                        </div>
                    </section>

                    <section class="assist-card">
                        <h3>{"Need Assistance?"}</h3>
                        <p>{"We're here to support you and answer any questions about the partnership, forms, or services. Reach out anytime."}</p>
                        <div class="assist-contacts">
                            <div>
                                <span class="assist-label">{"Email"}</span>
                                <a href={format!("mailto:{}", config.contact_email)}>{config.contact_email}</a>
                            </div>
                            <div>
                                <span class="assist-label">{"Phone"}</span>
                                <a href={config.contact_phone_href}>{config.contact_phone}</a>
                            </div>
                        </div>
                    </section>

                    <div class="resources-footer">
                        <Link<Route> to={Route::Home} classes="return-link">
                            {"Return to Home Page"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}

const RESOURCES_STYLES: &str = r#"
body { margin: 0; }
.resources-page {
    min-height: 100vh;
    background: #fafaf9;
    padding: 5rem 1.5rem;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #1c1917;
}
.resources-card {
    max-width: 64rem;
    margin: 0 auto;
    background: #fff;
    border: 1px solid #f5f5f4;
    border-radius: 1.5rem;
    overflow: hidden;
    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.08);
}
.resources-header {
    position: relative;
    background: #1c1917;
    color: #fff;
    padding: 3rem;
}
.resources-header h1 { font-family: Georgia, serif; font-size: 2.4rem; margin: 0; }
.resources-header p { color: #a8a29e; font-size: 0.9rem; margin: 0.5rem 0 0 0; }
.header-close {
    position: absolute;
    top: 1.5rem;
    right: 1.5rem;
    color: #fff;
    text-decoration: none;
    padding: 0.5rem;
    border-radius: 50%;
}
.header-close:hover { background: rgba(255, 255, 255, 0.1); }
.resources-body { padding: 3rem; display: flex; flex-direction: column; gap: 2.5rem; }
.resources-body h2 { font-family: Georgia, serif; font-size: 1.9rem; margin: 0 0 0.75rem 0; }
.resources-body h3 { font-size: 1.4rem; margin: 0 0 1rem 0; }
.resources-body p { color: #57534e; line-height: 1.7; }
.consent-card {
    background: #fffbeb;
    border: 2px solid #fde68a;
    border-radius: 1.5rem;
    padding: 2.5rem;
}
.consent-card ul { list-style: none; padding: 0; margin: 1rem 0 0 0; }
.consent-card li { color: #57534e; font-size: 0.9rem; margin: 0.6rem 0; }
.consent-actions { display: flex; gap: 1rem; margin-top: 2rem; flex-wrap: wrap; }
.consent-button {
    flex: 1;
    min-width: 14rem;
    text-align: center;
    padding: 1rem 1.5rem;
    border-radius: 1rem;
    font-weight: 700;
    text-decoration: none;
}
.consent-button.dark { background: #1c1917; color: #fff; box-shadow: 0 12px 24px rgba(0, 0, 0, 0.15); }
.consent-button.dark:hover { background: #292524; }
.consent-button.light { background: #fff; color: #1c1917; border: 2px solid #d6d3d1; }
.consent-button.light:hover { border-color: #1c1917; }
.reference-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.reference-card {
    background: #fafaf9;
    border: 1px solid #e7e5e4;
    border-radius: 1rem;
    padding: 2rem;
}
.reference-card ol { color: #44403c; padding-left: 1.25rem; }
.reference-card ol li { margin: 0.75rem 0; }
.reference-card dt {
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-top: 1rem;
}
.reference-card dd { margin: 0.25rem 0 0 0; color: #44403c; }
.assist-card { background: #1c1917; color: #fff; border-radius: 1.5rem; padding: 2.5rem; }
.assist-card p { color: #d6d3d1; }
.assist-contacts { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-top: 1.5rem; }
.assist-label {
    display: block;
    font-size: 0.7rem;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-weight: 700;
    color: #f59e0b;
    margin-bottom: 0.5rem;
}
.assist-contacts a { color: #fff; text-decoration: none; font-size: 1.05rem; }
.assist-contacts a:hover { color: #f59e0b; }
.resources-footer { text-align: center; padding-top: 1.5rem; border-top: 1px solid #e7e5e4; }
.return-link {
    color: #78716c;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-size: 0.7rem;
    text-decoration: none;
}
.return-link:hover { color: #292524; }
@media (max-width: 768px) {
    .resources-body, .resources-header { padding: 1.5rem; }
    .reference-grid, .assist-contacts { grid-template-columns: 1fr; }
}
"#;
