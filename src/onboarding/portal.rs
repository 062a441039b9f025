use chrono::Local;
use web_sys::{window, HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::agreement::{AgreementDoc, AGREEMENT_TITLE};
use crate::config::{site, SiteConfig};
use crate::onboarding::print_view::PrintDocument;
use crate::onboarding::state::{OnboardingStep, PortalAction, PortalState, VisitorInput};

/// The personalized script read to a new partner on the Welcome step.
pub fn partnership_script(input: &VisitorInput, site: &SiteConfig) -> String {
    format!(
        "Hi {name}, Listen, I am excited to connect with you and {business}, I'm {artist}. \
         My business is called {brand}. I am offering to add a premium option for {business} \
         that increases revenue per service by ${fee}. I offer families a premium keepsake \
         they will thank you for. You don't manage it. Your team does nothing. You earn more \
         without selling. I handle 100% of it for you. I show up, paint live, and deliver the \
         keepsake. I add an extra ${fee} per service without adding any work for your staff. \
         And the best part is; extra profit for {business} with no headaches, premium results \
         with no risk - I handle the entire process, they thank you for the results.",
        name = input.name,
        business = input.business_name,
        artist = site.artist_given_name,
        brand = site.brand_name,
        fee = site.referral_fee_usd,
    )
}

/// Mail-client handoff for the signed agreement. Best effort: if no mail
/// client is registered for mailto:, nothing observable happens.
pub fn mailto_href(input: &VisitorInput, site: &SiteConfig) -> String {
    let subject = format!("Signed Partnership Agreement - {}", input.business_name);
    let body = format!(
        "Hi {},\n\nPlease find the signed partnership agreement for {} attached to this email.\n\nBest regards,\n{}",
        site.artist_given_name, input.business_name, input.name
    );
    format!(
        "mailto:{}?subject={}&body={}",
        site.contact_email,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[derive(Properties, PartialEq)]
pub struct PortalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_navigate_resources: Callback<()>,
}

/// The four-step onboarding overlay. The component stays mounted while the
/// overlay is hidden, so closing and reopening keeps whatever the visitor
/// already typed; only Reset clears it.
#[function_component(OnboardingPortal)]
pub fn onboarding_portal(props: &PortalProps) -> Html {
    let state = use_reducer(PortalState::default);

    if !props.is_open {
        return html! {};
    }

    let config = site();
    let today = Local::now().date_naive();
    let doc = AgreementDoc::prepare(&state.input, config, today);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let go_resources = {
        let on_close = props.on_close.clone();
        let on_navigate_resources = props.on_navigate_resources.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            on_navigate_resources.emit(());
        })
    };

    let on_name_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let field: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(PortalAction::SetName(field.value()));
        })
    };

    let on_business_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let field: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(PortalAction::SetBusinessName(field.value()));
        })
    };

    let on_signature_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let field: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(PortalAction::SetSignature(field.value()));
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PortalAction::Submit))
    };

    let on_proceed = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PortalAction::Proceed))
    };

    let on_finalize = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PortalAction::Finalize))
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PortalAction::Reset))
    };

    let on_email = {
        let input = state.input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = window() {
                let _ = window.location().set_href(&mailto_href(&input, site()));
            }
        })
    };

    let on_print = Callback::from(move |_: MouseEvent| {
        if let Some(window) = window() {
            let _ = window.print();
        }
    });

    let step_view = match state.step {
        OnboardingStep::Identify => html! {
            <div class="step step-identify">
                <div class="step-intro">
                    <h3>{"Welcome to the Portal"}</h3>
                    <p>{"Please provide your details to begin personalizing your partnership documents."}</p>
                </div>
                <div class="form-field">
                    <label>{"Full Name"}</label>
                    <input
                        type="text"
                        value={state.input.name.clone()}
                        oninput={on_name_input}
                        placeholder="e.g. John Smith"
                    />
                </div>
                <div class="form-field">
                    <label>{"Organization / Business Name"}</label>
                    <input
                        type="text"
                        value={state.input.business_name.clone()}
                        oninput={on_business_input}
                        placeholder="e.g. Oakwood Memorial Chapel"
                    />
                </div>
                <button
                    class="primary-button wide"
                    disabled={!state.can_submit()}
                    onclick={on_submit}
                >
                    {"Generate Portal Experience"}
                </button>
                <p class="step-footnote">
                    {"Already Completed This Step? "}
                    <button class="inline-link" onclick={go_resources}>
                        {"Go to Partner Resources Instead"}
                    </button>
                </p>
            </div>
        },
        OnboardingStep::Welcome => html! {
            <div class="step step-welcome">
                <div class="welcome-card">
                    <h3>{format!("Welcome, {}.", state.input.name)}</h3>
                    <p>
                        {"It is a pleasure to formally welcome you to the "}
                        <strong>{config.brand_name}</strong>
                        {" family. By exploring this partnership for "}
                        <strong>{state.input.business_name.clone()}</strong>
                        {", you are demonstrating a commitment to the families you serve that goes far beyond traditional care."}
                    </p>
                    <p>{"We believe that memorialization should be as vivid and luminous as the lives we celebrate. This portal contains your personalized script and legal documents to get us started immediately."}</p>
                </div>
                <div class="script-section">
                    <span class="eyebrow">{"Personalized Partnership Script"}</span>
                    <blockquote class="script-quote">
                        {format!("\u{201c}{}\u{201d}", partnership_script(&state.input, config))}
                    </blockquote>
                </div>
                <div class="step-actions">
                    <button class="primary-button" onclick={on_proceed}>
                        {"Proceed to Onboarding Agreement"}
                    </button>
                </div>
            </div>
        },
        OnboardingStep::Agreement => html! {
            <div class="step step-agreement">
                <div class="step-intro">
                    <h3>{"Collaboration Agreement"}</h3>
                    <p>{"Please review and sign your agreement to complete the onboarding."}</p>
                </div>
                <div class="agreement-paper">
                    <div class="agreement-heading">
                        <h4>{config.brand_name.to_uppercase()}</h4>
                        <p>{AGREEMENT_TITLE}</p>
                    </div>
                    <p>
                        {"This Referral & Memorial Art Collaboration Agreement (\u{201c}Agreement\u{201d}) is entered into as of "}
                        <strong>{doc.effective_date.clone()}</strong>
                        {" by and between:"}
                    </p>
                    <p>
                        <strong>{format!("{}, D.B.A. \u{201c}{}\u{201d}", config.studio_legal_name, config.studio_dba)}</strong>
                        {format!(", operated by {} (\u{201c}Artist\u{201d}), and", config.artist_name)}
                    </p>
                    <p>
                        <strong>{state.input.business_name.clone()}</strong>
                        {" (\u{201c}Referral Partner\u{201d}), a funeral home or related service provider."}
                    </p>
                    <div class="agreement-clauses">
                        { for doc.clauses.iter().map(|clause| html! {
                            <p><strong>{clause.title}</strong><br />{clause.body.clone()}</p>
                        }) }
                    </div>
                    <div class="signature-grid">
                        <div class="signature-block">
                            <p class="signature-label">{"Artist Signature"}</p>
                            <div class="signature-line signed">{config.artist_name}</div>
                            <p class="signature-date">{format!("Date: {}", doc.effective_date)}</p>
                        </div>
                        <div class="signature-block">
                            <p class="signature-label">{"Referral Partner Signature"}</p>
                            <div class="signature-line">
                                <input
                                    type="text"
                                    value={state.input.signature.clone()}
                                    oninput={on_signature_input}
                                    placeholder="Type full name to sign"
                                />
                            </div>
                            <p class="signature-date">{format!("Date: {}", doc.effective_date)}</p>
                        </div>
                    </div>
                </div>
                <div class="step-actions">
                    <button
                        class="primary-button"
                        disabled={!state.can_finalize()}
                        onclick={on_finalize}
                    >
                        {"Finalize & Complete Onboarding"}
                    </button>
                </div>
            </div>
        },
        OnboardingStep::Success => html! {
            <div class="step step-success">
                <div class="success-mark">{"\u{2713}"}</div>
                <h3>{"Onboarding Complete!"}</h3>
                <p class="success-copy">
                    {format!("Thank you, {}. Your agreement for ", state.input.name)}
                    <strong>{state.input.business_name.clone()}</strong>
                    {" is now finalized. Please use the options below to activate your partnership."}
                </p>
                <div class="success-actions">
                    <button class="primary-button" onclick={on_email}>
                        {format!("Email to {}", config.artist_given_name)}
                    </button>
                    <button class="secondary-button" onclick={on_print}>
                        {"Print / Save as PDF"}
                    </button>
                </div>
                <div class="success-contact">
                    <p>{config.contact_email}</p>
                    <p>{config.contact_phone}</p>
                </div>
                <div class="success-footer">
                    <button class="quiet-link" onclick={close.clone()}>
                        {"Return to Home Page"}
                    </button>
                    <button class="quiet-link accent" onclick={on_reset}>
                        {"\u{21ba} Reset & Start Over"}
                    </button>
                </div>
            </div>
        },
    };

    html! {
        <div class="portal-root">
            <style>{PORTAL_STYLES}</style>
            <div class="portal-backdrop" onclick={close.clone()}></div>
            <div class="portal-card">
                <div class="portal-header">
                    <h2>{"Partner Onboarding"}</h2>
                    <button class="portal-close" onclick={close}>{"\u{2715}"}</button>
                </div>
                <div class="portal-body">
                    {step_view}
                </div>
            </div>
            <PrintDocument doc={doc} />
        </div>
    }
}

const PORTAL_STYLES: &str = r#"
.portal-root {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 2.5rem 1rem;
}
.portal-backdrop {
    position: absolute;
    inset: 0;
    background: rgba(28, 25, 23, 0.6);
    backdrop-filter: blur(6px);
}
.portal-card {
    position: relative;
    background: #fff;
    width: 100%;
    max-width: 56rem;
    height: 100%;
    max-height: 90vh;
    border-radius: 2.5rem;
    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.35);
    display: flex;
    flex-direction: column;
    overflow: hidden;
}
.portal-header {
    padding: 1.5rem 3rem;
    border-bottom: 1px solid #f5f5f4;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.portal-header h2 {
    font-family: Georgia, serif;
    font-size: 1.25rem;
    color: #292524;
    margin: 0;
}
.portal-close {
    border: none;
    background: none;
    font-size: 1.25rem;
    color: #57534e;
    cursor: pointer;
    padding: 0.5rem;
    border-radius: 50%;
}
.portal-close:hover { background: #fafaf9; }
.portal-body {
    flex: 1;
    overflow-y: auto;
    padding: 2rem 3rem;
}
.step { max-width: 46rem; margin: 0 auto; }
.step-identify { max-width: 28rem; padding: 2rem 0; }
.step-intro { text-align: center; margin-bottom: 2.5rem; }
.step-intro h3, .step h3 {
    font-family: Georgia, serif;
    font-size: 1.9rem;
    margin: 0 0 0.75rem 0;
    color: #1c1917;
}
.step-intro p { color: #78716c; margin: 0; }
.form-field { margin-bottom: 1.5rem; }
.form-field label {
    display: block;
    font-size: 0.7rem;
    font-weight: 800;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: #a8a29e;
    margin-bottom: 0.5rem;
}
.form-field input {
    width: 100%;
    box-sizing: border-box;
    background: #fafaf9;
    border: 1px solid #e7e5e4;
    border-radius: 1rem;
    padding: 1rem 1.25rem;
    font-size: 1rem;
    outline: none;
}
.form-field input:focus { border-color: #b45309; }
.primary-button {
    background: #1c1917;
    color: #fff;
    font-weight: 700;
    border: none;
    border-radius: 2rem;
    padding: 1.1rem 2.5rem;
    cursor: pointer;
    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.2);
}
.primary-button:hover { background: #292524; }
.primary-button:disabled { opacity: 0.5; cursor: not-allowed; }
.primary-button.wide { width: 100%; margin-top: 1rem; }
.secondary-button {
    background: #fff;
    color: #1c1917;
    font-weight: 700;
    border: 2px solid #e7e5e4;
    border-radius: 2rem;
    padding: 1.1rem 2.5rem;
    cursor: pointer;
}
.secondary-button:hover { border-color: #1c1917; }
.step-footnote {
    text-align: center;
    font-size: 0.8rem;
    color: #78716c;
    margin-top: 1.25rem;
}
.inline-link {
    border: none;
    background: none;
    color: #b45309;
    font-weight: 700;
    text-decoration: underline;
    cursor: pointer;
    padding: 0;
    font-size: inherit;
}
.inline-link:hover { color: #92400e; }
.welcome-card {
    background: #fafaf9;
    border: 1px solid #f5f5f4;
    border-radius: 2rem;
    padding: 2rem;
    margin-bottom: 2.5rem;
}
.welcome-card p { color: #57534e; line-height: 1.7; }
.eyebrow {
    display: block;
    color: #b45309;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-size: 0.7rem;
    margin-bottom: 1rem;
}
.script-quote {
    background: #fff;
    border: 1px solid #f5f5f4;
    border-radius: 2rem;
    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.08);
    padding: 2.5rem;
    margin: 0;
    font-family: Georgia, serif;
    font-style: italic;
    font-size: 1.15rem;
    line-height: 1.8;
    color: #292524;
}
.step-actions { display: flex; justify-content: center; margin-top: 2.5rem; }
.agreement-paper {
    background: #fff;
    border: 1px solid #e7e5e4;
    border-radius: 1.5rem;
    padding: 2.5rem 3rem;
    font-family: Georgia, serif;
    font-size: 0.9rem;
    line-height: 1.7;
    color: #292524;
    box-shadow: inset 0 2px 8px rgba(0, 0, 0, 0.04);
}
.agreement-heading { text-align: center; margin-bottom: 3rem; }
.agreement-heading h4 {
    font-size: 1.25rem;
    letter-spacing: 0.15em;
    margin: 0 0 0.25rem 0;
}
.agreement-heading p {
    font-weight: 700;
    letter-spacing: 0.15em;
    color: #a8a29e;
    text-transform: uppercase;
    margin: 0;
    font-size: 0.8rem;
}
.agreement-clauses { text-align: justify; }
.agreement-clauses p { margin: 1.25rem 0; }
.signature-grid {
    margin-top: 4rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2.5rem;
}
.signature-label {
    font-size: 0.7rem;
    font-weight: 700;
    text-transform: uppercase;
    color: #a8a29e;
    margin-bottom: 0.5rem;
}
.signature-line {
    border-bottom: 1px solid #292524;
    padding: 0.5rem 0;
    font-family: Georgia, serif;
    font-style: italic;
    font-size: 1.5rem;
    min-height: 2.5rem;
}
.signature-line input {
    width: 100%;
    border: none;
    background: transparent;
    outline: none;
    font-family: Georgia, serif;
    font-style: italic;
    font-size: 1.5rem;
}
.signature-line input::placeholder { color: #e7e5e4; }
.signature-date { font-size: 0.65rem; color: #a8a29e; margin-top: 0.5rem; }
.step-success { text-align: center; padding: 2rem 0; max-width: 34rem; }
.success-mark {
    width: 6rem;
    height: 6rem;
    margin: 0 auto 2rem auto;
    border-radius: 50%;
    background: #f0fdf4;
    color: #16a34a;
    font-size: 3rem;
    display: flex;
    align-items: center;
    justify-content: center;
}
.success-copy { color: #57534e; line-height: 1.7; margin-bottom: 3rem; }
.success-actions {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}
.success-contact { margin-top: 1.5rem; }
.success-contact p {
    font-size: 0.7rem;
    color: #a8a29e;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-weight: 800;
    margin: 0.25rem 0;
}
.success-footer {
    margin-top: 4rem;
    padding-top: 2.5rem;
    border-top: 1px solid #f5f5f4;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
}
.quiet-link {
    border: none;
    background: none;
    color: #a8a29e;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-size: 0.65rem;
    cursor: pointer;
}
.quiet-link:hover { color: #57534e; }
.quiet-link.accent { color: rgba(180, 83, 9, 0.6); }
.quiet-link.accent:hover { color: #b45309; }
@media (max-width: 768px) {
    .portal-header, .portal-body { padding-left: 1.5rem; padding-right: 1.5rem; }
    .agreement-paper { padding: 1.5rem; }
    .signature-grid, .success-actions { grid-template-columns: 1fr; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::site;

    fn oakwood() -> VisitorInput {
        VisitorInput {
            name: "Jordan".into(),
            business_name: "Oakwood Chapel".into(),
            signature: "Jordan Reyes".into(),
        }
    }

    #[test]
    fn mailto_subject_is_url_encoded() {
        let href = mailto_href(&oakwood(), site());
        assert!(href.starts_with("mailto:ezelle@ezelleart.com?subject="));
        assert!(href.contains("subject=Signed%20Partnership%20Agreement%20-%20Oakwood%20Chapel"));
    }

    #[test]
    fn mailto_body_names_partner_and_sender() {
        let href = mailto_href(&oakwood(), site());
        let body = href.split("&body=").nth(1).expect("body parameter");
        let decoded = urlencoding::decode(body).expect("valid encoding");
        assert!(decoded.starts_with("Hi Ezelle,\n\n"));
        assert!(decoded.contains("the signed partnership agreement for Oakwood Chapel"));
        assert!(decoded.ends_with("Best regards,\nJordan"));
    }

    #[test]
    fn script_interpolates_visitor_and_fee() {
        let script = partnership_script(&oakwood(), site());
        assert!(script.starts_with("Hi Jordan,"));
        assert!(script.contains("Oakwood Chapel"));
        assert!(script.contains("$400"));
    }
}
