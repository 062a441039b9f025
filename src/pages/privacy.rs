use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::site;
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    let config = site();

    html! {
        <div class="page legal-page">
            <style>{LEGAL_STYLES}</style>
            <div class="legal-card">
                <div class="legal-header">
                    <Link<Route> to={Route::Home} classes="header-close">{"\u{2715}"}</Link<Route>>
                    <h1>{"Privacy Policy"}</h1>
                    <p>{"Last Updated: January 13, 2026"}</p>
                </div>

                <div class="legal-body">
                    <section>
                        <h2>{"Introduction"}</h2>
                        <p>
                            {"This Privacy Policy governs the collection, use, and protection of personal information by "}
                            <strong>{config.studio_legal_name}</strong>
                            {", doing business as "}
                            <strong>{config.brand_name}</strong>
                            {format!(" (\"we,\" \"us,\" \"our,\" or \"Company\"), operated by {}. We are committed to protecting your privacy and handling your personal information with care and respect.", config.artist_name)}
                        </p>
                        <p>{format!("This Privacy Policy applies to all services, website interactions, and business relationships conducted by {}. By engaging with our services or providing us with personal information, you consent to the practices described in this Privacy Policy.", config.studio_legal_name)}</p>
                    </section>

                    <section>
                        <h2>{"Information We Collect"}</h2>
                        <h3>{"Personal Information"}</h3>
                        <p>{"We may collect the following types of personal information:"}</p>
                        <ul>
                            <li><strong>{"Contact Information:"}</strong>{" Name, email address, phone number, mailing address, and business name"}</li>
                            <li><strong>{"Business Information:"}</strong>{" Company name, job title, organization details for B2B partnerships"}</li>
                            <li><strong>{"Financial Information:"}</strong>{" Billing address and payment details processed through secure third-party payment processors"}</li>
                            <li><strong>{"Service Information:"}</strong>{" Details about memorial services, artwork preferences, and related service requests"}</li>
                            <li><strong>{"Communications:"}</strong>{" Messages, emails, and other correspondence with our team"}</li>
                        </ul>
                        <h3>{"Sensitive Personal Information"}</h3>
                        <p>{"Due to the nature of our memorial art services, we may receive sensitive information about deceased individuals, including names, dates, biographical details, and photographs. We treat this information with the highest level of confidentiality and respect."}</p>
                        <h3>{"Automatically Collected Information"}</h3>
                        <p>{"When you visit our website, we may automatically collect:"}</p>
                        <ul>
                            <li>{"IP address and device information"}</li>
                            <li>{"Browser type and version"}</li>
                            <li>{"Pages visited and time spent on our website"}</li>
                            <li>{"Referring website addresses"}</li>
                            <li>{"Cookies and similar tracking technologies"}</li>
                        </ul>
                    </section>

                    <section>
                        <h2>{"How We Use Your Information"}</h2>
                        <p>{"We use collected information for the following purposes:"}</p>
                        <ul>
                            <li><strong>{"Service Delivery:"}</strong>{" To create memorial artwork, coordinate with partner organizations, and deliver completed products"}</li>
                            <li><strong>{"Business Operations:"}</strong>{" To process payments, manage partnerships, and fulfill contractual obligations"}</li>
                            <li><strong>{"Communication:"}</strong>{" To respond to inquiries, provide service updates, and maintain professional relationships"}</li>
                            <li><strong>{"Legal Compliance:"}</strong>{" To comply with applicable laws, regulations, and legal processes"}</li>
                            <li><strong>{"Quality Improvement:"}</strong>{" To enhance our services, website functionality, and customer experience"}</li>
                            <li><strong>{"Marketing:"}</strong>{" To send promotional materials and service updates, with your consent and ability to opt-out"}</li>
                        </ul>
                    </section>

                    <section>
                        <h2>{"Information Sharing and Disclosure"}</h2>
                        <p>{"We do not sell, rent, or trade your personal information. We may share information only in the following limited circumstances:"}</p>
                        <ul>
                            <li><strong>{"Partner Organizations:"}</strong>{" With funeral homes and memorial service providers with whom we have formal partnership agreements, solely for service coordination"}</li>
                            <li><strong>{"Service Providers:"}</strong>{" With trusted third-party vendors who assist with payment processing, website hosting, or business operations, under strict confidentiality agreements"}</li>
                            <li><strong>{"Legal Requirements:"}</strong>{" When required by law, court order, subpoena, or to protect our legal rights and safety"}</li>
                            <li><strong>{"Business Transfers:"}</strong>{" In connection with a merger, acquisition, or sale of business assets, with continued protection of your information"}</li>
                            <li><strong>{"With Your Consent:"}</strong>{" When you explicitly authorize us to share your information for a specific purpose"}</li>
                        </ul>
                    </section>

                    <section>
                        <h2>{"Data Security and Protection"}</h2>
                        <p>{"We implement reasonable administrative, technical, and physical security measures to protect your personal information from unauthorized access, disclosure, alteration, or destruction. These measures include:"}</p>
                        <ul>
                            <li>{"Secure data storage and encrypted transmission protocols"}</li>
                            <li>{"Limited access to personal information on a need-to-know basis"}</li>
                            <li>{"Regular security assessments and updates"}</li>
                            <li>{"Secure disposal of information no longer needed"}</li>
                        </ul>
                        <p class="aside">{"While we strive to protect your information, no method of electronic transmission or storage is completely secure. We cannot guarantee absolute security but are committed to maintaining industry-standard protections."}</p>
                    </section>

                    <section>
                        <h2>{"Data Retention"}</h2>
                        <p>{"We retain personal information only as long as necessary to fulfill the purposes outlined in this Privacy Policy, comply with legal obligations, resolve disputes, and enforce our agreements. Memorial service information and artwork details may be retained for archival and legal purposes. Upon request, we will delete or anonymize your personal information, except where retention is required by law."}</p>
                    </section>

                    <section>
                        <h2>{"Your Privacy Rights"}</h2>
                        <p>{"You have the following rights regarding your personal information:"}</p>
                        <ul>
                            <li><strong>{"Access:"}</strong>{" Request a copy of the personal information we hold about you"}</li>
                            <li><strong>{"Correction:"}</strong>{" Request correction of inaccurate or incomplete information"}</li>
                            <li><strong>{"Deletion:"}</strong>{" Request deletion of your personal information, subject to legal retention requirements"}</li>
                            <li><strong>{"Opt-Out:"}</strong>{" Unsubscribe from marketing communications at any time"}</li>
                            <li><strong>{"Restriction:"}</strong>{" Request limitation on how we use your information"}</li>
                            <li><strong>{"Data Portability:"}</strong>{" Request transfer of your information to another service provider where technically feasible"}</li>
                        </ul>
                        <p>{"To exercise any of these rights, please contact us using the information provided below. We will respond to your request within a reasonable timeframe as required by applicable law."}</p>
                    </section>

                    <section>
                        <h2>{"Cookies and Tracking Technologies"}</h2>
                        <p>{"Our website may use cookies and similar technologies to enhance user experience and analyze website performance. You can control cookie preferences through your browser settings. Disabling cookies may affect website functionality."}</p>
                    </section>

                    <section>
                        <h2>{"Children's Privacy"}</h2>
                        <p>{"Our services are not directed to individuals under the age of 18. We do not knowingly collect personal information from children. If we become aware that a child has provided us with personal information, we will take steps to delete such information."}</p>
                    </section>

                    <section>
                        <h2>{"Third-Party Links"}</h2>
                        <p>{"Our website may contain links to third-party websites. We are not responsible for the privacy practices or content of these external sites. We encourage you to review the privacy policies of any third-party sites you visit."}</p>
                    </section>

                    <section>
                        <h2>{"Changes to This Privacy Policy"}</h2>
                        <p>{"We reserve the right to update this Privacy Policy at any time to reflect changes in our practices, technology, legal requirements, or business operations. Updates will be posted on this page with a revised \"Last Updated\" date. Continued use of our services after changes constitutes acceptance of the updated policy. We encourage you to review this Privacy Policy periodically."}</p>
                    </section>

                    <section>
                        <h2>{"Governing Law"}</h2>
                        <p>
                            {"This Privacy Policy is governed by and construed in accordance with the laws of the State of "}
                            <strong>{config.governing_state}</strong>
                            {format!(", United States of America, without regard to its conflict of law provisions. Any disputes arising from this Privacy Policy shall be resolved in the courts of {}.", config.governing_state)}
                        </p>
                    </section>

                    <section class="contact-card">
                        <h2>{"Contact Information"}</h2>
                        <p>{"If you have questions, concerns, or requests regarding this Privacy Policy or our data practices, please contact us:"}</p>
                        <p><strong>{config.studio_legal_name}</strong></p>
                        <p>{format!("DBA {}", config.brand_name)}</p>
                        <p>{format!("Operated by {}", config.artist_name)}</p>
                        <p>
                            {"Email: "}
                            <a href={format!("mailto:{}", config.contact_email)}>{config.contact_email}</a>
                        </p>
                        <p class="aside">{"We will respond to all inquiries within 10 business days."}</p>
                    </section>

                    <div class="legal-footer">
                        <p>{"By using our services, you acknowledge that you have read, understood, and agree to be bound by this Privacy Policy."}</p>
                        <Link<Route> to={Route::Home} classes="return-link">{"Return to Home Page"}</Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}

pub const LEGAL_STYLES: &str = r#"
body { margin: 0; }
.legal-page {
    min-height: 100vh;
    background: #fafaf9;
    padding: 5rem 1.5rem;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #292524;
}
.legal-card {
    max-width: 56rem;
    margin: 0 auto;
    background: #fff;
    border: 1px solid #f5f5f4;
    border-radius: 1.5rem;
    overflow: hidden;
    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.08);
}
.legal-header {
    position: relative;
    background: #1c1917;
    color: #fff;
    padding: 3rem;
}
.legal-header h1 { font-family: Georgia, serif; font-size: 2.4rem; margin: 0; }
.legal-header p { color: #a8a29e; font-size: 0.85rem; margin: 0.5rem 0 0 0; }
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
.legal-body { padding: 3rem; line-height: 1.7; }
.legal-body section { margin-bottom: 2.5rem; }
.legal-body h2 { font-size: 1.5rem; margin: 0 0 1rem 0; }
.legal-body h3 { font-size: 1.1rem; margin: 1.5rem 0 0.5rem 0; }
.legal-body ul { color: #44403c; padding-left: 1.5rem; }
.legal-body li { margin: 0.5rem 0; }
.legal-body .aside { color: #78716c; font-style: italic; }
.contact-card {
    background: #fffbeb;
    border: 1px solid #fde68a;
    border-radius: 1rem;
    padding: 1.5rem;
}
.contact-card p { margin: 0.4rem 0; }
.contact-card a { color: #b45309; font-weight: 500; }
.warning-card {
    background: #fef2f2;
    border: 1px solid #fecaca;
    border-radius: 1rem;
    padding: 1.5rem;
}
.warning-card .shout {
    font-weight: 700;
    font-size: 0.85rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}
.legal-footer {
    padding-top: 2rem;
    border-top: 1px solid #e7e5e4;
    text-align: center;
    color: #78716c;
    font-size: 0.85rem;
}
.return-link {
    display: inline-block;
    margin-top: 1rem;
    color: #78716c;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    font-size: 0.7rem;
    text-decoration: none;
}
.return-link:hover { color: #292524; }
@media (max-width: 768px) {
    .legal-body, .legal-header { padding: 1.5rem; }
}
"#;
