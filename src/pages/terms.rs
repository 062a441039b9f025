use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::site;
use crate::pages::privacy::LEGAL_STYLES;
use crate::Route;

#[function_component(TermsOfUse)]
pub fn terms_of_use() -> Html {
    let config = site();

    html! {
        <div class="page legal-page">
            <style>{LEGAL_STYLES}</style>
            <div class="legal-card">
                <div class="legal-header">
                    <Link<Route> to={Route::Home} classes="header-close">{"\u{2715}"}</Link<Route>>
                    <h1>{"Terms of Use"}</h1>
                    <p>{"Last Updated: January 13, 2026"}</p>
                </div>

                <div class="legal-body">
                    <section>
                        <h2>{"Agreement to Terms"}</h2>
                        <p>
                            {"These Terms of Use (\"Terms\") constitute a legally binding agreement between you (\"User,\" \"you,\" or \"your\") and "}
                            <strong>{config.studio_legal_name}</strong>
                            {", doing business as "}
                            <strong>{config.brand_name}</strong>
                            {format!(" (\"Company,\" \"we,\" \"us,\" or \"our\"), operated by {}, governing your access to and use of our website, services, and all related content.", config.artist_name)}
                        </p>
                        <p>{"By accessing or using our website or services, you acknowledge that you have read, understood, and agree to be bound by these Terms and our Privacy Policy. If you do not agree to these Terms, you must immediately discontinue use of our services."}</p>
                        <p>{format!("These Terms apply to all users, including business partners, service clients, website visitors, and any other individuals or entities engaging with {}.", config.studio_legal_name)}</p>
                    </section>

                    <section>
                        <h2>{"Eligibility and User Representations"}</h2>
                        <p>{"By using our services, you represent and warrant that:"}</p>
                        <ul>
                            <li>{"You are at least 18 years of age or the age of majority in your jurisdiction"}</li>
                            <li>{"You have the legal capacity and authority to enter into binding agreements"}</li>
                            <li>{"If representing a business entity, you have authority to bind that entity to these Terms"}</li>
                            <li>{"All information you provide is accurate, current, and complete"}</li>
                            <li>{"You will use our services in compliance with all applicable laws and regulations"}</li>
                            <li>{"You will not use our services for any unlawful or prohibited purpose"}</li>
                        </ul>
                    </section>

                    <section>
                        <h2>{"Services Description"}</h2>
                        <p>{format!("{} provides premium memorial art services, including:", config.studio_legal_name)}</p>
                        <ul>
                            <li>{"Live painting services at memorial and funeral services"}</li>
                            <li>{"Custom memorial artwork creation and delivery"}</li>
                            <li>{"Business-to-business partnership programs for funeral homes and memorial service providers"}</li>
                            <li>{"Related artistic and memorial services as offered"}</li>
                        </ul>
                        <p>{"We reserve the right to modify, suspend, or discontinue any aspect of our services at any time without prior notice. We are not liable for any modification, suspension, or discontinuation of services."}</p>
                    </section>

                    <section>
                        <h2>{"Intellectual Property Rights"}</h2>
                        <h3>{"Ownership"}</h3>
                        <p>{format!("All content, artwork, designs, logos, text, graphics, images, photographs, videos, software, and other materials on our website and created through our services (\"Content\") are the exclusive property of {} and {} and are protected by United States and international copyright, trademark, and intellectual property laws.", config.studio_legal_name, config.artist_name)}</p>
                        <h3>{"Limited License"}</h3>
                        <p>{"We grant you a limited, non-exclusive, non-transferable, revocable license to access and use our website and services for their intended purpose. This license does not include:"}</p>
                        <ul>
                            <li>{"Reproduction, duplication, copying, or resale of any Content"}</li>
                            <li>{"Commercial use of Content without express written permission"}</li>
                            <li>{"Modification, adaptation, or creation of derivative works"}</li>
                            <li>{"Use of automated systems to access or scrape our website"}</li>
                            <li>{"Removal or alteration of copyright notices or proprietary markings"}</li>
                        </ul>
                        <h3>{"Artwork Ownership"}</h3>
                        <p>{format!("Commissioned memorial artwork remains the intellectual property of {} until full payment is received. Upon full payment, physical ownership transfers to the client, but {} retains copyright and reproduction rights. Clients may not reproduce, distribute, or create derivative works without written permission.", config.studio_legal_name, config.studio_legal_name)}</p>
                    </section>

                    <section>
                        <h2>{"User Obligations and Prohibited Conduct"}</h2>
                        <p>{"You agree not to:"}</p>
                        <ul>
                            <li>{"Violate any applicable local, state, national, or international law or regulation"}</li>
                            <li>{format!("Infringe upon the intellectual property rights of {} or any third party", config.studio_legal_name)}</li>
                            <li>{"Transmit any harmful, offensive, defamatory, or inappropriate content"}</li>
                            <li>{"Use our services for fraudulent, deceptive, or malicious purposes"}</li>
                            <li>{"Interfere with or disrupt the operation of our website or services"}</li>
                            <li>{"Attempt to gain unauthorized access to our systems, networks, or user accounts"}</li>
                            <li>{"Collect or harvest personal information from other users without consent"}</li>
                            <li>{"Impersonate any person or entity or misrepresent your affiliation"}</li>
                            <li>{"Use our services to compete with or harm our business interests"}</li>
                            <li>{"Reverse engineer, decompile, or disassemble any aspect of our website or services"}</li>
                        </ul>
                    </section>

                    <section>
                        <h2>{"Payment Terms and Refund Policy"}</h2>
                        <h3>{"Payment"}</h3>
                        <p>{format!("All services require payment as specified in service agreements or invoices. Prices are subject to change without notice. You agree to provide accurate billing information and authorize charges for services rendered. Late payments may incur additional fees and interest as permitted by {} law.", config.governing_state)}</p>
                        <h3>{"Refunds and Cancellations"}</h3>
                        <p>{"Due to the custom nature of our services, refund policies are determined on a case-by-case basis. Generally:"}</p>
                        <ul>
                            <li>{"Deposits are non-refundable once work has commenced"}</li>
                            <li>{"Cancellations must be made in writing with reasonable notice"}</li>
                            <li>{"Completed work is non-refundable"}</li>
                            <li>{"Refund requests must be submitted in writing with detailed justification"}</li>
                        </ul>
                    </section>

                    <section class="warning-card">
                        <h2>{"Disclaimers and Limitations of Liability"}</h2>
                        <h3>{"No Warranties"}</h3>
                        <p class="shout">{"OUR SERVICES AND WEBSITE ARE PROVIDED \"AS IS\" AND \"AS AVAILABLE\" WITHOUT WARRANTIES OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE, NON-INFRINGEMENT, OR ACCURACY."}</p>
                        <p>{"We do not warrant that our services will be uninterrupted, error-free, secure, or free from viruses or harmful components. We make no guarantees about the quality, accuracy, or reliability of any content or services."}</p>
                        <h3>{"Limitation of Liability"}</h3>
                        <p class="shout">{format!("TO THE MAXIMUM EXTENT PERMITTED BY APPLICABLE LAW, {}, {}, AND THEIR AFFILIATES, OFFICERS, EMPLOYEES, AGENTS, AND PARTNERS SHALL NOT BE LIABLE FOR ANY INDIRECT, INCIDENTAL, SPECIAL, CONSEQUENTIAL, OR PUNITIVE DAMAGES, INCLUDING BUT NOT LIMITED TO LOSS OF PROFITS, DATA, USE, OR GOODWILL, ARISING FROM YOUR USE OR INABILITY TO USE OUR SERVICES.", config.studio_legal_name.to_uppercase(), config.artist_name.to_uppercase())}</p>
                        <p>{"In no event shall our total liability exceed the amount you paid for services in the twelve months preceding the claim, or $100, whichever is greater."}</p>
                    </section>

                    <section>
                        <h2>{"Indemnification"}</h2>
                        <p>{format!("You agree to indemnify, defend, and hold harmless {}, {}, and all affiliated parties from and against any claims, liabilities, damages, losses, costs, expenses, or fees (including reasonable attorneys' fees) arising from:", config.studio_legal_name, config.artist_name)}</p>
                        <ul>
                            <li>{"Your use or misuse of our services"}</li>
                            <li>{"Your violation of these Terms"}</li>
                            <li>{"Your violation of any rights of another party"}</li>
                            <li>{"Your breach of any representation or warranty"}</li>
                            <li>{"Any content you submit or provide through our services"}</li>
                        </ul>
                    </section>

                    <section>
                        <h2>{"Dispute Resolution and Governing Law"}</h2>
                        <h3>{"Governing Law"}</h3>
                        <p>
                            {"These Terms shall be governed by and construed in accordance with the laws of the State of "}
                            <strong>{config.governing_state}</strong>
                            {format!(", United States of America, without regard to conflict of law principles. Any legal action or proceeding arising under these Terms shall be brought exclusively in the state or federal courts located in {}, and you hereby consent to personal jurisdiction and venue therein.", config.governing_state)}
                        </p>
                        <h3>{"Informal Resolution"}</h3>
                        <p>{"In the event of any dispute, controversy, or claim arising out of or relating to these Terms, the parties agree to first attempt to resolve the matter through good faith negotiation and informal discussion."}</p>
                        <h3>{"Arbitration"}</h3>
                        <p>{format!("If informal resolution fails, disputes shall be resolved through binding arbitration in accordance with the rules of the American Arbitration Association, conducted in {}. The arbitrator's decision shall be final and binding. You waive any right to a jury trial or to participate in a class action lawsuit.", config.governing_state)}</p>
                    </section>

                    <section>
                        <h2>{"Termination"}</h2>
                        <p>{"We reserve the right to suspend or terminate your access to our services at any time, with or without cause, with or without notice, for any reason including:"}</p>
                        <ul>
                            <li>{"Violation of these Terms"}</li>
                            <li>{"Fraudulent, abusive, or illegal activity"}</li>
                            <li>{"Extended periods of inactivity"}</li>
                            <li>{"At our sole discretion for any reason"}</li>
                        </ul>
                        <p>{"Upon termination, your right to use our services immediately ceases. Provisions of these Terms that by their nature should survive termination shall survive, including ownership, warranty disclaimers, indemnity, and limitations of liability."}</p>
                    </section>

                    <section>
                        <h2>{"Privacy and Data Protection"}</h2>
                        <p>{"Your use of our services is also governed by our Privacy Policy, which is incorporated into these Terms by reference. Please review our Privacy Policy to understand our data collection and use practices."}</p>
                    </section>

                    <section>
                        <h2>{"Modifications to Terms"}</h2>
                        <p>{"We reserve the right to modify, amend, or update these Terms at any time at our sole discretion. Changes will be effective immediately upon posting to our website with a revised \"Last Updated\" date. Your continued use of our services after changes constitutes acceptance of the modified Terms. We encourage you to review these Terms periodically. If you do not agree to modified Terms, you must discontinue use of our services."}</p>
                    </section>

                    <section>
                        <h2>{"Severability and Waiver"}</h2>
                        <p>{"If any provision of these Terms is found to be invalid, illegal, or unenforceable, the remaining provisions shall continue in full force and effect. The invalidity of any provision shall not affect the validity of the remaining provisions."}</p>
                        <p>{format!("Our failure to enforce any right or provision of these Terms shall not constitute a waiver of such right or provision. Any waiver must be in writing and signed by an authorized representative of {}.", config.studio_legal_name)}</p>
                    </section>

                    <section>
                        <h2>{"Entire Agreement"}</h2>
                        <p>{format!("These Terms, together with our Privacy Policy and any other legal notices or agreements published by us, constitute the entire agreement between you and {} concerning your use of our services and supersede all prior or contemporaneous communications and proposals.", config.studio_legal_name)}</p>
                    </section>

                    <section>
                        <h2>{"Assignment"}</h2>
                        <p>{"You may not assign or transfer these Terms or your rights hereunder without our prior written consent. We may assign or transfer these Terms or our rights hereunder to any third party without restriction or notice."}</p>
                    </section>

                    <section>
                        <h2>{"Force Majeure"}</h2>
                        <p>{format!("{} shall not be liable for any failure or delay in performance due to circumstances beyond our reasonable control, including but not limited to acts of God, natural disasters, war, terrorism, labor disputes, governmental actions, or technical failures.", config.studio_legal_name)}</p>
                    </section>

                    <section class="contact-card">
                        <h2>{"Contact Information"}</h2>
                        <p>{"If you have questions, concerns, or require clarification regarding these Terms of Use, please contact us:"}</p>
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
                        <p>{"By using our services, you acknowledge that you have read, understood, and agree to be bound by these Terms of Use."}</p>
                        <p class="shout">{"LEGALLY BINDING AGREEMENT - PLEASE READ CAREFULLY"}</p>
                        <Link<Route> to={Route::Home} classes="return-link">{"Return to Home Page"}</Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
