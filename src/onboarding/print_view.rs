use yew::prelude::*;

use crate::agreement::{AgreementDoc, AGREEMENT_TITLE};
use crate::config::site;

#[derive(Properties, PartialEq)]
pub struct PrintDocumentProps {
    pub doc: AgreementDoc,
}

/// Off-screen master copy of the agreement for printing. Hidden on screen;
/// when the host's print facility runs, the stylesheet below hides every
/// other subtree and this becomes the only visible document, whatever step
/// the portal was showing.
#[function_component(PrintDocument)]
pub fn print_document(props: &PrintDocumentProps) -> Html {
    let config = site();
    let doc = &props.doc;

    html! {
        <div class="print-document">
            <style>{PRINT_STYLES}</style>
            <div class="print-page">
                <div class="print-heading">
                    <h1>{config.brand_name.to_uppercase()}</h1>
                    <h2>{AGREEMENT_TITLE}</h2>
                </div>
                <p>
                    {"This Referral & Memorial Art Collaboration Agreement is entered into as of "}
                    <strong>{doc.effective_date.clone()}</strong>
                    {" by and between:"}
                </p>
                <p>
                    <strong>{format!("{}, D.B.A. \u{201c}{}\u{201d}", config.studio_legal_name, config.studio_dba)}</strong>
                    {format!(", operated by {} (\u{201c}Artist\u{201d}), and", config.artist_name)}
                </p>
                <p>
                    <strong>{doc.partner_business.clone()}</strong>
                    {" (\u{201c}Referral Partner\u{201d}), a funeral home or related service provider."}
                </p>
                <div class="print-clauses">
                    { for doc.clauses.iter().map(|clause| html! {
                        <p><strong>{clause.title}</strong>{": "}{clause.body.clone()}</p>
                    }) }
                </div>
                <div class="print-signatures">
                    <div class="print-signature">
                        <p class="print-signature-label">{"Artist Signature"}</p>
                        <div class="print-signature-line">{config.artist_name}</div>
                        <p class="print-signature-date">{format!("Date: {}", doc.effective_date)}</p>
                    </div>
                    <div class="print-signature">
                        <p class="print-signature-label">{"Referral Partner Signature"}</p>
                        <div class="print-signature-line">{doc.partner_signature.clone()}</div>
                        <p class="print-signature-date">{format!("Date: {}", doc.effective_date)}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Print rules. Ancestors are forced back to natural flowing layout so the
/// document can span pages without clipping, every subtree except the print
/// layout is hidden, and the page margin lives on .print-page rather than
/// the @page box.
const PRINT_STYLES: &str = r#"
.print-document {
    display: none;
}

@media print {
    html, body, .page, .portal-root {
        position: static !important;
        display: block !important;
        height: auto !important;
        width: 100% !important;
        overflow: visible !important;
        margin: 0 !important;
        padding: 0 !important;
    }

    .page > *:not(.portal-root),
    .portal-root > *:not(.print-document) {
        display: none !important;
        visibility: hidden !important;
    }

    .print-document {
        display: block !important;
        visibility: visible !important;
        position: absolute !important;
        top: 0 !important;
        left: 0 !important;
        width: 100% !important;
        height: auto !important;
        background: white !important;
    }

    .print-page {
        padding: 2.5cm !important;
        visibility: visible !important;
        font-family: Georgia, serif;
    }

    .print-page * {
        visibility: visible !important;
    }

    .print-page p { font-size: 11pt; }

    .print-heading { text-align: center; margin-bottom: 40pt; }
    .print-heading h1 { font-size: 32pt; margin: 0; }
    .print-heading h2 { font-size: 14pt; margin: 5pt 0 0 0; letter-spacing: 3pt; color: #444; }

    .print-clauses { text-align: justify; line-height: 1.6; }

    .print-signatures {
        margin-top: 60pt;
        display: flex;
        justify-content: space-between;
        gap: 50pt;
    }
    .print-signature { flex: 1; }
    .print-signature-label {
        font-weight: bold;
        font-size: 9pt !important;
        text-transform: uppercase;
        margin-bottom: 5pt;
    }
    .print-signature-line {
        border-bottom: 1px solid black;
        padding: 10pt 0;
        font-size: 24pt;
        font-style: italic;
        min-height: 40pt;
    }
    .print-signature-date { font-size: 9pt !important; margin-top: 5pt; }

    @page {
        size: auto;
        margin: 0;
    }
}
"#;
