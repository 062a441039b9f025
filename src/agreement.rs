//! The collaboration agreement as data. The on-screen agreement step and
//! the print layout both render this one clause sequence, so the two
//! presentations cannot drift apart.

use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::onboarding::state::VisitorInput;

/// Stands in for the partner's business name when nothing has been typed.
/// The print rendering can be produced at any step, so it must never show
/// an empty party line.
pub const BUSINESS_NAME_PLACEHOLDER: &str = "[Company Name]";

/// Rendered heading of the agreement document, shared by both layouts.
pub const AGREEMENT_TITLE: &str = "REFERRAL & MEMORIAL ART COLLABORATION AGREEMENT";

#[derive(Clone, PartialEq)]
pub struct Clause {
    pub title: &'static str,
    pub body: String,
}

/// The canonical numbered clause list, fee and jurisdiction filled in from
/// the site configuration.
pub fn clauses(site: &SiteConfig) -> Vec<Clause> {
    vec![
        Clause {
            title: "1. Purpose",
            body: "Artist provides a memorial fine art service in which a painting is created live, quietly and respectfully, during a viewing or memorial service, then completed in the studio and delivered to the family as a lasting artwork. The service is an optional, independent adjunct to Referral Partner’s services and is contracted directly with families.".to_string(),
        },
        Clause {
            title: "2. Independent Contractor Status",
            body: "Artist operates as an independent contractor. Nothing in this Agreement creates an employment, partnership, or agency relationship. Referral Partner does not control artistic execution, pricing, scheduling, or delivery.".to_string(),
        },
        Clause {
            title: "3. Non-Solicitation & Client Protection",
            body: format!("Artist agrees not to solicit Referral Partner’s families except through direct referral or family-initiated inquiry, not to offer competing services, and not to represent {} as a replacement for Referral Partner’s offerings.", site.brand_name),
        },
        Clause {
            title: "4. Referral Process",
            body: "Referral Partner’s role is limited to informing families of the service, providing Artist materials, and sharing contact information with family consent. Artist handles all consultations, contracts, artwork, and delivery.".to_string(),
        },
        Clause {
            title: "5. Live Service Presence",
            body: "Artist will maintain a professional, discreet presence during services and coordinate independently without disruption or staff involvement.".to_string(),
        },
        Clause {
            title: "6. Referral Collaboration Fee",
            body: format!("Artist agrees to pay a Referral Collaboration Fee of ${} for each completed artwork resulting from a Referral Partner introduction. Fees are paid within 30 days of artwork delivery and full payment.", site.referral_fee_usd),
        },
        Clause {
            title: "7. Confidentiality",
            body: "Both Parties agree to maintain confidentiality regarding families, memorial content, and business practices. This obligation survives termination.".to_string(),
        },
        Clause {
            title: "8. Intellectual Property",
            body: "All artwork and creative processes remain the sole property of Artist. Referral Partner may not reproduce artwork without permission.".to_string(),
        },
        Clause {
            title: "9. Liability & Indemnification",
            body: "Artist assumes responsibility for artwork creation and delivery and agrees to indemnify Referral Partner from claims arising solely from Artist services.".to_string(),
        },
        Clause {
            title: "10. Non-Exclusivity",
            body: "This Agreement is non-exclusive for both Parties.".to_string(),
        },
        Clause {
            title: "11. Termination",
            body: "Either Party may terminate this Agreement at any time. Termination does not affect fees owed for completed referrals.".to_string(),
        },
        Clause {
            title: "12. Governing Law",
            body: format!("This Agreement shall be governed by the laws of the State of {}.", site.governing_state),
        },
    ]
}

/// Everything a renderer needs for one agreement: dates and party fields
/// resolved, clause list materialized.
#[derive(Clone, PartialEq)]
pub struct AgreementDoc {
    pub effective_date: String,
    pub partner_business: String,
    pub partner_signature: String,
    pub clauses: Vec<Clause>,
}

impl AgreementDoc {
    pub fn prepare(input: &VisitorInput, site: &SiteConfig, today: NaiveDate) -> Self {
        let partner_business = if input.business_name.is_empty() {
            BUSINESS_NAME_PLACEHOLDER.to_string()
        } else {
            input.business_name.clone()
        };
        AgreementDoc {
            effective_date: long_date(today),
            partner_business,
            partner_signature: input.signature.clone(),
            clauses: clauses(site),
        }
    }
}

/// "Month D, YYYY" with English month names and no day padding,
/// e.g. "August 7, 2026". The agreement always dates itself this way
/// regardless of the visitor's locale.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::site;

    #[test]
    fn long_date_is_month_day_year() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date");
        assert_eq!(long_date(date), "August 7, 2026");

        let single_digit = NaiveDate::from_ymd_opt(2025, 1, 3).expect("valid date");
        assert_eq!(long_date(single_digit), "January 3, 2025");
    }

    #[test]
    fn clause_list_carries_fee_and_jurisdiction() {
        let clauses = clauses(site());
        assert_eq!(clauses.len(), 12);
        assert!(clauses[5].body.contains("$400"));
        assert!(clauses[11].body.contains("Wisconsin"));
    }

    #[test]
    fn prepared_doc_substitutes_typed_values() {
        let input = VisitorInput {
            name: "Jordan".into(),
            business_name: "Oakwood Chapel".into(),
            signature: "Jordan Reyes".into(),
        };
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date");
        let doc = AgreementDoc::prepare(&input, site(), today);
        assert_eq!(doc.partner_business, "Oakwood Chapel");
        assert_eq!(doc.partner_signature, "Jordan Reyes");
        assert_eq!(doc.effective_date, "August 7, 2026");
    }

    #[test]
    fn empty_business_name_renders_placeholder() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date");
        let doc = AgreementDoc::prepare(&VisitorInput::default(), site(), today);
        assert_eq!(doc.partner_business, BUSINESS_NAME_PLACEHOLDER);
        assert_eq!(doc.partner_signature, "");
    }
}
