/// Contact and legal constants used across the site. Every template,
/// footer, and handoff pulls from here instead of repeating literals.
pub struct SiteConfig {
    pub brand_name: &'static str,
    /// Registered entity on the agreement ("Ezelle Art LLC").
    pub studio_legal_name: &'static str,
    /// Trade name as it appears in the agreement's parties paragraph.
    pub studio_dba: &'static str,
    pub artist_name: &'static str,
    pub artist_given_name: &'static str,
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
    pub contact_phone_href: &'static str,
    /// Referral Collaboration Fee in whole dollars.
    pub referral_fee_usd: u32,
    pub governing_state: &'static str,
    pub consent_form_download_url: &'static str,
    pub consent_form_view_url: &'static str,
}

static SITE: SiteConfig = SiteConfig {
    brand_name: "Brush of Light",
    studio_legal_name: "Ezelle Art LLC",
    studio_dba: "Touch of Light",
    artist_name: "Ezelle Geldenhuis",
    artist_given_name: "Ezelle",
    contact_email: "ezelle@ezelleart.com",
    contact_phone: "317-667-2409",
    contact_phone_href: "tel:+13176672409",
    referral_fee_usd: 400,
    governing_state: "Wisconsin",
    consent_form_download_url:
        "https://drive.google.com/uc?export=download&id=1er-vOmEsUjg9hfBas49LgtTQh6ikmUDS",
    consent_form_view_url:
        "https://drive.google.com/file/d/1er-vOmEsUjg9hfBas49LgtTQh6ikmUDS/view",
};

pub fn site() -> &'static SiteConfig {
    &SITE
}
