//! Shop Settings Rules
//!
//! Cleanup and validation of social links and company info before saving.

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::icons::Icon;
use crate::models::{CompanyInfo, SocialLinks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Instagram,
    Facebook,
    TikTok,
    WhatsApp,
    Website,
}

impl SocialNetwork {
    pub const ALL: [SocialNetwork; 5] = [
        SocialNetwork::Instagram,
        SocialNetwork::Facebook,
        SocialNetwork::TikTok,
        SocialNetwork::WhatsApp,
        SocialNetwork::Website,
    ];

    pub fn icon(self) -> Icon {
        match self {
            SocialNetwork::Instagram => Icon::Instagram,
            SocialNetwork::Facebook => Icon::Facebook,
            SocialNetwork::TikTok => Icon::TikTok,
            SocialNetwork::WhatsApp => Icon::WhatsApp,
            SocialNetwork::Website => Icon::Website,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "@yourshop or https://instagram.com/yourshop",
            SocialNetwork::Facebook => "https://facebook.com/yourshop",
            SocialNetwork::TikTok => "@yourshop",
            SocialNetwork::WhatsApp => "+1 555 123 4567",
            SocialNetwork::Website => "yourshop.com",
        }
    }

    /// Profile URL prefix for `@handle` input
    fn handle_base(self) -> Option<&'static str> {
        match self {
            SocialNetwork::Instagram => Some("https://instagram.com/"),
            SocialNetwork::Facebook => Some("https://facebook.com/"),
            SocialNetwork::TikTok => Some("https://tiktok.com/@"),
            SocialNetwork::WhatsApp | SocialNetwork::Website => None,
        }
    }

    pub fn get(self, links: &SocialLinks) -> Option<&str> {
        match self {
            SocialNetwork::Instagram => links.instagram.as_deref(),
            SocialNetwork::Facebook => links.facebook.as_deref(),
            SocialNetwork::TikTok => links.tiktok.as_deref(),
            SocialNetwork::WhatsApp => links.whatsapp.as_deref(),
            SocialNetwork::Website => links.website.as_deref(),
        }
    }

    pub fn set(self, links: &mut SocialLinks, value: Option<String>) {
        let slot = match self {
            SocialNetwork::Instagram => &mut links.instagram,
            SocialNetwork::Facebook => &mut links.facebook,
            SocialNetwork::TikTok => &mut links.tiktok,
            SocialNetwork::WhatsApp => &mut links.whatsapp,
            SocialNetwork::Website => &mut links.website,
        };
        *slot = value;
    }

    /// Turn what the owner typed into a link, or `None` when blank
    pub fn to_link(self, raw: &str) -> Option<String> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        if value.starts_with("http://") || value.starts_with("https://") {
            return Some(value.to_string());
        }
        if self == SocialNetwork::WhatsApp {
            let digits: String = value.chars().filter(char::is_ascii_digit).collect();
            return (!digits.is_empty()).then(|| format!("https://wa.me/{}", digits));
        }
        match (value.strip_prefix('@'), self.handle_base()) {
            (Some(handle), Some(base)) if !handle.is_empty() => Some(format!("{}{}", base, handle)),
            _ => Some(format!("https://{}", value.trim_start_matches('@'))),
        }
    }
}

/// Links with every entry turned into a full URL and blanks dropped
pub fn normalize_social_links(links: &SocialLinks) -> SocialLinks {
    let mut out = SocialLinks::default();
    for network in SocialNetwork::ALL {
        let link = network.get(links).and_then(|raw| network.to_link(raw));
        network.set(&mut out, link);
    }
    out
}

fn optional(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Trimmed company info; name is required, email must look like one
pub fn normalize_company_info(info: &CompanyInfo) -> AppResult<CompanyInfo> {
    let name = info.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Company name is required".into()));
    }
    let email = optional(&info.email);
    if let Some(email) = &email {
        let valid = email
            .split_once('@')
            .map(|(user, domain)| !user.is_empty() && !domain.is_empty())
            .unwrap_or(false);
        if !valid {
            return Err(AppError::Validation(format!("\"{}\" is not a valid email", email)));
        }
    }
    Ok(CompanyInfo {
        name,
        description: optional(&info.description),
        address: optional(&info.address),
        phone: optional(&info.phone),
        email,
        opening_hours: optional(&info.opening_hours),
    })
}

/// Partial shop update sent to the store
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_info: Option<CompanyInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_normalized() {
        let links = SocialLinks {
            instagram: Some(" @luigis ".into()),
            facebook: Some("https://facebook.com/luigis".into()),
            tiktok: Some("".into()),
            whatsapp: Some("+1 (555) 123-4567".into()),
            website: Some("luigis.com".into()),
        };
        let out = normalize_social_links(&links);

        assert_eq!(out.instagram.as_deref(), Some("https://instagram.com/luigis"));
        assert_eq!(out.facebook.as_deref(), Some("https://facebook.com/luigis"));
        assert_eq!(out.tiktok, None);
        assert_eq!(out.whatsapp.as_deref(), Some("https://wa.me/15551234567"));
        assert_eq!(out.website.as_deref(), Some("https://luigis.com"));
    }

    #[test]
    fn test_company_name_required() {
        let info = CompanyInfo { name: "  ".into(), ..Default::default() };
        assert!(matches!(normalize_company_info(&info), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_company_email_checked_and_blanks_dropped() {
        let mut info = CompanyInfo {
            name: " Luigi's ".into(),
            email: Some("not-an-email".into()),
            phone: Some("   ".into()),
            ..Default::default()
        };
        assert!(normalize_company_info(&info).is_err());

        info.email = Some("hello@luigis.com".into());
        let out = normalize_company_info(&info).unwrap();
        assert_eq!(out.name, "Luigi's");
        assert_eq!(out.phone, None);
        assert_eq!(out.email.as_deref(), Some("hello@luigis.com"));
    }

    #[test]
    fn test_patch_skips_absent_sections() {
        let patch = ShopSettingsPatch { company_info: Some(CompanyInfo::default()), ..Default::default() };
        let json = serde_json::to_value(&patch).unwrap();
        assert!(json.get("socialLinks").is_none());
        assert!(json.get("companyInfo").is_some());
    }
}
