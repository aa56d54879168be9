use crate::portfolio::application::ports::outgoing::AssetLocator;
use crate::portfolio::application::use_cases::get_profile_document::GetProfileDocumentError;
use crate::portfolio::domain::entities::{
    ContactInfo, PersonalInfo, ProfileDocument, Project, ProjectStatus, SkillCategory, SkillEntry,
    SkillLevel, SocialLink, SocialPlatform,
};

pub const PROFILE_IMAGE: &str = "profile.jpg";
pub const HRVST_IMAGE: &str = "hrvst-ss.png";
pub const CONTACT_EMAIL: &str = "jdlitaoen@gmail.com";

// Evaluated at compile time, so a rating outside the scale fails the build.
const TECH_STACK: [(&str, SkillLevel, SkillCategory); 9] = [
    ("Laravel", SkillLevel::rated(3), SkillCategory::Backend),
    ("React.js", SkillLevel::rated(3), SkillCategory::Frontend),
    ("Vue.js", SkillLevel::rated(1), SkillCategory::Frontend),
    ("Livewire PHP", SkillLevel::rated(1), SkillCategory::Frontend),
    ("Inertia.js", SkillLevel::rated(4), SkillCategory::Frontend),
    ("TailwindCSS", SkillLevel::rated(4), SkillCategory::Frontend),
    ("SQLite", SkillLevel::rated(4), SkillCategory::Backend),
    ("TypeScript", SkillLevel::rated(2), SkillCategory::Frontend),
    ("Git", SkillLevel::rated(3), SkillCategory::Tools),
];

const SOCIALS: [(SocialPlatform, &str); 4] = [
    (SocialPlatform::GitHub, "https://github.com/Jerdon07"),
    (
        SocialPlatform::LinkedIn,
        "https://www.linkedin.com/in/jerdon-litaoen-95057a3a4",
    ),
    (SocialPlatform::Facebook, "https://www.facebook.com/jer.don.35/"),
    (
        SocialPlatform::Discord,
        "https://discordapp.com/users/1218207427468726433",
    ),
];

fn resolve<A>(assets: &A, path: &str) -> Result<String, GetProfileDocumentError>
where
    A: AssetLocator + ?Sized,
{
    assets
        .asset_url(path)
        .map_err(|source| GetProfileDocumentError::AssetResolution {
            path: path.to_string(),
            source,
        })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the canonical portfolio document, resolving every image through
/// `assets`. All-or-nothing: the first unresolvable asset aborts the build.
pub fn profile_document<A>(assets: &A) -> Result<ProfileDocument, GetProfileDocumentError>
where
    A: AssetLocator + ?Sized,
{
    let personal_info = PersonalInfo {
        name: "Jerdon M. Litaoen".to_string(),
        image: resolve(assets, PROFILE_IMAGE)?,
        title: "Full-Stack Developer".to_string(),
        subtitle: "Specializing in Laravel & React, Vue, and Livewire".to_string(),
        location: "Baguio, Benguet, Philippines".to_string(),
        status: "Information Technology Student".to_string(),
        graduation: "2026".to_string(),
        availability: "Open to remote opportunities".to_string(),
    };

    let tech_stack = TECH_STACK
        .iter()
        .map(|(name, level, category)| SkillEntry::new(name, *level, *category))
        .collect();

    let projects = vec![Project {
        id: 1,
        name: "Hrvst".to_string(),
        tagline: "Agricultural Marketplace Platform".to_string(),
        description: "A comprehensive web application that helps admins manage vegetable \
                      prices, enables farmers to post their produce, and allows buyers to \
                      purchase vegetables directly from local farmers."
            .to_string(),
        features: strings(&[
            "Multi-tenant architecture for different user roles (Admin, Farmer, Buyer)",
            "Real-time price management system",
            "Secure authentication and authorization",
            "Responsive design optimized for mobile and desktop",
            "Database optimization for scalability",
        ]),
        tech: strings(&["Laravel 12", "React JS", "Inertia.js", "TailwindCSS", "SQLite"]),
        github: Some("https://github.com/Cresco-Team/Hrvst".to_string()),
        live_url: None,
        status: ProjectStatus::InDevelopment,
        year: "2024-2025".to_string(),
        image: resolve(assets, HRVST_IMAGE)?,
    }];

    let socials = SOCIALS
        .iter()
        .map(|(platform, url)| SocialLink::new(*platform, url))
        .collect();

    let contact = ContactInfo::try_new(CONTACT_EMAIL)
        .map_err(|e| GetProfileDocumentError::InvalidContent(e.to_string()))?;

    Ok(ProfileDocument {
        personal_info,
        tech_stack,
        projects,
        socials,
        contact,
    })
}
