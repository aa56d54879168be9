use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate root handed to the presentation layer.
///
/// Key names are part of the page contract and must not change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub personal_info: PersonalInfo,
    pub tech_stack: Vec<SkillEntry>,
    pub projects: Vec<Project>,
    pub socials: Vec<SocialLink>,
    pub contact: ContactInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PersonalInfo {
    pub name: String,
    /// Resolved, servable URL of the portrait.
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub status: String,
    pub graduation: String,
    pub availability: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SkillEntry {
    pub name: String,
    #[schema(value_type = u8, minimum = 1, maximum = 5)]
    pub level: SkillLevel,
    pub category: SkillCategory,
}

impl SkillEntry {
    pub fn new(name: &str, level: SkillLevel, category: SkillCategory) -> Self {
        Self {
            name: name.to_string(),
            level,
            category,
        }
    }
}

// ──────────────────────────────────────────────────────────
// Skill level
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillLevelError {
    #[error("skill level {0} is outside the {min}..={max} rating scale", min = SkillLevel::MIN, max = SkillLevel::MAX)]
    OutOfRange(u8),
}

/// Self-assessed proficiency on a 1–5 rating scale.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn try_new(value: u8) -> Result<Self, SkillLevelError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SkillLevelError::OutOfRange(value))
        }
    }

    /// Compile-time checked constructor for literal data.
    pub const fn rated(value: u8) -> Self {
        assert!(value >= Self::MIN && value <= Self::MAX);
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = SkillLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Backend,
    Frontend,
    Tools,
}

// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech: Vec<String>,
    pub github: Option<String>,
    // Always emitted, `null` when there is no deployment yet.
    pub live_url: Option<String>,
    pub status: ProjectStatus,
    pub year: String,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum ProjectStatus {
    #[serde(rename = "In Development")]
    InDevelopment,
    #[serde(rename = "Completed")]
    Completed,
}

// ──────────────────────────────────────────────────────────
// Socials & contact
// ──────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
    pub icon: String,
}

impl SocialLink {
    /// Builds a link whose icon identifier follows the platform.
    pub fn new(platform: SocialPlatform, url: &str) -> Self {
        Self {
            platform,
            url: url.to_string(),
            icon: platform.icon().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum SocialPlatform {
    GitHub,
    LinkedIn,
    Facebook,
    Discord,
}

impl SocialPlatform {
    pub fn icon(&self) -> &'static str {
        match self {
            SocialPlatform::GitHub => "github",
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Discord => "discord",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactInfoError {
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(try_from = "RawContactInfo")]
pub struct ContactInfo {
    email: String,
}

#[derive(Deserialize)]
struct RawContactInfo {
    email: String,
}

impl TryFrom<RawContactInfo> for ContactInfo {
    type Error = ContactInfoError;

    fn try_from(raw: RawContactInfo) -> Result<Self, Self::Error> {
        Self::try_new(&raw.email)
    }
}

impl ContactInfo {
    pub fn try_new(email: &str) -> Result<Self, ContactInfoError> {
        if !EmailAddress::is_valid(email) {
            return Err(ContactInfoError::InvalidEmail(email.to_string()));
        }

        Ok(Self {
            email: email.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
