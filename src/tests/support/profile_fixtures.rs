use crate::portfolio::domain::entities::{ContactInfo, PersonalInfo, ProfileDocument};

/// Smallest valid document, for tests that only care about the envelope.
pub fn minimal_document() -> ProfileDocument {
    ProfileDocument {
        personal_info: PersonalInfo {
            name: "Test Person".to_string(),
            image: "http://localhost/profile.jpg".to_string(),
            title: "Engineer".to_string(),
            subtitle: "".to_string(),
            location: "".to_string(),
            status: "".to_string(),
            graduation: "2026".to_string(),
            availability: "".to_string(),
        },
        tech_stack: vec![],
        projects: vec![],
        socials: vec![],
        contact: ContactInfo::try_new("test@example.com").unwrap(),
    }
}
