use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::portfolio::domain::entities::{
    ContactInfo, PersonalInfo, ProfileDocument, Project, ProjectStatus, SkillCategory, SkillEntry,
    SocialLink, SocialPlatform,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Static portfolio document for Jerdon M. Litaoen"
    ),
    paths(
        crate::portfolio::adapter::incoming::web::routes::get_portfolio::get_portfolio_page_handler,
        crate::portfolio::adapter::incoming::web::routes::get_portfolio::get_portfolio_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            ProfileDocument,
            PersonalInfo,
            SkillEntry,
            SkillCategory,
            Project,
            ProjectStatus,
            SocialLink,
            SocialPlatform,
            ContactInfo,
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio document endpoints"),
    )
)]
pub struct ApiDoc;
