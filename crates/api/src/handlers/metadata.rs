//! Handler for the static site metadata endpoint.

use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;

/// Fixed site descriptor served to the UI shell. No store access.
#[derive(Debug, Serialize)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    #[serde(rename = "brandName")]
    pub brand_name: &'static str,
    pub tagline: &'static str,
}

/// The one descriptor this deployment serves.
const SITE_METADATA: SiteMetadata = SiteMetadata {
    title: "Apps Dashboard - Portfolio Projects",
    description: "Portfolio dashboard showcasing development projects with architecture diagrams and technology stacks",
    keywords: &["portfolio", "projects", "developer", "dashboard", "next.js", "react"],
    brand_name: "Apps Dashboard",
    tagline: "APPS DASHBOARD",
};

/// GET /api/metadata
pub async fn site_metadata() -> AppResult<Json<DataResponse<SiteMetadata>>> {
    Ok(Json(DataResponse::new(SITE_METADATA)))
}
