//! Askama templates for the web frontend.

use askama::Template;

/// Tracker page shell; station data and live status are rendered
/// client-side from the JSON endpoints.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;
