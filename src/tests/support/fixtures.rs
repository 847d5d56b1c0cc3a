use serde_json::json;

use crate::portfolio::application::submission::CreateOrUpdatePayload;
use crate::portfolio::domain::entities::PortfolioRecord;

/// A stored portfolio as the service returns it: valid top-level fields,
/// a partial `en` document and no `vi` document at all.
pub fn portfolio_record(slug: &str) -> PortfolioRecord {
    serde_json::from_value(json!({
        "id": format!("portfolio-{slug}"),
        "slug": slug,
        "email": format!("{slug}@example.com"),
        "phone": "0900000000",
        "dob": "1995-04-01",
        "skills": ["Rust"],
        "locales": {
            "en": {"profile": {"name": "Jane"}, "hero": {"title": "Backend Engineer"}}
        }
    }))
    .expect("fixture record deserializes")
}

/// What the service would answer after storing `payload` under `id`.
pub fn record_from_payload(id: &str, payload: &CreateOrUpdatePayload) -> PortfolioRecord {
    let mut value = serde_json::to_value(payload).expect("payload serializes");
    value["id"] = json!(id);
    serde_json::from_value(value).expect("payload reads back as a record")
}
