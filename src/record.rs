use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One wallpaper and the calendar day it is published for.
///
/// The serialized form is the catalog's JSON shape:
/// `{id, date, imageUrl, thumbnailUrl?, title, description?, photographer?, source?}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperRecord {
    pub id: String,
    /// Lookup key, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl WallpaperRecord {
    /// Preview location, or the full image when no thumbnail was published.
    pub fn thumbnail_url(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> WallpaperRecord {
        WallpaperRecord {
            id: "7".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            image_url: "https://example.com/full.jpg".to_string(),
            thumbnail_url: None,
            title: "Dunes".to_string(),
            description: None,
            photographer: None,
            source: None,
        }
    }

    #[test]
    fn test_thumbnail_falls_back_to_image() {
        let mut record = minimal();
        assert_eq!(record.thumbnail_url(), "https://example.com/full.jpg");

        record.thumbnail_url = Some("https://example.com/small.jpg".to_string());
        assert_eq!(record.thumbnail_url(), "https://example.com/small.jpg");
    }

    #[test]
    fn test_json_shape_uses_camel_case_and_omits_absent_fields() {
        let json = serde_json::to_value(minimal()).unwrap();

        assert_eq!(json["date"], "2026-03-01");
        assert_eq!(json["imageUrl"], "https://example.com/full.jpg");
        assert!(json.get("thumbnailUrl").is_none());
        assert!(json.get("photographer").is_none());
    }

    #[test]
    fn test_parse_full_record() {
        let raw = r#"{
            "id": "2",
            "date": "2026-02-07",
            "imageUrl": "https://example.com/waves.jpg",
            "thumbnailUrl": "https://example.com/waves_small.jpg",
            "title": "Ocean Waves",
            "description": "Serene coastal landscape at dusk",
            "photographer": "Jane Smith",
            "source": "Unsplash"
        }"#;

        let record: WallpaperRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 2, 7).unwrap());
        assert_eq!(record.thumbnail_url(), "https://example.com/waves_small.jpg");
        assert_eq!(record.photographer.as_deref(), Some("Jane Smith"));
    }

    #[test]
    fn test_reject_date_with_time_component() {
        let raw = r#"{"id":"1","date":"2026-02-07T10:00:00Z","imageUrl":"u","title":"t"}"#;
        assert!(serde_json::from_str::<WallpaperRecord>(raw).is_err());
    }
}
