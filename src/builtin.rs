use chrono::NaiveDate;

use crate::record::WallpaperRecord;

struct Entry {
    id: &'static str,
    date: (i32, u32, u32),
    photo: &'static str,
    title: &'static str,
    description: &'static str,
    photographer: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "1",
        date: (2026, 2, 6),
        photo: "photo-1506905925346-21bda4d32df4",
        title: "Mountain Peak",
        description: "Majestic alpine summit bathed in golden light",
        photographer: "John Doe",
    },
    Entry {
        id: "2",
        date: (2026, 2, 7),
        photo: "photo-1518837695005-2083093ee35b",
        title: "Ocean Waves",
        description: "Serene coastal landscape at dusk",
        photographer: "Jane Smith",
    },
    Entry {
        id: "3",
        date: (2026, 2, 8),
        photo: "photo-1465146633011-14f8e0781093",
        title: "Wildflower Meadow",
        description: "Vibrant spring blooms in morning light",
        photographer: "Alice Johnson",
    },
    Entry {
        id: "4",
        date: (2026, 2, 9),
        photo: "photo-1441974231531-c6227db76b6e",
        title: "Forest Path",
        description: "Enchanting woodland trail through ancient trees",
        photographer: "Bob Williams",
    },
    Entry {
        id: "5",
        date: (2026, 2, 10),
        photo: "photo-1470071459604-3b5ec3a7fe05",
        title: "Misty Mountains",
        description: "Ethereal peaks emerging from clouds at sunrise",
        photographer: "John Doe",
    },
];

const SOURCE: &str = "Unsplash";

fn unsplash_url(photo: &str, width: u32, quality: u32) -> String {
    format!("https://images.unsplash.com/{photo}?w={width}&q={quality}")
}

/// The wallpapers shipped with the binary.
pub fn records() -> Vec<WallpaperRecord> {
    ENTRIES
        .iter()
        .filter_map(|e| {
            let (y, m, d) = e.date;
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(WallpaperRecord {
                id: e.id.to_string(),
                date,
                image_url: unsplash_url(e.photo, 1080, 95),
                thumbnail_url: Some(unsplash_url(e.photo, 600, 80)),
                title: e.title.to_string(),
                description: Some(e.description.to_string()),
                photographer: Some(e.photographer.to_string()),
                source: Some(SOURCE.to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_has_a_valid_date() {
        assert_eq!(records().len(), ENTRIES.len());
    }

    #[test]
    fn test_urls_point_at_full_and_preview_sizes() {
        let first = &records()[0];
        assert_eq!(
            first.image_url,
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1080&q=95"
        );
        assert_eq!(
            first.thumbnail_url(),
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=600&q=80"
        );
    }
}
