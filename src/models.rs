//! Frontend Models
//!
//! Amiibo records as served by the remote API, plus display helpers.

use serde::Deserialize;

/// Series grouping (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AmiiboSeries {
    pub id: i64,
    pub name: String,
}

/// Amiibo figure record (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Amiibo {
    pub id: i64,
    pub name: String,
    /// Absent, `null` and blank all mean "no image"
    #[serde(default)]
    pub image: Option<String>,
    pub series_id: i64,
    #[serde(default)]
    pub series: Option<AmiiboSeries>,
}

impl Amiibo {
    /// Zero-padded fighter number, e.g. `#0001`
    pub fn fighter_id_label(&self) -> String {
        format!("#{:04}", self.id)
    }

    pub fn series_id_label(&self) -> String {
        format!("#{}", self.series_id)
    }

    /// Series name for the badge; `None` hides the badge
    pub fn series_name(&self) -> Option<&str> {
        self.series.as_ref().map(|s| s.name.as_str())
    }

    /// Image URL, or `None` when the record has no image
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

/// Header label for the roster size
pub fn roster_count_label(count: usize) -> String {
    if count == 1 {
        format!("{} Fighter", count)
    } else {
        format!("{} Fighters", count)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_series() {
        let json = r#"{"id":1,"name":"Mario","image":"m.png","series_id":10,"series":{"id":10,"name":"Super Mario"}}"#;
        let amiibo: Amiibo = serde_json::from_str(json).unwrap();
        assert_eq!(amiibo, fixtures::mario());
        assert_eq!(amiibo.series_name(), Some("Super Mario"));
    }

    #[test]
    fn test_deserialize_without_series() {
        let json = r#"{"id":7,"name":"Link","image":"l.png","series_id":3}"#;
        let amiibo: Amiibo = serde_json::from_str(json).unwrap();
        assert!(amiibo.series.is_none());
        assert_eq!(amiibo.series_name(), None);

        let json = r#"{"id":7,"name":"Link","series_id":3,"series":null}"#;
        let amiibo: Amiibo = serde_json::from_str(json).unwrap();
        assert!(amiibo.series.is_none());
        assert_eq!(amiibo.image_url(), None);

        let json = r#"[{"id":1,"name":"Mario","image":null,"series_id":1},{"id":2,"name":"Luigi","image":"  ","series_id":1}]"#;
        let records: Vec<Amiibo> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].image, None);
        assert_eq!(records[0].image_url(), None);
        assert_eq!(records[1].image_url(), None);
    }

    #[test]
    fn test_deserialize_ids_outside_u32() {
        let json = r#"[{"id":5000000000,"name":"Big","image":"b.png","series_id":-1},{"id":2,"name":"Luigi","image":"g.png","series_id":1}]"#;
        let records: Vec<Amiibo> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 5_000_000_000);
        assert_eq!(records[0].series_id, -1);
        assert_eq!(records[0].fighter_id_label(), "#5000000000");
        assert_eq!(records[0].series_id_label(), "#-1");
        assert_eq!(records[1].name, "Luigi");
    }

    #[test]
    fn test_labels() {
        let mario = fixtures::mario();
        assert_eq!(mario.fighter_id_label(), "#0001");
        assert_eq!(mario.series_id_label(), "#10");

        let big = fixtures::make_amiibo(12345, "Big");
        assert_eq!(big.fighter_id_label(), "#12345");
    }

    #[test]
    fn test_roster_count_label() {
        assert_eq!(roster_count_label(0), "0 Fighters");
        assert_eq!(roster_count_label(1), "1 Fighter");
        assert_eq!(roster_count_label(2), "2 Fighters");
    }
}
