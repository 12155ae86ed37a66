use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag marking the rarer, higher-reward events in the rotation.
pub const SPECIAL_TAG: &str = "Special";

/// One entry of the fixed event rotation, as shipped in data/events.json.
/// `id` always equals the entry's position in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTemplate {
    pub id: usize,
    pub name: String,
    pub location: String,
    pub tags: Vec<String>,
    #[serde(rename = "wikiUrl")]
    pub wiki_url: String,
}

impl EventTemplate {
    pub fn is_special(&self) -> bool {
        self.tags.iter().any(|tag| tag == SPECIAL_TAG)
    }
}

/// A concrete upcoming occurrence of a catalog entry: the template data plus
/// the computed absolute start instant. Produced fresh by the resolver and
/// superseded, never edited, on the next resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub id: usize,
    pub name: String,
    pub location: String,
    pub tags: Vec<String>,
    pub wiki_url: String,
    pub start_time: DateTime<Utc>,
}

impl ScheduledEvent {
    pub fn from_template(template: &EventTemplate, start_time: DateTime<Utc>) -> Self {
        Self {
            id: template.id,
            name: template.name.clone(),
            location: template.location.clone(),
            tags: template.tags.clone(),
            wiki_url: template.wiki_url.clone(),
            start_time,
        }
    }

    pub fn is_special(&self) -> bool {
        self.tags.iter().any(|tag| tag == SPECIAL_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_special_tag_detection() {
        let template = EventTemplate {
            id: 0,
            name: "Infernal Star".to_string(),
            location: "South-east of the Lava Maze".to_string(),
            tags: vec!["Special".to_string(), "Skilling".to_string()],
            wiki_url: String::new(),
        };
        assert!(template.is_special());

        let start = Utc.with_ymd_and_hms(2024, 2, 5, 7, 0, 0).unwrap();
        let scheduled = ScheduledEvent::from_template(&template, start);
        assert!(scheduled.is_special());
        assert_eq!(scheduled.id, 0);
        assert_eq!(scheduled.start_time, start);
    }

    #[test]
    fn test_plain_event_is_not_special() {
        let template = EventTemplate {
            id: 3,
            name: "Demon Stragglers".to_string(),
            location: "South of the Chaos Temple".to_string(),
            tags: vec!["Combat".to_string()],
            wiki_url: String::new(),
        };
        assert!(!template.is_special());
    }
}
