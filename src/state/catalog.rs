//! Free video catalog and its search filter

use chrono::NaiveDate;

/// Selector value that matches every subject or level
pub const ALL: &str = "All";

pub const SUBJECT_FILTERS: &[&str] = &[ALL, "Mathematics", "Physics", "Chemistry"];
pub const LEVEL_FILTERS: &[&str] = &[ALL, "Grade 9", "Grade 10", "Grade 11", "Grade 12", "College"];

/// A free lesson video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub level: String,
    pub description: String,
    /// Running time as shown on the card, e.g. `15:30`
    pub duration: String,
    pub views: u32,
    pub uploaded: NaiveDate,
}

impl Video {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: u32,
        title: &str,
        subject: &str,
        level: &str,
        duration: &str,
        description: &str,
        views: u32,
        uploaded: (i32, u32, u32),
    ) -> Self {
        let (y, m, d) = uploaded;
        Self {
            id,
            title: title.to_string(),
            subject: subject.to_string(),
            level: level.to_string(),
            description: description.to_string(),
            duration: duration.to_string(),
            views,
            uploaded: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        }
    }
}

/// The videos published on the free page
pub fn seed_videos() -> Vec<Video> {
    vec![
        Video::new(
            1,
            "Introduction to Quadratic Equations",
            "Mathematics",
            "Grade 10",
            "15:30",
            "Learn the basics of quadratic equations and how to solve them step by step.",
            1250,
            (2024, 1, 15),
        ),
        Video::new(
            2,
            "Newton's Laws of Motion Explained",
            "Physics",
            "Grade 11",
            "22:45",
            "A comprehensive explanation of Newton's three laws of motion with real-world examples.",
            980,
            (2024, 1, 20),
        ),
        Video::new(
            3,
            "Organic Chemistry: Alkanes and Alkenes",
            "Chemistry",
            "Grade 12",
            "18:20",
            "Understanding the structure and properties of alkanes and alkenes in organic chemistry.",
            750,
            (2024, 1, 25),
        ),
        Video::new(
            4,
            "Calculus: Introduction to Derivatives",
            "Mathematics",
            "College",
            "25:10",
            "Learn about derivatives, their geometric interpretation, and basic differentiation rules.",
            1500,
            (2024, 2, 1),
        ),
        Video::new(
            5,
            "Thermodynamics Basics",
            "Physics",
            "College",
            "20:15",
            "Introduction to thermodynamics concepts including heat, work, and energy transfer.",
            680,
            (2024, 2, 5),
        ),
        Video::new(
            6,
            "Chemical Bonding and Molecular Structure",
            "Chemistry",
            "Grade 11",
            "30:00",
            "Explore different types of chemical bonds and how they affect molecular structure.",
            890,
            (2024, 2, 10),
        ),
    ]
}

/// Live search, subject and level inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: String,
    pub subject: String,
    pub level: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            subject: ALL.to_string(),
            level: ALL.to_string(),
        }
    }
}

impl CatalogFilter {
    pub fn matches(&self, video: &Video) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = video.title.to_lowercase().contains(&needle)
            || video.description.to_lowercase().contains(&needle);
        let matches_subject = self.subject == ALL || video.subject == self.subject;
        let matches_level = self.level == ALL || video.level == self.level;
        matches_search && matches_subject && matches_level
    }

    /// Videos passing all three predicates, in catalog order
    pub fn apply<'a>(&self, videos: &'a [Video]) -> Vec<&'a Video> {
        videos.iter().filter(|v| self.matches(v)).collect()
    }

    pub fn cycle_subject(&mut self) {
        self.subject = next_in(SUBJECT_FILTERS, &self.subject);
    }

    pub fn cycle_level(&mut self) {
        self.level = next_in(LEVEL_FILTERS, &self.level);
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn next_in(options: &[&str], current: &str) -> String {
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    options[(idx + 1) % options.len()].to_string()
}

/// View count as shown on a card, e.g. `1250` → `1.3K`
pub fn format_views(views: u32) -> String {
    if views >= 1000 {
        // Halves round up
        let tenths = (views as f64 / 100.0).round();
        format!("{:.1}K", tenths / 10.0)
    } else {
        views.to_string()
    }
}

/// Upload date as shown on a card, e.g. `Jan 15, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(videos: &[&Video]) -> Vec<String> {
        videos.iter().map(|v| v.title.clone()).collect()
    }

    #[test]
    fn test_default_filter_returns_everything() {
        let videos = seed_videos();
        assert_eq!(CatalogFilter::default().apply(&videos).len(), 6);
    }

    #[test]
    fn test_quadratic_search() {
        let videos = seed_videos();
        let mut filter = CatalogFilter {
            search: "quadratic".to_string(),
            ..Default::default()
        };
        assert_eq!(
            titles(&filter.apply(&videos)),
            vec!["Introduction to Quadratic Equations".to_string()]
        );

        filter.subject = "Physics".to_string();
        assert!(filter.apply(&videos).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_description() {
        let videos = seed_videos();
        let filter = CatalogFilter {
            search: "ENERGY TRANSFER".to_string(),
            ..Default::default()
        };
        assert_eq!(
            titles(&filter.apply(&videos)),
            vec!["Thermodynamics Basics".to_string()]
        );
    }

    #[test]
    fn test_subject_and_level_are_anded() {
        let videos = seed_videos();
        let filter = CatalogFilter {
            search: String::new(),
            subject: "Chemistry".to_string(),
            level: "Grade 11".to_string(),
        };
        let ids: Vec<u32> = filter.apply(&videos).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![6]);
    }

    #[test]
    fn test_results_keep_catalog_order() {
        let videos = seed_videos();
        let filter = CatalogFilter {
            subject: "Mathematics".to_string(),
            ..Default::default()
        };
        let ids: Vec<u32> = filter.apply(&videos).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_cycle_subject_wraps_to_all() {
        let mut filter = CatalogFilter::default();
        for _ in 0..SUBJECT_FILTERS.len() {
            filter.cycle_subject();
        }
        assert_eq!(filter.subject, ALL);
        filter.cycle_level();
        assert_eq!(filter.level, "Grade 9");
    }

    #[test]
    fn test_clear() {
        let mut filter = CatalogFilter {
            search: "x".to_string(),
            subject: "Physics".to_string(),
            level: "College".to_string(),
        };
        assert!(!filter.is_default());
        filter.clear();
        assert!(filter.is_default());
    }

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(980), "980");
        assert_eq!(format_views(1250), "1.3K");
        assert_eq!(format_views(1500), "1.5K");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert_eq!(format_date(date), "Feb 5, 2024");
    }
}
