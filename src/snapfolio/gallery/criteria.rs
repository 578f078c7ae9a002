use crate::model::PhotoRecord;

/// The active category and free-text query.
///
/// Both predicates are optional and combine with AND. A photo passes the
/// category predicate on an exact, case-sensitive match; it passes the query
/// when its title or description contains the query, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    category: Option<String>,
    // Stored lowercased, never blank
    query: Option<String>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.set_category(category);
        self
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.set_query(query);
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = category.map(str::to_string);
    }

    /// Whitespace-only queries clear the search. Any other query is kept
    /// as typed, surrounding spaces included.
    pub fn set_query(&mut self, query: &str) {
        self.query = if query.trim().is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.query.is_none()
    }

    pub fn matches(&self, photo: &PhotoRecord) -> bool {
        if let Some(category) = &self.category {
            if photo.category != *category {
                return false;
            }
        }

        match &self.query {
            Some(query) => {
                photo.title.to_lowercase().contains(query)
                    || photo.description.to_lowercase().contains(query)
            }
            None => true,
        }
    }

    /// Applies the criteria to the whole catalog, keeping catalog order.
    pub fn apply(&self, photos: &[PhotoRecord]) -> Vec<PhotoRecord> {
        if self.is_empty() {
            return photos.to_vec();
        }
        photos.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::photo;

    #[test]
    fn empty_criteria_match_everything() {
        let photos = vec![photo(1, "A", "outdoor"), photo(2, "B", "indoor")];
        assert_eq!(Criteria::new().apply(&photos), photos);
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let criteria = Criteria::new().with_category(Some("outdoor"));
        assert!(criteria.matches(&photo(1, "A", "outdoor")));
        assert!(!criteria.matches(&photo(2, "B", "Outdoor")));
        assert!(!criteria.matches(&photo(3, "C", "outdoors")));
    }

    #[test]
    fn query_matches_title_or_description_ignoring_case() {
        let criteria = Criteria::new().with_query("BeAcH");
        let mut by_description = photo(2, "Evening", "outdoor");
        by_description.description = "Walk along the beach".into();

        assert!(criteria.matches(&photo(1, "Sunset Beach", "outdoor")));
        assert!(criteria.matches(&by_description));
        assert!(!criteria.matches(&photo(3, "Kitchen", "indoor")));
    }

    #[test]
    fn blank_query_clears_search() {
        let criteria = Criteria::new().with_query("beach").with_query("   ");
        assert_eq!(criteria.query(), None);
        assert!(criteria.is_empty());
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_query() {
        let photos = vec![photo(1, "Sunset", "outdoor"), photo(2, "Sunset Beach", "outdoor")];
        let criteria = Criteria::new().with_query("sunset ");

        assert_eq!(criteria.query(), Some("sunset "));
        let ids: Vec<u32> = criteria.apply(&photos).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn category_and_query_combine() {
        let photos = vec![
            photo(1, "Beach day", "outdoor"),
            photo(2, "Beach towel", "indoor"),
            photo(3, "Forest", "outdoor"),
        ];
        let criteria = Criteria::new()
            .with_category(Some("outdoor"))
            .with_query("beach");

        let ids: Vec<u32> = criteria.apply(&photos).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
