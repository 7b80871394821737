use regex::Regex;

const ADD_NEW_PLACEHOLDER: &str = "lägg till";

/// A board-role label and the role name stored when it matches
pub struct RolePattern {
    pub role: &'static str,
    pub regex: Regex,
}

impl RolePattern {
    fn new(label: &str, role: &'static str) -> Self {
        Self {
            role,
            regex: Regex::new(&format!(r"(?i){}[:\t\s]+([^\n\t]+)", regex::escape(label)))
                .unwrap(),
        }
    }

    /// Name following the label, cut at the first tab; `None` for placeholders
    pub fn extract_name(&self, listing: &str) -> Option<String> {
        let captures = self.regex.captures(listing)?;
        let captured = captures.get(1)?.as_str().trim();
        let name = captured.split('\t').next().unwrap_or("").trim();

        if name.is_empty() || name.to_lowercase().contains(ADD_NEW_PLACEHOLDER) {
            return None;
        }
        Some(name.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Officer {
    pub name: String,
    pub role: String,
}

/// Picks one officer out of a board listing. Patterns are tried in priority
/// order and the first that yields a usable name wins.
pub struct BoardListingParser {
    patterns: Vec<RolePattern>,
}

impl BoardListingParser {
    pub fn new() -> Self {
        Self {
            patterns: create_role_patterns(),
        }
    }

    pub fn parse(&self, listing: &str) -> Option<Officer> {
        if listing.trim().is_empty() {
            return None;
        }

        self.patterns.iter().find_map(|pattern| {
            pattern.extract_name(listing).map(|name| Officer {
                name,
                role: pattern.role.to_string(),
            })
        })
    }
}

impl Default for BoardListingParser {
    fn default() -> Self {
        Self::new()
    }
}

fn create_role_patterns() -> Vec<RolePattern> {
    vec![
        RolePattern::new("Verkställande direktör", "Verkställande direktör"),
        RolePattern::new("Extern verkställande direktör", "Extern VD"),
        RolePattern::new("Ordförande", "Ordförande"),
        RolePattern::new("Styrelseledamot", "Styrelseledamot"),
        RolePattern::new("Styrelsesuppleant", "Styrelsesuppleant"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_managing_director() {
        let parser = BoardListingParser::new();
        let officer = parser.parse("Verkställande direktör: Jane Doe").unwrap();

        assert_eq!(officer.name, "Jane Doe");
        assert_eq!(officer.role, "Verkställande direktör");
    }

    #[test]
    fn test_external_managing_director_takes_first_label() {
        let parser = BoardListingParser::new();
        let officer = parser
            .parse("Extern verkställande direktör: Karin Berg\tsedan 2021")
            .unwrap();

        assert_eq!(officer.name, "Karin Berg");
        assert_eq!(officer.role, "Verkställande direktör");
    }

    #[test]
    fn test_unrecognized_listing_yields_nothing() {
        let parser = BoardListingParser::new();
        assert_eq!(parser.parse("Revisor: Karl Karlsson"), None);
        assert_eq!(parser.parse(""), None);
    }

    #[test]
    fn test_priority_order_beats_text_order() {
        let parser = BoardListingParser::new();
        let listing = "Styrelseledamot\tPer Persson\nOrdförande\tLena Lind\tsedan 2019";
        let officer = parser.parse(listing).unwrap();

        assert_eq!(officer.name, "Lena Lind");
        assert_eq!(officer.role, "Ordförande");
    }

    #[test]
    fn test_label_is_case_insensitive() {
        let parser = BoardListingParser::new();
        let officer = parser.parse("STYRELSESUPPLEANT   Ola Olsson").unwrap();

        assert_eq!(officer.name, "Ola Olsson");
        assert_eq!(officer.role, "Styrelsesuppleant");
    }

    #[test]
    fn test_add_new_placeholder_falls_through_to_next_role() {
        let parser = BoardListingParser::new();
        let listing = "Ordförande: Lägg till person\nStyrelseledamot: Maja Ek";
        let officer = parser.parse(listing).unwrap();

        assert_eq!(officer.name, "Maja Ek");
        assert_eq!(officer.role, "Styrelseledamot");
    }

    #[test]
    fn test_placeholder_only_listing_yields_nothing() {
        let parser = BoardListingParser::new();
        assert_eq!(parser.parse("Styrelseledamot: lägg till ledamot"), None);
    }
}
