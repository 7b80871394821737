use regex::Regex;
use tracing::trace;

/// Carrier legal-entity names as they appear in the registry listing.
/// Order matters: when two names start at the same position the earlier one wins.
pub const KNOWN_CARRIERS: &[&str] = &[
    "Telia Sverige AB",
    "TeliaSonera AB",
    "Tele2 Sverige AB",
    "HI3G Access AB",
    "Hi3G Access AB",
    "Telenor Sverige AB",
    "Telenor",
    "Telness AB",
    "Advoco Software AB",
    "Lycamobile Sweden Limited",
    "Comviq",
    "Halebop",
];

/// Page chrome copied along with the listing
const SKIPPED_LINE_PREFIXES: &[&str] = &[
    "Telefonnummer",
    "Är det",
    "Info",
    "+46",
    "Nyhet",
    "Hittar du",
    "Lås upp",
    "Köp för",
    "Information om",
    "Andra format",
];

const CONTACT_US_PLACEHOLDER: &str = "kontakta";

/// Phones, device users and carriers pulled out of one row.
///
/// `users` and `operators` only get an entry when the line named a carrier,
/// so they can be shorter than `phones`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedPhoneData {
    pub phones: Vec<String>,
    pub users: Vec<String>,
    pub operators: Vec<String>,
    pub contact: String,
    pub role: String,
}

impl ExtractedPhoneData {
    pub fn has_phone(&self) -> bool {
        !self.phones.is_empty()
    }
}

pub struct PhoneListingParser {
    phone_at_start: Regex,
    simple_phone: Regex,
    carrier: Regex,
    carrier_annotation: Regex,
    whitespace: Regex,
}

impl PhoneListingParser {
    pub fn new() -> Self {
        let carrier_alternatives = KNOWN_CARRIERS
            .iter()
            .map(|name| format!("({})", regex::escape(name)))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            phone_at_start: Regex::new(r"^(0[0-9]{1,4}[-\s]?[0-9\s-]{4,15})").unwrap(),
            simple_phone: Regex::new(r"^0[0-9]{1,3}[-\s]?[0-9\s-]{4,}").unwrap(),
            carrier: Regex::new(&format!("(?i){}", carrier_alternatives)).unwrap(),
            carrier_annotation: Regex::new(r"(?i)\s*\((?:mobile|fix)\)").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Reads the detailed listing line by line; falls back to the simple
    /// phone cell when the listing yields no number at all.
    pub fn parse(&self, simple_phone: &str, listing: &str) -> ExtractedPhoneData {
        let mut data = ExtractedPhoneData::default();

        for raw_line in listing.split('\n') {
            let line = raw_line.trim();
            if line.is_empty() || is_chrome_line(line) {
                continue;
            }
            self.parse_line(line, &mut data);
        }

        // The pattern is anchored on the raw cell, so leading whitespace rejects it
        if data.phones.is_empty()
            && !simple_phone.trim().is_empty()
            && self.simple_phone.is_match(simple_phone)
        {
            data.phones.push(simple_phone.trim().to_string());
        }

        data
    }

    fn parse_line(&self, line: &str, data: &mut ExtractedPhoneData) {
        let Some(phone_match) = self.phone_at_start.find(line) else {
            trace!("No phone number at start of listing line: {}", line);
            return;
        };

        let phone = self
            .whitespace
            .replace_all(phone_match.as_str().trim(), " ")
            .into_owned();
        data.phones.push(phone);

        let remainder = line[phone_match.end()..].trim();
        let Some((carrier, carrier_start)) = self.find_carrier(remainder) else {
            return;
        };

        let user = remainder[..carrier_start].trim();
        if !user.is_empty() && !user.to_lowercase().contains(CONTACT_US_PLACEHOLDER) {
            data.users.push(user.to_string());
        }

        let carrier = self.carrier_annotation.replace_all(carrier, "");
        let carrier = carrier.trim();
        if !carrier.is_empty() {
            data.operators.push(carrier.to_string());
        }
    }

    /// Leftmost known carrier in `text`, as its canonical name and byte offset
    fn find_carrier(&self, text: &str) -> Option<(&'static str, usize)> {
        let captures = self.carrier.captures(text)?;
        let start = captures.get(0)?.start();

        KNOWN_CARRIERS
            .iter()
            .enumerate()
            .find(|(i, _)| captures.get(i + 1).is_some())
            .map(|(_, name)| (*name, start))
    }
}

impl Default for PhoneListingParser {
    fn default() -> Self {
        Self::new()
    }
}

fn is_chrome_line(line: &str) -> bool {
    SKIPPED_LINE_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
        || (line.contains("har") && line.contains("andra telefonnummer"))
}
