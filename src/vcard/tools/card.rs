use std::fmt;

use crate::vcard::tools::model::CleanedPhone;

/// A single vCard 3.0 entry ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard<'a> {
    display_name: String,
    phone: &'a CleanedPhone,
}

impl<'a> ContactCard<'a> {
    /// Builds a card whose display name carries the company in parentheses
    /// when one is given.
    pub fn new(full_name: &str, company: &str, phone: &'a CleanedPhone) -> Self {
        let display_name = if company.is_empty() {
            full_name.to_string()
        } else {
            format!("{full_name} ({company})")
        };
        Self {
            display_name,
            phone,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

// N carries the whole display name in its given-name slot.
impl fmt::Display for ContactCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BEGIN:VCARD")?;
        writeln!(f, "VERSION:3.0")?;
        writeln!(f, "FN:{}", self.display_name)?;
        writeln!(f, "N:;{};;;", self.display_name)?;
        writeln!(f, "TEL;TYPE=CELL:{}", self.phone)?;
        writeln!(f, "END:VCARD")
    }
}

/// Renders the card text for one contact.
pub fn generate_card(full_name: &str, company: &str, phone: &CleanedPhone) -> String {
    ContactCard::new(full_name, company, phone).to_string()
}
