//! Reservation via WhatsApp.
//!
//! Composes the pre-filled message for a car and a sales contact and the
//! `wa.me` deep link that opens it. Contacts come from the contacts index;
//! when that is missing, broken or empty, a built-in list is used so the
//! reservation flow always has someone to offer.

use std::path::Path;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::ContactConfig;
use crate::content::{CarRecord, ContactRecord};
use crate::log;

/// At most this many contacts are offered per reservation.
pub const MAX_CONTACTS: usize = 5;

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Built-in sales team, used when the contacts index is unusable.
pub fn fallback_contacts() -> Vec<ContactRecord> {
    [
        ("Samuel Maina", "254712345678", "Sales Manager"),
        ("Elizabeth Wanjiku", "254723456789", "Sales Agent"),
        ("Klarie Mwangi", "254734567890", "Customer Support"),
        ("John Kamau", "254745678901", "Sales Agent"),
        ("Sarah Otieno", "254756789012", "Sales Agent"),
    ]
    .into_iter()
    .map(|(name, number, role)| ContactRecord::builtin(name, number, role))
    .collect()
}

/// Contacts available to the reservation flow.
#[derive(Debug, Clone)]
pub struct ContactBook {
    contacts: Vec<ContactRecord>,
    fallback: bool,
}

impl ContactBook {
    pub fn new(contacts: Vec<ContactRecord>) -> Self {
        if contacts.is_empty() {
            return Self::fallback();
        }
        Self {
            contacts,
            fallback: false,
        }
    }

    pub fn fallback() -> Self {
        Self {
            contacts: fallback_contacts(),
            fallback: true,
        }
    }

    /// Load `contacts-index.json`, falling back to the built-in list.
    pub fn load_or_fallback(path: &Path) -> Self {
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| {
                serde_json::from_str::<Vec<ContactRecord>>(&text).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(contacts) if !contacts.is_empty() => Self::new(contacts),
            Ok(_) => {
                log!("reserve"; "no contacts in {}, using built-in list", path.display());
                Self::fallback()
            }
            Err(e) => {
                log!("reserve"; "cannot load {} ({}), using built-in list", path.display(), e);
                Self::fallback()
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Contacts shown for a reservation, in index order.
    pub fn offered(&self) -> &[ContactRecord] {
        &self.contacts[..self.contacts.len().min(MAX_CONTACTS)]
    }

    /// Offered contact by name (case-insensitive) or slug.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        let name = name.trim();
        self.offered()
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name) || (!c.slug.is_empty() && c.slug == name))
    }

    /// Contact a car points at through `contact_ref`, else the first one.
    pub fn for_car(&self, car: &CarRecord) -> &ContactRecord {
        Some(car.contact_ref.as_str())
            .filter(|r| !r.is_empty())
            .and_then(|r| self.find(r))
            .unwrap_or(&self.offered()[0])
    }
}

/// Digits only; a leading `0` becomes the country code.
pub fn whatsapp_number(raw: &str, country_code: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.strip_prefix('0') {
        Some(local) => format!("{country_code}{local}"),
        None => digits,
    }
}

/// Pre-filled reservation message.
pub fn reservation_message(car: &CarRecord, contact: &ContactRecord, dealer: &str) -> String {
    format!(
        "Hey {dealer}, I want to reserve… {title}.\n\
         \n\
         Vehicle Details:\n\
         • Brand: {brand}\n\
         • Model: {model}\n\
         • Year: {year}\n\
         • Price: {price}\n\
         \n\
         Please contact me to proceed. (via {contact})",
        title = car.title,
        brand = car.brand,
        model = car.model,
        year = car.year,
        price = car.price,
        contact = contact.name,
    )
}

/// `https://wa.me/<number>?text=<message>`
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{number}?text={}",
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

/// A composed reservation, ready to print or open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub contact: String,
    pub number: String,
    pub message: String,
    pub link: String,
}

impl Reservation {
    pub fn new(car: &CarRecord, contact: &ContactRecord, config: &ContactConfig) -> Self {
        let raw_number = if contact.whatsapp.is_empty() {
            &contact.phone
        } else {
            &contact.whatsapp
        };
        let number = whatsapp_number(raw_number, &config.country_code);
        let message = reservation_message(car, contact, &config.dealer);
        let link = whatsapp_link(&number, &message);
        Self {
            contact: contact.name.clone(),
            number,
            message,
            link,
        }
    }
}
