// Contact-form validation and mailto composition. URI-encoding is left to
// the DOM glue (js_sys::encode_uri_component); this module only builds the
// raw subject/body strings.

pub const CONTACT_EMAIL: &str = "greetings@example-studio.com";

#[derive(Clone, Debug, Default)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub location: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

/// Every failed field with its user-facing message; empty means valid.
pub fn validate(enquiry: &Enquiry) -> Vec<(Field, &'static str)> {
    let mut errors = Vec::new();
    if enquiry.name.len() < 2 {
        errors.push((Field::Name, "Please enter your name (at least 2 characters)"));
    }
    if !is_valid_email(&enquiry.email) {
        errors.push((Field::Email, "Please enter a valid email address"));
    }
    if !is_valid_phone(&enquiry.phone) {
        errors.push((Field::Phone, "Please enter a valid phone number"));
    }
    if enquiry.message.len() < 10 {
        errors.push((
            Field::Message,
            "Please tell us more about your day (at least 10 characters)",
        ));
    }
    errors
}

// Shape check only: something@something.tld, no whitespace or extra '@'.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            if local.is_empty() {
                return false;
            }
            match domain.rsplit_once('.') {
                Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
                None => false,
            }
        }
        _ => false,
    }
}

// Optional leading '+', then at least 10 digits/spaces/dashes.
pub fn is_valid_phone(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    rest.len() >= 10 && rest.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}

pub fn mailto_subject(enquiry: &Enquiry) -> String {
    format!("Wedding Enquiry from {}", enquiry.name)
}

pub fn mailto_body(enquiry: &Enquiry) -> String {
    let or_unspecified = |s: &str| {
        if s.is_empty() {
            "Not specified".to_string()
        } else {
            s.to_string()
        }
    };
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\nWedding Date: {}\nLocation: {}\n\nMessage:\n{}",
        enquiry.name,
        enquiry.email,
        enquiry.phone,
        or_unspecified(&enquiry.date),
        or_unspecified(&enquiry.location),
        enquiry.message,
    )
}
