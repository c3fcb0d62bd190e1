/// Percent-encodes `value` with the same unreserved set as JavaScript's
/// `encodeURIComponent`.
pub fn encode_uri_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactField {
    pub name: String,
    pub label: String,
    pub value: String,
}

/// The contact form. Submitting it redirects to `action` with the fields as
/// query parameters instead of posting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub action: String,
    pub fields: Vec<ContactField>,
}

impl ContactForm {
    pub fn new(action: &str) -> Self {
        Self {
            action: action.to_string(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: &str, label: &str) -> Self {
        self.fields.push(ContactField {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
        });
        self
    }

    /// Email, subject and message, matching a `mailto:` action.
    pub fn mailto(action: &str) -> Self {
        Self::new(action)
            .with_field("email", "Email")
            .with_field("subject", "Subject")
            .with_field("body", "Message")
    }

    pub fn set(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                value.clone_into(&mut field.value);
                true
            }
            None => false,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut ContactField> {
        self.fields.get_mut(index)
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// `action?name=value&...` with every value percent-encoded.
    pub fn submit_url(&self) -> String {
        let params = self
            .fields
            .iter()
            .map(|field| format!("{}={}", field.name, encode_uri_component(&field.value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{params}", self.action)
    }
}
