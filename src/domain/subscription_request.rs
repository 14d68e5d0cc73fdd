use super::SubscriberEmail;

/// One form submission: a validated email plus the optional merge fields.
/// Built fresh per submission and dropped once the provider call resolves.
#[derive(Debug)]
pub struct SubscriptionRequest {
    pub email: SubscriberEmail,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl SubscriptionRequest {
    pub fn new(
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Self, String> {
        let email = SubscriberEmail::parse(email)?;
        Ok(Self {
            email,
            first_name: non_empty(first_name),
            last_name: non_empty(last_name),
        })
    }
}

// Browsers post optional inputs as empty strings.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}
