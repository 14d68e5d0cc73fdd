use validator::ValidateEmail;

#[derive(Debug, Clone)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Accepts only addresses the mailing-list provider accepts: a local
    /// part of ASCII letters, digits and `. _ % + -`, then a dotted domain
    /// ending in an alphabetic TLD of at least two characters.
    pub fn parse(s: String) -> Result<Self, String> {
        if !s.validate_email() {
            return Err(format!("{} is not a valid subscriber email.", s));
        };
        let Some((local, domain)) = s.rsplit_once('@') else {
            return Err(format!("{} is not a valid subscriber email.", s));
        };
        let local_ok = local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
        let domain_ok = domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
        // Browsers accept `user@host`; the provider requires a dotted
        // domain with a real TLD.
        let tld_ok = matches!(
            domain.rsplit_once('.'),
            Some((name, tld))
                if !name.is_empty()
                    && tld.len() >= 2
                    && tld.chars().all(|c| c.is_ascii_alphabetic())
        );
        if !(local_ok && domain_ok && tld_ok) {
            return Err(format!("{} is not a valid subscriber email.", s));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for SubscriberEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        SubscriberEmail::parse(value)
    }
}
