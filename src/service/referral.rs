use rand::{distr::Alphanumeric, Rng};

/// Build a referral code like "jeandupont_ab12cd": the affiliate's name
/// slugified, plus 6 random alphanumerics. Codes are immutable once issued.
pub fn generate_referral_code(name: &str) -> String {
    let slug: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();

    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();

    format!("{}_{}", slug, suffix)
}

pub fn generate_referral_link(base_url: &str, code: &str) -> String {
    format!("{}/ref/{}", base_url, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format() {
        let code = generate_referral_code("Jean Dupont");
        let (slug, suffix) = code.split_once('_').unwrap();
        assert_eq!(slug, "jeandupont");
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_codes_are_unique_per_call() {
        let a = generate_referral_code("Jean Dupont");
        let b = generate_referral_code("Jean Dupont");
        assert_ne!(a, b);
    }

    #[test]
    fn test_link_format() {
        assert_eq!(
            generate_referral_link("https://example.com", "jean_ab12cd"),
            "https://example.com/ref/jean_ab12cd"
        );
    }
}
