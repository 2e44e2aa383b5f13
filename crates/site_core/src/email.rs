//! Email address checks matching what a browser enforces on an
//! `<input type="email">` before it lets a form submit.

const LOCAL_PART_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";
const MAX_LABEL_LEN: usize = 63;

/// Strips the surrounding whitespace a browser removes from an email field.
pub fn sanitize(raw: &str) -> &str {
    raw.trim()
}

pub fn is_valid(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c))
        && !domain.is_empty()
        && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= MAX_LABEL_LEN
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

/// Domain part of an address, used when an address needs to show up in logs.
pub fn domain_of(address: &str) -> &str {
    address
        .rsplit_once('@')
        .map(|(_, domain)| domain)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for address in [
            "ceo@example.com",
            "first.last+crm@sub.example.co.in",
            "ops@localhost",
            "o'brien@mail-01.example.org",
        ] {
            assert!(is_valid(address), "{address} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for address in [
            "",
            "foo",
            "a@",
            "@b",
            "a@b@c",
            "a b@example.com",
            "a@-example.com",
            "a@example-.com",
            "a@example..com",
            "a@.example.com",
        ] {
            assert!(!is_valid(address), "{address:?} should be rejected");
        }
    }

    #[test]
    fn sanitize_and_domain_extraction() {
        assert_eq!(sanitize("  ceo@example.com\n"), "ceo@example.com");
        assert_eq!(domain_of("ceo@example.com"), "example.com");
        assert_eq!(domain_of("nobody"), "");
    }
}
