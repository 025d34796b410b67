use chrono::{DateTime, Utc};
use rand::Rng;

/// Generates a human-readable order number, e.g. `ORD-20260804-7KQ2M`.
/// The suffix is Crockford base32 (no I, L, O, U), 5 characters give
/// ~33 million codes per day.
pub fn generate_order_number(now: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let random_bytes: [u8; 5] = rng.gen();

    // 5 bytes encode to exactly 8 characters, the first 5 are uniform
    let suffix = base32::encode(base32::Alphabet::Crockford, &random_bytes)
        .chars()
        .take(5)
        .collect::<String>()
        .to_uppercase();

    format!("ORD-{}-{}", now.format("%Y%m%d"), suffix)
}

/// Normalizes operator input before a lookup. Only the random suffix gets
/// the Crockford substitutions (O to 0, I/L to 1), the `ORD` prefix and the
/// date segment pass through untouched.
pub fn normalize_order_number(input: &str) -> String {
    let trimmed = input.trim().to_uppercase();
    match trimmed.rsplit_once('-') {
        Some((head, suffix)) => format!("{}-{}", head, normalize_code(suffix)),
        None => normalize_code(&trimmed),
    }
}

fn normalize_code(code: &str) -> String {
    code.chars()
        .map(|c| match c {
            'O' => '0',
            'I' => '1',
            'L' => '1',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_order_number_shape() {
        let now = Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap();
        let number = generate_order_number(now);

        assert!(number.starts_with("ORD-20260804-"));
        let suffix = number.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 5);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(!suffix.contains('I') && !suffix.contains('L') && !suffix.contains('O'));
    }

    #[test]
    fn test_normalize_order_number() {
        assert_eq!(normalize_order_number("ord-20260804-7kq2m"), "ORD-20260804-7KQ2M");
        assert_eq!(normalize_order_number(" ORD-20260804-7KQ2O "), "ORD-20260804-7KQ20");
        assert_eq!(normalize_order_number("ORD-20260804-7KQIL"), "ORD-20260804-7KQ11");
        // bare code lookups normalize the whole input
        assert_eq!(normalize_order_number("7kq2o"), "7KQ20");
    }

    #[test]
    fn test_normalize_leaves_prefix_alone() {
        assert_eq!(normalize_order_number("ORD-20260804-ABCDE"), "ORD-20260804-ABCDE");
    }

    #[test]
    fn test_generated_numbers_survive_normalization() {
        let now = Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap();
        for _ in 0..50 {
            let number = generate_order_number(now);
            assert_eq!(normalize_order_number(&number), number);
        }
    }
}
