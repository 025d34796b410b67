/// Lowercases, maps runs of non-alphanumerics to a single dash, trims dashes.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut previous_dash = true;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            previous_dash = false;
        } else if !previous_dash {
            slug.push('-');
            previous_dash = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Linen Shirt"), "linen-shirt");
        assert_eq!(slugify("  Summer  Dress 2026 "), "summer-dress-2026");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Kebaya & Modern (Putih)"), "kebaya-modern-putih");
        assert_eq!(slugify("!!!"), "");
    }
}
