/// Builds a URL-safe slug: lowercase ASCII letters and digits, every other run
/// of characters collapsed into a single `-`. Empty results become `"item"`.
pub fn to_slug(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for ch in value.chars().flat_map(|c| c.to_lowercase()) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "item".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(to_slug("Acme Corp, Inc."), "acme-corp-inc");
        assert_eq!(to_slug("  --Sales  Playbook 2025--"), "sales-playbook-2025");
    }

    #[test]
    fn slug_falls_back_to_item() {
        assert_eq!(to_slug(""), "item");
        assert_eq!(to_slug("!!!"), "item");
    }
}
