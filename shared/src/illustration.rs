/// conventional location of the illustration svg assets
pub const ILLUSTRATIONS_PATH: &str = "/static/images/illustrations";

/// Image source of an illustration. The identifier is not validated, an unknown one
/// simply yields a broken image reference.
pub fn illustration_src(illustration: &str) -> String {
    format!("{ILLUSTRATIONS_PATH}/{illustration}.svg")
}

pub fn illustration_alt(illustration: &str) -> String {
    format!("{illustration} Illustration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_src_from_identifier() {
        assert_eq!(
            illustration_src("empty-dashboard"),
            "/static/images/illustrations/empty-dashboard.svg"
        );
    }

    #[test]
    fn should_build_alt_text() {
        assert_eq!(
            illustration_alt("empty-dashboard"),
            "empty-dashboard Illustration"
        );
    }
}
