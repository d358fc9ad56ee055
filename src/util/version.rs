pub const APP_NAME: &str = "Sustainable Formulation Optimizer";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

pub fn window_title() -> String {
    format!("{APP_NAME} {}", version_label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_carries_a_version() {
        let label = version_label();
        assert!(label.starts_with('v') || GIT_TAG.is_some());
        assert!(window_title().starts_with(APP_NAME));
    }
}
