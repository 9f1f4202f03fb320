//! Mapping from OpenWeather condition codes (e.g. `10d`) to icon locators.

use std::fmt::Debug;

pub trait IconResolver: Send + Sync + Debug {
    fn locate(&self, code: &str) -> String;
}

/// Icons served from a directory of `<code>.png` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalIcons {
    base: String,
}

impl LocalIcons {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl IconResolver for LocalIcons {
    fn locate(&self, code: &str) -> String {
        format!("{}/{code}.png", self.base.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_icons_build_png_path() {
        let icons = LocalIcons::new("./src/assets/icons/");
        assert_eq!(icons.locate("10d"), "./src/assets/icons/10d.png");
    }
}
