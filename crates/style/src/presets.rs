// Document presets

use crate::engine::TexEngine;
use crate::settings::SettingsBuilder;
use crate::value::Value;

pub const THESIS_TEXTWIDTH_INCHES: f64 = 5.78853;
pub const THESIS_PRIM_FONTSIZE_PT: f64 = 10.95;
pub const THESIS_SEC_FONTSIZE_PT: f64 = 9.0;

/// Thesis layout: lualatex, 10.95pt body text, siunitx in the preamble.
pub fn thesis(interactive: bool) -> SettingsBuilder {
    SettingsBuilder::new(THESIS_TEXTWIDTH_INCHES, TexEngine::Lualatex)
        .prim_fontsize_pt(THESIS_PRIM_FONTSIZE_PT)
        .sec_fontsize_pt(THESIS_SEC_FONTSIZE_PT)
        .interactive(interactive)
        .override_param(
            "text.latex.preamble",
            Value::string_list([r"\usepackage[locale=US]{siunitx}"]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::StyleRegistry;

    #[test]
    fn thesis_preset() {
        let mut reg = StyleRegistry::new();
        let settings = thesis(false).apply(&mut reg).unwrap();

        assert_eq!(settings.textwidth_inches(), THESIS_TEXTWIDTH_INCHES);
        assert_eq!(settings.engine(), TexEngine::Lualatex);
        assert!(!settings.is_interactive());
        assert_eq!(settings.get("font.size"), Some(&Value::Number(10.95)));
        assert_eq!(
            settings.get("text.latex.preamble"),
            Some(&Value::string_list([r"\usepackage[locale=US]{siunitx}"]))
        );
        assert_eq!(reg.active_backend(), Some("pgf"));
    }
}
