use std::num::NonZeroU8;

use serde::{
  Deserialize,
  Serialize,
};

use crate::sanitize::Pass;

/// What the spaces pass does with tab characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabConversion {
  /// Replace every tab with `tab-width` spaces.
  Spaces,
  /// Leave tabs alone.
  #[default]
  Tabs,
}

/// Rule set used by the punctuation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PunctuationVariant {
  /// Only removes whitespace in front of punctuation marks.
  #[default]
  Compact,
  /// Additionally rewrites `". ,"` as `".,"` and `". . ."` as `"..."`.
  Legacy,
}

/// Which sanitization passes run, and how.
///
/// Read from the `[sanitize]` table of the config file. Keys written by older
/// releases (`sanitize-hyphens`, `sanitize-punctuation-marks`, ...) are
/// accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SanitizeOptions {
  #[serde(alias = "sanitize-hyphens")]
  pub hyphens:                      bool,
  #[serde(alias = "sanitize-quotes")]
  pub quotes:                       bool,
  #[serde(alias = "sanitize-punctuation-marks")]
  pub punctuation:                  bool,
  pub add_spaces_after_punctuation: bool,
  #[serde(alias = "sanitize-spaces")]
  pub spaces:                       bool,
  #[serde(alias = "sanitize-eol")]
  pub eol:                          bool,
  pub tab_width:                    NonZeroU8,
  pub tab_conversion:               TabConversion,
  pub punctuation_variant:          PunctuationVariant,
}

impl Default for SanitizeOptions {
  fn default() -> Self {
    Self {
      hyphens:                      true,
      quotes:                       true,
      punctuation:                  true,
      add_spaces_after_punctuation: true,
      spaces:                       true,
      eol:                          true,
      tab_width:                    NonZeroU8::new(4).unwrap_or(NonZeroU8::MIN),
      tab_conversion:               TabConversion::default(),
      punctuation_variant:          PunctuationVariant::default(),
    }
  }
}

impl SanitizeOptions {
  /// Options with every pass switched off.
  pub fn none() -> Self {
    Self {
      hyphens: false,
      quotes: false,
      punctuation: false,
      add_spaces_after_punctuation: false,
      spaces: false,
      eol: false,
      ..Self::default()
    }
  }

  /// Options with only `passes` switched on.
  pub fn only(passes: impl IntoIterator<Item = Pass>) -> Self {
    let mut options = Self::none();
    for pass in passes {
      options.set(pass, true);
    }
    options
  }

  pub fn is_enabled(&self, pass: Pass) -> bool {
    match pass {
      Pass::Hyphens => self.hyphens,
      Pass::Quotes => self.quotes,
      Pass::Punctuation => self.punctuation,
      Pass::AddSpacesAfterPunctuation => self.add_spaces_after_punctuation,
      Pass::Spaces => self.spaces,
      Pass::Eol => self.eol,
    }
  }

  pub fn set(&mut self, pass: Pass, enabled: bool) {
    let flag = match pass {
      Pass::Hyphens => &mut self.hyphens,
      Pass::Quotes => &mut self.quotes,
      Pass::Punctuation => &mut self.punctuation,
      Pass::AddSpacesAfterPunctuation => &mut self.add_spaces_after_punctuation,
      Pass::Spaces => &mut self.spaces,
      Pass::Eol => &mut self.eol,
    };
    *flag = enabled;
  }

  /// Flips `pass` and returns its new state.
  pub fn toggle(&mut self, pass: Pass) -> bool {
    let enabled = !self.is_enabled(pass);
    self.set(pass, enabled);
    enabled
  }

  /// Enabled passes in pipeline order.
  pub fn enabled_passes(&self) -> impl Iterator<Item = Pass> + '_ {
    Pass::ORDER
      .into_iter()
      .filter(move |pass| self.is_enabled(*pass))
  }

  pub fn tab_width(&self) -> usize {
    usize::from(self.tab_width.get())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_enable_every_pass() {
    let options = SanitizeOptions::default();
    assert_eq!(options.enabled_passes().collect::<Vec<_>>(), Pass::ORDER);
    assert_eq!(options.tab_width(), 4);
    assert_eq!(options.tab_conversion, TabConversion::Tabs);
    assert_eq!(options.punctuation_variant, PunctuationVariant::Compact);
  }

  #[test]
  fn toggle_and_only() {
    let mut options = SanitizeOptions::only([Pass::Eol, Pass::Hyphens]);
    assert_eq!(
      options.enabled_passes().collect::<Vec<_>>(),
      vec![Pass::Hyphens, Pass::Eol]
    );
    assert!(options.toggle(Pass::Spaces));
    assert!(!options.toggle(Pass::Eol));
    assert_eq!(
      options.enabled_passes().collect::<Vec<_>>(),
      vec![Pass::Hyphens, Pass::Spaces]
    );
  }

  #[test]
  fn deserializes_kebab_case_and_legacy_keys() {
    let options: SanitizeOptions = toml::from_str(
      r#"
      sanitize-hyphens = false
      add-spaces-after-punctuation = false
      tab-width = 2
      tab-conversion = "spaces"
      punctuation-variant = "legacy"
      "#,
    )
    .unwrap();
    assert!(!options.hyphens);
    assert!(!options.add_spaces_after_punctuation);
    assert!(options.quotes);
    assert_eq!(options.tab_width(), 2);
    assert_eq!(options.tab_conversion, TabConversion::Spaces);
    assert_eq!(options.punctuation_variant, PunctuationVariant::Legacy);
  }

  #[test]
  fn rejects_zero_tab_width_and_unknown_keys() {
    assert!(toml::from_str::<SanitizeOptions>("tab-width = 0").is_err());
    assert!(toml::from_str::<SanitizeOptions>("shout = true").is_err());
  }
}
