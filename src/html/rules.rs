use std::collections::BTreeSet;

/// HTML lint rule identifier.
///
/// Names follow htmllint's option names so a rule can be looked up in its
/// documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HtmlRule {
    TagClose,
    TagNameMatch,
    TagNameLowercase,
    AttrNoDup,
    AttrNameStyle,
    AttrQuoteStyle,
    ImgReqAlt,
    LineEndStyle,
    IdClassStyle,
}

impl HtmlRule {
    pub const ALL: [HtmlRule; 9] = [
        HtmlRule::TagClose,
        HtmlRule::TagNameMatch,
        HtmlRule::TagNameLowercase,
        HtmlRule::AttrNoDup,
        HtmlRule::AttrNameStyle,
        HtmlRule::AttrQuoteStyle,
        HtmlRule::ImgReqAlt,
        HtmlRule::LineEndStyle,
        HtmlRule::IdClassStyle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HtmlRule::TagClose => "tag-close",
            HtmlRule::TagNameMatch => "tag-name-match",
            HtmlRule::TagNameLowercase => "tag-name-lowercase",
            HtmlRule::AttrNoDup => "attr-no-dup",
            HtmlRule::AttrNameStyle => "attr-name-style",
            HtmlRule::AttrQuoteStyle => "attr-quote-style",
            HtmlRule::ImgReqAlt => "img-req-alt",
            HtmlRule::LineEndStyle => "line-end-style",
            HtmlRule::IdClassStyle => "id-class-style",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.name() == name)
    }

    /// Line ending and id/class naming rules are off unless configured.
    fn enabled_by_default(self) -> bool {
        !matches!(self, HtmlRule::LineEndStyle | HtmlRule::IdClassStyle)
    }
}

impl std::fmt::Display for HtmlRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The set of enabled rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlLintRules {
    enabled: BTreeSet<HtmlRule>,
}

impl Default for HtmlLintRules {
    fn default() -> Self {
        Self {
            enabled: HtmlRule::ALL
                .into_iter()
                .filter(|rule| rule.enabled_by_default())
                .collect(),
        }
    }
}

impl HtmlLintRules {
    /// A rule set with every rule turned off.
    pub fn none() -> Self {
        Self {
            enabled: BTreeSet::new(),
        }
    }

    pub fn set(&mut self, rule: HtmlRule, enabled: bool) {
        if enabled {
            self.enabled.insert(rule);
        } else {
            self.enabled.remove(&rule);
        }
    }

    pub fn with(mut self, rule: HtmlRule, enabled: bool) -> Self {
        self.set(rule, enabled);
        self
    }

    pub fn is_enabled(&self, rule: HtmlRule) -> bool {
        self.enabled.contains(&rule)
    }
}
