use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use super::{
    HtmlIssue, MarkupValidator,
    rules::{HtmlLintRules, HtmlRule},
    tokenizer::{Attribute, Token, tokenize},
};

/// Elements that never have an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

static ATTR_NAME_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").unwrap());

static ID_CLASS_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$").unwrap());

/// Built-in structural HTML linter.
#[derive(Debug, Clone, Default)]
pub struct HtmlLinter {
    rules: HtmlLintRules,
}

impl HtmlLinter {
    pub fn new(rules: HtmlLintRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &HtmlLintRules {
        &self.rules
    }

    fn check_tags(&self, tokens: &[Token], issues: &mut Vec<HtmlIssue>) {
        // (name, offset) of elements still open
        let mut open: Vec<(&str, usize)> = Vec::new();

        for token in tokens {
            match token {
                Token::StartTag {
                    name,
                    attributes,
                    self_closing,
                    offset,
                } => {
                    self.check_tag_name(name, *offset, issues);
                    self.check_attributes(name, attributes, *offset, issues);

                    if !self_closing && !is_void(name) {
                        open.push((name.as_str(), *offset));
                    }
                }
                Token::EndTag { name, offset } => {
                    self.check_tag_name(name, *offset, issues);

                    if is_void(name) {
                        continue;
                    }

                    let Some(index) = open
                        .iter()
                        .rposition(|(open_name, _)| open_name.eq_ignore_ascii_case(name))
                    else {
                        self.report(
                            issues,
                            HtmlRule::TagClose,
                            *offset,
                            format!("end tag </{}> has no matching start tag", name),
                        );
                        continue;
                    };

                    for (unclosed, start) in open.drain(index + 1..) {
                        self.report(
                            issues,
                            HtmlRule::TagClose,
                            start,
                            format!("<{}> is not closed before </{}>", unclosed, name),
                        );
                    }

                    if let Some((open_name, start)) = open.pop()
                        && open_name != name.as_str()
                    {
                        self.report(
                            issues,
                            HtmlRule::TagNameMatch,
                            *offset,
                            format!(
                                "end tag </{}> does not match start tag <{}> at {}",
                                name, open_name, start
                            ),
                        );
                    }
                }
                Token::Malformed { offset, message } => {
                    self.report(
                        issues,
                        HtmlRule::TagClose,
                        *offset,
                        format!("markup cannot be read past this point: {}", message),
                    );
                }
            }
        }

        for (unclosed, start) in open {
            self.report(
                issues,
                HtmlRule::TagClose,
                start,
                format!("<{}> is never closed", unclosed),
            );
        }
    }

    fn check_tag_name(&self, name: &str, offset: usize, issues: &mut Vec<HtmlIssue>) {
        if name.chars().any(|c| c.is_ascii_uppercase()) {
            self.report(
                issues,
                HtmlRule::TagNameLowercase,
                offset,
                format!("tag name '{}' is not lowercase", name),
            );
        }
    }

    fn check_attributes(
        &self,
        tag: &str,
        attributes: &[Attribute],
        tag_offset: usize,
        issues: &mut Vec<HtmlIssue>,
    ) {
        let mut seen = HashSet::new();

        for attribute in attributes {
            if !seen.insert(attribute.name.to_ascii_lowercase()) {
                self.report(
                    issues,
                    HtmlRule::AttrNoDup,
                    attribute.offset,
                    format!("duplicate attribute '{}'", attribute.name),
                );
            }

            if !ATTR_NAME_DASH.is_match(&attribute.name) {
                self.report(
                    issues,
                    HtmlRule::AttrNameStyle,
                    attribute.offset,
                    format!("attribute name '{}' is not lowercase-dashed", attribute.name),
                );
            }

            if attribute.value.is_some() && attribute.quote != Some('"') {
                self.report(
                    issues,
                    HtmlRule::AttrQuoteStyle,
                    attribute.offset,
                    format!("value of '{}' is not double-quoted", attribute.name),
                );
            }

            if let Some(value) = &attribute.value
                && matches!(attribute.name.to_ascii_lowercase().as_str(), "id" | "class")
            {
                self.check_id_class(attribute, value, issues);
            }
        }

        if tag.eq_ignore_ascii_case("img")
            && !attributes.iter().any(|a| a.name.eq_ignore_ascii_case("alt"))
        {
            self.report(
                issues,
                HtmlRule::ImgReqAlt,
                tag_offset,
                "<img> has no alt attribute",
            );
        }
    }

    fn check_id_class(&self, attribute: &Attribute, value: &str, issues: &mut Vec<HtmlIssue>) {
        // Liquid output can produce any name
        if value.contains("{{") || value.contains("{%") {
            return;
        }

        for name in value.split_whitespace() {
            if !ID_CLASS_UNDERSCORE.is_match(name) {
                self.report(
                    issues,
                    HtmlRule::IdClassStyle,
                    attribute.offset,
                    format!("{} '{}' is not lowercase-underscored", attribute.name, name),
                );
            }
        }
    }

    fn check_line_endings(&self, markup: &str, issues: &mut Vec<HtmlIssue>) {
        if let Some(offset) = markup.find('\r') {
            self.report(
                issues,
                HtmlRule::LineEndStyle,
                offset,
                "line ending is not LF",
            );
        }
    }

    fn report(
        &self,
        issues: &mut Vec<HtmlIssue>,
        rule: HtmlRule,
        offset: usize,
        message: impl Into<String>,
    ) {
        if self.rules.is_enabled(rule) {
            issues.push(HtmlIssue::new(rule, offset, message));
        }
    }
}

impl MarkupValidator for HtmlLinter {
    fn validate(&self, markup: &str) -> Vec<HtmlIssue> {
        let mut issues = Vec::new();
        let tokens = tokenize(markup);

        self.check_tags(&tokens, &mut issues);
        self.check_line_endings(markup, &mut issues);

        issues.sort_by_key(|issue| issue.offset);
        issues
    }
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}
