//! Pattern-based PII detection
//!
//! Detection is an ordered list of compiled patterns evaluated with
//! first-match-wins semantics. The order is part of the contract: an SSN
//! written without separators is nine consecutive digits and would also
//! satisfy the account-number shape, so SSN must be tried first.

use crate::redaction::models::PiiCategory;
use anyhow::{Context, Result};
use regex::Regex;

/// How a matched pattern rewrites the cell text
#[derive(Debug, Clone, Copy)]
enum Replacement {
    /// Replace every occurrence with a fixed placeholder
    Literal(&'static str),
    /// Replace every digit of each occurrence with `X`, preserving length
    MaskDigits,
}

/// A compiled pattern with its category and redaction rule
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// PII category this pattern detects
    pub category: PiiCategory,
    regex: Regex,
    replacement: Replacement,
}

impl CompiledPattern {
    fn new(category: PiiCategory, pattern: &str, replacement: Replacement) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid {} pattern: {pattern}", category.label()))?;
        Ok(Self {
            category,
            regex,
            replacement,
        })
    }

    /// Whether the text contains a detectable occurrence of this pattern
    ///
    /// A match that is byte-for-byte the pattern's own placeholder does not
    /// count, so scanning already-redacted output yields no new detections
    /// (the email placeholder is itself email-shaped).
    pub fn matches(&self, text: &str) -> bool {
        match self.replacement {
            Replacement::Literal(placeholder) => {
                self.regex.find_iter(text).any(|m| m.as_str() != placeholder)
            }
            Replacement::MaskDigits => self.regex.is_match(text),
        }
    }

    /// Replace every occurrence of the pattern in the text
    pub fn redact(&self, text: &str) -> String {
        match self.replacement {
            Replacement::Literal(placeholder) => {
                self.regex.replace_all(text, placeholder).into_owned()
            }
            Replacement::MaskDigits => self
                .regex
                .replace_all(text, |caps: &regex::Captures<'_>| {
                    "X".repeat(caps[0].len())
                })
                .into_owned(),
        }
    }
}

/// The fixed, ordered set of PII patterns
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Compile the built-in patterns in precedence order
    pub fn builtin() -> Result<Self> {
        let patterns = vec![
            CompiledPattern::new(
                PiiCategory::Ssn,
                r"\b\d{3}-?\d{2}-?\d{4}\b",
                Replacement::Literal("XXX-XX-XXXX"),
            )?,
            CompiledPattern::new(
                PiiCategory::Phone,
                r"\b(?:\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}\b",
                Replacement::Literal("XXX-XXX-XXXX"),
            )?,
            CompiledPattern::new(
                PiiCategory::Email,
                r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
                Replacement::Literal("REDACTED@EMAIL.COM"),
            )?,
            CompiledPattern::new(
                PiiCategory::AccountNumber,
                r"\b\d{8,}\b",
                Replacement::MaskDigits,
            )?,
        ];
        Ok(Self { patterns })
    }

    /// Classify a stringified cell: the first matching pattern wins
    ///
    /// Returns `None` when no pattern matches; later patterns are never
    /// consulted once one has matched.
    pub fn classify(&self, text: &str) -> Option<&CompiledPattern> {
        self.patterns.iter().find(|p| p.matches(text))
    }

    /// All patterns in precedence order
    pub fn all(&self) -> &[CompiledPattern] {
        &self.patterns
    }
}
