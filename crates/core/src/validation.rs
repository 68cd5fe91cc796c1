//! Shared rule engine for validating entity candidates.
//!
//! Every business entity in this workspace follows the same validation shape:
//! required-field presence, then length bounds, then uniqueness against
//! already-persisted siblings, then an optional entity-specific rule. Instead
//! of repeating that shape per entity, validators build an ordered [`RuleSet`]
//! and call one method per rule; violations come out in call order, which is
//! what makes validator output deterministic and order-stable.
//!
//! Violations are complete, display-ready sentences. The empty list is the
//! sole success signal — there is no error path and no panic path here.

/// Ordered list of violation messages; empty means the candidate is valid.
pub type Violations = Vec<String>;

/// Canonical form used by every uniqueness comparison: trimmed, lower-cased.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Ordered violation collector.
///
/// Each `check` appends at most one message; the final list preserves the
/// order in which checks were invoked. The collector holds no state between
/// validations — build one per call, then [`RuleSet::finish`] it.
#[derive(Debug, Default)]
pub struct RuleSet {
    violations: Vec<String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required-field presence: `None` or whitespace-only counts as missing.
    pub fn required(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.violations.push(format!("{field} is required."));
        }
        self
    }

    /// Length bound on a text field.
    ///
    /// Absent or blank values are skipped so an omitted field reports exactly
    /// one violation (the presence one), never two.
    pub fn max_len(&mut self, field: &str, value: Option<&str>, limit: usize) -> &mut Self {
        if let Some(v) = value {
            if v.trim().chars().count() > limit {
                self.violations
                    .push(format!("{field} must not exceed {limit} characters."));
            }
        }
        self
    }

    /// Uniqueness of the candidate label against persisted sibling labels.
    ///
    /// Both sides are compared through [`normalize_label`], so `" Espèces "`
    /// collides with `"ESPÈCES"`. The sibling collection is borrowed and never
    /// mutated. Blank candidates are skipped (presence already covers them).
    pub fn unique_label<'a, I>(&mut self, value: Option<&str>, existing: I, message: &str) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        if let Some(v) = value {
            let candidate = normalize_label(v);
            if !candidate.is_empty()
                && existing
                    .into_iter()
                    .any(|label| normalize_label(label) == candidate)
            {
                self.violations.push(message.to_string());
            }
        }
        self
    }

    /// Entity-specific rule: record `message` unless `ok` holds.
    pub fn ensure(&mut self, ok: bool, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.violations.push(message.into());
        }
        self
    }

    /// Record a violation unconditionally.
    pub fn violation(&mut self, message: impl Into<String>) -> &mut Self {
        self.violations.push(message.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Consume the collector and yield the ordered violation list.
    pub fn finish(self) -> Violations {
        self.violations
    }
}
