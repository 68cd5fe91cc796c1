use serde::{Deserialize, Serialize};

use cashdesk_core::{EntityId, RuleSet, Violations};

/// Amount type identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmountTypeId(pub EntityId);

impl AmountTypeId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for AmountTypeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Maximum length of an amount-type label.
pub const MAX_LABEL_LEN: usize = 50;

/// Candidate amount type (create/update payload before persistence).
///
/// An amount type is either *calculable* — its value derives from a formula
/// over other amounts — or fixed. The formula field is only meaningful in
/// the calculable case, and both directions of that coupling are enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountTypeDraft {
    pub label: Option<String>,
    pub calculable: bool,
    pub formula: Option<String>,
}

impl AmountTypeDraft {
    /// Validate against the labels of already-persisted amount types.
    ///
    /// Rule order: label presence, label length, label uniqueness, formula
    /// coupling. Returns the ordered violation list; empty means valid.
    pub fn validate(&self, existing_labels: &[String]) -> Violations {
        let mut rules = RuleSet::new();
        rules.required("Label", self.label.as_deref());
        rules.max_len("Label", self.label.as_deref(), MAX_LABEL_LEN);
        rules.unique_label(
            self.label.as_deref(),
            existing_labels.iter().map(String::as_str),
            "An amount type with this label already exists.",
        );
        self.check_formula(&mut rules);
        rules.finish()
    }

    fn check_formula(&self, rules: &mut RuleSet) {
        let formula = self.formula.as_deref().map(str::trim).unwrap_or("");
        if self.calculable {
            if formula.is_empty() {
                rules.violation("Formula is required for a calculable amount type.");
            } else if !formula.chars().any(is_arithmetic_operator) {
                rules.violation(
                    "Formula must contain at least one arithmetic operator (+, -, * or /).",
                );
            }
        } else if !formula.is_empty() {
            rules.violation("Formula must be empty for a non-calculable amount type.");
        }
    }
}

fn is_arithmetic_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Vec<String> {
        vec!["Montant principal".to_string(), "Intérêts".to_string()]
    }

    #[test]
    fn valid_fixed_amount_type_passes() {
        let draft = AmountTypeDraft {
            label: Some("Frais de tenue".to_string()),
            calculable: false,
            formula: None,
        };
        assert!(draft.validate(&existing()).is_empty());
    }

    #[test]
    fn valid_calculable_amount_type_passes() {
        let draft = AmountTypeDraft {
            label: Some("Total dû".to_string()),
            calculable: true,
            formula: Some("principal + interets".to_string()),
        };
        assert!(draft.validate(&existing()).is_empty());
    }

    #[test]
    fn missing_label_yields_exactly_one_violation() {
        let draft = AmountTypeDraft::default();
        let violations = draft.validate(&existing());
        assert_eq!(violations, vec!["Label is required."]);
    }

    #[test]
    fn over_long_label_is_flagged_with_the_limit() {
        let draft = AmountTypeDraft {
            label: Some("x".repeat(51)),
            calculable: false,
            formula: None,
        };
        let violations = draft.validate(&existing());
        assert_eq!(violations, vec!["Label must not exceed 50 characters."]);
    }

    #[test]
    fn duplicate_label_is_flagged_case_insensitively() {
        let draft = AmountTypeDraft {
            label: Some("  montant PRINCIPAL ".to_string()),
            calculable: false,
            formula: None,
        };
        let violations = draft.validate(&existing());
        assert_eq!(
            violations,
            vec!["An amount type with this label already exists."]
        );
    }

    #[test]
    fn calculable_without_formula_is_flagged() {
        let draft = AmountTypeDraft {
            label: Some("Total dû".to_string()),
            calculable: true,
            formula: Some("".to_string()),
        };
        let violations = draft.validate(&existing());
        assert_eq!(
            violations,
            vec!["Formula is required for a calculable amount type."]
        );
    }

    #[test]
    fn calculable_formula_without_operator_is_flagged() {
        let draft = AmountTypeDraft {
            label: Some("Total dû".to_string()),
            calculable: true,
            formula: Some("abc".to_string()),
        };
        let violations = draft.validate(&existing());
        assert_eq!(
            violations,
            vec!["Formula must contain at least one arithmetic operator (+, -, * or /)."]
        );
    }

    #[test]
    fn non_calculable_with_formula_is_flagged() {
        let draft = AmountTypeDraft {
            label: Some("Montant fixe".to_string()),
            calculable: false,
            formula: Some("1+1".to_string()),
        };
        let violations = draft.validate(&existing());
        assert_eq!(
            violations,
            vec!["Formula must be empty for a non-calculable amount type."]
        );
    }

    #[test]
    fn each_operator_satisfies_the_formula_rule() {
        for formula in ["a+b", "a-b", "a*b", "a/b"] {
            let draft = AmountTypeDraft {
                label: Some("Total dû".to_string()),
                calculable: true,
                formula: Some(formula.to_string()),
            };
            assert!(draft.validate(&existing()).is_empty(), "formula {formula}");
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a within-limit, non-colliding label never produces a
            /// label violation, whatever its content.
            #[test]
            fn fresh_labels_within_limit_pass(label in "[a-zA-Z][a-zA-Z0-9 ]{0,48}") {
                let draft = AmountTypeDraft {
                    label: Some(label),
                    calculable: false,
                    formula: None,
                };
                prop_assert!(draft.validate(&[]).is_empty());
            }

            /// Property: validation never mutates the sibling context and is
            /// order-stable across repeated calls.
            #[test]
            fn validation_is_stable(
                label in proptest::option::of("[a-zA-Z ]{0,60}"),
                calculable in any::<bool>(),
                formula in proptest::option::of("[a-z+*/-]{0,10}"),
            ) {
                let draft = AmountTypeDraft { label, calculable, formula };
                let siblings = vec!["Montant principal".to_string()];
                let before = siblings.clone();

                let first = draft.validate(&siblings);
                let second = draft.validate(&siblings);

                prop_assert_eq!(first, second);
                prop_assert_eq!(siblings, before);
            }
        }
    }

    #[test]
    fn violations_accumulate_in_declared_order() {
        // Missing label and broken formula coupling surface together,
        // presence first.
        let draft = AmountTypeDraft {
            label: None,
            calculable: true,
            formula: None,
        };
        let violations = draft.validate(&existing());
        assert_eq!(
            violations,
            vec![
                "Label is required.",
                "Formula is required for a calculable amount type.",
            ]
        );
    }
}
