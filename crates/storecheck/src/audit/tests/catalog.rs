use std::collections::HashSet;

use crate::audit::{find_rule, list_rules, Severity};

#[test]
fn catalog_holds_fifty_eight_unique_rules() {
    let rules = list_rules();
    assert_eq!(rules.len(), 58);

    let unique: HashSet<&str> = rules.iter().map(|rule| rule.id).collect();
    assert_eq!(unique.len(), rules.len(), "rule ids must be unique");
}

#[test]
fn penalties_follow_severity() {
    for rule in list_rules() {
        let expected = match rule.severity {
            Severity::Critical => -15,
            Severity::High => -8,
            Severity::Minor => -3,
        };
        assert_eq!(rule.penalty, expected, "{} carries the wrong penalty", rule.id);
        assert!(!rule.message.is_empty(), "{} has no message", rule.id);
    }
}

#[test]
fn catalog_order_is_stable() {
    let rules = list_rules();
    assert_eq!(rules.first().map(|rule| rule.id), Some("IOS_PRIVACY"));
    assert_eq!(rules.last().map(|rule| rule.id), Some("CRASH_REPORTING"));

    let position = |id: &str| rules.iter().position(|rule| rule.id == id);
    assert!(position("SUB_RESTORE") < position("SUB_NO_AUTO_RENEW"));
    assert!(position("HTTPS_ONLY") < position("SSL_PINNING"));
}

#[test]
fn severity_mix_matches_catalog() {
    let count = |severity: Severity| {
        list_rules()
            .iter()
            .filter(|rule| rule.severity == severity)
            .count()
    };
    assert_eq!(count(Severity::Critical), 12);
    assert_eq!(count(Severity::High), 39);
    assert_eq!(count(Severity::Minor), 7);
}

#[test]
fn find_rule_resolves_known_ids() {
    let rule = find_rule("NO_PRIVATE_APIS").expect("rule exists");
    assert_eq!(rule.severity, Severity::Critical);
    assert!(find_rule("NOT_A_RULE").is_none());
}

#[test]
fn rule_views_serialize_without_predicates() {
    let rule = find_rule("HTTPS_ONLY").expect("rule exists");
    let value = serde_json::to_value(rule.view()).expect("view serializes");
    assert_eq!(value["id"], "HTTPS_ONLY");
    assert_eq!(value["severity"], "minor");
    assert_eq!(value["penalty"], -3);
    assert!(value.get("predicate").is_none());
}
