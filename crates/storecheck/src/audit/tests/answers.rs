use std::collections::BTreeSet;

use serde_json::json;

use super::common::*;
use crate::audit::{
    AnswerError, AnswerKind, AnswerSet, AnswerValue, Monetization, Platform, QuestionId, YesNo,
};

#[test]
fn deserializes_camel_case_keys_and_ignores_unknown_ones() {
    let answers = answers(json!({
        "platform": "both",
        "usesThirdPartySDK": "yes",
        "usesIDFA": "no",
        "hasATTPermission": "yes",
        "hasUGC": "yes",
        "hasUGCFiltering": "no",
        "apiLevel": 30,
        "favouriteColour": "teal"
    }));

    assert_eq!(answers.platform, Some(Platform::Both));
    assert_eq!(answers.uses_third_party_sdk, Some(YesNo::Yes));
    assert_eq!(answers.uses_idfa, Some(YesNo::No));
    assert_eq!(answers.has_att_permission, Some(YesNo::Yes));
    assert_eq!(answers.has_ugc, Some(YesNo::Yes));
    assert_eq!(answers.has_ugc_filtering, Some(YesNo::No));
    assert_eq!(answers.api_level, Some(30));
    assert_eq!(answers.answered_count(), 7);
}

#[test]
fn rejects_values_outside_the_vocabulary() {
    let bad_platform = serde_json::from_value::<AnswerSet>(json!({ "platform": "windows" }));
    assert!(bad_platform.is_err());

    let bad_flag = serde_json::from_value::<AnswerSet>(json!({ "collectsData": "maybe" }));
    assert!(bad_flag.is_err());

    let negative = serde_json::from_value::<AnswerSet>(json!({ "apiLevel": -4 }));
    assert!(negative.is_err());
}

#[test]
fn serializes_back_to_the_same_keys() {
    let answers = privacy_gap_ios();
    let value = serde_json::to_value(&answers).expect("answers serialize");

    assert_eq!(value["platform"], "ios");
    assert_eq!(value["collectsData"], "yes");
    assert_eq!(value["hasPrivacyPolicy"], "no");
    assert!(value["hasAccount"].is_null());
    assert!(value.get("targetRegions").is_none());
}

#[test]
fn record_is_monotonic() {
    let mut answers = AnswerSet::new();
    answers
        .record(QuestionId::CollectsData, AnswerValue::YesNo(YesNo::Yes))
        .expect("first answer accepted");
    answers
        .record(QuestionId::CollectsData, AnswerValue::YesNo(YesNo::Yes))
        .expect("repeating the same answer is accepted");

    let err = answers
        .record(QuestionId::CollectsData, AnswerValue::YesNo(YesNo::No))
        .expect_err("conflicting answer rejected");
    assert_eq!(
        err,
        AnswerError::AlreadyAnswered {
            question: "collectsData"
        }
    );
    assert_eq!(answers.collects_data, Some(YesNo::Yes));
}

#[test]
fn record_checks_answer_kind() {
    let mut answers = AnswerSet::new();

    let err = answers
        .record(QuestionId::Platform, AnswerValue::YesNo(YesNo::Yes))
        .expect_err("platform expects a platform");
    assert_eq!(
        err,
        AnswerError::TypeMismatch {
            question: "platform",
            expected: AnswerKind::Platform,
        }
    );

    let err = answers
        .record(QuestionId::HasRestore, AnswerValue::Integer(3))
        .expect_err("flags expect yes/no");
    assert_eq!(err.to_string(), "question 'hasRestore' expects a yes/no answer");
    assert_eq!(answers.answered_count(), 0);
}

#[test]
fn record_merges_region_tags() {
    let mut answers = AnswerSet::new();
    let first: BTreeSet<String> = ["US".to_string()].into_iter().collect();
    let second: BTreeSet<String> = ["EU".to_string(), "US".to_string()].into_iter().collect();

    answers
        .record(QuestionId::TargetRegions, AnswerValue::Regions(first))
        .expect("regions recorded");
    answers
        .record(QuestionId::TargetRegions, AnswerValue::Regions(second))
        .expect("regions merged");

    assert_eq!(answers.target_regions.len(), 2);
    assert!(answers.targets_region("EU"));
}

#[test]
fn record_covers_every_question() {
    let mut answers = AnswerSet::new();
    for question in yes_no_questions() {
        answers
            .record(question, AnswerValue::YesNo(YesNo::No))
            .expect("yes/no question accepted");
    }
    answers
        .record(QuestionId::Platform, AnswerValue::Platform(Platform::Android))
        .expect("platform");
    answers
        .record(QuestionId::AppType, AnswerValue::Tag("game".to_string()))
        .expect("app type");
    answers
        .record(
            QuestionId::TargetRegions,
            AnswerValue::Regions(["JP".to_string()].into_iter().collect()),
        )
        .expect("regions");
    answers
        .record(
            QuestionId::PermissionTiming,
            AnswerValue::PermissionTiming(crate::audit::PermissionTiming::Context),
        )
        .expect("timing");
    answers
        .record(QuestionId::Monetization, AnswerValue::Monetization(Monetization::Paid))
        .expect("monetization");
    answers
        .record(QuestionId::ApiLevel, AnswerValue::Integer(26))
        .expect("api level");
    answers
        .record(QuestionId::TargetSdkVersion, AnswerValue::Integer(34))
        .expect("target sdk");

    assert_eq!(answers.answered_count(), QuestionId::COUNT);
    for question in QuestionId::ordered() {
        let value = answers.answer(question).expect("answered");
        assert_eq!(value.kind(), question.kind(), "{question}");
    }
}

#[test]
fn question_keys_round_trip_through_from_str() {
    for question in QuestionId::ordered() {
        let parsed: QuestionId = question.key().parse().expect("key parses");
        assert_eq!(parsed, question);
    }

    let err = "hasJetpack".parse::<QuestionId>().expect_err("unknown key");
    assert_eq!(err, AnswerError::UnknownQuestion("hasJetpack".to_string()));
}

#[test]
fn question_keys_match_answer_set_fields() {
    let mut answers = AnswerSet::new();
    for question in yes_no_questions() {
        answers
            .record(question, AnswerValue::YesNo(YesNo::Yes))
            .expect("recorded");
    }
    let value = serde_json::to_value(&answers).expect("answers serialize");

    for question in yes_no_questions() {
        assert_eq!(value[question.key()], "yes", "{question}");
    }
}

#[test]
fn answer_values_display_their_labels() {
    assert_eq!(AnswerValue::YesNo(YesNo::No).to_string(), "No");
    assert_eq!(AnswerValue::Platform(Platform::Both).to_string(), "Both iOS & Android");
    assert_eq!(AnswerValue::Integer(33).to_string(), "33");
    let regions = AnswerValue::Regions(["US".to_string(), "EU".to_string()].into_iter().collect());
    assert_eq!(regions.to_string(), "EU, US");
}

#[test]
fn null_regions_read_as_unanswered() {
    let answers = answers(json!({ "targetRegions": null, "platform": null }));

    assert!(answers.target_regions.is_empty());
    assert_eq!(answers.platform, None);
    assert_eq!(answers.answered_count(), 0);
    assert_eq!(answers, AnswerSet::default());
}
