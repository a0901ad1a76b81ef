use serde_json::{json, Map, Value};

use crate::audit::{find_rule, list_rules, AnswerSet};

/// Smallest answer set that fires each rule. Every key in a row is required.
fn firing_rows() -> Vec<(&'static str, Value)> {
    vec![
        ("IOS_PRIVACY", json!({ "platform": "ios", "collectsData": "yes", "hasPrivacyPolicy": "no" })),
        ("ACC_DELETION", json!({ "platform": "ios", "hasAccount": "yes", "accountDeletion": "no" })),
        ("SUB_TERMS", json!({ "platform": "ios", "monetization": "sub", "subTermsClear": "no" })),
        ("SUB_RESTORE", json!({ "monetization": "iap", "hasRestore": "no" })),
        ("ANDROID_PARENTAL_GATE", json!({ "platform": "android", "isForKids": "yes", "hasParentalGate": "no" })),
        ("IOS_PRIVACY_NUTRITION", json!({ "platform": "ios", "collectsData": "yes" })),
        ("IOS_APPLE_SIGNIN", json!({ "platform": "ios", "socialLogin": "yes", "hasAccount": "yes" })),
        ("IOS_DATA_COLLECTION_DISCLOSURE", json!({ "platform": "ios", "collectsData": "yes" })),
        (
            "IOS_KIDS_PRIVACY",
            json!({ "platform": "ios", "isForKids": "yes", "collectsData": "yes", "hasParentalGate": "no" }),
        ),
        ("IOS_PERMISSION_TIMING", json!({ "platform": "ios", "permissionTiming": "launch" })),
        ("ANDROID_PRIVACY_POLICY", json!({ "platform": "android", "collectsData": "yes", "hasPrivacyPolicy": "no" })),
        ("ANDROID_DATA_DISCLOSURE", json!({ "platform": "android", "collectsData": "yes" })),
        ("ANDROID_PERMISSION_RATIONALE", json!({ "platform": "android", "permissionTiming": "launch" })),
        (
            "ANDROID_KIDS_DATA",
            json!({ "platform": "android", "isForKids": "yes", "collectsData": "yes", "hasParentalGate": "no" }),
        ),
        ("ANDROID_ACCOUNT_DELETION", json!({ "platform": "android", "hasAccount": "yes", "accountDeletion": "no" })),
        ("LOCATION_DISCLOSURE", json!({ "usesLocation": "yes", "locationDisclosure": "no" })),
        ("CAMERA_DISCLOSURE", json!({ "usesCamera": "yes", "cameraDisclosure": "no" })),
        ("MICROPHONE_CONSENT", json!({ "usesMicrophone": "yes" })),
        ("HEALTH_DATA_DISCLAIMER", json!({ "usesHealthData": "yes", "healthDataDisclaimer": "no" })),
        ("IDFA_ATT_PERMISSION", json!({ "platform": "ios", "usesIDFA": "yes", "hasATTPermission": "no" })),
        ("UGC_MODERATION", json!({ "hasUGC": "yes", "hasUGCFiltering": "no" })),
        ("UGC_REPORT_MECHANISM", json!({ "hasUGC": "yes", "hasReportMechanism": "no" })),
        ("CONTACT_INFO_AVAILABLE", json!({ "hasContactInfo": "no" })),
        ("KIDS_NO_SOCIAL", json!({ "isForKids": "yes", "hasUGC": "yes", "hasParentalGate": "no" })),
        ("FREE_TRIAL_CLEAR", json!({ "hasFreeTrial": "yes", "freeTrialClear": "no" })),
        ("SUB_CANCEL_EASY", json!({ "monetization": "sub", "subCancellationEasy": "no" })),
        ("IAP_PRICE_DISPLAY", json!({ "monetization": "iap", "iapPriceDisplayed": "no" })),
        ("SUB_NO_AUTO_RENEW", json!({ "monetization": "sub" })),
        ("IAP_PLATFORM_REQUIRED", json!({ "appType": "game", "monetization": "iap" })),
        ("KIDS_NO_BEHAVIORAL_ADS", json!({ "isForKids": "yes", "usesThirdPartySDK": "yes" })),
        ("KIDS_IOS_CERTIFICATION", json!({ "platform": "ios", "isForKids": "yes" })),
        ("KIDS_ANDROID_DESIGNATED", json!({ "platform": "android", "isForKids": "yes" })),
        ("KIDS_NO_ANALYTICS", json!({ "isForKids": "yes", "collectsData": "yes" })),
        ("ENCRYPTION_EXPORT", json!({ "usesEncryption": "yes", "encryptionExportCompliance": "no" })),
        ("ANDROID_TARGET_SDK", json!({ "platform": "android", "targetSdkVersion": 30 })),
        ("ANDROID_64BIT", json!({ "platform": "android", "apiLevel": 19 })),
        ("HTTPS_ONLY", json!({ "collectsData": "yes" })),
        ("SSL_PINNING", json!({ "appType": "finance" })),
        ("SCREENSHOTS_REQUIRED", json!({ "hasScreenshots": "no" })),
        ("SCREENSHOTS_REAL", json!({ "hasScreenshots": "yes", "screenshotsReal": "no" })),
        ("APP_DESC_ACCURATE", json!({ "appDescAccurate": "no" })),
        ("AGE_RATING_DECLARED", json!({ "ageRatingDeclared": "no" })),
        ("METADATA_REGIONAL", json!({ "targetRegions": ["US", "JP"] })),
        ("DATA_RETENTION_POLICY", json!({ "collectsData": "yes", "hasPrivacyPolicy": "yes" })),
        ("GDPR_COMPLIANCE", json!({ "targetRegions": ["EU"], "collectsData": "yes" })),
        ("SECURE_AUTH", json!({ "hasAccount": "yes", "appType": "finance" })),
        ("DATA_MINIMIZATION", json!({ "collectsData": "yes" })),
        ("BACKGROUND_LOCATION", json!({ "usesLocation": "yes", "locationDisclosure": "no" })),
        ("HEALTH_APPS_COMPLIANCE", json!({ "appType": "health", "usesHealthData": "yes" })),
        ("HEALTHKIT_DECLARATION", json!({ "platform": "ios", "usesHealthData": "yes" })),
        ("SDK_LIST_PROVIDED", json!({ "usesThirdPartySDK": "yes", "sdkListProvided": "no" })),
        ("SDK_ATTRIBUTION", json!({ "platform": "ios", "usesThirdPartySDK": "yes" })),
        ("NO_PRIVATE_APIS", json!({ "platform": "ios" })),
        ("ENCRYPTION_DISCLOSURE", json!({ "usesEncryption": "yes" })),
        ("AD_NETWORK_DISCLOSURE", json!({ "usesThirdPartySDK": "yes" })),
        ("SOCIAL_LOGIN_TERMS", json!({ "socialLogin": "yes", "hasAccount": "yes" })),
        ("ANDROID_RUNTIME_PERMISSIONS", json!({ "platform": "android", "permissionTiming": "launch" })),
        ("CRASH_REPORTING", json!({ "monetization": "paid" })),
    ]
}

/// Rules that fire while a question is unanswered, paired with that question.
const UNANSWERED_RULES: &[(&str, &str)] = &[
    ("IOS_DATA_COLLECTION_DISCLOSURE", "hasPrivacyPolicy"),
    ("DATA_MINIMIZATION", "hasPrivacyPolicy"),
    ("HEALTHKIT_DECLARATION", "hasPrivacyPolicy"),
    ("ENCRYPTION_DISCLOSURE", "encryptionExportCompliance"),
    ("AD_NETWORK_DISCLOSURE", "sdkListProvided"),
    ("SOCIAL_LOGIN_TERMS", "subTermsClear"),
];

fn fields(row: &Value) -> &Map<String, Value> {
    row.as_object().expect("row is a json object")
}

fn fires(id: &str, row: Value) -> bool {
    let answers: AnswerSet = serde_json::from_value(row).expect("row deserializes");
    find_rule(id).expect("rule exists").matches(&answers)
}

#[test]
fn every_rule_has_a_firing_row() {
    let mut covered: Vec<&str> = firing_rows().into_iter().map(|(id, _)| id).collect();
    let mut catalog: Vec<&str> = list_rules().iter().map(|rule| rule.id).collect();
    covered.sort_unstable();
    catalog.sort_unstable();

    assert_eq!(covered, catalog);
}

#[test]
fn each_row_fires_its_rule() {
    for (id, row) in firing_rows() {
        let answers: AnswerSet = serde_json::from_value(row).expect("row deserializes");
        let result = crate::audit::AuditEngine::default().audit(&answers);

        assert!(
            result.issues.iter().any(|issue| issue.id == id),
            "{id} did not fire"
        );
    }
}

#[test]
fn every_answer_in_a_row_is_required() {
    for (id, row) in firing_rows() {
        for key in fields(&row).keys() {
            let mut reduced = fields(&row).clone();
            reduced.remove(key);
            assert!(
                !fires(id, Value::Object(reduced)),
                "{id} still fires without {key}"
            );
        }
    }
}

#[test]
fn flipping_a_yes_no_answer_silences_the_rule() {
    for (id, row) in firing_rows() {
        for (key, value) in fields(&row) {
            let flipped = match value.as_str() {
                Some("yes") => "no",
                Some("no") => "yes",
                _ => continue,
            };
            let mut changed = fields(&row).clone();
            changed.insert(key.clone(), json!(flipped));
            assert!(
                !fires(id, Value::Object(changed)),
                "{id} still fires with {key} = {flipped}"
            );
        }
    }
}

#[test]
fn unanswered_rules_ignore_explicit_answers() {
    let rows = firing_rows();
    for (id, question) in UNANSWERED_RULES {
        let (_, row) = rows
            .iter()
            .find(|(row_id, _)| row_id == id)
            .expect("row exists");
        assert!(fires(id, row.clone()), "{id} should fire while {question} is unanswered");

        for answer in ["no", "yes"] {
            let mut answered = fields(row).clone();
            answered.insert(question.to_string(), json!(answer));
            assert!(
                !fires(id, Value::Object(answered)),
                "{id} fired with {question} = {answer}"
            );
        }
    }
}
