//! Built-in store review rule catalog.
//!
//! Each rule is a pure predicate over the full [`AnswerSet`]. Most predicates only fire on
//! an explicit answer, but a handful test whether a question is still unanswered
//! (`unanswered(..)` below) and therefore fire before the user has responded. Those rules
//! distinguish "not yet answered" from an explicit "no" and must keep doing so.

use serde::Serialize;
use std::fmt;

use super::answers::AnswerSet;
use super::domain::{Monetization, Severity, YesNo};

/// Immutable compliance check.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub severity: Severity,
    /// Points added to the score when the rule fires. Always negative in the built-in catalog.
    pub penalty: i32,
    pub message: &'static str,
    pub predicate: fn(&AnswerSet) -> bool,
}

impl Rule {
    pub fn matches(&self, answers: &AnswerSet) -> bool {
        (self.predicate)(answers)
    }

    pub fn view(&self) -> RuleView {
        RuleView {
            id: self.id,
            severity: self.severity,
            penalty: self.penalty,
            message: self.message,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .field("penalty", &self.penalty)
            .finish_non_exhaustive()
    }
}

/// Serializable description of a rule, without its predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleView {
    pub id: &'static str,
    pub severity: Severity,
    pub penalty: i32,
    pub message: &'static str,
}

/// The built-in catalog, in evaluation order.
pub fn list_rules() -> &'static [Rule] {
    CATALOG
}

pub fn find_rule(id: &str) -> Option<&'static Rule> {
    CATALOG.iter().find(|rule| rule.id == id)
}

fn yes(answer: Option<YesNo>) -> bool {
    answer == Some(YesNo::Yes)
}

fn no(answer: Option<YesNo>) -> bool {
    answer == Some(YesNo::No)
}

fn unanswered(answer: Option<YesNo>) -> bool {
    answer.is_none()
}

/// Integer answers of zero count as not provided.
fn below(value: Option<u32>, threshold: u32) -> bool {
    matches!(value, Some(v) if v != 0 && v < threshold)
}

const CRITICAL: i32 = -15;
const HIGH: i32 = -8;
const MINOR: i32 = -3;

static CATALOG: &[Rule] = &[
    // iOS privacy
    Rule {
        id: "IOS_PRIVACY",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "iOS apps that collect data MUST include a Privacy Policy URL in App Store Connect. (Guideline 5.1.1)",
        predicate: |a: &AnswerSet| {
            a.targets_ios() && yes(a.collects_data) && no(a.has_privacy_policy)
        },
    },
    // accounts
    Rule {
        id: "ACC_DELETION",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "If your app offers account creation, you MUST provide in-app account deletion option. (Apple Guideline 5.1.1)",
        predicate: |a: &AnswerSet| {
            a.targets_ios() && yes(a.has_account) && no(a.account_deletion)
        },
    },
    // subscriptions
    Rule {
        id: "SUB_TERMS",
        severity: Severity::High,
        penalty: HIGH,
        message: "Subscription apps must clearly display terms and auto-renewal information before purchase. (Apple Guideline 3.1.2)",
        predicate: |a: &AnswerSet| {
            a.targets_ios() && a.monetization_is(Monetization::Sub) && no(a.sub_terms_clear)
        },
    },
    Rule {
        id: "SUB_RESTORE",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps with subscriptions MUST include a \"Restore Purchases\" button for users to re-access previous purchases.",
        predicate: |a: &AnswerSet| a.sells_in_app() && no(a.has_restore),
    },
    // Android kids
    Rule {
        id: "ANDROID_PARENTAL_GATE",
        severity: Severity::High,
        penalty: HIGH,
        message: "Android apps designed for children MUST implement a parental gate before accessing external content, purchases, or social features. (Google Play Families Policy)",
        predicate: |a: &AnswerSet| {
            a.targets_android() && yes(a.is_for_kids) && no(a.has_parental_gate)
        },
    },
    // iOS privacy, continued
    Rule {
        id: "IOS_PRIVACY_NUTRITION",
        severity: Severity::High,
        penalty: HIGH,
        message: "iOS apps MUST display a privacy nutrition label in App Store Connect. (Apple Guideline 5.1.1)",
        predicate: |a: &AnswerSet| a.targets_ios() && yes(a.collects_data),
    },
    Rule {
        id: "IOS_APPLE_SIGNIN",
        severity: Severity::High,
        penalty: HIGH,
        message: "If your app offers social login (Google, Facebook, etc.), you MUST also offer Sign in with Apple. (Apple Guideline 5.1.1)",
        predicate: |a: &AnswerSet| {
            a.targets_ios() && yes(a.social_login) && yes(a.has_account)
        },
    },
    Rule {
        id: "IOS_DATA_COLLECTION_DISCLOSURE",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "iOS apps MUST disclose all data collection practices in App Store Connect privacy section. (Apple Guideline 5.1.1)",
        predicate: |a: &AnswerSet| {
            a.targets_ios() && yes(a.collects_data) && unanswered(a.has_privacy_policy)
        },
    },
    Rule {
        id: "IOS_KIDS_PRIVACY",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "Kids apps MUST NOT collect personal data without parental consent. (Apple Guideline 5.1.1, COPPA)",
        predicate: |a: &AnswerSet| {
            a.targets_ios()
                && yes(a.is_for_kids)
                && yes(a.collects_data)
                && no(a.has_parental_gate)
        },
    },
    Rule {
        id: "IOS_PERMISSION_TIMING",
        severity: Severity::High,
        penalty: HIGH,
        message: "iOS apps MUST request permissions at the point of use, not at launch. (Apple Guideline 5.1.5)",
        predicate: |a: &AnswerSet| a.targets_ios() && a.requests_permissions_at_launch(),
    },
    // Android privacy
    Rule {
        id: "ANDROID_PRIVACY_POLICY",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "Android apps MUST have a valid privacy policy URL in Play Store listing. (Google Play Policy)",
        predicate: |a: &AnswerSet| {
            a.targets_android() && yes(a.collects_data) && no(a.has_privacy_policy)
        },
    },
    Rule {
        id: "ANDROID_DATA_DISCLOSURE",
        severity: Severity::High,
        penalty: HIGH,
        message: "Android apps MUST complete the Data Safety section in Play Console. (Google Play Data Policy)",
        predicate: |a: &AnswerSet| a.targets_android() && yes(a.collects_data),
    },
    Rule {
        id: "ANDROID_PERMISSION_RATIONALE",
        severity: Severity::High,
        penalty: HIGH,
        message: "Android apps MUST display permission rationale before requesting sensitive permissions. (Google Play Policy)",
        predicate: |a: &AnswerSet| a.targets_android() && a.requests_permissions_at_launch(),
    },
    Rule {
        id: "ANDROID_KIDS_DATA",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "Kids apps on Android MUST comply with Families Policy and limit data collection. (Google Play Families Policy)",
        predicate: |a: &AnswerSet| {
            a.targets_android()
                && yes(a.is_for_kids)
                && yes(a.collects_data)
                && no(a.has_parental_gate)
        },
    },
    Rule {
        id: "ANDROID_ACCOUNT_DELETION",
        severity: Severity::High,
        penalty: HIGH,
        message: "Android apps offering account creation MUST provide in-app and web-based account deletion. (Google Play User Data Policy)",
        predicate: |a: &AnswerSet| {
            a.targets_android() && yes(a.has_account) && no(a.account_deletion)
        },
    },
    // permissions and disclosures
    Rule {
        id: "LOCATION_DISCLOSURE",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps using location MUST disclose why location is needed and how it is used. (iOS/Android Policy)",
        predicate: |a: &AnswerSet| yes(a.uses_location) && no(a.location_disclosure),
    },
    Rule {
        id: "CAMERA_DISCLOSURE",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps using camera MUST disclose purpose and obtain user consent. (Platform Guidelines)",
        predicate: |a: &AnswerSet| yes(a.uses_camera) && no(a.camera_disclosure),
    },
    Rule {
        id: "MICROPHONE_CONSENT",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps using microphone MUST obtain clear user consent and indicate recording status. (Platform Guidelines)",
        predicate: |a: &AnswerSet| yes(a.uses_microphone),
    },
    Rule {
        id: "HEALTH_DATA_DISCLAIMER",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "Apps using health data MUST include disclaimer and comply with health regulations. (iOS/Android Policy)",
        predicate: |a: &AnswerSet| yes(a.uses_health_data) && no(a.health_data_disclaimer),
    },
    Rule {
        id: "IDFA_ATT_PERMISSION",
        severity: Severity::High,
        penalty: HIGH,
        message: "iOS apps using IDFA MUST implement App Tracking Transparency prompt. (Apple Guideline 5.1.2)",
        predicate: |a: &AnswerSet| {
            a.targets_ios() && yes(a.uses_idfa) && no(a.has_att_permission)
        },
    },
    // content safety
    Rule {
        id: "UGC_MODERATION",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps with User Generated Content MUST implement content moderation/filtering. (Platform Safety Guidelines)",
        predicate: |a: &AnswerSet| yes(a.has_ugc) && no(a.has_ugc_filtering),
    },
    Rule {
        id: "UGC_REPORT_MECHANISM",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps with User Generated Content MUST provide a user report mechanism. (Platform Safety Guidelines)",
        predicate: |a: &AnswerSet| yes(a.has_ugc) && no(a.has_report_mechanism),
    },
    Rule {
        id: "CONTACT_INFO_AVAILABLE",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps MUST provide valid contact information for users and regulators. (Store Guidelines)",
        predicate: |a: &AnswerSet| no(a.has_contact_info),
    },
    Rule {
        id: "KIDS_NO_SOCIAL",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "Kids apps MUST NOT allow social sharing or external interactions without parental gate. (Families Policy)",
        predicate: |a: &AnswerSet| {
            yes(a.is_for_kids) && yes(a.has_ugc) && no(a.has_parental_gate)
        },
    },
    // subscriptions and payments
    Rule {
        id: "FREE_TRIAL_CLEAR",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps offering free trial MUST clearly state trial duration and post-trial price. (Apple Guideline 3.1.2)",
        predicate: |a: &AnswerSet| yes(a.has_free_trial) && no(a.free_trial_clear),
    },
    Rule {
        id: "SUB_CANCEL_EASY",
        severity: Severity::High,
        penalty: HIGH,
        message: "Subscription apps MUST provide easy cancellation mechanism in-app and/or account settings. (Platform Guidelines)",
        predicate: |a: &AnswerSet| {
            a.monetization_is(Monetization::Sub) && no(a.sub_cancellation_easy)
        },
    },
    Rule {
        id: "IAP_PRICE_DISPLAY",
        severity: Severity::High,
        penalty: HIGH,
        message: "In-app purchases MUST display clear price information before purchase. (Platform Billing Guidelines)",
        predicate: |a: &AnswerSet| a.sells_in_app() && no(a.iap_price_displayed),
    },
    Rule {
        id: "SUB_NO_AUTO_RENEW",
        severity: Severity::Minor,
        penalty: MINOR,
        message: "Subscriptions auto-renew by default. Consider offering non-renewing options for better UX. (Best Practice)",
        predicate: |a: &AnswerSet| a.monetization_is(Monetization::Sub),
    },
    Rule {
        id: "IAP_PLATFORM_REQUIRED",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "Digital goods MUST use platform IAP (Apple/Google). External payment for digital content is prohibited. (Platform Guidelines)",
        predicate: |a: &AnswerSet| {
            a.sells_in_app() && (a.app_type_is("saas") || a.app_type_is("game"))
        },
    },
    // kids apps
    Rule {
        id: "KIDS_NO_BEHAVIORAL_ADS",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "Kids apps MUST NOT use behavioral advertising. Only contextual ads allowed. (COPPA, Families Policy)",
        predicate: |a: &AnswerSet| yes(a.is_for_kids) && yes(a.uses_third_party_sdk),
    },
    Rule {
        id: "KIDS_IOS_CERTIFICATION",
        severity: Severity::High,
        penalty: HIGH,
        message: "Kids apps MUST declare Kids category and/or comply with Kids Certification requirements. (Apple Guideline 5.1.1)",
        predicate: |a: &AnswerSet| a.targets_ios() && yes(a.is_for_kids),
    },
    Rule {
        id: "KIDS_ANDROID_DESIGNATED",
        severity: Severity::High,
        penalty: HIGH,
        message: "Kids apps MUST be submitted to the Designed for Families program. (Google Play Families Policy)",
        predicate: |a: &AnswerSet| a.targets_android() && yes(a.is_for_kids),
    },
    Rule {
        id: "KIDS_NO_ANALYTICS",
        severity: Severity::High,
        penalty: HIGH,
        message: "Kids apps MUST limit analytics and tracking. Ensure compliance with COPPA/GDPR-K. (Families Policy)",
        predicate: |a: &AnswerSet| yes(a.is_for_kids) && yes(a.collects_data),
    },
    // technical
    Rule {
        id: "ENCRYPTION_EXPORT",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps using encryption MUST complete Encryption Export Compliance filing. (US Export Regulations)",
        predicate: |a: &AnswerSet| {
            yes(a.uses_encryption) && no(a.encryption_export_compliance)
        },
    },
    Rule {
        id: "ANDROID_TARGET_SDK",
        severity: Severity::High,
        penalty: HIGH,
        message: "Android apps MUST target recent API level (within 2 years). Old targets may cause rejection. (Google Play Policy)",
        predicate: |a: &AnswerSet| a.targets_android() && below(a.target_sdk_version, 33),
    },
    Rule {
        id: "ANDROID_64BIT",
        severity: Severity::High,
        penalty: HIGH,
        message: "Android apps MUST include 64-bit native code. 32-bit only apps are rejected. (Google Play Policy)",
        predicate: |a: &AnswerSet| a.targets_android() && below(a.api_level, 21),
    },
    Rule {
        id: "HTTPS_ONLY",
        severity: Severity::Minor,
        penalty: MINOR,
        message: "Apps should use HTTPS exclusively for network communications. (Security Best Practice)",
        predicate: |a: &AnswerSet| yes(a.collects_data),
    },
    Rule {
        id: "SSL_PINNING",
        severity: Severity::Minor,
        penalty: MINOR,
        message: "Consider implementing SSL certificate pinning for sensitive apps. (Security Best Practice)",
        predicate: |a: &AnswerSet| a.app_type_is("finance") || yes(a.collects_data),
    },
    // store metadata
    Rule {
        id: "SCREENSHOTS_REQUIRED",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps MUST provide screenshots for all supported device sizes. (Store Guidelines)",
        predicate: |a: &AnswerSet| no(a.has_screenshots),
    },
    Rule {
        id: "SCREENSHOTS_REAL",
        severity: Severity::High,
        penalty: HIGH,
        message: "Screenshots MUST represent actual app gameplay/content. No mockups. (Apple Guideline 2.3.3)",
        predicate: |a: &AnswerSet| yes(a.has_screenshots) && no(a.screenshots_real),
    },
    Rule {
        id: "APP_DESC_ACCURATE",
        severity: Severity::High,
        penalty: HIGH,
        message: "App description MUST accurately reflect app features and functionality. (Store Guidelines)",
        predicate: |a: &AnswerSet| no(a.app_desc_accurate),
    },
    Rule {
        id: "AGE_RATING_DECLARED",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps MUST declare accurate age rating based on content. (Store Guidelines)",
        predicate: |a: &AnswerSet| no(a.age_rating_declared),
    },
    Rule {
        id: "METADATA_REGIONAL",
        severity: Severity::Minor,
        penalty: MINOR,
        message: "Consider localizing metadata for target regions. (Best Practice)",
        predicate: |a: &AnswerSet| a.target_regions.len() > 1,
    },
    // accounts and data, continued
    Rule {
        id: "DATA_RETENTION_POLICY",
        severity: Severity::Minor,
        penalty: MINOR,
        message: "Apps collecting data should have a clear data retention policy. (Privacy Best Practice)",
        predicate: |a: &AnswerSet| yes(a.collects_data) && yes(a.has_privacy_policy),
    },
    Rule {
        id: "GDPR_COMPLIANCE",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps targeting EU MUST comply with GDPR (right to access, delete, port data). (GDPR)",
        predicate: |a: &AnswerSet| {
            (a.targets_region("EU") || a.targets_region("Europe")) && yes(a.collects_data)
        },
    },
    Rule {
        id: "SECURE_AUTH",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps with accounts MUST implement secure authentication (OAuth2, MFA support). (Security Best Practice)",
        predicate: |a: &AnswerSet| {
            yes(a.has_account) && (a.app_type_is("finance") || a.app_type_is("health"))
        },
    },
    Rule {
        id: "DATA_MINIMIZATION",
        severity: Severity::Minor,
        penalty: MINOR,
        message: "Collect only necessary data. Excessive data collection may cause rejection. (Privacy Best Practice)",
        predicate: |a: &AnswerSet| yes(a.collects_data) && unanswered(a.has_privacy_policy),
    },
    // location and health
    Rule {
        id: "BACKGROUND_LOCATION",
        severity: Severity::High,
        penalty: HIGH,
        message: "Background location access requires strong justification and clear disclosure to users. (Platform Guidelines)",
        predicate: |a: &AnswerSet| yes(a.uses_location) && no(a.location_disclosure),
    },
    Rule {
        id: "HEALTH_APPS_COMPLIANCE",
        severity: Severity::High,
        penalty: HIGH,
        message: "Health apps MUST comply with HIPAA/local regulations and handle data securely. (HIPAA/Platform Guidelines)",
        predicate: |a: &AnswerSet| a.app_type_is("health") && yes(a.uses_health_data),
    },
    Rule {
        id: "HEALTHKIT_DECLARATION",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "iOS apps using HealthKit MUST declare usage in Info.plist and provide privacy policy. (Apple Guideline 5.1.2)",
        predicate: |a: &AnswerSet| {
            a.targets_ios() && yes(a.uses_health_data) && unanswered(a.has_privacy_policy)
        },
    },
    // third-party SDKs and encryption
    Rule {
        id: "SDK_LIST_PROVIDED",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps using third-party SDKs MUST list them in privacy disclosure. (Store Privacy Guidelines)",
        predicate: |a: &AnswerSet| yes(a.uses_third_party_sdk) && no(a.sdk_list_provided),
    },
    Rule {
        id: "SDK_ATTRIBUTION",
        severity: Severity::High,
        penalty: HIGH,
        message: "Third-party SDKs MUST be properly attributed in privacy nutrition label/safety section. (Platform Guidelines)",
        predicate: |a: &AnswerSet| yes(a.uses_third_party_sdk) && a.targets_ios(),
    },
    Rule {
        id: "NO_PRIVATE_APIS",
        severity: Severity::Critical,
        penalty: CRITICAL,
        message: "Apps MUST NOT use private APIs. This will cause immediate rejection. (Apple Guideline 2.5.2)",
        predicate: |a: &AnswerSet| a.targets_ios(),
    },
    Rule {
        id: "ENCRYPTION_DISCLOSURE",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps using encryption MUST properly disclose in export compliance documents. (US Export Regulations)",
        predicate: |a: &AnswerSet| {
            yes(a.uses_encryption) && unanswered(a.encryption_export_compliance)
        },
    },
    Rule {
        id: "AD_NETWORK_DISCLOSURE",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps using ad networks MUST declare ad attribution in privacy disclosures. (Platform Guidelines)",
        predicate: |a: &AnswerSet| {
            yes(a.uses_third_party_sdk) && unanswered(a.sdk_list_provided)
        },
    },
    // social login and general
    Rule {
        id: "SOCIAL_LOGIN_TERMS",
        severity: Severity::High,
        penalty: HIGH,
        message: "Apps with social login MUST display terms of service before account creation. (Platform Guidelines)",
        predicate: |a: &AnswerSet| {
            yes(a.social_login) && yes(a.has_account) && unanswered(a.sub_terms_clear)
        },
    },
    Rule {
        id: "ANDROID_RUNTIME_PERMISSIONS",
        severity: Severity::High,
        penalty: HIGH,
        message: "Android apps MUST request runtime permissions properly (API 23+). (Google Play Policy)",
        predicate: |a: &AnswerSet| a.targets_android() && a.requests_permissions_at_launch(),
    },
    Rule {
        id: "CRASH_REPORTING",
        severity: Severity::Minor,
        penalty: MINOR,
        message: "Apps should implement crash reporting for stability monitoring. (Best Practice)",
        predicate: |a: &AnswerSet| {
            a.monetization_is(Monetization::Paid) || a.sells_in_app()
        },
    },
];
