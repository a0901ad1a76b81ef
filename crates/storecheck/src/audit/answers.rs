use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::domain::{Monetization, PermissionTiming, Platform, YesNo};

/// Facts collected about one app. `None` means the question has not been answered yet.
///
/// The JSON form is a flat camelCase record; unknown keys are ignored and missing keys
/// deserialize as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnswerSet {
    pub platform: Option<Platform>,
    pub app_type: Option<String>,
    /// Distinct region tags. Repeated tags collapse, so `["EU", "EU"]` counts as one region.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "regions_or_null"
    )]
    pub target_regions: BTreeSet<String>,
    pub is_for_kids: Option<YesNo>,

    pub collects_data: Option<YesNo>,
    pub has_privacy_policy: Option<YesNo>,
    pub has_account: Option<YesNo>,
    pub account_deletion: Option<YesNo>,
    pub uses_encryption: Option<YesNo>,
    pub encryption_export_compliance: Option<YesNo>,
    #[serde(rename = "usesThirdPartySDK")]
    pub uses_third_party_sdk: Option<YesNo>,
    pub sdk_list_provided: Option<YesNo>,

    pub permission_timing: Option<PermissionTiming>,
    pub uses_location: Option<YesNo>,
    pub location_disclosure: Option<YesNo>,
    pub uses_camera: Option<YesNo>,
    pub camera_disclosure: Option<YesNo>,
    pub uses_microphone: Option<YesNo>,
    pub uses_health_data: Option<YesNo>,
    pub health_data_disclaimer: Option<YesNo>,
    #[serde(rename = "usesIDFA")]
    pub uses_idfa: Option<YesNo>,
    #[serde(rename = "hasATTPermission")]
    pub has_att_permission: Option<YesNo>,

    #[serde(rename = "hasUGC")]
    pub has_ugc: Option<YesNo>,
    #[serde(rename = "hasUGCFiltering")]
    pub has_ugc_filtering: Option<YesNo>,
    pub has_report_mechanism: Option<YesNo>,
    pub has_contact_info: Option<YesNo>,
    pub social_login: Option<YesNo>,
    pub has_parental_gate: Option<YesNo>,

    pub monetization: Option<Monetization>,
    pub sub_terms_clear: Option<YesNo>,
    pub has_free_trial: Option<YesNo>,
    pub free_trial_clear: Option<YesNo>,
    pub sub_cancellation_easy: Option<YesNo>,
    pub iap_price_displayed: Option<YesNo>,
    pub has_restore: Option<YesNo>,

    pub api_level: Option<u32>,
    pub target_sdk_version: Option<u32>,
    pub has_screenshots: Option<YesNo>,
    pub screenshots_real: Option<YesNo>,
    pub app_desc_accurate: Option<YesNo>,
    pub age_rating_declared: Option<YesNo>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targets_ios(&self) -> bool {
        self.platform.is_some_and(Platform::targets_ios)
    }

    pub fn targets_android(&self) -> bool {
        self.platform.is_some_and(Platform::targets_android)
    }

    pub fn requests_permissions_at_launch(&self) -> bool {
        self.permission_timing == Some(PermissionTiming::Launch)
    }

    pub fn monetization_is(&self, model: Monetization) -> bool {
        self.monetization == Some(model)
    }

    pub fn sells_in_app(&self) -> bool {
        self.monetization.is_some_and(Monetization::sells_in_app)
    }

    pub fn app_type_is(&self, tag: &str) -> bool {
        self.app_type.as_deref() == Some(tag)
    }

    pub fn targets_region(&self, tag: &str) -> bool {
        self.target_regions.contains(tag)
    }

    /// Record one answer. Answers only accumulate: a question that already holds a
    /// different value is rejected, repeating the same value is accepted, and region
    /// tags are merged into the existing set.
    pub fn record(&mut self, question: QuestionId, value: AnswerValue) -> Result<(), AnswerError> {
        match (question, value) {
            (QuestionId::Platform, AnswerValue::Platform(platform)) => {
                set_once(&mut self.platform, platform, question)
            }
            (QuestionId::AppType, AnswerValue::Tag(tag)) => {
                set_once(&mut self.app_type, tag, question)
            }
            (QuestionId::TargetRegions, AnswerValue::Regions(tags)) => {
                self.target_regions.extend(tags);
                Ok(())
            }
            (QuestionId::PermissionTiming, AnswerValue::PermissionTiming(timing)) => {
                set_once(&mut self.permission_timing, timing, question)
            }
            (QuestionId::Monetization, AnswerValue::Monetization(model)) => {
                set_once(&mut self.monetization, model, question)
            }
            (QuestionId::ApiLevel, AnswerValue::Integer(level)) => {
                set_once(&mut self.api_level, level, question)
            }
            (QuestionId::TargetSdkVersion, AnswerValue::Integer(version)) => {
                set_once(&mut self.target_sdk_version, version, question)
            }
            (question, AnswerValue::YesNo(answer)) => match self.yes_no_slot(question) {
                Some(slot) => set_once(slot, answer, question),
                None => Err(AnswerError::type_mismatch(question)),
            },
            (question, _) => Err(AnswerError::type_mismatch(question)),
        }
    }

    /// Current value for a question, if answered.
    pub fn answer(&self, question: QuestionId) -> Option<AnswerValue> {
        match question {
            QuestionId::Platform => self.platform.map(AnswerValue::Platform),
            QuestionId::AppType => self.app_type.clone().map(AnswerValue::Tag),
            QuestionId::TargetRegions => (!self.target_regions.is_empty())
                .then(|| AnswerValue::Regions(self.target_regions.clone())),
            QuestionId::PermissionTiming => self.permission_timing.map(AnswerValue::PermissionTiming),
            QuestionId::Monetization => self.monetization.map(AnswerValue::Monetization),
            QuestionId::ApiLevel => self.api_level.map(AnswerValue::Integer),
            QuestionId::TargetSdkVersion => self.target_sdk_version.map(AnswerValue::Integer),
            other => self.yes_no(other).map(AnswerValue::YesNo),
        }
    }

    pub fn answered_count(&self) -> usize {
        QuestionId::ordered()
            .into_iter()
            .filter(|question| self.answer(*question).is_some())
            .count()
    }

    fn yes_no(&self, question: QuestionId) -> Option<YesNo> {
        match question {
            QuestionId::IsForKids => self.is_for_kids,
            QuestionId::CollectsData => self.collects_data,
            QuestionId::HasPrivacyPolicy => self.has_privacy_policy,
            QuestionId::HasAccount => self.has_account,
            QuestionId::AccountDeletion => self.account_deletion,
            QuestionId::UsesEncryption => self.uses_encryption,
            QuestionId::EncryptionExportCompliance => self.encryption_export_compliance,
            QuestionId::UsesThirdPartySdk => self.uses_third_party_sdk,
            QuestionId::SdkListProvided => self.sdk_list_provided,
            QuestionId::UsesLocation => self.uses_location,
            QuestionId::LocationDisclosure => self.location_disclosure,
            QuestionId::UsesCamera => self.uses_camera,
            QuestionId::CameraDisclosure => self.camera_disclosure,
            QuestionId::UsesMicrophone => self.uses_microphone,
            QuestionId::UsesHealthData => self.uses_health_data,
            QuestionId::HealthDataDisclaimer => self.health_data_disclaimer,
            QuestionId::UsesIdfa => self.uses_idfa,
            QuestionId::HasAttPermission => self.has_att_permission,
            QuestionId::HasUgc => self.has_ugc,
            QuestionId::HasUgcFiltering => self.has_ugc_filtering,
            QuestionId::HasReportMechanism => self.has_report_mechanism,
            QuestionId::HasContactInfo => self.has_contact_info,
            QuestionId::SocialLogin => self.social_login,
            QuestionId::HasParentalGate => self.has_parental_gate,
            QuestionId::SubTermsClear => self.sub_terms_clear,
            QuestionId::HasFreeTrial => self.has_free_trial,
            QuestionId::FreeTrialClear => self.free_trial_clear,
            QuestionId::SubCancellationEasy => self.sub_cancellation_easy,
            QuestionId::IapPriceDisplayed => self.iap_price_displayed,
            QuestionId::HasRestore => self.has_restore,
            QuestionId::HasScreenshots => self.has_screenshots,
            QuestionId::ScreenshotsReal => self.screenshots_real,
            QuestionId::AppDescAccurate => self.app_desc_accurate,
            QuestionId::AgeRatingDeclared => self.age_rating_declared,
            QuestionId::Platform
            | QuestionId::AppType
            | QuestionId::TargetRegions
            | QuestionId::PermissionTiming
            | QuestionId::Monetization
            | QuestionId::ApiLevel
            | QuestionId::TargetSdkVersion => None,
        }
    }

    fn yes_no_slot(&mut self, question: QuestionId) -> Option<&mut Option<YesNo>> {
        let slot = match question {
            QuestionId::IsForKids => &mut self.is_for_kids,
            QuestionId::CollectsData => &mut self.collects_data,
            QuestionId::HasPrivacyPolicy => &mut self.has_privacy_policy,
            QuestionId::HasAccount => &mut self.has_account,
            QuestionId::AccountDeletion => &mut self.account_deletion,
            QuestionId::UsesEncryption => &mut self.uses_encryption,
            QuestionId::EncryptionExportCompliance => &mut self.encryption_export_compliance,
            QuestionId::UsesThirdPartySdk => &mut self.uses_third_party_sdk,
            QuestionId::SdkListProvided => &mut self.sdk_list_provided,
            QuestionId::UsesLocation => &mut self.uses_location,
            QuestionId::LocationDisclosure => &mut self.location_disclosure,
            QuestionId::UsesCamera => &mut self.uses_camera,
            QuestionId::CameraDisclosure => &mut self.camera_disclosure,
            QuestionId::UsesMicrophone => &mut self.uses_microphone,
            QuestionId::UsesHealthData => &mut self.uses_health_data,
            QuestionId::HealthDataDisclaimer => &mut self.health_data_disclaimer,
            QuestionId::UsesIdfa => &mut self.uses_idfa,
            QuestionId::HasAttPermission => &mut self.has_att_permission,
            QuestionId::HasUgc => &mut self.has_ugc,
            QuestionId::HasUgcFiltering => &mut self.has_ugc_filtering,
            QuestionId::HasReportMechanism => &mut self.has_report_mechanism,
            QuestionId::HasContactInfo => &mut self.has_contact_info,
            QuestionId::SocialLogin => &mut self.social_login,
            QuestionId::HasParentalGate => &mut self.has_parental_gate,
            QuestionId::SubTermsClear => &mut self.sub_terms_clear,
            QuestionId::HasFreeTrial => &mut self.has_free_trial,
            QuestionId::FreeTrialClear => &mut self.free_trial_clear,
            QuestionId::SubCancellationEasy => &mut self.sub_cancellation_easy,
            QuestionId::IapPriceDisplayed => &mut self.iap_price_displayed,
            QuestionId::HasRestore => &mut self.has_restore,
            QuestionId::HasScreenshots => &mut self.has_screenshots,
            QuestionId::ScreenshotsReal => &mut self.screenshots_real,
            QuestionId::AppDescAccurate => &mut self.app_desc_accurate,
            QuestionId::AgeRatingDeclared => &mut self.age_rating_declared,
            QuestionId::Platform
            | QuestionId::AppType
            | QuestionId::TargetRegions
            | QuestionId::PermissionTiming
            | QuestionId::Monetization
            | QuestionId::ApiLevel
            | QuestionId::TargetSdkVersion => return None,
        };
        Some(slot)
    }
}

/// `null` reads as no regions, like every other unanswered field.
fn regions_or_null<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeSet<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn set_once<T: PartialEq>(
    slot: &mut Option<T>,
    value: T,
    question: QuestionId,
) -> Result<(), AnswerError> {
    match slot {
        Some(existing) if *existing == value => Ok(()),
        Some(_) => Err(AnswerError::AlreadyAnswered {
            question: question.key(),
        }),
        None => {
            *slot = Some(value);
            Ok(())
        }
    }
}

/// Shape of the value a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    YesNo,
    Platform,
    Monetization,
    PermissionTiming,
    Tag,
    Regions,
    Integer,
}

impl AnswerKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::YesNo => "yes/no",
            Self::Platform => "ios/android/both",
            Self::Monetization => "free/paid/iap/sub",
            Self::PermissionTiming => "launch/context",
            Self::Tag => "tag",
            Self::Regions => "region tags",
            Self::Integer => "integer",
        }
    }
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single typed answer handed to [`AnswerSet::record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    YesNo(YesNo),
    Platform(Platform),
    Monetization(Monetization),
    PermissionTiming(PermissionTiming),
    Tag(String),
    Regions(BTreeSet<String>),
    Integer(u32),
}

impl AnswerValue {
    pub fn kind(&self) -> AnswerKind {
        match self {
            Self::YesNo(_) => AnswerKind::YesNo,
            Self::Platform(_) => AnswerKind::Platform,
            Self::Monetization(_) => AnswerKind::Monetization,
            Self::PermissionTiming(_) => AnswerKind::PermissionTiming,
            Self::Tag(_) => AnswerKind::Tag,
            Self::Regions(_) => AnswerKind::Regions,
            Self::Integer(_) => AnswerKind::Integer,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YesNo(answer) => f.write_str(answer.label()),
            Self::Platform(platform) => f.write_str(platform.label()),
            Self::Monetization(model) => f.write_str(model.label()),
            Self::PermissionTiming(timing) => f.write_str(timing.label()),
            Self::Tag(tag) => f.write_str(tag),
            Self::Regions(tags) => {
                let joined: Vec<&str> = tags.iter().map(String::as_str).collect();
                f.write_str(&joined.join(", "))
            }
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// Rejections raised while recording answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("question '{question}' is already answered with a different value")]
    AlreadyAnswered { question: &'static str },
    #[error("question '{question}' expects a {expected} answer")]
    TypeMismatch {
        question: &'static str,
        expected: AnswerKind,
    },
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
}

impl AnswerError {
    fn type_mismatch(question: QuestionId) -> Self {
        Self::TypeMismatch {
            question: question.key(),
            expected: question.kind(),
        }
    }
}

/// Identifier for every question the checklist asks, keyed by its JSON field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuestionId {
    Platform,
    AppType,
    TargetRegions,
    IsForKids,
    CollectsData,
    HasPrivacyPolicy,
    HasAccount,
    AccountDeletion,
    UsesEncryption,
    EncryptionExportCompliance,
    UsesThirdPartySdk,
    SdkListProvided,
    PermissionTiming,
    UsesLocation,
    LocationDisclosure,
    UsesCamera,
    CameraDisclosure,
    UsesMicrophone,
    UsesHealthData,
    HealthDataDisclaimer,
    UsesIdfa,
    HasAttPermission,
    HasUgc,
    HasUgcFiltering,
    HasReportMechanism,
    HasContactInfo,
    SocialLogin,
    HasParentalGate,
    Monetization,
    SubTermsClear,
    HasFreeTrial,
    FreeTrialClear,
    SubCancellationEasy,
    IapPriceDisplayed,
    HasRestore,
    ApiLevel,
    TargetSdkVersion,
    HasScreenshots,
    ScreenshotsReal,
    AppDescAccurate,
    AgeRatingDeclared,
}

impl QuestionId {
    pub const COUNT: usize = 41;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Platform,
            Self::AppType,
            Self::TargetRegions,
            Self::IsForKids,
            Self::CollectsData,
            Self::HasPrivacyPolicy,
            Self::HasAccount,
            Self::AccountDeletion,
            Self::UsesEncryption,
            Self::EncryptionExportCompliance,
            Self::UsesThirdPartySdk,
            Self::SdkListProvided,
            Self::PermissionTiming,
            Self::UsesLocation,
            Self::LocationDisclosure,
            Self::UsesCamera,
            Self::CameraDisclosure,
            Self::UsesMicrophone,
            Self::UsesHealthData,
            Self::HealthDataDisclaimer,
            Self::UsesIdfa,
            Self::HasAttPermission,
            Self::HasUgc,
            Self::HasUgcFiltering,
            Self::HasReportMechanism,
            Self::HasContactInfo,
            Self::SocialLogin,
            Self::HasParentalGate,
            Self::Monetization,
            Self::SubTermsClear,
            Self::HasFreeTrial,
            Self::FreeTrialClear,
            Self::SubCancellationEasy,
            Self::IapPriceDisplayed,
            Self::HasRestore,
            Self::ApiLevel,
            Self::TargetSdkVersion,
            Self::HasScreenshots,
            Self::ScreenshotsReal,
            Self::AppDescAccurate,
            Self::AgeRatingDeclared,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::AppType => "appType",
            Self::TargetRegions => "targetRegions",
            Self::IsForKids => "isForKids",
            Self::CollectsData => "collectsData",
            Self::HasPrivacyPolicy => "hasPrivacyPolicy",
            Self::HasAccount => "hasAccount",
            Self::AccountDeletion => "accountDeletion",
            Self::UsesEncryption => "usesEncryption",
            Self::EncryptionExportCompliance => "encryptionExportCompliance",
            Self::UsesThirdPartySdk => "usesThirdPartySDK",
            Self::SdkListProvided => "sdkListProvided",
            Self::PermissionTiming => "permissionTiming",
            Self::UsesLocation => "usesLocation",
            Self::LocationDisclosure => "locationDisclosure",
            Self::UsesCamera => "usesCamera",
            Self::CameraDisclosure => "cameraDisclosure",
            Self::UsesMicrophone => "usesMicrophone",
            Self::UsesHealthData => "usesHealthData",
            Self::HealthDataDisclaimer => "healthDataDisclaimer",
            Self::UsesIdfa => "usesIDFA",
            Self::HasAttPermission => "hasATTPermission",
            Self::HasUgc => "hasUGC",
            Self::HasUgcFiltering => "hasUGCFiltering",
            Self::HasReportMechanism => "hasReportMechanism",
            Self::HasContactInfo => "hasContactInfo",
            Self::SocialLogin => "socialLogin",
            Self::HasParentalGate => "hasParentalGate",
            Self::Monetization => "monetization",
            Self::SubTermsClear => "subTermsClear",
            Self::HasFreeTrial => "hasFreeTrial",
            Self::FreeTrialClear => "freeTrialClear",
            Self::SubCancellationEasy => "subCancellationEasy",
            Self::IapPriceDisplayed => "iapPriceDisplayed",
            Self::HasRestore => "hasRestore",
            Self::ApiLevel => "apiLevel",
            Self::TargetSdkVersion => "targetSdkVersion",
            Self::HasScreenshots => "hasScreenshots",
            Self::ScreenshotsReal => "screenshotsReal",
            Self::AppDescAccurate => "appDescAccurate",
            Self::AgeRatingDeclared => "ageRatingDeclared",
        }
    }

    pub const fn kind(self) -> AnswerKind {
        match self {
            Self::Platform => AnswerKind::Platform,
            Self::AppType => AnswerKind::Tag,
            Self::TargetRegions => AnswerKind::Regions,
            Self::PermissionTiming => AnswerKind::PermissionTiming,
            Self::Monetization => AnswerKind::Monetization,
            Self::ApiLevel | Self::TargetSdkVersion => AnswerKind::Integer,
            _ => AnswerKind::YesNo,
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for QuestionId {
    type Err = AnswerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|question| question.key() == trimmed)
            .ok_or_else(|| AnswerError::UnknownQuestion(trimmed.to_string()))
    }
}

impl Serialize for QuestionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
