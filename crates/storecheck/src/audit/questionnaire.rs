//! Step layout of the checklist and the follow-up dependencies between questions.
//!
//! Applicability only guides collection. The scoring engine never consults it, so a
//! dependent answer recorded without its parent is still evaluated on its own terms.

use serde::Serialize;

use super::answers::{AnswerKind, AnswerSet, QuestionId};
use super::domain::{Monetization, YesNo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireStep {
    BasicInfo,
    PrivacyData,
    Permissions,
    ContentSafety,
    Monetization,
    TechMetadata,
    Review,
}

impl QuestionnaireStep {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::BasicInfo,
            Self::PrivacyData,
            Self::Permissions,
            Self::ContentSafety,
            Self::Monetization,
            Self::TechMetadata,
            Self::Review,
        ]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::PrivacyData => 2,
            Self::Permissions => 3,
            Self::ContentSafety => 4,
            Self::Monetization => 5,
            Self::TechMetadata => 6,
            Self::Review => 7,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::PrivacyData => "Privacy & Data Collection",
            Self::Permissions => "Permissions & Disclosures",
            Self::ContentSafety => "Content & Safety",
            Self::Monetization => "Monetization & Subscriptions",
            Self::TechMetadata => "Technical & Metadata",
            Self::Review => "Review & Submit",
        }
    }

    pub fn questions(self) -> Vec<QuestionId> {
        QuestionId::ordered()
            .into_iter()
            .filter(|question| question.step() == self)
            .collect()
    }
}

impl QuestionId {
    pub const fn step(self) -> QuestionnaireStep {
        match self {
            Self::Platform | Self::AppType | Self::TargetRegions | Self::IsForKids => {
                QuestionnaireStep::BasicInfo
            }
            Self::CollectsData
            | Self::HasPrivacyPolicy
            | Self::HasAccount
            | Self::AccountDeletion
            | Self::UsesEncryption
            | Self::EncryptionExportCompliance
            | Self::UsesThirdPartySdk
            | Self::SdkListProvided => QuestionnaireStep::PrivacyData,
            Self::PermissionTiming
            | Self::UsesLocation
            | Self::LocationDisclosure
            | Self::UsesCamera
            | Self::CameraDisclosure
            | Self::UsesMicrophone
            | Self::UsesHealthData
            | Self::HealthDataDisclaimer
            | Self::UsesIdfa
            | Self::HasAttPermission => QuestionnaireStep::Permissions,
            Self::HasUgc
            | Self::HasUgcFiltering
            | Self::HasReportMechanism
            | Self::HasContactInfo
            | Self::SocialLogin
            | Self::HasParentalGate => QuestionnaireStep::ContentSafety,
            Self::Monetization
            | Self::SubTermsClear
            | Self::HasFreeTrial
            | Self::FreeTrialClear
            | Self::SubCancellationEasy
            | Self::IapPriceDisplayed
            | Self::HasRestore => QuestionnaireStep::Monetization,
            Self::ApiLevel
            | Self::TargetSdkVersion
            | Self::HasScreenshots
            | Self::ScreenshotsReal
            | Self::AppDescAccurate
            | Self::AgeRatingDeclared => QuestionnaireStep::TechMetadata,
        }
    }

    /// Whether the question should be asked given what is already known.
    pub fn is_applicable(self, answers: &AnswerSet) -> bool {
        let answered_yes = |answer: Option<YesNo>| answer == Some(YesNo::Yes);
        let collects_data = answered_yes(answers.collects_data);

        match self {
            Self::HasPrivacyPolicy | Self::HasAccount | Self::UsesEncryption | Self::UsesThirdPartySdk => {
                collects_data
            }
            Self::AccountDeletion => collects_data && answered_yes(answers.has_account),
            Self::EncryptionExportCompliance => {
                collects_data && answered_yes(answers.uses_encryption)
            }
            Self::SdkListProvided => collects_data && answered_yes(answers.uses_third_party_sdk),
            Self::LocationDisclosure => answered_yes(answers.uses_location),
            Self::CameraDisclosure => answered_yes(answers.uses_camera),
            Self::HealthDataDisclaimer => answered_yes(answers.uses_health_data),
            Self::UsesIdfa => answers.targets_ios(),
            Self::HasAttPermission => answers.targets_ios() && answered_yes(answers.uses_idfa),
            Self::HasUgcFiltering | Self::HasReportMechanism => answered_yes(answers.has_ugc),
            Self::HasParentalGate => answered_yes(answers.is_for_kids),
            Self::SubTermsClear | Self::HasFreeTrial | Self::SubCancellationEasy => {
                answers.monetization_is(Monetization::Sub)
            }
            Self::FreeTrialClear => {
                answers.monetization_is(Monetization::Sub)
                    && answered_yes(answers.has_free_trial)
            }
            Self::IapPriceDisplayed | Self::HasRestore => answers.sells_in_app(),
            Self::ApiLevel | Self::TargetSdkVersion => answers.targets_android(),
            Self::ScreenshotsReal => answered_yes(answers.has_screenshots),
            _ => true,
        }
    }
}

/// Serializable outline of one step for API and CLI listings.
#[derive(Debug, Clone, Serialize)]
pub struct StepOutline {
    pub step: QuestionnaireStep,
    pub number: u8,
    pub label: &'static str,
    pub questions: Vec<QuestionOutline>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionOutline {
    pub key: QuestionId,
    pub kind: AnswerKind,
    pub applicable: bool,
    pub answered: bool,
}

/// Outline every step against the given answers.
pub fn outline(answers: &AnswerSet) -> Vec<StepOutline> {
    QuestionnaireStep::ordered()
        .into_iter()
        .map(|step| StepOutline {
            step,
            number: step.number(),
            label: step.label(),
            questions: step
                .questions()
                .into_iter()
                .map(|question| QuestionOutline {
                    key: question,
                    kind: question.kind(),
                    applicable: question.is_applicable(answers),
                    answered: answers.answer(question).is_some(),
                })
                .collect(),
        })
        .collect()
}

/// Applicable questions that still have no answer, in step order.
pub fn pending_questions(answers: &AnswerSet) -> Vec<QuestionId> {
    QuestionId::ordered()
        .into_iter()
        .filter(|question| question.is_applicable(answers) && answers.answer(*question).is_none())
        .collect()
}
