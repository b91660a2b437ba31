//! Metadata key and value constants shared by the parser, normalizer and applier.
//! These tables are fixed for the life of the process and never mutated.

/// Separator between key and value in extracted metadata entries (`KEY|VALUE`)
pub const METADATA_DELIMITER: char = '|';

// Canonical assessment metadata keys understood by the assessment record
pub const AUTHORS: &str = "ASSESSMENT_AUTHORS";
pub const KEYWORDS: &str = "ASSESSMENT_KEYWORDS";
pub const OBJECTIVES: &str = "ASSESSMENT_OBJECTIVES";
pub const RUBRICS: &str = "ASSESSMENT_RUBRICS";
pub const BGCOLOR: &str = "ASSESSMENT_BGCOLOR";
pub const BGIMAGE: &str = "ASSESSMENT_BGIMAGE";
pub const HAS_METADATA_FOR_QUESTIONS: &str = "hasMetaDataForQuestions";

// Legacy spellings found in older exports
pub const LEGACY_AUTHORS: &str = "AUTHORS";
pub const LEGACY_KEYWORDS: &str = "ASSESSMENT_KEYWORDS";
pub const LEGACY_OBJECTIVES: &str = "ASSESSMENT_OBJECTIVES";
pub const LEGACY_RUBRICS: &str = "ASSESSMENT_RUBRICS";
pub const LEGACY_BGCOLOR: &str = "BGCOLOR";
pub const LEGACY_BGIMAGE: &str = "BGIMG";
pub const LEGACY_COLLECT_ITEM_METADATA: &str = "COLLECT_ITEM_METADATA";

/// Legacy key spelling -> canonical assessment key, in lookup order.
///
/// Some legacy spellings already equal their canonical name; they are kept
/// so the table documents every key older exports are known to carry.
pub const LEGACY_KEY_MAP: &[(&str, &str)] = &[
    (LEGACY_AUTHORS, AUTHORS),
    (LEGACY_KEYWORDS, KEYWORDS),
    (LEGACY_OBJECTIVES, OBJECTIVES),
    (LEGACY_RUBRICS, RUBRICS),
    (LEGACY_BGCOLOR, BGCOLOR),
    (LEGACY_BGIMAGE, BGIMAGE),
    (LEGACY_COLLECT_ITEM_METADATA, HAS_METADATA_FOR_QUESTIONS),
];

/// Key carrying the audience an assessment is released to
pub const RELEASED_TO_KEY: &str = "ASSESSMENT_RELEASED_TO";
/// Obsolete released-to audience written by 1.5-era exports
pub const AUTHENTICATED_USERS: &str = "Authenticated Users";
/// Canonical released-to audience that replaces the obsolete one
pub const ANONYMOUS: &str = "Anonymous Users";

/// Template linkage never carries across systems, so it is always seeded off
pub const TEMPLATE_INFO_EDITABLE_KEY: &str = "templateInfo_isInstructorEditable";

pub const FLAG_TRUE: &str = "true";
pub const FLAG_FALSE: &str = "false";

/// Assessment settings an instructor may edit after import, in seeding order
pub const EDITABLE_KEYS: &[&str] = &[
    "assessmentAuthor_isInstructorEditable",
    "assessmentCreator_isInstructorEditable",
    "description_isInstructorEditable",
    "dueDate_isInstructorEditable",
    "retractDate_isInstructorEditable",
    "anonymousRelease_isInstructorEditable",
    "authenticatedRelease_isInstructorEditable",
    "ipAccessType_isInstructorEditable",
    "passwordRequired_isInstructorEditable",
    "timedAssessment_isInstructorEditable",
    "timedAssessmentAutoSubmit_isInstructorEditable",
    "itemAccessType_isInstructorEditable",
    "displayChunking_isInstructorEditable",
    "displayNumbering_isInstructorEditable",
    "submissionModel_isInstructorEditable",
    "lateHandling_isInstructorEditable",
    "autoSave_isInstructorEditable",
    "submissionMessage_isInstructorEditable",
    "finalPageURL_isInstructorEditable",
    "feedbackType_isInstructorEditable",
    "feedbackAuthoring_isInstructorEditable",
    "feedbackComponents_isInstructorEditable",
    "testeeIdentity_isInstructorEditable",
    "toGradebook_isInstructorEditable",
    "recordedScore_isInstructorEditable",
    "bgColor_isInstructorEditable",
    "bgImage_isInstructorEditable",
    "metadataAssess_isInstructorEditable",
    "metadataParts_isInstructorEditable",
    "metadataQuestions_isInstructorEditable",
];

/// Metric target label for the item path
pub const TARGET_ITEM: &str = "item";
/// Metric target label for the assessment path
pub const TARGET_ASSESSMENT: &str = "assessment";
