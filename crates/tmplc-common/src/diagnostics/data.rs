use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_messages {
    pub const IMPORT_PATH_MUST_BE_A_STRING_LITERAL: &str = "Import path must be a string literal.";
    pub const INTERNAL_COMPILER_ERROR: &str = "Internal compiler error: {0}";
}

pub mod diagnostic_codes {
    pub const IMPORT_PATH_MUST_BE_A_STRING_LITERAL: u32 = 1001;
    pub const INTERNAL_COMPILER_ERROR: u32 = 9001;
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::IMPORT_PATH_MUST_BE_A_STRING_LITERAL,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::IMPORT_PATH_MUST_BE_A_STRING_LITERAL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INTERNAL_COMPILER_ERROR,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INTERNAL_COMPILER_ERROR,
    },
];
