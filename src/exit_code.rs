//! Process exit codes.

use benchgen_populate::ConfigError;
use benchgen_populate_sqlite::{ErrorCategory, SQLitePopulatorError};

/// Failure with no more specific category.
pub const FAILURE: i32 = 1;
/// Invalid or unreadable configuration.
pub const CONFIG_ERROR: i32 = 2;
/// Home directory or filesystem problem.
pub const ENVIRONMENT_ERROR: i32 = 3;
/// SQLite refused an operation.
pub const STORAGE_ERROR: i32 = 4;
/// Producer pool or insert task failure.
pub const PIPELINE_ERROR: i32 = 5;
/// Read-back row counts did not match.
pub const VERIFICATION_ERROR: i32 = 6;

/// Exit code for a failed run, based on the first known error in the chain.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<SQLitePopulatorError>() {
            return match e.category() {
                ErrorCategory::Config => CONFIG_ERROR,
                ErrorCategory::Environment => ENVIRONMENT_ERROR,
                ErrorCategory::Storage => STORAGE_ERROR,
                ErrorCategory::Pipeline => PIPELINE_ERROR,
                ErrorCategory::Verification => VERIFICATION_ERROR,
            };
        }
        if let Some(e) = cause.downcast_ref::<ConfigError>() {
            return match e {
                ConfigError::HomeDirUnavailable => ENVIRONMENT_ERROR,
                _ => CONFIG_ERROR,
            };
        }
    }
    FAILURE
}
