use crate::error::DevsiftError;

pub fn get_exit_code(error: &DevsiftError) -> i32 {
    match error {
        DevsiftError::InvalidConfig(_)
        | DevsiftError::InvalidHeader(_)
        | DevsiftError::InvalidBuildInfo(_) => 2,

        DevsiftError::RuleTreeNotLoaded | DevsiftError::StoreNotFound(_) => 3,

        DevsiftError::InvalidRuleFile { .. } | DevsiftError::Json(_) => 4,

        DevsiftError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => 13,

        _ => 1,
    }
}
