//! Authorization Guard
//!
//! The single role check used both by the area middleware and at the start
//! of every mutating use case.

use crate::domain::entity::Session;
use crate::domain::value_object::UserType;
use crate::error::{AuthError, AuthResult};

/// Require a session of the given role
pub fn authorize(session: Option<&Session>, required: UserType) -> AuthResult<&Session> {
    let session = session.ok_or(AuthError::SessionMissing { required })?;
    require(session, required)?;
    Ok(session)
}

/// Require that an already decoded session has the given role
pub fn require(session: &Session, required: UserType) -> AuthResult<()> {
    if session.user_type == required {
        Ok(())
    } else {
        Err(AuthError::RoleMismatch {
            required,
            actual: session.user_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::{AdminId, ParentId, SchoolId};

    #[test]
    fn test_missing_session_is_rejected() {
        let err = authorize(None, UserType::Admin).unwrap_err();
        assert!(matches!(
            err,
            AuthError::SessionMissing {
                required: UserType::Admin
            }
        ));
    }

    #[test]
    fn test_role_must_match_exactly() {
        let parent = Session::parent(ParentId::new(), SchoolId::new());
        assert!(authorize(Some(&parent), UserType::Parent).is_ok());
        assert!(matches!(
            authorize(Some(&parent), UserType::School),
            Err(AuthError::RoleMismatch {
                required: UserType::School,
                actual: UserType::Parent
            })
        ));

        // admins are not implicitly allowed into other areas
        let admin = Session::admin(AdminId::new(), "admin");
        assert!(require(&admin, UserType::Admin).is_ok());
        assert!(require(&admin, UserType::School).is_err());
    }
}
