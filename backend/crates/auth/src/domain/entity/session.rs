//! Session Record
//!
//! The role-tagged record carried in the session cookie.

use kernel::id::{AdminId, ParentId, SchoolId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_object::UserType;

/// Decoded session cookie
///
/// Serialized as `{userId, userType, schoolId?, username?}`.
/// `user_id` points at an admin, a school or a parent depending on `user_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: Uuid,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<SchoolId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Session {
    pub fn admin(admin_id: AdminId, username: impl Into<String>) -> Self {
        Self {
            user_id: admin_id.into_uuid(),
            user_type: UserType::Admin,
            school_id: None,
            username: Some(username.into()),
        }
    }

    pub fn school(school_id: SchoolId) -> Self {
        Self {
            user_id: school_id.into_uuid(),
            user_type: UserType::School,
            school_id: None,
            username: None,
        }
    }

    /// Parent sessions remember the school whose code was used to log in
    pub fn parent(parent_id: ParentId, school_id: SchoolId) -> Self {
        Self {
            user_id: parent_id.into_uuid(),
            user_type: UserType::Parent,
            school_id: Some(school_id),
            username: None,
        }
    }

    pub fn admin_id(&self) -> Option<AdminId> {
        (self.user_type == UserType::Admin).then(|| AdminId::from_uuid(self.user_id))
    }

    pub fn parent_id(&self) -> Option<ParentId> {
        (self.user_type == UserType::Parent).then(|| ParentId::from_uuid(self.user_id))
    }

    /// School the session acts for: the school itself, or the parent's login school
    pub fn tenant_school_id(&self) -> Option<SchoolId> {
        match self.user_type {
            UserType::School => Some(SchoolId::from_uuid(self.user_id)),
            UserType::Parent => self.school_id,
            UserType::Admin => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let school_id = SchoolId::new();
        let parent_id = ParentId::new();
        let session = Session::parent(parent_id, school_id);
        let json: serde_json::Value = serde_json::to_value(&session).unwrap();
        assert_eq!(json["userId"], parent_id.to_string());
        assert_eq!(json["userType"], "parent");
        assert_eq!(json["schoolId"], school_id.to_string());
        assert!(json.get("username").is_none());
    }

    #[test]
    fn test_typed_accessors() {
        let school_id = SchoolId::new();
        let session = Session::school(school_id);
        assert_eq!(session.tenant_school_id(), Some(school_id));
        assert_eq!(session.admin_id(), None);
        assert_eq!(session.parent_id(), None);

        let admin = Session::admin(AdminId::new(), "admin");
        assert!(admin.admin_id().is_some());
        assert_eq!(admin.tenant_school_id(), None);
    }
}
