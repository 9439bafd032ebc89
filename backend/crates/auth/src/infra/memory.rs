//! In-memory repository used by the use case tests

use std::sync::Mutex;

use chrono::Utc;
use kernel::id::{AdminId, ParentId};

use crate::domain::entity::{Admin, Parent, SchoolCredential};
use crate::domain::repository::{AdminRepository, ParentRepository, SchoolCredentialRepository};
use crate::domain::value_object::{AccessCode, TcNo};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
pub(crate) struct MemoryAuthRepository {
    pub admins: Mutex<Vec<Admin>>,
    pub schools: Mutex<Vec<SchoolCredential>>,
    pub parents: Mutex<Vec<Parent>>,
}

impl MemoryAuthRepository {
    pub fn with_school(self, school: SchoolCredential) -> Self {
        self.schools.lock().unwrap().push(school);
        self
    }

    pub fn with_admin(self, admin: Admin) -> Self {
        self.admins.lock().unwrap().push(admin);
        self
    }

    pub fn admin_count(&self) -> usize {
        self.admins.lock().unwrap().len()
    }

    pub fn parent_count(&self) -> usize {
        self.parents.lock().unwrap().len()
    }
}

impl AdminRepository for MemoryAuthRepository {
    async fn find_admin_by_username(&self, username: &str) -> AuthResult<Option<Admin>> {
        let admins = self.admins.lock().unwrap();
        Ok(admins.iter().find(|a| a.username == username).cloned())
    }

    async fn list_admins(&self) -> AuthResult<Vec<Admin>> {
        let mut admins = self.admins.lock().unwrap().clone();
        admins.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(admins)
    }

    async fn count_admins(&self) -> AuthResult<i64> {
        Ok(self.admins.lock().unwrap().len() as i64)
    }

    async fn create_admin(&self, admin: &Admin) -> AuthResult<()> {
        let mut admins = self.admins.lock().unwrap();
        if admins.iter().any(|a| a.username == admin.username) {
            return Err(AuthError::UsernameTaken);
        }
        admins.push(admin.clone());
        Ok(())
    }

    async fn create_first_admin(&self, admin: &Admin) -> AuthResult<bool> {
        let mut admins = self.admins.lock().unwrap();
        if !admins.is_empty() {
            return Ok(false);
        }
        admins.push(admin.clone());
        Ok(true)
    }

    async fn delete_admin(&self, admin_id: &AdminId) -> AuthResult<bool> {
        let mut admins = self.admins.lock().unwrap();
        if admins.len() <= 1 {
            return Ok(false);
        }
        let before = admins.len();
        admins.retain(|a| a.admin_id != *admin_id);
        Ok(admins.len() != before)
    }

    async fn update_admin_password(&self, admin_id: &AdminId, password: &str) -> AuthResult<bool> {
        let mut admins = self.admins.lock().unwrap();
        match admins.iter_mut().find(|a| a.admin_id == *admin_id) {
            Some(admin) => {
                admin.password = password.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl SchoolCredentialRepository for MemoryAuthRepository {
    async fn find_school_by_login(
        &self,
        username: &str,
        access_code: &AccessCode,
    ) -> AuthResult<Option<SchoolCredential>> {
        let schools = self.schools.lock().unwrap();
        Ok(schools
            .iter()
            .find(|s| s.username == username || s.access_code == access_code.as_str())
            .cloned())
    }

    async fn find_school_by_access_code(
        &self,
        access_code: &AccessCode,
    ) -> AuthResult<Option<SchoolCredential>> {
        let schools = self.schools.lock().unwrap();
        Ok(schools
            .iter()
            .find(|s| s.access_code == access_code.as_str())
            .cloned())
    }
}

impl ParentRepository for MemoryAuthRepository {
    async fn find_or_create_parent(&self, tc_no: &TcNo) -> AuthResult<Parent> {
        let mut parents = self.parents.lock().unwrap();
        if let Some(parent) = parents.iter().find(|p| p.tc_no == tc_no.as_str()) {
            return Ok(parent.clone());
        }
        let parent = Parent {
            parent_id: ParentId::new(),
            tc_no: tc_no.as_str().to_string(),
            name: None,
            phone: None,
            created_at: Utc::now(),
        };
        parents.push(parent.clone());
        Ok(parent)
    }
}
