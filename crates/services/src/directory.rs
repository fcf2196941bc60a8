use edu_core::model::{User, UserDirectory, UserId, UserRole};

/// Hard-coded users, one per role. Stands in for a real identity provider.
#[derive(Debug, Clone)]
pub struct MockUserDirectory {
    student: User,
    teacher: User,
    admin: User,
}

impl MockUserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            student: User::new(UserId::new("student123"), "শিক্ষার্থী", UserRole::Student),
            teacher: User::new(UserId::new("teacher456"), "শিক্ষক", UserRole::Teacher),
            admin: User::new(UserId::new("admin789"), "অ্যাডমিন", UserRole::Admin),
        }
    }
}

impl Default for MockUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for MockUserDirectory {
    fn user_for_role(&self, role: UserRole) -> User {
        match role {
            UserRole::Student => self.student.clone(),
            UserRole::Teacher => self.teacher.clone(),
            UserRole::Admin => self.admin.clone(),
        }
    }
}
