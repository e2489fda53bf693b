use crate::model::{entity::Access, role::Role};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, error::ErrorUnauthorized};
use futures::future::{Ready, ready};

/// The caller, as established by `auth_middleware`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: u64,
    pub username: String,
    pub role: Role,

    /// Present only if this user is linked to an employee record
    pub employee_id: Option<u64>,
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthUser>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("Missing token")),
        )
    }
}

impl AuthUser {
    pub fn require_admin(&self) -> actix_web::Result<()> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(actix_web::error::ErrorForbidden("Admin only"))
        }
    }

    pub fn require_hr_or_admin(&self) -> actix_web::Result<()> {
        if matches!(self.role, Role::Admin | Role::Hr) {
            Ok(())
        } else {
            Err(actix_web::error::ErrorForbidden("HR/Admin only"))
        }
    }

    pub fn require(&self, access: Access) -> actix_web::Result<()> {
        match access {
            Access::Authenticated => Ok(()),
            Access::HrOrAdmin => self.require_hr_or_admin(),
            Access::Admin => self.require_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> AuthUser {
        AuthUser {
            user_id: 1,
            username: "tester".into(),
            role,
            employee_id: None,
        }
    }

    #[test]
    fn access_levels() {
        assert!(user(Role::Employee).require(Access::Authenticated).is_ok());
        assert!(user(Role::Employee).require(Access::HrOrAdmin).is_err());
        assert!(user(Role::Hr).require(Access::HrOrAdmin).is_ok());
        assert!(user(Role::Hr).require(Access::Admin).is_err());
        assert!(user(Role::Admin).require(Access::Admin).is_ok());
    }
}
