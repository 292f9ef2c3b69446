//! Static role -> resource -> CRUD permission table for the admin dashboard.
//!
//! The table is data, not policy code: every admin route asks
//! [`require_permission`] before touching the database, and the dashboard
//! fetches the whole table once to decide which controls to render.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{errors::ApiError, models::UserRole};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Blog,
    Faq,
    Locations,
    Seo,
    Team,
    Users,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Blog,
        Resource::Faq,
        Resource::Locations,
        Resource::Seo,
        Resource::Team,
        Resource::Users,
    ];
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Blog => "blog",
            Resource::Faq => "faq",
            Resource::Locations => "locations",
            Resource::Seo => "seo",
            Resource::Team => "team",
            Resource::Users => "users",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Permissions {
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

impl Permissions {
    const fn new(can_create: bool, can_read: bool, can_update: bool, can_delete: bool) -> Self {
        Self { can_create, can_read, can_update, can_delete }
    }

    const ALL: Permissions = Permissions::new(true, true, true, true);
    const NONE: Permissions = Permissions::new(false, false, false, false);
    const READ_ONLY: Permissions = Permissions::new(false, true, false, false);

    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Create => self.can_create,
            Action::Read => self.can_read,
            Action::Update => self.can_update,
            Action::Delete => self.can_delete,
        }
    }
}

/// Look up the CRUD flags a role has on a resource.
pub const fn permissions_for(role: UserRole, resource: Resource) -> Permissions {
    match (role, resource) {
        (UserRole::Admin, _) => Permissions::ALL,

        (UserRole::Editor, Resource::Blog | Resource::Faq) => Permissions::ALL,
        (UserRole::Editor, Resource::Team) => Permissions::new(true, true, true, false),
        (UserRole::Editor, Resource::Locations | Resource::Seo) => {
            Permissions::new(false, true, true, false)
        }
        (UserRole::Editor, Resource::Users) => Permissions::NONE,

        (UserRole::Viewer, Resource::Users) => Permissions::NONE,
        (UserRole::Viewer, _) => Permissions::READ_ONLY,
    }
}

impl UserRole {
    pub fn can(&self, resource: Resource, action: Action) -> bool {
        permissions_for(*self, resource).allows(action)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResourcePermissions {
    pub resource: Resource,
    #[serde(flatten)]
    pub permissions: Permissions,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PermissionTable {
    pub role: UserRole,
    pub resources: Vec<ResourcePermissions>,
}

/// The full table for one role, in `Resource::ALL` order.
pub fn permission_table(role: UserRole) -> PermissionTable {
    PermissionTable {
        role,
        resources: Resource::ALL
            .iter()
            .map(|&resource| ResourcePermissions {
                resource,
                permissions: permissions_for(role, resource),
            })
            .collect(),
    }
}

pub fn require_permission(role: UserRole, resource: Resource, action: Action) -> Result<(), ApiError> {
    if role.can(resource, action) {
        Ok(())
    } else {
        tracing::debug!("Role {} denied {} on {}", role, action, resource);
        Err(ApiError::forbidden(format!(
            "Role '{}' may not {} {}",
            role, action, resource
        )))
    }
}
