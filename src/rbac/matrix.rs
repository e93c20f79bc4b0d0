use super::{
    Action, CasePrivileges, Crud, DocumentPrivileges, PolicyError, Resource, ResourcePrivileges,
    Role,
};

// Audit is append-only for every role; only the read flag varies.
const AUDIT_READ: Crud = Crud {
    read: true,
    create: false,
    update: false,
    delete: false,
};

pub const VIEWER: ResourcePrivileges = ResourcePrivileges {
    organizations: Crud::READ_ONLY,
    memberships: Crud::READ_ONLY,
    companies: Crud::READ_ONLY,
    cases: CasePrivileges {
        crud: Crud::READ_ONLY,
        approve: false,
        assign: false,
    },
    documents: DocumentPrivileges {
        crud: Crud::READ_ONLY,
        approve: false,
        reject: false,
        upload: false,
    },
    tasks: Crud::READ_ONLY,
    settings: Crud::READ_ONLY,
    audit: Crud::NONE,
};

pub const OPERATOR: ResourcePrivileges = ResourcePrivileges {
    organizations: Crud::READ_ONLY,
    memberships: Crud::READ_ONLY,
    companies: Crud::FULL,
    cases: CasePrivileges {
        crud: Crud::FULL,
        approve: false,
        assign: false,
    },
    documents: DocumentPrivileges {
        crud: Crud::FULL,
        approve: false,
        reject: false,
        upload: true,
    },
    tasks: Crud::FULL,
    settings: Crud::READ_ONLY,
    audit: Crud::NONE,
};

pub const MANAGER: ResourcePrivileges = ResourcePrivileges {
    organizations: Crud::READ_ONLY,
    memberships: Crud::READ_ONLY,
    companies: Crud::FULL,
    cases: CasePrivileges {
        crud: Crud::FULL,
        approve: true,
        assign: true,
    },
    documents: DocumentPrivileges {
        crud: Crud::FULL,
        approve: true,
        reject: true,
        upload: true,
    },
    tasks: Crud::FULL,
    settings: Crud::READ_ONLY,
    audit: AUDIT_READ,
};

pub const ADMIN: ResourcePrivileges = ResourcePrivileges {
    organizations: Crud::FULL,
    memberships: Crud::FULL,
    companies: Crud::FULL,
    cases: CasePrivileges {
        crud: Crud::FULL,
        approve: true,
        assign: true,
    },
    documents: DocumentPrivileges {
        crud: Crud::FULL,
        approve: true,
        reject: true,
        upload: true,
    },
    tasks: Crud::FULL,
    settings: Crud::FULL,
    audit: AUDIT_READ,
};

/// The full privilege record for `role`.
pub fn privileges(role: Role) -> &'static ResourcePrivileges {
    match role {
        Role::Viewer => &VIEWER,
        Role::Operator => &OPERATOR,
        Role::Manager => &MANAGER,
        Role::Admin => &ADMIN,
    }
}

/// Typed lookup. Fails only when `action` is outside the resource's shape.
pub fn allows(role: Role, resource: Resource, action: Action) -> Result<bool, PolicyError> {
    privileges(role)
        .get(resource, action)
        .ok_or_else(|| PolicyError::InvalidActionForResource {
            resource,
            action: action.as_str().to_string(),
        })
}

/// Whether `role` may perform `action` on `resource`.
///
/// `Ok(false)` is a denial; `Err` means the question itself was malformed.
pub fn can(role: Role, resource: Resource, action: &str) -> Result<bool, PolicyError> {
    let parsed = Action::parse(action).ok_or_else(|| PolicyError::InvalidActionForResource {
        resource,
        action: action.to_string(),
    })?;
    match allows(role, resource, parsed) {
        // keep the caller's spelling in the error
        Err(PolicyError::InvalidActionForResource { resource, .. }) => {
            Err(PolicyError::InvalidActionForResource {
                resource,
                action: action.to_string(),
            })
        }
        other => other,
    }
}

/// String boundary form of [`can`].
pub fn can_str(role: &str, resource: &str, action: &str) -> Result<bool, PolicyError> {
    let role: Role = role.parse()?;
    let resource: Resource = resource.parse()?;
    can(role, resource, action)
}

/// Turns a `false` lookup into [`PolicyError::Denied`].
pub fn require(role: Role, resource: Resource, action: Action) -> Result<(), PolicyError> {
    if allows(role, resource, action)? {
        Ok(())
    } else {
        tracing::debug!("Capability denied: {} {} {}", role, action, resource);
        Err(PolicyError::Denied {
            role,
            resource,
            action,
        })
    }
}
