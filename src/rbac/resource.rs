use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PolicyError;

/// Domain nouns protected by the capability matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Organizations,
    Memberships,
    Companies,
    Cases,
    Documents,
    Tasks,
    Settings,
    Audit,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::Organizations,
        Resource::Memberships,
        Resource::Companies,
        Resource::Cases,
        Resource::Documents,
        Resource::Tasks,
        Resource::Settings,
        Resource::Audit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Organizations => "organizations",
            Resource::Memberships => "memberships",
            Resource::Companies => "companies",
            Resource::Cases => "cases",
            Resource::Documents => "documents",
            Resource::Tasks => "tasks",
            Resource::Settings => "settings",
            Resource::Audit => "audit",
        }
    }

    /// Keys of this resource's privilege shape, in declaration order.
    pub fn actions(&self) -> &'static [Action] {
        match self {
            Resource::Cases => CasePrivileges::ACTIONS,
            Resource::Documents => DocumentPrivileges::ACTIONS,
            _ => Crud::ACTIONS,
        }
    }

    pub fn supports(&self, action: Action) -> bool {
        self.actions().contains(&action)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|resource| resource.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PolicyError::UnknownResource(s.to_string()))
    }
}

/// Union of every privilege key across all shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    Approve,
    Assign,
    Reject,
    Upload,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Read,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Approve,
        Action::Assign,
        Action::Reject,
        Action::Upload,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Approve => "approve",
            Action::Assign => "assign",
            Action::Reject => "reject",
            Action::Upload => "upload",
        }
    }

    pub fn parse(s: &str) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic privilege shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crud {
    pub read: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl Crud {
    pub const ACTIONS: &'static [Action] =
        &[Action::Read, Action::Create, Action::Update, Action::Delete];

    pub const READ_ONLY: Crud = Crud {
        read: true,
        create: false,
        update: false,
        delete: false,
    };

    pub const FULL: Crud = Crud {
        read: true,
        create: true,
        update: true,
        delete: true,
    };

    pub const NONE: Crud = Crud {
        read: false,
        create: false,
        update: false,
        delete: false,
    };

    pub fn get(&self, action: Action) -> Option<bool> {
        match action {
            Action::Read => Some(self.read),
            Action::Create => Some(self.create),
            Action::Update => Some(self.update),
            Action::Delete => Some(self.delete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasePrivileges {
    #[serde(flatten)]
    pub crud: Crud,
    pub approve: bool,
    pub assign: bool,
}

impl CasePrivileges {
    pub const ACTIONS: &'static [Action] = &[
        Action::Read,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Approve,
        Action::Assign,
    ];

    pub fn get(&self, action: Action) -> Option<bool> {
        match action {
            Action::Approve => Some(self.approve),
            Action::Assign => Some(self.assign),
            _ => self.crud.get(action),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPrivileges {
    #[serde(flatten)]
    pub crud: Crud,
    pub approve: bool,
    pub reject: bool,
    pub upload: bool,
}

impl DocumentPrivileges {
    pub const ACTIONS: &'static [Action] = &[
        Action::Read,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Approve,
        Action::Reject,
        Action::Upload,
    ];

    pub fn get(&self, action: Action) -> Option<bool> {
        match action {
            Action::Approve => Some(self.approve),
            Action::Reject => Some(self.reject),
            Action::Upload => Some(self.upload),
            _ => self.crud.get(action),
        }
    }
}

/// One role's privileges over every resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePrivileges {
    pub organizations: Crud,
    pub memberships: Crud,
    pub companies: Crud,
    pub cases: CasePrivileges,
    pub documents: DocumentPrivileges,
    pub tasks: Crud,
    pub settings: Crud,
    pub audit: Crud,
}

impl ResourcePrivileges {
    /// `None` when `action` is not part of the resource's shape.
    pub fn get(&self, resource: Resource, action: Action) -> Option<bool> {
        match resource {
            Resource::Organizations => self.organizations.get(action),
            Resource::Memberships => self.memberships.get(action),
            Resource::Companies => self.companies.get(action),
            Resource::Cases => self.cases.get(action),
            Resource::Documents => self.documents.get(action),
            Resource::Tasks => self.tasks.get(action),
            Resource::Settings => self.settings.get(action),
            Resource::Audit => self.audit.get(action),
        }
    }
}
