//! Capability checks delegated to the hosting permission framework.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use nor_primitives::address::Address;
use serde::{Deserialize, Serialize};

/// The capabilities the registry asks the permission framework about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Add, rename, re-address, activate and deactivate operators; tune the penalty delay.
    ManageNodeOperator,
    /// Manage operators' signing keys.
    ManageSigningKeys,
    /// Set operators' vetted keys count.
    SetNodeOperatorLimit,
    /// Report exited/stuck/refunded counts and trigger reward distribution.
    StakingRouter,
    /// Resume the protocol after a pause.
    Resume,
}

impl Capability {
    /// Every capability.
    pub const ALL: [Capability; 5] = [
        Capability::ManageNodeOperator,
        Capability::ManageSigningKeys,
        Capability::SetNodeOperatorLimit,
        Capability::StakingRouter,
        Capability::Resume,
    ];

    /// The role name under which the permission framework knows this capability.
    pub const fn role_name(&self) -> &'static str {
        match self {
            Capability::ManageNodeOperator => "MANAGE_NODE_OPERATOR_ROLE",
            Capability::ManageSigningKeys => "MANAGE_SIGNING_KEYS",
            Capability::SetNodeOperatorLimit => "SET_NODE_OPERATOR_LIMIT_ROLE",
            Capability::StakingRouter => "STAKING_ROUTER_ROLE",
            Capability::Resume => "RESUME_ROLE",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.role_name())
    }
}

/// Pass/fail "caller has capability X" check.
pub trait Authorizer {
    /// Returns `true` if `caller` holds `capability`.
    fn has_capability(&self, caller: &Address, capability: Capability) -> bool;
}

impl<A: Authorizer + ?Sized> Authorizer for &A {
    fn has_capability(&self, caller: &Address, capability: Capability) -> bool {
        (**self).has_capability(caller, capability)
    }
}

impl<A: Authorizer + ?Sized> Authorizer for Arc<A> {
    fn has_capability(&self, caller: &Address, capability: Capability) -> bool {
        (**self).has_capability(caller, capability)
    }
}

impl<A: Authorizer + ?Sized> Authorizer for Box<A> {
    fn has_capability(&self, caller: &Address, capability: Capability) -> bool {
        (**self).has_capability(caller, capability)
    }
}

/// A single capability and the accounts holding it, as it appears in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    /// The granted capability.
    pub capability: Capability,
    /// The accounts holding it.
    #[serde(default)]
    pub members: BTreeSet<Address>,
}

/// An in-memory access control list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RoleGrant>", into = "Vec<RoleGrant>")]
pub struct AccessControlList {
    grants: BTreeMap<Capability, BTreeSet<Address>>,
}

impl AccessControlList {
    /// Creates an empty list in which nobody holds anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `capability` to `account` and returns the list.
    pub fn with_grant(mut self, capability: Capability, account: Address) -> Self {
        self.grant(capability, account);
        self
    }

    /// Grants `capability` to `account`. Returns `false` if it was already granted.
    pub fn grant(&mut self, capability: Capability, account: Address) -> bool {
        self.grants.entry(capability).or_default().insert(account)
    }

    /// Revokes `capability` from `account`. Returns `false` if it was not granted.
    pub fn revoke(&mut self, capability: Capability, account: &Address) -> bool {
        self.grants
            .get_mut(&capability)
            .is_some_and(|members| members.remove(account))
    }

    /// Returns the accounts holding `capability`.
    pub fn members(&self, capability: Capability) -> impl Iterator<Item = &Address> {
        self.grants.get(&capability).into_iter().flatten()
    }
}

impl Authorizer for AccessControlList {
    fn has_capability(&self, caller: &Address, capability: Capability) -> bool {
        self.grants
            .get(&capability)
            .is_some_and(|members| members.contains(caller))
    }
}

impl From<Vec<RoleGrant>> for AccessControlList {
    fn from(grants: Vec<RoleGrant>) -> Self {
        let mut acl = AccessControlList::new();
        for grant in grants {
            for member in grant.members {
                acl.grant(grant.capability, member);
            }
        }
        acl
    }
}

impl From<AccessControlList> for Vec<RoleGrant> {
    fn from(acl: AccessControlList) -> Self {
        acl.grants
            .into_iter()
            .map(|(capability, members)| RoleGrant {
                capability,
                members,
            })
            .collect()
    }
}
