use std::collections::HashSet;

use crate::component::descriptor::RoleId;
use crate::introspection::{IntrospectionError, TypeIntrospector};

/// Finds the roles an implementation serves.
///
/// Only interfaces are considered: the implementation's declared interfaces
/// and, transitively, their parent interfaces. Parents are visited before the
/// interface itself, so inherited roles come first. Every interface is
/// visited at most once, which keeps a role reachable through several paths
/// from being reported twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoleResolver;

impl RoleResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the roles served by `implementation`. An implementation with no
    /// role-marked interface yields an empty list.
    pub fn resolve_roles(
        &self,
        introspector: &dyn TypeIntrospector,
        implementation: &str,
    ) -> Result<Vec<RoleId>, IntrospectionError> {
        introspector.load_type(implementation)?;

        let mut visited = HashSet::new();
        let mut roles = Vec::new();
        self.walk(introspector, implementation, &mut visited, &mut roles)?;
        Ok(roles)
    }

    fn walk(
        &self,
        introspector: &dyn TypeIntrospector,
        type_name: &str,
        visited: &mut HashSet<String>,
        roles: &mut Vec<RoleId>,
    ) -> Result<(), IntrospectionError> {
        for interface in introspector.interfaces_of(type_name)? {
            if !visited.insert(interface.clone()) {
                continue;
            }
            self.walk(introspector, &interface, visited, roles)?;
            if introspector.is_role(&interface)? {
                roles.push(interface);
            }
        }
        Ok(())
    }
}
