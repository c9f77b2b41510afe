//! Static route table for the user-management UI
//!
//! Two pages nested under a layout shell: the default user list and the
//! add/edit form, which takes an optional user id. Purely declarative data
//! for whatever front-end framework hosts this layer; no dispatch happens
//! here.

use serde::Serialize;

/// A single route definition.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDef {
    /// Path pattern relative to the parent route. `:id?` marks an optional
    /// parameter.
    pub path: &'static str,
    /// Route name used by the UI for navigation, when the route is named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    /// Identifier of the view component the host framework should mount.
    pub component: &'static str,
    /// Child routes rendered inside this route's outlet.
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub children: &'static [RouteDef],
}

/// Route name of the default list view.
pub const ROUTE_LIST_USERS: &str = "list-users";

/// Route name of the add/edit form.
pub const ROUTE_ADD_USER: &str = "add-user";

const CHILDREN: &[RouteDef] = &[
    RouteDef {
        path: "",
        name: Some(ROUTE_LIST_USERS),
        component: "ListUsers",
        children: &[],
    },
    RouteDef {
        path: "add-user/:id?",
        name: Some(ROUTE_ADD_USER),
        component: "AddUser",
        children: &[],
    },
];

const ROUTES: &[RouteDef] = &[RouteDef {
    path: "/",
    name: None,
    component: "MainLayout",
    children: CHILDREN,
}];

/// The application's route table.
pub const fn routes() -> &'static [RouteDef] {
    ROUTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_a_single_layout_shell() {
        let table = routes();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].path, "/");
        assert_eq!(table[0].component, "MainLayout");
        assert_eq!(table[0].children.len(), 2);
    }

    #[test]
    fn default_child_is_the_list_view() {
        let shell = &routes()[0];
        let default = &shell.children[0];
        assert_eq!(default.path, "");
        assert_eq!(default.name, Some(ROUTE_LIST_USERS));
    }

    #[test]
    fn add_user_route_takes_an_optional_id() {
        let shell = &routes()[0];
        let add = &shell.children[1];
        assert_eq!(add.path, "add-user/:id?");
        assert_eq!(add.name, Some(ROUTE_ADD_USER));
    }

    #[test]
    fn serializes_for_the_host_framework() {
        let json = serde_json::to_value(routes()).unwrap();
        assert_eq!(json[0]["children"][1]["name"], "add-user");
        // Unnamed routes omit the field entirely.
        assert!(json[0].get("name").is_none());
    }
}
