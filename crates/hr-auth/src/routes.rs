use crate::Role;

use std::collections::BTreeMap;

/// Who may open a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Allowed roles; an empty set admits any authenticated role.
    Protected(Vec<Role>),
}

impl RouteAccess {
    pub fn authenticated() -> Self {
        RouteAccess::Protected(Vec::new())
    }

    pub fn roles(roles: &[Role]) -> Self {
        RouteAccess::Protected(roles.to_vec())
    }
}

/// Console views a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    Signup,
    Overview,
    Profile,
    Employees,
    NewEmployee,
    EditEmployee,
    PersonnelProfile,
    Attendance,
    AttendanceRoster,
    Leaves,
    PendingLeaves,
    Departments,
    NewDepartment,
    DepartmentDetail,
    EditDepartment,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: &'static str,
    pub view: View,
    pub access: RouteAccess,
}

impl Route {
    pub fn new(pattern: &'static str, view: View, access: RouteAccess) -> Self {
        Self {
            pattern,
            view,
            access,
        }
    }

    /// Matches `path` against the pattern; `:name` segments capture one
    /// non-empty segment each.
    fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let pattern_segments = segments(self.pattern);
        let path_segments = segments(path);

        if pattern_segments.len() != path_segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (expected, actual) in pattern_segments.iter().zip(path_segments.iter()) {
            if let Some(name) = expected.strip_prefix(':') {
                params.insert(name.to_string(), (*actual).to_string());
            } else if expected != actual {
                return None;
            }
        }

        Some(params)
    }
}

/// A resolved route plus captured path parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch<'_> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered route declarations; the first match wins, so static segments are
/// declared before parameterized siblings.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    not_found: Route,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            routes,
            not_found: Route::new("*", View::NotFound, RouteAccess::Public),
        }
    }

    /// The HR console's navigation surface.
    pub fn console() -> Self {
        use Role::{Admin, Hr};

        let staff = || RouteAccess::roles(&[Admin, Hr]);

        Self::new(vec![
            Route::new("/", View::Home, RouteAccess::Public),
            Route::new("/login", View::Login, RouteAccess::Public),
            Route::new("/signup", View::Signup, RouteAccess::Public),
            Route::new("/view", View::Overview, RouteAccess::authenticated()),
            Route::new("/profile", View::Profile, RouteAccess::authenticated()),
            Route::new("/attendance", View::Attendance, RouteAccess::authenticated()),
            Route::new("/leaves", View::Leaves, RouteAccess::authenticated()),
            Route::new("/view/employees", View::Employees, staff()),
            Route::new("/employee", View::NewEmployee, staff()),
            Route::new("/employee/:id", View::EditEmployee, staff()),
            Route::new("/personnel/:id", View::PersonnelProfile, staff()),
            Route::new("/attendance/all", View::AttendanceRoster, staff()),
            Route::new("/leaves/pending", View::PendingLeaves, staff()),
            Route::new("/departments", View::Departments, staff()),
            Route::new(
                "/departments/new",
                View::NewDepartment,
                RouteAccess::roles(&[Admin]),
            ),
            Route::new("/departments/:name", View::DepartmentDetail, staff()),
            Route::new(
                "/departments/:name/edit",
                View::EditDepartment,
                RouteAccess::roles(&[Admin]),
            ),
        ])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolves a location; unknown paths land on the public not-found view.
    pub fn resolve(&self, location: &str) -> RouteMatch<'_> {
        let path = strip_query(location);

        self.routes
            .iter()
            .find_map(|route| route.matches(path).map(|params| RouteMatch { route, params }))
            .unwrap_or_else(|| RouteMatch {
                route: &self.not_found,
                params: BTreeMap::new(),
            })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::console()
    }
}

fn strip_query(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
