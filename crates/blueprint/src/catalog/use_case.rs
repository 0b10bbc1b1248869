//! UML use-case diagram of Fix Citizen.
//!
//! Four actors sit outside the system boundary. Inside it, use cases are
//! grouped by feature area. Relations come in three kinds:
//!
//! - association: solid black line from an actor to a use case it performs;
//! - include: blue dashed `include` edge from a use case to one it always runs;
//! - extend: green dashed `extend` edge declared from the base use case to the
//!   extension and drawn with [`EdgeDirection::Back`], so the arrowhead lands
//!   on the base as UML requires.
//!
//! Associations are listed per actor; a use case shared by several actors
//! gets one edge per actor.

use blueprint_core::{
    DiagramError,
    diagram::{ClusterScope, Diagram, EdgeAttributes, NodeKind},
    stroke::{Direction, EdgeDirection, LineStyle},
};

use super::color;

pub const TITLE: &str = "Infrastructure Fix Citizen - Use Case Diagram";

/// `(key, label)` pairs declared inside one feature cluster.
type UseCases = &'static [(&'static str, &'static str)];

const AUTHENTICATION: UseCases = &[
    ("register", "Register Account"),
    ("login", "Login"),
    ("logout", "Logout"),
    ("view_profile", "View Profile"),
    ("update_profile", "Update Profile"),
];

const CITIZEN_FEATURES: UseCases = &[
    ("report_issue", "Report Issue"),
    ("report_offline", "Report Issue\n(Offline)"),
    ("instant_report", "Instant Report"),
    ("view_my_reports", "View My Reports"),
    ("view_all_issues", "View All Issues"),
    ("view_issue_details", "View Issue Details"),
    ("upvote_issue", "Upvote Issue"),
    ("add_comment", "Add Comment"),
    ("view_map", "View Map"),
    ("track_status", "Track Status"),
    ("view_analytics", "View Analytics"),
    ("edit_own_issue", "Edit Own Issue"),
    ("delete_own_issue", "Delete Own Issue"),
];

const ADMIN_FEATURES: UseCases = &[
    ("admin_dashboard", "Admin Dashboard"),
    ("manage_all_issues", "Manage All Issues"),
    ("update_issue_status", "Update Status"),
    ("assign_issue", "Assign Issue"),
    ("categorize_issue", "Categorize Issue"),
    ("delete_any_issue", "Delete Any Issue"),
    ("admin_analytics", "Analytics & Reports"),
    ("generate_report", "Generate Report"),
    ("export_data", "Export Data"),
    ("manage_users", "Manage Users"),
    ("view_statistics", "System Statistics"),
];

const MODERATOR_FEATURES: UseCases = &[
    ("moderate_content", "Moderate Content"),
    ("moderate_issues", "Moderate Issues"),
    ("moderate_comments", "Moderate Comments"),
    ("update_status_mod", "Update Status"),
];

const PUBLIC_FEATURES: UseCases = &[
    ("view_landing", "View Landing Page"),
    ("view_public_issues", "View Public Issues"),
    ("browse_issues", "Browse Issues"),
];

const CITIZEN_ASSOCIATIONS: &[&str] = &[
    "register",
    "login",
    "logout",
    "view_profile",
    "update_profile",
    "report_issue",
    "report_offline",
    "instant_report",
    "view_my_reports",
    "view_all_issues",
    "view_issue_details",
    "upvote_issue",
    "add_comment",
    "view_map",
    "track_status",
    "view_analytics",
    "edit_own_issue",
    "delete_own_issue",
];

const ADMIN_ASSOCIATIONS: &[&str] = &[
    "login",
    "logout",
    "view_profile",
    "admin_dashboard",
    "manage_all_issues",
    "update_issue_status",
    "assign_issue",
    "categorize_issue",
    "delete_any_issue",
    "admin_analytics",
    "generate_report",
    "export_data",
    "manage_users",
    "view_statistics",
    "view_all_issues",
    "view_map",
];

const MODERATOR_ASSOCIATIONS: &[&str] = &[
    "login",
    "logout",
    "view_profile",
    "moderate_content",
    "moderate_issues",
    "moderate_comments",
    "update_status_mod",
    "view_all_issues",
    "add_comment",
];

const GUEST_ASSOCIATIONS: &[&str] = &[
    "view_landing",
    "view_public_issues",
    "browse_issues",
    "register",
];

/// `(dependent, included)` pairs.
const INCLUDES: &[(&str, &str)] = &[
    ("report_issue", "login"),
    ("view_my_reports", "login"),
    ("admin_dashboard", "login"),
    ("moderate_content", "login"),
];

/// `(base, extension)` pairs.
const EXTENDS: &[(&str, &str)] = &[
    ("view_all_issues", "view_issue_details"),
    ("view_all_issues", "view_map"),
    ("view_issue_details", "add_comment"),
    ("view_issue_details", "upvote_issue"),
];

/// Builds the use-case diagram.
///
/// # Errors
///
/// Returns a [`DiagramError`] if a declaration is inconsistent.
pub fn diagram() -> Result<Diagram, DiagramError> {
    let mut diagram = Diagram::new(TITLE, Direction::LeftToRight);

    diagram.cluster("Actors", |actors| {
        actors.node("citizen", "Citizen", NodeKind::ActorGroup)?;
        actors.node("admin", "Administrator", NodeKind::Actor)?;
        actors.node("moderator", "Moderator", NodeKind::Actor)?;
        actors.node("guest", "Guest", NodeKind::Actor)?;
        Ok(())
    })?;

    diagram.cluster("Citizn System", |system| {
        feature_area(system, "Authentication", AUTHENTICATION)?;
        feature_area(system, "Citizen Features", CITIZEN_FEATURES)?;
        feature_area(system, "Admin Features", ADMIN_FEATURES)?;
        feature_area(system, "Moderator Features", MODERATOR_FEATURES)?;
        feature_area(system, "Public Features", PUBLIC_FEATURES)
    })?;

    let associations = [
        ("citizen", CITIZEN_ASSOCIATIONS),
        ("admin", ADMIN_ASSOCIATIONS),
        ("moderator", MODERATOR_ASSOCIATIONS),
        ("guest", GUEST_ASSOCIATIONS),
    ];
    for (actor, use_cases) in associations {
        for &use_case in use_cases {
            diagram.connect(actor, use_case, association()?)?;
        }
    }

    for &(dependent, included) in INCLUDES {
        diagram.connect(dependent, included, include()?)?;
    }

    for &(base, extension) in EXTENDS {
        diagram.connect(base, extension, extend()?)?;
    }

    Ok(diagram)
}

fn feature_area(
    system: &mut ClusterScope<'_>,
    label: &str,
    use_cases: UseCases,
) -> Result<(), DiagramError> {
    system.cluster(label, |area| {
        for &(key, name) in use_cases {
            area.node(key, name, NodeKind::UseCase)?;
        }
        Ok(())
    })
}

fn association() -> Result<EdgeAttributes, DiagramError> {
    Ok(EdgeAttributes::new().color(color("black")?))
}

fn include() -> Result<EdgeAttributes, DiagramError> {
    Ok(EdgeAttributes::new()
        .label("include")
        .style(LineStyle::Dashed)
        .color(color("blue")?))
}

fn extend() -> Result<EdgeAttributes, DiagramError> {
    Ok(EdgeAttributes::new()
        .label("extend")
        .style(LineStyle::Dashed)
        .color(color("green")?)
        .direction(EdgeDirection::Back))
}
