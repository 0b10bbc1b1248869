//! System architecture of Fix Citizen.
//!
//! Users reach the React PWA, which caches reports offline in IndexedDB,
//! renders maps with Leaflet, geocodes through Geoapify and talks to the
//! Supabase backend (auth, Postgres, storage, edge functions).

use std::path::Path;

use blueprint_core::{
    DiagramError,
    diagram::{Diagram, EdgeAttributes, NodeKind},
    stroke::{Direction, LineStyle},
};

use super::{GEOAPIFY_ICON, LEAFLET_ICON, color};

pub const TITLE: &str = "Infrastructure Fix Citizen - System Architecture";

/// Builds the architecture diagram.
///
/// The Leaflet and Geoapify nodes use their icons from `icon_dir` when the
/// files exist and fall back to plain boxes otherwise.
///
/// # Errors
///
/// Returns a [`DiagramError`] if a declaration is inconsistent.
pub fn diagram(icon_dir: &Path) -> Result<Diagram, DiagramError> {
    let mut diagram = Diagram::new(TITLE, Direction::TopToBottom);

    diagram.cluster("Users", |users| {
        users.node("citizens", "Citizens", NodeKind::ActorGroup)?;
        users.node("admins", "Admins", NodeKind::Actor)?;
        users.node("moderators", "Moderators", NodeKind::Actor)?;
        Ok(())
    })?;

    diagram.cluster("Frontend Application", |frontend| {
        frontend.node("frontend", "React + Vite PWA", NodeKind::Server)?;
        frontend.node("offline_storage", "IndexedDB\n(Dexie)", NodeKind::Storage)?;
        frontend.node(
            "maps_client",
            "Leaflet Maps",
            NodeKind::custom_if_present(icon_dir.join(LEAFLET_ICON.file_name())),
        )?;
        Ok(())
    })?;

    diagram.cluster("External Services", |external| {
        external.node(
            "geoapify",
            "Geoapify API\n(Geocoding)",
            NodeKind::custom_if_present(icon_dir.join(GEOAPIFY_ICON.file_name())),
        )?;
        Ok(())
    })?;

    diagram.cluster("Supabase Backend", |backend| {
        backend.cluster("Authentication", |auth| {
            auth.node("auth", "Supabase Auth\n(JWT)", NodeKind::Server)?;
            Ok(())
        })?;
        backend.cluster("Database", |database| {
            database.node("database", "PostgreSQL\n(RLS Enabled)", NodeKind::Database)?;
            Ok(())
        })?;
        backend.cluster("Storage", |storage| {
            storage.node("storage", "Supabase Storage\n(Images)", NodeKind::Storage)?;
            Ok(())
        })?;
        backend.cluster("Functions", |functions| {
            functions.node("functions", "Edge Functions\n(Triggers)", NodeKind::Server)?;
            Ok(())
        })
    })?;

    for actor in ["citizens", "admins", "moderators"] {
        diagram.connect(actor, "frontend", EdgeAttributes::new().label("Access"))?;
    }

    diagram.connect(
        "frontend",
        "offline_storage",
        EdgeAttributes::new()
            .label("Offline Reports")
            .color(color("orange")?)
            .style(LineStyle::Dashed),
    )?;

    diagram.connect(
        "frontend",
        "geoapify",
        EdgeAttributes::new().label("Geocoding").color(color("green")?),
    )?;
    diagram.connect(
        "frontend",
        "maps_client",
        EdgeAttributes::new().label("Map Rendering").color(color("blue")?),
    )?;

    diagram.connect(
        "frontend",
        "auth",
        EdgeAttributes::new().label("Authentication").color(color("purple")?),
    )?;
    diagram.connect(
        "frontend",
        "database",
        EdgeAttributes::new().label("API Calls").color(color("darkblue")?),
    )?;
    diagram.connect(
        "frontend",
        "storage",
        EdgeAttributes::new().label("Image Upload").color(color("darkgreen")?),
    )?;

    diagram.connect(
        "auth",
        "database",
        EdgeAttributes::new()
            .label("Verify JWT")
            .color(color("purple")?)
            .style(LineStyle::Dashed),
    )?;
    diagram.connect(
        "database",
        "functions",
        EdgeAttributes::new()
            .label("Triggers")
            .color(color("gray")?)
            .style(LineStyle::Dotted),
    )?;
    diagram.connect(
        "functions",
        "database",
        EdgeAttributes::new()
            .label("Process")
            .color(color("gray")?)
            .style(LineStyle::Dotted),
    )?;

    diagram.connect(
        "offline_storage",
        "frontend",
        EdgeAttributes::new()
            .label("Sync When Online")
            .color(color("orange")?)
            .style(LineStyle::Bold),
    )?;

    Ok(diagram)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use blueprint_core::identifier::Id;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_cluster_hierarchy() {
        let dir = tempdir().unwrap();
        let diagram = diagram(dir.path()).unwrap();

        let labels: Vec<_> = diagram.clusters().iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                "Users",
                "Frontend Application",
                "External Services",
                "Supabase Backend",
                "Authentication",
                "Database",
                "Storage",
                "Functions",
            ]
        );

        let backend = diagram.child_clusters(None).nth(3).unwrap();
        assert_eq!(diagram.child_clusters(Some(backend)).count(), 4);
        assert_eq!(diagram.child_clusters(None).count(), 4);
    }

    #[test]
    fn test_icons_fall_back_when_missing() {
        let dir = tempdir().unwrap();
        let diagram = diagram(dir.path()).unwrap();

        for key in ["maps_client", "geoapify"] {
            let node = diagram.node_by_id(Id::new(key)).unwrap();
            assert_eq!(node.kind(), &NodeKind::Custom { icon: None }, "{key}");
        }
    }

    #[test]
    fn test_icons_used_when_present() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("leaflet.png"), b"png").unwrap();

        let diagram = diagram(dir.path()).unwrap();

        let maps = diagram.node_by_id(Id::new("maps_client")).unwrap();
        assert_eq!(maps.kind().icon(), Some(dir.path().join("leaflet.png").as_path()));
        let geo = diagram.node_by_id(Id::new("geoapify")).unwrap();
        assert_eq!(geo.kind().icon(), None);
    }
}
