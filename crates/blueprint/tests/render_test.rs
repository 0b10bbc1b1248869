use std::{fs, path::Path};

use tempfile::tempdir;

use blueprint::{
    Renderer,
    catalog::{DiagramKind, architecture, use_case},
    config::{AppConfig, Backend, StyleConfig},
    export::dot,
};

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn renderer_with(backend: Backend) -> Renderer {
    let mut config = AppConfig::default();
    config.render_mut().set_backend(backend);
    Renderer::new(config)
}

#[test]
fn native_backend_writes_one_svg_per_diagram() {
    let icons = tempdir().unwrap();
    let out = tempdir().unwrap();
    let renderer = renderer_with(Backend::Native);

    for kind in DiagramKind::ALL {
        let diagram = kind.build(icons.path()).unwrap();
        let path = renderer.render_to_dir(&diagram, out.path()).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"), "{kind}");
    }

    assert_eq!(
        file_names(out.path()),
        [
            "infrastructure_fix_citizen_-_system_architecture.svg",
            "infrastructure_fix_citizen_-_use_case_diagram.svg",
        ]
    );
}

#[test]
fn native_svg_keeps_line_patterns() {
    let icons = tempdir().unwrap();
    let renderer = renderer_with(Backend::Native);

    // two dashed and two dotted edges, all drawn dashed
    let diagram = architecture::diagram(icons.path()).unwrap();
    let svg = String::from_utf8(renderer.render(&diagram).unwrap()).unwrap();
    assert!(svg.matches("stroke-dasharray").count() >= 4);
    assert!(svg.contains("Moderators"));

    // four include and four extend edges
    let diagram = use_case::diagram().unwrap();
    let svg = String::from_utf8(renderer.render(&diagram).unwrap()).unwrap();
    assert!(svg.matches("stroke-dasharray").count() >= 8);
}

#[test]
fn native_dot_points_extend_arrows_at_base() {
    let diagram = use_case::diagram().unwrap();
    let lowered = dot::to_native_dot_string(&diagram, &StyleConfig::default()).unwrap();

    assert!(!lowered.contains("dir=back"));
    let extends: Vec<_> = lowered
        .lines()
        .flat_map(|line| line.split(';'))
        .filter(|stmt| stmt.contains("\"extend\""))
        .collect();
    assert_eq!(extends.len(), 4);

    // every extend edge now starts at the extension and ends at its base
    for stmt in extends {
        let head = ["\"view_all_issues\"", "\"view_issue_details\""]
            .iter()
            .filter_map(|base| stmt.rfind(base))
            .max()
            .expect("base endpoint");
        let arrow = stmt.find("->").expect("edge");
        assert!(arrow < head, "{stmt}");
    }
}

#[test]
fn emit_dot_writes_source_next_to_image() {
    let out = tempdir().unwrap();
    let mut config = AppConfig::default();
    config.render_mut().set_backend(Backend::Native);
    config.render_mut().set_emit_dot(true);
    let renderer = Renderer::new(config);

    let diagram = DiagramKind::UseCase.build(out.path()).unwrap();
    let path = renderer.render_to_dir(&diagram, out.path()).unwrap();

    let dot_path = path.with_extension("dot");
    let dot = fs::read_to_string(&dot_path).unwrap();
    assert_eq!(dot, renderer.to_dot(&diagram).unwrap());
    assert!(dot.starts_with("digraph"));
    assert!(dot.contains("Citizn System"));
    assert_eq!(file_names(out.path()).len(), 2);
}

#[test]
fn rendering_twice_overwrites() {
    let icons = tempdir().unwrap();
    let out = tempdir().unwrap();
    let renderer = renderer_with(Backend::Native);
    let diagram = DiagramKind::Architecture.build(icons.path()).unwrap();

    let first = renderer.render_to_dir(&diagram, out.path()).unwrap();
    let second = renderer.render_to_dir(&diagram, out.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(file_names(out.path()).len(), 1);
}

#[test]
fn output_path_follows_backend() {
    let diagram = DiagramKind::UseCase.build(Path::new(".")).unwrap();
    let dir = Path::new("out");

    let native = renderer_with(Backend::Native);
    assert_eq!(
        native.output_path(&diagram, dir),
        dir.join("infrastructure_fix_citizen_-_use_case_diagram.svg")
    );

    let graphviz = renderer_with(Backend::Graphviz);
    assert_eq!(
        graphviz.output_path(&diagram, dir),
        dir.join("infrastructure_fix_citizen_-_use_case_diagram.png")
    );
    assert_eq!(graphviz.config().render().backend(), Backend::Graphviz);
}

#[test]
fn output_directory_is_created() {
    let root = tempdir().unwrap();
    let out = root.path().join("docs").join("diagrams");
    let renderer = renderer_with(Backend::Native);

    let diagram = DiagramKind::UseCase.build(root.path()).unwrap();
    let path = renderer.render_to_dir(&diagram, &out).unwrap();

    assert!(path.starts_with(&out));
    assert!(path.is_file());
}

#[cfg(feature = "graphviz")]
mod graphviz_backend {
    use std::process::Command;

    use graphviz_rust::{
        cmd::{CommandArg, Format},
        exec,
        printer::PrinterContext,
    };

    use super::*;

    fn dot_available() -> bool {
        Command::new("dot")
            .arg("-V")
            .output()
            .is_ok_and(|output| output.status.success())
    }

    fn graphviz_svg(diagram: &blueprint::diagram::Diagram) -> String {
        let graph = dot::to_graph(diagram, &StyleConfig::default()).unwrap();
        let svg = exec(
            graph,
            &mut PrinterContext::default(),
            vec![CommandArg::Format(Format::Svg)],
        )
        .unwrap();
        String::from_utf8(svg).unwrap()
    }

    #[test]
    fn default_backend_is_graphviz() {
        assert_eq!(Renderer::default().config().render().backend(), Backend::Graphviz);
    }

    #[test]
    fn default_renderer_writes_png() {
        if !dot_available() {
            eprintln!("skipping: `dot` is not on PATH");
            return;
        }

        let out = tempdir().unwrap();
        let diagram = use_case::diagram().unwrap();
        let path = Renderer::default().render_to_dir(&diagram, out.path()).unwrap();

        assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("png"));
        let png = fs::read(&path).unwrap();
        assert!(png.starts_with(b"\x89PNG"));
    }

    #[test]
    fn graphviz_draws_clusters_and_styles() {
        if !dot_available() {
            eprintln!("skipping: `dot` is not on PATH");
            return;
        }

        let icons = tempdir().unwrap();
        let svg = graphviz_svg(&architecture::diagram(icons.path()).unwrap());
        for label in [
            "Users",
            "Frontend Application",
            "External Services",
            "Supabase Backend",
            "Authentication",
        ] {
            assert!(svg.contains(&format!(">{label}<")), "missing cluster {label}");
        }
        assert!(svg.contains("class=\"cluster\""));
        assert!(svg.contains("stroke-width=\"2\""));

        let svg = graphviz_svg(&use_case::diagram().unwrap());
        for label in [
            "Actors",
            "Citizn System",
            "Citizen Features",
            "Admin Features",
            "Public Features",
        ] {
            assert!(svg.contains(&format!(">{label}<")), "missing cluster {label}");
        }
    }
}
