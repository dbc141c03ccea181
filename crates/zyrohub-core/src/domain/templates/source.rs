//! Source skeleton renderers: `src/index.ts` and `src/Module.ts`.

use crate::domain::{entities::ProjectConfiguration, value_objects::ProjectType};

const CORE_PACKAGE: &str = "@zyrohub/core";

/// Entry point contents.
///
/// Applications bootstrap the runtime core (clustered or not); modules
/// re-export their definition file; unstructured projects get an empty
/// file. The result always ends with exactly one newline.
pub fn render_entry_point(config: &ProjectConfiguration) -> String {
    let body = match config.project_type() {
        ProjectType::Application => application_entry(config.use_cluster()),
        ProjectType::Module => "export * from './Module.js';".to_string(),
        ProjectType::Unstructured => String::new(),
    };

    let mut text = body.trim_end_matches('\n').to_string();
    text.push('\n');
    text
}

fn application_entry(clustered: bool) -> String {
    let (core_type, init_block): (&str, &[&str]) = if clustered {
        (
            "ClusteredCore",
            &[
                "const core = new ClusteredCore({",
                "\tcore: {",
                "\t\tmodules: []",
                "\t},",
                "});",
            ],
        )
    } else {
        ("Core", &["const core = new Core({", "\tmodules: []", "});"])
    };

    let mut lines = vec![format!("import {{ {core_type} }} from '{CORE_PACKAGE}';"), String::new()];
    lines.extend(init_block.iter().map(|l| l.to_string()));
    lines.push(String::new());
    lines.push("await core.init();".into());
    lines.join("\n")
}

/// `src/Module.ts` contents for module projects.
///
/// Declares `<Name>ModuleOptions` and `<Name>Module extends BaseModule` with
/// an empty async `init` hook, where `<Name>` is the PascalCase project name
/// without its `module-` prefix.
pub fn render_module_skeleton(config: &ProjectConfiguration) -> String {
    let name = config.pascal_name();

    let mut text = [
        format!("import {{ Core, BaseModule }} from '{CORE_PACKAGE}';"),
        String::new(),
        format!("export interface {name}ModuleOptions {{}}"),
        String::new(),
        format!("export class {name}Module extends BaseModule {{"),
        format!("\tstatic options: {name}ModuleOptions;"),
        String::new(),
        "\tconstructor() {".into(),
        "\t\tsuper();".into(),
        "\t}".into(),
        String::new(),
        format!("\tasync init(core: Core, options: {name}ModuleOptions) {{"),
        String::new(),
        "\t}".into(),
        "}".into(),
    ]
    .join("\n");
    text.push('\n');
    text
}
