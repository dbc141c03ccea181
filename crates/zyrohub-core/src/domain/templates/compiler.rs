//! `tsconfig.json` renderer.

use serde_json::json;

use super::{files, to_pretty_json};
use crate::domain::{
    entities::ProjectConfiguration, error::DomainError, value_objects::ProjectType,
};

/// Compiler settings for the project type.
///
/// All projects compile `src/` into `dist/` as Node ES modules with the
/// `@/*` alias resolved by `tsc-alias`. Modules and unstructured projects
/// also emit declarations, since they are meant to be consumed by other
/// packages; applications emit source maps instead.
pub fn render_compiler_config(config: &ProjectConfiguration) -> Result<String, DomainError> {
    let is_library = config.project_type() != ProjectType::Application;

    let mut options = json!({
        "target": "ES2022",
        "module": "NodeNext",
        "moduleResolution": "NodeNext",
        "lib": ["ES2022"],
        "rootDir": "./src",
        "outDir": "./dist",
        "baseUrl": ".",
        "paths": {
            "@/*": ["./src/*"]
        },
        "strict": true,
        "esModuleInterop": true,
        "forceConsistentCasingInFileNames": true,
        "skipLibCheck": true,
        "resolveJsonModule": true,
    });

    if let Some(map) = options.as_object_mut() {
        if is_library {
            map.insert("declaration".into(), json!(true));
            map.insert("declarationMap".into(), json!(true));
        } else {
            map.insert("sourceMap".into(), json!(true));
        }
    }

    let document = json!({
        "compilerOptions": options,
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist"],
        "tsc-alias": {
            "resolveFullPaths": true
        }
    });

    to_pretty_json(files::COMPILER_CONFIG, &document)
}
