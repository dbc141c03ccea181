//! `.gitignore` renderer.

const GITIGNORE_LINES: &[&str] = &[
    "node_modules",
    "dist",
    "",
    "# Environment",
    ".env",
    ".env.*",
    "!.env.example",
    "",
    "# Package managers",
    ".npmrc",
    ".pnpm-store",
    ".yarn/cache",
    ".yarn/install-state.gz",
    "",
    "# Misc",
    "*.tsbuildinfo",
];

/// `.gitignore` contents. Fixed; does not depend on the configuration.
pub fn render_gitignore() -> String {
    let mut text = GITIGNORE_LINES.join("\n");
    text.push('\n');
    text
}
