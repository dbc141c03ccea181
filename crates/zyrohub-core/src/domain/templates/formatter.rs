//! Prettier configuration renderers.

/// `.prettierrc.js`: re-exports the shared ZyroHub preset.
pub fn render_formatter_config() -> String {
    [
        "import config from '@zyrohub/config-prettier';",
        "",
        "export default config;",
        "",
    ]
    .join("\n")
}

/// `.prettierignore`.
pub fn render_formatter_ignore() -> String {
    [
        "node_modules",
        "dist",
        "coverage",
        "",
        "package-lock.json",
        "pnpm-lock.yaml",
        "yarn.lock",
        "bun.lockb",
        "",
    ]
    .join("\n")
}
