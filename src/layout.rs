//! Fixed layout of the generated frontend project.
//!
//! Everything the tool materializes is declared here as `'static` data. A run
//! only ever writes this layout out; it never reads it back or computes any
//! part of it at runtime.

/// A file to materialize, with its full literal contents.
#[derive(Debug)]
pub struct FileEntry {
    /// Path relative to the destination root.
    pub path: &'static str,
    /// Exact bytes written to disk, trailing newline included.
    pub contents: &'static str,
}

/// Folders created under the destination root. Each entry carries its full
/// relative path, so declaration order does not matter.
pub const DIRECTORIES: &[&str] = &[
    "src/api",
    "src/components",
    "src/pages",
    "src/context",
    "src/hooks",
    "src/utils",
];

const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

const POSTCSS_CONFIG: &str = r#"export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#;

const ENV_FILE: &str = "VITE_API_BASE_URL=http://localhost:5000\n";

const INDEX_CSS: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;

body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen', 'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue', sans-serif;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}
"#;

const MAIN_JSX: &str = r#"import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.jsx'
import './index.css'

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
"#;

const GITIGNORE: &str = r#"# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*
lerna-debug.log*

node_modules
dist
dist-ssr
*.local

# Editor directories and files
.vscode/*
!.vscode/extensions.json
.idea
.DS_Store
*.suo
*.ntvs*
*.njsproj
*.sln
*.sw?

# Environment
.env
.env.local
.env.*.local
"#;

/// Files written under the destination root, in the order they are reported.
/// Every parent directory here is either the root itself or covered by
/// [`DIRECTORIES`], which are created first.
pub const FILES: &[FileEntry] = &[
    FileEntry {
        path: "tailwind.config.js",
        contents: TAILWIND_CONFIG,
    },
    FileEntry {
        path: "postcss.config.js",
        contents: POSTCSS_CONFIG,
    },
    FileEntry {
        path: ".env",
        contents: ENV_FILE,
    },
    FileEntry {
        path: "src/index.css",
        contents: INDEX_CSS,
    },
    FileEntry {
        path: "src/main.jsx",
        contents: MAIN_JSX,
    },
    FileEntry {
        path: ".gitignore",
        contents: GITIGNORE,
    },
];
