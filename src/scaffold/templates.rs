/*!
Text templates written by `init`.

Each `TemplateFile` pairs a path relative to the project root with a
renderer that receives the project name. Only `package.json`, the entry
source and the README interpolate the name; the rest is static.
*/

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ScaffoldError;

pub const MANIFEST_VERSION: &str = "1.0.0";
pub const ENTRY_FILE: &str = "src/index.ts";
pub const DEV_SCRIPT: &str = "bun run src/index.ts";
pub const TEST_SCRIPT: &str = "bun test";

const NAME_PLACEHOLDER: &str = "{{project_name}}";

type Renderer = fn(&str) -> Result<String, ScaffoldError>;

pub struct TemplateFile {
    pub path: &'static str,
    render: Renderer,
}

impl TemplateFile {
    pub fn render(&self, project_name: &str) -> Result<String, ScaffoldError> {
        (self.render)(project_name)
    }
}

pub static TEMPLATES: &[TemplateFile] = &[
    TemplateFile {
        path: "package.json",
        render: render_manifest,
    },
    TemplateFile {
        path: "tsconfig.json",
        render: render_tsconfig,
    },
    TemplateFile {
        path: ENTRY_FILE,
        render: render_entry,
    },
    TemplateFile {
        path: "tests/index.test.ts",
        render: render_test,
    },
    TemplateFile {
        path: "README.md",
        render: render_readme,
    },
    TemplateFile {
        path: ".gitignore",
        render: render_gitignore,
    },
];

/* ---- package.json ---- */

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    name: &'a str,
    version: &'static str,
    description: String,
    main: &'static str,
    #[serde(rename = "type")]
    module_type: &'static str,
    scripts: Scripts,
    dev_dependencies: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
struct Scripts {
    dev: &'static str,
    start: &'static str,
    test: &'static str,
}

fn render_manifest(project_name: &str) -> Result<String, ScaffoldError> {
    let manifest = Manifest {
        name: project_name,
        version: MANIFEST_VERSION,
        description: format!("{project_name} - created with Vitron CLI"),
        main: ENTRY_FILE,
        module_type: "module",
        scripts: Scripts {
            dev: DEV_SCRIPT,
            start: DEV_SCRIPT,
            test: TEST_SCRIPT,
        },
        dev_dependencies: BTreeMap::from([("@types/bun", "latest"), ("typescript", "^5")]),
    };
    to_json("package.json", &manifest)
}

/* ---- tsconfig.json ---- */

fn render_tsconfig(_: &str) -> Result<String, ScaffoldError> {
    let config = serde_json::json!({
        "compilerOptions": {
            "lib": ["ESNext"],
            "target": "ESNext",
            "module": "ESNext",
            "moduleResolution": "bundler",
            "moduleDetection": "force",
            "allowImportingTsExtensions": true,
            "noEmit": true,
            "strict": true,
            "skipLibCheck": true,
            "noFallthroughCasesInSwitch": true,
            "noUncheckedIndexedAccess": true,
            "types": ["bun-types"]
        },
        "include": ["src/**/*.ts", "tests/**/*.ts"]
    });
    to_json("tsconfig.json", &config)
}

fn to_json<T: Serialize>(file: &'static str, value: &T) -> Result<String, ScaffoldError> {
    let mut text = serde_json::to_string_pretty(value)
        .map_err(|source| ScaffoldError::Render { file, source })?;
    text.push('\n');
    Ok(text)
}

/* ---- sources ---- */

const ENTRY_SOURCE: &str = r#"export function greet(name: string = "World"): string {
  return `Hello, ${name}!`;
}

if (import.meta.main) {
  console.log("Welcome to {{project_name}}!");
  console.log(greet());
}
"#;

const TEST_SOURCE: &str = r#"import { test, expect, describe } from "bun:test";
import { greet } from "../src/index";

describe("greet", () => {
  test("uses the default name", () => {
    expect(greet()).toBe("Hello, World!");
  });

  test("greets the given name", () => {
    expect(greet("Alice")).toBe("Hello, Alice!");
  });
});
"#;

fn render_entry(project_name: &str) -> Result<String, ScaffoldError> {
    Ok(ENTRY_SOURCE.replace(NAME_PLACEHOLDER, project_name))
}

fn render_test(_: &str) -> Result<String, ScaffoldError> {
    Ok(TEST_SOURCE.to_string())
}

/* ---- README / .gitignore ---- */

const README: &str = r#"# {{project_name}}

Created with Vitron CLI.

## Getting started

```bash
bun install
bun run dev
```

## Testing

```bash
bun test
```

## Layout

- `src/` - application source
- `tests/` - test files
- `docs/` - documentation
- `config/` - configuration
"#;

const GITIGNORE: &str = "# dependencies
node_modules/

# build output
dist/
build/
out/

# environment
.env
.env.local
.env.*.local

# logs
*.log
npm-debug.log*

# misc
.DS_Store
coverage/
";

fn render_readme(project_name: &str) -> Result<String, ScaffoldError> {
    Ok(README.replace(NAME_PLACEHOLDER, project_name))
}

fn render_gitignore(_: &str) -> Result<String, ScaffoldError> {
    Ok(GITIGNORE.to_string())
}
