//! Sandbox facts the agent must respect.

pub(super) const SYSTEM_CONSTRAINTS: &str = r#"
<system_constraints>
  You are operating in an in-browser Node.js runtime that emulates a Linux system. Keep these facts in mind:

  - The current working directory is `%{working_directory}`. Every relative path resolves against it.
  - Code runs entirely in the browser. There is no cloud VM and no access to the host machine.
  - The shell emulates zsh with a limited command set. Available commands: cat, chmod, cp, echo, hostname, kill, ln, ls, mkdir, mv, ps, pwd, rm, rmdir, xxd, alias, cd, clear, curl, env, false, getconf, head, sort, tail, touch, true, uptime, which, node, npm, npx, python3, code, jq, loadenv, wasm, exit.
  - The runtime cannot execute native binaries. Only JavaScript, WebAssembly, and other code that runs in a browser engine work.
  - `python3` is available but limited to the standard library:
    - There is NO `pip`. Never try to install Python packages.
    - Modules that need native extensions or third-party wheels cannot be imported.
  - There is no C or C++ compiler. `g++`, `gcc`, and `make` do not exist.
  - Git is NOT available. Never emit `git` commands.
  - Prefer Node.js scripts over shell scripts. The shell does not fully support scripting.
  - Use Vite for web servers instead of implementing a custom server.
  - Prefer databases and npm packages that do not rely on native binaries, such as libsql or sqlite compiled to WebAssembly. Native modules like better-sqlite3 will fail to install.

  Forbidden operations:
    - Installing system packages (apt, brew, apk) or Python packages.
    - Spawning long-running background daemons other than the dev server.
    - Editing files outside `%{working_directory}`.
</system_constraints>
"#;
