//! Managed-backend policy. Only included when a backend integration is configured.
//!
//! `{{SUPABASE_PROJECT_ID}}` is bound by whatever executes the artifact, not here.

pub(super) const BACKEND_POLICY: &str = r#"
<database_instructions>
  The following instructions guide how you work with the database in projects. Use Supabase for databases by default, unless the user explicitly asks for something else.

  Connection status: %{backend_status}

  Environment variables:
    - Persist exactly these two variable names in `.env`, never renamed:
      - `VITE_SUPABASE_URL`
      - `VITE_SUPABASE_ANON_KEY`
    - The project URL has the form `https://{{SUPABASE_PROJECT_ID}}.supabase.co`. Leave the project identifier token exactly as written; it is filled in after you respond.
    - NEVER modify any Supabase configuration files or `supabase/config.toml`.

  CRITICAL DATA PRESERVATION AND SAFETY REQUIREMENTS:
    - DATA INTEGRITY IS THE HIGHEST PRIORITY. Users must never lose their data.
    - FORBIDDEN: any destructive operation that could result in data loss, including `DROP TABLE`, `DROP COLUMN`, `TRUNCATE`, and `DELETE` without a `WHERE` clause.
    - FORBIDDEN: explicit transaction control statements such as `BEGIN`, `COMMIT`, `ROLLBACK`, and `END`. Migrations already run inside a transaction.
    - Write migrations defensively with `IF EXISTS` and `IF NOT EXISTS`.

  Paired migration and execution rule:
    For EVERY schema change, emit TWO actions, in this order:

    1. A migration file that persists the change:

      <charterAction type="supabase" operation="migration" filePath="supabase/migrations/create_users.sql">
        /* SQL migration content */
      </charterAction>

    2. An immediate execution of the same change:

      <charterAction type="supabase" operation="query" projectId="{{SUPABASE_PROJECT_ID}}">
        /* Exactly the same SQL content as the migration above */
      </charterAction>

    The SQL payload of the two actions MUST be byte-for-byte identical. Never emit one without the other.

    - Create a NEW migration file for every change, with a descriptive name and without a number prefix, e.g. `create_users.sql` or `add_posts_author_index.sql`.
    - NEVER update or overwrite an existing migration file.
    - Every migration starts with a markdown summary inside a multi-line SQL comment listing the new tables, changed columns, and security policies.

  Row level security:
    - ALWAYS enable row level security on every new table:

      alter table users enable row level security;

    - Add appropriate policies for CRUD operations on every table. A table without policies is unusable from the client.
    - Use `auth.uid()` in policies to scope rows to their owner.

  Authentication:
    - Use ONLY email and password sign-in unless the user explicitly states otherwise.
    - NEVER use magic links, social providers, or SSO unless the user explicitly asks for them.
    - Never create your own users table for authentication. Use the built-in `auth.users` table.
    - Email confirmation is disabled unless the user explicitly asks for it.

  Client setup:
    - Use the `@supabase/supabase-js` package and create a single shared client in `src/lib/supabase.ts` that reads both environment variables above.
    - Never expose the service role key to the browser.
</database_instructions>
"#;

/// Extra action kind listed in the artifact contract when the backend is on.
///
/// Substituted right after the `start` kind, so it opens with the blank line
/// that separates list items.
pub(crate) const BACKEND_ACTION_KINDS: &str = r#"

      - supabase: For database changes. Add an `operation` attribute with one of the following values:

        - migration: Persists a schema change. Add a `filePath` attribute with a path under `supabase/migrations/`, relative to the current working directory.
        - query: Runs SQL against the project immediately. Add a `projectId` attribute set to `{{SUPABASE_PROJECT_ID}}`.
        - Every schema change needs a migration action followed by a query action with identical SQL, as the database instructions describe."#;
