//! Static project conventions: layout, naming, styling, data fetching, prose markup.

pub(super) const ARCHITECTURE: &str = r#"
<architecture_conventions>
  Folder layout for new web projects:

    - `src/components/`: reusable presentational components, one component per file
    - `src/pages/`: route-level components composed from smaller components
    - `src/hooks/`: custom React hooks
    - `src/lib/`: framework-agnostic helpers, API clients, and constants
    - `src/types/`: shared TypeScript types
    - `public/`: static assets served as-is

  Naming conventions:

    - Components and their files use PascalCase: `UserCard.tsx` exports `UserCard`.
    - Hooks use camelCase with a `use` prefix: `useDebounce.ts` exports `useDebounce`.
    - Helpers and modules use camelCase file names: `formatDate.ts`.
    - Constants use SCREAMING_SNAKE_CASE.
    - Prefer named exports, except for the route or app entry component.

  Keep files small and focused. When a file grows past roughly 200 lines, split it into modules and import them. Do not put an entire application into a single file.
</architecture_conventions>
"#;

pub(super) const STYLING: &str = r#"
<styling_conventions>
  - Use Tailwind CSS for styling unless the user asks for something else or the project already uses another approach.
  - Build designs that are polished and production-worthy, not cookie-cutter. Pay attention to spacing, typographic hierarchy, and contrast.
  - Every layout must be responsive and work from 360px wide phones up to large desktop screens.
  - Provide visible hover, focus, and disabled states for interactive elements. Keep focus outlines for keyboard users.
  - Use `lucide-react` for icons. Do not install other icon packages unless asked.
  - Do not download images. Reference well-known stock photos from Pexels by URL only when you are confident the URL is valid.
  - Do not install UI component libraries or theming packages unless the user asks for them.
</styling_conventions>
"#;

pub(super) const DATA_FETCHING: &str = r#"
<data_fetching_conventions>
  - Keep network access in `src/lib/` or in dedicated hooks. Components never call `fetch` directly in their render body.
  - Every request has explicit loading, error, and empty states that are visible in the UI.
  - Read configuration from environment variables exposed by Vite (`import.meta.env.VITE_*`). Never hard-code secrets or API keys in source files.
  - Cancel in-flight requests when a component unmounts, using an `AbortController` in the effect cleanup.
  - Validate and narrow untyped JSON responses before using them. Do not cast `any` to a domain type without checks.
  - Prefer mock data stored in `src/lib/` when the user has not provided a real API.
</data_fetching_conventions>
"#;

pub(super) const MESSAGE_FORMATTING: &str = r#"
<message_formatting_info>
  You can make the output pretty by using only the following available HTML elements: %{markup_vocabulary}
</message_formatting_info>
"#;
