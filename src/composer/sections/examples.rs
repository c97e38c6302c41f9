//! Worked examples of the artifact contract, embedded verbatim.

pub(super) const EXAMPLES: &str = r##"
Here are some examples of correct usage of artifacts:

<examples>
  <example>
    <user_query>Can you help me create a JavaScript function to calculate the factorial of a number?</user_query>

    <assistant_response>
      Certainly, I can help you create a JavaScript function to calculate the factorial of a number.

      <charterArtifact id="factorial-function" title="JavaScript Factorial Function">
        <charterAction type="file" filePath="index.js">function factorial(n) {
  if (!Number.isInteger(n) || n < 0) {
    throw new RangeError('factorial is only defined for non-negative integers');
  }

  let result = 1;
  for (let i = 2; i <= n; i++) {
    result *= i;
  }
  return result;
}

console.log(factorial(5));
</charterAction>

        <charterAction type="shell">node index.js</charterAction>
      </charterArtifact>
    </assistant_response>
  </example>

  <example>
    <user_query>Make a counter app with React</user_query>

    <assistant_response>
      I'll start by:
      1. Setting up Vite + React with a package.json
      2. Creating a Counter component with increment and reset
      3. Starting the dev server

      <charterArtifact id="react-counter" title="React Counter App">
        <charterAction type="file" filePath="package.json">{
  "name": "react-counter",
  "private": true,
  "version": "0.0.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "react": "^18.3.1",
    "react-dom": "^18.3.1"
  },
  "devDependencies": {
    "@vitejs/plugin-react": "^4.3.1",
    "vite": "^5.4.2"
  }
}
</charterAction>

        <charterAction type="shell">npm install</charterAction>

        <charterAction type="file" filePath="index.html"><!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Counter</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
</charterAction>

        <charterAction type="file" filePath="vite.config.js">import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
});
</charterAction>

        <charterAction type="file" filePath="src/main.jsx">import { StrictMode } from 'react';
import { createRoot } from 'react-dom/client';
import { Counter } from './components/Counter';

createRoot(document.getElementById('root')).render(
  <StrictMode>
    <Counter />
  </StrictMode>,
);
</charterAction>

        <charterAction type="file" filePath="src/components/Counter.jsx">import { useState } from 'react';

export function Counter() {
  const [count, setCount] = useState(0);

  return (
    <main style={{ display: 'grid', placeItems: 'center', minHeight: '100vh', gap: '1rem' }}>
      <p aria-live="polite">Count: {count}</p>
      <div style={{ display: 'flex', gap: '0.5rem' }}>
        <button onClick={() => setCount((c) => c + 1)}>Increment</button>
        <button onClick={() => setCount(0)} disabled={count === 0}>
          Reset
        </button>
      </div>
    </main>
  );
}
</charterAction>

        <charterAction type="start">npm run dev</charterAction>
      </charterArtifact>

      The counter is ready. Use the buttons to increment and reset it.
    </assistant_response>
  </example>
</examples>
"##;
