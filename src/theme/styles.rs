//! Global CSS styles for the Orientation app.
//!
//! Dark night-sky palette with a warm accent for titles and actions.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --night: #0b0d17;
  --night-raised: #141829;
  --night-border: #252b45;

  /* Accent */
  --ember: #ff7a45;
  --ember-glow: rgba(255, 122, 69, 0.35);
  --sky: #6ec3ff;

  /* QR rendering */
  --ink: #0b0d17;
  --paper: #f5f5f5;

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.72);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Semantic */
  --success: #3ddc97;
  --danger: #ff3366;

  /* Typography */
  --font-display: 'Poppins', 'Segoe UI', sans-serif;
  --font-body: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-exit: 400ms cubic-bezier(0.4, 0, 1, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-body);
  background: radial-gradient(circle at 50% 0%, #1c2140 0%, var(--night) 60%);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  font-weight: 700;
  color: var(--ember);
  text-shadow: 0 0 30px var(--ember-glow);
  letter-spacing: 0.04em;
}

.section-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.tagline {
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

/* === Navigation === */
.nav-bar {
  position: sticky;
  top: 0;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1.5rem;
  background: rgba(11, 13, 23, 0.9);
  border-bottom: 1px solid var(--night-border);
  backdrop-filter: blur(6px);
  z-index: 100;
}

.nav-logo {
  display: grid;
  place-items: center;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 50%;
  background: var(--ember);
  color: var(--night);
  font-family: var(--font-display);
  font-weight: 800;
}

.nav-items {
  display: flex;
  gap: 0.25rem;
}

.nav-item {
  padding: 0.4rem 0.9rem;
  background: transparent;
  border: none;
  border-radius: 999px;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.nav-item:hover {
  color: var(--text-primary);
}

.nav-item.active {
  background: var(--night-raised);
  color: var(--ember);
}

/* === Buttons === */
.btn-primary {
  padding: 0.75rem 2rem;
  background: var(--ember);
  border: none;
  border-radius: 999px;
  color: var(--night);
  font-family: var(--font-display);
  font-size: var(--text-base);
  font-weight: 600;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 24px var(--ember-glow);
  transform: translateY(-1px);
}

.btn-primary:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-ghost {
  padding: 0.6rem 1.5rem;
  background: transparent;
  border: 1px solid var(--night-border);
  border-radius: 999px;
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-ghost:hover {
  border-color: var(--text-secondary);
  color: var(--text-primary);
}

/* === Pages === */
.page,
.home {
  max-width: 960px;
  margin: 0 auto;
  padding: 2.5rem 1.5rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  text-align: center;
}

.info-card,
.scan-card {
  width: 100%;
  max-width: 560px;
  padding: 1.75rem;
  background: var(--night-raised);
  border: 1px solid var(--night-border);
  border-radius: 16px;
}

.info-list {
  text-align: left;
  padding-left: 1.25rem;
  color: var(--text-secondary);
}

.info-list li + li {
  margin-top: 0.4rem;
}

.scan-prompt {
  color: var(--text-secondary);
  margin-bottom: 1.25rem;
}

/* === Countdown Card === */
@keyframes card-enter {
  from { opacity: 0; transform: translateY(24px) scale(0.97); }
  to { opacity: 1; transform: translateY(0) scale(1); }
}

@keyframes card-exit {
  from { opacity: 1; transform: translateY(0) scale(1); }
  to { opacity: 0; transform: translateY(-24px) scale(0.97); }
}

@keyframes digit-enter {
  from { opacity: 0; transform: translateY(-40%); }
  to { opacity: 1; transform: translateY(0); }
}

.countdown-card {
  position: relative;
  width: 100%;
  max-width: 640px;
  padding: 2.5rem 2rem;
  background: var(--night-raised);
  border: 1px solid var(--night-border);
  border-radius: 20px;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.45);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  animation: card-enter 500ms ease-out both;
}

.countdown-card.leaving {
  animation: card-exit var(--transition-exit) both;
  pointer-events: none;
}

.card-dismiss {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  width: 2rem;
  height: 2rem;
  background: transparent;
  border: none;
  border-radius: 50%;
  color: var(--text-muted);
  cursor: pointer;
}

.card-dismiss:hover {
  background: var(--night-border);
  color: var(--text-primary);
}

.event-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 700;
}

.event-date {
  color: var(--sky);
}

.event-started {
  font-size: var(--text-xl);
  color: var(--success);
}

.countdown-grid {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 0.75rem;
  width: 100%;
}

.countdown-unit {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 1rem 0.5rem;
  background: var(--night);
  border: 1px solid var(--night-border);
  border-radius: 12px;
  overflow: hidden;
}

.countdown-value {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  font-weight: 700;
  font-variant-numeric: tabular-nums;
  animation: digit-enter 350ms ease-out;
}

.countdown-label {
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.12em;
  color: var(--text-muted);
}

/* === QR Reader === */
.reader-overlay {
  position: fixed;
  inset: 0;
  display: none;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  background: rgba(0, 0, 0, 0.92);
  z-index: 900;
}

.reader-overlay.open {
  display: flex;
}

.reader-video {
  width: 100%;
  max-width: 480px;
  border-radius: 12px;
}

.reader-frame {
  position: absolute;
  width: 250px;
  height: 250px;
  border: 2px solid var(--ember);
  border-radius: 12px;
  box-shadow: 0 0 0 9999px rgba(0, 0, 0, 0.35);
  pointer-events: none;
}

.reader-cancel {
  position: relative;
  z-index: 1;
}

/* === Modal === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
  animation: fade-in var(--transition-normal) ease-out;
}

.upload-modal {
  width: 100%;
  max-width: 420px;
  padding: 2rem;
  background: var(--night-raised);
  border: 1px solid var(--night-border);
  border-radius: 16px;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  text-align: center;
}

.modal-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
}

.modal-description {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  width: 100%;
}

/* === Notice Banner === */
@keyframes notice-enter {
  from { opacity: 0; transform: translate(-50%, 16px); }
  to { opacity: 1; transform: translate(-50%, 0); }
}

.notice-banner {
  position: fixed;
  bottom: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  align-items: center;
  gap: 1rem;
  max-width: calc(100% - 2rem);
  padding: 0.85rem 1.25rem;
  border-radius: 12px;
  color: var(--night);
  font-weight: 600;
  z-index: 1100;
  animation: notice-enter var(--transition-normal) ease-out both;
}

.notice-banner.success {
  background: var(--success);
}

.notice-banner.error {
  background: var(--danger);
  color: var(--text-primary);
}

.notice-close {
  background: transparent;
  border: none;
  color: inherit;
  font-size: var(--text-base);
  cursor: pointer;
}

/* === Registration QR === */
.qr-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.qr-caption {
  color: var(--text-secondary);
}

.registration-qr {
  width: 180px;
  padding: 0.75rem;
  background: var(--paper);
  border-radius: 12px;
}

.registration-qr svg {
  display: block;
  width: 100%;
  height: auto;
}

.qr-error {
  color: var(--danger);
  font-size: var(--text-sm);
}

/* === Home (after dismiss) === */
.home-welcome {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  padding-top: 4rem;
  animation: fade-in 600ms ease-out;
}

/* === Small screens === */
@media (max-width: 520px) {
  .page-title { font-size: var(--text-2xl); }
  .countdown-grid { gap: 0.5rem; }
  .countdown-value { font-size: var(--text-2xl); }
  .nav-bar { padding: 0.6rem 0.75rem; }
  .nav-item { padding: 0.35rem 0.6rem; }
}
"#;
