pub const HALL_STYLES: &str = r#"
:root {
    --hall-bg: #262624;
    --hall-nav-bg: #1f1e1d;
    --hall-card: #30302e;
    --hall-muted-bg: #3a3936;
    --hall-border: #45443f;
    --hall-text: #f4f3ee;
    --hall-text-muted: #a8a69d;
    --hall-primary: #d97757;
    --hall-primary-text: #ffffff;
    --hall-accent: #2563eb;
    --hall-live: #22c55e;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--hall-bg);
    color: var(--hall-text);
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
}

/* Shell */
.hall-shell {
    display: flex;
    height: 100vh;
    overflow: hidden;
    background: var(--hall-bg);
}

.hall-center {
    display: flex;
    flex-direction: column;
    flex: 1;
    min-width: 0;
}

.hall-mobile {
    display: flex;
    flex-direction: column;
    height: 100vh;
    overflow: hidden;
    position: relative;
}

.muted {
    color: var(--hall-text-muted);
}

.small {
    font-size: 0.75rem;
}

.strong {
    font-weight: 500;
}

.truncate {
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
    min-width: 0;
}

.clamp-2 {
    display: -webkit-box;
    -webkit-line-clamp: 2;
    -webkit-box-orient: vertical;
    overflow: hidden;
    margin: 0.25rem 0 0;
}

.flex-fill {
    flex: 1;
}

.separator {
    height: 1px;
    background: var(--hall-border);
    margin: 0.5rem 0;
}

/* Buttons and badges */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
    padding: 0.4rem 0.75rem;
    border-radius: 0.5rem;
    border: 1px solid transparent;
    background: var(--hall-muted-bg);
    color: var(--hall-text);
    font-size: 0.85rem;
    cursor: pointer;
}

.btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.btn-primary {
    background: var(--hall-primary);
    color: var(--hall-primary-text);
}

.btn-outline {
    background: transparent;
    border-color: var(--hall-border);
}

.btn-small {
    font-size: 0.75rem;
    padding: 0.3rem 0.6rem;
}

.btn-block {
    width: 100%;
    justify-content: flex-start;
    margin-bottom: 0.75rem;
}

.icon-btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    min-width: 2rem;
    height: 2rem;
    border: none;
    border-radius: 0.4rem;
    background: transparent;
    color: var(--hall-text-muted);
    cursor: pointer;
}

.icon-btn:hover,
.icon-btn.active {
    background: var(--hall-muted-bg);
    color: var(--hall-text);
}

.icon-btn:disabled {
    opacity: 0.35;
    cursor: default;
}

.icon-link {
    color: var(--hall-text-muted);
    text-decoration: none;
}

.badge {
    display: inline-flex;
    align-items: center;
    padding: 0.1rem 0.45rem;
    border-radius: 999px;
    font-size: 0.7rem;
    white-space: nowrap;
}

.badge-primary {
    background: var(--hall-primary);
    color: var(--hall-primary-text);
}

.badge-secondary {
    background: var(--hall-muted-bg);
}

.badge-outline {
    border: 1px solid var(--hall-border);
}

.chip {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    height: 1.6rem;
    padding: 0 0.5rem;
    border: 1px solid #52525b;
    border-radius: 0.375rem;
    background: #27272a;
    color: #e4e4e7;
    font-size: 0.75rem;
    cursor: pointer;
}

.chip:hover {
    background: #3f3f46;
}

.pill,
.pill-select {
    height: 2rem;
    padding: 0 0.75rem;
    border: 1px solid #3f3f46;
    border-radius: 999px;
    background: #27272a;
    color: #e4e4e7;
    font-size: 0.75rem;
    cursor: pointer;
}

.pill-on {
    background: var(--hall-accent);
    border-color: #3b82f6;
    color: #ffffff;
}

.live-dot {
    display: inline-block;
    width: 0.5rem;
    height: 0.5rem;
    margin-right: 0.4rem;
    border-radius: 50%;
    background: var(--hall-live);
    animation: hall-pulse 1.4s ease-in-out infinite;
}

@keyframes hall-pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.3; }
}

/* Left navigation */
.left-nav,
.nav-rail {
    display: flex;
    flex-direction: column;
    flex-shrink: 0;
    height: 100%;
    background: var(--hall-nav-bg);
    border-right: 1px solid var(--hall-border);
}

.nav-rail {
    align-items: center;
    gap: 1rem;
    padding: 1rem 0;
}

.nav-header {
    padding: 1rem;
    border-bottom: 1px solid var(--hall-border);
}

.nav-brand-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1rem;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.brand-mark {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    background: linear-gradient(135deg, #fb923c, #ef4444);
    color: #ffffff;
    font-size: 0.8rem;
    font-weight: 500;
}

.brand-title {
    margin: 0;
    font-size: 1rem;
    font-weight: 500;
}

.brand-title + p {
    margin: 0;
}

.nav-search {
    width: 100%;
    height: 2.5rem;
    padding: 0 0.75rem;
    border: 1px solid var(--hall-border);
    border-radius: 0.5rem;
    background: var(--hall-bg);
    color: var(--hall-text);
}

.nav-scroll {
    flex: 1;
    overflow-y: auto;
    padding: 0.5rem;
}

.nav-section {
    margin-bottom: 1rem;
}

.nav-section-title {
    margin: 0;
    padding: 0.5rem 0.75rem;
    font-size: 0.85rem;
    font-weight: 500;
    color: var(--hall-text-muted);
}

.nav-item {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    width: 100%;
    height: 2.75rem;
    padding: 0 0.75rem;
    border: none;
    border-radius: 0.5rem;
    background: transparent;
    color: inherit;
    text-align: left;
    cursor: pointer;
}

.nav-item:hover,
.nav-row:hover {
    background: rgba(255, 255, 255, 0.05);
}

.nav-row {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    padding: 0.75rem;
    border-radius: 0.5rem;
    cursor: pointer;
}

.nav-row-body {
    flex: 1;
    min-width: 0;
}

.nav-tile,
.nav-avatar {
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
    width: 2rem;
    height: 2rem;
    border-radius: 0.5rem;
    background: var(--hall-muted-bg);
}

.nav-avatar {
    border-radius: 50%;
}

.nav-chat-title,
.nav-chat-meta {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.nav-empty {
    padding: 0 0.75rem;
}

.nav-footer {
    padding: 1rem;
    border-top: 1px solid var(--hall-border);
}

.user-card {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.75rem;
    border-radius: 0.5rem;
    background: rgba(255, 255, 255, 0.04);
    cursor: pointer;
}

.user-avatar {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    background: var(--hall-primary);
    color: var(--hall-primary-text);
}

/* Resize handles */
.resize-handle {
    position: relative;
    flex-shrink: 0;
    width: 8px;
    margin: 0 -4px;
    z-index: 5;
    touch-action: none;
    user-select: none;
}

.resize-grip {
    position: absolute;
    top: 0;
    bottom: 0;
    left: 3px;
    width: 2px;
    background: transparent;
    transition: background 0.15s;
}

.resize-handle:hover .resize-grip,
.resize-handle.dragging .resize-grip {
    background: var(--hall-accent);
}

/* Chat */
.chat-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    border-bottom: 1px solid var(--hall-border);
    flex-shrink: 0;
}

.chat-header-title {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.chat-header h1,
.mobile-title h1 {
    margin: 0;
    font-size: 1rem;
    font-weight: 500;
}

.message-scroll {
    flex: 1;
    overflow-y: auto;
    scroll-behavior: smooth;
}

.message-list {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    padding: 1rem;
}

.user-row {
    margin-left: 2rem;
}

.assistant-row {
    margin-right: 2rem;
}

.message-bubble {
    padding: 0.75rem 1rem;
    border-radius: 1rem;
}

.user-bubble {
    margin-left: auto;
    max-width: fit-content;
    background: var(--hall-primary);
    color: var(--hall-primary-text);
}

.assistant-bubble {
    background: var(--hall-card);
    border: 1px solid var(--hall-border);
}

.streaming-indicator {
    display: flex;
    align-items: center;
    margin-bottom: 0.5rem;
}

.message-text p {
    margin: 0 0 0.5rem;
    line-height: 1.6;
}

.message-text p:last-child {
    margin-bottom: 0;
}

.message-extras {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-top: 0.75rem;
    padding-top: 0.75rem;
    border-top: 1px solid rgba(255, 255, 255, 0.08);
}

.message-actions {
    display: flex;
    gap: 0.25rem;
    margin-top: 0.5rem;
    opacity: 0;
    transition: opacity 0.15s;
}

.message-row:hover .message-actions {
    opacity: 1;
}

.user-row .message-actions {
    justify-content: flex-end;
}

.message-metrics {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 1rem;
    margin-top: 0.5rem;
}

.message-follow-ups {
    margin-top: 0.75rem;
    padding-top: 0.75rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
}

.quick-actions {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.75rem;
}

/* Composer */
.composer,
.voice-composer {
    flex-shrink: 0;
    padding: 1rem;
    border-top: 1px solid var(--hall-border);
}

.composer-badges {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-bottom: 0.75rem;
}

.composer-box {
    position: relative;
}

.composer-input {
    width: 100%;
    min-height: 100px;
    padding: 0.75rem 6rem 0.75rem 0.75rem;
    border: 1px solid var(--hall-border);
    border-radius: 0.75rem;
    background: var(--hall-card);
    color: var(--hall-text);
    font: inherit;
    resize: none;
}

.composer-toolbar {
    position: absolute;
    right: 0.5rem;
    bottom: 0.5rem;
    display: flex;
    gap: 0.25rem;
}

.composer-status {
    display: flex;
    align-items: center;
    margin-top: 0.5rem;
}

.chat-controls {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    margin-top: 0.75rem;
}

.config-panel {
    position: absolute;
    right: 0;
    bottom: calc(100% + 0.5rem);
    width: 24rem;
    padding: 1rem;
    border: 1px solid var(--hall-border);
    border-radius: 0.75rem;
    background: var(--hall-card);
    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.4);
    z-index: 20;
}

.config-panel h4 {
    margin: 0 0 1rem;
}

.config-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1rem;
}

.config-field {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    margin-bottom: 1rem;
    font-size: 0.85rem;
}

.config-field select {
    height: 2.25rem;
    border: 1px solid var(--hall-border);
    border-radius: 0.5rem;
    background: var(--hall-bg);
    color: var(--hall-text);
}

/* Voice */
.voice-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 0.75rem;
}

.voice-header .composer-badges {
    margin-bottom: 0;
}

.voice-stage {
    display: flex;
    flex-direction: column;
    align-items: center;
    margin-bottom: 1.5rem;
}

.voice-orb {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 8rem;
    height: 8rem;
    margin-bottom: 1rem;
    border: 4px solid var(--hall-muted-bg);
    border-radius: 50%;
    font-size: 2.5rem;
    transition: all 0.2s;
}

.voice-orb.listening {
    border-color: var(--hall-live);
    background: rgba(34, 197, 94, 0.1);
    box-shadow: 0 0 24px rgba(34, 197, 94, 0.25);
}

.voice-transcript {
    max-width: 100%;
    padding: 0.75rem;
    border-radius: 0.5rem;
    background: var(--hall-muted-bg);
    font-size: 0.85rem;
}

.voice-controls {
    display: flex;
    justify-content: center;
    gap: 1rem;
}

.round-btn {
    width: 4rem;
    height: 4rem;
    border: 1px solid var(--hall-border);
    border-radius: 50%;
    background: transparent;
    color: var(--hall-text);
    font-size: 1.25rem;
    cursor: pointer;
}

.round-btn.primary {
    border: none;
    background: var(--hall-primary);
}

/* Mobile */
.mobile-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    border-bottom: 1px solid var(--hall-border);
}

.mobile-title {
    text-align: center;
}

.mobile-title p {
    display: flex;
    align-items: center;
    justify-content: center;
    margin: 0.15rem 0 0;
}

.drawer-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    z-index: 40;
}

.drawer {
    position: fixed;
    top: 0;
    bottom: 0;
    display: flex;
    flex-direction: column;
    z-index: 50;
    max-width: 100vw;
    overflow: hidden;
}

.drawer-left {
    left: 0;
}

.drawer-right {
    right: 0;
    width: 100vw;
}

.mobile-sidecar {
    display: flex;
    flex-direction: column;
    height: 100%;
    background: var(--hall-card);
}

.mobile-sidecar-header {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem;
    border-bottom: 1px solid var(--hall-border);
}

.mobile-sidecar-header h2 {
    margin: 0;
    font-size: 1rem;
    font-weight: 500;
}

.mobile-sidecar-title {
    flex: 1;
    min-width: 0;
}

.mobile-sidecar-title p {
    margin: 0;
}

.mobile-sidecar-actions {
    display: flex;
    gap: 0.5rem;
    padding: 0.75rem;
    border-bottom: 1px solid var(--hall-border);
    background: rgba(255, 255, 255, 0.03);
}

/* Sidecar */
.sidecar {
    display: flex;
    flex-direction: column;
    flex-shrink: 0;
    height: 100%;
    background: var(--hall-card);
    border-left: 1px solid var(--hall-border);
}

.sidecar-header {
    padding: 1rem;
    border-bottom: 1px solid var(--hall-border);
}

.sidecar-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.5rem;
}

.sidecar-heading {
    margin: 0 0 0.5rem;
    font-size: 1rem;
    font-weight: 500;
}

.sidecar-nav {
    display: flex;
    gap: 0.25rem;
}

.sidecar-title {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    min-width: 0;
}

.sidecar-tabs {
    display: flex;
    gap: 0.25rem;
    overflow-x: auto;
}

.sidecar-tab {
    display: flex;
    align-items: center;
    gap: 0.25rem;
    max-width: 12rem;
    padding: 0.3rem 0.5rem;
    border-radius: 0.4rem;
    font-size: 0.8rem;
    color: var(--hall-text-muted);
    cursor: pointer;
}

.sidecar-tab.active {
    background: var(--hall-muted-bg);
    color: var(--hall-text);
}

.tab-close {
    border: none;
    background: transparent;
    color: inherit;
    cursor: pointer;
}

.sidecar-content {
    flex: 1;
    overflow-y: auto;
}

.sidecar-empty {
    justify-content: center;
}

.sidecar-empty-hint {
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 2rem;
    text-align: center;
    color: var(--hall-text-muted);
    font-size: 0.85rem;
}

.sidecar-empty-hint p {
    margin: 0.25rem 0;
}

.placeholder-icon {
    margin-bottom: 1rem;
    font-size: 2.25rem;
}

/* Plugins */
.plugin {
    display: flex;
    flex-direction: column;
    height: 100%;
}

.plugin-header {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 0.75rem;
    padding: 1rem;
    border-bottom: 1px solid var(--hall-border);
}

.plugin-title {
    margin: 0 0 0.35rem;
    font-size: 0.95rem;
    font-weight: 500;
}

.plugin-row,
.plugin-actions {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.plugin-body {
    flex: 1;
    overflow: auto;
}

.plugin-padded {
    padding: 1rem;
}

.plugin-scroll {
    overflow-x: auto;
}

.plugin-json {
    margin: 0;
    padding: 1rem;
    font-size: 0.75rem;
    white-space: pre-wrap;
    word-break: break-word;
    font-family: ui-monospace, "SFMono-Regular", monospace;
}

.plugin-placeholder {
    padding: 3rem 1rem;
    text-align: center;
    color: var(--hall-text-muted);
}

.citation {
    padding: 0.75rem 0;
    border-bottom: 1px solid var(--hall-border);
}

.citation:last-child {
    border-bottom: none;
}

.citation-title {
    margin: 0 0 0.5rem;
    font-size: 0.85rem;
    font-weight: 500;
}

.citation-quote {
    margin: 0 0 0.5rem;
    padding: 0.75rem;
    border-radius: 0.5rem;
    background: var(--hall-muted-bg);
    font-size: 0.85rem;
    font-style: italic;
}

.citation-meta {
    display: flex;
    gap: 1rem;
    font-size: 0.75rem;
    color: var(--hall-text-muted);
}

.doc-prose {
    line-height: 1.65;
    font-size: 0.9rem;
}

.doc-prose h1 {
    font-size: 1.15rem;
}

.doc-prose h2 {
    font-size: 1rem;
}

.data-table {
    width: 100%;
    border-collapse: collapse;
    font-size: 0.85rem;
}

.data-table th,
.data-table td {
    padding: 0.5rem;
    text-align: left;
    border-bottom: 1px solid var(--hall-border);
}

.data-table th {
    font-weight: 500;
}

.chart {
    width: 100%;
    height: auto;
}

.chart-grid {
    stroke: var(--hall-border);
    stroke-dasharray: 3 3;
}

.chart-axis {
    stroke: var(--hall-text-muted);
}

.chart-bar {
    fill: var(--hall-primary);
}

.chart-line {
    fill: none;
    stroke: var(--hall-primary);
    stroke-width: 2;
}

.chart-dot {
    fill: var(--hall-primary);
}

.chart-label,
.chart-tick {
    fill: var(--hall-text-muted);
    font-size: 11px;
}
"#;
