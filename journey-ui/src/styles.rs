#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-journey-ui]";

/// CSS mặc định của trang, kèm design token dễ ghi đè.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --journey-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --journey-bg: #ffffff;
  --journey-text: #1f2933;
  --journey-muted: #52606d;
  --journey-heading: #11181c;
  --journey-card-bg: #ffffff;
  --journey-card-border: rgba(148, 163, 184, 0.28);
  --journey-radius: 16px;
  --journey-shadow: 0 18px 32px -24px rgba(15, 23, 42, 0.35);
  --journey-accent: #2563eb;
  --journey-nav-bg: rgba(15, 23, 42, 0.85);
  --journey-track-width: 160px;
}

.journey-page {
  font-family: var(--journey-font-family);
  color: var(--journey-text);
  background: var(--journey-bg);
  min-height: 100vh;
}

.journey-header {
  padding: 4rem 1.5rem 2rem;
  text-align: center;
}

.journey-header h1 {
  margin: 0;
  font-size: clamp(2rem, 5vw, 3rem);
  color: var(--journey-heading);
}

.journey-header p {
  margin: 0.5rem 0 0;
  color: var(--journey-muted);
  font-size: 1.125rem;
}

.journey-main {
  max-width: 56rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.journey-section {
  margin: 3rem 0;
}

.journey-section h2 {
  font-size: 1.5rem;
  margin: 0 0 1rem;
  color: var(--journey-heading);
}

.journey-section p {
  line-height: 1.7;
  margin: 0 0 1rem;
}

.journey-section a {
  color: var(--journey-accent);
}

.journey-featured iframe {
  width: 100%;
  min-height: 480px;
  border: 0;
  border-radius: var(--journey-radius);
}

.journey-footer {
  display: flex;
  justify-content: center;
  padding: 3rem 1.5rem 4rem;
}

.journey-contact {
  padding: 0.75rem 2rem;
  border-radius: 999px;
  border: 0;
  font-size: 1rem;
  background: var(--journey-heading);
  color: #ffffff;
  cursor: pointer;
}

.journey-contact:hover {
  background: var(--journey-accent);
}

/* timeline */

.journey-timeline {
  position: relative;
  padding: 4rem 0;
  transition: background-color 1s ease;
}

.journey-inner {
  position: relative;
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.journey-heading {
  text-align: center;
  font-size: 2rem;
  margin: 0 0 3rem;
  color: var(--journey-heading);
}

.journey-track {
  position: relative;
}

.journey-mask-defs {
  position: absolute;
  width: 0;
  height: 0;
  overflow: hidden;
}

.journey-path {
  stroke-dasharray: 1;
  stroke-dashoffset: 1;
  animation-name: journey-path-draw;
  animation-timing-function: ease-in-out;
  animation-fill-mode: forwards;
}

@keyframes journey-path-draw {
  from { stroke-dashoffset: 1; }
  to { stroke-dashoffset: 0; }
}

.journey-band {
  position: absolute;
  top: 0;
  bottom: 0;
  left: 50%;
  transform: translateX(-50%);
  pointer-events: none;
}

.journey-band-strip {
  position: absolute;
  left: 0;
  width: 100%;
}

.journey-parallax {
  position: relative;
}

.journey-period {
  position: absolute;
  left: 0;
  width: 100%;
}

.journey-marker-row {
  display: flex;
  justify-content: center;
  margin-bottom: 3rem;
}

.journey-marker {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 5rem;
  height: 5rem;
  border-radius: 999px;
  color: #ffffff;
  font-weight: 700;
  font-size: 1.25rem;
  box-shadow: var(--journey-shadow);
}

.journey-marker span {
  text-shadow: 0 1px 2px rgba(0, 0, 0, 0.45);
}

.journey-card-row {
  display: flex;
  margin-bottom: 2rem;
}

.journey-card-row[data-align="right"] {
  justify-content: flex-end;
}

.journey-card-row[data-align="left"] {
  justify-content: flex-start;
}

.journey-card-motion {
  width: calc(50% - 2.5rem);
}

.journey-card {
  position: relative;
  background: var(--journey-card-bg);
  border: 1px solid var(--journey-card-border);
  border-radius: var(--journey-radius);
  padding: 1.25rem 1.5rem;
  box-shadow: var(--journey-shadow);
}

.journey-card[data-location="belgium"] { border-top: 4px solid #eab308; }
.journey-card[data-location="lisbon"] { border-top: 4px solid #2dd4bf; }
.journey-card[data-location="new-york-city"] { border-top: 4px solid #2563eb; }
.journey-card[data-location="san-francisco"] { border-top: 4px solid #fb923c; }

.journey-card-date {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.journey-card-date h4 {
  margin: 0;
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--journey-muted);
}

.journey-card-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 999px;
  background: var(--journey-accent);
}

.journey-card-title {
  margin: 0.5rem 0 0;
  font-size: 1.125rem;
  color: var(--journey-heading);
}

.journey-card-content {
  margin-top: 1rem;
  line-height: 1.6;
}

.journey-card-content p {
  margin: 0;
}

.journey-card-arrow {
  position: absolute;
  top: 1.75rem;
  width: 0;
  height: 0;
  border: 10px solid transparent;
}

.journey-card-row[data-align="right"] .journey-card-arrow {
  left: -20px;
  border-right-color: var(--journey-card-bg);
}

.journey-card-row[data-align="left"] .journey-card-arrow {
  right: -20px;
  border-left-color: var(--journey-card-bg);
}

.journey-scroll-hint {
  position: fixed;
  bottom: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  font-size: 2rem;
  color: var(--journey-muted);
  animation: journey-bounce 1.6s ease-in-out infinite;
  pointer-events: none;
}

@keyframes journey-bounce {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 8px); }
}

.journey-nav-strip {
  position: fixed;
  top: 0;
  right: 0;
  height: 100vh;
  width: 1.5rem;
  z-index: 40;
  transition: width 0.3s ease;
}

.journey-nav-strip.is-expanded {
  width: 12rem;
}

.journey-nav-panel {
  height: 100%;
  padding: 2rem 1rem;
  box-sizing: border-box;
  background: var(--journey-nav-bg);
  color: #ffffff;
  opacity: 0;
  transition: opacity 0.3s ease;
  overflow-y: auto;
}

.journey-nav-strip.is-expanded .journey-nav-panel {
  opacity: 1;
}

.journey-nav-panel h3 {
  margin: 0 0 1rem;
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

.journey-nav-year {
  display: block;
  width: 100%;
  padding: 0.4rem 0.5rem;
  margin-bottom: 0.25rem;
  border: 0;
  border-radius: 6px;
  background: transparent;
  color: inherit;
  text-align: left;
  font-size: 1rem;
  cursor: pointer;
}

.journey-nav-year:hover {
  background: rgba(255, 255, 255, 0.15);
}

/* embeds */

.embed-podcast iframe {
  width: 100%;
  height: 175px;
  border: 0;
  border-radius: 12px;
}

.embed-video {
  position: relative;
  padding-top: 56.25%;
}

.embed-video iframe {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  border: 0;
  border-radius: 12px;
}

.embed-instagram .instagram-media {
  margin: 0 auto;
  max-width: 100%;
}

.embed-article {
  display: block;
  position: relative;
  border-radius: 12px;
  overflow: hidden;
  text-decoration: none;
}

.embed-article img,
.embed-preview-trigger img {
  display: block;
  width: 100%;
  height: auto;
}

.embed-article-label {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 0.5rem 0.75rem;
  background: rgba(0, 0, 0, 0.6);
  color: #ffffff;
  font-size: 0.75rem;
  letter-spacing: 0.08em;
}

.embed-article-label p {
  margin: 0;
}

.embed-preview-trigger {
  position: relative;
  display: block;
  width: 100%;
  padding: 0;
  border: 0;
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  background: none;
}

.embed-preview-title {
  position: absolute;
  inset: auto 0 0 0;
  padding: 0.75rem;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.75), transparent);
  color: #ffffff;
  text-align: left;
}

.embed-preview-title h3 {
  margin: 0;
  font-size: 1rem;
}

.journey-dialog {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
}

.journey-dialog-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(15, 23, 42, 0.7);
}

.journey-dialog-content {
  position: relative;
  width: min(90vw, 960px);
  max-height: 90vh;
  background: #ffffff;
  border-radius: var(--journey-radius);
  padding: 1rem;
  overflow: auto;
}

.journey-dialog-content header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.75rem;
}

.journey-dialog-content header h2 {
  margin: 0;
  font-size: 1.125rem;
}

.journey-dialog-content iframe {
  width: 100%;
  height: 70vh;
  border: 0;
}

.journey-dialog-close {
  border: 0;
  background: none;
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(10rem, 1fr));
  gap: 0.75rem;
}

.gallery-thumb {
  padding: 0;
  border: 0;
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  background: none;
}

.gallery-thumb img {
  display: block;
  width: 100%;
  aspect-ratio: 1 / 1;
  object-fit: cover;
  transition: transform 0.3s ease;
}

.gallery-thumb:hover img {
  transform: scale(1.05);
}

.gallery-lightbox {
  display: flex;
  flex-direction: column;
  align-items: center;
  background: #0f172a;
}

.gallery-lightbox .journey-dialog-close {
  align-self: flex-end;
  color: #ffffff;
}

.gallery-current {
  max-width: 100%;
  max-height: 75vh;
  object-fit: contain;
}

.gallery-controls {
  display: flex;
  gap: 1rem;
  margin-top: 0.75rem;
}

.gallery-nav {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 999px;
  border: 0;
  font-size: 1.5rem;
  cursor: pointer;
  background: rgba(255, 255, 255, 0.15);
  color: #ffffff;
}

@media (max-width: 768px) {
  .journey-card-motion {
    width: calc(100% - 2rem);
  }

  .journey-card-row[data-align] {
    justify-content: center;
  }

  .journey-card-arrow {
    display: none;
  }

  .journey-nav-strip {
    display: none;
  }
}

@media (prefers-reduced-motion: reduce) {
  .journey-path,
  .journey-scroll-hint {
    animation: none;
    stroke-dashoffset: 0;
  }

  .journey-card-motion,
  .journey-marker-motion {
    transition: none !important;
  }
}
"#;

/// Chèn `<style data-journey-ui>` vào `<head>` đúng một lần.
pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-journey-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.dyn_into::<Node>()?)?;

    Ok(())
}
