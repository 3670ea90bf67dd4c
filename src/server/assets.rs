//! Embedded static assets.

/// Site stylesheet, served at /static/style.css.
pub const CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: system-ui, -apple-system, sans-serif;
    color: #e5e7eb;
    background: linear-gradient(160deg, #0f172a 0%, #1e293b 60%, #312e81 100%);
    min-height: 100vh;
}

main {
    max-width: 720px;
    margin: 0 auto;
    padding: 0 1rem 3rem;
}

.banner {
    height: 14rem;
    background-size: cover;
    background-position: center;
    background-color: #1f2937;
}

.card {
    background: rgba(31, 41, 55, 0.8);
    border-radius: 0.75rem;
    padding: 1.5rem;
    margin-top: 1.5rem;
}

.identity {
    display: flex;
    align-items: center;
    gap: 1.5rem;
    margin-top: -4rem;
    backdrop-filter: blur(6px);
}

.pfp {
    width: 8rem;
    height: 8rem;
    border-radius: 50%;
    border: 4px solid #1f2937;
    object-fit: cover;
}

.identity-text h1 { color: #93c5fd; font-size: 1.75rem; }
.handle { color: #9ca3af; margin-top: 0.25rem; }
.bio { margin-top: 0.75rem; max-width: 40rem; }

h2 { color: #93c5fd; font-size: 1.25rem; margin-bottom: 1rem; }

.video-card .video-thumbnail {
    width: 100%;
    border-radius: 0.5rem;
    display: block;
}
.video-details h3 { margin-top: 1rem; }
.video-stats {
    display: flex;
    gap: 1rem;
    color: #9ca3af;
    font-size: 0.9rem;
    margin-top: 0.5rem;
}
.video-published { color: #6b7280; font-size: 0.85rem; margin-top: 0.5rem; }

.link-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(7rem, 1fr));
    gap: 1rem;
}

.social-link {
    display: block;
    text-align: center;
    padding: 0.75rem;
    border-radius: 0.5rem;
    color: #fff;
    text-decoration: none;
    font-weight: 600;
    transition: filter 0.15s ease;
}
.social-link:hover { filter: brightness(1.2); }

.social-youtube { background: #dc2626; }
.social-twitch { background: #7c3aed; }
.social-instagram { background: #db2777; }
.social-twitter { background: #38bdf8; }
.social-throne { background: #ca8a04; }
.social-discord { background: #4f46e5; }

.centered {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-height: 100vh;
    gap: 1rem;
}

.error-card { text-align: center; }
.error-card h1 { color: #f87171; }
.error-card p { margin-top: 0.75rem; }

.retry {
    display: inline-block;
    margin-top: 1rem;
    padding: 0.5rem 1.5rem;
    border-radius: 0.5rem;
    background: #2563eb;
    color: #fff;
    text-decoration: none;
}

.spinner {
    width: 3rem;
    height: 3rem;
    border: 3px solid transparent;
    border-bottom-color: #60a5fa;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }
"#;
