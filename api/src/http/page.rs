//! Demo page

use salvo::prelude::*;
use tracing::trace;

use crate::{
    config::{AppConfig, SandboxConfig},
    mdl::DISABLED_NOTICE,
};

/// Page render mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Live mode requested without approval, actions are disabled
    Disabled,
    /// Live mode enabled
    Live,
    /// Sandbox mode
    Sandbox,
}

impl RenderMode {
    /// Derives the render mode from the sandbox configuration
    pub fn from_config(cfg: &SandboxConfig) -> Self {
        if cfg.actions_disabled() {
            RenderMode::Disabled
        } else if cfg.is_live() {
            RenderMode::Live
        } else {
            RenderMode::Sandbox
        }
    }
}

/// Serves the demo page
#[handler]
#[tracing::instrument(skip_all)]
pub async fn demo_page(depot: &mut Depot, res: &mut Response) {
    trace!("received request");
    let cfg = depot.obtain::<AppConfig>().unwrap();

    res.render(Text::Html(render(&cfg.sandbox)));
}

// Document head, shared by every render mode
const HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Banking Platform Demo (Sandbox-first)</title>
  <style>
    body { font-family: system-ui, -apple-system, "Segoe UI", Roboto, Arial; margin: 2rem; color:#222 }
    header { margin-bottom: 1.5rem }
    .card { border: 1px solid #e1e4e8; padding:1rem; border-radius:8px; margin-bottom:1rem; }
    label { display:block; margin-top:.5rem; font-size:.9rem; color:#444 }
    input, select { width:100%; padding:.5rem; margin-top:.25rem; border:1px solid #d0d7de; border-radius:6px }
    button { margin-top:.75rem; padding:.5rem 1rem; border-radius:6px; border:0; background:#0366d6; color:#fff }
    pre { background:#f6f8fa; padding:1rem; border-radius:6px; overflow:auto }
    .warning { background:#ffe3e3; border:1px solid #ffbdbd; padding:.75rem; border-radius:6px; color:#6b0b0b; margin-bottom:1rem }
    .muted { color:#666; font-size:.9rem }
  </style>
</head>
<body>
"#;

// Handler bodies wired to the same-origin action endpoints
const SCRIPT_BODY: &str = r#"
    function setDisabledState() {
      if (DISABLED) {
        document.querySelectorAll('button').forEach(b => { b.disabled = true; b.style.opacity = '0.6'; });
        document.querySelectorAll('pre').forEach(p => p.textContent = p.textContent + '\n\n' + DISABLED_MSG);
      }
    }

    async function post(path, body) {
      if (DISABLED) return { ok: false, error: DISABLED_MSG };
      try {
        const res = await fetch(path, {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(body),
          credentials: 'omit'
        });
        return await res.json();
      } catch (err) {
        return { ok: false, error: String(err) };
      }
    }

    document.getElementById('createUserBtn').onclick = async () => {
      if (DISABLED) return setDisabledState();
      const email = document.getElementById('email').value;
      const name = document.getElementById('name').value;
      const out = await post('/sandbox/users', { email, name });
      document.getElementById('createUserOut').textContent = JSON.stringify(out, null, 2);
    };

    document.getElementById('createCardBtn').onclick = async () => {
      if (DISABLED) return setDisabledState();
      const accountId = document.getElementById('accountId').value;
      const cardType = document.getElementById('cardType').value;
      const out = await post('/sandbox/cards', { accountId, cardType });
      document.getElementById('createCardOut').textContent = JSON.stringify(out, null, 2);
    };

    document.getElementById('transferBtn').onclick = async () => {
      if (DISABLED) return setDisabledState();
      const from = document.getElementById('fromAcct').value;
      const to = document.getElementById('toAcct').value;
      const amount = document.getElementById('amount').value;
      const out = await post('/sandbox/transfers', { from, to, amount });
      document.getElementById('transferOut').textContent = JSON.stringify(out, null, 2);
    };

    // enforce the safety state on load
    setDisabledState();
"#;

/// Renders the full demo page
pub fn render(cfg: &SandboxConfig) -> String {
    let mode = RenderMode::from_config(cfg);

    let mut page = String::new();
    page.push_str(HEAD);
    page.push_str(&render_header(cfg, mode));
    page.push_str(&render_forms(mode));
    page.push_str(&render_footer(cfg));
    page.push_str(&render_script(mode));
    page.push_str("</body>\n</html>\n");
    page
}

// Header with the mode banner
fn render_header(cfg: &SandboxConfig, mode: RenderMode) -> String {
    let api_root = escape_html(&cfg.api_root);
    let banner = render_banner(mode);
    format!(
        r#"  <header>
    <h1>Banking Platform Demo (Sandbox-first)</h1>
    <p class="muted">This page is a safe demo UI. It points to: <strong id="apiRoot">{api_root}</strong></p>
    {banner}
  </header>
"#
    )
}

// One banner per render mode
fn render_banner(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Disabled => {
            r#"<div class="warning">
      LIVE MODE requested but NOT ENABLED, actions are disabled.
      To enable live operations you must set the environment variable <code>PRODUCTION_APPROVED=yes</code>
      only after you have finalized legal, compliance, bank/processor contracts and completed PCI/KYC/AML checks.
    </div>"#
        }
        RenderMode::Live => {
            r#"<div class="warning" style="background:#fff6d6;border-color:#ffe7a3;color:#6b4b00">
      LIVE MODE is ENABLED. Only enable this after legal/compliance approvals and provider contracts are in place.
    </div>"#
        }
        RenderMode::Sandbox => {
            r#"<div class="muted">Running in sandbox mode (recommended for development).</div>"#
        }
    }
}

// The three form cards; controls carry the disabled attribute when inert
fn render_forms(mode: RenderMode) -> String {
    let disabled = if mode == RenderMode::Disabled {
        r#" disabled style="opacity:0.6""#
    } else {
        ""
    };
    format!(
        r#"  <section class="card">
    <h2>Create user (sandbox)</h2>
    <label>Email <input id="email" type="email" value="demo@example.com"></label>
    <label>Name <input id="name" type="text" value="Demo User"></label>
    <button id="createUserBtn"{disabled}>Create User</button>
    <pre id="createUserOut">Response will appear here</pre>
  </section>

  <section class="card">
    <h2>Create virtual card (sandbox)</h2>
    <label>Account ID <input id="accountId" type="text" value="acct_sandbox_123"></label>
    <label>Card Type
      <select id="cardType">
        <option value="virtual">Virtual</option>
        <option value="physical">Physical</option>
      </select>
    </label>
    <button id="createCardBtn"{disabled}>Create Virtual Card</button>
    <pre id="createCardOut">Response will appear here</pre>
  </section>

  <section class="card">
    <h2>Simulate internal transfer (sandbox)</h2>
    <label>From Account <input id="fromAcct" value="acct_sandbox_123"></label>
    <label>To Account <input id="toAcct" value="acct_sandbox_456"></label>
    <label>Amount <input id="amount" value="10.00"></label>
    <button id="transferBtn"{disabled}>Transfer</button>
    <pre id="transferOut">Response will appear here</pre>
  </section>

"#
    )
}

// Footer echoing the configuration for operator verification
fn render_footer(cfg: &SandboxConfig) -> String {
    let api_root = escape_html(&cfg.api_root);
    let live_mode = if cfg.is_live() { "true" } else { "false" };
    let production_approved = if cfg.is_approved() { "yes" } else { "no" };
    format!(
        r#"  <footer style="margin-top:2rem; color:#666; font-size:.9rem">
    <div>Server-side config:</div>
    <ul>
      <li>API_ROOT = {api_root}</li>
      <li>LIVE_MODE = {live_mode}</li>
      <li>PRODUCTION_APPROVED = {production_approved}</li>
    </ul>
    <div class="muted">Next: connect this UI to your backend sandbox endpoints and to provider sandboxes (Plaid, Marqeta/Stripe Issuing, etc.).</div>
  </footer>
"#
    )
}

// Inline script with the safety flags populated server-side
fn render_script(mode: RenderMode) -> String {
    let disabled = mode == RenderMode::Disabled;

    let mut script = String::new();
    script.push_str("  <script>\n");
    script.push_str(&format!("    const DISABLED = {};\n", disabled));
    script.push_str(&format!(
        "    const DISABLED_MSG = '{}';\n",
        escape_js(DISABLED_NOTICE)
    ));
    script.push_str(SCRIPT_BODY);
    script.push_str("  </script>\n");
    script
}

// htmlspecialchars parity
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

// addslashes parity for values embedded in the inline script
fn escape_js(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    use salvo::test::{ResponseExt, TestClient};

    use crate::config::DEFAULT_API_ROOT;

    fn sandbox_cfg(live_mode: &str, production_approved: &str) -> SandboxConfig {
        SandboxConfig {
            live_mode: live_mode.to_string(),
            production_approved: production_approved.to_string(),
            ..SandboxConfig::default()
        }
    }

    #[test]
    fn test_render_sandbox() {
        let cfg = sandbox_cfg("false", "no");
        assert_eq!(RenderMode::from_config(&cfg), RenderMode::Sandbox);

        let page = render(&cfg);
        assert!(page.contains("Running in sandbox mode"));
        assert!(page.contains("const DISABLED = false;"));
        assert!(page.contains(r#"<button id="createUserBtn">"#));
        assert!(page.contains(&format!("API_ROOT = {}", DEFAULT_API_ROOT)));
        assert!(page.contains("LIVE_MODE = false"));
        assert!(page.contains("PRODUCTION_APPROVED = no"));
    }

    #[test]
    fn test_render_live() {
        let cfg = sandbox_cfg("true", "yes");
        assert_eq!(RenderMode::from_config(&cfg), RenderMode::Live);

        let page = render(&cfg);
        assert!(page.contains("LIVE MODE is ENABLED"));
        assert!(page.contains("const DISABLED = false;"));
        assert!(page.contains("LIVE_MODE = true"));
        assert!(page.contains("PRODUCTION_APPROVED = yes"));
    }

    #[test]
    fn test_render_disabled() {
        let cfg = sandbox_cfg("true", "no");
        assert_eq!(RenderMode::from_config(&cfg), RenderMode::Disabled);

        let page = render(&cfg);
        assert!(page.contains("LIVE MODE requested but NOT ENABLED"));
        assert!(page.contains("const DISABLED = true;"));
        assert!(page.contains(r#"<button id="createUserBtn" disabled"#));
        assert!(page.contains(r#"<button id="createCardBtn" disabled"#));
        assert!(page.contains(r#"<button id="transferBtn" disabled"#));
        assert!(page.contains("Live mode requested but not approved"));
    }

    #[test]
    fn test_render_escapes_api_root() {
        let cfg = SandboxConfig {
            api_root: "https://x.example.com/api?a=1&b=<tag>".to_string(),
            ..SandboxConfig::default()
        };
        let page = render(&cfg);
        assert!(page.contains("https://x.example.com/api?a=1&amp;b=&lt;tag&gt;"));
        assert!(!page.contains("<tag>"));
    }

    #[test]
    fn test_escape_helpers() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;");
        assert_eq!(escape_js(r#"it's a "test"\"#), r#"it\'s a \"test\"\\"#);
    }

    #[tokio::test]
    async fn test_page_endpoint() {
        let cfg = AppConfig {
            server: Default::default(),
            trace: Default::default(),
            sandbox: SandboxConfig::default(),
        };
        let service = crate::http::init_service(&cfg);

        let mut res = TestClient::get("http://localhost:8080").send(&service).await;
        assert_eq!(res.status_code.unwrap(), StatusCode::OK);
        let body = res.take_string().await.unwrap();
        assert!(body.contains("Banking Platform Demo"));
        assert!(body.contains(r#"<strong id="apiRoot">"#));
    }
}
