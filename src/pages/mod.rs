//! HTML pages: a content fragment from the pages directory wrapped in the
//! sidebar layout.

use std::path::{Path, PathBuf};

/// Sidebar entry highlighted for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Home,
    Questions,
}

impl NavKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavKey::Home => "home",
            NavKey::Questions => "questions",
        }
    }

    fn class(self, active: NavKey) -> &'static str {
        if self == active {
            "active"
        } else {
            ""
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageRenderer {
    pages_dir: PathBuf,
}

impl PageRenderer {
    pub fn new(pages_dir: impl Into<PathBuf>) -> Self {
        Self {
            pages_dir: pages_dir.into(),
        }
    }

    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    /// Render `<pages_dir>/<name>.html` inside the layout.
    ///
    /// A missing fragment is replaced by an inline notice; this never fails.
    pub async fn render(&self, name: &str, title: &str, active: NavKey) -> String {
        let content = self.load_fragment(name).await;
        layout(title, &content, active)
    }

    async fn load_fragment(&self, name: &str) -> String {
        let path = self.pages_dir.join(format!("{name}.html"));
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to read page {}: {}", path.display(), e);
                }
                missing_page(&path)
            }
        }
    }
}

fn missing_page(path: &Path) -> String {
    format!(
        "<h1>Missing page</h1><p>{} not found.</p>",
        escape_html(&path.display().to_string())
    )
}

/// The fixed page shell. `content` is trusted markup and is inserted as-is.
fn layout(title: &str, content: &str, active: NavKey) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <link rel="stylesheet" href="/static/style.css" />
</head>
<body>
  <div class="layout">
    <aside class="sidebar">
      <h2>Quiz App</h2>
      <nav>
        <a href="/" class="{home}">🏠 Home</a>
        <a href="/questions" class="{questions}">🧠 Quiz</a>
      </nav>
    </aside>

    <main class="content">
      {content}
    </main>
  </div>
</body>
</html>
"#,
        title = escape_html(title),
        home = NavKey::Home.class(active),
        questions = NavKey::Questions.class(active),
        content = content,
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_marks_only_the_active_link() {
        let html = layout("Quiz", "<p>body</p>", NavKey::Questions);

        assert!(html.contains(r#"<a href="/questions" class="active">"#));
        assert!(html.contains(r#"<a href="/" class="">"#));
    }

    #[test]
    fn layout_inserts_content_unescaped() {
        let html = layout("Home", "<h1>Welcome</h1>", NavKey::Home);

        assert!(html.contains("<h1>Welcome</h1>"));
        assert!(html.contains("<title>Home</title>"));
    }

    #[test]
    fn layout_escapes_title() {
        let html = layout("<b>&</b>", "", NavKey::Home);

        assert!(html.contains("<title>&lt;b&gt;&amp;&lt;/b&gt;</title>"));
    }

    #[tokio::test]
    async fn render_reads_fragment_from_pages_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("home.html"), "<p>hello there</p>").unwrap();

        let html = PageRenderer::new(dir.path())
            .render("home", "Home", NavKey::Home)
            .await;

        assert!(html.contains("<p>hello there</p>"));
    }

    #[tokio::test]
    async fn render_substitutes_notice_for_missing_fragment() {
        let dir = tempfile::tempdir().unwrap();

        let html = PageRenderer::new(dir.path())
            .render("questions", "Quiz", NavKey::Questions)
            .await;

        assert!(html.contains("<h1>Missing page</h1>"));
        assert!(html.contains("questions.html not found."));
    }
}
