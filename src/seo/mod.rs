//! # Crawler Files
//!
//! `robots.txt` and `sitemap.xml` built from the stored slug list.

/// robots.txt allowing everything but the JSON API
pub fn robots_txt(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
        base
    )
}

/// Sitemap with the home page followed by one entry per slug
pub fn sitemap_xml<S: AsRef<str>>(base_url: &str, slugs: &[S]) -> String {
    let base = escape_markup(base_url.trim_end_matches('/'));

    let mut xml = String::with_capacity(128 + slugs.len() * 128);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    xml.push_str(&format!(
        "  <url><loc>{}/</loc><changefreq>daily</changefreq><priority>1.0</priority></url>\n",
        base
    ));
    for slug in slugs {
        xml.push_str(&format!(
            "  <url><loc>{}/explanation/{}</loc><changefreq>monthly</changefreq><priority>0.8</priority></url>\n",
            base,
            escape_markup(slug.as_ref())
        ));
    }
    xml.push_str("</urlset>");
    xml
}

/// Escape the five XML/HTML special characters
pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots() {
        let robots = robots_txt("http://example.com/");
        assert!(robots.contains("Disallow: /api/"));
        assert!(robots.ends_with("Sitemap: http://example.com/sitemap.xml\n"));
    }

    #[test]
    fn test_sitemap_one_entry_per_slug_plus_home() {
        let xml = sitemap_xml("http://example.com", &["a-simple", "b-tldr"]);
        assert_eq!(xml.matches("<url>").count(), 3);
        assert!(xml.contains("<loc>http://example.com/</loc>"));
        assert!(xml.contains("<loc>http://example.com/explanation/a-simple</loc>"));
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn test_sitemap_empty_store() {
        let xml = sitemap_xml::<&str>("http://example.com", &[]);
        assert_eq!(xml.matches("<url>").count(), 1);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_markup("a&b<c>"), "a&amp;b&lt;c&gt;");
    }
}
